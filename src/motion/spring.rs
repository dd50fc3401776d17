use crate::scroll::frame::MAX_DT;

// Integration sub-step, in seconds.
const SUBSTEP: f64 = 0.001;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpringConfig {
    pub stiffness: f64,
    pub damping: f64,
    pub mass: f64,
    pub rest_delta: f64,
    pub rest_speed: f64,
}

impl Default for SpringConfig {
    fn default() -> Self {
        crate::config::TRACK_SPRING
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Spring {
    config: SpringConfig,
    current: f64,
    target: f64,
    velocity: f64,
}

impl Spring {
    pub fn new(config: SpringConfig) -> Self {
        Self {
            config,
            current: 0.0,
            target: 0.0,
            velocity: 0.0,
        }
    }

    pub fn set_target(&mut self, target: f64) {
        if target.is_finite() {
            self.target = target;
        }
    }

    pub fn is_settled(&self) -> bool {
        self.current == self.target && self.velocity == 0.0
    }

    /// Advance by `dt` seconds, capped at one [`MAX_DT`] frame, and return
    /// the new value.
    pub fn step(&mut self, dt: f64) -> f64 {
        if self.is_settled() || dt.is_nan() || dt <= 0.0 {
            return self.current;
        }

        let SpringConfig { stiffness, damping, mass, .. } = self.config;
        let mass = if mass > 0.0 { mass } else { 1.0 };

        let mut remaining = dt.min(MAX_DT);
        while remaining > 0.0 {
            let h = remaining.min(SUBSTEP);
            let force = -stiffness * (self.current - self.target) - damping * self.velocity;
            self.velocity += force / mass * h;
            self.current += self.velocity * h;
            remaining -= h;
        }

        if (self.target - self.current).abs() < self.config.rest_delta
            && self.velocity.abs() < self.config.rest_speed
        {
            self.current = self.target;
            self.velocity = 0.0;
        }

        self.current
    }
}

impl Default for Spring {
    fn default() -> Self {
        Self::new(SpringConfig::default())
    }
}
