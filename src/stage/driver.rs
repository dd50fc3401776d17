use crate::motion::{MotionMapper, SpringConfig};
use crate::scroll::{FrameClock, StageLayout};

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MotionFrame {
    pub progress: f64,
    pub track_x: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameOutcome {
    // `None` when nothing visible changed.
    pub frame: Option<MotionFrame>,
    pub needs_frame: bool,
}

/// Frame-by-frame state of one mounted stage.
#[derive(Debug, Clone)]
pub struct StageDriver {
    mapper: MotionMapper,
    clock: FrameClock,
    layout: StageLayout,
    published: MotionFrame,
}

impl StageDriver {
    pub fn new(config: SpringConfig) -> Self {
        Self {
            mapper: MotionMapper::new(config),
            clock: FrameClock::default(),
            layout: StageLayout::default(),
            published: MotionFrame::default(),
        }
    }

    pub fn layout(&self) -> StageLayout {
        self.layout
    }

    /// Store a fresh measurement; returns it when it differs from the last.
    pub fn relayout(&mut self, layout: StageLayout) -> Option<StageLayout> {
        if layout == self.layout {
            return None;
        }
        self.layout = layout;
        Some(layout)
    }

    pub fn advance(&mut self, now_ms: f64, progress: f64) -> FrameOutcome {
        let dt = self.clock.tick(now_ms);
        self.mapper.retarget(progress, self.layout.travel);
        let track_x = self.mapper.step(dt);

        let next = MotionFrame { progress, track_x };
        let frame = if next != self.published {
            self.published = next;
            Some(next)
        } else {
            None
        };

        let needs_frame = !self.mapper.is_settled();
        if !needs_frame {
            self.clock.idle();
        }
        FrameOutcome { frame, needs_frame }
    }
}

impl Default for StageDriver {
    fn default() -> Self {
        Self::new(SpringConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scroll::Viewport;

    fn viewport(width: f64) -> Viewport {
        Viewport { width, height: 800.0 }
    }

    fn run_until_settled(driver: &mut StageDriver, start_ms: f64, progress: f64) -> (f64, usize) {
        let mut now = start_ms;
        for frames in 1..2000 {
            now += 16.0;
            if !driver.advance(now, progress).needs_frame {
                return (now, frames);
            }
        }
        panic!("spring never settled");
    }

    #[test]
    fn test_resize_updates_layout_without_scroll() {
        let mut driver = StageDriver::default();
        let first = driver.relayout(StageLayout::new(6000.0, viewport(1000.0))).unwrap();
        assert_eq!(first.travel.get(), 5000.0);
        assert_eq!(first.spacer_height(), 5800.0);

        let resized = driver.relayout(StageLayout::new(7200.0, viewport(1200.0))).unwrap();
        assert_eq!(resized.travel.get(), 6000.0);
        assert_eq!(resized.spacer_height(), 6800.0);
    }

    #[test]
    fn test_unchanged_measurement_is_not_republished() {
        let mut driver = StageDriver::default();
        let layout = StageLayout::new(6000.0, viewport(1000.0));
        assert!(driver.relayout(layout).is_some());
        assert!(driver.relayout(layout).is_none());
        assert_eq!(driver.layout(), layout);
    }

    #[test]
    fn test_track_follows_new_travel_after_resize() {
        let mut driver = StageDriver::default();
        driver.relayout(StageLayout::new(6000.0, viewport(1000.0)));
        let (now, _) = run_until_settled(&mut driver, 0.0, 1.0);

        driver.relayout(StageLayout::new(7200.0, viewport(1200.0)));
        let outcome = driver.advance(now + 16.0, 1.0);
        assert!(outcome.needs_frame);
        run_until_settled(&mut driver, now + 16.0, 1.0);

        let settled = driver.advance(now + 100_000.0, 1.0);
        assert_eq!(settled.frame, None);
        assert!(!settled.needs_frame);
    }

    #[test]
    fn test_settles_at_last_section() {
        let mut driver = StageDriver::default();
        driver.relayout(StageLayout::new(6000.0, viewport(1000.0)));
        let mut last = MotionFrame::default();
        let mut now = 0.0;
        loop {
            now += 16.0;
            let outcome = driver.advance(now, 1.0);
            if let Some(frame) = outcome.frame {
                last = frame;
            }
            if !outcome.needs_frame {
                break;
            }
        }
        assert_eq!(last.track_x, -5000.0);
        assert_eq!(last.progress, 1.0);
    }

    #[test]
    fn test_progress_zero_keeps_first_section_in_view() {
        let mut driver = StageDriver::default();
        driver.relayout(StageLayout::new(6000.0, viewport(1000.0)));
        let outcome = driver.advance(16.0, 0.0);
        assert!(!outcome.needs_frame);
        assert_eq!(outcome.frame, None);
    }

    #[test]
    fn test_progress_change_publishes_even_when_settled() {
        let mut driver = StageDriver::default();
        let outcome = driver.advance(16.0, 0.4);
        assert_eq!(
            outcome.frame,
            Some(MotionFrame {
                progress: 0.4,
                track_x: 0.0
            })
        );
        assert!(!outcome.needs_frame);
    }
}
