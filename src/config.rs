use log::Level;

use crate::motion::SpringConfig;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug  // Verbose layout logging when running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

/// Spring driving the horizontal shift of the content track.
pub const TRACK_SPRING: SpringConfig = SpringConfig {
    stiffness: 100.0,
    damping: 30.0,
    mass: 1.0,
    rest_delta: 0.5,
    rest_speed: 2.0,
};

/// Scroll offset (px) after which the header gets its backdrop.
pub const NAV_SCROLLED_THRESHOLD: f64 = 50.0;

pub const MENU_FADE_MS: u32 = 300;

pub const CONTACT_EMAIL: &str = "contact@studioarch.com";
pub const CONTACT_SUBJECT: &str = "Projet d'architecture";
