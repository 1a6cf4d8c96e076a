//! Cannonball Pool - projectile motion classroom game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (kinematics, flight clock, game phases)
//! - `config`: Environment constants loaded from JSON
//! - `settings`: Overlay toggles (flight data table, velocity vectors)
//!
//! Rendering lives outside this crate; a renderer only reads `sim::GameSession`.

pub mod config;
pub mod settings;
pub mod sim;

pub use config::{ConfigError, GameConfig};
pub use settings::{Overlay, OverlaySettings};

use glam::DVec2;

/// Game configuration constants (defaults for `GameConfig`)
pub mod consts {
    /// Simulated seconds per tick. Tuned so the animation looks smooth at ~60 fps.
    pub const TIME_STEP_S: f64 = 0.0171;

    /// Every 16 pixels of screen space map to 1 meter
    pub const PIXELS_PER_METER: f64 = 16.0;
    /// Gravity (m/s²), positive because screen y grows downward
    pub const GRAVITY_MPS2: f64 = 9.8;

    /// Cannon muzzle and launch point (pixels)
    pub const LAUNCH_X: f64 = 50.0;
    pub const LAUNCH_Y: f64 = 339.0;

    /// Velocity slider bounds (m/s)
    pub const MIN_SPEED_MPS: f64 = 15.0;
    pub const MAX_SPEED_MPS: f64 = 20.0;
    /// Angle lever bounds (degrees, negative is above the horizon)
    pub const MIN_ANGLE_DEG: f64 = -90.0;
    pub const MAX_ANGLE_DEG: f64 = 0.0;
    /// Lever position when the program starts
    pub const STARTING_ANGLE_DEG: f64 = -38.0;

    /// Pool dimensions (pixels)
    pub const POOL_WIDTH: f64 = 42.0;
    /// Shrinks both edges of the pool so the game is not too easy
    pub const POOL_MARGIN: f64 = 10.0;
    /// Pool surface sits a little below the launch height
    pub const POOL_SURFACE_OFFSET: f64 = 6.0;
    /// Pool distance from the cannon is drawn from this range (meters)
    pub const MIN_POOL_DISTANCE_M: f64 = 10.0;
    pub const MAX_POOL_DISTANCE_M: f64 = 25.0;

    /// Record a trail point every N ticks
    pub const TRAIL_INTERVAL_TICKS: u64 = 5;
}

/// Round to a fixed number of decimal places
#[inline]
pub fn round_to_decimal(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}

/// Internal angles grow clockwise (screen y points down); classroom angles
/// grow counter-clockwise. Every displayed angle goes through here.
#[inline]
pub fn display_angle_degrees(internal_deg: f64) -> f64 {
    -internal_deg
}

/// Heading of a vector in degrees, in the internal (screen) convention
#[inline]
pub fn heading_degrees(v: DVec2) -> f64 {
    v.y.atan2(v.x).to_degrees()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_to_decimal() {
        assert_eq!(round_to_decimal(2.19876, 2), 2.2);
        assert_eq!(round_to_decimal(-10.76, 1), -10.8);
        assert_eq!(round_to_decimal(13.0, 1), 13.0);
    }

    #[test]
    fn test_display_angle_flips_sign() {
        assert_eq!(display_angle_degrees(-38.0), 38.0);
        assert_eq!(display_angle_degrees(0.0), 0.0);
    }

    #[test]
    fn test_heading_degrees() {
        assert!((heading_degrees(DVec2::new(1.0, -1.0)) + 45.0).abs() < 1e-9);
        assert!(heading_degrees(DVec2::new(1.0, 0.0)).abs() < 1e-9);
    }
}
