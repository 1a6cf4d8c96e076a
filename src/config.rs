//! Environment constants for a game session
//!
//! Defaults come from `crate::consts`. A JSON file may override any subset of
//! fields; missing fields keep their default.

use std::path::Path;

use glam::DVec2;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid config JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid config: {0}")]
    Invalid(String),
}

/// Inclusive numeric range used for the speed slider and angle lever
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub min: f64,
    pub max: f64,
}

impl Bounds {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    #[inline]
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Gravity magnitude (m/s²)
    pub gravity_mps2: f64,
    /// Linear scale from meters to simulation units (pixels)
    pub pixels_per_meter: f64,
    /// Simulated seconds added per tick
    pub time_step_s: f64,
    /// Where the cannonball leaves the barrel (pixels)
    pub launch_origin: DVec2,
    /// Valid launch speeds (m/s)
    pub speed_mps: Bounds,
    /// Valid launch angles (degrees, negative is above the horizon)
    pub angle_deg: Bounds,
    /// Full pool width (pixels)
    pub pool_width: f64,
    /// Shrink applied to both pool edges when judging a hit (pixels)
    pub pool_margin: f64,
    /// Pool surface depth below the launch height (pixels)
    pub pool_surface_offset: f64,
    /// Range the pool distance is drawn from (meters)
    pub pool_distance_m: Bounds,
    /// Ticks between recorded trail points
    pub trail_interval_ticks: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            gravity_mps2: GRAVITY_MPS2,
            pixels_per_meter: PIXELS_PER_METER,
            time_step_s: TIME_STEP_S,
            launch_origin: DVec2::new(LAUNCH_X, LAUNCH_Y),
            speed_mps: Bounds::new(MIN_SPEED_MPS, MAX_SPEED_MPS),
            angle_deg: Bounds::new(MIN_ANGLE_DEG, MAX_ANGLE_DEG),
            pool_width: POOL_WIDTH,
            pool_margin: POOL_MARGIN,
            pool_surface_offset: POOL_SURFACE_OFFSET,
            pool_distance_m: Bounds::new(MIN_POOL_DISTANCE_M, MAX_POOL_DISTANCE_M),
            trail_interval_ticks: TRAIL_INTERVAL_TICKS,
        }
    }
}

impl GameConfig {
    /// Parse and validate a JSON config
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a JSON config file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json_str(&json)?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    pub fn to_json_pretty(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Gravity in simulation units (pixels/s²)
    #[inline]
    pub fn gravity_px(&self) -> f64 {
        self.gravity_mps2 * self.pixels_per_meter
    }

    /// Half of the pool width
    #[inline]
    pub fn pool_half_width(&self) -> f64 {
        self.pool_width / 2.0
    }

    /// Screen y of the pool surface
    #[inline]
    pub fn pool_surface_y(&self) -> f64 {
        self.launch_origin.y + self.pool_surface_offset
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        // Screen y grows downward, so gravity must pull toward +y
        if !self.gravity_mps2.is_finite() || self.gravity_mps2 <= 0.0 {
            return Err(ConfigError::Invalid(format!(
                "gravity must be finite and positive, got {}",
                self.gravity_mps2
            )));
        }
        if !(self.pixels_per_meter > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "pixels_per_meter must be positive, got {}",
                self.pixels_per_meter
            )));
        }
        if !(self.time_step_s > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "time_step_s must be positive, got {}",
                self.time_step_s
            )));
        }
        for (name, bounds) in [
            ("speed_mps", self.speed_mps),
            ("angle_deg", self.angle_deg),
            ("pool_distance_m", self.pool_distance_m),
        ] {
            if !(bounds.min <= bounds.max) {
                return Err(ConfigError::Invalid(format!(
                    "{name} range is inverted: [{}, {}]",
                    bounds.min, bounds.max
                )));
            }
        }
        // Aiming below the horizon would give a negative flight time
        if self.angle_deg.min < -90.0 || self.angle_deg.max > 0.0 {
            return Err(ConfigError::Invalid(format!(
                "angle_deg range [{}, {}] must stay within [-90, 0]",
                self.angle_deg.min, self.angle_deg.max
            )));
        }
        if self.pool_margin < 0.0 || self.pool_margin * 2.0 > self.pool_width {
            return Err(ConfigError::Invalid(format!(
                "pool_margin {} does not fit a pool of width {}",
                self.pool_margin, self.pool_width
            )));
        }
        if self.trail_interval_ticks == 0 {
            return Err(ConfigError::Invalid(
                "trail_interval_ticks must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = GameConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.gravity_px(), 9.8 * 16.0);
        assert_eq!(config.pool_half_width(), 21.0);
        assert_eq!(config.pool_surface_y(), 345.0);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = GameConfig::from_json_str(r#"{ "gravity_mps2": 1.62 }"#).unwrap();
        assert_eq!(config.gravity_mps2, 1.62);
        assert_eq!(config.pixels_per_meter, PIXELS_PER_METER);
        assert_eq!(config.speed_mps, Bounds::new(15.0, 20.0));
    }

    #[test]
    fn test_json_round_trip_keeps_origin() {
        let json = GameConfig::default().to_json_pretty().unwrap();
        let config = GameConfig::from_json_str(&json).unwrap();
        assert_eq!(config.launch_origin, DVec2::new(50.0, 339.0));
    }

    #[test]
    fn test_rejects_zero_gravity() {
        let err = GameConfig::from_json_str(r#"{ "gravity_mps2": 0.0 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn test_rejects_negative_gravity() {
        let config = GameConfig {
            gravity_mps2: -9.8,
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("positive"));
        assert!(GameConfig::from_json_str(r#"{ "gravity_mps2": -1.62 }"#).is_err());
    }

    #[test]
    fn test_rejects_angles_below_horizon() {
        let config = GameConfig {
            angle_deg: Bounds::new(-90.0, 45.0),
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let config = GameConfig {
            angle_deg: Bounds::new(-120.0, 0.0),
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let config = GameConfig {
            angle_deg: Bounds::new(-60.0, -10.0),
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_rejects_inverted_range() {
        let err = GameConfig::from_json_str(r#"{ "speed_mps": { "min": 20.0, "max": 15.0 } }"#)
            .unwrap_err();
        assert!(err.to_string().contains("speed_mps"));
    }

    #[test]
    fn test_rejects_margin_wider_than_pool() {
        let config = GameConfig {
            pool_margin: 30.0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_malformed_json() {
        let err = GameConfig::from_json_str("{ not json").unwrap_err();
        assert!(matches!(err, ConfigError::Json(_)));
    }

    #[test]
    fn test_bounds_inclusive() {
        let bounds = Bounds::new(15.0, 20.0);
        assert!(bounds.contains(15.0));
        assert!(bounds.contains(20.0));
        assert!(!bounds.contains(20.01));
    }
}
