//! Pool placement and hit testing

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::config::GameConfig;

/// Result of a finished flight
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    Hit,
    Miss,
}

/// The pool: horizontal interval counted as a successful landing
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TargetZone {
    pub center_x: f64,
    pub half_width: f64,
    /// Distance from the cannon in whole meters (shown under the ground line)
    pub displacement_m: f64,
}

impl TargetZone {
    /// Place the pool a random whole number of meters right of the cannon
    pub fn random<R: Rng>(config: &GameConfig, rng: &mut R) -> Self {
        let range = config.pool_distance_m;
        let unit: f64 = rng.random();
        let displacement_m = (range.min + unit * (range.max - range.min)).round();
        Self::at_distance(config, displacement_m)
    }

    pub fn at_distance(config: &GameConfig, displacement_m: f64) -> Self {
        Self {
            center_x: config.launch_origin.x + displacement_m * config.pixels_per_meter,
            half_width: config.pool_half_width(),
            displacement_m,
        }
    }

    #[inline]
    pub fn left(&self) -> f64 {
        self.center_x - self.half_width
    }

    #[inline]
    pub fn right(&self) -> f64 {
        self.center_x + self.half_width
    }
}

/// Judge a landing x against the pool, with both edges pulled in by `margin`
pub fn evaluate(landing_x: f64, target: &TargetZone, margin: f64) -> Outcome {
    if landing_x >= target.left() + margin && landing_x <= target.right() - margin {
        Outcome::Hit
    } else {
        Outcome::Miss
    }
}
