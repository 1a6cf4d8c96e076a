//! Closed-form projectile trajectory
//!
//! Position and velocity are always evaluated from the launch conditions at
//! the absolute elapsed time, never integrated step by step, so the flight
//! does not drift regardless of how many ticks it takes.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use super::kinematics::{
    KinematicsError, displacement, final_velocity, time_of_flight, vector_components,
};
use crate::config::GameConfig;

/// Number of phase samples recorded at fire time
pub const SAMPLE_COUNT: usize = 5;
/// Index of the apex sample (half of the flight)
pub const APEX_SAMPLE: usize = 2;

/// Launch speed and barrel angle as set on the controls
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LaunchParameters {
    pub speed_mps: f64,
    /// Internal convention: negative is above the horizon
    pub angle_deg: f64,
}

/// Everything the simulation needs to turn launch parameters into motion
#[derive(Debug, Clone, Copy)]
pub struct Ballistics {
    /// Pixels/s², positive (screen y points down)
    pub gravity: f64,
    pub pixels_per_meter: f64,
    pub origin: DVec2,
}

impl Ballistics {
    pub fn from_config(config: &GameConfig) -> Self {
        Self {
            gravity: config.gravity_px(),
            pixels_per_meter: config.pixels_per_meter,
            origin: config.launch_origin,
        }
    }
}

/// Position and velocity snapshot at a fixed fraction of the flight
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimeSample {
    pub t: f64,
    pub position: DVec2,
    pub velocity: DVec2,
}

/// The cannonball
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Projectile {
    pub initial_position: DVec2,
    pub initial_velocity: DVec2,
    pub position: DVec2,
    pub velocity: DVec2,
    /// Acceleration along y (pixels/s²); x has none in a frictionless world
    pub gravity: f64,
    /// Simulated flight time; zero means not fired
    pub elapsed_s: f64,
    /// Time to come back down to launch height
    pub total_flight_s: f64,
    /// Launch, 1/4, apex, 3/4, landing
    pub samples: Vec<TimeSample>,
    /// Recorded path for drawing the parabola behind the ball
    pub trail: Vec<DVec2>,
    /// Whether the renderer should draw the ball
    pub visible: bool,
}

impl Projectile {
    pub fn new(origin: DVec2) -> Self {
        Self {
            initial_position: origin,
            position: origin,
            ..Default::default()
        }
    }

    /// Set the ball in motion.
    ///
    /// `first_step` is the first positive simulated instant: a fired ball is
    /// never at `elapsed_s == 0`, which is reserved for "not fired".
    pub fn fire(
        &mut self,
        launch: LaunchParameters,
        ballistics: Ballistics,
        first_step: f64,
    ) -> Result<(), KinematicsError> {
        let angle_rad = launch.angle_deg.to_radians();
        let initial_velocity =
            vector_components(launch.speed_mps, angle_rad) * ballistics.pixels_per_meter;
        let gravity = ballistics.gravity;

        // Modeling assumption: no horizontal acceleration and the pool sits on
        // the cannon's baseline, so the ball lands moving at -vy0. A target at
        // a different height needs a real root solve here.
        let total_flight_s = time_of_flight(initial_velocity.y, -initial_velocity.y, gravity)?;

        self.initial_position = ballistics.origin;
        self.initial_velocity = initial_velocity;
        self.position = ballistics.origin;
        self.velocity = initial_velocity;
        self.gravity = gravity;
        self.elapsed_s = first_step;
        self.total_flight_s = total_flight_s;
        self.trail.clear();
        self.visible = true;
        self.samples = (0..SAMPLE_COUNT)
            .map(|i| {
                let t = total_flight_s / (SAMPLE_COUNT - 1) as f64 * i as f64;
                TimeSample {
                    t,
                    position: self.position_at(t),
                    velocity: self.velocity_at(t),
                }
            })
            .collect();

        log::debug!("Expected flight time: {:.4}s", total_flight_s);
        Ok(())
    }

    /// Back to the unfired state at the launch point
    pub fn clear(&mut self) {
        *self = Self::new(self.initial_position);
    }

    #[inline]
    pub fn is_fired(&self) -> bool {
        self.elapsed_s > 0.0
    }

    #[inline]
    pub fn has_landed(&self) -> bool {
        self.is_fired() && self.elapsed_s >= self.total_flight_s
    }

    #[inline]
    pub fn is_in_flight(&self) -> bool {
        self.is_fired() && !self.has_landed()
    }

    /// Move the flight forward by `dt` simulated seconds
    pub fn advance(&mut self, dt: f64) {
        if !self.is_in_flight() {
            return;
        }
        self.elapsed_s += dt;
        self.position = self.position_at(self.elapsed_s);
        self.velocity = self.velocity_at(self.elapsed_s);
    }

    /// Position at time `t` after launch
    pub fn position_at(&self, t: f64) -> DVec2 {
        DVec2::new(
            self.initial_position.x + displacement(self.initial_velocity.x, t, 0.0),
            self.initial_position.y + displacement(self.initial_velocity.y, t, self.gravity),
        )
    }

    /// Velocity at time `t` after launch
    pub fn velocity_at(&self, t: f64) -> DVec2 {
        DVec2::new(
            self.initial_velocity.x,
            final_velocity(self.initial_velocity.y, t, self.gravity),
        )
    }

    #[inline]
    pub fn position(&self) -> DVec2 {
        self.position
    }

    #[inline]
    pub fn velocity(&self) -> DVec2 {
        self.velocity
    }

    /// Append the current position to the trail unless the ball has dropped
    /// below the launch height (it only does so on the final tick).
    pub fn record_trail(&mut self) {
        if self.position.y <= self.initial_position.y {
            self.trail.push(self.position);
        }
    }

    /// Samples whose time the flight has already reached
    pub fn revealed_samples(&self) -> impl Iterator<Item = (usize, &TimeSample)> {
        let elapsed = self.elapsed_s;
        self.samples
            .iter()
            .enumerate()
            .filter(move |(_, sample)| elapsed >= sample.t)
    }
}
