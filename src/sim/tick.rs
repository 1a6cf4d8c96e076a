//! Phase transitions and the fixed timestep tick
//!
//! PreLaunch --fire--> Launched --tick...--> Success | Fail --reset--> PreLaunch

use glam::DVec2;
use serde::{Deserialize, Serialize};

use super::error::SimError;
use super::outcome::{Outcome, TargetZone, evaluate};
use super::state::{GamePhase, GameSession};
use super::trajectory::{Ballistics, LaunchParameters};
use crate::config::Bounds;
use crate::settings::Overlay;

/// What happened during one tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TickEvent {
    /// Still in the air
    InFlight,
    /// Landed this tick; the phase has already changed
    Landed(Outcome),
}

fn check_range(field: &'static str, value: f64, bounds: Bounds) -> Result<(), SimError> {
    if bounds.contains(value) {
        Ok(())
    } else {
        Err(SimError::Validation {
            field,
            value,
            min: bounds.min,
            max: bounds.max,
        })
    }
}

impl GameSession {
    fn require_phase(&self, expected: GamePhase, action: &'static str) -> Result<(), SimError> {
        if self.phase == expected {
            Ok(())
        } else {
            log::warn!("Rejected {} while {}", action, self.phase.as_str());
            Err(SimError::InvalidTransition {
                action,
                phase: self.phase,
            })
        }
    }

    /// FIRE: launch the cannonball. Nothing changes if this returns an error.
    pub fn fire(&mut self, speed_mps: f64, angle_deg: f64) -> Result<(), SimError> {
        self.require_phase(GamePhase::PreLaunch, "fire")?;
        check_range("speed_mps", speed_mps, self.config.speed_mps)?;
        check_range("angle_deg", angle_deg, self.config.angle_deg)?;

        let launch = LaunchParameters {
            speed_mps,
            angle_deg,
        };
        let ballistics = Ballistics::from_config(&self.config);
        self.projectile
            .fire(launch, ballistics, self.config.time_step_s)?;

        // The clock's first tick is the ball's first positive instant
        self.clock.reset();
        self.clock.tick();

        self.launch = Some(launch);
        self.outcome = None;
        self.phase = GamePhase::Launched;
        log::info!(
            "Fired at {} m/s, {}° toward pool at {} m",
            speed_mps,
            crate::display_angle_degrees(angle_deg),
            self.target.displacement_m
        );
        Ok(())
    }

    /// Advance the flight by one fixed step
    pub fn tick(&mut self) -> Result<TickEvent, SimError> {
        self.require_phase(GamePhase::Launched, "tick")?;

        if !self.projectile.has_landed() {
            self.clock.tick();
            self.projectile.advance(self.clock.step());
            if self.clock.ticks() % self.config.trail_interval_ticks == 0 {
                self.projectile.record_trail();
            }
        }

        if !self.projectile.has_landed() {
            return Ok(TickEvent::InFlight);
        }

        let landing = self.projectile.position();
        let outcome = evaluate(landing.x, &self.target, self.config.pool_margin);
        self.outcome = Some(outcome);
        match outcome {
            Outcome::Hit => {
                // Under water
                self.projectile.visible = false;
                self.splash
                    .trigger(DVec2::new(landing.x, self.config.pool_surface_y()));
                self.phase = GamePhase::Success;
            }
            Outcome::Miss => {
                self.phase = GamePhase::Fail;
            }
        }
        log::info!(
            "Landed at x={:.1} after {:.4}s (expected {:.4}s): {:?}",
            landing.x,
            self.projectile.elapsed_s,
            self.projectile.total_flight_s,
            outcome
        );
        Ok(TickEvent::Landed(outcome))
    }

    /// RESET: back to aiming with the pool moved.
    ///
    /// Allowed from any phase; an in-flight ball is simply discarded.
    pub fn reset(&mut self) {
        if self.phase == GamePhase::Launched {
            log::debug!("Reset discarded a flight in progress");
        }
        self.projectile.clear();
        self.clock.reset();
        self.launch = None;
        self.outcome = None;
        self.splash.clear();
        self.target = TargetZone::random(&self.config, &mut self.rng);
        self.phase = GamePhase::PreLaunch;
        log::info!("Reset: pool moved to {} m", self.target.displacement_m);
    }

    /// Animate the splash by one frame. Valid in every phase.
    pub fn advance_effects(&mut self) {
        self.splash.step(&mut self.effects_rng);
    }

    /// Flip an overlay toggle. The toggles are hidden during flight.
    pub fn toggle_overlay(&mut self, overlay: Overlay) -> Result<bool, SimError> {
        if self.phase == GamePhase::Launched {
            return Err(SimError::InvalidTransition {
                action: "toggle overlay",
                phase: self.phase,
            });
        }
        Ok(self.overlays.toggle(overlay))
    }

    /// Tick until the ball lands, returning the outcome
    pub fn run_to_landing(&mut self) -> Result<Outcome, SimError> {
        loop {
            if let TickEvent::Landed(outcome) = self.tick()? {
                return Ok(outcome);
            }
        }
    }
}
