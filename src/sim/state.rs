//! Game session state
//!
//! One `GameSession` per running game, owned by the host. All mutation goes
//! through the transitions in `tick.rs`; everything here is read access for
//! the renderer.

use glam::DVec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::clock::FlightClock;
use super::flight_data::{FlightDataRow, VectorMarker};
use super::outcome::{Outcome, TargetZone};
use super::splash::Splash;
use super::trajectory::{LaunchParameters, Projectile, TimeSample};
use crate::config::{ConfigError, GameConfig};
use crate::settings::OverlaySettings;

/// Splash drops draw from their own stream so effects never shift pool placement
const EFFECTS_STREAM_SALT: u64 = 0x9E37_79B9_7F4A_7C15;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Aiming: speed and angle can be changed, FIRE is available
    PreLaunch,
    /// Cannonball in the air
    Launched,
    /// Landed in the pool
    Success,
    /// Landed anywhere else
    Fail,
}

impl GamePhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            GamePhase::PreLaunch => "preLaunch",
            GamePhase::Launched => "launched",
            GamePhase::Success => "success",
            GamePhase::Fail => "fail",
        }
    }
}

/// Complete game state (deterministic for a given seed and input sequence).
///
/// Only built through `new`/`with_config`, so the config is always validated.
#[derive(Debug, Clone)]
pub struct GameSession {
    pub(crate) config: GameConfig,
    /// Run seed for reproducibility
    pub(crate) seed: u64,
    pub(crate) phase: GamePhase,
    pub(crate) projectile: Projectile,
    pub(crate) target: TargetZone,
    pub(crate) clock: FlightClock,
    /// Parameters of the current flight (None before FIRE)
    pub(crate) launch: Option<LaunchParameters>,
    /// Set once, on the tick the ball lands
    pub(crate) outcome: Option<Outcome>,
    /// Visual only, not gameplay-affecting
    pub(crate) splash: Splash,
    pub(crate) overlays: OverlaySettings,
    /// Pool placement RNG
    pub(crate) rng: Pcg32,
    /// Splash drop RNG
    pub(crate) effects_rng: Pcg32,
}

impl GameSession {
    /// Create a session with default constants
    pub fn new(seed: u64) -> Self {
        Self::build(GameConfig::default(), seed)
    }

    /// Create a session with custom constants
    pub fn with_config(config: GameConfig, seed: u64) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::build(config, seed))
    }

    fn build(config: GameConfig, seed: u64) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let target = TargetZone::random(&config, &mut rng);
        log::info!(
            "Session seed {}: pool placed {} m from the cannon",
            seed,
            target.displacement_m
        );

        Self {
            seed,
            phase: GamePhase::PreLaunch,
            projectile: Projectile::new(config.launch_origin),
            target,
            clock: FlightClock::new(config.time_step_s),
            launch: None,
            outcome: None,
            splash: Splash::default(),
            overlays: OverlaySettings::default(),
            rng,
            effects_rng: Pcg32::seed_from_u64(seed ^ EFFECTS_STREAM_SALT),
            config,
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn projectile(&self) -> &Projectile {
        &self.projectile
    }

    pub fn position(&self) -> DVec2 {
        self.projectile.position()
    }

    pub fn velocity(&self) -> DVec2 {
        self.projectile.velocity()
    }

    /// The five phase samples of the current flight (empty before FIRE)
    pub fn time_samples(&self) -> &[TimeSample] {
        &self.projectile.samples
    }

    pub fn target(&self) -> &TargetZone {
        &self.target
    }

    pub fn clock(&self) -> &FlightClock {
        &self.clock
    }

    pub fn launch(&self) -> Option<LaunchParameters> {
        self.launch
    }

    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    pub fn splash(&self) -> &Splash {
        &self.splash
    }

    pub fn overlays(&self) -> OverlaySettings {
        self.overlays
    }

    /// Flight Data rows for samples the flight has reached so far
    pub fn flight_data(&self) -> Vec<FlightDataRow> {
        self.projectile
            .revealed_samples()
            .map(|(i, sample)| {
                FlightDataRow::from_sample(
                    i,
                    sample,
                    self.projectile.initial_position,
                    self.config.pixels_per_meter,
                )
            })
            .collect()
    }

    /// Velocity arrows for samples the flight has reached so far
    pub fn vector_markers(&self) -> Vec<VectorMarker> {
        self.projectile
            .revealed_samples()
            .map(|(i, sample)| VectorMarker::from_sample(i, sample))
            .collect()
    }
}
