//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - Closed-form motion evaluated at absolute time
//! - No rendering or platform dependencies

pub mod clock;
pub mod error;
pub mod flight_data;
pub mod kinematics;
pub mod outcome;
pub mod splash;
pub mod state;
pub mod tick;
pub mod trajectory;

pub use clock::FlightClock;
pub use error::SimError;
pub use flight_data::{COLUMNS, FlightDataRow, VectorMarker, format_table};
pub use kinematics::{
    KinematicsError, displacement, final_velocity, time_of_flight, vector_components,
};
pub use outcome::{Outcome, TargetZone, evaluate};
pub use splash::{DropKind, Splash, WaterDrop};
pub use state::{GamePhase, GameSession};
pub use tick::TickEvent;
pub use trajectory::{
    APEX_SAMPLE, Ballistics, LaunchParameters, Projectile, SAMPLE_COUNT, TimeSample,
};
