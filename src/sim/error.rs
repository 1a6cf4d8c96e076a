use thiserror::Error;

use super::kinematics::KinematicsError;
use super::state::GamePhase;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SimError {
    #[error("{field} {value} is outside [{min}, {max}]")]
    Validation {
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("cannot {action} while {phase:?}")]
    InvalidTransition {
        action: &'static str,
        phase: GamePhase,
    },

    #[error("kinematics error: {0}")]
    Kinematics(#[from] KinematicsError),
}

impl SimError {
    /// Validation errors come from user input; the rest mean the host drove
    /// the session incorrectly.
    pub fn is_user_error(&self) -> bool {
        matches!(self, SimError::Validation { .. })
    }
}
