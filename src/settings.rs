//! Overlay toggles
//!
//! Two ON/OFF switches shown next to the controls: the Flight Data table and
//! the extra velocity vectors drawn at the five sample points.

use serde::{Deserialize, Serialize};

/// Which overlay a toggle controls
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Overlay {
    FlightData,
    Vectors,
}

impl Overlay {
    pub fn as_str(&self) -> &'static str {
        match self {
            Overlay::FlightData => "Flight Data",
            Overlay::Vectors => "More Vectors",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "flight-data" | "data" => Some(Overlay::FlightData),
            "vectors" | "more-vectors" => Some(Overlay::Vectors),
            _ => None,
        }
    }
}

/// Overlay preferences (both off when the program starts)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OverlaySettings {
    /// Data table: Δt, vx, vy, v, θ, dx, dy per sample
    pub flight_data: bool,
    /// Velocity vectors and components at each revealed sample
    pub vectors: bool,
}

impl OverlaySettings {
    pub fn is_on(&self, overlay: Overlay) -> bool {
        match overlay {
            Overlay::FlightData => self.flight_data,
            Overlay::Vectors => self.vectors,
        }
    }

    /// Flip a toggle, returning its new state
    pub fn toggle(&mut self, overlay: Overlay) -> bool {
        let slot = match overlay {
            Overlay::FlightData => &mut self.flight_data,
            Overlay::Vectors => &mut self.vectors,
        };
        *slot = !*slot;
        *slot
    }
}
