//! Display values for the Flight Data table and velocity vector overlay
//!
//! Samples are stored in screen units (pixels, y down). Rows here are in
//! meters with classroom signs: up is positive, angles grow counter-clockwise.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use super::trajectory::{APEX_SAMPLE, TimeSample};
use crate::{display_angle_degrees, heading_degrees, round_to_decimal};

/// Column headers with units, in display order
pub const COLUMNS: [(&str, &str); 7] = [
    ("Δt", "(s)"),
    ("vx", "(m/s)"),
    ("vy", "(m/s)"),
    ("v", "(m/s)"),
    ("θ", "(deg)"),
    ("dx", "(m)"),
    ("dy", "(m)"),
];

/// One row of the Flight Data table
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FlightDataRow {
    pub index: usize,
    pub dt_s: f64,
    pub vx_mps: f64,
    pub vy_mps: f64,
    pub speed_mps: f64,
    pub angle_deg: f64,
    pub dx_m: f64,
    pub dy_m: f64,
}

impl FlightDataRow {
    pub fn from_sample(
        index: usize,
        sample: &TimeSample,
        origin: DVec2,
        pixels_per_meter: f64,
    ) -> Self {
        let vel = sample.velocity;
        Self {
            index,
            dt_s: round_to_decimal(sample.t, 2),
            vx_mps: round_to_decimal(vel.x / pixels_per_meter, 1),
            vy_mps: round_to_decimal(-vel.y / pixels_per_meter, 1),
            speed_mps: round_to_decimal(vel.length() / pixels_per_meter, 1),
            angle_deg: round_to_decimal(display_angle_degrees(heading_degrees(vel)), 1),
            dx_m: round_to_decimal((sample.position.x - origin.x) / pixels_per_meter, 1),
            dy_m: round_to_decimal((origin.y - sample.position.y) / pixels_per_meter, 1),
        }
    }

    /// Cells in column order, formatted for a fixed-width table
    pub fn cells(&self) -> [String; 7] {
        [
            format!("{:.2}", self.dt_s),
            format!("{:.1}", self.vx_mps),
            format!("{:.1}", self.vy_mps),
            format!("{:.1}", self.speed_mps),
            format!("{:.1}", self.angle_deg),
            format!("{:.1}", self.dx_m),
            format!("{:.1}", self.dy_m),
        ]
    }
}

/// Velocity arrows drawn at one sample point
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VectorMarker {
    pub index: usize,
    pub position: DVec2,
    pub velocity: DVec2,
    /// At the apex vy is zero and vx equals the vector, so components are skipped
    pub show_components: bool,
}

impl VectorMarker {
    pub fn from_sample(index: usize, sample: &TimeSample) -> Self {
        Self {
            index,
            position: sample.position,
            velocity: sample.velocity,
            show_components: index != APEX_SAMPLE,
        }
    }

    #[inline]
    pub fn x_component(&self) -> DVec2 {
        DVec2::new(self.velocity.x, 0.0)
    }

    #[inline]
    pub fn y_component(&self) -> DVec2 {
        DVec2::new(0.0, self.velocity.y)
    }
}

/// Render the table as text, one header line plus one line per row
pub fn format_table(rows: &[FlightDataRow]) -> String {
    let mut out = String::new();
    for (name, unit) in COLUMNS {
        out.push_str(&format!("{:>8}", format!("{name} {unit}")));
    }
    out.push('\n');
    for row in rows {
        for cell in row.cells() {
            out.push_str(&format!("{cell:>8}"));
        }
        out.push('\n');
    }
    out
}
