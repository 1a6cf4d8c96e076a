//! Constant-acceleration kinematics
//!
//! Pure 1D formulas applied per axis. Screen y points down, so gravity is a
//! positive acceleration and "up" velocities are negative.

use glam::DVec2;
use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum KinematicsError {
    #[error("time of flight is undefined for zero acceleration")]
    ZeroAcceleration,
}

/// `d = v0*t + a*t²/2`
#[inline]
pub fn displacement(initial_vel: f64, time: f64, accel: f64) -> f64 {
    initial_vel * time + 0.5 * accel * time * time
}

/// `v = v0 + a*t`
#[inline]
pub fn final_velocity(initial_vel: f64, time: f64, accel: f64) -> f64 {
    initial_vel + accel * time
}

/// `Δt = (vf - v0) / a`
pub fn time_of_flight(initial_vel: f64, final_vel: f64, accel: f64) -> Result<f64, KinematicsError> {
    if accel == 0.0 {
        return Err(KinematicsError::ZeroAcceleration);
    }
    Ok((final_vel - initial_vel) / accel)
}

/// Split a magnitude along an angle (radians) into x/y components
#[inline]
pub fn vector_components(magnitude: f64, angle_rad: f64) -> DVec2 {
    DVec2::new(magnitude * angle_rad.cos(), magnitude * angle_rad.sin())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_displacement() {
        assert_eq!(displacement(10.0, 2.0, 0.0), 20.0);
        assert_eq!(displacement(0.0, 2.0, 9.8), 19.6);
        assert_eq!(displacement(-10.0, 2.0, 10.0), 0.0);
    }

    #[test]
    fn test_final_velocity() {
        assert_eq!(final_velocity(-10.0, 1.0, 10.0), 0.0);
        assert_eq!(final_velocity(3.0, 0.0, 10.0), 3.0);
    }

    #[test]
    fn test_time_of_flight_symmetric() {
        let t = time_of_flight(-20.0, 20.0, 10.0).unwrap();
        assert_eq!(t, 4.0);
    }

    #[test]
    fn test_time_of_flight_zero_accel() {
        assert_eq!(
            time_of_flight(1.0, 2.0, 0.0),
            Err(KinematicsError::ZeroAcceleration)
        );
    }

    #[test]
    fn test_vector_components() {
        let v = vector_components(2.0, std::f64::consts::FRAC_PI_2);
        assert!(v.x.abs() < 1e-12);
        assert!((v.y - 2.0).abs() < 1e-12);

        // Negative angles point up the screen
        let v = vector_components(10.0, (-30.0f64).to_radians());
        assert!(v.y < 0.0);
        assert!((v.x - 10.0 * 30.0f64.to_radians().cos()).abs() < 1e-12);
    }
}
