//! Parameter set and mutable state for the oscil pendulum simulator.
//!
//! `Params` is the static physical configuration (length, mass, gravity,
//! damping); `State` is the mutable simulation state (angle, angular
//! velocity, time).

pub mod params;
pub mod state;

pub use params::{Params, ParamsBuilder};
pub use state::State;

/// Standard gravity (m/s²) used by the default parameter set.
pub const STANDARD_GRAVITY: f64 = 9.8;

/// Convert degrees to radians.
#[inline]
pub fn deg_to_rad(degrees: f64) -> f64 {
    degrees * std::f64::consts::PI / 180.0
}

/// Convert radians to degrees.
#[inline]
pub fn rad_to_deg(radians: f64) -> f64 {
    radians * 180.0 / std::f64::consts::PI
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_angle_conversions() {
        assert_relative_eq!(deg_to_rad(180.0), std::f64::consts::PI);
        assert_relative_eq!(deg_to_rad(30.0), std::f64::consts::PI / 6.0);
        assert_relative_eq!(rad_to_deg(std::f64::consts::PI / 2.0), 90.0);
        assert_relative_eq!(rad_to_deg(deg_to_rad(37.5)), 37.5, epsilon = 1e-12);
    }
}
