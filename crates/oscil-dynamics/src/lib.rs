//! Forward dynamics for the damped pendulum.
//!
//! The equation of motion is
//!
//! ```text
//! θ'' = -2·β·θ' - (g/L)·restoring(θ)
//! ```
//!
//! where `restoring` is `sin θ` in nonlinear mode or `θ` under the
//! small-angle linearization, and β is the damping coefficient (zero while
//! damping is disabled).

pub mod energy;

pub use energy::{kinetic_energy, potential_energy, total_energy};

use oscil_model::Params;

/// Angular acceleration at the given state (rad/s²).
///
/// Stateless and side-effect free; parameters are read fresh on every call.
/// The caller guarantees `params.length > 0`.
pub fn angular_acceleration(angle: f64, angular_velocity: f64, params: &Params) -> f64 {
    let restoring = if params.nonlinear { angle.sin() } else { angle };
    -2.0 * params.effective_damping() * angular_velocity
        - (params.gravity / params.length) * restoring
}

/// Small-angle analytic period: T = 2π·√(L/g).
pub fn natural_period(params: &Params) -> f64 {
    2.0 * std::f64::consts::PI * (params.length / params.gravity).sqrt()
}

/// Small-angle analytic frequency: f = 1/T.
pub fn natural_frequency(params: &Params) -> f64 {
    1.0 / natural_period(params)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_linear_restoring_is_proportional_to_angle() {
        let params = Params::builder().nonlinear(false).build();
        let accel = angular_acceleration(0.2, 0.0, &params);
        assert_relative_eq!(accel, -(params.gravity / params.length) * 0.2);
    }

    #[test]
    fn test_nonlinear_restoring_uses_sine() {
        let params = Params::default();
        let accel = angular_acceleration(1.0, 0.0, &params);
        assert_relative_eq!(accel, -(params.gravity / params.length) * 1.0_f64.sin());
    }

    #[test]
    fn test_damping_term_opposes_velocity() {
        let params = Params::builder()
            .damping(0.3)
            .damping_enabled(true)
            .build();
        // At θ = 0 only the damping term contributes.
        assert_relative_eq!(angular_acceleration(0.0, 2.0, &params), -2.0 * 0.3 * 2.0);
        assert_relative_eq!(angular_acceleration(0.0, -2.0, &params), 2.0 * 0.3 * 2.0);
    }

    #[test]
    fn test_disabled_damping_drops_out() {
        let params = Params::builder().damping(0.3).build();
        assert_relative_eq!(angular_acceleration(0.0, 2.0, &params), 0.0);
    }

    #[test]
    fn test_natural_period_one_meter() {
        // T = 2π√(1/9.8) ≈ 2.007 s
        let params = Params::default();
        assert_relative_eq!(natural_period(&params), 2.007, epsilon = 1e-3);
        assert_relative_eq!(
            natural_frequency(&params) * natural_period(&params),
            1.0,
            epsilon = 1e-12
        );
    }
}
