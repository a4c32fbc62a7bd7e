//! Physical configuration of the pendulum.

use crate::STANDARD_GRAVITY;
use serde::{Deserialize, Serialize};

/// Static physical parameters.
///
/// The simulation reads these fresh on every dynamics evaluation, so external
/// edits (UI sliders, optimizers) take effect on the very next step. Callers
/// must keep `length` and `gravity` strictly positive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Params {
    /// Rod length (m).
    pub length: f64,
    /// Bob mass (kg).
    pub mass: f64,
    /// Gravitational acceleration (m/s²).
    pub gravity: f64,
    /// Damping coefficient β (1/s); only applied while `damping_enabled`.
    pub damping: f64,
    /// Use the true `sin θ` restoring term instead of the small-angle `θ`.
    pub nonlinear: bool,
    /// Gate for the damping term.
    pub damping_enabled: bool,
}

impl Params {
    /// Damping coefficient actually applied by the dynamics: β while
    /// damping is enabled, zero otherwise.
    pub fn effective_damping(&self) -> f64 {
        if self.damping_enabled {
            self.damping
        } else {
            0.0
        }
    }

    /// Start building a parameter set from the defaults.
    pub fn builder() -> ParamsBuilder {
        ParamsBuilder::new()
    }
}

impl Default for Params {
    fn default() -> Self {
        ParamsBuilder::new().build()
    }
}

/// Builder for parameter sets.
pub struct ParamsBuilder {
    params: Params,
}

impl ParamsBuilder {
    /// Start from the defaults: 1 m rod, 1 kg bob, standard gravity,
    /// β = 0.5 with damping disabled, nonlinear restoring force.
    pub fn new() -> Self {
        Self {
            params: Params {
                length: 1.0,
                mass: 1.0,
                gravity: STANDARD_GRAVITY,
                damping: 0.5,
                nonlinear: true,
                damping_enabled: false,
            },
        }
    }

    /// Set the rod length (m).
    pub fn length(mut self, length: f64) -> Self {
        self.params.length = length;
        self
    }

    /// Set the bob mass (kg).
    pub fn mass(mut self, mass: f64) -> Self {
        self.params.mass = mass;
        self
    }

    /// Set the gravitational acceleration (m/s²).
    pub fn gravity(mut self, gravity: f64) -> Self {
        self.params.gravity = gravity;
        self
    }

    /// Set the damping coefficient β (1/s).
    pub fn damping(mut self, damping: f64) -> Self {
        self.params.damping = damping;
        self
    }

    /// Choose between the `sin θ` restoring term and its linearization.
    pub fn nonlinear(mut self, nonlinear: bool) -> Self {
        self.params.nonlinear = nonlinear;
        self
    }

    /// Enable or disable the damping term.
    pub fn damping_enabled(mut self, enabled: bool) -> Self {
        self.params.damping_enabled = enabled;
        self
    }

    /// Build the parameter set.
    pub fn build(self) -> Params {
        self.params
    }
}

impl Default for ParamsBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults() {
        let params = Params::default();
        assert_eq!(params.length, 1.0);
        assert_eq!(params.mass, 1.0);
        assert_eq!(params.gravity, STANDARD_GRAVITY);
        assert!(params.nonlinear);
        assert!(!params.damping_enabled);
    }

    #[test]
    fn test_builder_overrides() {
        let params = Params::builder()
            .length(2.5)
            .mass(0.3)
            .gravity(1.62)
            .damping(0.15)
            .nonlinear(false)
            .damping_enabled(true)
            .build();
        assert_eq!(params.length, 2.5);
        assert_eq!(params.mass, 0.3);
        assert_eq!(params.gravity, 1.62);
        assert_eq!(params.damping, 0.15);
        assert!(!params.nonlinear);
        assert!(params.damping_enabled);
    }

    #[test]
    fn test_effective_damping_gated_by_toggle() {
        let mut params = Params::builder().damping(0.4).build();
        assert_eq!(params.effective_damping(), 0.0);

        params.damping_enabled = true;
        assert_eq!(params.effective_damping(), 0.4);
    }
}
