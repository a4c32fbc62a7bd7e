//! Mechanical energy of the pendulum.

use oscil_model::{Params, State};

/// Kinetic energy: 0.5·m·(L·ω)².
pub fn kinetic_energy(params: &Params, state: &State) -> f64 {
    let v = params.length * state.angular_velocity;
    0.5 * params.mass * v * v
}

/// Gravitational potential energy, measured from the rest position.
///
/// Uses the exact form m·g·L·(1 − cos θ) in nonlinear mode and the quadratic
/// small-angle form 0.5·m·g·L·θ² in linearized mode, so that energy stays
/// consistent with whichever restoring term drives the motion.
pub fn potential_energy(params: &Params, state: &State) -> f64 {
    let mgl = params.mass * params.gravity * params.length;
    if params.nonlinear {
        mgl * (1.0 - state.angle.cos())
    } else {
        0.5 * mgl * state.angle * state.angle
    }
}

/// Total mechanical energy (kinetic + potential).
pub fn total_energy(params: &Params, state: &State) -> f64 {
    kinetic_energy(params, state) + potential_energy(params, state)
}
