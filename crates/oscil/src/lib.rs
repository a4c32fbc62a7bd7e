//! oscil — interactive damped-pendulum simulation core.
//!
//! This is the umbrella crate that provides the `Solver` and `Simulation`
//! types and re-exports the member crates: parameters and state
//! (`oscil-model`), forward dynamics and energy (`oscil-dynamics`), the
//! rolling trajectory buffer (`oscil-trace`), and period measurement
//! (`oscil-measure`).
//!
//! Rendering, sliders, drag interaction, and file download UI are external
//! collaborators: they read the accessors exposed here and drive the
//! mutators (`reset`, `override_state`, `step`/`tick`).

pub use oscil_dynamics::{
    self, angular_acceleration, kinetic_energy, natural_frequency, natural_period,
    potential_energy, total_energy,
};
pub use oscil_measure::{self, PeriodDetector};
pub use oscil_model::{self, Params, ParamsBuilder, State, deg_to_rad, rad_to_deg};
pub use oscil_trace::{self, Sample, TraceBuffer};

use tracing::debug;

/// Fixed integration step (s): the simulation advances at 120 Hz. Not a
/// parameter; collaborators that want slower real-time playback throttle
/// their tick rate instead.
pub const DT: f64 = 1.0 / 120.0;

/// Pluggable integrator trait.
pub trait Solver {
    /// Advance state by `dt`. Reads parameters fresh and writes the result
    /// back; time advances by exactly `dt`, unconditionally.
    fn step(&self, params: &Params, state: &mut State, dt: f64);
}

/// Classical 4-stage, 4th-order explicit Runge-Kutta integrator over the
/// first-order system θ' = ω, ω' = accel(θ, ω).
pub struct Rk4Solver;

impl Rk4Solver {
    /// Evaluate derivatives: (θ, ω) → (dθ/dt, dω/dt) = (ω, accel(θ, ω)).
    fn derivatives(angle: f64, angular_velocity: f64, params: &Params) -> (f64, f64) {
        (
            angular_velocity,
            angular_acceleration(angle, angular_velocity, params),
        )
    }
}

impl Solver for Rk4Solver {
    fn step(&self, params: &Params, state: &mut State, dt: f64) {
        let th = state.angle;
        let om = state.angular_velocity;

        // k1 from the current state
        let (k1_th, k1_om) = Self::derivatives(th, om, params);

        // k2, k3 from the state advanced by dt/2 along k1, k2
        let (k2_th, k2_om) =
            Self::derivatives(th + 0.5 * dt * k1_th, om + 0.5 * dt * k1_om, params);
        let (k3_th, k3_om) =
            Self::derivatives(th + 0.5 * dt * k2_th, om + 0.5 * dt * k2_om, params);

        // k4 from the state advanced by dt along k3
        let (k4_th, k4_om) = Self::derivatives(th + dt * k3_th, om + dt * k3_om, params);

        // Combine with 1/6, 2/6, 2/6, 1/6 weights
        state.angle = th + (dt / 6.0) * (k1_th + 2.0 * k2_th + 2.0 * k3_th + k4_th);
        state.angular_velocity = om + (dt / 6.0) * (k1_om + 2.0 * k2_om + 2.0 * k3_om + k4_om);
        state.time += dt;
    }
}

/// Simulation context: one pendulum's state, trajectory history, and period
/// measurements, owned by the caller.
///
/// Parameters are passed in by reference on every call rather than stored,
/// so external edits are picked up on the very next step. All mutation goes
/// through this type; there are no module-level globals, and independent
/// instances do not interact.
pub struct Simulation {
    solver: Box<dyn Solver>,
    state: State,
    trace: TraceBuffer,
    detector: PeriodDetector,
}

impl Simulation {
    /// Create a simulation at rest at `initial_angle` (rad), with the RK4
    /// solver and a trace seeded with the initial sample.
    pub fn new(params: &Params, initial_angle: f64) -> Self {
        Self::with_solver(Box::new(Rk4Solver), params, initial_angle)
    }

    /// Create a simulation with a custom solver.
    pub fn with_solver(solver: Box<dyn Solver>, params: &Params, initial_angle: f64) -> Self {
        let mut sim = Self {
            solver,
            state: State::new(initial_angle),
            trace: TraceBuffer::new(),
            detector: PeriodDetector::new(),
        };
        sim.reset(params, initial_angle);
        sim
    }

    /// Reinitialize to rest at `initial_angle` (rad): t = 0, ω = 0, the
    /// trace reduced to a single sample at that state, and all period
    /// measurements cleared.
    pub fn reset(&mut self, params: &Params, initial_angle: f64) {
        self.state = State::new(initial_angle);
        self.detector.reset();
        self.trace.reset_to(Sample {
            time: 0.0,
            angle: initial_angle,
            angular_velocity: 0.0,
            angular_acceleration: angular_acceleration(initial_angle, 0.0, params),
        });
        debug!(angle = initial_angle, "simulation reset");
    }

    /// Advance exactly one integrator step, record the resulting sample, and
    /// feed the transition to the period detector.
    pub fn step(&mut self, params: &Params) {
        let previous_angle = self.state.angle;
        self.solver.step(params, &mut self.state, DT);

        let acceleration =
            angular_acceleration(self.state.angle, self.state.angular_velocity, params);
        self.trace.push(Sample {
            time: self.state.time,
            angle: self.state.angle,
            angular_velocity: self.state.angular_velocity,
            angular_acceleration: acceleration,
        });

        if let Some(period) = self.detector.observe(
            previous_angle,
            self.state.angle,
            self.state.angular_velocity,
            self.state.time,
        ) {
            debug!(
                period,
                cycles = self.detector.cycle_count(),
                "period measurement accepted"
            );
        }
    }

    /// Frame-driven entry point: advance at most one step, and only while
    /// `running` is set and no drag override is active. Returns whether a
    /// step was taken. No catch-up is performed when ticks arrive slower
    /// than 120 Hz; real-time rate simply tracks the frame rate.
    pub fn tick(&mut self, params: &Params, running: bool, dragging: bool) -> bool {
        if running && !dragging {
            self.step(params);
            true
        } else {
            false
        }
    }

    /// Force angle and angular velocity without advancing time, touching the
    /// trace, or resetting measurement history. Drag interaction writes
    /// through here; the integrator itself never special-cases a forced
    /// state.
    pub fn override_state(&mut self, angle: f64, angular_velocity: f64) {
        self.state.angle = angle;
        self.state.angular_velocity = angular_velocity;
    }

    /// Clear only the period measurements.
    pub fn reset_measurement(&mut self) {
        self.detector.reset();
        debug!("period measurement cleared");
    }

    /// Current simulation time (s).
    pub fn time(&self) -> f64 {
        self.state.time
    }

    /// Current angle (rad).
    pub fn angle(&self) -> f64 {
        self.state.angle
    }

    /// Current angular velocity (rad/s).
    pub fn angular_velocity(&self) -> f64 {
        self.state.angular_velocity
    }

    /// Angular acceleration at the current state (rad/s²).
    pub fn angular_acceleration(&self, params: &Params) -> f64 {
        angular_acceleration(self.state.angle, self.state.angular_velocity, params)
    }

    /// Total mechanical energy at the current state (J).
    pub fn energy(&self, params: &Params) -> f64 {
        total_energy(params, &self.state)
    }

    /// The current state.
    pub fn state(&self) -> &State {
        &self.state
    }

    /// The retained trajectory window.
    pub fn trace(&self) -> &TraceBuffer {
        &self.trace
    }

    /// Most recent accepted period (s), if any cycle has completed.
    pub fn measured_period(&self) -> Option<f64> {
        self.detector.measured_period()
    }

    /// Rolling-average period (s) over the last accepted measurements.
    pub fn average_period(&self) -> Option<f64> {
        self.detector.average_period()
    }

    /// Full cycles counted since the last measurement reset.
    pub fn cycle_count(&self) -> u64 {
        self.detector.cycle_count()
    }
}
