//! Empirical oscillation-period measurement.
//!
//! `PeriodDetector` watches successive integrator states for upward
//! equilibrium crossings (angle going from negative to non-negative with
//! positive angular velocity) and derives the elapsed time between crossings
//! as the measured period. Counting only the positive-velocity crossing
//! yields exactly one detection per full period.

use std::collections::VecDeque;

/// Shortest believable period (s); anything faster is numerical jitter
/// double-triggering within a step.
pub const MIN_PERIOD: f64 = 0.1;

/// Longest believable period (s); anything slower is a stale first-crossing
/// artifact after a pause or reset.
pub const MAX_PERIOD: f64 = 20.0;

/// Number of accepted periods kept for the rolling average.
pub const PERIOD_WINDOW: usize = 10;

/// Zero-crossing period detector.
#[derive(Debug, Clone, Default)]
pub struct PeriodDetector {
    /// Time of the last upward equilibrium crossing (valid or not).
    last_crossing: Option<f64>,
    /// Most recent accepted measurement.
    measured: Option<f64>,
    /// FIFO of the most recent accepted measurements, oldest first.
    periods: VecDeque<f64>,
    /// Full cycles counted since the last reset.
    cycles: u64,
}

impl PeriodDetector {
    /// Create an idle detector with no crossing history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one integrator transition.
    ///
    /// Call once per step with the pre-step angle and the post-step angle,
    /// velocity, and time. Returns the newly accepted period when this
    /// transition completes a plausible cycle, `None` otherwise. The crossing
    /// time is recorded even when the interval is rejected, so the next cycle
    /// is measured against the freshest reference point.
    pub fn observe(
        &mut self,
        previous_angle: f64,
        angle: f64,
        angular_velocity: f64,
        time: f64,
    ) -> Option<f64> {
        if !(previous_angle < 0.0 && angle >= 0.0 && angular_velocity > 0.0) {
            return None;
        }

        let mut accepted = None;
        if let Some(last) = self.last_crossing {
            let period = time - last;
            if period > MIN_PERIOD && period < MAX_PERIOD {
                self.measured = Some(period);
                self.periods.push_back(period);
                if self.periods.len() > PERIOD_WINDOW {
                    self.periods.pop_front();
                }
                self.cycles += 1;
                accepted = Some(period);
            }
        }
        self.last_crossing = Some(time);
        accepted
    }

    /// Clear all measurement state.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Most recent accepted period (s), if any cycle has completed.
    pub fn measured_period(&self) -> Option<f64> {
        self.measured
    }

    /// Mean of the rolling window of accepted periods (s).
    pub fn average_period(&self) -> Option<f64> {
        if self.periods.is_empty() {
            None
        } else {
            Some(self.periods.iter().sum::<f64>() / self.periods.len() as f64)
        }
    }

    /// Number of full cycles counted since the last reset.
    pub fn cycle_count(&self) -> u64 {
        self.cycles
    }

    /// Time of the last observed crossing (s), accepted or not.
    pub fn last_crossing_time(&self) -> Option<f64> {
        self.last_crossing
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_first_crossing_only_seeds() {
        let mut detector = PeriodDetector::new();
        assert_eq!(detector.observe(-0.01, 0.02, 0.5, 2.0), None);
        assert_eq!(detector.measured_period(), None);
        assert_eq!(detector.cycle_count(), 0);
        assert_eq!(detector.last_crossing_time(), Some(2.0));
    }

    #[test]
    fn test_second_crossing_measures() {
        let mut detector = PeriodDetector::new();
        detector.observe(-0.01, 0.02, 0.5, 2.0);
        let accepted = detector.observe(-0.01, 0.02, 0.5, 4.0);
        assert_eq!(accepted, Some(2.0));
        assert_eq!(detector.measured_period(), Some(2.0));
        assert_eq!(detector.cycle_count(), 1);
        assert_eq!(detector.average_period(), Some(2.0));
    }

    #[test]
    fn test_downward_crossing_ignored() {
        let mut detector = PeriodDetector::new();
        // Angle falling through zero, or rising with non-positive velocity:
        // neither counts as a crossing.
        assert_eq!(detector.observe(0.01, -0.02, -0.5, 1.0), None);
        assert_eq!(detector.observe(-0.01, 0.02, 0.0, 1.5), None);
        assert_eq!(detector.observe(-0.01, 0.02, -0.1, 1.8), None);
        assert_eq!(detector.last_crossing_time(), None);
    }

    #[test]
    fn test_boundary_angle_counts_as_crossing() {
        // newAngle == 0 satisfies the ≥ 0 side of the rule.
        let mut detector = PeriodDetector::new();
        assert_eq!(detector.observe(-0.01, 0.0, 0.5, 1.0), None);
        assert_eq!(detector.last_crossing_time(), Some(1.0));
    }

    #[test]
    fn test_short_interval_rejected_but_reference_moves() {
        let mut detector = PeriodDetector::new();
        detector.observe(-0.01, 0.02, 0.5, 2.0);

        // 0.05 s is below MIN_PERIOD: no measurement, no cycle, but the
        // reference point still advances.
        assert_eq!(detector.observe(-0.01, 0.02, 0.5, 2.05), None);
        assert_eq!(detector.measured_period(), None);
        assert_eq!(detector.cycle_count(), 0);
        assert_eq!(detector.last_crossing_time(), Some(2.05));

        // The next cycle is measured from the rejected crossing.
        assert_eq!(detector.observe(-0.01, 0.02, 0.5, 4.05), Some(2.0));
        assert_eq!(detector.cycle_count(), 1);
    }

    #[test]
    fn test_overlong_interval_rejected() {
        let mut detector = PeriodDetector::new();
        detector.observe(-0.01, 0.02, 0.5, 1.0);
        assert_eq!(detector.observe(-0.01, 0.02, 0.5, 25.0), None);
        assert_eq!(detector.cycle_count(), 0);
        assert_eq!(detector.last_crossing_time(), Some(25.0));
    }

    #[test]
    fn test_rolling_window_is_bounded() {
        let mut detector = PeriodDetector::new();
        let mut t = 0.0;
        detector.observe(-0.01, 0.02, 0.5, t);
        // 12 accepted cycles with growing periods 1.00, 1.01, ... 1.11.
        for i in 0..12 {
            t += 1.0 + 0.01 * i as f64;
            assert!(detector.observe(-0.01, 0.02, 0.5, t).is_some());
        }
        assert_eq!(detector.cycle_count(), 12);

        // Average covers only the last 10: periods 1.02 ..= 1.11.
        let expected: f64 = (0..10).map(|i| 1.02 + 0.01 * i as f64).sum::<f64>() / 10.0;
        assert_relative_eq!(
            detector.average_period().unwrap(),
            expected,
            epsilon = 1e-9
        );
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut detector = PeriodDetector::new();
        detector.observe(-0.01, 0.02, 0.5, 2.0);
        detector.observe(-0.01, 0.02, 0.5, 4.0);
        detector.reset();
        assert_eq!(detector.measured_period(), None);
        assert_eq!(detector.average_period(), None);
        assert_eq!(detector.cycle_count(), 0);
        assert_eq!(detector.last_crossing_time(), None);
    }
}
