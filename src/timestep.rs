//! Fixed-timestep accumulator decoupling frame rate from physics rate.

use crate::config::SimulationConfig;
use crate::error::PhysicsError;
use crate::float::Float;

/// Converts variable frame deltas into a whole number of fixed physics
/// steps.
///
/// Time is collected until more than one physics step has passed since the
/// last update; that elapsed time is clamped to `max_frame_time` and moved
/// into the accumulator, which then pays out as many full steps as it holds.
/// The clamp keeps a slow frame from demanding ever more catch-up steps.
#[derive(Clone, Debug)]
pub struct FixedTimestep<F: Float> {
    step: F,
    max_frame_time: F,
    since_update: F,
    accumulator: F,
}

impl<F: Float> FixedTimestep<F> {
    pub fn new(step: F, max_frame_time: F) -> Result<Self, PhysicsError> {
        if !step.is_positive_finite() || !max_frame_time.is_positive_finite() {
            return Err(PhysicsError::InvalidTimestep);
        }
        Ok(FixedTimestep {
            step,
            max_frame_time,
            since_update: F::zero(),
            accumulator: F::zero(),
        })
    }

    pub fn from_config(config: &SimulationConfig<F>) -> Result<Self, PhysicsError> {
        Self::new(config.physics_step, config.max_frame_time)
    }

    /// Feed `frame_delta` seconds of wall-clock time and return how many
    /// physics steps of [`FixedTimestep::step`] to run now.
    pub fn advance(&mut self, frame_delta: F) -> usize {
        self.since_update = self.since_update + frame_delta;
        if self.since_update <= self.step {
            return 0;
        }

        let elapsed = self.since_update.min(self.max_frame_time);
        self.since_update = F::zero();
        self.accumulator = self.accumulator + elapsed;

        let mut steps = 0;
        while self.accumulator >= self.step {
            self.accumulator = self.accumulator - self.step;
            steps += 1;
        }
        steps
    }

    pub fn step(&self) -> F {
        self.step
    }

    /// Time already banked toward the next step.
    pub fn accumulator(&self) -> F {
        self.accumulator
    }

    pub fn reset(&mut self) {
        self.since_update = F::zero();
        self.accumulator = F::zero();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn timestep() -> FixedTimestep<f64> {
        FixedTimestep::new(0.012, 0.25).unwrap()
    }

    #[test]
    fn short_frames_wait_for_a_full_step() {
        let mut ts = timestep();
        assert_eq!(ts.advance(0.005), 0);
        assert_eq!(ts.advance(0.005), 0);
        assert_eq!(ts.advance(0.005), 1);
        assert!((ts.accumulator() - 0.003).abs() < 1e-12);
    }

    #[test]
    fn long_frame_pays_out_several_steps() {
        let mut ts = timestep();
        assert_eq!(ts.advance(0.05), 4);
        assert!((ts.accumulator() - 0.002).abs() < 1e-12);
    }

    #[test]
    fn slow_frame_is_clamped() {
        let mut ts = timestep();
        // 1s would be 83 steps; the 0.25 clamp allows 20.
        assert_eq!(ts.advance(1.0), 20);
    }

    #[test]
    fn leftover_carries_into_next_update() {
        let mut ts = timestep();
        assert_eq!(ts.advance(0.02), 1);
        assert_eq!(ts.advance(0.017), 2);
    }

    #[test]
    fn rejects_non_positive_step() {
        assert_eq!(FixedTimestep::new(0.0f32, 0.25).err(), Some(PhysicsError::InvalidTimestep));
    }
}
