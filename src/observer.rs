//! Step observer trait for monitoring the simulation step.

/// Hooks into the two phases of a soft-body step.
///
/// Implement this to collect diagnostics or drive debug visualisation. All
/// methods default to no-ops.
pub trait StepObserver {
    /// Called once every body's net force has been accumulated, before any
    /// body moves.
    fn on_forces_accumulated(&mut self) {}

    /// Called after each body is integrated, with its row-major index.
    fn on_integrate(&mut self, _index: usize) {}

    /// Called when a simulation step is fully complete.
    fn on_step_complete(&mut self) {}
}

/// A no-op observer. Use as default when no observation needed.
pub struct NoOpStepObserver;

impl StepObserver for NoOpStepObserver {}
