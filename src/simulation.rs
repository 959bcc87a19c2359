//! Owns a cloth, its display mesh and the fixed-step driver.

use crate::config::{SimulationConfig, SoftBodyConfig};
use crate::error::PhysicsError;
use crate::input::DragInput;
use crate::mesh::{LatticeMesh, PositionSink};
use crate::observer::StepObserver;
use crate::soft_body::SoftBody;
use crate::timestep::FixedTimestep;
use crate::vec::Planar;

/// Everything one running cloth needs, passed explicitly to whoever drives
/// or draws it.
pub struct Simulation<V: Planar> {
    body: SoftBody<V>,
    mesh: LatticeMesh<V>,
    timestep: FixedTimestep<V::Scalar>,
    drag_magnitude: V::Scalar,
    steps_taken: u64,
    diverged: bool,
}

impl<V: Planar> Simulation<V> {
    pub fn new(
        body_config: &SoftBodyConfig<V::Scalar>,
        config: &SimulationConfig<V::Scalar>,
    ) -> Result<Self, PhysicsError> {
        config.validate()?;
        let body = SoftBody::new(body_config)?;
        let timestep = FixedTimestep::from_config(config)?;

        let mut mesh = LatticeMesh::new(body.rows(), body.cols());
        for (idx, b) in body.bodies().iter().enumerate() {
            mesh.set_position(idx, b.position);
        }

        tracing::debug!(
            bodies = body.body_count(),
            quads = mesh.quad_count(),
            physics_step = ?config.physics_step,
            "simulation ready"
        );

        Ok(Simulation {
            body,
            mesh,
            timestep,
            drag_magnitude: config.drag_magnitude,
            steps_taken: 0,
            diverged: false,
        })
    }

    /// Feed one frame's elapsed time and input. Runs as many fixed steps as
    /// the accumulator allows and returns that count. The drag force is
    /// sampled once per frame and applied on every step of it.
    pub fn update<O: StepObserver>(
        &mut self,
        frame_delta: V::Scalar,
        input: DragInput,
        observer: &mut O,
    ) -> usize {
        let steps = self.timestep.advance(frame_delta);
        for _ in 0..steps {
            self.step(input, observer);
        }
        tracing::trace!(steps, total = self.steps_taken, "frame advanced");
        steps
    }

    /// Run exactly one physics step of the configured fixed size.
    pub fn step<O: StepObserver>(&mut self, input: DragInput, observer: &mut O) {
        let external_force: V = input.force(self.drag_magnitude);
        self.body
            .step(self.timestep.step(), external_force, &mut self.mesh, observer);
        self.steps_taken += 1;

        if !self.diverged && !self.body.is_finite() {
            self.diverged = true;
            tracing::warn!(
                step = self.steps_taken,
                "cloth state is no longer finite; lower the coefficient or the physics step"
            );
        }
    }

    pub fn soft_body(&self) -> &SoftBody<V> {
        &self.body
    }

    pub fn soft_body_mut(&mut self) -> &mut SoftBody<V> {
        &mut self.body
    }

    pub fn mesh(&self) -> &LatticeMesh<V> {
        &self.mesh
    }

    pub fn physics_step(&self) -> V::Scalar {
        self.timestep.step()
    }

    pub fn steps_taken(&self) -> u64 {
        self.steps_taken
    }

    pub fn has_diverged(&self) -> bool {
        self.diverged
    }
}
