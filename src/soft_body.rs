//! 2D mass-spring soft body (cloth) on a regular grid.

use crate::config::SoftBodyConfig;
use crate::error::PhysicsError;
use crate::float::Float;
use crate::mesh::PositionSink;
use crate::observer::StepObserver;
use crate::rigid_body::RigidBody;
use crate::spring::{Axis, SpringParams};
use crate::vec::{Planar, Vec};
use alloc::vec::Vec as AllocVec;

/// A grid of point masses joined by structural springs.
///
/// Each body is connected to its neighbours above, below, left and right.
/// Bodies are stored row-major in one buffer: `(row, col)` lives at
/// `row * cols + col`. The topology is fixed at construction.
pub struct SoftBody<V: Vec> {
    bodies: AllocVec<RigidBody<V>>,
    rows: usize,
    cols: usize,
    rest_width: V::Scalar,
    rest_height: V::Scalar,
    springs: SpringParams<V::Scalar>,
}

impl<V: Planar> SoftBody<V> {
    /// Build a cloth centred on the origin in the XY plane.
    ///
    /// Rest lengths are `width / subdivisions_x` and `height /
    /// subdivisions_y`; body `(row, col)` starts at
    /// `(-width/2 + rest_width*col, -height/2 + rest_height*row)`, at rest.
    pub fn new(config: &SoftBodyConfig<V::Scalar>) -> Result<Self, PhysicsError> {
        config.validate()?;

        let rows = config.subdivisions_y;
        let cols = config.subdivisions_x;
        let rest_width = config.width / V::Scalar::from_usize(cols);
        let rest_height = config.height / V::Scalar::from_usize(rows);
        let start_x = -config.width * V::Scalar::half();
        let start_y = -config.height * V::Scalar::half();

        let mut bodies = AllocVec::with_capacity(rows * cols);
        for row in 0..rows {
            for col in 0..cols {
                let x = start_x + rest_width * V::Scalar::from_usize(col);
                let y = start_y + rest_height * V::Scalar::from_usize(row);
                bodies.push(RigidBody::at_rest(V::from_planar(x, y), config.body_mass));
            }
        }

        tracing::debug!(
            rows,
            cols,
            rest_width = ?rest_width,
            rest_height = ?rest_height,
            "built soft body"
        );

        Ok(SoftBody {
            bodies,
            rows,
            cols,
            rest_width,
            rest_height,
            springs: SpringParams::new(config.coefficient, config.dampening),
        })
    }
}

impl<V: Vec> SoftBody<V> {
    /// Wrap an existing row-major set of bodies. `bodies.len()` must equal
    /// `rows * cols`.
    pub fn from_bodies(
        rows: usize,
        cols: usize,
        bodies: AllocVec<RigidBody<V>>,
        rest_width: V::Scalar,
        rest_height: V::Scalar,
        springs: SpringParams<V::Scalar>,
    ) -> Result<Self, PhysicsError> {
        if rows == 0 || cols == 0 || bodies.len() != rows * cols {
            return Err(PhysicsError::InvalidGridDimensions);
        }
        Ok(SoftBody { bodies, rows, cols, rest_width, rest_height, springs })
    }

    pub fn index(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }

    pub fn try_index(&self, row: usize, col: usize) -> Result<usize, PhysicsError> {
        if row < self.rows && col < self.cols {
            Ok(self.index(row, col))
        } else {
            Err(PhysicsError::CellOutOfBounds { row, col, rows: self.rows, cols: self.cols })
        }
    }

    pub fn body(&self, row: usize, col: usize) -> &RigidBody<V> {
        &self.bodies[self.index(row, col)]
    }

    pub fn body_mut(&mut self, row: usize, col: usize) -> &mut RigidBody<V> {
        let idx = self.index(row, col);
        &mut self.bodies[idx]
    }

    pub fn try_body(&self, row: usize, col: usize) -> Result<&RigidBody<V>, PhysicsError> {
        self.try_index(row, col).map(|idx| &self.bodies[idx])
    }

    pub fn bodies(&self) -> &[RigidBody<V>] {
        &self.bodies
    }

    /// Queue an impulse on one body; it is applied at the next integration.
    pub fn apply_impulse(&mut self, row: usize, col: usize, impulse: V) {
        self.body_mut(row, col).apply_impulse(impulse);
    }

    /// Neighbours of `(row, col)` in the order above, below, left, right,
    /// with the axis that selects their rest length.
    fn neighbours(&self, row: usize, col: usize) -> [Option<(usize, Axis)>; 4] {
        [
            (row > 0).then(|| (self.index(row - 1, col), Axis::Vertical)),
            (row + 1 < self.rows).then(|| (self.index(row + 1, col), Axis::Vertical)),
            (col > 0).then(|| (self.index(row, col - 1), Axis::Horizontal)),
            (col + 1 < self.cols).then(|| (self.index(row, col + 1), Axis::Horizontal)),
        ]
    }

    fn rest_length(&self, axis: Axis) -> V::Scalar {
        match axis {
            Axis::Horizontal => self.rest_width,
            Axis::Vertical => self.rest_height,
        }
    }

    /// Spring plus damping force on `(row, col)` from its current
    /// neighbours. Damping is added once per neighbour, so an interior body
    /// is damped four times as hard as a lone pair.
    pub fn spring_force_on(&self, row: usize, col: usize) -> V {
        let body = &self.bodies[self.index(row, col)];
        let mut force = V::zero();
        for (neighbour, axis) in self.neighbours(row, col).into_iter().flatten() {
            force = force
                + self.springs.neighbour_force(
                    body.position,
                    body.velocity,
                    self.bodies[neighbour].position,
                    self.rest_length(axis),
                );
        }
        force
    }

    /// Phase A: add every body's spring and damping force to its
    /// accumulator, then add `external_force` to each body in row 0.
    ///
    /// Positions are only read here, so every force sees pre-step state.
    pub fn accumulate_forces(&mut self, external_force: V) {
        for row in 0..self.rows {
            for col in 0..self.cols {
                let force = self.spring_force_on(row, col);
                let idx = self.index(row, col);
                self.bodies[idx].apply_force(force);
            }
        }
        for body in self.bodies[..self.cols].iter_mut() {
            body.apply_force(external_force);
        }
    }

    /// Phase B: integrate every body and publish its new position.
    pub fn integrate<S, O>(&mut self, dt: V::Scalar, sink: &mut S, observer: &mut O)
    where
        S: PositionSink<V> + ?Sized,
        O: StepObserver,
    {
        for (idx, body) in self.bodies.iter_mut().enumerate() {
            body.integrate_linear(dt);
            sink.set_position(idx, body.position);
            observer.on_integrate(idx);
        }
    }

    /// Advance the cloth by `dt`. Callers should pass the same `dt` every
    /// step: stiffness and damping response both depend on it.
    pub fn step<S, O>(&mut self, dt: V::Scalar, external_force: V, sink: &mut S, observer: &mut O)
    where
        S: PositionSink<V> + ?Sized,
        O: StepObserver,
    {
        self.accumulate_forces(external_force);
        observer.on_forces_accumulated();

        self.integrate(dt, sink, observer);
        observer.on_step_complete();
    }

    pub fn positions(&self) -> AllocVec<V> {
        self.bodies.iter().map(|b| b.position).collect()
    }

    pub fn kinetic_energy(&self) -> V::Scalar {
        self.bodies
            .iter()
            .fold(V::Scalar::zero(), |sum, b| sum + b.kinetic_energy())
    }

    /// Elastic energy over every spring, each counted once.
    pub fn spring_energy(&self) -> V::Scalar {
        let mut energy = V::Scalar::zero();
        for row in 0..self.rows {
            for col in 0..self.cols {
                let here = self.bodies[self.index(row, col)].position;
                if row + 1 < self.rows {
                    let below = self.bodies[self.index(row + 1, col)].position;
                    energy = energy + self.springs.energy(here.distance(below), self.rest_height);
                }
                if col + 1 < self.cols {
                    let right = self.bodies[self.index(row, col + 1)].position;
                    energy = energy + self.springs.energy(here.distance(right), self.rest_width);
                }
            }
        }
        energy
    }

    /// `false` once any body has a NaN or infinite position or velocity.
    pub fn is_finite(&self) -> bool {
        self.bodies.iter().all(|b| b.is_finite())
    }

    pub fn rows(&self) -> usize { self.rows }
    pub fn cols(&self) -> usize { self.cols }
    pub fn body_count(&self) -> usize { self.bodies.len() }
    pub fn rest_width(&self) -> V::Scalar { self.rest_width }
    pub fn rest_height(&self) -> V::Scalar { self.rest_height }
    pub fn coefficient(&self) -> V::Scalar { self.springs.coefficient }
    pub fn dampening(&self) -> V::Scalar { self.springs.dampening }
    pub fn springs(&self) -> &SpringParams<V::Scalar> { &self.springs }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mesh::NoOpSink;
    use crate::observer::NoOpStepObserver;
    use crate::vec::Vec3;
    use alloc::vec;

    type V = Vec3<f64>;

    /// Rest length 0.5 on both axes so every coordinate is exact.
    fn at_rest_grid(rows: usize, cols: usize) -> SoftBody<V> {
        let config = SoftBodyConfig::new()
            .with_extent(0.5 * cols as f64, 0.5 * rows as f64)
            .with_subdivisions(cols, rows)
            .with_coefficient(25.0)
            .with_dampening(0.5);
        SoftBody::new(&config).unwrap()
    }

    #[test]
    fn layout_starts_at_negative_half_extent() {
        let body = at_rest_grid(2, 2);
        assert_eq!(body.rest_width(), 0.5);
        assert_eq!(body.rest_height(), 0.5);
        assert_eq!(body.body(0, 0).position, Vec3::new(-0.5, -0.5, 0.0));
        assert_eq!(body.body(0, 1).position, Vec3::new(0.0, -0.5, 0.0));
        assert_eq!(body.body(1, 0).position, Vec3::new(-0.5, 0.0, 0.0));
    }

    #[test]
    fn rejects_empty_grid() {
        let config = SoftBodyConfig::<f64>::new().with_subdivisions(3, 0);
        assert_eq!(
            SoftBody::<V>::new(&config).err(),
            Some(PhysicsError::InvalidGridDimensions)
        );
    }

    #[test]
    fn from_bodies_checks_length() {
        let bodies = vec![RigidBody::at_rest(V::zero(), 1.0); 3];
        let result = SoftBody::from_bodies(2, 2, bodies, 1.0, 1.0, SpringParams::new(1.0, 0.0));
        assert_eq!(result.err(), Some(PhysicsError::InvalidGridDimensions));
    }

    #[test]
    fn try_body_out_of_bounds() {
        let body = at_rest_grid(2, 3);
        assert!(body.try_body(1, 2).is_ok());
        assert_eq!(
            body.try_index(2, 0),
            Err(PhysicsError::CellOutOfBounds { row: 2, col: 0, rows: 2, cols: 3 })
        );
    }

    #[test]
    fn corner_has_two_neighbours_interior_has_four() {
        let body = at_rest_grid(3, 3);
        assert_eq!(body.neighbours(0, 0).iter().flatten().count(), 2);
        assert_eq!(body.neighbours(0, 1).iter().flatten().count(), 3);
        assert_eq!(body.neighbours(1, 1).iter().flatten().count(), 4);
    }

    #[test]
    fn external_force_only_on_first_row() {
        let mut body = at_rest_grid(3, 3);
        let push = Vec3::new(2.0, 0.0, 0.0);
        body.accumulate_forces(push);
        for row in 0..3 {
            for col in 0..3 {
                let expected = if row == 0 { push } else { V::zero() };
                assert_eq!(body.body(row, col).net_force, expected, "cell ({}, {})", row, col);
            }
        }
    }

    #[test]
    fn damping_compounds_per_neighbour() {
        let mut body = at_rest_grid(3, 3);
        let v = Vec3::new(0.2, -0.4, 0.0);
        for b in body.bodies.iter_mut() {
            b.velocity = v;
        }
        // Interior body: four neighbours, all at rest length.
        let f = body.spring_force_on(1, 1);
        assert!((f.x - (-4.0 * 0.5 * 0.2)).abs() < 1e-12);
        assert!((f.y - (-4.0 * 0.5 * -0.4)).abs() < 1e-12);
        // Corner: two neighbours.
        let f = body.spring_force_on(0, 0);
        assert!((f.x - (-2.0 * 0.5 * 0.2)).abs() < 1e-12);
    }

    #[test]
    fn step_clears_accumulators() {
        let mut body = at_rest_grid(3, 3);
        body.body_mut(1, 1).position = Vec3::new(0.1, 0.2, 0.0);
        body.step(0.012, Vec3::new(0.0, 2.0, 0.0), &mut NoOpSink, &mut NoOpStepObserver);
        for b in body.bodies() {
            assert_eq!(b.net_force, V::zero());
            assert_eq!(b.net_impulse, V::zero());
        }
    }

    #[test]
    fn spring_energy_zero_at_rest() {
        let body = at_rest_grid(4, 4);
        assert_eq!(body.spring_energy(), 0.0);
        assert_eq!(body.kinetic_energy(), 0.0);
    }
}
