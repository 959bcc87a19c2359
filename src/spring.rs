//! Hooke's-law springs with velocity damping.

use crate::float::Float;
use crate::vec::Vec;

/// Which rest length a spring uses: horizontal springs rest at the cell
/// width, vertical ones at the cell height.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Axis {
    Horizontal,
    Vertical,
}

/// Stiffness and damping shared by every spring in a soft body.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpringParams<F: Float> {
    pub coefficient: F,
    pub dampening: F,
}

impl<F: Float> SpringParams<F> {
    pub fn new(coefficient: F, dampening: F) -> Self {
        SpringParams { coefficient, dampening }
    }

    /// Force on the body at `position` from the spring joining it to
    /// `neighbour`: `k * (|d| - rest) * d̂` with `d = neighbour - position`.
    ///
    /// Positive when stretched (pulls toward the neighbour), negative when
    /// compressed. Coincident bodies have no direction and produce zero.
    pub fn hooke_force<V: Vec<Scalar = F>>(&self, position: V, neighbour: V, rest_length: F) -> V {
        let displacement = neighbour - position;
        let direction = displacement.normalize();
        let stretch = displacement.length() - rest_length;
        direction.scale(self.coefficient * stretch)
    }

    /// `-velocity * dampening`. Only the body's own velocity is damped, not
    /// the relative velocity across the spring.
    pub fn damping_force<V: Vec<Scalar = F>>(&self, velocity: V) -> V {
        -velocity.scale(self.dampening)
    }

    /// Hooke force plus one damping term: what a single neighbour adds to a
    /// body's net force.
    pub fn neighbour_force<V: Vec<Scalar = F>>(
        &self,
        position: V,
        velocity: V,
        neighbour: V,
        rest_length: F,
    ) -> V {
        self.hooke_force(position, neighbour, rest_length) + self.damping_force(velocity)
    }

    /// Potential energy ½k(length - rest)² stored in one spring.
    pub fn energy(&self, length: F, rest_length: F) -> F {
        let stretch = length - rest_length;
        F::half() * self.coefficient * stretch * stretch
    }
}
