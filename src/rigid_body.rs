//! Point masses with force/impulse accumulators and explicit integration.

use crate::float::Float;
use crate::vec::Vec;

/// A point mass advanced by explicit second-order integration.
///
/// `net_force` and `net_impulse` are per-step accumulators: they are filled
/// during force computation and cleared by [`RigidBody::integrate_linear`].
#[derive(Clone, Debug, PartialEq)]
pub struct RigidBody<V: Vec> {
    pub position: V,
    pub velocity: V,
    pub net_force: V,
    pub net_impulse: V,
    inverse_mass: V::Scalar,
}

impl<V: Vec> RigidBody<V> {
    /// A body with the given state. A mass of zero (or near zero) gives an
    /// inverse mass of zero, which the integrator treats as immovable.
    pub fn new(position: V, velocity: V, mass: V::Scalar) -> Self {
        let inverse_mass = if mass.is_near_zero(V::Scalar::from_f32(1e-10)) {
            V::Scalar::zero()
        } else {
            V::Scalar::one() / mass
        };
        RigidBody {
            position,
            velocity,
            net_force: V::zero(),
            net_impulse: V::zero(),
            inverse_mass,
        }
    }

    pub fn at_rest(position: V, mass: V::Scalar) -> Self {
        Self::new(position, V::zero(), mass)
    }

    /// A body with infinite mass: forces and impulses never move it.
    pub fn fixed(position: V) -> Self {
        Self::new(position, V::zero(), V::Scalar::zero())
    }

    pub fn inverse_mass(&self) -> V::Scalar {
        self.inverse_mass
    }

    /// Mass, or zero for a fixed body.
    pub fn mass(&self) -> V::Scalar {
        if self.is_static() {
            V::Scalar::zero()
        } else {
            V::Scalar::one() / self.inverse_mass
        }
    }

    pub fn is_static(&self) -> bool {
        self.inverse_mass == V::Scalar::zero()
    }

    pub fn apply_force(&mut self, force: V) {
        self.net_force = self.net_force + force;
    }

    pub fn apply_impulse(&mut self, impulse: V) {
        self.net_impulse = self.net_impulse + impulse;
    }

    pub fn clear_accumulators(&mut self) {
        self.net_force = V::zero();
        self.net_impulse = V::zero();
    }

    /// Advance one step of `dt` (must be > 0):
    ///
    /// ```text
    /// a  = net_force / m
    /// x += v*dt + a*dt²/2
    /// v += a*dt + net_impulse / m
    /// ```
    ///
    /// then both accumulators are zeroed. Nothing is clamped; large forces
    /// or a large `dt` will diverge.
    pub fn integrate_linear(&mut self, dt: V::Scalar) {
        let acceleration = self.net_force.scale(self.inverse_mass);

        let first_order = self.velocity.scale(dt);
        let second_order = acceleration.scale(V::Scalar::half() * dt * dt);
        self.position = self.position + first_order + second_order;

        self.velocity = self.velocity
            + acceleration.scale(dt)
            + self.net_impulse.scale(self.inverse_mass);

        self.clear_accumulators();
    }

    /// Kinetic energy ½mv².
    pub fn kinetic_energy(&self) -> V::Scalar {
        V::Scalar::half() * self.mass() * self.velocity.length_sq()
    }

    pub fn is_finite(&self) -> bool {
        self.position.is_finite() && self.velocity.is_finite()
    }
}
