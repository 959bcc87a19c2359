//! Vector types and traits for the mass-spring core.

use crate::float::Float;
use core::ops::{Add, Neg, Sub};

/// Trait for vector types used in physics calculations.
///
/// All force and integration code is generic over it, so the same cloth can
/// be simulated with `Vec2` or with `Vec3` (z carried along, unused).
pub trait Vec:
    Copy
    + Clone
    + Add<Output = Self>
    + Sub<Output = Self>
    + Neg<Output = Self>
    + PartialEq
    + Default
    + core::fmt::Debug
{
    /// The scalar (float) type for this vector.
    type Scalar: Float;

    /// Zero vector.
    fn zero() -> Self;

    /// Dot product.
    fn dot(self, other: Self) -> Self::Scalar;

    /// Scale all components by a scalar.
    fn scale(self, s: Self::Scalar) -> Self;

    /// `true` if every component is finite.
    fn is_finite(self) -> bool;

    /// Squared length (avoids sqrt).
    fn length_sq(self) -> Self::Scalar {
        self.dot(self)
    }

    /// Length (magnitude).
    fn length(self) -> Self::Scalar {
        self.length_sq().sqrt()
    }

    /// Normalize to unit length. Returns zero vector if length is near zero.
    fn normalize(self) -> Self {
        let len = self.length();
        if len.is_near_zero(Self::Scalar::from_f32(1e-10)) {
            Self::zero()
        } else {
            self.scale(Self::Scalar::one() / len)
        }
    }

    /// Distance between two points.
    fn distance(self, other: Self) -> Self::Scalar {
        (self - other).length()
    }
}

/// Vectors that have an in-plane x/y pair.
///
/// The cloth lives in the XY plane; this is how the grid lays out its bodies
/// and how the drag input builds its force without knowing the concrete
/// vector type.
pub trait Planar: Vec {
    /// Build a vector from in-plane coordinates, any other component zero.
    fn from_planar(x: Self::Scalar, y: Self::Scalar) -> Self;
    fn planar_x(self) -> Self::Scalar;
    fn planar_y(self) -> Self::Scalar;
}

// --------------------------------------------------------------------------
// Vec2<F>
// --------------------------------------------------------------------------

/// 2D vector.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vec2<F: Float> {
    pub x: F,
    pub y: F,
}

impl<F: Float> Vec2<F> {
    /// Create a new 2D vector.
    pub fn new(x: F, y: F) -> Self { Vec2 { x, y } }
}

impl<F: Float> Add for Vec2<F> {
    type Output = Self;
    fn add(self, rhs: Self) -> Self { Vec2 { x: self.x + rhs.x, y: self.y + rhs.y } }
}

impl<F: Float> Sub for Vec2<F> {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self { Vec2 { x: self.x - rhs.x, y: self.y - rhs.y } }
}

impl<F: Float> Neg for Vec2<F> {
    type Output = Self;
    fn neg(self) -> Self { Vec2 { x: -self.x, y: -self.y } }
}

impl<F: Float> Vec for Vec2<F> {
    type Scalar = F;
    fn zero() -> Self { Vec2 { x: F::zero(), y: F::zero() } }
    fn dot(self, other: Self) -> F { self.x * other.x + self.y * other.y }
    fn scale(self, s: F) -> Self { Vec2 { x: self.x * s, y: self.y * s } }
    fn is_finite(self) -> bool { self.x.is_finite() && self.y.is_finite() }
}

impl<F: Float> Planar for Vec2<F> {
    fn from_planar(x: F, y: F) -> Self { Vec2 { x, y } }
    fn planar_x(self) -> F { self.x }
    fn planar_y(self) -> F { self.y }
}

// --------------------------------------------------------------------------
// Vec3<F>
// --------------------------------------------------------------------------

/// 3D vector. The cloth keeps `z` at zero; it exists so positions can be
/// handed straight to a 3-component vertex buffer.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vec3<F: Float> {
    pub x: F,
    pub y: F,
    pub z: F,
}

impl<F: Float> Vec3<F> {
    /// Create a new 3D vector.
    pub fn new(x: F, y: F, z: F) -> Self { Vec3 { x, y, z } }
}

impl<F: Float> Add for Vec3<F> {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Vec3 { x: self.x + rhs.x, y: self.y + rhs.y, z: self.z + rhs.z }
    }
}

impl<F: Float> Sub for Vec3<F> {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Vec3 { x: self.x - rhs.x, y: self.y - rhs.y, z: self.z - rhs.z }
    }
}

impl<F: Float> Neg for Vec3<F> {
    type Output = Self;
    fn neg(self) -> Self { Vec3 { x: -self.x, y: -self.y, z: -self.z } }
}

impl<F: Float> Vec for Vec3<F> {
    type Scalar = F;
    fn zero() -> Self { Vec3 { x: F::zero(), y: F::zero(), z: F::zero() } }
    fn dot(self, other: Self) -> F {
        self.x * other.x + self.y * other.y + self.z * other.z
    }
    fn scale(self, s: F) -> Self {
        Vec3 { x: self.x * s, y: self.y * s, z: self.z * s }
    }
    fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }
}

impl<F: Float> Planar for Vec3<F> {
    fn from_planar(x: F, y: F) -> Self { Vec3 { x, y, z: F::zero() } }
    fn planar_x(self) -> F { self.x }
    fn planar_y(self) -> F { self.y }
}
