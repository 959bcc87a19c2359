//! Floating-point abstraction so the simulation runs in `f32` or `f64`.

use core::cmp::PartialOrd;
use core::ops::{Add, Div, Mul, Neg, Sub};

/// Scalar operations needed by the mass-spring core.
///
/// Implemented for `f32` and `f64` on top of `libm`, so the crate stays
/// `no_std`.
pub trait Float:
    Copy
    + Clone
    + PartialEq
    + PartialOrd
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Neg<Output = Self>
    + Default
    + core::fmt::Debug
{
    /// The additive identity (0.0).
    fn zero() -> Self;
    /// The multiplicative identity (1.0).
    fn one() -> Self;
    /// Half (0.5), used by the second-order position term.
    fn half() -> Self;
    /// Square root.
    fn sqrt(self) -> Self;
    /// Absolute value.
    fn abs(self) -> Self;
    /// `true` unless the value is NaN or infinite.
    fn is_finite(self) -> bool;
    /// Convert from f32 (for constants and configuration).
    fn from_f32(v: f32) -> Self;
    /// Convert from a grid count.
    fn from_usize(v: usize) -> Self;

    /// Minimum of two values.
    fn min(self, other: Self) -> Self {
        if self < other { self } else { other }
    }

    /// Check if approximately zero within epsilon.
    fn is_near_zero(self, epsilon: Self) -> bool {
        self.abs() < epsilon
    }

    /// Finite and strictly greater than zero.
    fn is_positive_finite(self) -> bool {
        self.is_finite() && self > Self::zero()
    }
}

impl Float for f32 {
    fn zero() -> Self { 0.0 }
    fn one() -> Self { 1.0 }
    fn half() -> Self { 0.5 }
    fn sqrt(self) -> Self { libm::sqrtf(self) }
    fn abs(self) -> Self { libm::fabsf(self) }
    fn is_finite(self) -> bool { f32::is_finite(self) }
    fn from_f32(v: f32) -> Self { v }
    fn from_usize(v: usize) -> Self { v as f32 }
}

impl Float for f64 {
    fn zero() -> Self { 0.0 }
    fn one() -> Self { 1.0 }
    fn half() -> Self { 0.5 }
    fn sqrt(self) -> Self { libm::sqrt(self) }
    fn abs(self) -> Self { libm::fabs(self) }
    fn is_finite(self) -> bool { f64::is_finite(self) }
    fn from_f32(v: f32) -> Self { v as f64 }
    fn from_usize(v: usize) -> Self { v as f64 }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positive_finite_rejects_nan_and_zero() {
        assert!(1.0f32.is_positive_finite());
        assert!(!0.0f32.is_positive_finite());
        assert!(!f32::NAN.is_positive_finite());
        assert!(!f64::INFINITY.is_positive_finite());
    }

    #[test]
    fn from_usize_matches_cast() {
        assert_eq!(<f64 as Float>::from_usize(10), 10.0);
    }
}
