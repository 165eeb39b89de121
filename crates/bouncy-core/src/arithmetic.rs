#![forbid(unsafe_code)]

//! The numeric capability required by the spring integrator.
//!
//! Rather than leaning on operator overloading, [`SpringArithmetic`] exposes
//! the handful of operations the integrator needs as named methods. Scalars
//! map them straight onto the native operators; composite values get them
//! component-wise through [`Pair`](crate::pair::Pair).
//!
//! # Semantics
//!
//! - All operations are total. Nothing is validated: dividing by zero
//!   yields infinities or NaN exactly as the underlying float would.
//! - [`less_than`](SpringArithmetic::less_than) on a composite holds only
//!   when it holds for *every* component. It is not lexicographic.
//! - [`from_scalar`](SpringArithmetic::from_scalar) broadcasts one number to
//!   every component.

use core::fmt::Debug;

/// Values that support the arithmetic needed for spring integration.
pub trait SpringArithmetic: Copy + Debug + PartialEq {
    /// Build a value with every component set to `scalar`.
    fn from_scalar(scalar: f64) -> Self;

    /// Component-wise sum.
    #[must_use]
    fn add(self, rhs: Self) -> Self;

    /// Component-wise difference.
    #[must_use]
    fn sub(self, rhs: Self) -> Self;

    /// Component-wise product.
    #[must_use]
    fn mul(self, rhs: Self) -> Self;

    /// Component-wise quotient.
    #[must_use]
    fn div(self, rhs: Self) -> Self;

    /// Component-wise absolute value.
    #[must_use]
    fn abs(self) -> Self;

    /// Strict less-than, required to hold on every component.
    fn less_than(self, rhs: Self) -> bool;

    /// Component-wise maximum.
    ///
    /// Composites clamp each component against the matching component of
    /// `other`, so one axis never influences another.
    #[must_use]
    fn max(self, other: Self) -> Self;

    /// The additive identity.
    #[inline]
    #[must_use]
    fn zero() -> Self {
        Self::from_scalar(0.0)
    }

    /// The multiplicative identity.
    #[inline]
    #[must_use]
    fn one() -> Self {
        Self::from_scalar(1.0)
    }

    /// Returns `0 - self`.
    #[inline]
    #[must_use]
    fn neg(self) -> Self {
        Self::zero().sub(self)
    }

    /// Returns `|self - other|`.
    #[inline]
    #[must_use]
    fn abs_diff(self, other: Self) -> Self {
        self.sub(other).abs()
    }
}

/// Implements `SpringArithmetic` for primitive floats.
macro_rules! impl_spring_arithmetic_float {
    ($($ty:ty),*) => {
        $(
            impl SpringArithmetic for $ty {
                #[inline]
                #[allow(clippy::cast_possible_truncation)]
                fn from_scalar(scalar: f64) -> Self {
                    scalar as $ty
                }

                #[inline]
                fn add(self, rhs: Self) -> Self {
                    self + rhs
                }

                #[inline]
                fn sub(self, rhs: Self) -> Self {
                    self - rhs
                }

                #[inline]
                fn mul(self, rhs: Self) -> Self {
                    self * rhs
                }

                #[inline]
                fn div(self, rhs: Self) -> Self {
                    self / rhs
                }

                #[inline]
                fn abs(self) -> Self {
                    <$ty>::abs(self)
                }

                #[inline]
                fn less_than(self, rhs: Self) -> bool {
                    self < rhs
                }

                #[inline]
                fn max(self, other: Self) -> Self {
                    if self < other { other } else { self }
                }
            }
        )*
    }
}

impl_spring_arithmetic_float!(f32, f64);
