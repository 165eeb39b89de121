#![forbid(unsafe_code)]

//! Component-wise arithmetic for two-part values.
//!
//! [`Pair`] implements [`SpringArithmetic`] whenever both of its components
//! do, so nesting pairs gives arithmetic over any tree of scalars. Concrete
//! geometric types opt in through [`TwoComponent`], which only asks for a
//! decomposition into a pair and a recomposition out of one; the arithmetic
//! itself is written once, here.

use crate::arithmetic::SpringArithmetic;

/// An ordered pair of independently-typed components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Pair<A, B> {
    /// First component.
    pub first: A,
    /// Second component.
    pub second: B,
}

impl<A, B> Pair<A, B> {
    /// Create a new pair.
    #[inline]
    pub const fn new(first: A, second: B) -> Self {
        Self { first, second }
    }

    /// Combine with `other`, applying `first_op` to the first components and
    /// `second_op` to the second components.
    #[inline]
    pub fn combine<C, D>(
        self,
        other: Self,
        first_op: impl FnOnce(A, A) -> C,
        second_op: impl FnOnce(B, B) -> D,
    ) -> Pair<C, D> {
        Pair::new(
            first_op(self.first, other.first),
            second_op(self.second, other.second),
        )
    }

    /// Apply one function per component.
    #[inline]
    pub fn map<C, D>(
        self,
        first_op: impl FnOnce(A) -> C,
        second_op: impl FnOnce(B) -> D,
    ) -> Pair<C, D> {
        Pair::new(first_op(self.first), second_op(self.second))
    }
}

impl<A, B> From<(A, B)> for Pair<A, B> {
    #[inline]
    fn from((first, second): (A, B)) -> Self {
        Self::new(first, second)
    }
}

impl<A, B> From<Pair<A, B>> for (A, B) {
    #[inline]
    fn from(pair: Pair<A, B>) -> Self {
        (pair.first, pair.second)
    }
}

impl<A: SpringArithmetic, B: SpringArithmetic> SpringArithmetic for Pair<A, B> {
    #[inline]
    fn from_scalar(scalar: f64) -> Self {
        Self::new(A::from_scalar(scalar), B::from_scalar(scalar))
    }

    #[inline]
    fn add(self, rhs: Self) -> Self {
        self.combine(rhs, A::add, B::add)
    }

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        self.combine(rhs, A::sub, B::sub)
    }

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        self.combine(rhs, A::mul, B::mul)
    }

    #[inline]
    fn div(self, rhs: Self) -> Self {
        self.combine(rhs, A::div, B::div)
    }

    #[inline]
    fn abs(self) -> Self {
        self.map(A::abs, B::abs)
    }

    #[inline]
    fn less_than(self, rhs: Self) -> bool {
        let both = self.combine(rhs, A::less_than, B::less_than);
        both.first && both.second
    }

    #[inline]
    fn max(self, other: Self) -> Self {
        self.combine(other, A::max, B::max)
    }
}

/// Types that decompose into exactly two arithmetic components.
///
/// Implementing this is all a composite type needs to become
/// [`SpringArithmetic`]: the blanket implementation below routes every
/// operation through [`Pair`].
pub trait TwoComponent: Copy + core::fmt::Debug + PartialEq {
    /// Type of the first component.
    type First: SpringArithmetic;
    /// Type of the second component.
    type Second: SpringArithmetic;

    /// Split into components.
    fn into_pair(self) -> Pair<Self::First, Self::Second>;

    /// Reassemble from components.
    fn from_pair(pair: Pair<Self::First, Self::Second>) -> Self;
}

impl<T: TwoComponent> SpringArithmetic for T {
    #[inline]
    fn from_scalar(scalar: f64) -> Self {
        T::from_pair(Pair::from_scalar(scalar))
    }

    #[inline]
    fn add(self, rhs: Self) -> Self {
        T::from_pair(self.into_pair().add(rhs.into_pair()))
    }

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        T::from_pair(self.into_pair().sub(rhs.into_pair()))
    }

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        T::from_pair(self.into_pair().mul(rhs.into_pair()))
    }

    #[inline]
    fn div(self, rhs: Self) -> Self {
        T::from_pair(self.into_pair().div(rhs.into_pair()))
    }

    #[inline]
    fn abs(self) -> Self {
        T::from_pair(self.into_pair().abs())
    }

    #[inline]
    fn less_than(self, rhs: Self) -> bool {
        self.into_pair().less_than(rhs.into_pair())
    }

    #[inline]
    fn max(self, other: Self) -> Self {
        T::from_pair(self.into_pair().max(other.into_pair()))
    }
}
