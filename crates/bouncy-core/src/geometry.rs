#![forbid(unsafe_code)]

//! Geometric primitives that springs can animate.
//!
//! Each type is a plain `Copy` value over `f64` that decomposes into a
//! [`Pair`] via [`TwoComponent`], which is all it takes to drive a
//! [`Spring`](crate::animation::spring::Spring) with it.
//!
//! | Type | First | Second |
//! |------|-------|--------|
//! | [`Point`] | `x` | `y` |
//! | [`Size`] | `width` | `height` |
//! | [`Vector`] | `dx` | `dy` |
//! | [`Offset`] | `horizontal` | `vertical` |
//! | [`Rect`] | `origin: Point` | `size: Size` |
//! | [`Insets`] | top-left `Offset` | bottom-right `Offset` |

use crate::pair::{Pair, TwoComponent};

/// A location in 2D space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    /// Horizontal coordinate.
    pub x: f64,
    /// Vertical coordinate.
    pub y: f64,
}

impl Point {
    /// The origin.
    pub const ZERO: Self = Self::new(0.0, 0.0);

    /// Create a new point.
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to `other`.
    #[inline]
    pub fn distance(&self, other: &Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

impl TwoComponent for Point {
    type First = f64;
    type Second = f64;

    #[inline]
    fn into_pair(self) -> Pair<f64, f64> {
        Pair::new(self.x, self.y)
    }

    #[inline]
    fn from_pair(pair: Pair<f64, f64>) -> Self {
        Self::new(pair.first, pair.second)
    }
}

/// A width and height.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Size {
    /// Horizontal extent.
    pub width: f64,
    /// Vertical extent.
    pub height: f64,
}

impl Size {
    /// Create a new size.
    #[inline]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Area covered.
    #[inline]
    pub fn area(&self) -> f64 {
        self.width * self.height
    }
}

impl TwoComponent for Size {
    type First = f64;
    type Second = f64;

    #[inline]
    fn into_pair(self) -> Pair<f64, f64> {
        Pair::new(self.width, self.height)
    }

    #[inline]
    fn from_pair(pair: Pair<f64, f64>) -> Self {
        Self::new(pair.first, pair.second)
    }
}

/// A displacement with `dx`/`dy` components.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vector {
    /// Horizontal component.
    pub dx: f64,
    /// Vertical component.
    pub dy: f64,
}

impl Vector {
    /// Create a new vector.
    #[inline]
    pub const fn new(dx: f64, dy: f64) -> Self {
        Self { dx, dy }
    }

    /// Euclidean length.
    #[inline]
    pub fn length(&self) -> f64 {
        self.dx.hypot(self.dy)
    }
}

impl TwoComponent for Vector {
    type First = f64;
    type Second = f64;

    #[inline]
    fn into_pair(self) -> Pair<f64, f64> {
        Pair::new(self.dx, self.dy)
    }

    #[inline]
    fn from_pair(pair: Pair<f64, f64>) -> Self {
        Self::new(pair.first, pair.second)
    }
}

/// A horizontal/vertical offset.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Offset {
    /// Horizontal component.
    pub horizontal: f64,
    /// Vertical component.
    pub vertical: f64,
}

impl Offset {
    /// Create a new offset.
    #[inline]
    pub const fn new(horizontal: f64, vertical: f64) -> Self {
        Self {
            horizontal,
            vertical,
        }
    }
}

impl TwoComponent for Offset {
    type First = f64;
    type Second = f64;

    #[inline]
    fn into_pair(self) -> Pair<f64, f64> {
        Pair::new(self.horizontal, self.vertical)
    }

    #[inline]
    fn from_pair(pair: Pair<f64, f64>) -> Self {
        Self::new(pair.first, pair.second)
    }
}

/// A rectangle described by its origin and size.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect {
    /// Top-left corner.
    pub origin: Point,
    /// Extent from the origin.
    pub size: Size,
}

impl Rect {
    /// Create a new rectangle.
    #[inline]
    pub const fn new(origin: Point, size: Size) -> Self {
        Self { origin, size }
    }

    /// Create a rectangle from raw coordinates.
    #[inline]
    pub const fn from_xywh(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self::new(Point::new(x, y), Size::new(width, height))
    }

    /// Right edge.
    #[inline]
    pub fn max_x(&self) -> f64 {
        self.origin.x + self.size.width
    }

    /// Bottom edge.
    #[inline]
    pub fn max_y(&self) -> f64 {
        self.origin.y + self.size.height
    }

    /// Center point.
    #[inline]
    pub fn center(&self) -> Point {
        Point::new(
            self.origin.x + self.size.width / 2.0,
            self.origin.y + self.size.height / 2.0,
        )
    }
}

impl TwoComponent for Rect {
    type First = Point;
    type Second = Size;

    #[inline]
    fn into_pair(self) -> Pair<Point, Size> {
        Pair::new(self.origin, self.size)
    }

    #[inline]
    fn from_pair(pair: Pair<Point, Size>) -> Self {
        Self::new(pair.first, pair.second)
    }
}

/// Insets from each edge of a rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Insets {
    /// Inset from the top edge.
    pub top: f64,
    /// Inset from the left edge.
    pub left: f64,
    /// Inset from the bottom edge.
    pub bottom: f64,
    /// Inset from the right edge.
    pub right: f64,
}

impl Insets {
    /// Create insets with explicit edges.
    #[inline]
    pub const fn new(top: f64, left: f64, bottom: f64, right: f64) -> Self {
        Self {
            top,
            left,
            bottom,
            right,
        }
    }

    /// Same inset on every edge.
    #[inline]
    pub const fn all(inset: f64) -> Self {
        Self::new(inset, inset, inset, inset)
    }

    /// Assemble from the top-left and bottom-right corner offsets.
    #[inline]
    pub const fn from_corners(top_left: Offset, bottom_right: Offset) -> Self {
        Self::new(
            top_left.vertical,
            top_left.horizontal,
            bottom_right.vertical,
            bottom_right.horizontal,
        )
    }

    /// Left and top insets as an offset.
    #[inline]
    pub const fn top_left(&self) -> Offset {
        Offset::new(self.left, self.top)
    }

    /// Right and bottom insets as an offset.
    #[inline]
    pub const fn bottom_right(&self) -> Offset {
        Offset::new(self.right, self.bottom)
    }
}

impl TwoComponent for Insets {
    type First = Offset;
    type Second = Offset;

    #[inline]
    fn into_pair(self) -> Pair<Offset, Offset> {
        Pair::new(self.top_left(), self.bottom_right())
    }

    #[inline]
    fn from_pair(pair: Pair<Offset, Offset>) -> Self {
        Self::from_corners(pair.first, pair.second)
    }
}
