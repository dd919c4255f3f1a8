//! 2-D points.

use serde::{Deserialize, Serialize};
use std::ops::{Add, Mul, Sub};

/// A point in two-dimensional space.
///
/// Points compare by exact coordinate equality.
#[derive(Debug, Copy, Clone, Default, Serialize, Deserialize, PartialEq, PartialOrd)]
pub struct Point {
    /// The x-coordinate of the point.
    pub x: f64,
    /// The y-coordinate of the point.
    pub y: f64,
}

impl Point {
    /// Creates a new [`Point`] from (x,y) coordinates.
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Returns the origin, `(0, 0)`.
    ///
    /// # Example
    ///
    /// ```
    /// # use shapes::prelude::*;
    /// let origin = Point::zero();
    /// assert_eq!(origin, Point::new(0., 0.));
    /// ```
    #[inline]
    pub const fn zero() -> Self {
        Self { x: 0., y: 0. }
    }

    /// Returns this point shifted by `offset`.
    #[inline]
    pub fn translate(self, offset: Point) -> Self {
        self + offset
    }

    /// Returns true if both coordinates are finite.
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl Add<Point> for Point {
    type Output = Self;
    fn add(self, rhs: Point) -> Self::Output {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub<Point> for Point {
    type Output = Self;
    fn sub(self, rhs: Point) -> Self::Output {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f64> for Point {
    type Output = Self;

    /// Scales both coordinates by `rhs`.
    fn mul(self, rhs: f64) -> Self::Output {
        Self::new(self.x * rhs, self.y * rhs)
    }
}

impl From<(f64, f64)> for Point {
    fn from(value: (f64, f64)) -> Self {
        Self {
            x: value.0,
            y: value.1,
        }
    }
}

impl From<Point> for (f64, f64) {
    #[inline]
    fn from(p: Point) -> Self {
        (p.x, p.y)
    }
}
