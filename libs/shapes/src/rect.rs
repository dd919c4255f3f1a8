//! Axis-aligned rectangles.
//!
//! A [`Rect`] is both the bounding box type returned by [`Bbox::bbox`]
//! and a shape in its own right.

use serde::{Deserialize, Serialize};

use crate::bbox::Bbox;
use crate::contains::Contains;
use crate::error::{ensure_finite, Error, Result};
use crate::point::Point;
use crate::union::BoundingUnion;

/// An axis-aligned rectangle, specified by lower-left and upper-right corners.
///
/// The permissive constructors store their inputs as given. A rectangle whose
/// upper corner lies below or left of its lower corner is *inverted*: it has a
/// well-defined (inverted) bounding box but contains no points on the
/// inverted axis. Use [`Rect::try_from_sides`] to reject such inputs.
#[derive(Debug, Default, Copy, Clone, Serialize, Deserialize, PartialEq, PartialOrd)]
pub struct Rect {
    /// The lower-left corner.
    p0: Point,
    /// The upper-right corner.
    p1: Point,
}

impl Rect {
    /// Creates a rectangle from its lower-left and upper-right corners.
    ///
    /// The corners are not reordered.
    pub const fn new(p0: Point, p1: Point) -> Self {
        Self { p0, p1 }
    }

    /// Creates a rectangle from its left, bottom, right, and top edges.
    ///
    /// # Example
    ///
    /// ```
    /// # use shapes::prelude::*;
    /// let rect = Rect::from_sides(10., 20., 30., 40.);
    /// assert_eq!(rect.left(), 10.);
    /// assert_eq!(rect.bot(), 20.);
    /// assert_eq!(rect.right(), 30.);
    /// assert_eq!(rect.top(), 40.);
    /// ```
    pub const fn from_sides(left: f64, bot: f64, right: f64, top: f64) -> Self {
        Self::new(Point::new(left, bot), Point::new(right, top))
    }

    /// Creates a rectangle from its edges, rejecting inverted or non-finite bounds.
    ///
    /// # Example
    ///
    /// ```
    /// # use shapes::prelude::*;
    /// assert!(Rect::try_from_sides(0., 0., 1., 1.).is_ok());
    /// assert!(matches!(
    ///     Rect::try_from_sides(1., 0., 0., 1.),
    ///     Err(Error::InvertedBounds { .. })
    /// ));
    /// ```
    pub fn try_from_sides(left: f64, bot: f64, right: f64, top: f64) -> Result<Self> {
        ensure_finite(&[left, bot, right, top])?;
        if right < left || top < bot {
            return Err(Error::InvertedBounds {
                left,
                bot,
                right,
                top,
            });
        }
        Ok(Self::from_sides(left, bot, right, top))
    }

    /// Creates a rectangle with lower-left corner `origin` and the given dimensions.
    ///
    /// The caller should ensure that `width` and `height` are non-negative;
    /// negative dimensions produce an inverted rectangle.
    pub fn from_origin_dims(origin: Point, width: f64, height: f64) -> Self {
        Self::new(origin, Point::new(origin.x + width, origin.y + height))
    }

    /// Creates a rectangle from an origin and dimensions, rejecting negative
    /// or non-finite dimensions.
    pub fn try_from_origin_dims(origin: Point, width: f64, height: f64) -> Result<Self> {
        ensure_finite(&[origin.x, origin.y, width, height])?;
        if width < 0. || height < 0. {
            return Err(Error::NegativeDimension { width, height });
        }
        Ok(Self::from_origin_dims(origin, width, height))
    }

    /// Creates a zero-area rectangle containing only the given point.
    pub const fn from_point(p: Point) -> Self {
        Self { p0: p, p1: p }
    }

    /// Returns the bottom y-coordinate of the rectangle.
    #[inline]
    pub const fn bot(&self) -> f64 {
        self.p0.y
    }

    /// Returns the top y-coordinate of the rectangle.
    #[inline]
    pub const fn top(&self) -> f64 {
        self.p1.y
    }

    /// Returns the left x-coordinate of the rectangle.
    #[inline]
    pub const fn left(&self) -> f64 {
        self.p0.x
    }

    /// Returns the right x-coordinate of the rectangle.
    #[inline]
    pub const fn right(&self) -> f64 {
        self.p1.x
    }

    /// Returns the lower-left corner.
    #[inline]
    pub const fn lower_left(&self) -> Point {
        self.p0
    }

    /// Returns the upper-right corner.
    #[inline]
    pub const fn upper_right(&self) -> Point {
        self.p1
    }

    /// Returns the horizontal width of the rectangle.
    ///
    /// Negative for horizontally inverted rectangles.
    #[inline]
    pub fn width(&self) -> f64 {
        self.p1.x - self.p0.x
    }

    /// Returns the vertical height of the rectangle.
    ///
    /// Negative for vertically inverted rectangles.
    #[inline]
    pub fn height(&self) -> f64 {
        self.p1.y - self.p0.y
    }

    /// Returns the area of the rectangle.
    #[inline]
    pub fn area(&self) -> f64 {
        self.width() * self.height()
    }

    /// Returns the center point of the rectangle.
    pub fn center(&self) -> Point {
        Point::new((self.p0.x + self.p1.x) / 2., (self.p0.y + self.p1.y) / 2.)
    }

    /// Returns true if either axis has its upper bound below its lower bound.
    pub fn is_inverted(&self) -> bool {
        self.width() < 0. || self.height() < 0.
    }

    /// Returns the smallest rectangle covering both `self` and `other`.
    ///
    /// # Example
    ///
    /// ```
    /// # use shapes::prelude::*;
    /// let r1 = Rect::from_sides(0., 0., 10., 100.);
    /// let r2 = Rect::from_sides(-2., -1., 2., 1.);
    /// assert_eq!(r1.union(r2), Rect::from_sides(-2., -1., 10., 100.));
    /// ```
    pub fn union(self, other: Self) -> Self {
        Self::from_sides(
            self.left().min(other.left()),
            self.bot().min(other.bot()),
            self.right().max(other.right()),
            self.top().max(other.top()),
        )
    }
}

impl Bbox for Rect {
    fn bbox(&self) -> Option<Rect> {
        Some(*self)
    }
}

impl<T: Bbox> BoundingUnion<T> for Rect {
    type Output = Rect;

    fn bounding_union(&self, other: &T) -> Self::Output {
        match other.bbox() {
            Some(bbox) => self.union(bbox),
            None => *self,
        }
    }
}

impl Contains<Point> for Rect {
    fn contains(&self, other: &Point) -> bool {
        other.x >= self.p0.x && other.x <= self.p1.x && other.y >= self.p0.y && other.y <= self.p1.y
    }
}
