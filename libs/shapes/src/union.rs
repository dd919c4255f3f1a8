//! Unions of geometric objects.

use serde::{Deserialize, Serialize};

use crate::bbox::Bbox;
use crate::contains::Contains;
use crate::point::Point;
use crate::rect::Rect;
use crate::shape::Shape;

/// Trait for calculating the smallest bounding box covering this object and another.
pub trait BoundingUnion<T: ?Sized> {
    /// The type of the resulting bounding box.
    type Output;
    /// Calculates the bounding union of this object with `other`.
    fn bounding_union(&self, other: &T) -> Self::Output;
}

impl<T: Bbox + ?Sized> BoundingUnion<T> for Option<Rect> {
    type Output = Option<Rect>;

    fn bounding_union(&self, other: &T) -> Self::Output {
        match (*self, other.bbox()) {
            (Some(a), Some(b)) => Some(a.union(b)),
            (a, b) => a.or(b),
        }
    }
}

/// A composite shape containing every point of at least one of its children.
///
/// Children are kept in insertion order. Order only affects how soon
/// [`Contains::contains`] can stop, never its result.
///
/// # Example
///
/// ```
/// # use shapes::prelude::*;
/// let union = Union::empty()
///     .with(Rect::from_sides(0., 0., 1., 1.))
///     .with(Ellipse::circle(Point::new(5., 5.), 1.));
///
/// assert_eq!(union.len(), 2);
/// assert!(union.contains(&Point::new(5., 4.)));
/// assert!(!union.contains(&Point::new(3., 3.)));
/// ```
#[derive(Debug, Default, Clone, Serialize, Deserialize, PartialEq)]
pub struct Union {
    children: Vec<Shape>,
}

impl Union {
    /// Creates a union of the given shapes.
    pub fn new(children: impl IntoIterator<Item = Shape>) -> Self {
        Self {
            children: children.into_iter().collect(),
        }
    }

    /// Creates a union with no children.
    ///
    /// An empty union has no bounding box and contains no points.
    pub const fn empty() -> Self {
        Self {
            children: Vec::new(),
        }
    }

    /// Returns this union with `child` appended.
    pub fn with(mut self, child: impl Into<Shape>) -> Self {
        self.children.push(child.into());
        self
    }

    /// The children of this union, in insertion order.
    #[inline]
    pub fn children(&self) -> &[Shape] {
        &self.children
    }

    /// The number of direct children.
    #[inline]
    pub fn len(&self) -> usize {
        self.children.len()
    }

    /// Returns true if this union has no children.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Consumes the union, returning its children.
    pub fn into_children(self) -> Vec<Shape> {
        self.children
    }
}

impl Bbox for Union {
    fn bbox(&self) -> Option<Rect> {
        // Children without a box are skipped by the fold.
        self.children.bbox()
    }
}

impl Contains<Point> for Union {
    fn contains(&self, other: &Point) -> bool {
        self.children.iter().any(|child| child.contains(other))
    }
}

impl FromIterator<Shape> for Union {
    fn from_iter<I: IntoIterator<Item = Shape>>(iter: I) -> Self {
        Self::new(iter)
    }
}

impl<'a> IntoIterator for &'a Union {
    type Item = &'a Shape;
    type IntoIter = std::slice::Iter<'a, Shape>;

    fn into_iter(self) -> Self::IntoIter {
        self.children.iter()
    }
}
