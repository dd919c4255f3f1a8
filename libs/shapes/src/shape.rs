//! An enumeration of planar shapes and their properties.

use serde::{Deserialize, Serialize};

use crate::{
    bbox::Bbox, contains::Contains, ellipse::Ellipse, point::Point, rect::Rect, union::Union,
};

/// An enumeration of planar shapes.
///
/// Unions hold further [`Shape`]s, so shapes nest arbitrarily.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Shape {
    /// An axis-aligned rectangle.
    Rect(Rect),
    /// An axis-aligned ellipse.
    Ellipse(Ellipse),
    /// A union of shapes.
    Union(Union),
}

impl Shape {
    /// Creates a [`Shape::Union`] of the given shapes.
    pub fn union(shapes: impl IntoIterator<Item = Shape>) -> Self {
        Self::Union(Union::new(shapes))
    }

    /// If this shape is a rectangle, returns the contained rectangle.
    /// Otherwise, returns [`None`].
    pub fn as_rect(&self) -> Option<&Rect> {
        match self {
            Self::Rect(r) => Some(r),
            _ => None,
        }
    }

    /// If this shape is an ellipse, returns the contained ellipse.
    /// Otherwise, returns [`None`].
    pub fn as_ellipse(&self) -> Option<&Ellipse> {
        match self {
            Self::Ellipse(e) => Some(e),
            _ => None,
        }
    }

    /// If this shape is a union, returns the contained union.
    /// Otherwise, returns [`None`].
    pub fn as_union(&self) -> Option<&Union> {
        match self {
            Self::Union(u) => Some(u),
            _ => None,
        }
    }
}

impl Bbox for Shape {
    fn bbox(&self) -> Option<Rect> {
        match self {
            Shape::Rect(rect) => rect.bbox(),
            Shape::Ellipse(ellipse) => ellipse.bbox(),
            Shape::Union(union) => union.bbox(),
        }
    }
}

impl Contains<Point> for Shape {
    fn contains(&self, p: &Point) -> bool {
        match self {
            Shape::Rect(rect) => rect.contains(p),
            Shape::Ellipse(ellipse) => ellipse.contains(p),
            Shape::Union(union) => union.contains(p),
        }
    }
}

impl From<Rect> for Shape {
    #[inline]
    fn from(value: Rect) -> Self {
        Self::Rect(value)
    }
}

impl From<Ellipse> for Shape {
    #[inline]
    fn from(value: Ellipse) -> Self {
        Self::Ellipse(value)
    }
}

impl From<Union> for Shape {
    #[inline]
    fn from(value: Union) -> Self {
        Self::Union(value)
    }
}
