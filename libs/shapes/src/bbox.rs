//! Axis-aligned rectangular bounding boxes.

use impl_trait_for_tuples::impl_for_tuples;

use crate::{rect::Rect, union::BoundingUnion};

/// A geometric shape that has a bounding box.
///
/// # Examples
///
/// ```
/// # use shapes::prelude::*;
/// let rect = Rect::from_sides(0., 0., 100., 200.);
/// assert_eq!(rect.bbox(), Some(Rect::from_sides(0., 0., 100., 200.)));
/// let point = Rect::from_point(Point::new(50., 70.));
/// assert_eq!(point.bbox(), Some(Rect::from_sides(50., 70., 50., 70.)));
/// ```
pub trait Bbox {
    /// Computes the axis-aligned rectangular bounding box.
    ///
    /// If empty, this method should return `None`.
    /// Note that points and zero-area rectangles are not empty:
    /// these shapes contain a single point, and their bounding box
    /// implementations will return `Some(_)`.
    fn bbox(&self) -> Option<Rect>;
}

impl<T> Bbox for &T
where
    T: Bbox + ?Sized,
{
    fn bbox(&self) -> Option<Rect> {
        T::bbox(*self)
    }
}

#[impl_for_tuples(16)]
impl Bbox for TupleIdentifier {
    #[allow(clippy::let_and_return, unused_mut)]
    fn bbox(&self) -> Option<Rect> {
        let mut bbox: Option<Rect> = None;
        for_tuples!( #( bbox = bbox.bounding_union(&TupleIdentifier.bbox()); )* );
        bbox
    }
}

impl<T: Bbox> Bbox for [T] {
    fn bbox(&self) -> Option<Rect> {
        let mut bbox: Option<Rect> = None;
        for item in self {
            bbox = bbox.bounding_union(&item.bbox());
        }
        bbox
    }
}

impl<T: Bbox> Bbox for Vec<T> {
    fn bbox(&self) -> Option<Rect> {
        self.as_slice().bbox()
    }
}

impl Bbox for Option<Rect> {
    fn bbox(&self) -> Option<Rect> {
        *self
    }
}
