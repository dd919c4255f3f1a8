//! Planar shapes: bounding boxes, point membership, unions, and random sampling.
//!
//! # Examples
//!
//! Build a [union](crate::union::Union) of a [rectangle](crate::rect::Rect)
//! and an [ellipse](crate::ellipse::Ellipse), then query it:
//!
//! ```
//! # use shapes::prelude::*;
//! let rect = Rect::from_origin_dims(Point::zero(), 10., 100.);
//! let ellipse = Ellipse::new(Point::zero(), 2., 1.);
//! let union = Shape::union([Shape::from(rect), Shape::from(ellipse)]);
//!
//! assert_eq!(union.bbox(), Some(Rect::from_sides(-2., -1., 10., 100.)));
//! assert!(union.contains(&Point::new(-1.5, 0.)));
//! assert!(!union.contains(&Point::new(1000., 1000.)));
//! ```
#![warn(missing_docs)]

extern crate self as shapes;

pub mod bbox;
pub mod contains;
pub mod ellipse;
pub mod error;
pub mod point;
pub mod prelude;
pub mod rect;
pub mod sample;
pub mod shape;
pub mod union;
