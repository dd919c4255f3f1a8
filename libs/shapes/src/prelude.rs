//! An import prelude that re-exports commonly used items.

pub use crate::bbox::Bbox;
pub use crate::contains::Contains;
pub use crate::ellipse::Ellipse;
pub use crate::error::{Error, Result};
pub use crate::point::Point;
pub use crate::rect::Rect;
pub use crate::sample::{SampleConfig, SampleRandom};
pub use crate::shape::Shape;
pub use crate::union::{BoundingUnion, Union};
