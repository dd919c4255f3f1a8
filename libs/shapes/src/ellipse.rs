//! Axis-aligned ellipses.

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

use crate::bbox::Bbox;
use crate::contains::Contains;
use crate::error::{ensure_finite, Error, Result};
use crate::point::Point;
use crate::rect::Rect;

/// An axis-aligned ellipse with a center and horizontal/vertical radii.
///
/// Zero radii are allowed and collapse the ellipse to a segment or a single point.
/// Radii are not validated by [`Ellipse::new`]; see [`Ellipse::try_new`].
#[derive(Debug, Default, Copy, Clone, Serialize, Deserialize, PartialEq)]
pub struct Ellipse {
    center: Point,
    rx: f64,
    ry: f64,
}

impl Ellipse {
    /// Creates an ellipse centered at `center` with radii `rx` and `ry`.
    ///
    /// # Example
    ///
    /// ```
    /// # use shapes::prelude::*;
    /// let ellipse = Ellipse::new(Point::zero(), 2., 1.);
    /// assert_eq!(ellipse.bbox(), Some(Rect::from_sides(-2., -1., 2., 1.)));
    /// assert!(ellipse.contains(&Point::new(2., 0.)));
    /// assert!(!ellipse.contains(&Point::new(2., 1.)));
    /// ```
    pub const fn new(center: Point, rx: f64, ry: f64) -> Self {
        Self { center, rx, ry }
    }

    /// Creates a circle of the given radius.
    pub const fn circle(center: Point, radius: f64) -> Self {
        Self::new(center, radius, radius)
    }

    /// Creates an ellipse, rejecting negative or non-finite parameters.
    pub fn try_new(center: Point, rx: f64, ry: f64) -> Result<Self> {
        ensure_finite(&[center.x, center.y, rx, ry])?;
        if rx < 0. || ry < 0. {
            return Err(Error::NegativeRadius { rx, ry });
        }
        Ok(Self::new(center, rx, ry))
    }

    /// The center of the ellipse.
    #[inline]
    pub const fn center(&self) -> Point {
        self.center
    }

    /// The horizontal radius.
    #[inline]
    pub const fn rx(&self) -> f64 {
        self.rx
    }

    /// The vertical radius.
    #[inline]
    pub const fn ry(&self) -> f64 {
        self.ry
    }

    /// Returns true if both radii are zero.
    pub fn is_point(&self) -> bool {
        self.rx == 0. && self.ry == 0.
    }

    /// Returns true if at least one radius is zero.
    pub fn is_degenerate(&self) -> bool {
        self.rx == 0. || self.ry == 0.
    }

    /// The area enclosed by the ellipse.
    pub fn area(&self) -> f64 {
        PI * self.rx * self.ry
    }
}

impl Bbox for Ellipse {
    fn bbox(&self) -> Option<Rect> {
        Some(Rect::from_sides(
            self.center.x - self.rx,
            self.center.y - self.ry,
            self.center.x + self.rx,
            self.center.y + self.ry,
        ))
    }
}

impl Contains<Point> for Ellipse {
    fn contains(&self, other: &Point) -> bool {
        let d = *other - self.center;
        if self.is_point() {
            *other == self.center
        } else if self.rx == 0. {
            d.x == 0. && d.y.abs() <= self.ry
        } else if self.ry == 0. {
            d.y == 0. && d.x.abs() <= self.rx
        } else {
            let nx = d.x / self.rx;
            let ny = d.y / self.ry;
            nx * nx + ny * ny <= 1.
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::prelude::*;

    #[test]
    fn bbox_spans_both_radii() {
        let ellipse = Ellipse::new(Point::new(3., -4.), 2., 5.);
        assert_eq!(ellipse.bbox(), Some(Rect::from_sides(1., -9., 5., 1.)));
    }

    #[test]
    fn contains_includes_boundary() {
        let ellipse = Ellipse::new(Point::zero(), 2., 1.);
        assert!(ellipse.contains(&Point::zero()));
        assert!(ellipse.contains(&Point::new(2., 0.)));
        assert!(ellipse.contains(&Point::new(-2., 0.)));
        assert!(ellipse.contains(&Point::new(0., 1.)));
        assert!(ellipse.contains(&Point::new(0., -1.)));
        assert!(!ellipse.contains(&Point::new(2.001, 0.)));
        assert!(!ellipse.contains(&Point::new(1.5, 0.9)));
        assert!(ellipse.contains(&Point::new(1., 0.5)));
    }

    #[test]
    fn off_center_ellipse_works() {
        let ellipse = Ellipse::new(Point::new(10., 20.), 4., 2.);
        assert!(ellipse.contains(&Point::new(14., 20.)));
        assert!(ellipse.contains(&Point::new(10., 18.)));
        assert!(!ellipse.contains(&Point::new(14., 21.)));
        assert!(!ellipse.contains(&Point::zero()));
    }

    #[test]
    fn point_ellipse_contains_only_center() {
        let center = Point::new(1.5, -2.5);
        let ellipse = Ellipse::new(center, 0., 0.);
        assert!(ellipse.is_point());
        assert_eq!(ellipse.bbox(), Some(Rect::from_point(center)));
        assert!(ellipse.contains(&center));
        assert!(!ellipse.contains(&Point::new(1.5, -2.4)));
        assert!(!ellipse.contains(&Point::new(1.6, -2.5)));
    }

    #[test]
    fn zero_rx_is_vertical_segment() {
        let ellipse = Ellipse::new(Point::new(1., 1.), 0., 3.);
        assert!(ellipse.is_degenerate());
        assert!(!ellipse.is_point());
        assert!(ellipse.contains(&Point::new(1., 4.)));
        assert!(ellipse.contains(&Point::new(1., -2.)));
        assert!(ellipse.contains(&Point::new(1., 1.)));
        assert!(!ellipse.contains(&Point::new(1., 4.5)));
        assert!(!ellipse.contains(&Point::new(1.0001, 1.)));
    }

    #[test]
    fn zero_ry_is_horizontal_segment() {
        let ellipse = Ellipse::new(Point::new(1., 1.), 3., 0.);
        assert!(ellipse.contains(&Point::new(4., 1.)));
        assert!(ellipse.contains(&Point::new(-2., 1.)));
        assert!(!ellipse.contains(&Point::new(-2.5, 1.)));
        assert!(!ellipse.contains(&Point::new(1., 1.0001)));
    }

    #[test]
    fn negative_radii_are_kept_as_given() {
        let ellipse = Ellipse::new(Point::zero(), -2., 1.);
        let bbox = ellipse.bbox().unwrap();
        assert!(bbox.is_inverted());
        assert_eq!(bbox, Rect::from_sides(2., -1., -2., 1.));

        let segment = Ellipse::new(Point::zero(), 0., -1.);
        assert!(!segment.contains(&Point::zero()));
    }

    #[test]
    fn try_new_validates() {
        assert_eq!(
            Ellipse::try_new(Point::zero(), -1., 2.),
            Err(Error::NegativeRadius { rx: -1., ry: 2. })
        );
        assert_eq!(
            Ellipse::try_new(Point::new(f64::INFINITY, 0.), 1., 1.),
            Err(Error::NonFinite)
        );
        assert_eq!(
            Ellipse::try_new(Point::zero(), 0., 0.),
            Ok(Ellipse::new(Point::zero(), 0., 0.))
        );
    }

    #[test]
    fn circle_area_works() {
        let circle = Ellipse::circle(Point::zero(), 2.);
        approx::assert_relative_eq!(circle.area(), 4. * std::f64::consts::PI);
    }
}
