//! Uniform random sampling of points inside shapes.
//!
//! Sampling uses rejection: candidates are drawn uniformly from the shape's
//! bounding box and the first one the shape [contains](Contains::contains)
//! is returned. The number of candidates is capped by a caller-supplied
//! budget, since thin shapes may accept almost nothing from their box.
//!
//! ```
//! # use shapes::prelude::*;
//! use rand::{rngs::StdRng, SeedableRng};
//!
//! let mut rng = StdRng::seed_from_u64(7);
//! let ellipse = Ellipse::new(Point::zero(), 2., 1.);
//! let p = ellipse.sample_random_point(&mut rng, 100).unwrap();
//! assert!(ellipse.contains(&p));
//! ```

use rand::{distributions::Distribution, Rng};
use serde::{Deserialize, Serialize};
use tracing::{span, Level};

use crate::bbox::Bbox;
use crate::contains::Contains;
use crate::error::{Error, Result};
use crate::point::Point;

/// The sampling budget used by [`SampleConfig::default`].
pub const DEFAULT_BUDGET: u32 = 100;

/// Parameters for repeated sampling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SampleConfig {
    /// The maximum number of candidates drawn per sampled point.
    pub budget: u32,
}

impl Default for SampleConfig {
    fn default() -> Self {
        Self {
            budget: DEFAULT_BUDGET,
        }
    }
}

impl SampleConfig {
    /// Creates a config with the given per-point budget.
    pub const fn with_budget(budget: u32) -> Self {
        Self { budget }
    }
}

/// Random sampling for any shape with a bounding box and point membership.
///
/// Every method has a default implementation in terms of [`Bbox::bbox`] and
/// [`Contains::contains`], and the trait is implemented for all such types.
pub trait SampleRandom: Bbox + Contains<Point> {
    /// Draws a uniformly distributed point inside this shape.
    ///
    /// Returns [`None`] if the shape has no bounding box, or if none of
    /// `budget` candidates drawn from the bounding box was contained in the shape.
    /// A zero-width or zero-height bounding box always yields its lower
    /// coordinate on that axis.
    fn sample_random_point<R: Rng + ?Sized>(&self, rng: &mut R, budget: u32) -> Option<Point> {
        self.try_sample_random_point(rng, budget).ok()
    }

    /// Like [`SampleRandom::sample_random_point`], but reports why no point was produced.
    ///
    /// Returns [`Error::EmptyShape`] if the shape has no bounding box and
    /// [`Error::BudgetExhausted`] if no candidate was accepted.
    fn try_sample_random_point<R: Rng + ?Sized>(&self, rng: &mut R, budget: u32) -> Result<Point> {
        let _guard = span!(Level::TRACE, "sample_random_point", budget).entered();

        let Some(bbox) = self.bbox() else {
            tracing::debug!("shape has no bounding box");
            return Err(Error::EmptyShape);
        };

        for attempt in 0..budget {
            let candidate = Point::new(
                bbox.left() + rng.gen::<f64>() * bbox.width(),
                bbox.bot() + rng.gen::<f64>() * bbox.height(),
            );
            if self.contains(&candidate) {
                tracing::trace!(attempt, ?candidate, "accepted candidate");
                return Ok(candidate);
            }
        }

        tracing::debug!(budget, ?bbox, "sampling budget exhausted");
        Err(Error::BudgetExhausted { budget })
    }

    /// Draws up to `n` points, each with `config.budget` attempts.
    ///
    /// Draws that fail are skipped, so fewer than `n` points may be returned.
    fn sample_points<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        n: usize,
        config: &SampleConfig,
    ) -> Vec<Point> {
        let points: Vec<Point> = (0..n)
            .filter_map(|_| self.sample_random_point(rng, config.budget))
            .collect();
        tracing::debug!(requested = n, produced = points.len(), "sampled points");
        points
    }

    /// Returns a [`Distribution`] that samples this shape with the given budget.
    fn sampler(&self, budget: u32) -> Rejection<'_, Self> {
        Rejection {
            shape: self,
            budget,
        }
    }
}

impl<T: Bbox + Contains<Point> + ?Sized> SampleRandom for T {}

/// A rejection-sampling [`Distribution`] over the points of a shape.
///
/// Created by [`SampleRandom::sampler`]. Each sample is an [`Option`],
/// [`None`] when the budget is exhausted.
#[derive(Debug)]
pub struct Rejection<'a, S: ?Sized> {
    shape: &'a S,
    budget: u32,
}

impl<S: ?Sized> Clone for Rejection<'_, S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S: ?Sized> Copy for Rejection<'_, S> {}

impl<S: SampleRandom + ?Sized> Distribution<Option<Point>> for Rejection<'_, S> {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<Point> {
        self.shape.sample_random_point(rng, self.budget)
    }
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, SeedableRng};

    use crate::prelude::*;

    use super::DEFAULT_BUDGET;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(0x5eed)
    }

    #[test]
    fn samples_lie_in_rect() {
        let mut rng = rng();
        let rect = Rect::from_sides(-1., 2., 3., 4.);
        for _ in 0..1000 {
            let p = rect.sample_random_point(&mut rng, 1).unwrap();
            assert!(rect.contains(&p));
        }
    }

    #[test]
    fn zero_area_rect_samples_its_point() {
        let mut rng = rng();
        for p in [Point::zero(), Point::new(-4.5, 12.)] {
            let rect = Rect::from_point(p);
            for _ in 0..10 {
                assert_eq!(rect.sample_random_point(&mut rng, 1), Some(p));
            }
        }
        let rect = Rect::from_origin_dims(Point::zero(), 0., 0.);
        assert_eq!(rect.try_sample_random_point(&mut rng, 100), Ok(Point::zero()));
    }

    #[test]
    fn union_with_point_ellipse_samples_inside() {
        let mut rng = rng();
        let union = Union::empty()
            .with(Rect::from_origin_dims(Point::zero(), 10., 100.))
            .with(Ellipse::new(Point::zero(), 0., 0.));
        for _ in 0..100 {
            let p = union.sample_random_point(&mut rng, 100).unwrap();
            assert!(union.contains(&p));
        }
    }

    #[test]
    fn point_ellipse_samples_center() {
        let mut rng = rng();
        let center = Point::new(3., -7.);
        let ellipse = Ellipse::new(center, 0., 0.);
        for _ in 0..10 {
            assert_eq!(ellipse.sample_random_point(&mut rng, 1), Some(center));
        }
    }

    #[test]
    fn segment_ellipse_samples_on_segment() {
        let mut rng = rng();
        let ellipse = Ellipse::new(Point::new(2., 0.), 0., 5.);
        for _ in 0..100 {
            let p = ellipse.sample_random_point(&mut rng, 1).unwrap();
            assert_eq!(p.x, 2.);
            assert!((-5. ..5.).contains(&p.y));
        }
    }

    #[test]
    fn empty_shape_yields_none() {
        let mut rng = rng();
        let union = Union::empty();
        assert_eq!(union.sample_random_point(&mut rng, 100), None);
        assert_eq!(
            union.try_sample_random_point(&mut rng, 100),
            Err(Error::EmptyShape)
        );
    }

    #[test]
    fn zero_budget_yields_none() {
        let mut rng = rng();
        let rect = Rect::from_sides(0., 0., 1., 1.);
        assert_eq!(rect.sample_random_point(&mut rng, 0), None);
        assert_eq!(
            rect.try_sample_random_point(&mut rng, 0),
            Err(Error::BudgetExhausted { budget: 0 })
        );
    }

    #[test]
    fn measure_zero_shape_exhausts_budget() {
        let mut rng = rng();
        // Two isolated points: their union's box has area, but they do not.
        let union = Union::empty()
            .with(Ellipse::new(Point::new(0., 0.), 0., 0.))
            .with(Ellipse::new(Point::new(10., 10.), 0., 0.));
        assert_eq!(
            union.try_sample_random_point(&mut rng, 100),
            Err(Error::BudgetExhausted { budget: 100 })
        );
    }

    #[test]
    fn sample_points_collects_successes() {
        let mut rng = rng();
        let ellipse = Ellipse::new(Point::new(1., 1.), 3., 2.);
        let points = ellipse.sample_points(&mut rng, 50, &SampleConfig::default());
        assert_eq!(points.len(), 50);
        assert!(points.iter().all(|p| ellipse.contains(p)));

        let none = Union::empty().sample_points(&mut rng, 50, &SampleConfig::with_budget(10));
        assert!(none.is_empty());
    }

    #[test]
    fn sampler_is_a_distribution() {
        use rand::distributions::Distribution;

        let rng = rng();
        let circle = Ellipse::circle(Point::zero(), 1.);
        let points: Vec<_> = circle.sampler(100).sample_iter(rng).take(20).collect();
        assert_eq!(points.len(), 20);
        assert!(points.iter().all(|p| p.is_some_and(|p| circle.contains(&p))));
    }

    #[test]
    fn config_defaults_missing_fields() {
        let config: SampleConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, SampleConfig::default());
        assert_eq!(config.budget, DEFAULT_BUDGET);

        let config: SampleConfig = serde_json::from_str(r#"{"budget": 7}"#).unwrap();
        assert_eq!(config, SampleConfig::with_budget(7));
    }
}
