//! Error types for validating constructors and fallible sampling.

use thiserror::Error;

/// An error produced while constructing or sampling a shape.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum Error {
    /// A rectangle's upper bounds lie below its lower bounds.
    #[error("inverted bounds: left={left}, bot={bot}, right={right}, top={top}")]
    InvertedBounds {
        /// The left x-coordinate.
        left: f64,
        /// The bottom y-coordinate.
        bot: f64,
        /// The right x-coordinate.
        right: f64,
        /// The top y-coordinate.
        top: f64,
    },
    /// A rectangle was given a negative width or height.
    #[error("negative dimension: width={width}, height={height}")]
    NegativeDimension {
        /// The requested width.
        width: f64,
        /// The requested height.
        height: f64,
    },
    /// An ellipse was given a negative radius.
    #[error("negative radius: rx={rx}, ry={ry}")]
    NegativeRadius {
        /// The requested horizontal radius.
        rx: f64,
        /// The requested vertical radius.
        ry: f64,
    },
    /// A coordinate or dimension was NaN or infinite.
    #[error("non-finite coordinate or dimension")]
    NonFinite,
    /// The shape has no bounding box, so there is nothing to sample from.
    #[error("shape is empty")]
    EmptyShape,
    /// Rejection sampling did not accept a candidate within the budget.
    #[error("no point accepted after {budget} attempts")]
    BudgetExhausted {
        /// The number of attempts made.
        budget: u32,
    },
}

/// A result type returning [`Error`] on failure.
pub type Result<T> = std::result::Result<T, Error>;

/// Returns [`Error::NonFinite`] unless every value is finite.
pub(crate) fn ensure_finite(values: &[f64]) -> Result<()> {
    if values.iter().all(|v| v.is_finite()) {
        Ok(())
    } else {
        Err(Error::NonFinite)
    }
}
