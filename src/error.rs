//! Error type for curve baking.

use thiserror::Error;

/// Raised by [`quadratic`](crate::quadratic) and [`cubic`](crate::cubic)
/// when the control polygon or the resolution cannot be baked.
///
/// Each variant names the precondition that failed together with the
/// offending value, so callers can log or display it as is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InvalidCurveInput {
    /// Quadratic control polygons need an odd number of points.
    #[error("an odd number of points must be provided, got {count}")]
    EvenPointCount { count: usize },

    #[error("number of points is too low: got {count}, need at least {min}")]
    TooFewPoints { count: usize, min: usize },

    /// Cubic control polygons need `4 + 3 * k` points.
    #[error("too many or too few points provided: {count} is not 4 + 3k")]
    MisalignedPointCount { count: usize },

    #[error("resolution is too low: got {resolution}, need at least {min}")]
    ResolutionTooLow { resolution: usize, min: usize },
}
