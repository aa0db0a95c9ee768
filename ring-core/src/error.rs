//! Errors raised while validating a [`crate::config::Config`].

use thiserror::Error;

/// A configuration the layer engine refuses to run.
///
/// Validation happens up front, so an engine that was built successfully
/// always produces a complete diagram.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// The fan needs at least two rays to form a pair.
    #[error("at least 2 seed vectors are required, got {0}")]
    TooFewVectors(usize),

    #[error("number of circles must be at least 1")]
    NoCircles,

    /// Labels divide by the layer, which is a multiple of the denominator.
    #[error("base seed denominator must be at least 1, got {0}")]
    InvalidDenominator(i64),

    #[error("rounding precision must be at most {max}, got {got}")]
    RoundingPrecision { got: u32, max: u32 },

    /// The outermost layer or label would not fit in a [`crate::types::LayerValue`].
    #[error(
        "labels overflow: numerator {numerator} with denominator {denominator} over {circles} circles"
    )]
    LabelOverflow {
        numerator: i64,
        denominator: i64,
        circles: usize,
    },

    /// A NaN or infinite number in the named field.
    #[error("{field} must be finite")]
    NonFinite { field: String },
}
