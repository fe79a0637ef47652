//! Model-related error types

use thiserror::Error;

/// Model-related errors
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ModelError {
    /// The explanatory and response samples differ in length
    #[error("Length mismatch: x has {x_len} samples, y has {y_len}")]
    LengthMismatch {
        /// Number of x samples
        x_len: usize,
        /// Number of y samples
        y_len: usize,
    },

    /// Insufficient data for model fitting.
    ///
    /// Only raised under [`DegeneratePolicy::Reject`](crate::lm::DegeneratePolicy::Reject).
    #[error("Not enough data: {n_samples} samples, at least {required} required")]
    InsufficientData {
        /// Number of samples
        n_samples: usize,
        /// Minimum number of samples
        required: usize,
    },

    /// All x values are identical, the slope is undefined.
    ///
    /// Only raised under [`DegeneratePolicy::Reject`](crate::lm::DegeneratePolicy::Reject).
    #[error("Explanatory variable has zero variance")]
    ZeroVariance,

    /// Invalid model configuration
    #[error("Invalid model configuration: {message}")]
    InvalidConfig {
        /// Configuration error message
        message: String,
    },

    /// Model not fitted yet
    #[error("Model not fitted yet")]
    NotFitted,
}
