//! Core traits and types for regression models
//!
//! This module defines the result interface and the summary
//! structures shared by the models in this crate.

use ndarray::Array1;

// Re-export core types
pub use coefficient::Coefficient;
pub use statistics::ModelStatistics;
pub use statistics::ResidualStatistics;
pub use summary::ModelSummary;

pub use crate::error::ModelError;

pub mod coefficient;
pub mod statistics;
pub mod summary;

/// Result type for model operations
pub type Result<T> = std::result::Result<T, ModelError>;

/// Trait for model results
pub trait ModelResultTrait: Send + Sync {
    /// Get coefficients
    fn coefficients(&self) -> Vec<Coefficient>;

    /// Get fitted values
    fn fitted_values(&self) -> &Array1<f64>;

    /// Get residuals
    fn residuals(&self) -> &Array1<f64>;

    /// Get R-squared value
    fn r_squared(&self) -> f64;

    /// Mean squared residual (divided by n)
    fn residual_variance(&self) -> f64;

    /// Square root of the residual variance
    fn residual_std_error(&self) -> f64;

    /// Get degrees of freedom for residuals
    fn df_residual(&self) -> usize;
}
