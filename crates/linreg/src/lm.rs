//! Linear regression models
//!
//! This module provides ordinary least squares regression of a response
//! on a single explanatory variable:
//! - [`fit`], the closed-form estimator returning intercept, slope and
//!   residual variance
//! - [`SimpleRegression`], a model wrapper keeping fitted values,
//!   residuals, summary statistics and influence diagnostics

pub mod diagnostics;
pub mod ols;
pub mod result;


// Re-exports
pub use diagnostics::{CookOutlier, Diagnostics, LeveragePoint};
pub use ols::{LineEstimate, SimpleRegression, fit, fit_with};
pub use result::SimpleRegressionResult;

// Common types
use crate::base::{ModelError, Result};
use ndarray::Array1;
use serde::{Deserialize, Serialize};

/// Linear model configuration
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LinearConfig {
    /// What to do with empty input or a constant explanatory variable
    pub degenerate: DegeneratePolicy,
    /// Where the division by `n` happens when averaging
    pub accumulation: Accumulation,
    /// Multiplier `k` of the average leverage `p / n` above which an
    /// observation is reported as a high-leverage point
    pub leverage_threshold: f64,
}

/// Handling of inputs for which the fitted line is undefined
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DegeneratePolicy {
    /// Return the non-finite values produced by the division by zero
    #[default]
    Propagate,
    /// Fail with [`ModelError::InsufficientData`] below two samples and
    /// [`ModelError::ZeroVariance`] when all x values are equal
    Reject,
}

/// Averaging strategy of the estimator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Accumulation {
    /// Divide every term by `n` before adding it to the running mean
    #[default]
    PerTerm,
    /// Add up raw sums and divide once at the end
    Deferred,
}

impl Default for LinearConfig {
    fn default() -> Self {
        Self {
            degenerate: DegeneratePolicy::Propagate,
            accumulation: Accumulation::PerTerm,
            leverage_threshold: 2.0,
        }
    }
}

impl LinearConfig {
    /// Check that the configuration values are usable
    pub fn validate(&self) -> Result<()> {
        if !(self.leverage_threshold.is_finite() && self.leverage_threshold > 0.0) {
            return Err(ModelError::InvalidConfig {
                message: format!(
                    "leverage_threshold must be positive and finite, got {}",
                    self.leverage_threshold
                ),
            });
        }
        Ok(())
    }
}

/// Linear model trait
pub trait LinearModel {
    /// Fit the model
    fn fit(&mut self) -> Result<&mut Self>;

    /// Get coefficients, intercept first
    fn coefficients(&self) -> Option<&Array1<f64>>;

    /// Get predictions
    fn predict(&self, x: &[f64]) -> Result<Array1<f64>>;

    /// Get fitted values
    fn fitted_values(&self) -> Option<&Array1<f64>>;

    /// Get residuals
    fn residuals(&self) -> Option<&Array1<f64>>;
}

/// Convenience function for simple OLS regression
pub fn lm(x: &[f64], y: &[f64]) -> Result<SimpleRegression> {
    SimpleRegression::new().data(x, y).fit()
}
