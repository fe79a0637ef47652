//! Ordinary Least Squares (OLS) simple linear regression
//!
//! This module implements the closed-form least squares estimator for
//! one explanatory variable and the model type built on top of it.

use log::{debug, warn};
use ndarray::{Array1, ArrayView1};
use serde::{Deserialize, Serialize};

use crate::base::{ModelError, ModelResultTrait, ModelSummary, ResidualStatistics, Result};
use crate::lm::diagnostics::Diagnostics;
use crate::lm::result::SimpleRegressionResult;
use crate::lm::{Accumulation, DegeneratePolicy, LinearConfig, LinearModel};

// ==================== Estimator ====================

/// Parameters of the fitted line `y = beta * x + alpha`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LineEstimate {
    /// Intercept
    pub alpha: f64,
    /// Slope
    pub beta: f64,
    /// Mean squared residual, divided by `n`
    pub variance: f64,
}

impl LineEstimate {
    /// Value of the line at `x`
    pub fn predict(&self, x: f64) -> f64 {
        self.beta * x + self.alpha
    }

    /// Whether all three parameters are finite numbers
    pub fn is_finite(&self) -> bool {
        self.alpha.is_finite() && self.beta.is_finite() && self.variance.is_finite()
    }
}

impl From<LineEstimate> for (f64, f64, f64) {
    fn from(e: LineEstimate) -> Self {
        (e.alpha, e.beta, e.variance)
    }
}

/// Fit `y = beta * x + alpha` by least squares.
///
/// Returns the intercept, the slope and the mean squared residual. The only
/// error is [`ModelError::LengthMismatch`]. A constant `x` yields NaN or
/// infinite intercept and slope. Empty input yields a NaN intercept and
/// slope and a variance of `0.0`, the sum over no residuals.
///
/// # Example
/// ```
/// let x: Vec<f64> = (0..10).map(f64::from).collect();
/// let y: Vec<f64> = x.iter().map(|&xi| 2.0 * xi + 5.0).collect();
///
/// let est = linreg::fit(&x, &y).unwrap();
/// assert!((est.alpha - 5.0).abs() < 1e-9);
/// assert!((est.beta - 2.0).abs() < 1e-9);
/// ```
pub fn fit(x: &[f64], y: &[f64]) -> Result<LineEstimate> {
    fit_with(ArrayView1::from(x), ArrayView1::from(y), &LinearConfig::default())
}

/// [`fit`] on array views with an explicit configuration
pub fn fit_with(
    x: ArrayView1<f64>,
    y: ArrayView1<f64>,
    config: &LinearConfig,
) -> Result<LineEstimate> {
    if x.len() != y.len() {
        return Err(ModelError::LengthMismatch {
            x_len: x.len(),
            y_len: y.len(),
        });
    }

    let len = x.len();
    if config.degenerate == DegeneratePolicy::Reject && len < 2 {
        return Err(ModelError::InsufficientData {
            n_samples: len,
            required: 2,
        });
    }

    let n = len as f64;
    let moments = Moments::accumulate(x, y, n, config.accumulation);
    // Rounding can leave a tiny non-zero variance for a constant x
    let denominator = if moments.constant_x {
        0.0
    } else {
        moments.mean_x2 - moments.mean_x * moments.mean_x
    };

    if !(denominator.is_finite() && denominator != 0.0) {
        if config.degenerate == DegeneratePolicy::Reject {
            return Err(ModelError::ZeroVariance);
        }
        warn!(
            "x variance is {} over {} samples, the fitted line is degenerate",
            denominator, len
        );
    }

    let beta = (moments.mean_xy - moments.mean_x * moments.mean_y) / denominator;
    let alpha = (moments.mean_y * moments.mean_x2 - moments.mean_x * moments.mean_xy) / denominator;

    // Second pass over the residuals
    let variance = match config.accumulation {
        Accumulation::PerTerm => x.iter().zip(y.iter()).fold(0.0, |acc, (&xi, &yi)| {
            let e = yi - xi * beta - alpha;
            acc + e * e / n
        }),
        Accumulation::Deferred if len == 0 => 0.0,
        Accumulation::Deferred => {
            x.iter()
                .zip(y.iter())
                .map(|(&xi, &yi)| (yi - xi * beta - alpha).powi(2))
                .sum::<f64>()
                / n
        }
    };

    debug!(
        "fitted {} samples: alpha={}, beta={}, variance={}",
        len, alpha, beta, variance
    );

    Ok(LineEstimate {
        alpha,
        beta,
        variance,
    })
}

/// First-pass means of the paired samples
#[derive(Debug, Default, Clone, Copy)]
struct Moments {
    mean_x: f64,
    mean_y: f64,
    mean_x2: f64,
    mean_xy: f64,
    /// Every x equals the first one (true for empty input)
    constant_x: bool,
}

impl Moments {
    fn accumulate(x: ArrayView1<f64>, y: ArrayView1<f64>, n: f64, mode: Accumulation) -> Self {
        let mut m = Moments {
            constant_x: true,
            ..Moments::default()
        };
        let (mut sum_x, mut sum_y) = (0.0, 0.0);
        let first_x = x.first().copied();

        match mode {
            Accumulation::PerTerm => {
                for (&xi, &yi) in x.iter().zip(y.iter()) {
                    m.constant_x &= Some(xi) == first_x;
                    m.mean_xy += xi * yi / n;
                    m.mean_x2 += xi * xi / n;
                    sum_x += xi;
                    sum_y += yi;
                }
            }
            Accumulation::Deferred => {
                for (&xi, &yi) in x.iter().zip(y.iter()) {
                    m.constant_x &= Some(xi) == first_x;
                    m.mean_xy += xi * yi;
                    m.mean_x2 += xi * xi;
                    sum_x += xi;
                    sum_y += yi;
                }
                m.mean_xy /= n;
                m.mean_x2 /= n;
            }
        }

        m.mean_x = sum_x / n;
        m.mean_y = sum_y / n;
        m
    }
}

// ==================== Simple Regression Model ====================

/// OLS regression model for one explanatory variable
#[derive(Debug, Clone, Default)]
pub struct SimpleRegression {
    /// Explanatory and response samples
    data: Option<(Array1<f64>, Array1<f64>)>,
    /// Configuration
    config: LinearConfig,
    /// Fitted result
    result: Option<SimpleRegressionResult>,
}

impl SimpleRegression {
    /// Create a new, unfitted model with the default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Set configuration
    pub fn config(mut self, config: LinearConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the samples. Lengths are checked when fitting.
    pub fn data(self, x: &[f64], y: &[f64]) -> Self {
        self.data_view(ArrayView1::from(x), ArrayView1::from(y))
    }

    /// Set the samples from array views
    pub fn data_view(mut self, x: ArrayView1<f64>, y: ArrayView1<f64>) -> Self {
        self.data = Some((x.to_owned(), y.to_owned()));
        self.result = None;
        self
    }

    /// Fit the model
    pub fn fit(mut self) -> Result<Self> {
        self.config.validate()?;

        let (x, y) = self.data.as_ref().ok_or_else(|| ModelError::InvalidConfig {
            message: "No data provided".to_string(),
        })?;

        let estimate = fit_with(x.view(), y.view(), &self.config)?;
        self.result = Some(SimpleRegressionResult::new(x.clone(), y.clone(), estimate));

        Ok(self)
    }

    /// Active configuration
    pub fn get_config(&self) -> &LinearConfig {
        &self.config
    }

    /// Fitted result
    pub fn result(&self) -> Option<&SimpleRegressionResult> {
        self.result.as_ref()
    }

    /// Intercept, slope and residual variance
    pub fn estimate(&self) -> Option<LineEstimate> {
        self.result.as_ref().map(|r| r.estimate)
    }

    /// Check if model is fitted
    pub fn is_fitted(&self) -> bool {
        self.result.is_some()
    }

    /// Get model summary
    pub fn summary(&self) -> Result<ModelSummary> {
        let result = self.result.as_ref().ok_or(ModelError::NotFitted)?;

        Ok(ModelSummary {
            n_obs: result.y.len(),
            coefficients: result.coefficients(),
            model_statistics: result.model_statistics,
            residual_statistics: ResidualStatistics::from_residuals(&result.residuals),
        })
    }

    /// Leverage and influence of each observation
    pub fn diagnostics(&self) -> Result<Diagnostics> {
        let result = self.result.as_ref().ok_or(ModelError::NotFitted)?;
        Diagnostics::compute(result, self.config.leverage_threshold)
    }
}

impl LinearModel for SimpleRegression {
    fn fit(&mut self) -> Result<&mut Self> {
        let fitted = self.clone().fit()?;
        *self = fitted;
        Ok(self)
    }

    fn coefficients(&self) -> Option<&Array1<f64>> {
        self.result.as_ref().map(|r| &r.coefficients)
    }

    fn predict(&self, x: &[f64]) -> Result<Array1<f64>> {
        let result = self.result.as_ref().ok_or(ModelError::NotFitted)?;
        Ok(x.iter().map(|&xi| result.estimate.predict(xi)).collect())
    }

    fn fitted_values(&self) -> Option<&Array1<f64>> {
        self.result.as_ref().map(|r| &r.fitted_values)
    }

    fn residuals(&self) -> Option<&Array1<f64>> {
        self.result.as_ref().map(|r| &r.residuals)
    }
}
