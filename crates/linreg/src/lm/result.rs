//! Simple regression result

use ndarray::{Array1, array};
use serde::{Deserialize, Serialize};

use crate::base::{Coefficient, ModelResultTrait, ModelStatistics};
use crate::lm::ols::LineEstimate;

/// Name of the slope coefficient in summaries
pub const SLOPE_NAME: &str = "x";

/// Fitted simple regression
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimpleRegressionResult {
    /// Intercept, slope and residual variance
    pub estimate: LineEstimate,
    /// `[alpha, beta]`
    pub coefficients: Array1<f64>,
    /// Explanatory samples
    pub x: Array1<f64>,
    /// Response samples
    pub y: Array1<f64>,
    /// Fitted values
    pub fitted_values: Array1<f64>,
    /// Residuals `y - fitted`
    pub residuals: Array1<f64>,
    /// Model statistics
    pub model_statistics: ModelStatistics,
}

impl SimpleRegressionResult {
    /// Build the result of fitting `estimate` to `x` and `y`
    pub fn new(x: Array1<f64>, y: Array1<f64>, estimate: LineEstimate) -> Self {
        let fitted_values = x.mapv(|xi| estimate.predict(xi));
        let residuals = &y - &fitted_values;
        let model_statistics =
            ModelStatistics::new(y.view(), residuals.view(), estimate.variance);

        Self {
            estimate,
            coefficients: array![estimate.alpha, estimate.beta],
            x,
            y,
            fitted_values,
            residuals,
            model_statistics,
        }
    }
}

impl ModelResultTrait for SimpleRegressionResult {
    fn coefficients(&self) -> Vec<Coefficient> {
        vec![
            Coefficient::intercept(self.estimate.alpha),
            Coefficient::new(SLOPE_NAME, self.estimate.beta),
        ]
    }

    fn fitted_values(&self) -> &Array1<f64> {
        &self.fitted_values
    }

    fn residuals(&self) -> &Array1<f64> {
        &self.residuals
    }

    fn r_squared(&self) -> f64 {
        self.model_statistics.r_squared
    }

    fn residual_variance(&self) -> f64 {
        self.model_statistics.residual_variance
    }

    fn residual_std_error(&self) -> f64 {
        self.model_statistics.residual_std_error
    }

    fn df_residual(&self) -> usize {
        self.model_statistics.df_residual
    }
}
