//! Statistical structures for model results

use ndarray::{Array1, ArrayView1};
use serde::{Deserialize, Serialize};

/// Model statistics
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ModelStatistics {
    /// Number of observations
    pub n_obs: usize,
    /// R-squared
    pub r_squared: f64,
    /// Mean squared residual, `rss / n`
    pub residual_variance: f64,
    /// Square root of the residual variance
    pub residual_std_error: f64,
    /// Residual sum of squares
    pub rss: f64,
    /// Total sum of squares around the mean response
    pub tss: f64,
    /// Residual degrees of freedom
    pub df_residual: usize,
}

impl ModelStatistics {
    /// Number of estimated parameters of a straight line
    pub const N_PARAMS: usize = 2;

    /// Compute statistics from the response and the residuals of a fit.
    ///
    /// `residual_variance` is taken as given so that the value reported
    /// here is the exact one returned by the estimator.
    pub fn new(y: ArrayView1<f64>, residuals: ArrayView1<f64>, residual_variance: f64) -> Self {
        let n = y.len();
        let rss = residuals.iter().map(|&e| e * e).sum::<f64>();
        let mean_y = y.mean().unwrap_or(f64::NAN);
        let tss = y.iter().map(|&yi| (yi - mean_y).powi(2)).sum::<f64>();

        Self {
            n_obs: n,
            r_squared: 1.0 - rss / tss,
            residual_variance,
            residual_std_error: residual_variance.sqrt(),
            rss,
            tss,
            df_residual: n.saturating_sub(Self::N_PARAMS),
        }
    }
}

/// Residual statistics
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ResidualStatistics {
    /// Minimum residual
    pub min: f64,
    /// First quartile
    pub q1: f64,
    /// Median
    pub median: f64,
    /// Third quartile
    pub q3: f64,
    /// Maximum residual
    pub max: f64,
    /// Mean residual
    pub mean: f64,
    /// Population standard deviation
    pub std_dev: f64,
}

impl Default for ResidualStatistics {
    fn default() -> Self {
        Self {
            min: 0.0,
            q1: 0.0,
            median: 0.0,
            q3: 0.0,
            max: 0.0,
            mean: 0.0,
            std_dev: 0.0,
        }
    }
}

impl ResidualStatistics {
    /// Describe a residual vector. Empty input gives the all-zero default.
    pub fn from_residuals(residuals: &Array1<f64>) -> Self {
        if residuals.is_empty() {
            return Self::default();
        }

        let mut sorted = residuals.to_vec();
        sorted.sort_by(f64::total_cmp);

        Self {
            min: sorted[0],
            q1: quantile(&sorted, 0.25),
            median: quantile(&sorted, 0.5),
            q3: quantile(&sorted, 0.75),
            max: sorted[sorted.len() - 1],
            mean: residuals.mean().unwrap_or(0.0),
            std_dev: residuals.std(0.0),
        }
    }
}

/// Linearly interpolated quantile of non-empty sorted data
fn quantile(sorted: &[f64], q: f64) -> f64 {
    let idx = (sorted.len() as f64 - 1.0) * q;
    let lower = idx.floor() as usize;
    let upper = idx.ceil() as usize;

    if lower == upper {
        sorted[lower]
    } else {
        let weight = idx - lower as f64;
        sorted[lower] * (1.0 - weight) + sorted[upper] * weight
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use ndarray::array;

    #[test]
    fn test_quantiles_interpolate() {
        let stats = ResidualStatistics::from_residuals(&array![4.0, -1.0, 2.0, 1.0, 0.0]);

        assert_eq!(stats.min, -1.0);
        assert_eq!(stats.max, 4.0);
        assert_eq!(stats.median, 1.0);
        assert_abs_diff_eq!(stats.q1, 0.0);
        assert_abs_diff_eq!(stats.q3, 2.0);
        assert_abs_diff_eq!(stats.mean, 1.2, epsilon = 1e-12);

        let even = ResidualStatistics::from_residuals(&array![1.0, 2.0, 3.0, 4.0]);
        assert_abs_diff_eq!(even.median, 2.5);
        assert_abs_diff_eq!(even.q1, 1.75);
    }

    #[test]
    fn test_empty_residuals() {
        let stats = ResidualStatistics::from_residuals(&Array1::zeros(0));
        assert_eq!(stats, ResidualStatistics::default());
    }

    #[test]
    fn test_model_statistics_perfect_fit() {
        let y = array![1.0, 2.0, 3.0];
        let residuals = Array1::zeros(3);
        let stats = ModelStatistics::new(y.view(), residuals.view(), 0.0);

        assert_eq!(stats.n_obs, 3);
        assert_eq!(stats.df_residual, 1);
        assert_abs_diff_eq!(stats.tss, 2.0);
        assert_abs_diff_eq!(stats.r_squared, 1.0);
        assert_eq!(stats.residual_std_error, 0.0);
    }
}
