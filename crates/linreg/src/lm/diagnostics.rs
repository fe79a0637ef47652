//! Simple regression diagnostics
//!
//! Influence measures of the individual observations on the fitted line:
//! leverage (hat values) and Cook's distances.

use ndarray::Array1;
use serde::{Deserialize, Serialize};

use crate::base::{ModelError, ModelStatistics, Result};
use crate::lm::result::SimpleRegressionResult;

/// Leverage within this distance of 1 is treated as exactly 1
const UNIT_LEVERAGE_TOL: f64 = 1e-12;

/// Diagnostic results
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Diagnostics {
    /// Hat matrix diagonal
    pub leverage: Array1<f64>,
    /// Cook's distance of each observation
    pub cooks_distance: Array1<f64>,
    /// Observations with leverage above `k * p / n`
    pub high_leverage: Vec<LeveragePoint>,
    /// Observations with Cook's distance above `4 / n`
    pub cooks_outliers: Vec<CookOutlier>,
}

/// High leverage point
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LeveragePoint {
    pub index: usize,
    pub leverage: f64,
    pub threshold: f64,
}

/// Cook's distance outlier
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CookOutlier {
    pub index: usize,
    pub distance: f64,
    pub threshold: f64,
}

impl Diagnostics {
    /// Compute diagnostics of a fitted line.
    ///
    /// Needs at least three observations and a non-constant `x`. Cook's
    /// distances use the unbiased error variance `rss / (n - 2)`; they are
    /// all zero when the residual sum of squares is negligible next to
    /// the total sum of squares. An observation with leverage 1 pins the
    /// line to itself; its distance is reported as `f64::INFINITY` and it is
    /// always listed in `cooks_outliers`.
    pub fn compute(result: &SimpleRegressionResult, leverage_threshold: f64) -> Result<Self> {
        let p = ModelStatistics::N_PARAMS;
        let n = result.x.len();
        if n <= p {
            return Err(ModelError::InsufficientData {
                n_samples: n,
                required: p + 1,
            });
        }

        let nf = n as f64;
        let mean_x = result.x.sum() / nf;
        let sxx = result.x.iter().map(|&xi| (xi - mean_x).powi(2)).sum::<f64>();
        if sxx == 0.0 {
            return Err(ModelError::ZeroVariance);
        }

        let leverage = result.x.mapv(|xi| 1.0 / nf + (xi - mean_x).powi(2) / sxx);

        let stats = &result.model_statistics;
        let s2 = stats.rss / (n - p) as f64;
        let cooks_distance: Array1<f64> = if stats.rss <= f64::EPSILON * stats.tss {
            Array1::zeros(n)
        } else {
            result
                .residuals
                .iter()
                .zip(leverage.iter())
                .map(|(&e, &h)| {
                    if 1.0 - h <= UNIT_LEVERAGE_TOL {
                        f64::INFINITY
                    } else {
                        (e * e * h) / (p as f64 * s2 * (1.0 - h).powi(2))
                    }
                })
                .collect()
        };

        let lev_cut = leverage_threshold * p as f64 / nf;
        let high_leverage = leverage
            .iter()
            .enumerate()
            .filter(|&(_, &h)| h > lev_cut)
            .map(|(index, &leverage)| LeveragePoint {
                index,
                leverage,
                threshold: lev_cut,
            })
            .collect();

        let cook_cut = 4.0 / nf;
        let cooks_outliers = cooks_distance
            .iter()
            .enumerate()
            .filter(|&(_, &d)| d > cook_cut)
            .map(|(index, &distance)| CookOutlier {
                index,
                distance,
                threshold: cook_cut,
            })
            .collect();

        Ok(Self {
            leverage,
            cooks_distance,
            high_leverage,
            cooks_outliers,
        })
    }
}
