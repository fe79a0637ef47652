//! Model summary structures

use super::coefficient::Coefficient;
use super::statistics::{ModelStatistics, ResidualStatistics};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Comprehensive model summary structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelSummary {
    /// Number of observations
    pub n_obs: usize,
    /// Coefficients table
    pub coefficients: Vec<Coefficient>,
    /// Model statistics
    pub model_statistics: ModelStatistics,
    /// Residual statistics
    pub residual_statistics: ResidualStatistics,
}

impl fmt::Display for ModelSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Model Summary")?;
        writeln!(f, "=============")?;
        writeln!(f, "Model Type: Simple Linear Regression")?;
        writeln!(f, "Observations: {}", self.n_obs)?;
        writeln!(f)?;

        // Residuals
        let r = &self.residual_statistics;
        writeln!(f, "Residuals:")?;
        writeln!(
            f,
            "{:>12} {:>12} {:>12} {:>12} {:>12}",
            "Min", "1Q", "Median", "3Q", "Max"
        )?;
        writeln!(
            f,
            "{:>12.6} {:>12.6} {:>12.6} {:>12.6} {:>12.6}",
            r.min, r.q1, r.median, r.q3, r.max
        )?;
        writeln!(f)?;

        // Coefficients
        writeln!(f, "Coefficients:")?;
        writeln!(f, "{:<20} {:>12}", "Term", "Estimate")?;
        writeln!(f, "{:-<20} {:-<12}", "", "")?;
        for coeff in &self.coefficients {
            writeln!(f, "{:<20} {:>12.6}", coeff.name, coeff.estimate)?;
        }
        writeln!(f)?;

        // Model statistics
        let s = &self.model_statistics;
        writeln!(f, "Model Statistics:")?;
        writeln!(f, "  R-squared: {:.4}", s.r_squared)?;
        writeln!(f, "  Residual Variance: {:.6}", s.residual_variance)?;
        writeln!(f, "  Residual Std. Error: {:.6}", s.residual_std_error)?;
        writeln!(f, "  Residual DF: {}", s.df_residual)?;

        Ok(())
    }
}
