//! Simple linear regression.
//!
//! Fits `y = beta * x + alpha` to paired samples by ordinary least squares
//! and reports the intercept, the slope and the mean squared residual.
//!
//! ```
//! let x = [0.0, 1.0, 2.0, 3.0];
//! let y = [5.0, 7.0, 9.0, 11.0];
//!
//! let (alpha, beta, variance): (f64, f64, f64) = linreg::fit(&x, &y).unwrap().into();
//! assert!((alpha - 5.0).abs() < 1e-12);
//! assert!((beta - 2.0).abs() < 1e-12);
//! assert!(variance.abs() < 1e-12);
//! ```

pub mod base;
pub mod error;
pub mod lm;

pub use base::{ModelResultTrait, Result};
pub use error::ModelError;
pub use lm::{
    Accumulation, DegeneratePolicy, LineEstimate, LinearConfig, LinearModel, SimpleRegression, fit,
    lm,
};
