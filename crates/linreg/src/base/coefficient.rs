//! Coefficient definition

use serde::{Deserialize, Serialize};

/// Name given to the intercept term
pub const INTERCEPT: &str = "(Intercept)";

/// Coefficient estimate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Coefficient {
    /// Coefficient name
    pub name: String,
    /// Coefficient estimate
    pub estimate: f64,
    /// Is this the intercept?
    pub is_intercept: bool,
}

impl Coefficient {
    /// Create a new coefficient
    pub fn new(name: impl Into<String>, estimate: f64) -> Self {
        Self {
            name: name.into(),
            estimate,
            is_intercept: false,
        }
    }

    /// Create the intercept coefficient
    pub fn intercept(estimate: f64) -> Self {
        Self::new(INTERCEPT, estimate).as_intercept()
    }

    /// Mark as intercept
    pub fn as_intercept(mut self) -> Self {
        self.is_intercept = true;
        self
    }
}
