//! Salary estimation from partial salary ranges
//!
//! Vacancies often publish only one side of their salary range. The estimate
//! policy, in priority order:
//!
//! 1. Both bounds present: arithmetic mean of the two
//! 2. Only the lower bound: `lower * 1.2`
//! 3. Only the upper bound: `upper * 0.8`
//! 4. Neither: [`SalaryEstimate::Unusable`]
//!
//! A bound counts as present only when it is a finite, strictly positive
//! number. Both providers encode "not specified" as `0` or `null`, so the
//! same rule applies to every branch.

use crate::SalaryBounds;
use serde::{Deserialize, Serialize};

/// Multiplier applied to a lone lower bound
pub const LOWER_ONLY_FACTOR: f64 = 1.2;

/// Multiplier applied to a lone upper bound
pub const UPPER_ONLY_FACTOR: f64 = 0.8;

/// Estimated monthly salary of one vacancy
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum SalaryEstimate {
    /// A usable estimate
    Estimated(f64),
    /// No bound was present
    Unusable,
}

impl SalaryEstimate {
    /// The estimated value, if usable
    pub fn value(&self) -> Option<f64> {
        match self {
            SalaryEstimate::Estimated(value) => Some(*value),
            SalaryEstimate::Unusable => None,
        }
    }
}

/// Keep a bound only if it is a real, positive amount
fn present(bound: Option<f64>) -> Option<f64> {
    bound.filter(|value| value.is_finite() && *value > 0.0)
}

/// Estimate a representative salary from optional lower and upper bounds
pub fn estimate(lower: Option<f64>, upper: Option<f64>) -> SalaryEstimate {
    match (present(lower), present(upper)) {
        (Some(lower), Some(upper)) => SalaryEstimate::Estimated((lower + upper) / 2.0),
        (Some(lower), None) => SalaryEstimate::Estimated(lower * LOWER_ONLY_FACTOR),
        (None, Some(upper)) => SalaryEstimate::Estimated(upper * UPPER_ONLY_FACTOR),
        (None, None) => SalaryEstimate::Unusable,
    }
}

/// Estimate from a [`SalaryBounds`] pair
pub fn estimate_bounds(bounds: &SalaryBounds) -> SalaryEstimate {
    estimate(bounds.lower, bounds.upper)
}
