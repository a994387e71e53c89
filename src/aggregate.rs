//! Per-query salary statistics

use crate::salary::estimate_bounds;
use crate::Vacancy;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Statistics for one (provider, query) pair
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregationRecord {
    /// Query term (programming language)
    pub query: String,
    /// Provider-reported total number of matching vacancies
    pub found: u64,
    /// Number of vacancies with a usable salary estimate
    pub processed: u64,
    /// Mean of the usable estimates; `None` when nothing was usable
    pub mean_salary: Option<f64>,
}

/// Reduce one query's vacancies to an [`AggregationRecord`]
///
/// Never fails: vacancies without a usable salary only count towards `found`.
pub fn aggregate(query: &str, vacancies: &[Vacancy], found: u64) -> AggregationRecord {
    let estimates: Vec<f64> = vacancies
        .iter()
        .filter_map(|vacancy| estimate_bounds(&vacancy.salary).value())
        .collect();

    let processed = estimates.len() as u64;
    let mean_salary = if estimates.is_empty() {
        None
    } else {
        Some(estimates.iter().sum::<f64>() / estimates.len() as f64)
    };

    // Provider counts can be stale, so this is informational only
    if vacancies.len() as u64 > found {
        debug!(
            "Query '{}': fetched {} vacancies but provider reported {} found",
            query,
            vacancies.len(),
            found
        );
    }

    AggregationRecord {
        query: query.to_string(),
        found,
        processed,
        mean_salary,
    }
}
