//! # Vacancy Salary Statistics Library
//!
//! Collects programmer vacancies from job-board search APIs and turns their
//! salary ranges into comparable per-language statistics.
//!
//! ## Features
//!
//! - **Two Providers**: HeadHunter (`api.hh.ru`) and SuperJob (`api.superjob.ru`)
//! - **Protocol-Aware Pagination**: page-count termination for HeadHunter,
//!   `more`-flag termination for SuperJob
//! - **Forgiving Salary Estimation**: open-ended ranges are adjusted instead of dropped
//! - **Report Tables**: ASCII tables or JSON, one per provider
//!
//! ## Quick Start
//!
//! ```no_run
//! use vacancy_salary_stats::config::ProviderSettings;
//! use vacancy_salary_stats::fetcher::create_fetcher;
//! use vacancy_salary_stats::pipeline::{collect_statistics, ErrorPolicy};
//! use vacancy_salary_stats::Provider;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let settings = ProviderSettings::defaults(Provider::HeadHunter);
//! let fetcher = create_fetcher(&settings)?;
//!
//! let languages = vec!["Python".to_string(), "Rust".to_string()];
//! let report = collect_statistics(fetcher.as_ref(), &languages, ErrorPolicy::Abort).await?;
//!
//! for record in &report.records {
//!     println!("{}: {:?}", record.query, record.mean_salary);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Architecture
//!
//! - [`fetcher`] - Provider clients hiding each pagination protocol
//! - [`salary`] - Salary estimate from partial lower/upper bounds
//! - [`aggregate`] - Per-query statistics records
//! - [`report`] - Table assembly and rendering
//! - [`pipeline`] - Sequential driver over all queries of one provider
//! - [`config`] - Validated run configuration

#![warn(missing_docs)]
#![warn(clippy::all)]

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Per-query aggregation
pub mod aggregate;

/// CLI command implementations
pub mod cli;

/// Run configuration and validation
pub mod config;

/// Vacancy fetchers
pub mod fetcher;

/// Sequential statistics pipeline
pub mod pipeline;

/// Report tables
pub mod report;

/// Salary estimation
pub mod salary;

pub use aggregate::AggregationRecord;
pub use salary::SalaryEstimate;

/// Supported job-board providers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Provider {
    /// HeadHunter (api.hh.ru), page-count pagination
    #[value(name = "headhunter", alias = "hh")]
    HeadHunter,
    /// SuperJob (api.superjob.ru), `more`-flag pagination
    #[value(name = "superjob", alias = "sj")]
    SuperJob,
}

impl Provider {
    /// All providers in report order
    pub const ALL: [Provider; 2] = [Provider::HeadHunter, Provider::SuperJob];

    /// Human-readable provider name
    pub fn display_name(&self) -> &'static str {
        match self {
            Provider::HeadHunter => "HeadHunter",
            Provider::SuperJob => "SuperJob",
        }
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Provider::HeadHunter => write!(f, "headhunter"),
            Provider::SuperJob => write!(f, "superjob"),
        }
    }
}

impl FromStr for Provider {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "headhunter" | "hh" => Ok(Provider::HeadHunter),
            "superjob" | "sj" => Ok(Provider::SuperJob),
            _ => Err(format!(
                "Invalid provider: {s}. Valid options: headhunter, superjob"
            )),
        }
    }
}

/// Raw salary range of a vacancy, in the provider's filter currency
///
/// Either bound may be missing. Presence rules live in [`salary::estimate`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SalaryBounds {
    /// Lower bound ("from")
    pub lower: Option<f64>,
    /// Upper bound ("to")
    pub upper: Option<f64>,
}

impl SalaryBounds {
    /// Create bounds from optional lower and upper values
    pub fn new(lower: Option<f64>, upper: Option<f64>) -> Self {
        Self { lower, upper }
    }

    /// Bounds with neither side specified
    pub fn unspecified() -> Self {
        Self::default()
    }
}

/// A single vacancy as returned by a provider, reduced to the fields the
/// statistics need
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vacancy {
    /// Provider-side identifier, when the provider reports one; shown in log lines
    pub id: Option<String>,
    /// Vacancy title, shown in log lines
    pub title: Option<String>,
    /// Salary range
    pub salary: SalaryBounds,
}

impl Vacancy {
    /// Create a vacancy carrying only a salary range
    pub fn with_salary(lower: Option<f64>, upper: Option<f64>) -> Self {
        Self {
            id: None,
            title: None,
            salary: SalaryBounds::new(lower, upper),
        }
    }
}
