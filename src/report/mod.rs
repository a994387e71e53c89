//! Report tables
//!
//! Turns aggregation records into a presentation-neutral [`TableModel`]
//! (header row + one row per record), which [`ascii`] renders for terminals.
//! JSON output serializes the records directly.

use crate::aggregate::AggregationRecord;
use crate::pipeline::ProviderReport;
use serde::Serialize;

pub mod ascii;

pub use ascii::render_ascii;

/// Report errors
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    /// JSON serialization failed
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for report operations
pub type ReportResult<T> = Result<T, ReportError>;

/// Column headers, in display order
pub const HEADER: [&str; 4] = [
    "Language",
    "Vacancies found",
    "Vacancies processed",
    "Average salary",
];

/// Shown instead of a mean when no salary was usable
pub const NO_DATA_PLACEHOLDER: &str = "no data";

/// A titled table: header row plus data rows, all cells preformatted
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableModel {
    /// Table title
    pub title: String,
    /// Header cells
    pub header: Vec<String>,
    /// Data rows, one per record
    pub rows: Vec<Vec<String>>,
}

/// Format a mean salary to one decimal place, or the placeholder
pub fn format_mean(mean: Option<f64>) -> String {
    match mean {
        Some(value) => format!("{value:.1}"),
        None => NO_DATA_PLACEHOLDER.to_string(),
    }
}

/// Build a table from records, keeping their order
pub fn assemble(title: impl Into<String>, records: &[AggregationRecord]) -> TableModel {
    let rows = records
        .iter()
        .map(|record| {
            vec![
                record.query.clone(),
                record.found.to_string(),
                record.processed.to_string(),
                format_mean(record.mean_salary),
            ]
        })
        .collect();

    TableModel {
        title: title.into(),
        header: HEADER.iter().map(|h| h.to_string()).collect(),
        rows,
    }
}

/// Build the table of a provider report
pub fn assemble_provider(report: &ProviderReport) -> TableModel {
    assemble(report.title(), &report.records)
}

/// Serialize provider reports as pretty JSON
pub fn to_json(reports: &[ProviderReport]) -> ReportResult<String> {
    Ok(serde_json::to_string_pretty(reports)?)
}
