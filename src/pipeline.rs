//! Sequential statistics pipeline
//!
//! Runs every query against one fetcher, one at a time: each query's pages are
//! all fetched before the next query starts, and no two requests overlap.

use crate::aggregate::{aggregate, AggregationRecord};
use crate::fetcher::{FetcherResult, VacancyFetcher};
use crate::Provider;
use serde::Serialize;
use tracing::{info, warn};

/// What to do when fetching a query fails
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ErrorPolicy {
    /// Stop the provider run and return the error
    #[default]
    Abort,
    /// Log the failure, leave the query out, and continue
    Skip,
}

/// A query left out of a report under [`ErrorPolicy::Skip`]
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QueryFailure {
    /// Query term
    pub query: String,
    /// Error description
    pub error: String,
}

/// All statistics collected from one provider
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProviderReport {
    /// Provider queried
    pub provider: Provider,
    /// Location label of the provider's region filter
    pub location: String,
    /// One record per successful query, in query order
    pub records: Vec<AggregationRecord>,
    /// Queries that failed and were skipped
    pub failures: Vec<QueryFailure>,
}

impl ProviderReport {
    /// Report title, e.g. "HeadHunter Moscow"
    pub fn title(&self) -> String {
        format!("{} {}", self.provider.display_name(), self.location)
    }
}

/// Fetch and aggregate every query against one provider
///
/// # Errors
/// Under [`ErrorPolicy::Abort`] the first fetch error is returned unchanged
pub async fn collect_statistics(
    fetcher: &dyn VacancyFetcher,
    queries: &[String],
    policy: ErrorPolicy,
) -> FetcherResult<ProviderReport> {
    collect_statistics_with_progress(fetcher, queries, policy, |_| {}).await
}

/// Same as [`collect_statistics`], calling `on_query_done` after each query
pub async fn collect_statistics_with_progress<P>(
    fetcher: &dyn VacancyFetcher,
    queries: &[String],
    policy: ErrorPolicy,
    mut on_query_done: P,
) -> FetcherResult<ProviderReport>
where
    P: FnMut(&str),
{
    let provider = fetcher.provider();
    let mut records = Vec::with_capacity(queries.len());
    let mut failures = Vec::new();

    for query in queries {
        match fetcher.fetch(query).await {
            Ok(fetched) => {
                let record = aggregate(query, &fetched.vacancies, fetched.found);
                info!(
                    "{} '{}': found={} processed={} mean={:?}",
                    provider.display_name(),
                    record.query,
                    record.found,
                    record.processed,
                    record.mean_salary
                );
                records.push(record);
            }
            Err(e) => match policy {
                ErrorPolicy::Abort => return Err(e),
                ErrorPolicy::Skip => {
                    warn!(
                        "Skipping {} query '{}': {}",
                        provider.display_name(),
                        query,
                        e
                    );
                    failures.push(QueryFailure {
                        query: query.clone(),
                        error: e.to_string(),
                    });
                }
            },
        }
        on_query_done(query);
    }

    Ok(ProviderReport {
        provider,
        location: fetcher.location().to_string(),
        records,
        failures,
    })
}
