//! Pagination helper for job-board searches
//!
//! Provides the two termination protocols the providers use:
//! - Page count: the response reports how many pages exist (HeadHunter)
//! - More flag: the response reports whether another page follows (SuperJob)
//!
//! Both start at page index 0, concatenate items in page order, and stop at
//! the first failing page without returning what was collected so far.

use crate::fetcher::{FetchedVacancies, FetcherError, FetcherResult};
use crate::{Provider, Vacancy};
use std::future::Future;
use tracing::{debug, warn};

/// Maximum number of flag-driven pages before the provider is assumed broken
pub const MAX_FLAGGED_PAGES: u32 = 1_000;

/// One page from a provider that reports its page count
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CountedPage {
    /// Vacancies on this page
    pub vacancies: Vec<Vacancy>,
    /// Total matches reported by the provider
    pub found: u64,
    /// Total pages reported by the provider
    pub pages: u32,
}

/// One page from a provider that reports a "more pages" flag
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FlaggedPage {
    /// Vacancies on this page
    pub vacancies: Vec<Vacancy>,
    /// Total matches reported by the provider
    pub total: u64,
    /// Whether another page is available
    pub more: bool,
}

/// Pagination helper for job-board searches
pub struct PaginationHelper;

impl PaginationHelper {
    /// Paginate a provider that reports a total page count
    ///
    /// Stops once the next page index reaches the reported `pages`, or after
    /// `max_pages` requests, whichever comes first. Reaching `max_pages` is not
    /// an error: the provider's `found` still reports the full match count.
    ///
    /// # Arguments
    /// * `query` - Query term, for logging
    /// * `max_pages` - Safety cap on requests
    /// * `fetch_page` - Async function fetching the page with the given index
    ///
    /// # Errors
    /// Returns the first page error unchanged
    pub async fn paginate_by_page_count<F, Fut>(
        query: &str,
        max_pages: u32,
        fetch_page: F,
    ) -> FetcherResult<FetchedVacancies>
    where
        F: Fn(u32) -> Fut,
        Fut: Future<Output = FetcherResult<CountedPage>>,
    {
        let mut all_vacancies = Vec::new();
        let mut found = 0;
        let mut page = 0;

        loop {
            debug!("Fetching page {} for '{}'", page, query);

            let response = fetch_page(page).await?;

            debug!(
                "Received {} vacancies in page {} of {}",
                response.vacancies.len(),
                page,
                response.pages
            );

            all_vacancies.extend(response.vacancies);
            found = response.found;
            page += 1;

            if page >= response.pages {
                break;
            }

            if page >= max_pages {
                warn!(
                    "Stopping '{}' at page cap {} of {} reported pages ({} vacancies collected, {} found)",
                    query,
                    max_pages,
                    response.pages,
                    all_vacancies.len(),
                    found
                );
                break;
            }
        }

        debug!(
            "Pagination completed after {} pages. Total vacancies: {}",
            page,
            all_vacancies.len()
        );

        Ok(FetchedVacancies {
            vacancies: all_vacancies,
            found,
        })
    }

    /// Paginate a provider that reports a "more pages available" flag
    ///
    /// Stops on the first page whose flag is false, regardless of its index.
    ///
    /// # Arguments
    /// * `provider` - Provider being paginated, for the limit error
    /// * `query` - Query term, for logging
    /// * `max_pages` - Safety cap on requests
    /// * `fetch_page` - Async function fetching the page with the given index
    ///
    /// # Errors
    /// Returns the first page error unchanged, or [`FetcherError::PaginationLimit`]
    /// if the flag is still set after `max_pages` pages
    pub async fn paginate_by_more_flag<F, Fut>(
        provider: Provider,
        query: &str,
        max_pages: u32,
        fetch_page: F,
    ) -> FetcherResult<FetchedVacancies>
    where
        F: Fn(u32) -> Fut,
        Fut: Future<Output = FetcherResult<FlaggedPage>>,
    {
        let mut all_vacancies = Vec::new();
        let mut page = 0;

        loop {
            if page >= max_pages {
                return Err(FetcherError::PaginationLimit {
                    provider,
                    limit: max_pages,
                });
            }

            debug!("Fetching page {} for '{}'", page, query);

            let response = fetch_page(page).await?;

            debug!(
                "Received {} vacancies in page {} (more: {})",
                response.vacancies.len(),
                page,
                response.more
            );

            all_vacancies.extend(response.vacancies);

            if !response.more {
                debug!(
                    "Pagination completed after {} pages. Total vacancies: {}",
                    page + 1,
                    all_vacancies.len()
                );
                return Ok(FetchedVacancies {
                    vacancies: all_vacancies,
                    found: response.total,
                });
            }

            page += 1;
        }
    }
}
