//! Vacancy fetcher implementations

use crate::config::ProviderSettings;
use crate::{Provider, Vacancy};
use async_trait::async_trait;

pub mod headhunter;
pub mod http;
pub mod pagination;
pub mod parser;
pub mod provider_config;
pub mod shared_resources;
pub mod superjob;

/// Fetcher errors
#[derive(Debug, thiserror::Error)]
pub enum FetcherError {
    /// Provider answered with a non-success HTTP status
    #[error("transport error: HTTP {status}: {body}")]
    Transport {
        /// HTTP status code
        status: u16,
        /// Response body, as far as it could be read
        body: String,
    },

    /// Request could not be sent or no response arrived
    #[error("network error: {0}")]
    Network(String),

    /// Response body violates the provider protocol
    #[error("malformed response: {0}")]
    MalformedResponse(String),

    /// Flag-based pagination did not terminate
    #[error("pagination limit of {limit} pages exceeded for {provider}")]
    PaginationLimit {
        /// Provider being paginated
        provider: Provider,
        /// Page cap that was hit
        limit: u32,
    },

    /// Provider requires a credential that was not configured
    #[error("missing credential: {0}")]
    MissingCredential(String),

    /// Configured credential cannot be sent as an HTTP header
    #[error("invalid credential: {0}")]
    InvalidCredential(String),
}

/// Result type for fetcher operations
pub type FetcherResult<T> = Result<T, FetcherError>;

/// Every vacancy of one query plus the provider-reported match count
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FetchedVacancies {
    /// Vacancies in page order, then in-page order
    pub vacancies: Vec<Vacancy>,
    /// Provider-reported total (may exceed `vacancies.len()`)
    pub found: u64,
}

/// Vacancy fetcher trait, one implementation per provider protocol
#[async_trait]
pub trait VacancyFetcher: Send + Sync {
    /// Fetch every vacancy matching a query term
    ///
    /// # Arguments
    /// * `query` - Query term (e.g., "Python")
    ///
    /// # Errors
    /// Any failed page aborts the whole fetch; no partial list is returned.
    async fn fetch(&self, query: &str) -> FetcherResult<FetchedVacancies>;

    /// Provider served by this fetcher
    fn provider(&self) -> Provider;

    /// Location label used in report titles (e.g., "Moscow")
    fn location(&self) -> &str;
}

/// Create a fetcher for the provider named in `settings`
///
/// # Errors
/// Returns [`FetcherError::MissingCredential`] when SuperJob is requested
/// without an application token
pub fn create_fetcher(settings: &ProviderSettings) -> FetcherResult<Box<dyn VacancyFetcher>> {
    match settings.provider {
        Provider::HeadHunter => Ok(Box::new(headhunter::HeadHunterFetcher::new(
            settings.clone(),
        ))),
        Provider::SuperJob => Ok(Box::new(superjob::SuperJobFetcher::new(settings.clone())?)),
    }
}
