//! SuperJob vacancy fetcher
//!
//! `GET /2.0/vacancies/?keyword=..&town=..&page=N&count=100` with the
//! application secret in `X-Api-App-Id`, paginated by the `more` flag.

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use std::sync::Arc;
use tracing::info;

use super::http::JobBoardHttpClient;
use super::pagination::{FlaggedPage, PaginationHelper};
use super::parser::VacancyParser;
use super::shared_resources::global_http_client;
use super::{FetchedVacancies, FetcherError, FetcherResult, VacancyFetcher};
use crate::config::ProviderSettings;
use crate::Provider;

/// SuperJob vacancy fetcher
pub struct SuperJobFetcher {
    http_client: JobBoardHttpClient,
    settings: ProviderSettings,
}

impl SuperJobFetcher {
    /// Create a fetcher using the shared HTTP client
    ///
    /// # Errors
    /// Returns [`FetcherError::MissingCredential`] if `settings` carries no token
    pub fn new(settings: ProviderSettings) -> FetcherResult<Self> {
        Self::with_client(global_http_client(), settings)
    }

    /// Create a fetcher on a caller-provided HTTP client
    ///
    /// # Errors
    /// Returns [`FetcherError::MissingCredential`] if `settings` carries no token,
    /// or [`FetcherError::InvalidCredential`] if it cannot be sent as a header
    pub fn with_client(client: Arc<Client>, settings: ProviderSettings) -> FetcherResult<Self> {
        let config = settings.config();
        let token = settings
            .api_token
            .as_deref()
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .ok_or_else(|| {
                FetcherError::MissingCredential("SuperJob application token".to_string())
            })?;

        let mut http_client = JobBoardHttpClient::new(client, settings.base_url.clone());
        if let Some(header) = config.auth_header {
            http_client = http_client.with_header(header, token)?;
        }

        Ok(Self {
            http_client,
            settings,
        })
    }

    /// Query parameters for one page; everything but `page` is constant per query
    pub fn page_params(&self, text: &str, page: u32) -> Vec<(&'static str, String)> {
        let config = self.settings.config();
        vec![
            (config.query_param, text.to_string()),
            (config.location_param, self.settings.location.clone()),
            ("page", page.to_string()),
            (config.page_size_param, self.settings.per_page.to_string()),
        ]
    }

    async fn fetch_page(&self, text: &str, page: u32) -> FetcherResult<FlaggedPage> {
        let config = self.settings.config();
        let params = self.page_params(text, page);
        let body: Value = self
            .http_client
            .get(config.vacancies_endpoint, &params)
            .await?;
        VacancyParser::parse_superjob_page(&body, config)
    }
}

#[async_trait]
impl VacancyFetcher for SuperJobFetcher {
    async fn fetch(&self, query: &str) -> FetcherResult<FetchedVacancies> {
        let text = self.settings.query_text(query);
        info!("Fetching SuperJob vacancies for '{}'", text);

        // The flag decides; max_pages only bounds a provider that never clears it
        let fetched = PaginationHelper::paginate_by_more_flag(
            Provider::SuperJob,
            query,
            self.settings.max_pages,
            |page| self.fetch_page(&text, page),
        )
        .await?;

        info!(
            "SuperJob '{}': {} vacancies fetched, {} found",
            query,
            fetched.vacancies.len(),
            fetched.found
        );
        Ok(fetched)
    }

    fn provider(&self) -> Provider {
        Provider::SuperJob
    }

    fn location(&self) -> &str {
        &self.settings.location
    }
}
