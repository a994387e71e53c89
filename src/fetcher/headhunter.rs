//! HeadHunter vacancy fetcher
//!
//! `GET /vacancies?text=..&area=..&currency=RUR&page=N&per_page=100`, paginated
//! by the `pages` count in each response.

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use std::sync::Arc;
use tracing::info;

use super::http::JobBoardHttpClient;
use super::pagination::{CountedPage, PaginationHelper};
use super::parser::VacancyParser;
use super::shared_resources::global_http_client;
use super::{FetchedVacancies, FetcherResult, VacancyFetcher};
use crate::config::ProviderSettings;
use crate::Provider;

/// HeadHunter vacancy fetcher
pub struct HeadHunterFetcher {
    http_client: JobBoardHttpClient,
    settings: ProviderSettings,
    location_label: String,
}

impl HeadHunterFetcher {
    /// Create a fetcher using the shared HTTP client
    pub fn new(settings: ProviderSettings) -> Self {
        Self::with_client(global_http_client(), settings)
    }

    /// Create a fetcher on a caller-provided HTTP client
    pub fn with_client(client: Arc<Client>, settings: ProviderSettings) -> Self {
        let http_client = JobBoardHttpClient::new(client, settings.base_url.clone());
        let location_label = settings.location_label();
        Self {
            http_client,
            settings,
            location_label,
        }
    }

    /// Query parameters for one page; everything but `page` is constant per query
    pub fn page_params(&self, text: &str, page: u32) -> Vec<(&'static str, String)> {
        let config = self.settings.config();
        let mut params = vec![
            (config.query_param, text.to_string()),
            (config.location_param, self.settings.location.clone()),
        ];
        if config.sends_currency_filter {
            params.push(("currency", config.currency.to_string()));
        }
        params.push(("page", page.to_string()));
        params.push((config.page_size_param, self.settings.per_page.to_string()));
        params
    }

    async fn fetch_page(&self, text: &str, page: u32) -> FetcherResult<CountedPage> {
        let config = self.settings.config();
        let params = self.page_params(text, page);
        let body: Value = self
            .http_client
            .get(config.vacancies_endpoint, &params)
            .await?;
        VacancyParser::parse_headhunter_page(&body, config)
    }
}

#[async_trait]
impl VacancyFetcher for HeadHunterFetcher {
    async fn fetch(&self, query: &str) -> FetcherResult<FetchedVacancies> {
        let text = self.settings.query_text(query);
        info!("Fetching HeadHunter vacancies for '{}'", text);

        let fetched = PaginationHelper::paginate_by_page_count(
            query,
            self.settings.max_pages,
            |page| self.fetch_page(&text, page),
        )
        .await?;

        info!(
            "HeadHunter '{}': {} vacancies fetched, {} found",
            query,
            fetched.vacancies.len(),
            fetched.found
        );
        Ok(fetched)
    }

    fn provider(&self) -> Provider {
        Provider::HeadHunter
    }

    fn location(&self) -> &str {
        &self.location_label
    }
}
