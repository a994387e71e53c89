//! Job-board provider configuration
//!
//! Keeps the protocol differences between HeadHunter and SuperJob as data:
//! endpoints, parameter names, response field names and paging limits.
//!
//! # Providers
//!
//! - **HeadHunter**: <https://api.hh.ru/vacancies>, reports `pages`, filters by `area` id
//! - **SuperJob**: <https://api.superjob.ru/2.0/vacancies/>, reports `more`, filters by `town`

use crate::Provider;

/// How a provider signals the last page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaginationStyle {
    /// Response carries the total page count
    PageCount,
    /// Response carries a "more pages available" flag
    MoreFlag,
}

impl PaginationStyle {
    /// Short description for listings
    pub fn describe(&self) -> &'static str {
        match self {
            PaginationStyle::PageCount => "page count",
            PaginationStyle::MoreFlag => "more flag",
        }
    }
}

/// Static configuration for a job-board provider
#[derive(Debug, Clone)]
pub struct ProviderConfig {
    /// Provider described by this configuration
    pub provider: Provider,

    /// Base URL for API (e.g., <https://api.hh.ru>)
    pub base_url: &'static str,

    /// Vacancy search endpoint path
    pub vacancies_endpoint: &'static str,

    /// Pagination termination protocol
    pub pagination: PaginationStyle,

    /// Query parameter carrying the free-text search
    pub query_param: &'static str,

    /// Query parameter carrying the region filter
    pub location_param: &'static str,

    /// Query parameter carrying the page size
    pub page_size_param: &'static str,

    /// JSON field holding the vacancy array
    pub items_field: &'static str,

    /// JSON field holding the total match count
    pub total_field: &'static str,

    /// Default region filter value
    pub default_location: &'static str,

    /// Salary currency code accepted by the statistics
    pub currency: &'static str,

    /// Whether the currency is sent as a request filter
    pub sends_currency_filter: bool,

    /// Largest page size the API accepts
    pub max_page_size: u32,

    /// Deepest result offset the API will serve (page * page_size), if capped
    pub max_results: Option<u32>,

    /// Header carrying the application credential, if one is required
    pub auth_header: Option<&'static str>,
}

impl ProviderConfig {
    /// Number of pages reachable at a given page size, if the provider caps depth
    pub fn reachable_pages(&self, page_size: u32) -> Option<u32> {
        let page_size = page_size.max(1);
        self.max_results
            .map(|max_results| max_results.div_ceil(page_size).max(1))
    }
}

/// HeadHunter configuration
///
/// HeadHunter serves at most 2000 results per search, so deeper pages are
/// never requested.
pub const HEADHUNTER_CONFIG: ProviderConfig = ProviderConfig {
    provider: Provider::HeadHunter,
    base_url: "https://api.hh.ru",
    vacancies_endpoint: "/vacancies",
    pagination: PaginationStyle::PageCount,
    query_param: "text",
    location_param: "area",
    page_size_param: "per_page",
    items_field: "items",
    total_field: "found",
    default_location: "1",
    currency: "RUR",
    sends_currency_filter: true,
    max_page_size: 100,
    max_results: Some(2000),
    auth_header: None,
};

/// SuperJob configuration
///
/// Requests must carry the application secret in `X-Api-App-Id`. Depth is
/// bounded only by the `more` flag.
pub const SUPERJOB_CONFIG: ProviderConfig = ProviderConfig {
    provider: Provider::SuperJob,
    base_url: "https://api.superjob.ru",
    vacancies_endpoint: "/2.0/vacancies/",
    pagination: PaginationStyle::MoreFlag,
    query_param: "keyword",
    location_param: "town",
    page_size_param: "count",
    items_field: "objects",
    total_field: "total",
    default_location: "Moscow",
    currency: "rub",
    sends_currency_filter: false,
    max_page_size: 100,
    max_results: None,
    auth_header: Some("X-Api-App-Id"),
};

/// Look up the static configuration of a provider
pub fn provider_config(provider: Provider) -> &'static ProviderConfig {
    match provider {
        Provider::HeadHunter => &HEADHUNTER_CONFIG,
        Provider::SuperJob => &SUPERJOB_CONFIG,
    }
}

/// Human-readable name of a HeadHunter area id
pub fn headhunter_area_name(area: &str) -> String {
    match area {
        "1" => "Moscow".to_string(),
        "2" => "Saint Petersburg".to_string(),
        "113" => "Russia".to_string(),
        other => format!("area {other}"),
    }
}
