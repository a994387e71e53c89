//! Run configuration
//!
//! Everything a run needs is collected here and validated before the first
//! request is made. Nothing below the CLI reads the environment; credentials
//! arrive through [`ProviderSettings::api_token`].

use crate::fetcher::pagination::MAX_FLAGGED_PAGES;
use crate::fetcher::provider_config::{headhunter_area_name, provider_config, ProviderConfig};
use crate::pipeline::ErrorPolicy;
use crate::Provider;

/// Languages queried when none are given
pub const DEFAULT_LANGUAGES: [&str; 3] = ["Python", "Java", "Javascript"];

/// Prefix placed before the language in the search text ("Programmer")
pub const DEFAULT_QUERY_PREFIX: &str = "Программист";

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// No query languages
    #[error("at least one language is required")]
    NoLanguages,

    /// Blank language entry
    #[error("language names must not be blank")]
    BlankLanguage,

    /// No providers selected
    #[error("at least one provider is required")]
    NoProviders,

    /// Page size outside the provider's range
    #[error("page size {size} for {provider} must be between 1 and {max}")]
    InvalidPageSize {
        /// Provider being configured
        provider: Provider,
        /// Requested page size
        size: u32,
        /// Largest accepted page size
        max: u32,
    },

    /// Page cap of zero
    #[error("max pages for {0} must be at least 1")]
    InvalidMaxPages(Provider),

    /// Credential missing for a provider that requires one
    #[error("{provider} requires an API token (set {env_var} or pass --superjob-token)")]
    MissingToken {
        /// Provider requiring the token
        provider: Provider,
        /// Environment variable that can supply it
        env_var: &'static str,
    },
}

/// Result type for configuration
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Environment variable holding the SuperJob application secret
pub const SUPERJOB_TOKEN_ENV: &str = "SUPERJOB_TOKEN";

/// Runtime settings for one provider
#[derive(Debug, Clone, PartialEq)]
pub struct ProviderSettings {
    /// Provider these settings apply to
    pub provider: Provider,
    /// API base URL
    pub base_url: String,
    /// Region filter value (HeadHunter area id or SuperJob town)
    pub location: String,
    /// Text placed before each language in the search query
    pub query_prefix: String,
    /// Page size
    pub per_page: u32,
    /// Safety cap on pages per query
    pub max_pages: u32,
    /// Application credential, when the provider requires one
    pub api_token: Option<String>,
}

/// Page cap: the depth limit if the provider has one, else the runaway guard
fn default_max_pages(config: &ProviderConfig, per_page: u32) -> u32 {
    config.reachable_pages(per_page).unwrap_or(MAX_FLAGGED_PAGES)
}

impl ProviderSettings {
    /// Default settings for a provider
    pub fn defaults(provider: Provider) -> Self {
        let config = provider_config(provider);
        Self {
            provider,
            base_url: config.base_url.to_string(),
            location: config.default_location.to_string(),
            query_prefix: DEFAULT_QUERY_PREFIX.to_string(),
            per_page: config.max_page_size,
            max_pages: default_max_pages(config, config.max_page_size),
            api_token: None,
        }
    }

    /// Replace the base URL (mock servers, proxies)
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Set the application credential
    pub fn with_api_token(mut self, token: impl Into<String>) -> Self {
        self.api_token = Some(token.into());
        self
    }

    /// Set the page size, keeping the page cap within the provider's depth limit
    pub fn with_per_page(mut self, per_page: u32) -> Self {
        self.per_page = per_page;
        self.max_pages = default_max_pages(self.config(), per_page);
        self
    }

    /// Static configuration of the provider
    pub fn config(&self) -> &'static ProviderConfig {
        provider_config(self.provider)
    }

    /// Search text for a language (e.g., "Программист Python")
    pub fn query_text(&self, language: &str) -> String {
        let prefix = self.query_prefix.trim();
        if prefix.is_empty() {
            language.to_string()
        } else {
            format!("{prefix} {language}")
        }
    }

    /// Location label used in report titles
    pub fn location_label(&self) -> String {
        match self.provider {
            Provider::HeadHunter => headhunter_area_name(&self.location),
            Provider::SuperJob => self.location.clone(),
        }
    }

    /// Validate page limits and credentials
    pub fn validate(&self) -> ConfigResult<()> {
        let config = self.config();

        if self.per_page == 0 || self.per_page > config.max_page_size {
            return Err(ConfigError::InvalidPageSize {
                provider: self.provider,
                size: self.per_page,
                max: config.max_page_size,
            });
        }

        if self.max_pages == 0 {
            return Err(ConfigError::InvalidMaxPages(self.provider));
        }

        if config.auth_header.is_some()
            && self.api_token.as_deref().map_or(true, |t| t.trim().is_empty())
        {
            return Err(ConfigError::MissingToken {
                provider: self.provider,
                env_var: SUPERJOB_TOKEN_ENV,
            });
        }

        Ok(())
    }
}

/// Validated configuration of a whole run
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// Query languages in report order
    pub languages: Vec<String>,
    /// Providers in report order
    pub providers: Vec<ProviderSettings>,
    /// What to do when a query fails
    pub error_policy: ErrorPolicy,
}

impl RunConfig {
    /// Build and validate a run configuration
    pub fn new(
        languages: Vec<String>,
        providers: Vec<ProviderSettings>,
        error_policy: ErrorPolicy,
    ) -> ConfigResult<Self> {
        let config = Self {
            languages: languages.into_iter().map(|l| l.trim().to_string()).collect(),
            providers,
            error_policy,
        };
        config.validate()?;
        Ok(config)
    }

    /// Validate languages and every provider
    pub fn validate(&self) -> ConfigResult<()> {
        if self.languages.is_empty() {
            return Err(ConfigError::NoLanguages);
        }
        if self.languages.iter().any(|l| l.trim().is_empty()) {
            return Err(ConfigError::BlankLanguage);
        }
        if self.providers.is_empty() {
            return Err(ConfigError::NoProviders);
        }
        for settings in &self.providers {
            settings.validate()?;
        }
        Ok(())
    }
}
