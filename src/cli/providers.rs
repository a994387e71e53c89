//! CLI command for listing supported providers

use crate::config::ProviderSettings;
use crate::Provider;
use clap::Args;
use serde_json::json;

use super::{CliError, OutputFormat};
use crate::report::ReportError;

/// Providers subcommand
#[derive(Debug, Args)]
pub struct ProvidersCommand {}

impl ProvidersCommand {
    /// Describe every provider with its default settings
    pub fn describe() -> Vec<serde_json::Value> {
        Provider::ALL
            .iter()
            .map(|provider| {
                let settings = ProviderSettings::defaults(*provider);
                let config = settings.config();
                json!({
                    "provider": provider.to_string(),
                    "name": provider.display_name(),
                    "endpoint": format!("{}{}", config.base_url, config.vacancies_endpoint),
                    "pagination": config.pagination.describe(),
                    "default_location": settings.location_label(),
                    "currency": config.currency,
                    "max_page_size": config.max_page_size,
                    "requires_token": config.auth_header.is_some(),
                })
            })
            .collect()
    }

    /// Execute the providers command
    pub fn execute(&self, output_format: OutputFormat) -> Result<(), CliError> {
        let providers = Self::describe();

        match output_format {
            OutputFormat::Json => {
                let json = serde_json::to_string_pretty(&providers).map_err(ReportError::from)?;
                println!("{json}");
            }
            OutputFormat::Human => {
                println!("Found {} providers:\n", providers.len());
                for provider in &providers {
                    println!(
                        "{} | {} | {} | {} | token required: {}",
                        provider["provider"].as_str().unwrap_or_default(),
                        provider["endpoint"].as_str().unwrap_or_default(),
                        provider["pagination"].as_str().unwrap_or_default(),
                        provider["default_location"].as_str().unwrap_or_default(),
                        provider["requires_token"].as_bool().unwrap_or_default(),
                    );
                }
            }
        }

        Ok(())
    }
}
