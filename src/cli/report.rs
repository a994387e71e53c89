//! Report command implementation

use crate::config::{
    ProviderSettings, RunConfig, DEFAULT_LANGUAGES, DEFAULT_QUERY_PREFIX, SUPERJOB_TOKEN_ENV,
};
use crate::fetcher::create_fetcher;
use crate::pipeline::{collect_statistics_with_progress, ErrorPolicy, ProviderReport};
use crate::report::{assemble_provider, render_ascii, to_json};
use crate::Provider;
use clap::{Args, Parser, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};
use tracing::info;

use super::CliError;

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// ASCII tables
    Human,
    /// JSON
    Json,
}

/// Average programmer salaries from HeadHunter and SuperJob
#[derive(Parser, Debug)]
#[command(name = "vacancy-salary-stats", version, about, long_about = None)]
pub struct Cli {
    /// Command to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (json or human)
    #[arg(long, global = true, value_enum, default_value = "human")]
    pub output_format: OutputFormat,
}

/// CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Fetch vacancies and print salary statistics per language
    Report(ReportArgs),

    /// List supported providers
    Providers(super::ProvidersCommand),
}

/// Report command arguments
#[derive(Args, Debug, Clone)]
pub struct ReportArgs {
    /// Programming language to query (repeatable)
    #[arg(short, long = "language", value_name = "LANG", default_values = DEFAULT_LANGUAGES)]
    pub languages: Vec<String>,

    /// Provider to query (repeatable, default: all)
    #[arg(short, long = "provider", value_name = "PROVIDER", value_enum)]
    pub providers: Vec<Provider>,

    /// SuperJob application secret key
    #[arg(long, env = SUPERJOB_TOKEN_ENV, hide_env_values = true)]
    pub superjob_token: Option<String>,

    /// HeadHunter area id (1 = Moscow)
    #[arg(long, default_value = "1")]
    pub hh_area: String,

    /// SuperJob town name
    #[arg(long, default_value = "Moscow")]
    pub sj_town: String,

    /// Text placed before each language in the search query
    #[arg(long, default_value = DEFAULT_QUERY_PREFIX)]
    pub query_prefix: String,

    /// Vacancies per page (1-100)
    #[arg(long, default_value = "100", value_parser = clap::value_parser!(u32).range(1..=100))]
    pub per_page: u32,

    /// Page cap per HeadHunter query (default: as deep as the API allows)
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    pub max_pages: Option<u32>,

    /// What to do when a query fails
    #[arg(long, value_enum, default_value = "abort")]
    pub on_error: ErrorPolicy,

    /// Override HeadHunter API base URL
    #[arg(long, hide = true)]
    pub hh_base_url: Option<String>,

    /// Override SuperJob API base URL
    #[arg(long, hide = true)]
    pub sj_base_url: Option<String>,
}

impl ReportArgs {
    /// Providers in report order, defaulting to all of them
    fn selected_providers(&self) -> Vec<Provider> {
        if self.providers.is_empty() {
            return Provider::ALL.to_vec();
        }
        let mut selected = Vec::new();
        for provider in &self.providers {
            if !selected.contains(provider) {
                selected.push(*provider);
            }
        }
        selected
    }

    /// Settings for one provider from the arguments
    fn provider_settings(&self, provider: Provider) -> ProviderSettings {
        let mut settings = ProviderSettings::defaults(provider).with_per_page(self.per_page);
        settings.query_prefix = self.query_prefix.clone();

        match provider {
            Provider::HeadHunter => {
                settings.location = self.hh_area.clone();
                if let Some(url) = &self.hh_base_url {
                    settings = settings.with_base_url(url.as_str());
                }
                if let Some(max_pages) = self.max_pages {
                    settings.max_pages = max_pages;
                }
            }
            Provider::SuperJob => {
                settings.location = self.sj_town.clone();
                if let Some(url) = &self.sj_base_url {
                    settings = settings.with_base_url(url.as_str());
                }
                settings.api_token = self.superjob_token.clone();
            }
        }

        settings
    }

    /// Build the validated run configuration
    pub fn to_run_config(&self) -> Result<RunConfig, CliError> {
        let providers = self
            .selected_providers()
            .into_iter()
            .map(|provider| self.provider_settings(provider))
            .collect();
        Ok(RunConfig::new(
            self.languages.clone(),
            providers,
            self.on_error,
        )?)
    }

    /// Execute the report command
    pub async fn execute(&self, output_format: OutputFormat) -> Result<(), CliError> {
        let config = self.to_run_config()?;
        let reports = run_reports(&config, output_format).await?;

        match output_format {
            OutputFormat::Json => println!("{}", to_json(&reports)?),
            OutputFormat::Human => {
                for report in &reports {
                    println!("{}", render_ascii(&assemble_provider(report)));
                    for failure in &report.failures {
                        println!("Skipped {}: {}", failure.query, failure.error);
                    }
                    println!();
                }
            }
        }

        Ok(())
    }
}

/// Run every configured provider, one after another
async fn run_reports(
    config: &RunConfig,
    output_format: OutputFormat,
) -> Result<Vec<ProviderReport>, CliError> {
    let mut reports = Vec::with_capacity(config.providers.len());

    for settings in &config.providers {
        let fetcher = create_fetcher(settings)?;
        info!(
            "Collecting {} statistics for {} languages",
            settings.provider.display_name(),
            config.languages.len()
        );

        let pb = create_progress_bar(
            config.languages.len() as u64,
            settings.provider.display_name(),
            output_format,
        );
        let result = collect_statistics_with_progress(
            fetcher.as_ref(),
            &config.languages,
            config.error_policy,
            |query| {
                pb.set_message(format!("{} {}", settings.provider.display_name(), query));
                pb.inc(1);
            },
        )
        .await;
        pb.finish_and_clear();

        reports.push(result?);
    }

    Ok(reports)
}

/// Progress bar over queries; hidden for JSON output
fn create_progress_bar(len: u64, message: &str, output_format: OutputFormat) -> ProgressBar {
    if output_format == OutputFormat::Json {
        return ProgressBar::hidden();
    }
    let pb = ProgressBar::new(len);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .expect("hardcoded template is valid")
            .progress_chars("#>-"),
    );
    pb.set_message(message.to_string());
    pb
}
