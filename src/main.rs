//! Main entry point for vacancy-salary-stats CLI

use clap::Parser;
use tracing::{debug, error};
use tracing_subscriber::EnvFilter;
use vacancy_salary_stats::cli::{Cli, Commands};

/// Initialize tracing subscriber with optional JSON formatting
///
/// Logs go to stderr so stdout carries only the report.
fn init_tracing() {
    // Check if JSON output is requested via environment variable
    let json_format = std::env::var("LOG_FORMAT")
        .map(|v| v.to_lowercase() == "json")
        .unwrap_or(false);

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("vacancy_salary_stats=info"));

    if json_format {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    }
}

#[tokio::main]
async fn main() {
    // SUPERJOB_TOKEN may live in a .env file next to the binary's working dir
    let dotenv = dotenvy::dotenv();

    init_tracing();

    if let Ok(path) = dotenv {
        debug!("Loaded environment from {:?}", path);
    }

    // Parse CLI arguments
    let cli = Cli::parse();

    // Execute command
    let result = match cli.command {
        Commands::Report(ref args) => args
            .execute(cli.output_format)
            .await
            .map_err(|e| anyhow::anyhow!(e)),
        Commands::Providers(ref providers_cmd) => providers_cmd
            .execute(cli.output_format)
            .map_err(|e| anyhow::anyhow!(e)),
    };

    // Handle result
    if let Err(e) = result {
        error!("Command failed: {}", e);
        std::process::exit(1);
    }
}
