//! CLI command implementations

pub mod error;
pub mod providers;
pub mod report;

pub use error::CliError;
pub use providers::ProvidersCommand;
pub use report::{Cli, Commands, OutputFormat, ReportArgs};
