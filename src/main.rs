use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use thiserror::Error;
use tracing_subscriber::EnvFilter;

use reqsmith::config::{AppConfig, ConfigError};
use reqsmith::pipeline::batch::BatchProcessor;
use reqsmith::pipeline::client::{AnthropicClient, GenerativeClient, RetryPolicy};
use reqsmith::report::{sink, source, ReportError};

/// Normalize free-text customer requirements into INCOSE-compliant
/// statements and write a tabular report.
#[derive(Parser)]
#[command(name = "reqsmith", version, about)]
struct Cli {
    /// Input CSV; requirements are read from the first column.
    input: PathBuf,

    /// Output CSV report path.
    #[arg(short, long, default_value = "requirements_report.csv")]
    output: PathBuf,

    /// Completion model identifier.
    #[arg(long)]
    model: Option<String>,

    /// Completion endpoint base URL.
    #[arg(long)]
    endpoint: Option<String>,
}

#[derive(Debug, Error)]
enum RunError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Report(#[from] ReportError),
}

fn run(cli: &Cli) -> Result<(), RunError> {
    let config = AppConfig::from_env(cli.model.as_deref(), cli.endpoint.as_deref())?;

    let requirements = source::load_requirements(&cli.input)?;

    let api = AnthropicClient::new(&config);
    let client = GenerativeClient::new(Box::new(api), RetryPolicy::from_config(&config));
    let rows = BatchProcessor::new(&client, &config).run(&requirements);

    sink::write_report(&cli.output, &rows)?;

    tracing::info!(
        input = %cli.input.display(),
        output = %cli.output.display(),
        requirements = requirements.len(),
        rows = rows.len(),
        "normalization complete"
    );
    Ok(())
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "aborting");
            ExitCode::FAILURE
        }
    }
}
