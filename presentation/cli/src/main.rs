use std::process::ExitCode;

use clap::Parser;
use dotenvy::dotenv;

mod cli;
mod config;
mod report;
mod setup;

use cli::Cli;
use config::app_config::AppConfig;
use setup::{dependency_injection::DependencyContainer, runner::Runner};

/// FoodLens product resolver entry point
///
/// Loads the product catalog, matches the OCR text of a label against it and
/// prints the closest product.
///
/// - config/: Environment configuration (catalog path, resolver tuning)
/// - setup/: Dependency injection and the lookup runner
/// - report: Console output
#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    // 1. Initialize tracing with RUST_LOG env filter, on stderr so stdout keeps only results
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    // 2. Load environment variables
    dotenv().ok();

    // 3. Parse arguments and load configuration
    let cli = Cli::parse();
    let mut config = AppConfig::from_env()?;
    if let Some(path) = &cli.catalog {
        config.catalog.path = path.clone();
    }
    if let Some(min_confidence) = cli.min_confidence {
        config.resolver.min_confidence = min_confidence;
    }

    // 4. Wire dependencies
    let container = DependencyContainer::new(&config);

    // 5. Run lookup, catalog and config errors exit with 1
    let status = Runner::run(cli, container).await?;
    Ok(status.into())
}
