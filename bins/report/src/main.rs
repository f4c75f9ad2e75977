//! Budgetscope report CLI
//!
//! Loads a record snapshot and prints dashboard, budget comparison, expense
//! list and prediction reports as JSON.

mod commands;
mod predictor;
mod snapshot;

use clap::Parser;
use tracing::error;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use budgetscope_shared::AppConfig;

use commands::Cli;

fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize tracing; reports go to stdout, logs to stderr
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "budgetscope=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    // Load configuration
    let config = AppConfig::load()?;

    match commands::run(&cli, &config) {
        Ok(report) => {
            println!("{report}");
            Ok(())
        }
        Err(err) => {
            error!(code = err.error_code(), client = err.is_client_error(), "{err}");
            Err(err.into())
        }
    }
}
