use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use spengerguide::cli::Cli;
use spengerguide::config::Config;
use spengerguide::utils::{AppError, report_error};

/// Filter used when `RUST_LOG` is not set
fn default_log_filter(debug: bool) -> String {
    let log_level = if debug { "debug" } else { "warn" };
    format!("spengerguide={}", log_level)
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_log_filter(cli.debug).into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    // Ensure configuration exists and load it
    if cli.config.is_none() {
        Config::ensure_config_exists()?;
    }

    let config = if let Some(config_path) = &cli.config {
        Config::load_custom(config_path)?
    } else {
        Config::load()?
    };

    if !config.general.color {
        colored::control::set_override(false);
    }

    // Execute command
    if let Err(err) = cli.command.execute(config).await {
        match err.downcast_ref::<AppError>() {
            Some(app_err) => report_error(app_err),
            None => eprintln!("❌ {:#}", err),
        }
        std::process::exit(1);
    }

    Ok(())
}
