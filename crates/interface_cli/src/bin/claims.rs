//! Claims Record Store - Interactive CLI Binary
//!
//! This binary loads the record files, runs the numbered menu on the
//! terminal and saves the records on exit.
//!
//! # Usage
//!
//! ```bash
//! # Run with default configuration (files in the working directory)
//! cargo run --bin claims-cli
//!
//! # Run against a data directory with debug logging
//! CLAIMS_DATA_DIR=/var/lib/claims CLAIMS_LOG_LEVEL=debug cargo run --bin claims-cli
//! ```
//!
//! # Environment Variables
//!
//! * `CLAIMS_DATA_DIR` - Directory holding the record files (default: .)
//! * `CLAIMS_CUSTOMERS_FILE` - Customer file name (default: customers.txt)
//! * `CLAIMS_CLAIMS_FILE` - Claims file name (default: claims.txt)
//! * `CLAIMS_LOG_LEVEL` - Log level: trace, debug, info, warn, error (default: warn)
//! * `RUST_LOG` - Overrides the log level with a full filter directive

use std::io;

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use domain_claims::RecordManager;
use infra_file::FileRecordStore;
use interface_cli::{CliConfig, Dispatcher};

/// Main entry point for the CLI.
///
/// # Errors
///
/// Returns an error, and so a non-zero exit status, if:
/// - Configuration cannot be loaded from environment
/// - A record file exists but cannot be read
/// - The terminal fails
/// - The final save fails
fn main() -> anyhow::Result<()> {
    // Load .env file if present (useful for local development)
    dotenvy::dotenv().ok();

    let config = CliConfig::from_env().context("Failed to load configuration")?;

    init_tracing(&config.log_level);

    let store_config = config.store_config();
    tracing::info!(
        customers = %store_config.customers_path.display(),
        claims = %store_config.claims_path.display(),
        "Starting claims record store"
    );

    let mut records = RecordManager::open(FileRecordStore::new(store_config)).context("Failed to load records")?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut dispatcher = Dispatcher::new(stdin.lock(), stdout.lock());
    dispatcher.run(&mut records).context("Claims session failed")?;

    tracing::info!("Shutdown complete");
    Ok(())
}

/// Initializes the tracing subscriber for structured logging.
///
/// Logs go to stderr so they never interleave with the menu on stdout.
fn init_tracing(log_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(log_level))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(true).with_writer(io::stderr))
        .init();
}
