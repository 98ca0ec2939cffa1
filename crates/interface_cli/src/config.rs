//! CLI configuration

use std::path::PathBuf;

use serde::Deserialize;

use infra_file::{FileStoreConfig, DEFAULT_CLAIMS_FILE, DEFAULT_CUSTOMERS_FILE};

/// Environment variable prefix, e.g. `CLAIMS_DATA_DIR`
pub const ENV_PREFIX: &str = "CLAIMS";

/// CLI configuration
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CliConfig {
    /// Directory holding both record files
    pub data_dir: PathBuf,
    /// Customer file name inside `data_dir`
    pub customers_file: String,
    /// Claims file name inside `data_dir`
    pub claims_file: String,
    /// Log level: trace, debug, info, warn, error
    pub log_level: String,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("."),
            customers_file: DEFAULT_CUSTOMERS_FILE.to_string(),
            claims_file: DEFAULT_CLAIMS_FILE.to_string(),
            log_level: "warn".to_string(),
        }
    }
}

impl CliConfig {
    /// Loads configuration from `CLAIMS_*` environment variables
    ///
    /// Unset variables keep their default value.
    pub fn from_env() -> Result<Self, config::ConfigError> {
        Self::from_environment(config::Environment::with_prefix(ENV_PREFIX))
    }

    /// Loads configuration from an explicit environment source
    pub fn from_environment(environment: config::Environment) -> Result<Self, config::ConfigError> {
        let defaults = Self::default();
        config::Config::builder()
            .set_default("data_dir", defaults.data_dir.to_string_lossy().into_owned())?
            .set_default("customers_file", defaults.customers_file)?
            .set_default("claims_file", defaults.claims_file)?
            .set_default("log_level", defaults.log_level)?
            .add_source(environment)
            .build()?
            .try_deserialize()
    }

    /// Returns the file locations for the record store
    pub fn store_config(&self) -> FileStoreConfig {
        FileStoreConfig {
            customers_path: self.data_dir.join(&self.customers_file),
            claims_path: self.data_dir.join(&self.claims_file),
        }
    }
}
