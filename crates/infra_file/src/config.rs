//! File store configuration

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Default customer file name
pub const DEFAULT_CUSTOMERS_FILE: &str = "customers.txt";
/// Default claims file name
pub const DEFAULT_CLAIMS_FILE: &str = "claims.txt";

/// Locations of the two record files
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FileStoreConfig {
    /// Customer file, one `fullName,age,gender,address,phoneNumber` per line
    pub customers_path: PathBuf,
    /// Claims file, one claim per line
    pub claims_path: PathBuf,
}

impl Default for FileStoreConfig {
    fn default() -> Self {
        Self {
            customers_path: PathBuf::from(DEFAULT_CUSTOMERS_FILE),
            claims_path: PathBuf::from(DEFAULT_CLAIMS_FILE),
        }
    }
}

impl FileStoreConfig {
    /// Both files with their default names inside `dir`
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        Self {
            customers_path: dir.join(DEFAULT_CUSTOMERS_FILE),
            claims_path: dir.join(DEFAULT_CLAIMS_FILE),
        }
    }
}
