//! Record File Test Utilities
//!
//! Provides a scratch directory holding a customer file and a claims file,
//! removed when the helper is dropped.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// Customer file name used inside a record directory
pub const CUSTOMERS_FILE: &str = "customers.txt";
/// Claims file name used inside a record directory
pub const CLAIMS_FILE: &str = "claims.txt";

/// A temporary directory for the two record files
pub struct TempRecordDir {
    dir: TempDir,
}

impl TempRecordDir {
    /// Creates an empty directory; neither file exists yet
    pub fn new() -> io::Result<Self> {
        Ok(Self { dir: tempfile::tempdir()? })
    }

    /// Creates a directory with both files written from `customers` and `claims` lines
    pub fn with_lines(customers: &[&str], claims: &[&str]) -> io::Result<Self> {
        let dir = Self::new()?;
        dir.write_customers(customers)?;
        dir.write_claims(claims)?;
        Ok(dir)
    }

    /// The directory itself
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Path of the customer file
    pub fn customers_path(&self) -> PathBuf {
        self.dir.path().join(CUSTOMERS_FILE)
    }

    /// Path of the claims file
    pub fn claims_path(&self) -> PathBuf {
        self.dir.path().join(CLAIMS_FILE)
    }

    /// Overwrites the customer file, one entry per line
    pub fn write_customers(&self, lines: &[&str]) -> io::Result<()> {
        fs::write(self.customers_path(), join_lines(lines))
    }

    /// Overwrites the claims file, one entry per line
    pub fn write_claims(&self, lines: &[&str]) -> io::Result<()> {
        fs::write(self.claims_path(), join_lines(lines))
    }

    /// Non-empty lines of the customer file (empty if it does not exist)
    pub fn customer_lines(&self) -> io::Result<Vec<String>> {
        read_lines(&self.customers_path())
    }

    /// Non-empty lines of the claims file (empty if it does not exist)
    pub fn claim_lines(&self) -> io::Result<Vec<String>> {
        read_lines(&self.claims_path())
    }
}

fn join_lines(lines: &[&str]) -> String {
    lines.iter().map(|line| format!("{}\n", line)).collect()
}

fn read_lines(path: &Path) -> io::Result<Vec<String>> {
    match fs::read_to_string(path) {
        Ok(contents) => Ok(contents
            .lines()
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect()),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(Vec::new()),
        Err(e) => Err(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip_lines() {
        let dir = TempRecordDir::with_lines(&["a,b"], &["c", "d"]).unwrap();
        assert_eq!(dir.customer_lines().unwrap(), vec!["a,b"]);
        assert_eq!(dir.claim_lines().unwrap(), vec!["c", "d"]);
    }

    #[test]
    fn test_missing_files_read_empty() {
        let dir = TempRecordDir::new().unwrap();
        assert!(dir.customer_lines().unwrap().is_empty());
        assert!(!dir.claims_path().exists());
    }
}
