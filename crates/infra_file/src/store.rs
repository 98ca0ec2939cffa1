//! Flat-file record store
//!
//! `FileRecordStore` implements the `RecordStore` port on top of two plain
//! text files. Loading is tolerant: a line that cannot be decoded is logged
//! and skipped while the rest of the file still loads. Saving truncates the
//! file and rewrites every record.
//!
//! # Example
//!
//! ```rust,ignore
//! use infra_file::{FileRecordStore, FileStoreConfig};
//! use domain_claims::RecordManager;
//!
//! let store = FileRecordStore::new(FileStoreConfig::in_dir("./data"));
//! let records = RecordManager::open(store)?;
//! ```

use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use tracing::{debug, info, instrument, warn};

use core_kernel::{DiagnosticKind, LineDiagnostic, Loaded, StoreError};
use domain_claims::{Claim, RecordStore};
use domain_party::Customer;

use crate::codec::{self, Decoded};
use crate::config::FileStoreConfig;

/// File-backed implementation of the RecordStore port
///
/// The store holds no records itself. Each load reads the files from scratch
/// and each save replaces them.
#[derive(Debug, Clone, Default)]
pub struct FileRecordStore {
    config: FileStoreConfig,
}

impl FileRecordStore {
    /// Creates a store over the files named in `config`
    pub fn new(config: FileStoreConfig) -> Self {
        Self { config }
    }

    /// Returns the configured file locations
    pub fn config(&self) -> &FileStoreConfig {
        &self.config
    }
}

impl RecordStore for FileRecordStore {
    #[instrument(skip(self), fields(path = %self.config.customers_path.display()))]
    fn load_customers(&self) -> Result<Loaded<Customer>, StoreError> {
        load_records(&self.config.customers_path, codec::decode_customer)
    }

    #[instrument(skip(self), fields(path = %self.config.claims_path.display()))]
    fn load_claims(&self) -> Result<Loaded<Claim>, StoreError> {
        load_records(&self.config.claims_path, codec::decode_claim)
    }

    #[instrument(skip_all, fields(path = %self.config.customers_path.display(), count = customers.len()))]
    fn save_customers(&self, customers: &[Customer]) -> Result<(), StoreError> {
        write_lines(&self.config.customers_path, customers.iter().map(codec::encode_customer))
    }

    #[instrument(skip_all, fields(path = %self.config.claims_path.display(), count = claims.len()))]
    fn save_claims(&self, claims: &[Claim]) -> Result<(), StoreError> {
        write_lines(&self.config.claims_path, claims.iter().map(codec::encode_claim))
    }
}

/// Reads every line of `path` through `decode`
///
/// A missing file is an empty collection. Blank lines are ignored and a
/// trailing carriage return is stripped before decoding.
fn load_records<T>(path: &Path, decode: fn(&str) -> Decoded<T>) -> Result<Loaded<T>, StoreError> {
    let file = match File::open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            info!("Record file not found, starting empty");
            return Ok(Loaded::empty());
        }
        Err(source) => {
            return Err(StoreError::Read {
                path: path.to_path_buf(),
                source,
            })
        }
    };

    let mut loaded = Loaded::empty();
    let mut reader = BufReader::new(file);
    let mut buf = Vec::new();
    let mut line_number = 0;

    loop {
        buf.clear();
        let read = reader.read_until(b'\n', &mut buf).map_err(|source| StoreError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        if read == 0 {
            break;
        }
        line_number += 1;

        if buf.last() == Some(&b'\n') {
            buf.pop();
        }
        if buf.last() == Some(&b'\r') {
            buf.pop();
        }

        let line = match std::str::from_utf8(&buf) {
            Ok(line) => line,
            Err(e) => {
                record_diagnostic(
                    &mut loaded.diagnostics,
                    line_number,
                    &String::from_utf8_lossy(&buf),
                    DiagnosticKind::ParseFailure {
                        field: "line",
                        message: e.to_string(),
                    },
                );
                continue;
            }
        };
        if line.is_empty() {
            continue;
        }

        match decode(line) {
            Ok((record, dropped)) => {
                for kind in dropped {
                    record_diagnostic(&mut loaded.diagnostics, line_number, line, kind);
                }
                loaded.records.push(record);
            }
            Err(kind) => record_diagnostic(&mut loaded.diagnostics, line_number, line, kind),
        }
    }

    debug!(
        records = loaded.records.len(),
        diagnostics = loaded.diagnostics.len(),
        "Record file read"
    );
    Ok(loaded)
}

fn record_diagnostic(diagnostics: &mut Vec<LineDiagnostic>, line_number: usize, line: &str, kind: DiagnosticKind) {
    let diagnostic = LineDiagnostic {
        line_number,
        line: line.to_string(),
        kind,
    };
    if diagnostic.kind.is_skip() {
        warn!(line_number, reason = %diagnostic.kind, line = %diagnostic.line, "Skipping record line");
    } else {
        warn!(line_number, reason = %diagnostic.kind, line = %diagnostic.line, "Record loaded with a field dropped");
    }
    diagnostics.push(diagnostic);
}

/// Truncates `path` and writes one line per record
fn write_lines(path: &Path, lines: impl Iterator<Item = String>) -> Result<(), StoreError> {
    let to_error = |source: io::Error| StoreError::Write {
        path: path.to_path_buf(),
        source,
    };

    let file = File::create(path).map_err(to_error)?;
    let mut writer = BufWriter::new(file);
    let mut written = 0usize;
    for line in lines {
        writeln!(writer, "{}", line).map_err(to_error)?;
        written += 1;
    }
    writer.flush().map_err(to_error)?;

    debug!(lines = written, "Record file written");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn store_in(dir: &tempfile::TempDir) -> FileRecordStore {
        FileRecordStore::new(FileStoreConfig::in_dir(dir.path()))
    }

    #[test]
    fn test_missing_files_load_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        assert_eq!(store.load_customers().unwrap(), Loaded::empty());
        assert_eq!(store.load_claims().unwrap(), Loaded::empty());
    }

    #[test]
    fn test_blank_lines_and_crlf() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        fs::write(
            &store.config().customers_path,
            "Jane Doe,34,Female,12 High Street,0901234567\r\n\r\n\nJohn Roe,52,Male,4 Low Road,0907654321",
        )
        .unwrap();

        let loaded = store.load_customers().unwrap();

        assert_eq!(loaded.records.len(), 2);
        assert_eq!(loaded.records[0].phone_number, "0901234567");
        assert!(loaded.diagnostics.is_empty());
    }

    #[test]
    fn test_whitespace_only_line_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        fs::write(
            &store.config().customers_path,
            "Jane Doe,34,Female,12 High Street,0901234567\n   \n",
        )
        .unwrap();

        let loaded = store.load_customers().unwrap();

        assert_eq!(loaded.records.len(), 1);
        assert_eq!(loaded.diagnostics.len(), 1);
        assert_eq!(loaded.diagnostics[0].line_number, 2);
        assert_eq!(
            loaded.diagnostics[0].kind,
            DiagnosticKind::MalformedRecordLine { expected: 5, found: 1 }
        );
    }

    #[test]
    fn test_invalid_utf8_line_is_skipped() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        let mut bytes = b"Jane Doe,34,Female,12 High Street,0901234567\n".to_vec();
        bytes.extend_from_slice(b"J\xffn,1,x,y,z\n");
        fs::write(&store.config().customers_path, bytes).unwrap();

        let loaded = store.load_customers().unwrap();

        assert_eq!(loaded.records.len(), 1);
        assert_eq!(loaded.diagnostics.len(), 1);
        assert_eq!(loaded.diagnostics[0].line_number, 2);
        assert!(matches!(loaded.diagnostics[0].kind, DiagnosticKind::ParseFailure { field: "line", .. }));
    }

    #[test]
    fn test_unreadable_path_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let config = FileStoreConfig {
            customers_path: dir.path().to_path_buf(),
            claims_path: dir.path().join("claims.txt"),
        };
        let store = FileRecordStore::new(config);

        assert!(matches!(store.load_customers(), Err(StoreError::Read { .. })));
    }

    #[test]
    fn test_save_into_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileRecordStore::new(FileStoreConfig::in_dir(dir.path().join("missing")));

        let error = store.save_customers(&[]).unwrap_err();
        assert!(error.is_write_failure());
    }

    #[test]
    fn test_save_truncates() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        let jane = Customer::new("Jane Doe", 34, "Female", "12 High Street", "0901234567");

        store.save_customers(&[jane.clone(), jane.clone()]).unwrap();
        store.save_customers(&[jane.clone()]).unwrap();

        let contents = fs::read_to_string(&store.config().customers_path).unwrap();
        assert_eq!(contents, "Jane Doe,34,Female,12 High Street,0901234567\n");
    }
}
