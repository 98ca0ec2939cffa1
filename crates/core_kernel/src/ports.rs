//! Ports and Adapters Infrastructure
//!
//! Shared types for the persistence port. Each domain defines the port trait
//! for its own aggregates; adapters (the flat-file store, the in-memory mock)
//! implement it and report through the types here.
//!
//! ```text
//! ┌──────────────────────────────┐
//! │        Record Manager        │
//! └──────────────────────────────┘
//!                │
//!                ▼
//! ┌──────────────────────────────┐
//! │   RecordStore port trait     │
//! │  (domain_claims::ports)      │
//! └──────────────────────────────┘
//!        ▲                 ▲
//!        │                 │
//! ┌──────┴───────┐  ┌──────┴───────┐
//! │  Flat files  │  │ In-memory    │
//! │ (infra_file) │  │ mock         │
//! └──────────────┘  └──────────────┘
//! ```

use std::fmt;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Error type for persistence port operations
///
/// Line-level problems never surface here; they are reported as
/// [`LineDiagnostic`]s. A `StoreError` means a whole file could not be read or
/// written.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The file exists but could not be read
    #[error("Failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Writing failed part way; the file on disk is in an unknown state
    #[error("Failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// An internal error occurred in a non-file adapter
    #[error("Internal error: {message}")]
    Internal {
        message: String,
    },
}

impl StoreError {
    /// Creates an Internal error
    pub fn internal(message: impl Into<String>) -> Self {
        StoreError::Internal {
            message: message.into(),
        }
    }

    /// Returns true if the error happened while writing
    ///
    /// After a write failure the persisted state is unknown and the caller
    /// should retry the save or alert the operator.
    pub fn is_write_failure(&self) -> bool {
        matches!(self, StoreError::Write { .. })
    }
}

/// Why a line was skipped or only partially loaded
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiagnosticKind {
    /// Wrong number of fields; the line was skipped
    MalformedRecordLine { expected: usize, found: usize },
    /// A field failed to parse and the line was skipped
    ParseFailure { field: &'static str, message: String },
    /// A field failed to parse, was set to absent, and the record was kept
    FieldDropped { field: &'static str, message: String },
}

impl DiagnosticKind {
    /// Returns true if the record was not loaded at all
    pub fn is_skip(&self) -> bool {
        !matches!(self, DiagnosticKind::FieldDropped { .. })
    }
}

impl fmt::Display for DiagnosticKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiagnosticKind::MalformedRecordLine { expected, found } => {
                write!(f, "expected {} fields, found {}", expected, found)
            }
            DiagnosticKind::ParseFailure { field, message } => {
                write!(f, "invalid {}: {}", field, message)
            }
            DiagnosticKind::FieldDropped { field, message } => {
                write!(f, "{} dropped: {}", field, message)
            }
        }
    }
}

/// A problem found on one line of a record file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineDiagnostic {
    /// 1-based line number
    pub line_number: usize,
    /// The raw line as read
    pub line: String,
    pub kind: DiagnosticKind,
}

impl fmt::Display for LineDiagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}: {} ({:?})", self.line_number, self.kind, self.line)
    }
}

/// Records freshly built by a load, with the diagnostics gathered on the way
#[derive(Debug, Clone, PartialEq)]
pub struct Loaded<T> {
    pub records: Vec<T>,
    pub diagnostics: Vec<LineDiagnostic>,
}

impl<T> Loaded<T> {
    /// An empty load, as produced for a missing file
    pub fn empty() -> Self {
        Self {
            records: Vec::new(),
            diagnostics: Vec::new(),
        }
    }

    /// Number of lines that were skipped entirely
    pub fn skipped(&self) -> usize {
        self.diagnostics.iter().filter(|d| d.kind.is_skip()).count()
    }
}

impl<T> Default for Loaded<T> {
    fn default() -> Self {
        Self::empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_error_write_failure() {
        let error = StoreError::Write {
            path: PathBuf::from("claims.txt"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        };
        assert!(error.is_write_failure());
        assert!(error.to_string().contains("claims.txt"));
        assert!(!StoreError::internal("boom").is_write_failure());
    }

    #[test]
    fn test_loaded_counts_only_skips() {
        let loaded: Loaded<()> = Loaded {
            records: vec![()],
            diagnostics: vec![
                LineDiagnostic {
                    line_number: 1,
                    line: "a,b".to_string(),
                    kind: DiagnosticKind::MalformedRecordLine { expected: 5, found: 2 },
                },
                LineDiagnostic {
                    line_number: 2,
                    line: "x".to_string(),
                    kind: DiagnosticKind::FieldDropped {
                        field: "claim date",
                        message: "bad".to_string(),
                    },
                },
            ],
        };
        assert_eq!(loaded.skipped(), 1);
    }

    #[test]
    fn test_diagnostic_display() {
        let diagnostic = LineDiagnostic {
            line_number: 3,
            line: "Jane,x".to_string(),
            kind: DiagnosticKind::MalformedRecordLine { expected: 5, found: 2 },
        };
        assert_eq!(diagnostic.to_string(), "line 3: expected 5 fields, found 2 (\"Jane,x\")");
    }
}
