//! Infrastructure File Layer
//!
//! This crate persists customers and claims as two comma-delimited text
//! files, one record per line, and implements the `RecordStore` port from
//! `domain_claims` on top of them.
//!
//! # Fault tolerance
//!
//! Loading never fails because of a single bad line. Lines with the wrong
//! number of fields or an unparseable age, card number, amount or status are
//! skipped; an unparseable date is dropped to absent and the record kept.
//! Every such event is logged and returned as a `LineDiagnostic`.
//!
//! # Example
//!
//! ```rust,ignore
//! use infra_file::{FileRecordStore, FileStoreConfig};
//!
//! let store = FileRecordStore::new(FileStoreConfig::in_dir("/var/lib/claims"));
//! let customers = store.load_customers()?;
//! ```

pub mod codec;
pub mod config;
pub mod store;

pub use config::{FileStoreConfig, DEFAULT_CLAIMS_FILE, DEFAULT_CUSTOMERS_FILE};
pub use store::FileRecordStore;
