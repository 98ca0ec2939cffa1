//! Test Utilities Crate
//!
//! Provides shared test infrastructure, fixtures, and helpers for the
//! claims record store test suite.
//!
//! # Modules
//!
//! - `fixtures`: Pre-built test data for common entities
//! - `builders`: Builder patterns for test data construction
//! - `files`: Temporary record directories for file store tests
//! - `assertions`: Custom assertion helpers for domain types
//! - `generators`: Property-based test data generators

pub mod fixtures;
pub mod builders;
pub mod files;
pub mod assertions;
pub mod generators;

pub use fixtures::*;
pub use builders::*;
pub use files::*;
pub use assertions::*;
pub use generators::*;
