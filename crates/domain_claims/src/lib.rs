//! Claims Management Domain
//!
//! This crate holds the claim records, the persistence port they are stored
//! through, and the record manager that keeps claims and customers coherent.
//!
//! # Invariants
//!
//! - Every live claim names exactly one live customer (case-insensitive).
//! - Claim ids are unique among live claims.
//! - A customer without claims is removed before the next save.
//!
//! # Example
//!
//! ```rust,ignore
//! use domain_claims::{RecordManager, Claim};
//!
//! let mut records = RecordManager::open(store)?;
//! records.add_claim(claim, customer)?;
//! let jane = records.list_claims_for_customer("jane doe");
//! ```

pub mod claim;
pub mod error;
pub mod ports;
pub mod manager;

pub use claim::{Claim, ClaimStatus, ClaimUpdate, ReceiverBankingInfo};
pub use error::ClaimError;
pub use ports::RecordStore;
#[cfg(any(test, feature = "mock"))]
pub use ports::mock::MockRecordStore;
pub use manager::RecordManager;
