//! Claims domain errors

use thiserror::Error;

use core_kernel::{ClaimId, StoreError};

/// Errors that can occur in the claims domain
#[derive(Debug, Error)]
pub enum ClaimError {
    /// A live claim already uses this id; nothing was changed
    #[error("Duplicate claim id: {0}")]
    DuplicateId(ClaimId),

    /// No live claim has this id; nothing was changed
    #[error("Claim not found: {0}")]
    NotFound(ClaimId),

    /// Status literal outside NEW, PROCESSING, DONE
    #[error("Invalid claim status: {0}")]
    InvalidStatus(String),

    /// Saving failed after the in-memory change was applied
    ///
    /// In-memory state is ahead of the files until the next successful save.
    #[error("Persistence failure: {0}")]
    Persistence(#[from] StoreError),
}

impl ClaimError {
    /// Returns true if the in-memory state changed but was not persisted
    pub fn is_persistence_failure(&self) -> bool {
        matches!(self, ClaimError::Persistence(_))
    }
}
