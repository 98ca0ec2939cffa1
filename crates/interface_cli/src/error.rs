//! CLI error handling

use std::io;

use thiserror::Error;

use domain_claims::ClaimError;

/// CLI error types
#[derive(Debug, Error)]
pub enum CliError {
    /// The terminal could not be read or written
    #[error("Terminal I/O error: {0}")]
    Io(#[from] io::Error),

    /// Input ended before the current question was answered
    #[error("Input closed")]
    EndOfInput,

    /// A record manager operation failed
    #[error(transparent)]
    Records(#[from] ClaimError),
}

impl CliError {
    /// Returns true if the session should end without treating it as a failure
    pub fn is_end_of_input(&self) -> bool {
        matches!(self, CliError::EndOfInput)
    }
}
