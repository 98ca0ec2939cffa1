//! Core Kernel - Foundational types for the claims record store
//!
//! This crate provides the building blocks shared by the domain crates and
//! the persistence adapters:
//! - Claim amounts with precise, non-negative decimal values
//! - ISO calendar date parsing and formatting
//! - Claim identifiers and card numbers
//! - Persistence port errors and per-line load diagnostics

pub mod amount;
pub mod temporal;
pub mod identifiers;
pub mod ports;

pub use amount::{ClaimAmount, AmountError};
pub use temporal::{parse_iso_date, format_iso_date, format_optional_date, TemporalError, ISO_DATE_FORMAT};
pub use identifiers::{ClaimId, CardNumber};
pub use ports::{StoreError, Loaded, LineDiagnostic, DiagnosticKind};
