//! Claim amounts with precise decimal arithmetic
//!
//! Claimed amounts are kept as `rust_decimal::Decimal` so that values read
//! from and written back to the record files never pick up floating-point
//! noise. A `ClaimAmount` is never negative.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Errors that can occur when building a claim amount
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AmountError {
    #[error("Claim amount cannot be negative: {0}")]
    Negative(Decimal),

    #[error("Invalid amount: {0}")]
    InvalidAmount(String),
}

/// A non-negative claimed amount
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct ClaimAmount(Decimal);

impl ClaimAmount {
    /// Creates a new amount, rejecting negative values
    pub fn new(amount: Decimal) -> Result<Self, AmountError> {
        if amount.is_sign_negative() && !amount.is_zero() {
            return Err(AmountError::Negative(amount));
        }
        Ok(Self(amount))
    }

    /// Creates a zero amount
    pub fn zero() -> Self {
        Self(dec!(0))
    }

    /// Creates an amount from minor units (cents)
    pub fn from_minor(minor_units: u64) -> Self {
        Self(Decimal::from(minor_units) / dec!(100))
    }

    /// Returns the underlying decimal
    pub fn amount(&self) -> Decimal {
        self.0
    }

    /// Returns true if the amount is zero
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }
}

impl Default for ClaimAmount {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for ClaimAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ClaimAmount {
    type Err = AmountError;

    /// Parses plain decimals (`1500.25`) and the scientific notation produced
    /// by floating-point writers (`1.5E7`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let amount = Decimal::from_str(trimmed)
            .or_else(|_| Decimal::from_scientific(trimmed))
            .map_err(|_| AmountError::InvalidAmount(s.to_string()))?;
        Self::new(amount)
    }
}

impl TryFrom<Decimal> for ClaimAmount {
    type Error = AmountError;

    fn try_from(amount: Decimal) -> Result<Self, Self::Error> {
        Self::new(amount)
    }
}

impl From<ClaimAmount> for Decimal {
    fn from(amount: ClaimAmount) -> Decimal {
        amount.0
    }
}

impl<'de> Deserialize<'de> for ClaimAmount {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let amount = <Decimal as Deserialize>::deserialize(deserializer)?;
        ClaimAmount::new(amount).map_err(serde::de::Error::custom)
    }
}
