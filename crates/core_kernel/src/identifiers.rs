//! Strongly-typed identifiers for domain entities
//!
//! Claim ids are supplied by the office staff and stored verbatim, so they
//! wrap a `String` rather than a generated UUID. Card numbers are plain
//! integers. Wrapping both keeps them from being mixed up with other text
//! and numeric fields of a claim.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

/// Caller-supplied claim identifier, compared exactly (case-sensitive)
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClaimId(String);

impl ClaimId {
    /// Creates an identifier from any string value
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the identifier as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the identifier prefix used by the office numbering scheme
    pub fn prefix() -> &'static str {
        "f-"
    }
}

impl fmt::Display for ClaimId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for ClaimId {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.to_string()))
    }
}

impl From<&str> for ClaimId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for ClaimId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl AsRef<str> for ClaimId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for ClaimId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

/// Insurance card number printed on the customer's card
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CardNumber(u64);

impl CardNumber {
    pub fn new(number: u64) -> Self {
        Self(number)
    }

    pub fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for CardNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for CardNumber {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse::<u64>().map(Self)
    }
}

impl From<u64> for CardNumber {
    fn from(number: u64) -> Self {
        Self(number)
    }
}
