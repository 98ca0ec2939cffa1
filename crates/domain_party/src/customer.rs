//! Customer entity and its name-based identity
//!
//! A customer has no surrogate key: the full name is the identity. Two
//! customers whose names differ only by case are the same customer, while the
//! stored record keeps the casing it was first entered with. Two different
//! people sharing a name are indistinguishable in this model.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::PartyError;

/// Normalized full name used to match customers and claims
///
/// Matching is case-insensitive; no other normalization (whitespace, accents)
/// is applied.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CustomerKey(String);

impl CustomerKey {
    /// Builds the lookup key for a full name
    pub fn from_name(full_name: &str) -> Self {
        Self(full_name.to_lowercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns true if `full_name` refers to this customer
    pub fn matches(&self, full_name: &str) -> bool {
        self.0 == full_name.to_lowercase()
    }
}

impl fmt::Display for CustomerKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for CustomerKey {
    fn from(full_name: &str) -> Self {
        Self::from_name(full_name)
    }
}

/// A customer who owns one or more claims
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    /// Full name as entered; also the identity
    pub full_name: String,
    pub age: u32,
    /// Free text as entered at the counter
    pub gender: String,
    pub address: String,
    pub phone_number: String,
}

impl Customer {
    /// Creates a new customer
    pub fn new(
        full_name: impl Into<String>,
        age: u32,
        gender: impl Into<String>,
        address: impl Into<String>,
        phone_number: impl Into<String>,
    ) -> Self {
        Self {
            full_name: full_name.into(),
            age,
            gender: gender.into(),
            address: address.into(),
            phone_number: phone_number.into(),
        }
    }

    /// Returns the identity key for this customer
    pub fn key(&self) -> CustomerKey {
        CustomerKey::from_name(&self.full_name)
    }

    /// Parses an age field, accepting surrounding whitespace
    pub fn parse_age(value: &str) -> Result<u32, PartyError> {
        value
            .trim()
            .parse::<u32>()
            .map_err(|e| PartyError::invalid(format!("age '{}': {}", value, e)))
    }

    /// Case-insensitive comparison against a claim's owner name
    pub fn is_named(&self, full_name: &str) -> bool {
        self.key().matches(full_name)
    }
}

impl fmt::Display for Customer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.full_name, self.age)
    }
}
