//! Party Management Domain
//!
//! This crate holds the customer records that claims are filed for.
//!
//! Customers are identified by full name only. Matching is case-insensitive
//! through [`CustomerKey`], storage keeps the original casing.
//!
//! # Examples
//!
//! ```rust
//! use domain_party::{Customer, CustomerKey};
//!
//! let customer = Customer::new("Jane Doe", 34, "F", "12 High St", "555-0199");
//! assert_eq!(customer.key(), CustomerKey::from_name("jane doe"));
//! assert!(customer.is_named("JANE DOE"));
//! ```

pub mod customer;
pub mod error;

pub use customer::{Customer, CustomerKey};
pub use error::PartyError;
