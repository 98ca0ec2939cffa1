//! Custom Test Assertions
//!
//! Provides assertion helpers for records and load results that give more
//! meaningful failure messages than plain `assert_eq!`.

use core_kernel::{DiagnosticKind, Loaded};
use domain_claims::Claim;
use domain_party::Customer;

/// Asserts that every claim refers to one of `customers`, ignoring case
///
/// # Panics
///
/// Panics naming the first claim whose owner is not in `customers`
pub fn assert_claims_owned(customers: &[&Customer], claims: &[Claim]) {
    for claim in claims {
        assert!(
            customers.iter().any(|customer| claim.owner_key() == customer.key()),
            "Claim {} refers to missing customer '{}'",
            claim.id,
            claim.customer_name
        );
    }
}

/// Asserts that every customer owns at least one claim
///
/// # Panics
///
/// Panics naming the first customer without a claim
pub fn assert_no_orphaned_customers(customers: &[&Customer], claims: &[Claim]) {
    for customer in customers {
        assert!(
            claims.iter().any(|claim| claim.owner_key() == customer.key()),
            "Customer '{}' has no claims",
            customer.full_name
        );
    }
}

/// Asserts that no two claims share an id
pub fn assert_unique_claim_ids(claims: &[Claim]) {
    let mut seen = std::collections::HashSet::new();
    for claim in claims {
        assert!(seen.insert(claim.id.as_str()), "Duplicate claim id {}", claim.id);
    }
}

/// Asserts that a load produced no diagnostics at all
pub fn assert_clean_load<T>(loaded: &Loaded<T>) {
    assert!(
        loaded.diagnostics.is_empty(),
        "Expected a clean load, got diagnostics: {:?}",
        loaded.diagnostics
    );
}

/// Asserts that `line_number` was skipped for the given reason
pub fn assert_line_skipped<T>(loaded: &Loaded<T>, line_number: usize, expected: impl Fn(&DiagnosticKind) -> bool) {
    let diagnostic = loaded
        .diagnostics
        .iter()
        .find(|d| d.line_number == line_number)
        .unwrap_or_else(|| panic!("No diagnostic for line {}: {:?}", line_number, loaded.diagnostics));
    assert!(diagnostic.kind.is_skip(), "Line {} was not skipped: {}", line_number, diagnostic);
    assert!(expected(&diagnostic.kind), "Unexpected reason for line {}: {}", line_number, diagnostic);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{ClaimFixtures, CustomerFixtures};

    #[test]
    fn test_owned_claims_pass() {
        let jane = CustomerFixtures::jane_doe();
        let claims = vec![ClaimFixtures::done_claim("f-0001")];
        assert_claims_owned(&[&jane], &claims);
        assert_no_orphaned_customers(&[&jane], &claims);
        assert_unique_claim_ids(&claims);
    }

    #[test]
    #[should_panic(expected = "has no claims")]
    fn test_orphan_is_reported() {
        let john = CustomerFixtures::john_roe();
        assert_no_orphaned_customers(&[&john], &[ClaimFixtures::done_claim("f-0001")]);
    }

    #[test]
    #[should_panic(expected = "Duplicate claim id")]
    fn test_duplicate_ids_are_reported() {
        let claims = vec![ClaimFixtures::done_claim("f-0001"), ClaimFixtures::done_claim("f-0001")];
        assert_unique_claim_ids(&claims);
    }
}
