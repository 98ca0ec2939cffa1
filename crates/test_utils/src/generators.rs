//! Property-Based Test Generators
//!
//! Provides proptest strategies for generating random records that the
//! comma-delimited files can store faithfully: free text never contains a
//! comma or a line break, and never has surrounding whitespace.

use chrono::{Duration, NaiveDate};
use core_kernel::{CardNumber, ClaimAmount, ClaimId};
use domain_claims::{Claim, ClaimStatus, ReceiverBankingInfo};
use domain_party::Customer;
use proptest::prelude::*;
use rust_decimal::Decimal;

/// Strategy for free-text fields that survive the line format
pub fn field_text_strategy() -> impl Strategy<Value = String> {
    "[A-Za-z0-9][A-Za-z0-9 ./-]{0,20}[A-Za-z0-9]"
}

/// Strategy for customer names
pub fn full_name_strategy() -> impl Strategy<Value = String> {
    "[A-Z][a-z]{1,10} [A-Z][a-z]{1,12}"
}

/// Strategy for claim ids in the `f-` form
pub fn claim_id_strategy() -> impl Strategy<Value = ClaimId> {
    (0u32..100_000u32).prop_map(|n| ClaimId::new(format!("{}{:04}", ClaimId::prefix(), n)))
}

/// Strategy for dates between 2000 and about 2030
pub fn date_strategy() -> impl Strategy<Value = NaiveDate> {
    (0i64..11_000i64).prop_map(|days| NaiveDate::from_ymd_opt(2000, 1, 1).unwrap() + Duration::days(days))
}

/// Strategy for dates that may be absent
pub fn optional_date_strategy() -> impl Strategy<Value = Option<NaiveDate>> {
    proptest::option::of(date_strategy())
}

/// Strategy for non-negative amounts with up to two decimal places
pub fn claim_amount_strategy() -> impl Strategy<Value = ClaimAmount> {
    (0i64..1_000_000_000i64, 0u32..3u32)
        .prop_map(|(m, s)| ClaimAmount::new(Decimal::new(m, s)).unwrap())
}

/// Strategy for ClaimStatus values
pub fn claim_status_strategy() -> impl Strategy<Value = ClaimStatus> {
    prop_oneof![
        Just(ClaimStatus::New),
        Just(ClaimStatus::Processing),
        Just(ClaimStatus::Done),
    ]
}

/// Strategy for customers
pub fn customer_strategy() -> impl Strategy<Value = Customer> {
    (
        full_name_strategy(),
        0u32..120u32,
        prop_oneof![Just("Female".to_string()), Just("Male".to_string())],
        field_text_strategy(),
        "[0-9]{10}",
    )
        .prop_map(|(name, age, gender, address, phone)| Customer::new(name, age, gender, address, phone))
}

/// Strategy for claims owned by `full_name`
pub fn claim_strategy(full_name: String) -> impl Strategy<Value = Claim> {
    (
        claim_id_strategy(),
        optional_date_strategy(),
        any::<u64>(),
        optional_date_strategy(),
        claim_amount_strategy(),
        claim_status_strategy(),
        (field_text_strategy(), field_text_strategy(), "[0-9]{6,14}"),
        proptest::collection::vec(field_text_strategy(), 0..4),
    )
        .prop_map(move |(id, claim_date, card, exam_date, amount, status, (bank, account, number), documents)| {
            Claim {
                id,
                claim_date,
                card_number: CardNumber::new(card),
                exam_date,
                claim_amount: amount,
                status,
                receiver_banking_info: ReceiverBankingInfo::new(bank, account, number),
                documents,
                customer_name: full_name.clone(),
            }
        })
}

/// Strategy for a customer together with claims they own
pub fn customer_with_claims_strategy() -> impl Strategy<Value = (Customer, Vec<Claim>)> {
    customer_strategy().prop_flat_map(|customer| {
        let claims = proptest::collection::vec(claim_strategy(customer.full_name.clone()), 1..5);
        (Just(customer), claims)
    })
}
