//! Comprehensive tests for domain_claims

use chrono::NaiveDate;
use rust_decimal_macros::dec;

use core_kernel::{CardNumber, ClaimAmount, StoreError};

use domain_claims::claim::{Claim, ClaimStatus, ClaimUpdate, ReceiverBankingInfo};
use domain_claims::error::ClaimError;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

// ============================================================================
// Claim Tests
// ============================================================================

mod claim_tests {
    use super::*;

    fn create_test_claim() -> Claim {
        Claim::new(
            "f-0001",
            date(2024, 5, 2),
            CardNumber::new(5_550_001),
            date(2024, 4, 28),
            ClaimAmount::new(dec!(320.40)).unwrap(),
        )
    }

    #[test]
    fn test_claim_new_defaults() {
        let claim = create_test_claim();

        assert_eq!(claim.id.as_str(), "f-0001");
        assert_eq!(claim.status, ClaimStatus::New);
        assert_eq!(claim.claim_date, Some(date(2024, 5, 2)));
        assert_eq!(claim.exam_date, Some(date(2024, 4, 28)));
        assert!(claim.documents.is_empty());
        assert!(claim.customer_name.is_empty());
        assert_eq!(claim.receiver_banking_info, ReceiverBankingInfo::default());
    }

    #[test]
    fn test_claim_builders() {
        let claim = create_test_claim()
            .with_status(ClaimStatus::Processing)
            .with_receiver(ReceiverBankingInfo::new("Vietcombank", "Jane Doe", "0071000123456"))
            .with_documents(vec!["invoice.pdf".to_string(), "xray.png".to_string()])
            .for_customer("Jane Doe");

        assert_eq!(claim.status, ClaimStatus::Processing);
        assert_eq!(claim.receiver_banking_info.bank_name, "Vietcombank");
        assert_eq!(claim.documents, vec!["invoice.pdf", "xray.png"]);
        assert!(claim.is_owned_by("jane DOE"));
    }

    #[test]
    fn test_document_order_is_preserved() {
        let claim = create_test_claim().with_documents(["c", "a", "b"]);
        assert_eq!(claim.documents, vec!["c", "a", "b"]);
    }

    #[test]
    fn test_claim_serialization() {
        let claim = create_test_claim().for_customer("Jane Doe");
        let json = serde_json::to_string(&claim).unwrap();
        let back: Claim = serde_json::from_str(&json).unwrap();
        assert_eq!(back, claim);
    }
}

// ============================================================================
// Status Tests
// ============================================================================

mod status_tests {
    use super::*;

    #[test]
    fn test_all_claim_statuses_round_trip() {
        for status in [ClaimStatus::New, ClaimStatus::Processing, ClaimStatus::Done] {
            let parsed: ClaimStatus = status.to_string().parse().unwrap();
            assert_eq!(parsed, status);
        }
    }

    #[test]
    fn test_status_serde_uses_file_literal() {
        let json = serde_json::to_string(&ClaimStatus::Processing).unwrap();
        assert_eq!(json, "\"PROCESSING\"");
    }

    #[test]
    fn test_unknown_status_is_rejected() {
        let result = "CLOSED".parse::<ClaimStatus>();
        assert!(matches!(result, Err(ClaimError::InvalidStatus(ref s)) if s == "CLOSED"));
    }

    #[test]
    fn test_lowercase_status_is_rejected() {
        assert!("new".parse::<ClaimStatus>().is_err());
    }

    #[test]
    fn test_default_status() {
        assert_eq!(ClaimStatus::default(), ClaimStatus::New);
    }
}

// ============================================================================
// Update Tests
// ============================================================================

mod update_tests {
    use super::*;

    fn base() -> Claim {
        Claim::new(
            "f-0002",
            date(2024, 1, 10),
            CardNumber::new(42),
            date(2024, 1, 9),
            ClaimAmount::from_minor(10_000),
        )
        .with_documents(["a.pdf"])
        .for_customer("John Roe")
    }

    #[test]
    fn test_empty_update() {
        let update = ClaimUpdate::new();
        assert!(update.is_empty());

        let mut claim = base();
        let touched = claim.apply(update);

        assert!(touched.is_empty());
        assert_eq!(claim, base());
    }

    #[test]
    fn test_full_update() {
        let receiver = ReceiverBankingInfo::new("HSBC", "John Roe", "99");
        let update = ClaimUpdate::new()
            .claim_date(date(2024, 2, 1))
            .card_number(CardNumber::new(43))
            .exam_date(date(2024, 1, 31))
            .claim_amount(ClaimAmount::from_minor(20_000))
            .status(ClaimStatus::Done)
            .receiver(receiver.clone())
            .documents(Vec::<String>::new());
        assert!(!update.is_empty());

        let mut claim = base();
        let touched = claim.apply(update);

        assert_eq!(touched.len(), 7);
        assert_eq!(claim.claim_date, Some(date(2024, 2, 1)));
        assert_eq!(claim.card_number, CardNumber::new(43));
        assert_eq!(claim.exam_date, Some(date(2024, 1, 31)));
        assert_eq!(claim.claim_amount.amount(), dec!(200));
        assert_eq!(claim.status, ClaimStatus::Done);
        assert_eq!(claim.receiver_banking_info, receiver);
        assert!(claim.documents.is_empty());
        assert_eq!(claim.id.as_str(), "f-0002");
        assert_eq!(claim.customer_name, "John Roe");
    }

    #[test]
    fn test_update_restores_dropped_date() {
        let mut claim = base();
        claim.claim_date = None;

        claim.apply(ClaimUpdate::new().claim_date(date(2024, 3, 3)));

        assert_eq!(claim.claim_date, Some(date(2024, 3, 3)));
    }
}

// ============================================================================
// Error Tests
// ============================================================================

mod error_tests {
    use super::*;

    #[test]
    fn test_persistence_error_conversion() {
        let error: ClaimError = StoreError::internal("disk full").into();
        assert!(error.is_persistence_failure());
        assert!(error.to_string().contains("disk full"));
    }

    #[test]
    fn test_domain_errors_are_not_persistence_failures() {
        assert!(!ClaimError::DuplicateId("f-1".into()).is_persistence_failure());
        assert!(!ClaimError::NotFound("f-1".into()).is_persistence_failure());
    }
}

// ============================================================================
// Property Tests
// ============================================================================

mod property_tests {
    use super::*;
    use proptest::prelude::*;

    fn base() -> Claim {
        Claim::new(
            "f-0100",
            date(2024, 6, 1),
            CardNumber::new(1),
            date(2024, 5, 30),
            ClaimAmount::zero(),
        )
        .for_customer("Ann Lee")
    }

    proptest! {
        #[test]
        fn update_touches_only_supplied_fields(minor in 0u64..10_000_000u64, card in any::<u64>()) {
            let mut claim = base();
            let touched = claim.apply(
                ClaimUpdate::new()
                    .claim_amount(ClaimAmount::from_minor(minor))
                    .card_number(CardNumber::new(card)),
            );

            prop_assert_eq!(touched.len(), 2);
            prop_assert_eq!(claim.claim_amount, ClaimAmount::from_minor(minor));
            prop_assert_eq!(claim.card_number, CardNumber::new(card));
            prop_assert_eq!(claim.claim_date, base().claim_date);
            prop_assert_eq!(claim.status, ClaimStatus::New);
            prop_assert_eq!(&claim.customer_name, "Ann Lee");
        }
    }
}
