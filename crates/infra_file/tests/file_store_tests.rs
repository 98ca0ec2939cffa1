//! Integration tests for the flat-file record store

use proptest::prelude::*;
use rust_decimal_macros::dec;

use core_kernel::{ClaimAmount, DiagnosticKind};
use domain_claims::{ClaimStatus, RecordStore};
use infra_file::{FileRecordStore, FileStoreConfig};
use test_utils::{
    assert_clean_load, assert_line_skipped, customer_with_claims_strategy, ClaimFixtures, CustomerFixtures,
    LineFixtures, TempRecordDir, TestClaimBuilder,
};

fn store_for(dir: &TempRecordDir) -> FileRecordStore {
    FileRecordStore::new(FileStoreConfig::in_dir(dir.path()))
}

// ============================================================================
// Loading
// ============================================================================

mod loading_tests {
    use super::*;

    #[test]
    fn test_load_reads_every_good_line() {
        let dir = TempRecordDir::with_lines(
            &[LineFixtures::jane_doe_customer(), "John Roe,52,Male,4 Low Road,0907654321"],
            &[LineFixtures::jane_doe_claim()],
        )
        .unwrap();
        let store = store_for(&dir);

        let customers = store.load_customers().unwrap();
        let claims = store.load_claims().unwrap();

        assert_clean_load(&customers);
        assert_clean_load(&claims);
        assert_eq!(customers.records, vec![CustomerFixtures::jane_doe(), CustomerFixtures::john_roe()]);
        assert_eq!(claims.records.len(), 1);
        assert_eq!(claims.records[0].claim_amount.amount(), dec!(1500.50));
        assert_eq!(claims.records[0].documents, vec!["receipt.pdf", "exam.pdf"]);
    }

    #[test]
    fn test_malformed_customer_line_is_skipped() {
        let dir = TempRecordDir::with_lines(
            &[LineFixtures::jane_doe_customer(), LineFixtures::short_customer()],
            &[],
        )
        .unwrap();

        let customers = store_for(&dir).load_customers().unwrap();

        assert_eq!(customers.records.len(), 1);
        assert_eq!(customers.diagnostics.len(), 1);
        assert_line_skipped(&customers, 2, |kind| {
            *kind == DiagnosticKind::MalformedRecordLine { expected: 5, found: 3 }
        });
    }

    #[test]
    fn test_non_numeric_age_is_skipped() {
        let dir = TempRecordDir::with_lines(&["Jane Doe,old,Female,12 High Street,0901234567"], &[]).unwrap();

        let customers = store_for(&dir).load_customers().unwrap();

        assert!(customers.records.is_empty());
        assert_line_skipped(&customers, 1, |kind| {
            matches!(kind, DiagnosticKind::ParseFailure { field: "age", .. })
        });
    }

    #[test]
    fn test_bad_date_keeps_claim() {
        let dir = TempRecordDir::with_lines(&[], &[LineFixtures::bad_date_claim()]).unwrap();

        let claims = store_for(&dir).load_claims().unwrap();

        assert_eq!(claims.records.len(), 1);
        assert_eq!(claims.records[0].claim_date, None);
        assert!(claims.records[0].exam_date.is_some());
        assert_eq!(claims.skipped(), 0);
        assert!(matches!(
            claims.diagnostics[0].kind,
            DiagnosticKind::FieldDropped { field: "claim date", .. }
        ));
    }

    #[test]
    fn test_unknown_status_is_skipped() {
        let dir = TempRecordDir::with_lines(
            &[],
            &[LineFixtures::unknown_status_claim(), LineFixtures::jane_doe_claim()],
        )
        .unwrap();

        let claims = store_for(&dir).load_claims().unwrap();

        assert_eq!(claims.records.len(), 1);
        assert_eq!(claims.records[0].id.as_str(), "f-0001");
        assert_line_skipped(&claims, 1, |kind| {
            matches!(kind, DiagnosticKind::ParseFailure { field: "status", .. })
        });
    }

    #[test]
    fn test_missing_files_are_empty() {
        let dir = TempRecordDir::new().unwrap();
        let store = store_for(&dir);

        assert!(store.load_customers().unwrap().records.is_empty());
        assert!(store.load_claims().unwrap().records.is_empty());
    }
}

// ============================================================================
// Saving
// ============================================================================

mod saving_tests {
    use super::*;

    #[test]
    fn test_save_writes_canonical_lines() {
        let dir = TempRecordDir::new().unwrap();
        let store = store_for(&dir);
        let claim = ClaimFixtures::new_claim("f-0001").for_customer("Jane Doe");

        store.save_customers(&[CustomerFixtures::jane_doe()]).unwrap();
        store.save_claims(&[claim]).unwrap();

        assert_eq!(dir.customer_lines().unwrap(), vec![LineFixtures::jane_doe_customer()]);
        assert_eq!(dir.claim_lines().unwrap(), vec![LineFixtures::jane_doe_claim()]);
    }

    #[test]
    fn test_absent_dates_are_written_empty() {
        let dir = TempRecordDir::new().unwrap();
        let store = store_for(&dir);
        let claim = TestClaimBuilder::new()
            .with_claim_date(None)
            .with_exam_date(None)
            .with_amount(ClaimAmount::zero())
            .with_status(ClaimStatus::Done)
            .owned_by("Jane Doe")
            .build();

        store.save_claims(&[claim.clone()]).unwrap();

        assert_eq!(
            dir.claim_lines().unwrap(),
            vec!["f-0001,,1234567890,,0,DONE,ACB,Jane Doe,0011223344,Jane Doe"]
        );
        let reloaded = store.load_claims().unwrap();
        assert_clean_load(&reloaded);
        assert_eq!(reloaded.records, vec![claim]);
    }

    #[test]
    fn test_saving_empty_collections_truncates() {
        let dir = TempRecordDir::with_lines(&[LineFixtures::jane_doe_customer()], &[LineFixtures::jane_doe_claim()])
            .unwrap();
        let store = store_for(&dir);

        store.save_customers(&[]).unwrap();
        store.save_claims(&[]).unwrap();

        assert!(dir.customer_lines().unwrap().is_empty());
        assert!(dir.claim_lines().unwrap().is_empty());
    }
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    #[test]
    fn prop_saved_records_load_back((customer, claims) in customer_with_claims_strategy()) {
        let dir = TempRecordDir::new().unwrap();
        let store = store_for(&dir);

        store.save_customers(std::slice::from_ref(&customer)).unwrap();
        store.save_claims(&claims).unwrap();

        let loaded_customers = store.load_customers().unwrap();
        let loaded_claims = store.load_claims().unwrap();

        prop_assert!(loaded_customers.diagnostics.is_empty());
        prop_assert!(loaded_claims.diagnostics.is_empty());
        prop_assert_eq!(loaded_customers.records, vec![customer]);
        prop_assert_eq!(loaded_claims.records, claims);
    }
}
