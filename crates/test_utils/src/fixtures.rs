//! Pre-built Test Fixtures
//!
//! Provides ready-to-use test data for customers and claims.
//! These fixtures are designed to be consistent and predictable for unit tests.

use chrono::NaiveDate;
use core_kernel::{CardNumber, ClaimAmount, ClaimId};
use domain_claims::{Claim, ClaimStatus, ReceiverBankingInfo};
use domain_party::Customer;
use rust_decimal_macros::dec;

/// Fixture for date test data
pub struct DateFixtures;

impl DateFixtures {
    /// Standard claim filing date (Mar 1, 2024)
    pub fn claim_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()
    }

    /// Standard examination date, ten days before filing
    pub fn exam_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 2, 20).unwrap()
    }

    /// Leap day, for calendar edge cases
    pub fn leap_day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 2, 29).unwrap()
    }
}

/// Fixture for amount test data
pub struct AmountFixtures;

impl AmountFixtures {
    /// A typical outpatient claim
    pub fn standard() -> ClaimAmount {
        ClaimAmount::new(dec!(1500.50)).unwrap()
    }

    /// A large inpatient claim
    pub fn large() -> ClaimAmount {
        ClaimAmount::new(dec!(250000.00)).unwrap()
    }

    /// A zero amount
    pub fn zero() -> ClaimAmount {
        ClaimAmount::zero()
    }
}

/// Fixture for customer test data
pub struct CustomerFixtures;

impl CustomerFixtures {
    /// The standard policyholder
    pub fn jane_doe() -> Customer {
        Customer::new("Jane Doe", 34, "Female", "12 High Street", "0901234567")
    }

    /// A second, unrelated policyholder
    pub fn john_roe() -> Customer {
        Customer::new("John Roe", 52, "Male", "4 Low Road", "0907654321")
    }

    /// Jane Doe under a different capitalization and different details
    pub fn jane_doe_shouting() -> Customer {
        Customer::new("JANE DOE", 99, "Unknown", "Nowhere", "000")
    }
}

/// Fixture for claim test data
pub struct ClaimFixtures;

impl ClaimFixtures {
    /// Standard claim id
    pub fn claim_id() -> ClaimId {
        ClaimId::new("f-0001")
    }

    /// Standard receiver account
    pub fn receiver() -> ReceiverBankingInfo {
        ReceiverBankingInfo::new("ACB", "Jane Doe", "0011223344")
    }

    /// A new claim with two documents and no owner yet
    pub fn new_claim(id: &str) -> Claim {
        Claim::new(
            id,
            DateFixtures::claim_date(),
            CardNumber::new(1_234_567_890),
            DateFixtures::exam_date(),
            AmountFixtures::standard(),
        )
        .with_receiver(Self::receiver())
        .with_documents(["receipt.pdf", "exam.pdf"])
    }

    /// A settled claim owned by Jane Doe
    pub fn done_claim(id: &str) -> Claim {
        Self::new_claim(id)
            .with_status(ClaimStatus::Done)
            .for_customer("Jane Doe")
    }
}

/// Fixture for raw record file lines
pub struct LineFixtures;

impl LineFixtures {
    /// Jane Doe as stored in the customer file
    pub fn jane_doe_customer() -> &'static str {
        "Jane Doe,34,Female,12 High Street,0901234567"
    }

    /// A customer line with too few fields
    pub fn short_customer() -> &'static str {
        "Broken Line,40,Male"
    }

    /// A claim for Jane Doe with two documents
    pub fn jane_doe_claim() -> &'static str {
        "f-0001,2024-03-01,1234567890,2024-02-20,1500.50,NEW,ACB,Jane Doe,0011223344,Jane Doe,receipt.pdf,exam.pdf"
    }

    /// A claim whose claim date is not ISO formatted
    pub fn bad_date_claim() -> &'static str {
        "f-0002,01/03/2024,1234567890,2024-02-20,10,PROCESSING,ACB,Jane Doe,0011223344,Jane Doe"
    }

    /// A claim with an unknown status literal
    pub fn unknown_status_claim() -> &'static str {
        "f-0003,2024-03-01,1234567890,2024-02-20,10,CLOSED,ACB,Jane Doe,0011223344,Jane Doe"
    }
}
