//! Test Data Builders
//!
//! Provides builder patterns for constructing test data with sensible defaults.
//! These builders allow tests to specify only the relevant fields while using
//! defaults for everything else.

use chrono::NaiveDate;
use core_kernel::{CardNumber, ClaimAmount, ClaimId};
use domain_claims::{Claim, ClaimStatus, ReceiverBankingInfo};
use domain_party::Customer;

use crate::fixtures::{AmountFixtures, ClaimFixtures, CustomerFixtures, DateFixtures};

/// Builder for constructing test customers
pub struct TestCustomerBuilder {
    customer: Customer,
}

impl Default for TestCustomerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestCustomerBuilder {
    /// Creates a new builder starting from Jane Doe
    pub fn new() -> Self {
        Self {
            customer: CustomerFixtures::jane_doe(),
        }
    }

    /// Sets the full name
    pub fn with_name(mut self, full_name: impl Into<String>) -> Self {
        self.customer.full_name = full_name.into();
        self
    }

    /// Sets the age
    pub fn with_age(mut self, age: u32) -> Self {
        self.customer.age = age;
        self
    }

    /// Sets the address
    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.customer.address = address.into();
        self
    }

    /// Sets the phone number
    pub fn with_phone(mut self, phone_number: impl Into<String>) -> Self {
        self.customer.phone_number = phone_number.into();
        self
    }

    /// Builds the customer
    pub fn build(self) -> Customer {
        self.customer
    }
}

/// Builder for constructing test claims
pub struct TestClaimBuilder {
    id: ClaimId,
    claim_date: Option<NaiveDate>,
    card_number: CardNumber,
    exam_date: Option<NaiveDate>,
    claim_amount: ClaimAmount,
    status: ClaimStatus,
    receiver: ReceiverBankingInfo,
    documents: Vec<String>,
    customer_name: String,
}

impl Default for TestClaimBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestClaimBuilder {
    /// Creates a new builder with default values
    pub fn new() -> Self {
        Self {
            id: ClaimFixtures::claim_id(),
            claim_date: Some(DateFixtures::claim_date()),
            card_number: CardNumber::new(1_234_567_890),
            exam_date: Some(DateFixtures::exam_date()),
            claim_amount: AmountFixtures::standard(),
            status: ClaimStatus::New,
            receiver: ClaimFixtures::receiver(),
            documents: Vec::new(),
            customer_name: String::new(),
        }
    }

    /// Sets the claim id
    pub fn with_id(mut self, id: impl Into<ClaimId>) -> Self {
        self.id = id.into();
        self
    }

    /// Sets the claim date (`None` for an absent date)
    pub fn with_claim_date(mut self, date: Option<NaiveDate>) -> Self {
        self.claim_date = date;
        self
    }

    /// Sets the exam date (`None` for an absent date)
    pub fn with_exam_date(mut self, date: Option<NaiveDate>) -> Self {
        self.exam_date = date;
        self
    }

    /// Sets the card number
    pub fn with_card_number(mut self, card: u64) -> Self {
        self.card_number = CardNumber::new(card);
        self
    }

    /// Sets the amount
    pub fn with_amount(mut self, amount: ClaimAmount) -> Self {
        self.claim_amount = amount;
        self
    }

    /// Sets the status
    pub fn with_status(mut self, status: ClaimStatus) -> Self {
        self.status = status;
        self
    }

    /// Sets the receiver account
    pub fn with_receiver(mut self, receiver: ReceiverBankingInfo) -> Self {
        self.receiver = receiver;
        self
    }

    /// Adds a document
    pub fn with_document(mut self, document: impl Into<String>) -> Self {
        self.documents.push(document.into());
        self
    }

    /// Sets the owner name
    pub fn owned_by(mut self, full_name: impl Into<String>) -> Self {
        self.customer_name = full_name.into();
        self
    }

    /// Builds the claim
    pub fn build(self) -> Claim {
        Claim {
            id: self.id,
            claim_date: self.claim_date,
            card_number: self.card_number,
            exam_date: self.exam_date,
            claim_amount: self.claim_amount,
            status: self.status,
            receiver_banking_info: self.receiver,
            documents: self.documents,
            customer_name: self.customer_name,
        }
    }
}
