//! Claim aggregate

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use core_kernel::{CardNumber, ClaimAmount, ClaimId};
use domain_party::CustomerKey;
use crate::error::ClaimError;

/// Claim status
///
/// Written to the claims file as the upper-case literal; parsing is
/// case-sensitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ClaimStatus {
    /// Just filed
    New,
    /// Being worked on
    Processing,
    /// Settled
    Done,
}

impl ClaimStatus {
    /// Returns the literal used in the claims file
    pub fn as_str(&self) -> &'static str {
        match self {
            ClaimStatus::New => "NEW",
            ClaimStatus::Processing => "PROCESSING",
            ClaimStatus::Done => "DONE",
        }
    }
}

impl Default for ClaimStatus {
    fn default() -> Self {
        ClaimStatus::New
    }
}

impl fmt::Display for ClaimStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ClaimStatus {
    type Err = ClaimError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "NEW" => Ok(ClaimStatus::New),
            "PROCESSING" => Ok(ClaimStatus::Processing),
            "DONE" => Ok(ClaimStatus::Done),
            other => Err(ClaimError::InvalidStatus(other.to_string())),
        }
    }
}

/// Bank account the settlement is paid into
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReceiverBankingInfo {
    pub bank_name: String,
    pub account_name: String,
    pub account_number: String,
}

impl ReceiverBankingInfo {
    pub fn new(
        bank_name: impl Into<String>,
        account_name: impl Into<String>,
        account_number: impl Into<String>,
    ) -> Self {
        Self {
            bank_name: bank_name.into(),
            account_name: account_name.into(),
            account_number: account_number.into(),
        }
    }
}

/// An insurance claim filed by a customer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claim {
    /// Caller-supplied identifier, unique among live claims
    pub id: ClaimId,
    /// Date the claim was filed; `None` if the stored value was unreadable
    pub claim_date: Option<NaiveDate>,
    /// Insurance card number
    pub card_number: CardNumber,
    /// Date of the medical exam; `None` if the stored value was unreadable
    pub exam_date: Option<NaiveDate>,
    /// Claimed amount
    pub claim_amount: ClaimAmount,
    /// Status
    pub status: ClaimStatus,
    /// Where the settlement goes
    pub receiver_banking_info: ReceiverBankingInfo,
    /// Supporting document names, in the order they were supplied
    pub documents: Vec<String>,
    /// Full name of the owning customer (foreign key by name)
    pub customer_name: String,
}

impl Claim {
    /// Creates a new claim in the `NEW` status
    ///
    /// The owner is attached when the claim is handed to the record manager.
    pub fn new(
        id: impl Into<ClaimId>,
        claim_date: NaiveDate,
        card_number: CardNumber,
        exam_date: NaiveDate,
        claim_amount: ClaimAmount,
    ) -> Self {
        Self {
            id: id.into(),
            claim_date: Some(claim_date),
            card_number,
            exam_date: Some(exam_date),
            claim_amount,
            status: ClaimStatus::New,
            receiver_banking_info: ReceiverBankingInfo::default(),
            documents: Vec::new(),
            customer_name: String::new(),
        }
    }

    /// Sets the status
    pub fn with_status(mut self, status: ClaimStatus) -> Self {
        self.status = status;
        self
    }

    /// Sets the receiver banking details
    pub fn with_receiver(mut self, receiver: ReceiverBankingInfo) -> Self {
        self.receiver_banking_info = receiver;
        self
    }

    /// Sets the supporting documents
    pub fn with_documents<I, D>(mut self, documents: I) -> Self
    where
        I: IntoIterator<Item = D>,
        D: Into<String>,
    {
        self.documents = documents.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the owner's full name
    pub fn for_customer(mut self, full_name: impl Into<String>) -> Self {
        self.customer_name = full_name.into();
        self
    }

    /// Key of the owning customer
    pub fn owner_key(&self) -> CustomerKey {
        CustomerKey::from_name(&self.customer_name)
    }

    /// Case-insensitive match against a customer's full name
    pub fn is_owned_by(&self, full_name: &str) -> bool {
        self.owner_key().matches(full_name)
    }

    /// Applies an update, replacing every supplied field
    ///
    /// Returns the names of the fields that were supplied.
    pub fn apply(&mut self, update: ClaimUpdate) -> Vec<&'static str> {
        let mut touched = Vec::new();

        if let Some(date) = update.claim_date {
            self.claim_date = Some(date);
            touched.push("claim_date");
        }
        if let Some(card) = update.card_number {
            self.card_number = card;
            touched.push("card_number");
        }
        if let Some(date) = update.exam_date {
            self.exam_date = Some(date);
            touched.push("exam_date");
        }
        if let Some(amount) = update.claim_amount {
            self.claim_amount = amount;
            touched.push("claim_amount");
        }
        if let Some(status) = update.status {
            self.status = status;
            touched.push("status");
        }
        if let Some(receiver) = update.receiver_banking_info {
            self.receiver_banking_info = receiver;
            touched.push("receiver_banking_info");
        }
        if let Some(documents) = update.documents {
            self.documents = documents;
            touched.push("documents");
        }

        touched
    }
}

/// Field changes for an existing claim; `None` leaves a field untouched
///
/// The id and the owner are not updatable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClaimUpdate {
    pub claim_date: Option<NaiveDate>,
    pub card_number: Option<CardNumber>,
    pub exam_date: Option<NaiveDate>,
    pub claim_amount: Option<ClaimAmount>,
    pub status: Option<ClaimStatus>,
    pub receiver_banking_info: Option<ReceiverBankingInfo>,
    pub documents: Option<Vec<String>>,
}

impl ClaimUpdate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn claim_date(mut self, date: NaiveDate) -> Self {
        self.claim_date = Some(date);
        self
    }

    pub fn card_number(mut self, card: CardNumber) -> Self {
        self.card_number = Some(card);
        self
    }

    pub fn exam_date(mut self, date: NaiveDate) -> Self {
        self.exam_date = Some(date);
        self
    }

    pub fn claim_amount(mut self, amount: ClaimAmount) -> Self {
        self.claim_amount = Some(amount);
        self
    }

    pub fn status(mut self, status: ClaimStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn receiver(mut self, receiver: ReceiverBankingInfo) -> Self {
        self.receiver_banking_info = Some(receiver);
        self
    }

    pub fn documents<I, D>(mut self, documents: I) -> Self
    where
        I: IntoIterator<Item = D>,
        D: Into<String>,
    {
        self.documents = Some(documents.into_iter().map(Into::into).collect());
        self
    }

    /// Returns true if no field is supplied
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_claim() -> Claim {
        Claim::new(
            "f-0001",
            NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
            CardNumber::new(1234567890),
            NaiveDate::from_ymd_opt(2024, 2, 20).unwrap(),
            ClaimAmount::from_minor(150_000),
        )
        .for_customer("Jane Doe")
    }

    #[test]
    fn test_status_literals_are_case_sensitive() {
        assert_eq!("DONE".parse::<ClaimStatus>().unwrap(), ClaimStatus::Done);
        assert!(matches!("done".parse::<ClaimStatus>(), Err(ClaimError::InvalidStatus(_))));
    }

    #[test]
    fn test_apply_leaves_unsupplied_fields() {
        let mut claim = sample_claim();
        let before = claim.clone();

        let touched = claim.apply(ClaimUpdate::new().status(ClaimStatus::Processing));

        assert_eq!(touched, vec!["status"]);
        assert_eq!(claim.status, ClaimStatus::Processing);
        assert_eq!(claim.claim_amount, before.claim_amount);
        assert_eq!(claim.documents, before.documents);
    }

    #[test]
    fn test_owner_match_ignores_case() {
        assert!(sample_claim().is_owned_by("JANE DOE"));
    }
}
