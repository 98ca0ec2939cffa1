//! Line codec for the record files
//!
//! One record per line, fields joined with `,`, no quoting or escaping.
//!
//! ```text
//! customers: fullName,age,gender,address,phoneNumber
//! claims:    id,claimDate,cardNumber,examDate,claimAmount,status,
//!            bankName,accountName,accountNumber,ownerFullName[,document...]
//! ```
//!
//! The claims layout is the canonical one: the owner's full name is the tenth
//! field and every field after it is a document name. Other historical
//! orderings are not detected.
//!
//! Because nothing is escaped, a free-text field containing a comma or a line
//! break cannot be read back as written. Encoding such a field logs a warning
//! naming the record and the field.

use chrono::NaiveDate;
use tracing::warn;

use core_kernel::{format_optional_date, parse_iso_date, CardNumber, ClaimAmount, DiagnosticKind};
use domain_claims::{Claim, ClaimStatus, ReceiverBankingInfo};
use domain_party::Customer;

/// Field separator
pub const DELIMITER: char = ',';
/// Fields on a customer line
pub const CUSTOMER_FIELDS: usize = 5;
/// Positional fields at the start of a claim line
pub const CLAIM_PREFIX_FIELDS: usize = 10;

/// A decoded record plus the fields that had to be dropped on the way
pub type Decoded<T> = Result<(T, Vec<DiagnosticKind>), DiagnosticKind>;

/// Encodes a customer as one line (without the line terminator)
pub fn encode_customer(customer: &Customer) -> String {
    let record = customer.full_name.as_str();
    check_field(record, "full name", &customer.full_name);
    check_field(record, "gender", &customer.gender);
    check_field(record, "address", &customer.address);
    check_field(record, "phone number", &customer.phone_number);

    [
        customer.full_name.clone(),
        customer.age.to_string(),
        customer.gender.clone(),
        customer.address.clone(),
        customer.phone_number.clone(),
    ]
    .join(",")
}

/// Decodes a customer line
///
/// The line must have exactly five fields and an unsigned integer age.
pub fn decode_customer(line: &str) -> Decoded<Customer> {
    let fields: Vec<&str> = line.split(DELIMITER).collect();
    if fields.len() != CUSTOMER_FIELDS {
        return Err(DiagnosticKind::MalformedRecordLine {
            expected: CUSTOMER_FIELDS,
            found: fields.len(),
        });
    }

    let age = Customer::parse_age(fields[1]).map_err(|e| DiagnosticKind::ParseFailure {
        field: "age",
        message: e.to_string(),
    })?;

    let customer = Customer::new(fields[0], age, fields[2], fields[3], fields[4]);
    Ok((customer, Vec::new()))
}

/// Encodes a claim as one line (without the line terminator)
///
/// An absent date is written as an empty field.
pub fn encode_claim(claim: &Claim) -> String {
    let record = claim.id.as_str();
    let receiver = &claim.receiver_banking_info;
    check_field(record, "id", claim.id.as_str());
    check_field(record, "bank name", &receiver.bank_name);
    check_field(record, "account name", &receiver.account_name);
    check_field(record, "account number", &receiver.account_number);
    check_field(record, "owner full name", &claim.customer_name);
    for document in &claim.documents {
        check_field(record, "document", document);
    }

    let mut fields = vec![
        claim.id.to_string(),
        format_optional_date(claim.claim_date),
        claim.card_number.to_string(),
        format_optional_date(claim.exam_date),
        claim.claim_amount.to_string(),
        claim.status.to_string(),
        receiver.bank_name.clone(),
        receiver.account_name.clone(),
        receiver.account_number.clone(),
        claim.customer_name.clone(),
    ];
    fields.extend(claim.documents.iter().cloned());
    fields.join(",")
}

/// Decodes a claim line
///
/// Skips the line (returns `Err`) when the fixed prefix is incomplete or when
/// the card number, amount or status does not parse. An unparseable date is
/// dropped to `None` and reported alongside the decoded claim.
pub fn decode_claim(line: &str) -> Decoded<Claim> {
    let fields: Vec<&str> = line.split(DELIMITER).collect();
    if fields.len() < CLAIM_PREFIX_FIELDS {
        return Err(DiagnosticKind::MalformedRecordLine {
            expected: CLAIM_PREFIX_FIELDS,
            found: fields.len(),
        });
    }

    let card_number = fields[2]
        .parse::<CardNumber>()
        .map_err(|e| parse_failure("card number", fields[2], e))?;
    let claim_amount = fields[4]
        .parse::<ClaimAmount>()
        .map_err(|e| parse_failure("claim amount", fields[4], e))?;
    let status = fields[5]
        .parse::<ClaimStatus>()
        .map_err(|e| parse_failure("status", fields[5], e))?;

    let mut dropped = Vec::new();
    let claim_date = decode_date(fields[1], "claim date", &mut dropped);
    let exam_date = decode_date(fields[3], "exam date", &mut dropped);

    let claim = Claim {
        id: fields[0].into(),
        claim_date,
        card_number,
        exam_date,
        claim_amount,
        status,
        receiver_banking_info: ReceiverBankingInfo::new(fields[6], fields[7], fields[8]),
        documents: fields[CLAIM_PREFIX_FIELDS..].iter().map(|d| d.to_string()).collect(),
        customer_name: fields[9].to_string(),
    };
    Ok((claim, dropped))
}

/// An empty date field is how an absent date is written, so it loads as
/// `None` without a diagnostic.
fn decode_date(value: &str, field: &'static str, dropped: &mut Vec<DiagnosticKind>) -> Option<NaiveDate> {
    if value.trim().is_empty() {
        return None;
    }
    match parse_iso_date(value) {
        Ok(date) => Some(date),
        Err(e) => {
            dropped.push(DiagnosticKind::FieldDropped {
                field,
                message: e.to_string(),
            });
            None
        }
    }
}

fn parse_failure(field: &'static str, value: &str, error: impl std::fmt::Display) -> DiagnosticKind {
    DiagnosticKind::ParseFailure {
        field,
        message: format!("'{}': {}", value, error),
    }
}

fn check_field(record: &str, field: &'static str, value: &str) {
    if value.contains([DELIMITER, '\n', '\r']) {
        warn!(
            record = %record,
            field,
            value = %value,
            "Field contains a comma or line break and will not load back as written"
        );
    }
}
