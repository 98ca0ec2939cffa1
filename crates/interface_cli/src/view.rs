//! Plain field dumps of records

use core_kernel::format_optional_date;
use domain_claims::Claim;
use domain_party::Customer;

/// One line per customer field group
pub fn customer_line(customer: &Customer) -> String {
    format!(
        "{} | age {} | {} | {} | {}",
        customer.full_name, customer.age, customer.gender, customer.address, customer.phone_number
    )
}

/// One line with every claim field
pub fn claim_line(claim: &Claim) -> String {
    let receiver = &claim.receiver_banking_info;
    format!(
        "{} | claimed {} | card {} | exam {} | {} | {} | {} / {} / {} | documents: {} | owner {}",
        claim.id,
        date_or_dash(format_optional_date(claim.claim_date)),
        claim.card_number,
        date_or_dash(format_optional_date(claim.exam_date)),
        claim.claim_amount,
        claim.status,
        receiver.bank_name,
        receiver.account_name,
        receiver.account_number,
        claim.documents.join(", "),
        claim.customer_name,
    )
}

fn date_or_dash(date: String) -> String {
    if date.is_empty() {
        "-".to_string()
    } else {
        date
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use core_kernel::{CardNumber, ClaimAmount};
    use domain_claims::ReceiverBankingInfo;

    #[test]
    fn test_claim_line_shows_missing_date() {
        let mut claim = Claim::new(
            "f-0001",
            NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
            CardNumber::new(7),
            NaiveDate::from_ymd_opt(2024, 2, 20).unwrap(),
            "10".parse::<ClaimAmount>().unwrap(),
        )
        .with_receiver(ReceiverBankingInfo::new("ACB", "Jane Doe", "0011"))
        .with_documents(["a.pdf", "b.pdf"])
        .for_customer("Jane Doe");
        claim.exam_date = None;

        assert_eq!(
            claim_line(&claim),
            "f-0001 | claimed 2024-03-01 | card 7 | exam - | 10 | NEW | ACB / Jane Doe / 0011 | documents: a.pdf, b.pdf | owner Jane Doe"
        );
    }

    #[test]
    fn test_customer_line() {
        let customer = Customer::new("Jane Doe", 34, "Female", "12 High Street", "0901234567");
        assert_eq!(customer_line(&customer), "Jane Doe | age 34 | Female | 12 High Street | 0901234567");
    }
}
