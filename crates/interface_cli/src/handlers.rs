//! Menu action handlers
//!
//! Each handler collects its answers through the [`Prompter`], calls the
//! record manager once and prints a one-line result. Domain failures
//! (duplicate id, unknown id, failed save) are reported to the user and the
//! menu carries on; only terminal errors propagate.

use std::io::{BufRead, Write};

use tracing::warn;

use domain_claims::{Claim, ClaimError, ClaimStatus, ClaimUpdate, ReceiverBankingInfo, RecordManager, RecordStore};
use domain_party::Customer;

use crate::error::CliError;
use crate::prompt::{parse_amount, parse_card_number, parse_date, parse_documents, parse_status, Prompter};
use crate::view;

/// Adds a claim, registering its customer when the name is new
pub fn add_claim<S, R, W>(records: &mut RecordManager<S>, prompt: &mut Prompter<R, W>) -> Result<(), CliError>
where
    S: RecordStore,
    R: BufRead,
    W: Write,
{
    let id = prompt.ask_required("Claim id")?;
    if records.get_claim_by_id(&id).is_some() {
        return prompt.say(format_args!("Claim {} already exists", id));
    }

    let claim_date = prompt.ask_parsed("Claim date (YYYY-MM-DD)", parse_date)?;
    let card_number = prompt.ask_parsed("Card number", parse_card_number)?;
    let exam_date = prompt.ask_parsed("Exam date (YYYY-MM-DD)", parse_date)?;
    let amount = prompt.ask_parsed("Claim amount", parse_amount)?;
    let status = prompt.ask_parsed("Status (NEW, PROCESSING, DONE; empty for NEW)", |answer| {
        if answer.is_empty() {
            Ok(ClaimStatus::New)
        } else {
            parse_status(answer)
        }
    })?;
    let receiver = ask_receiver(prompt)?;
    let documents = parse_documents(&prompt.ask("Documents (comma-separated)")?);

    let full_name = prompt.ask_required("Customer full name")?;
    let owner = match records.get_customer(&full_name) {
        Some(existing) => {
            prompt.say(format_args!("Existing customer: {}", existing))?;
            existing.clone()
        }
        None => ask_customer(prompt, full_name)?,
    };

    let claim = Claim::new(id, claim_date, card_number, exam_date, amount)
        .with_status(status)
        .with_receiver(receiver)
        .with_documents(documents);

    match records.add_claim(claim, owner) {
        Ok(added) => {
            let message = format!("Added claim {} for {}", added.id, added.customer_name);
            prompt.say(message)
        }
        Err(e) => report(prompt, e),
    }
}

/// Updates the fields the user answers; empty answers leave a field as is
pub fn update_claim<S, R, W>(records: &mut RecordManager<S>, prompt: &mut Prompter<R, W>) -> Result<(), CliError>
where
    S: RecordStore,
    R: BufRead,
    W: Write,
{
    let id = prompt.ask_required("Claim id")?;
    let Some(current) = records.get_claim_by_id(&id) else {
        return prompt.say(format_args!("Claim {} not found", id));
    };
    let current_receiver = current.receiver_banking_info.clone();
    prompt.say(view::claim_line(current))?;

    let mut update = ClaimUpdate::new();
    if let Some(date) = prompt.ask_optional("Claim date (YYYY-MM-DD)", parse_date)? {
        update = update.claim_date(date);
    }
    if let Some(card) = prompt.ask_optional("Card number", parse_card_number)? {
        update = update.card_number(card);
    }
    if let Some(date) = prompt.ask_optional("Exam date (YYYY-MM-DD)", parse_date)? {
        update = update.exam_date(date);
    }
    if let Some(amount) = prompt.ask_optional("Claim amount", parse_amount)? {
        update = update.claim_amount(amount);
    }
    if let Some(status) = prompt.ask_optional("Status (NEW, PROCESSING, DONE)", parse_status)? {
        update = update.status(status);
    }

    let bank_name = prompt.ask_optional("Bank name", text)?;
    let account_name = prompt.ask_optional("Account name", text)?;
    let account_number = prompt.ask_optional("Account number", text)?;
    if bank_name.is_some() || account_name.is_some() || account_number.is_some() {
        update = update.receiver(ReceiverBankingInfo::new(
            bank_name.unwrap_or(current_receiver.bank_name),
            account_name.unwrap_or(current_receiver.account_name),
            account_number.unwrap_or(current_receiver.account_number),
        ));
    }

    if let Some(documents) = prompt.ask_optional("Documents (comma-separated, '-' for none)", |answer| {
        Ok::<_, String>(if answer == "-" { Vec::new() } else { parse_documents(answer) })
    })? {
        update = update.documents(documents);
    }

    if update.is_empty() {
        return prompt.say("Nothing to update");
    }

    match records.update_claim(&id, update) {
        Ok(updated) => {
            let message = format!("Updated claim {}", updated.id);
            prompt.say(message)
        }
        Err(e) => report(prompt, e),
    }
}

/// Deletes a claim and, with it, a customer left without claims
pub fn delete_claim<S, R, W>(records: &mut RecordManager<S>, prompt: &mut Prompter<R, W>) -> Result<(), CliError>
where
    S: RecordStore,
    R: BufRead,
    W: Write,
{
    let id = prompt.ask_required("Claim id")?;
    match records.delete_claim(&id) {
        Ok(removed) => {
            prompt.say(format_args!("Deleted claim {}", removed.id))?;
            if records.get_customer(&removed.customer_name).is_none() {
                prompt.say(format_args!("Removed customer {} (no claims left)", removed.customer_name))?;
            }
            Ok(())
        }
        Err(e) => report(prompt, e),
    }
}

/// Dumps every customer and every claim
pub fn view_all<S, R, W>(records: &RecordManager<S>, prompt: &mut Prompter<R, W>) -> Result<(), CliError>
where
    S: RecordStore,
    R: BufRead,
    W: Write,
{
    let (customers, claims) = records.list_all();

    prompt.say(format_args!("Customers ({})", customers.len()))?;
    for customer in customers {
        prompt.say(view::customer_line(customer))?;
    }
    prompt.say(format_args!("Claims ({})", claims.len()))?;
    for claim in claims {
        prompt.say(view::claim_line(claim))?;
    }
    Ok(())
}

/// Dumps one customer and their claims
pub fn view_customer<S, R, W>(records: &RecordManager<S>, prompt: &mut Prompter<R, W>) -> Result<(), CliError>
where
    S: RecordStore,
    R: BufRead,
    W: Write,
{
    let full_name = prompt.ask_required("Customer full name")?;
    let Some(customer) = records.get_customer(&full_name) else {
        return prompt.say(format_args!("Customer {} not found", full_name));
    };

    prompt.say(view::customer_line(customer))?;
    for claim in records.list_claims_for_customer(&full_name) {
        prompt.say(view::claim_line(claim))?;
    }
    Ok(())
}

fn ask_receiver<R: BufRead, W: Write>(prompt: &mut Prompter<R, W>) -> Result<ReceiverBankingInfo, CliError> {
    let bank_name = prompt.ask("Bank name")?;
    let account_name = prompt.ask("Account name")?;
    let account_number = prompt.ask("Account number")?;
    Ok(ReceiverBankingInfo::new(bank_name, account_name, account_number))
}

fn ask_customer<R: BufRead, W: Write>(prompt: &mut Prompter<R, W>, full_name: String) -> Result<Customer, CliError> {
    let age = prompt.ask_parsed("Age", Customer::parse_age)?;
    let gender = prompt.ask("Gender")?;
    let address = prompt.ask("Address")?;
    let phone_number = prompt.ask("Phone number")?;
    Ok(Customer::new(full_name, age, gender, address, phone_number))
}

fn text(answer: &str) -> Result<String, String> {
    Ok(answer.to_string())
}

/// Prints a record manager failure; terminal errors are not handled here
fn report<R: BufRead, W: Write>(prompt: &mut Prompter<R, W>, error: ClaimError) -> Result<(), CliError> {
    if error.is_persistence_failure() {
        warn!(error = %error, "Change kept in memory but not saved");
        prompt.say(format_args!("{} (the change is kept and will be saved again on exit)", error))
    } else {
        prompt.say(error)
    }
}
