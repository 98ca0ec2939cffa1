//! Line-oriented prompting
//!
//! Every question is one line of output and one line of input. Answers that
//! fail to parse print the reason and ask again; only closed input ends a
//! question early.

use std::io::{BufRead, Write};

use chrono::NaiveDate;

use core_kernel::{parse_iso_date, CardNumber, ClaimAmount};
use domain_claims::ClaimStatus;

use crate::error::CliError;

/// Reads answers from `R` and writes questions to `W`
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Writes one line of output
    pub fn say(&mut self, message: impl std::fmt::Display) -> Result<(), CliError> {
        writeln!(self.output, "{}", message)?;
        Ok(())
    }

    /// Asks a question and returns the trimmed answer
    ///
    /// # Errors
    ///
    /// `CliError::EndOfInput` when the input is closed.
    pub fn ask(&mut self, label: &str) -> Result<String, CliError> {
        write!(self.output, "{}: ", label)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(CliError::EndOfInput);
        }
        Ok(line.trim().to_string())
    }

    /// Asks until `parse` accepts the answer
    pub fn ask_parsed<T, E: std::fmt::Display>(
        &mut self,
        label: &str,
        parse: impl Fn(&str) -> Result<T, E>,
    ) -> Result<T, CliError> {
        loop {
            let answer = self.ask(label)?;
            match parse(&answer) {
                Ok(value) => return Ok(value),
                Err(e) => self.say(format_args!("Invalid input: {}", e))?,
            }
        }
    }

    /// Like [`Prompter::ask_parsed`], but an empty answer means "keep" and
    /// returns `None`
    pub fn ask_optional<T, E: std::fmt::Display>(
        &mut self,
        label: &str,
        parse: impl Fn(&str) -> Result<T, E>,
    ) -> Result<Option<T>, CliError> {
        loop {
            let answer = self.ask(&format!("{} (empty to keep)", label))?;
            if answer.is_empty() {
                return Ok(None);
            }
            match parse(&answer) {
                Ok(value) => return Ok(Some(value)),
                Err(e) => self.say(format_args!("Invalid input: {}", e))?,
            }
        }
    }

    /// Asks until the answer is not empty
    pub fn ask_required(&mut self, label: &str) -> Result<String, CliError> {
        self.ask_parsed(label, |answer| {
            if answer.is_empty() {
                Err("a value is required")
            } else {
                Ok(answer.to_string())
            }
        })
    }

    pub fn into_inner(self) -> (R, W) {
        (self.input, self.output)
    }
}

/// Parses an ISO date answer
pub fn parse_date(answer: &str) -> Result<NaiveDate, String> {
    parse_iso_date(answer).map_err(|e| e.to_string())
}

/// Parses a card number answer
pub fn parse_card_number(answer: &str) -> Result<CardNumber, String> {
    answer
        .parse::<CardNumber>()
        .map_err(|e| format!("card number '{}': {}", answer, e))
}

/// Parses a non-negative amount answer
pub fn parse_amount(answer: &str) -> Result<ClaimAmount, String> {
    answer.parse::<ClaimAmount>().map_err(|e| e.to_string())
}

/// Parses a status answer, accepting any letter case at the prompt
pub fn parse_status(answer: &str) -> Result<ClaimStatus, String> {
    answer
        .to_uppercase()
        .parse::<ClaimStatus>()
        .map_err(|e| e.to_string())
}

/// Splits a comma-separated document list, dropping empty entries
pub fn parse_documents(answer: &str) -> Vec<String> {
    answer
        .split(',')
        .map(str::trim)
        .filter(|d| !d.is_empty())
        .map(str::to_string)
        .collect()
}
