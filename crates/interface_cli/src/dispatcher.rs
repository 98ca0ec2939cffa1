//! Interactive menu loop
//!
//! ```text
//! 1) Add claim        4) View all records
//! 2) Update claim     5) View one customer
//! 3) Delete claim     6) Save and exit
//! ```
//!
//! The loop ends on choice 6 or when input is closed. Either way the records
//! are flushed one last time, and a failure of that final save is returned to
//! the caller.

use std::io::{BufRead, Write};

use tracing::{debug, info};

use domain_claims::{RecordManager, RecordStore};

use crate::error::CliError;
use crate::handlers;
use crate::prompt::Prompter;

const MENU: &str = "\
1) Add claim
2) Update claim
3) Delete claim
4) View all records
5) View one customer
6) Save and exit";

/// A menu entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    AddClaim,
    UpdateClaim,
    DeleteClaim,
    ViewAll,
    ViewCustomer,
    Exit,
}

impl MenuChoice {
    /// Parses the number typed at the menu
    pub fn parse(answer: &str) -> Option<Self> {
        match answer.trim() {
            "1" => Some(MenuChoice::AddClaim),
            "2" => Some(MenuChoice::UpdateClaim),
            "3" => Some(MenuChoice::DeleteClaim),
            "4" => Some(MenuChoice::ViewAll),
            "5" => Some(MenuChoice::ViewCustomer),
            "6" => Some(MenuChoice::Exit),
            _ => None,
        }
    }
}

/// Drives the menu over any line-based input and output
pub struct Dispatcher<R, W> {
    prompt: Prompter<R, W>,
}

impl<R: BufRead, W: Write> Dispatcher<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            prompt: Prompter::new(input, output),
        }
    }

    /// Runs the menu until exit, then flushes `records`
    ///
    /// # Errors
    ///
    /// - `CliError::Io` if the terminal fails.
    /// - `CliError::Records` if the final save fails.
    pub fn run<S: RecordStore>(&mut self, records: &mut RecordManager<S>) -> Result<(), CliError> {
        let session = loop {
            match self.step(records) {
                Ok(true) => {}
                Ok(false) => break Ok(()),
                Err(e) if e.is_end_of_input() => {
                    info!("Input closed, saving and exiting");
                    break Ok(());
                }
                Err(e) => break Err(e),
            }
        };

        // Saved even when the terminal failed
        records.flush()?;
        session?;
        self.prompt.say("Records saved")?;
        Ok(())
    }

    /// Shows the menu and performs one action; false once the user exits
    fn step<S: RecordStore>(&mut self, records: &mut RecordManager<S>) -> Result<bool, CliError> {
        self.prompt.say(MENU)?;
        let answer = self.prompt.ask("Choose")?;
        let Some(choice) = MenuChoice::parse(&answer) else {
            self.prompt.say(format_args!("Unknown option '{}', enter a number from 1 to 6", answer))?;
            return Ok(true);
        };
        debug!(?choice, "Menu choice");

        match choice {
            MenuChoice::AddClaim => handlers::add_claim(records, &mut self.prompt)?,
            MenuChoice::UpdateClaim => handlers::update_claim(records, &mut self.prompt)?,
            MenuChoice::DeleteClaim => handlers::delete_claim(records, &mut self.prompt)?,
            MenuChoice::ViewAll => handlers::view_all(records, &mut self.prompt)?,
            MenuChoice::ViewCustomer => handlers::view_customer(records, &mut self.prompt)?,
            MenuChoice::Exit => return Ok(false),
        }
        Ok(true)
    }

    /// Returns the input and output, e.g. to inspect what was written
    pub fn into_inner(self) -> (R, W) {
        self.prompt.into_inner()
    }
}
