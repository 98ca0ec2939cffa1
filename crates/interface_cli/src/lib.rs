//! Interactive CLI Layer
//!
//! This crate provides the menu-driven front end for the claims record store.
//!
//! # Architecture
//!
//! - **Dispatcher**: The numbered menu loop and its exit flush
//! - **Handlers**: One function per menu entry, each calling the record manager once
//! - **Prompt**: Line-based questions with re-prompting on bad input
//! - **Config**: Data directory, file names and log level from `CLAIMS_*` variables
//!
//! # Example
//!
//! ```rust,ignore
//! use interface_cli::Dispatcher;
//!
//! let mut dispatcher = Dispatcher::new(stdin.lock(), stdout.lock());
//! dispatcher.run(&mut records)?;
//! ```

pub mod config;
pub mod error;
pub mod prompt;
pub mod handlers;
pub mod view;
pub mod dispatcher;

pub use config::CliConfig;
pub use dispatcher::{Dispatcher, MenuChoice};
pub use error::CliError;
