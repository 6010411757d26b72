//! Command handlers for the budget CLI.
//!
//! This module contains implementations for all CLI subcommands. The same handlers are driven by
//! the single-shot command line and by the interactive loop.

mod add;
mod categories;
mod delete;
mod list;
mod summary;

use crate::error::{Error, ErrorType};
use crate::model::{Amount, Transaction};
use crate::Result;
use serde::Serialize;
use std::fmt::Debug;
use std::io::Write;
use tracing::debug;

pub use add::add;
pub use categories::categories;
pub use delete::delete;
pub use list::list;
pub use summary::{monthly, summary, CategoryTotal, MonthlySummary};

/// The output type for a command. This allows the command to return a consistent message and,
/// optionally, structured data to both the command line and the interactive loop.
#[derive(Debug, Clone, Serialize)]
pub struct Out<T>
where
    T: Serialize + Clone + Debug,
{
    /// The text shown to the user for the outcome of the command execution.
    message: String,

    /// Any structured data that needs to be output from the call.
    structure: Option<T>,
}

impl<T> Out<T>
where
    T: Serialize + Clone + Debug,
{
    /// Create a new `Out` object that has `Some(structure)`.
    pub fn new<S>(message: S, structure: T) -> Self
    where
        S: Into<String>,
    {
        Self {
            message: message.into(),
            structure: Some(structure),
        }
    }

    /// Get the `message`.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Get the structured data stored in `structure`.
    pub fn structure(&self) -> Option<&T> {
        self.structure.as_ref()
    }

    /// Write the message to `w` and the structured data (if it exists) as JSON to `debug!`.
    pub fn write(&self, w: &mut impl Write) -> std::io::Result<()> {
        writeln!(w, "{}", self.message)?;
        if let Some(structure) = self.structure() {
            if let Ok(json) = serde_json::to_string_pretty(structure) {
                debug!("Command output:\n\n{json}\n\n");
            }
        }
        Ok(())
    }

    /// Print the message to stdout.
    pub fn print(&self) -> std::io::Result<()> {
        self.write(&mut std::io::stdout().lock())
    }
}

/// Adds up the amounts of `transactions`.
fn total<'a, I>(transactions: I) -> Result<Amount>
where
    I: IntoIterator<Item = &'a Transaction>,
{
    Amount::checked_sum(transactions.into_iter().map(Transaction::amount))
        .ok_or_else(total_out_of_range)
}

/// The error for a total that has grown past [`Amount::LIMIT`].
fn total_out_of_range() -> Error {
    Error::new(
        ErrorType::Store,
        format!(
            "The total of the recorded amounts is out of range, it must be at most {} in size",
            Amount::LIMIT
        ),
    )
}

/// Truncates `s` to at most `max` characters.
fn truncate(s: &str, max: usize) -> &str {
    match s.char_indices().nth(max) {
        Some((ix, _)) => &s[..ix],
        None => s,
    }
}
