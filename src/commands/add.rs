//! Add command handler.

use crate::args::AddArgs;
use crate::commands::Out;
use crate::model::Transaction;
use crate::validate::{validate_amount, validate_date};
use crate::{Config, Result};

/// Validates and appends a new expense to the data file.
///
/// The date and amount are validated before the data file is touched, so a rejected expense
/// leaves the file as it was. The category is stored in lower case.
///
/// # Errors
///
/// - A `Format` error if the date is not `YYYY-MM-DD` or the amount is not a number.
/// - A `Store` error if the data file cannot be written.
pub fn add(config: &Config, args: &AddArgs) -> Result<Out<Transaction>> {
    validate_date(args.date())?;
    let amount = validate_amount(args.amount())?;
    let transaction = Transaction::new(args.date(), args.description(), args.category(), amount);

    let store = config.store();
    store.ensure_exists()?;
    store.append(&transaction)?;

    Ok(Out::new(format!("Added: {transaction}"), transaction))
}
