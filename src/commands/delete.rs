//! Delete command handler.

use crate::args::DeleteArgs;
use crate::commands::Out;
use crate::error::{Error, ErrorType};
use crate::model::Transaction;
use crate::validate::validate_position;
use crate::{Config, Result};

/// Deletes the expense at a 1-based position in the full list.
///
/// Positions are not stable: deleting position N moves every later expense up by one. The
/// remaining expenses are rewritten in their original order.
///
/// # Errors
///
/// - A `Format` error if the position is not a whole number.
/// - A `Range` error if the position is outside `1..=count`. Nothing is written in that case.
/// - A `Store` error if the data file cannot be read or rewritten.
pub fn delete(config: &Config, args: &DeleteArgs) -> Result<Out<Transaction>> {
    let position = validate_position(args.position())?;

    let store = config.store();
    store.ensure_exists()?;
    let mut transactions = store.load_all()?;
    let count = transactions.len();

    let ix = usize::try_from(position)
        .ok()
        .filter(|&p| (1..=count).contains(&p))
        .ok_or_else(|| {
            Error::new(
                ErrorType::Range,
                format!("Invalid index {position}. Use 1..{count}"),
            )
        })?
        - 1;

    let removed = transactions.remove(ix);
    store.replace_all(&transactions)?;

    Ok(Out::new(
        format!("Deleted #{position}: {removed}"),
        removed,
    ))
}
