//! List command handler.

use crate::args::ListArgs;
use crate::commands::{total, truncate, Out};
use crate::model::Transaction;
use crate::{Config, Result};

/// Lists expenses in file order as a fixed-width table with a total row.
///
/// When a limit is given only the last `limit` expenses are shown, still in file order, and the
/// total covers only the rows shown.
///
/// # Errors
///
/// - A `Store` error if the data file cannot be read or the total is out of range.
pub fn list(config: &Config, args: &ListArgs) -> Result<Out<Vec<Transaction>>> {
    let store = config.store();
    store.ensure_exists()?;
    let mut transactions = store.load_all()?;
    if let Some(limit) = args.limit() {
        let skip = transactions.len().saturating_sub(limit);
        transactions = transactions.split_off(skip);
    }

    let rule = "-".repeat(72);
    let mut lines = vec![
        rule.clone(),
        format!(
            "{:10}  {:28}  {:14}  {:>10}",
            "DATE", "DESCRIPTION", "CATEGORY", "AMOUNT"
        ),
        rule.clone(),
    ];
    for t in &transactions {
        lines.push(format!(
            "{:10}  {:28}  {:14}  ${:>9}",
            t.date(),
            truncate(t.description(), 28),
            truncate(t.category(), 14),
            t.amount()
        ));
    }
    let total = total(&transactions)?;
    lines.push(rule);
    lines.push(format!("{:56}  ${:>9}", "TOTAL", total));

    Ok(Out::new(lines.join("\n"), transactions))
}
