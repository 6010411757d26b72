//! Summary command handlers: totals by category and totals for one month.

use crate::args::MonthlyArgs;
use crate::commands::{total, total_out_of_range, Out};
use crate::model::{Amount, Transaction};
use crate::validate::validate_month;
use crate::{Config, Result};
use serde::Serialize;
use std::collections::HashMap;

/// The total of all expenses in one category.
#[derive(Debug, Clone, Eq, PartialEq, Serialize)]
pub struct CategoryTotal {
    pub category: String,
    pub total: Amount,
}

/// The expenses of one month, in file order, and their total.
#[derive(Debug, Clone, Eq, PartialEq, Serialize)]
pub struct MonthlySummary {
    pub month: String,
    pub transactions: Vec<Transaction>,
    pub total: Amount,
}

/// Totals every category, largest total first.
///
/// Categories are grouped by exact string. Categories with equal totals stay in the order in
/// which they first appear in the data file.
///
/// # Errors
///
/// - A `Store` error if the data file cannot be read or a category total is out of range.
pub fn summary(config: &Config) -> Result<Out<Vec<CategoryTotal>>> {
    let store = config.store();
    store.ensure_exists()?;
    let transactions = store.load_all()?;

    let mut totals: Vec<CategoryTotal> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();
    for t in &transactions {
        match index.get(t.category()) {
            Some(&ix) => {
                let row = &mut totals[ix];
                row.total = row
                    .total
                    .checked_add(t.amount())
                    .ok_or_else(total_out_of_range)?;
            }
            None => {
                index.insert(t.category(), totals.len());
                totals.push(CategoryTotal {
                    category: t.category().to_string(),
                    total: t.amount(),
                });
            }
        }
    }
    // Stable, so ties keep first-appearance order.
    totals.sort_by(|a, b| b.total.cmp(&a.total));

    let rule = "-".repeat(40);
    let mut lines = vec![
        rule.clone(),
        format!("{:14}  {:>10}", "CATEGORY", "TOTAL"),
        rule.clone(),
    ];
    for row in &totals {
        lines.push(format!("{:14}  ${:>9}", row.category, row.total));
    }
    lines.push(rule);

    Ok(Out::new(lines.join("\n"), totals))
}

/// Shows the expenses of one month and their total.
///
/// A row belongs to the month when its date text starts with `YYYY-MM`. This is a plain prefix
/// match on the stored text, not a date comparison.
///
/// # Errors
///
/// - A `Format` error if the month is not `YYYY-MM`.
/// - A `Store` error if the data file cannot be read or the total is out of range.
pub fn monthly(config: &Config, args: &MonthlyArgs) -> Result<Out<MonthlySummary>> {
    let month = args.month();
    validate_month(month)?;

    let store = config.store();
    store.ensure_exists()?;
    let transactions: Vec<Transaction> = store
        .load_all()?
        .into_iter()
        .filter(|t| t.date().starts_with(month))
        .collect();
    let total = total(&transactions)?;

    let rule = "-".repeat(40);
    let mut lines = vec![format!("Monthly Summary for {month}"), rule.clone()];
    for t in &transactions {
        lines.push(format!(
            "{}  {}  {}  ${}",
            t.date(),
            t.description(),
            t.category(),
            t.amount()
        ));
    }
    lines.push(rule);
    lines.push(format!("TOTAL: ${total}"));

    let summary = MonthlySummary {
        month: month.to_string(),
        transactions,
        total,
    };
    Ok(Out::new(lines.join("\n"), summary))
}
