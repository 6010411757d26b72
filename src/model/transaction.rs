use crate::model::Amount;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// The header row of the data file, in column order.
pub const HEADERS: [&str; 4] = ["date", "description", "category", "amount"];

/// Represents a single expense, i.e. one row of the data file.
///
/// Field order matters: it is the column order used when writing rows.
#[derive(Default, Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Transaction {
    /// The date as `YYYY-MM-DD` text. Rows read back from disk are not re-validated.
    date: String,
    description: String,
    /// Always lower-case when written by this program.
    category: String,
    amount: Amount,
}

impl Transaction {
    /// Creates a new `Transaction`, lower-casing the category.
    pub fn new(
        date: impl Into<String>,
        description: impl Into<String>,
        category: impl AsRef<str>,
        amount: Amount,
    ) -> Self {
        Self {
            date: date.into(),
            description: description.into(),
            category: category.as_ref().to_lowercase(),
            amount,
        }
    }

    pub fn date(&self) -> &str {
        &self.date
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn amount(&self) -> Amount {
        self.amount
    }
}

/// The one-line form used in confirmations, e.g. `2025-09-01 | Coffee | food | $3.50`.
impl Display for Transaction {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} | {} | {} | ${}",
            self.date, self.description, self.category, self.amount
        )
    }
}
