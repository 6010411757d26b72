//! These structs provide the CLI interface for the budget CLI.

use crate::config::default_data_file;
use clap::{Parser, Subcommand};
use std::convert::Infallible;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing_subscriber::filter::LevelFilter;

/// Printed to stdout whenever the command line cannot be understood.
pub const USAGE: &str = "\
Usage:
  budget                                   # interactive mode
  budget add YYYY-MM-DD \"desc\" category amount
  budget list [N]
  budget summary
  budget monthly YYYY-MM
  budget categories
  budget delete N
";

/// budget: A command-line tool for tracking personal expenses.
///
/// Expenses are stored in a local CSV file with the columns date, description, category and
/// amount. Run without a command to enter interactive mode.
#[derive(Debug, Parser, Clone)]
#[command(disable_help_subcommand = true)]
pub struct Args {
    #[clap(flatten)]
    common: Common,

    #[command(subcommand)]
    command: Option<Command>,
}

impl Args {
    pub fn common(&self) -> &Common {
        &self.common
    }

    /// The command to run, or `None` for interactive mode.
    pub fn command(&self) -> Option<&Command> {
        self.command.as_ref()
    }
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Add an expense.
    Add(AddArgs),
    /// List all expenses, or only the last N.
    List(ListArgs),
    /// Show the total for each category, largest first.
    Summary,
    /// Show the expenses and total for one month.
    Monthly(MonthlyArgs),
    /// Show the suggested categories.
    Categories,
    /// Delete the N-th expense, counting from 1 in list order.
    Delete(DeleteArgs),
}

/// Arguments common to all subcommands.
#[derive(Debug, Parser, Clone)]
pub struct Common {
    /// The logging verbosity. One of, from least to most verbose:
    /// off, error, warn, info, debug, trace
    ///
    /// This can be overridden by RUST_LOG. Logs are written to stderr.
    #[arg(long, default_value_t = LevelFilter::WARN)]
    log_level: LevelFilter,

    /// The CSV file where expenses are stored. Defaults to expenses.csv next to this program.
    #[arg(long, env = "BUDGET_DATA_FILE", default_value_t = DisplayPath(default_data_file()))]
    data_file: DisplayPath,
}

impl Common {
    pub fn log_level(&self) -> LevelFilter {
        self.log_level
    }

    pub fn data_file(&self) -> &DisplayPath {
        &self.data_file
    }
}

/// Args for the `budget add` command.
#[derive(Debug, Parser, Clone)]
pub struct AddArgs {
    /// The date of the expense as YYYY-MM-DD.
    date: String,

    /// What the expense was for.
    #[arg(allow_hyphen_values = true)]
    description: String,

    /// The category. Any text is accepted and it is stored in lower case.
    #[arg(allow_hyphen_values = true)]
    category: String,

    /// The amount, e.g. 12.50. It is rounded to two decimal places.
    #[arg(allow_hyphen_values = true)]
    amount: String,
}

impl AddArgs {
    pub fn new(
        date: impl Into<String>,
        description: impl Into<String>,
        category: impl Into<String>,
        amount: impl Into<String>,
    ) -> Self {
        Self {
            date: date.into(),
            description: description.into(),
            category: category.into(),
            amount: amount.into(),
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

    pub fn amount(&self) -> &str {
        &self.amount
    }
}

/// Args for the `budget list` command.
#[derive(Debug, Default, Parser, Clone)]
pub struct ListArgs {
    /// Only show the last N expenses.
    limit: Option<String>,
}

impl ListArgs {
    pub fn new(limit: Option<usize>) -> Self {
        Self {
            limit: limit.map(|n| n.to_string()),
        }
    }

    /// Parses the raw argument, e.g. from an interactive command line.
    pub fn from_arg(limit: Option<&str>) -> Self {
        Self {
            limit: limit.map(str::to_string),
        }
    }

    /// The number of trailing rows to show. A missing, zero or non-numeric limit shows all rows.
    pub fn limit(&self) -> Option<usize> {
        let text = self.limit.as_deref()?;
        if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        match text.parse::<usize>() {
            Ok(0) => None,
            Ok(n) => Some(n),
            // Too many digits to fit: that is more rows than could exist.
            Err(_) => Some(usize::MAX),
        }
    }
}

/// Args for the `budget monthly` command.
#[derive(Debug, Parser, Clone)]
pub struct MonthlyArgs {
    /// The month as YYYY-MM.
    month: String,
}

impl MonthlyArgs {
    pub fn new(month: impl Into<String>) -> Self {
        Self {
            month: month.into(),
        }
    }

    pub fn month(&self) -> &str {
        &self.month
    }
}

/// Args for the `budget delete` command.
#[derive(Debug, Parser, Clone)]
pub struct DeleteArgs {
    /// The 1-based position of the expense, as shown by `budget list`.
    #[arg(allow_hyphen_values = true)]
    position: String,
}

impl DeleteArgs {
    pub fn new(position: impl Into<String>) -> Self {
        Self {
            position: position.into(),
        }
    }

    pub fn position(&self) -> &str {
        &self.position
    }
}

/// A path that can be shown as the default value of a command line option.
#[derive(Debug, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct DisplayPath(PathBuf);

impl Display for DisplayPath {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.to_string_lossy())
    }
}

impl FromStr for DisplayPath {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(PathBuf::from(s)))
    }
}

impl DisplayPath {
    pub fn path(&self) -> &Path {
        &self.0
    }
}
