//! Runtime configuration for the budget program.
//!
//! The only setting is the location of the data file. It is resolved once, in `main`, and then
//! passed to each command so that nothing reads a global path.

use crate::store::Store;
use std::path::{Path, PathBuf};
use tracing::error;

/// The file name used for the data file when no path is given.
pub const DATA_FILE: &str = "expenses.csv";

/// The `Config` object represents the configuration of the app. It knows where the data file
/// lives and hands out a `Store` for it.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Config {
    data_file: PathBuf,
}

impl Config {
    pub fn new(data_file: impl Into<PathBuf>) -> Self {
        Self {
            data_file: data_file.into(),
        }
    }

    pub fn data_file(&self) -> &Path {
        &self.data_file
    }

    /// A `Store` over the configured data file.
    pub fn store(&self) -> Store {
        Store::new(&self.data_file)
    }
}

/// The default data file path: `expenses.csv` next to the running executable.
pub fn default_data_file() -> PathBuf {
    match std::env::current_exe() {
        Ok(exe) => match exe.parent() {
            Some(dir) => dir.join(DATA_FILE),
            None => PathBuf::from(DATA_FILE),
        },
        Err(e) => {
            error!(
                "Unable to determine the location of this program ({e}). You can get around this \
                by providing --data-file or BUDGET_DATA_FILE. Falling back to {DATA_FILE} in the \
                current directory.",
            );
            PathBuf::from(DATA_FILE)
        }
    }
}

#[test]
fn default_data_file_test() {
    let path = default_data_file();
    assert_eq!(path.file_name().unwrap(), DATA_FILE);
}

#[test]
fn config_store_test() {
    let config = Config::new("/tmp/some/expenses.csv");
    assert_eq!(config.store().path(), config.data_file());
}
