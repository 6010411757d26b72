//! The `Store` owns the CSV data file holding every recorded transaction.
//!
//! The file has a `date,description,category,amount` header row followed by one row per
//! transaction, in the order they were added. Every operation opens the file, reads or writes it
//! completely, and closes it before returning.

use crate::error::{ErrorType, IntoResult};
use crate::model::{Transaction, HEADERS};
use crate::{utils, Result};
use anyhow::{bail, Context};
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Store {
    path: PathBuf,
}

impl Store {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Creates the data file with only a header row if it does not exist. Safe to call before
    /// every operation.
    pub fn ensure_exists(&self) -> Result<()> {
        if self.path.exists() {
            return Ok(());
        }
        debug!("Creating data file {}", self.path.display());
        utils::make_parent_dir(&self.path)
            .and_then(|_| write_table(&self.path, &[]))
            .pub_result(ErrorType::Store)
    }

    /// Reads every transaction in file order.
    pub fn load_all(&self) -> Result<Vec<Transaction>> {
        let transactions = read_table(&self.path).pub_result(ErrorType::Store)?;
        debug!(
            "Loaded {} transactions from {}",
            transactions.len(),
            self.path.display()
        );
        Ok(transactions)
    }

    /// Writes one row at the end of the file without touching existing rows.
    pub fn append(&self, transaction: &Transaction) -> Result<()> {
        debug!("Appending to {}: {transaction}", self.path.display());
        append_row(&self.path, transaction).pub_result(ErrorType::Store)
    }

    /// Rewrites the whole file with a header and `transactions` in the given order.
    ///
    /// The new contents go to a sibling `.tmp` file first, which is then renamed over the data
    /// file, so a failed write leaves the previous contents in place. The `.tmp` file is removed
    /// again if either step fails.
    pub fn replace_all(&self, transactions: &[Transaction]) -> Result<()> {
        let tmp = self.tmp_path();
        debug!(
            "Rewriting {} with {} transactions",
            self.path.display(),
            transactions.len()
        );
        let result = write_table(&tmp, transactions).and_then(|_| utils::rename(&tmp, &self.path));
        if result.is_err() && tmp.is_file() {
            if let Err(e) = utils::remove(&tmp) {
                warn!("{e:#}");
            }
        }
        result.pub_result(ErrorType::Store)
    }

    fn tmp_path(&self) -> PathBuf {
        let mut s = OsString::from(self.path.as_os_str());
        s.push(".tmp");
        PathBuf::from(s)
    }
}

fn read_table(path: &Path) -> anyhow::Result<Vec<Transaction>> {
    let file = utils::open(path)?;
    let mut reader = csv::Reader::from_reader(file);
    let headers = reader
        .headers()
        .with_context(|| format!("Unable to read the header row of {}", path.display()))?
        .clone();

    let missing: Vec<&str> = HEADERS
        .iter()
        .filter(|expected| !headers.iter().any(|h| h == **expected))
        .copied()
        .collect();
    if !missing.is_empty() {
        bail!(
            "The data file {} is malformed, its header row is missing: {}",
            path.display(),
            missing.join(", ")
        );
    }

    let mut transactions = Vec::new();
    for (ix, result) in reader.deserialize::<Transaction>().enumerate() {
        let transaction = result.with_context(|| {
            format!(
                "Unable to parse record {} of the data file {}",
                ix + 1,
                path.display()
            )
        })?;
        transactions.push(transaction);
    }
    Ok(transactions)
}

fn append_row(path: &Path, transaction: &Transaction) -> anyhow::Result<()> {
    let file = utils::open_append(path)?;
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(file);
    writer
        .serialize(transaction)
        .with_context(|| format!("Unable to write a row to {}", path.display()))?;
    writer
        .flush()
        .with_context(|| format!("Unable to write to {}", path.display()))
}

fn write_table(path: &Path, transactions: &[Transaction]) -> anyhow::Result<()> {
    let file = utils::create(path)?;
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(file);
    writer
        .write_record(HEADERS)
        .with_context(|| format!("Unable to write the header row to {}", path.display()))?;
    for transaction in transactions {
        writer
            .serialize(transaction)
            .with_context(|| format!("Unable to write a row to {}", path.display()))?;
    }
    let file = writer
        .into_inner()
        .map_err(|e| e.into_error())
        .with_context(|| format!("Unable to write to {}", path.display()))?;
    file.sync_all()
        .with_context(|| format!("Unable to sync {} to disk", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Amount;
    use std::str::FromStr;
    use tempfile::TempDir;

    fn transaction(date: &str, description: &str, category: &str, amount: &str) -> Transaction {
        Transaction::new(date, description, category, Amount::from_str(amount).unwrap())
    }

    fn store(dir: &TempDir) -> Store {
        Store::new(dir.path().join("expenses.csv"))
    }

    #[test]
    fn test_ensure_exists_writes_header_only() {
        let dir = TempDir::new().unwrap();
        let store = store(&dir);
        store.ensure_exists().unwrap();
        let contents = std::fs::read_to_string(store.path()).unwrap();
        assert_eq!(contents, "date,description,category,amount\n");
        assert!(store.load_all().unwrap().is_empty());
    }

    #[test]
    fn test_ensure_exists_is_idempotent() {
        let dir = TempDir::new().unwrap();
        let store = store(&dir);
        store.ensure_exists().unwrap();
        store
            .append(&transaction("2025-09-01", "Coffee", "food", "3.5"))
            .unwrap();
        store.ensure_exists().unwrap();
        assert_eq!(store.load_all().unwrap().len(), 1);
    }

    #[test]
    fn test_ensure_exists_creates_parent_directory() {
        let dir = TempDir::new().unwrap();
        let store = Store::new(dir.path().join("nested").join("expenses.csv"));
        store.ensure_exists().unwrap();
        assert!(store.path().is_file());
    }

    #[test]
    fn test_append_preserves_order_and_format() {
        let dir = TempDir::new().unwrap();
        let store = store(&dir);
        store.ensure_exists().unwrap();
        store
            .append(&transaction("2025-09-01", "Coffee", "Food", "3.5"))
            .unwrap();
        store
            .append(&transaction("2025-09-15", "Rent", "rent", "1200"))
            .unwrap();

        let contents = std::fs::read_to_string(store.path()).unwrap();
        assert_eq!(
            contents,
            "date,description,category,amount\n\
             2025-09-01,Coffee,food,3.50\n\
             2025-09-15,Rent,rent,1200.00\n"
        );

        let loaded = store.load_all().unwrap();
        assert_eq!(loaded.len(), 2);
        assert_eq!(loaded[0].description(), "Coffee");
        assert_eq!(loaded[1].description(), "Rent");
    }

    #[test]
    fn test_description_with_delimiter_is_quoted() {
        let dir = TempDir::new().unwrap();
        let store = store(&dir);
        store.ensure_exists().unwrap();
        let t = transaction("2025-09-01", "Milk, eggs \"and\" bread", "food", "8.2");
        store.append(&t).unwrap();

        let contents = std::fs::read_to_string(store.path()).unwrap();
        assert!(contents.contains("\"Milk, eggs \"\"and\"\" bread\""));
        assert_eq!(store.load_all().unwrap(), vec![t]);
    }

    #[test]
    fn test_replace_all() {
        let dir = TempDir::new().unwrap();
        let store = store(&dir);
        store.ensure_exists().unwrap();
        let a = transaction("2025-09-01", "Coffee", "food", "3.5");
        let b = transaction("2025-09-15", "Rent", "rent", "1200");
        let c = transaction("2025-08-01", "Book", "education", "20");
        for t in [&a, &b, &c] {
            store.append(t).unwrap();
        }

        store.replace_all(&[b.clone(), c.clone()]).unwrap();
        assert_eq!(store.load_all().unwrap(), vec![b, c]);
        assert!(!store.tmp_path().exists());
    }

    #[test]
    fn test_replace_all_failure_removes_tmp_file() {
        let dir = TempDir::new().unwrap();
        let store = store(&dir);
        // A non-empty directory where the data file should be makes the rename fail.
        std::fs::create_dir(store.path()).unwrap();
        std::fs::write(store.path().join("keep"), "x").unwrap();

        let t = transaction("2025-09-01", "Coffee", "food", "3.5");
        let err = store.replace_all(&[t]).unwrap_err();
        assert_eq!(err.error_type(), ErrorType::Store);
        assert!(err.to_string().contains("Unable to move file"));
        assert!(!store.tmp_path().exists());
        assert!(store.path().join("keep").is_file());
    }

    #[test]
    fn test_load_reads_columns_by_name() {
        let dir = TempDir::new().unwrap();
        let store = store(&dir);
        std::fs::write(
            store.path(),
            "amount,category,description,date\n1.5,misc,Gum,2025-01-02\n",
        )
        .unwrap();
        let loaded = store.load_all().unwrap();
        assert_eq!(loaded, vec![transaction("2025-01-02", "Gum", "misc", "1.5")]);
    }

    #[test]
    fn test_load_missing_file_is_store_error() {
        let dir = TempDir::new().unwrap();
        let err = store(&dir).load_all().unwrap_err();
        assert_eq!(err.error_type(), ErrorType::Store);
    }

    #[test]
    fn test_load_missing_header_is_store_error() {
        let dir = TempDir::new().unwrap();
        let store = store(&dir);
        std::fs::write(store.path(), "date,description,amount\n2025-01-02,Gum,1.50\n").unwrap();
        let err = store.load_all().unwrap_err();
        assert_eq!(err.error_type(), ErrorType::Store);
        assert!(err.to_string().contains("missing: category"));
    }

    #[test]
    fn test_load_bad_amount_is_store_error() {
        let dir = TempDir::new().unwrap();
        let store = store(&dir);
        std::fs::write(
            store.path(),
            "date,description,category,amount\n2025-01-02,Gum,misc,lots\n",
        )
        .unwrap();
        let err = store.load_all().unwrap_err();
        assert_eq!(err.error_type(), ErrorType::Store);
        assert!(err.to_string().contains("record 1"));
    }
}
