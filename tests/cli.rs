use assert_cmd::Command;
use std::path::Path;
use tempfile::TempDir;

fn budget(data_file: &Path) -> Command {
    let mut cmd = Command::cargo_bin("budget").unwrap();
    cmd.env_remove("RUST_LOG")
        .env_remove("BUDGET_DATA_FILE")
        .arg("--data-file")
        .arg(data_file);
    cmd
}

fn stdout(assert: &assert_cmd::assert::Assert) -> String {
    String::from_utf8(assert.get_output().to_owned().stdout).unwrap()
}

fn add(data_file: &Path, date: &str, description: &str, category: &str, amount: &str) {
    budget(data_file)
        .args(["add", date, description, category, amount])
        .assert()
        .success();
}

#[test]
fn add_list_summary_monthly_delete() {
    let dir = TempDir::new().unwrap();
    let data = dir.path().join("expenses.csv");
    add(&data, "2025-09-01", "Coffee", "Food", "3.5");
    add(&data, "2025-09-15", "Rent", "rent", "1200");
    add(&data, "2025-08-01", "Book", "education", "20");

    let contents = std::fs::read_to_string(&data).unwrap();
    assert_eq!(
        contents,
        "date,description,category,amount\n\
         2025-09-01,Coffee,food,3.50\n\
         2025-09-15,Rent,rent,1200.00\n\
         2025-08-01,Book,education,20.00\n"
    );

    let assert = budget(&data).arg("summary").assert().success();
    let output = stdout(&assert);
    let rent = output.find("rent ").unwrap();
    let education = output.find("education ").unwrap();
    let food = output.find("food ").unwrap();
    assert!(rent < education && education < food, "{output}");
    assert!(output.contains("$  1200.00"));

    let assert = budget(&data).args(["monthly", "2025-09"]).assert().success();
    let output = stdout(&assert);
    assert!(output.contains("TOTAL: $1203.50"));
    assert!(!output.contains("Book"));

    let assert = budget(&data).args(["delete", "1"]).assert().success();
    assert!(stdout(&assert).contains("Deleted #1: 2025-09-01 | Coffee | food | $3.50"));

    let assert = budget(&data).arg("list").assert().success();
    let output = stdout(&assert);
    let rows: Vec<&str> = output
        .lines()
        .filter(|l| l.starts_with("2025-"))
        .collect();
    assert_eq!(rows.len(), 2);
    assert!(rows[0].contains("Rent"));
    assert!(rows[1].contains("Book"));
}

#[test]
fn list_last_n() {
    let dir = TempDir::new().unwrap();
    let data = dir.path().join("expenses.csv");
    add(&data, "2025-09-01", "Coffee", "food", "3.5");
    add(&data, "2025-09-15", "Rent", "rent", "1200");
    let assert = budget(&data).args(["list", "1"]).assert().success();
    let output = stdout(&assert);
    assert!(!output.contains("Coffee"));
    assert!(output.contains("Rent"));
}

#[test]
fn invalid_date_exits_with_failure() {
    let dir = TempDir::new().unwrap();
    let data = dir.path().join("expenses.csv");
    let assert = budget(&data)
        .args(["add", "2025-13-01", "X", "food", "10"])
        .assert()
        .code(1);
    assert!(stdout(&assert).contains("date must be YYYY-MM-DD"));
    assert!(!data.exists());
}

#[test]
fn invalid_amount_exits_with_failure() {
    let dir = TempDir::new().unwrap();
    let data = dir.path().join("expenses.csv");
    let assert = budget(&data)
        .args(["add", "2025-09-01", "X", "food", "abc"])
        .assert()
        .code(1);
    assert!(stdout(&assert).contains("amount must be a number"));
}

#[test]
fn negative_amount_is_accepted() {
    let dir = TempDir::new().unwrap();
    let data = dir.path().join("expenses.csv");
    let assert = budget(&data)
        .args(["add", "2025-09-01", "Refund", "misc", "-12.5"])
        .assert()
        .success();
    assert!(stdout(&assert).contains("$-12.50"));
}

#[test]
fn invalid_month_exits_with_failure() {
    let dir = TempDir::new().unwrap();
    let data = dir.path().join("expenses.csv");
    let assert = budget(&data).args(["monthly", "2025-13"]).assert().code(1);
    assert!(stdout(&assert).contains("month must be YYYY-MM"));
}

#[test]
fn delete_out_of_range_exits_with_failure() {
    let dir = TempDir::new().unwrap();
    let data = dir.path().join("expenses.csv");
    add(&data, "2025-09-01", "Coffee", "food", "3.5");
    add(&data, "2025-09-15", "Rent", "rent", "1200");
    let before = std::fs::read_to_string(&data).unwrap();
    let assert = budget(&data).args(["delete", "99"]).assert().code(1);
    assert!(stdout(&assert).contains("Use 1..2"));
    budget(&data).args(["delete", "0"]).assert().code(1);
    assert_eq!(std::fs::read_to_string(&data).unwrap(), before);
}

#[test]
fn usage_banner_on_bad_command_line() {
    let dir = TempDir::new().unwrap();
    let data = dir.path().join("expenses.csv");
    for argv in [
        vec!["frobnicate"],
        vec!["add", "2025-09-01", "Coffee"],
        vec!["monthly"],
        vec!["delete"],
        vec!["help"],
        vec!["--help"],
        vec!["add", "--help"],
    ] {
        let assert = budget(&data).args(&argv).assert().success();
        let output = stdout(&assert);
        assert!(output.starts_with("Usage:"), "{argv:?}: {output}");
        assert!(output.contains("budget monthly YYYY-MM"));
    }
}

#[test]
fn categories() {
    let dir = TempDir::new().unwrap();
    let data = dir.path().join("expenses.csv");
    let assert = budget(&data).arg("categories").assert().success();
    let output = stdout(&assert);
    assert_eq!(output.lines().count(), 10);
    assert!(output.contains(" - entertainment"));
}

#[test]
fn corrupt_data_file_reports_error() {
    let dir = TempDir::new().unwrap();
    let data = dir.path().join("expenses.csv");
    std::fs::write(&data, "when,what\n1,2\n").unwrap();
    let assert = budget(&data).arg("list").assert().code(1);
    let output = stdout(&assert);
    assert!(output.starts_with("Error: "));
    assert!(output.contains("missing: date, description, category, amount"));
}

#[test]
fn interactive_session() {
    let dir = TempDir::new().unwrap();
    let data = dir.path().join("expenses.csv");
    let assert = budget(&data)
        .write_stdin("add\n2025-09-01\nCoffee\nFood\n3.5\nlist\nquit\n")
        .assert()
        .success();
    let output = stdout(&assert);
    assert!(output.contains("Interactive Mode"));
    assert!(output.contains("Added: 2025-09-01 | Coffee | food | $3.50"));
    assert!(output.contains("$     3.50"));
}

#[test]
fn data_file_from_environment() {
    let dir = TempDir::new().unwrap();
    let data = dir.path().join("from-env.csv");
    Command::cargo_bin("budget")
        .unwrap()
        .env_remove("RUST_LOG")
        .env("BUDGET_DATA_FILE", &data)
        .args(["add", "2025-09-01", "Coffee", "food", "3.5"])
        .assert()
        .success();
    assert!(data.is_file());
}

#[test]
fn out_of_range_amount_exits_with_failure() {
    let dir = TempDir::new().unwrap();
    let data = dir.path().join("expenses.csv");
    for amount in ["1e29", "50000000000000000000000000000"] {
        let assert = budget(&data)
            .args(["add", "2025-09-01", "Big", "misc", amount])
            .assert()
            .code(1);
        assert!(stdout(&assert).contains("is out of range"));
    }
    assert!(!data.exists());
}

#[test]
fn overflowing_total_exits_with_failure() {
    let dir = TempDir::new().unwrap();
    let data = dir.path().join("expenses.csv");
    add(&data, "2025-09-01", "Big", "misc", "700000000000000000000000000");
    add(&data, "2025-09-02", "Big", "misc", "700000000000000000000000000");
    for argv in [vec!["list"], vec!["summary"], vec!["monthly", "2025-09"]] {
        let assert = budget(&data).args(&argv).assert().code(1);
        let output = stdout(&assert);
        assert!(output.starts_with("Error: "), "{argv:?}: {output}");
        assert!(output.contains("out of range"), "{argv:?}: {output}");
    }
}

#[test]
fn interactive_session_survives_invalid_utf8() {
    let dir = TempDir::new().unwrap();
    let data = dir.path().join("expenses.csv");
    let assert = budget(&data)
        .write_stdin(b"\xff\ncategories\nquit\n".to_vec())
        .assert()
        .success();
    let output = stdout(&assert);
    assert!(output.contains("Error: input is not valid UTF-8"));
    assert!(output.contains("Available categories:"));
}
