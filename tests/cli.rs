use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::{prelude::PredicateBooleanExt, str::contains};
use tempfile::TempDir;

const BIN_NAME: &str = "tracker";

fn tracker(data_dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin(BIN_NAME).expect("binary exists");
    cmd.env("FINANCE_TRACKER_DATA_DIR", data_dir);
    cmd.env("RUST_LOG", "off");
    cmd
}

fn record_may(data_dir: &Path) {
    tracker(data_dir)
        .args(["income", "100", "--account", "Bank", "--payor", "Employer"])
        .args(["--category", "Salary", "--date", "2024-05-01"])
        .assert()
        .success()
        .stdout(contains("Recorded income"));

    tracker(data_dir)
        .args(["expense", "30", "--account", "Bank", "--payee", "Grocer"])
        .args(["--category", "Food", "--date", "2024-05-02"])
        .assert()
        .success()
        .stdout(contains("Recorded expense"));

    tracker(data_dir)
        .args(["expense", "20", "--account", "Card", "--payee", "Cafe"])
        .args(["--category", "Food", "--date", "2024-05-09"])
        .assert()
        .success();
}

#[test]
fn cli_report_summarizes_month() {
    let temp_dir = TempDir::new().unwrap();
    record_may(temp_dir.path());

    tracker(temp_dir.path())
        .args(["report", "--month", "2024-05"])
        .assert()
        .success()
        .stdout(contains("Summary: 2024-05"))
        .stdout(contains("$100.00"))
        .stdout(contains("$50.00"))
        .stdout(contains("Food"));
}

#[test]
fn cli_list_filters_by_month() {
    let temp_dir = TempDir::new().unwrap();
    record_may(temp_dir.path());

    tracker(temp_dir.path())
        .args(["list", "--month", "2024-05"])
        .assert()
        .success()
        .stdout(contains("Grocer").and(contains("Employer")));

    tracker(temp_dir.path())
        .args(["list", "--month", "2024-06"])
        .assert()
        .success()
        .stdout(contains("No transactions found."));
}

#[test]
fn cli_rejects_malformed_month() {
    let temp_dir = TempDir::new().unwrap();

    tracker(temp_dir.path())
        .args(["list", "--month", "May"])
        .assert()
        .failure()
        .stderr(contains("Validation error"));
}

#[test]
fn cli_expense_creates_missing_account() {
    let temp_dir = TempDir::new().unwrap();
    record_may(temp_dir.path());

    tracker(temp_dir.path())
        .args(["account", "list"])
        .assert()
        .success()
        .stdout(contains("Bank").and(contains("Card")).and(contains("CASH")));
}

#[test]
fn cli_account_add_and_list() {
    let temp_dir = TempDir::new().unwrap();

    tracker(temp_dir.path())
        .args(["account", "add", "Savings", "--type", "BANK"])
        .assert()
        .success()
        .stdout(contains("Created account: Savings (BANK)"));

    tracker(temp_dir.path())
        .args(["account", "add", "Savings", "--type", "CASH"])
        .assert()
        .success()
        .stdout(contains("Account already exists: Savings (BANK)"));

    tracker(temp_dir.path())
        .args(["account", "list"])
        .assert()
        .success()
        .stdout(contains("1 account(s)"));
}

#[test]
fn cli_show_unknown_transaction_fails() {
    let temp_dir = TempDir::new().unwrap();

    tracker(temp_dir.path())
        .args(["show", "does-not-exist"])
        .assert()
        .failure()
        .stderr(contains("Transaction not found"));
}

#[test]
fn cli_import_is_idempotent() {
    let temp_dir = TempDir::new().unwrap();
    let file = temp_dir.path().join("bank.csv");
    fs::write(
        &file,
        "id,date,account,category,type,amount,notes,payor,payee\n\
         imp-1,2024-05-01,Bank,Salary,INCOME,2500,,Employer,\n\
         imp-2,2024-05-03,Bank,Rent,EXPENSE,1200,May rent,,Landlord\n",
    )
    .unwrap();

    tracker(temp_dir.path())
        .arg("import")
        .arg(&file)
        .assert()
        .success()
        .stdout(contains("Imported 2 transaction(s)"));

    tracker(temp_dir.path())
        .arg("import")
        .arg(&file)
        .assert()
        .success()
        .stdout(contains("No new transactions"));

    tracker(temp_dir.path())
        .args(["show", "imp-2"])
        .assert()
        .success()
        .stdout(contains("Payee:       Landlord").and(contains("May rent")));
}

#[test]
fn cli_report_writes_output_file() {
    let temp_dir = TempDir::new().unwrap();
    record_may(temp_dir.path());
    let output = temp_dir.path().join("may.json");

    tracker(temp_dir.path())
        .args(["report", "--month", "2024-05", "--by-category", "--output"])
        .arg(&output)
        .assert()
        .success()
        .stdout(contains("Report written to"));

    let value: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&output).unwrap()).unwrap();
    assert_eq!(value["summary"]["income"], "100.00");
    assert_eq!(value["summary"]["net"], "50.00");
}

#[test]
fn cli_config_shows_paths() {
    let temp_dir = TempDir::new().unwrap();

    tracker(temp_dir.path())
        .arg("config")
        .assert()
        .success()
        .stdout(contains("Base directory:").and(contains("Default account type: CASH")));

    assert!(temp_dir.path().join("config.json").exists());
}

#[test]
fn cli_honors_configured_symbol_and_date_format() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(
        temp_dir.path().join("config.json"),
        r#"{"currency": "EUR", "currency_symbol": "€", "date_format": "%d/%m/%Y"}"#,
    )
    .unwrap();
    record_may(temp_dir.path());

    tracker(temp_dir.path())
        .args(["list", "--month", "2024-05"])
        .assert()
        .success()
        .stdout(contains("01/05/2024").and(contains("€100.00")))
        .stdout(contains("$100.00").not());

    tracker(temp_dir.path())
        .args(["report", "--month", "2024-05"])
        .assert()
        .success()
        .stdout(contains("€50.00"));
}
