use std::fs;

use assert_cmd::Command;
use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use tempfile::TempDir;

const BIN_NAME: &str = "budgetbuddy";

fn budgetbuddy(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin(BIN_NAME).expect("binary exists");
    cmd.env("BUDGETBUDDY_DATA_DIR", dir.path());
    cmd.env_remove("BUDGETBUDDY_LOG");
    cmd
}

fn add(dir: &TempDir, kind: &str, amount: &str, category: &str) {
    budgetbuddy(dir)
        .args(["add", kind, amount, "--category", category, "--description", "test"])
        .assert()
        .success();
}

fn exported(dir: &TempDir) -> serde_json::Value {
    let output = budgetbuddy(dir)
        .args(["export", "-"])
        .output()
        .expect("export runs");
    assert!(output.status.success());
    serde_json::from_slice(&output.stdout).expect("export is JSON")
}

#[test]
fn add_list_and_balance() {
    let dir = TempDir::new().unwrap();
    add(&dir, "income", "200", "Salary");
    add(&dir, "expense", "50.25", "Groceries");

    budgetbuddy(&dir)
        .arg("list")
        .assert()
        .success()
        .stdout(contains("+ €200.00").and(contains("- €50.25")));

    budgetbuddy(&dir)
        .arg("balance")
        .assert()
        .success()
        .stdout(contains("€149.75"));
}

#[test]
fn add_rejects_unknown_kind() {
    let dir = TempDir::new().unwrap();
    budgetbuddy(&dir)
        .args(["add", "transfer", "10", "--category", "Rent"])
        .assert()
        .failure();
}

#[test]
fn remove_by_id_and_unknown_id() {
    let dir = TempDir::new().unwrap();
    add(&dir, "expense", "10", "Transport");

    let budget = exported(&dir);
    let id = budget["transactions"][0]["id"].as_str().unwrap().to_string();

    budgetbuddy(&dir)
        .args(["remove", &id])
        .assert()
        .success()
        .stdout(contains("Removed transaction"));

    budgetbuddy(&dir)
        .args(["remove", &id])
        .assert()
        .success()
        .stdout(contains("No transaction with ID"));

    assert_eq!(exported(&dir)["transactions"].as_array().unwrap().len(), 0);
}

#[test]
fn export_and_import_round_trip() {
    let dir = TempDir::new().unwrap();
    add(&dir, "income", "75", "Bonus");
    let file = dir.path().join("saved.json");

    budgetbuddy(&dir)
        .args(["export", file.to_str().unwrap()])
        .assert()
        .success()
        .stdout(contains("Exported 1 transactions"));

    let other = TempDir::new().unwrap();
    budgetbuddy(&other)
        .args(["import", file.to_str().unwrap()])
        .assert()
        .success()
        .stdout(contains("Imported 1 transactions"));

    assert_eq!(exported(&other), exported(&dir));
}

#[test]
fn import_rejects_invalid_structure() {
    let dir = TempDir::new().unwrap();
    add(&dir, "income", "30", "Salary");

    let bad = dir.path().join("bad.json");
    fs::write(&bad, r#"{"transactions": []}"#).unwrap();

    budgetbuddy(&dir)
        .args(["import", bad.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(contains("categories"));

    assert_eq!(exported(&dir)["transactions"].as_array().unwrap().len(), 1);
}

#[test]
fn import_cancelled_by_empty_answer() {
    let dir = TempDir::new().unwrap();
    add(&dir, "income", "30", "Salary");

    budgetbuddy(&dir)
        .arg("import")
        .write_stdin("\n")
        .assert()
        .success()
        .stdout(contains("Imported").not());

    assert_eq!(exported(&dir)["transactions"].as_array().unwrap().len(), 1);
}

#[test]
fn csv_export_to_stdout() {
    let dir = TempDir::new().unwrap();
    add(&dir, "expense", "4.5", "Groceries");

    budgetbuddy(&dir)
        .args(["export", "-", "--csv"])
        .assert()
        .success()
        .stdout(contains("ID,Date,Type,Category,Description,Amount,Recurring").and(contains(
            "expense,Groceries,test,4.50,false",
        )));
}

#[test]
fn stats_and_categories() {
    let dir = TempDir::new().unwrap();
    add(&dir, "expense", "20", "Rent");

    budgetbuddy(&dir)
        .args(["stats", "categories"])
        .assert()
        .success()
        .stdout(contains("Rent"));

    budgetbuddy(&dir)
        .args(["stats", "daily", "--month", "2025-02"])
        .assert()
        .success()
        .stdout(contains(" 28."));

    budgetbuddy(&dir)
        .args(["stats", "daily", "--month", "2025-13"])
        .assert()
        .failure();

    budgetbuddy(&dir)
        .arg("categories")
        .assert()
        .success()
        .stdout(contains("Salary").and(contains("Groceries")));
}

#[test]
fn config_reset_day_is_saved() {
    let dir = TempDir::new().unwrap();

    budgetbuddy(&dir)
        .args(["config", "set-reset-day", "15"])
        .assert()
        .success();

    budgetbuddy(&dir)
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(contains("Reset day:       15"));

    budgetbuddy(&dir)
        .args(["config", "set-reset-day", "40"])
        .assert()
        .failure();
}

#[test]
fn backup_create_and_restore() {
    let dir = TempDir::new().unwrap();
    add(&dir, "income", "12", "Salary");

    budgetbuddy(&dir)
        .args(["backup", "create"])
        .assert()
        .success()
        .stdout(contains("backup.json"));

    budgetbuddy(&dir)
        .args(["backup", "restore", "--force"])
        .assert()
        .success()
        .stdout(contains("Restored 1 transactions"));
}

#[test]
fn show_unknown_transaction_fails() {
    let dir = TempDir::new().unwrap();
    budgetbuddy(&dir)
        .args(["show", "missing"])
        .assert()
        .failure()
        .stderr(contains("Transaction not found"));
}
