use std::time::Duration;

use assert_cmd::Command;
use predicates::str::contains;
use tempfile::TempDir;

fn planner(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("budget_planner").unwrap();
    cmd.env("BUDGET_PLANNER_CLI_SCRIPT", "1")
        .env("BUDGET_PLANNER_HOME", home.path())
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn script_mode_runs_full_session() {
    let home = TempDir::new().unwrap();
    let input = "2\n500\n1\nincome\n1000\nSalary\n1\nexpense\n600\nBooks\n3\n4\n5\n";

    planner(&home)
        .write_stdin(input)
        .assert()
        .success()
        .stdout(contains("Monthly budget has been set to ₹500.00."))
        .stdout(contains("Successfully added expense of ₹600.00 in 'Books'."))
        .stdout(contains("You have exceeded your monthly budget of ₹500.00!"))
        .stdout(contains("- Books: ₹600.00"))
        .stdout(contains("Budget Remaining: -₹100.00"))
        .stdout(contains("Saved expense pie chart"))
        .stdout(contains("Goodbye!"));

    let data = std::fs::read_to_string(home.path().join("budget_data.json")).unwrap();
    assert!(data.contains("\"Books\""));
    assert!(home.path().join("expense_pie_chart.svg").exists());
    assert!(home
        .path()
        .join("income_expense_savings_bar_chart.svg")
        .exists());
}

#[test]
fn report_without_transactions_has_nothing_to_report() {
    let home = TempDir::new().unwrap();

    planner(&home)
        .write_stdin("4\n5\n")
        .assert()
        .success()
        .stdout(contains("nothing to report"));

    assert!(!home.path().join("expense_pie_chart.svg").exists());
    assert!(!home
        .path()
        .join("income_expense_savings_bar_chart.svg")
        .exists());
}

#[test]
fn invalid_choices_are_reported_and_menu_repeats() {
    let home = TempDir::new().unwrap();

    planner(&home)
        .write_stdin("7\n1\nloan\n5\n")
        .assert()
        .success()
        .stdout(contains("Invalid choice. Please try again."))
        .stdout(contains("Invalid type `loan`"));

    assert!(!home.path().join("budget_data.json").exists());
}

#[test]
fn closing_stdin_exits_cleanly() {
    let home = TempDir::new().unwrap();

    planner(&home)
        .write_stdin("3\n")
        .assert()
        .success()
        .stdout(contains("No transactions yet"));
}

#[test]
fn oversized_amount_is_rejected_and_report_still_finishes() {
    let home = TempDir::new().unwrap();

    planner(&home)
        .timeout(Duration::from_secs(30))
        .write_stdin("1\nexpense\n1.7e308\n4\n5\n")
        .assert()
        .success()
        .stdout(contains("Amount is too large"))
        .stdout(contains("nothing to report"));

    assert!(!home.path().join("budget_data.json").exists());
}
