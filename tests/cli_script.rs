mod common;

use assert_cmd::Command;
use predicates::prelude::*;
use predicates::str::contains;

use common::{store_lines, store_path, temp_base};

fn script(base: &std::path::Path, input: &str) -> assert_cmd::assert::Assert {
    Command::cargo_bin("atm_ledger_cli")
        .unwrap()
        .env("ATM_LEDGER_HOME", base)
        .env("ATM_LEDGER_CLI_SCRIPT", "1")
        .env("NO_COLOR", "1")
        .write_stdin(input.to_string())
        .assert()
}

#[test]
fn script_mode_runs_basic_flow() {
    let base = temp_base();
    script(
        &base,
        "login 1001\nbalance\ndeposit 200\nwithdraw 5500\nstatement\nexit\n",
    )
    .success()
    .stdout(contains("Welcome, User1"))
    .stdout(contains("Your balance is ₹5073"))
    .stdout(contains("₹200 deposited successfully."))
    .stdout(contains("Insufficient balance."))
    .stdout(contains("Deposit +200"));

    assert_eq!(store_lines(&store_path(&base))[0], "User1,1001,5273");
}

#[test]
fn rejected_input_is_reported_and_shell_continues() {
    let base = temp_base();
    script(
        &base,
        "balance\nlogin 9999\nlogin 1002\ndeposit abc\ndeposit 0\nstatement\nchange-pin 1002 12 12\n",
    )
    .success()
    .stdout(contains("No user logged in."))
    .stdout(contains("Invalid PIN."))
    .stdout(contains("Please enter a valid positive number."))
    .stdout(contains("Amount must be greater than 0."))
    .stdout(contains("No transactions yet."))
    .stdout(contains("New PIN must be exactly 4 digits."));

    assert_eq!(store_lines(&store_path(&base))[1], "User2,1002,5146");
}

#[test]
fn pin_change_persists_across_runs() {
    let base = temp_base();
    script(&base, "login 1003\nchange-pin 1003 7777 7777\nlogout\nexit\n")
        .success()
        .stdout(contains("PIN changed successfully."));

    script(&base, "login 1003\nlogin 7777\nbalance\n")
        .success()
        .stdout(contains("Invalid PIN."))
        .stdout(contains("Welcome, User3"))
        .stdout(contains("Your balance is ₹5219"));
}

#[test]
fn config_controls_currency_and_store_location() {
    let base = temp_base();
    std::fs::write(
        base.join("config.json"),
        r#"{ "currency_symbol": "$", "store_file": "branch/ledger.txt" }"#,
    )
    .unwrap();

    script(&base, "login 1050\nbalance\n")
        .success()
        .stdout(contains("Your balance is $8650"));

    assert!(base.join("branch").join("ledger.txt").exists());
    assert!(!store_path(&base).exists());
}

#[test]
fn unknown_command_suggests_closest_match() {
    let base = temp_base();
    script(&base, "withdrw 5\n")
        .success()
        .stdout(contains("Unknown command `withdrw`"))
        .stdout(contains("Did you mean `withdraw`?"));
}

#[test]
fn unreadable_store_fails_at_startup() {
    let base = temp_base();
    // A directory in place of the store file cannot be read as records.
    std::fs::create_dir_all(store_path(&base)).unwrap();

    script(&base, "login 1001\n")
        .failure()
        .stderr(contains("Error:"))
        .stdout(contains("Welcome").not());
}
