use assert_cmd::cargo_bin;
use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::process::Command;

mod common;

#[test]
fn test_malformed_account_rows_are_skipped() {
    let accounts = common::write_csv(
        "id, balance",
        &["A, 10", "B, -5", ", 3", "C, not_a_number", "D, 7"],
    );

    let mut cmd = Command::new(cargo_bin!("fund-transfer"));
    cmd.arg(accounts.path());

    cmd.assert()
        .success()
        .stderr(predicate::str::contains("Error reading account"))
        .stdout("id,balance\nA,10\nD,7\n");
}

#[test]
fn test_duplicate_account_rows_keep_first() {
    let accounts = common::write_csv("id, balance", &["A, 10", "A, 99"]);

    let mut cmd = Command::new(cargo_bin!("fund-transfer"));
    cmd.arg(accounts.path());

    cmd.assert()
        .success()
        .stderr(predicate::str::contains(
            "Account rejected (bad request): Account id A already exists!",
        ))
        .stdout(predicate::str::contains("A,10"))
        .stdout(predicate::str::contains("A,99").not());
}

#[test]
fn test_malformed_transfer_rows_are_skipped() {
    let accounts = common::write_csv("id, balance", &["A, 10", "B, 0"]);
    let transfers = common::write_csv(
        "from, to, amount",
        &["A, B, 1", "A, B, lots", "A, B", "A, B, 2"],
    );

    let mut cmd = Command::new(cargo_bin!("fund-transfer"));
    cmd.arg(accounts.path()).arg(transfers.path());

    cmd.assert()
        .success()
        .stderr(predicate::str::contains("Error reading transfer"))
        .stdout(predicate::str::contains("A,7"))
        .stdout(predicate::str::contains("B,3"));
}

#[test]
fn test_extreme_decimal_precision() {
    let accounts = common::write_csv("id, balance", &["A, 0.0002", "B, 0"]);
    let transfers = common::write_csv("from, to, amount", &["A, B, 0.0001", "A, B, 0.0001"]);

    let mut cmd = Command::new(cargo_bin!("fund-transfer"));
    cmd.arg(accounts.path()).arg(transfers.path());

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("A,0.0000"))
        .stdout(predicate::str::contains("B,0.0002"));
}
