use assert_cmd::cargo_bin;
use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::process::Command;

mod common;

#[test]
fn test_cli_end_to_end() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin!("kvbasket"));
    cmd.arg("tests/fixtures/ops.csv");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("\"mpn\": \"11111\""))
        .stdout(predicate::str::contains("\"qty\": 4"))
        .stdout(predicate::str::contains("\"total\": 40.0"))
        // 22222 was removed again
        .stdout(predicate::str::contains("22222").not());

    Ok(())
}

#[test]
fn test_cli_clear_leaves_empty_basket() -> Result<(), Box<dyn std::error::Error>> {
    let csv = tempfile::NamedTempFile::new()?;
    common::write_ops_csv(
        csv.path(),
        &[["add", "11111", "2", "10"], ["clear", "", "", ""]],
    )?;

    let mut cmd = Command::new(cargo_bin!("kvbasket"));
    cmd.arg(csv.path());

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("\"items\": []"))
        .stdout(predicate::str::contains("\"total\": 0.0"));

    Ok(())
}

#[test]
fn test_cli_reports_bad_rows_and_continues() -> Result<(), Box<dyn std::error::Error>> {
    let csv = tempfile::NamedTempFile::new()?;
    common::write_ops_csv(
        csv.path(),
        &[
            ["add", "11111", "2", "10"],
            ["purchase", "11111", "1", ""],
            ["increment", "11111", "2", ""],
        ],
    )?;

    let mut cmd = Command::new(cargo_bin!("kvbasket"));
    cmd.arg(csv.path());

    cmd.assert()
        .success()
        .stderr(predicate::str::contains("Error reading operation"))
        .stdout(predicate::str::contains("\"qty\": 4"));

    Ok(())
}
