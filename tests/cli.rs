use std::path::PathBuf;

use assert_cmd::Command;
use predicates::prelude::*;
use predicates::str::contains;
use tempfile::TempDir;

fn fixture(name: &str) -> String {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name)
        .display()
        .to_string()
}

/// Command isolated from any user config, reading the given fixture.
fn cmd(tmp: &TempDir, source: &str) -> Command {
    let mut cmd = Command::cargo_bin("data-review").unwrap();
    cmd.env_remove("DATA_REVIEW_SOURCE")
        .env_remove("RUST_LOG")
        .arg("--config")
        .arg(tmp.path().join("absent.toml"))
        .arg("--source")
        .arg(fixture(source));
    cmd
}

#[test]
fn table_shows_markers_and_messages() {
    let tmp = TempDir::new().unwrap();
    cmd(&tmp, "records.json")
        .arg("table")
        .assert()
        .success()
        .stdout(contains("Data Review"))
        .stdout(contains("3 records"))
        .stdout(contains("✖ bob@"))
        .stdout(contains("#2 email critical: invalid format"))
        .stdout(contains("#2 phone warning: too short"));
}

#[test]
fn table_html_written_to_file() {
    let tmp = TempDir::new().unwrap();
    let out = tmp.path().join("table.html");
    cmd(&tmp, "records.json")
        .args(["table", "--format", "html", "--output"])
        .arg(&out)
        .assert()
        .success()
        .stdout(contains("Table written to"));

    let html = std::fs::read_to_string(out).unwrap();
    assert!(html.contains("class=\"marker-critical\""));
    assert!(html.contains("badge-neutral\">unknown-value"));
}

#[test]
fn show_lists_error_summary() {
    let tmp = TempDir::new().unwrap();
    cmd(&tmp, "records.json")
        .args(["show", "2"])
        .assert()
        .success()
        .stdout(contains("Record Details: Bob Stone"))
        .stdout(contains("Address: 12 Elm St, Boston, 02108"))
        .stdout(contains("Error Summary"))
        .stdout(contains("invalid format"));
}

#[test]
fn show_without_errors_has_no_summary() {
    let tmp = TempDir::new().unwrap();
    cmd(&tmp, "records.json")
        .args(["show", "1"])
        .assert()
        .success()
        .stdout(contains("Address: NYC"))
        .stdout(contains("Error Summary").not());
}

#[test]
fn show_unknown_record_fails() {
    let tmp = TempDir::new().unwrap();
    cmd(&tmp, "records.json")
        .args(["show", "404"])
        .assert()
        .failure()
        .stderr(contains("Record not found: 404"));
}

#[test]
fn export_to_stdout_quotes_special_values() {
    let tmp = TempDir::new().unwrap();
    cmd(&tmp, "records.json")
        .args(["export", "--stdout"])
        .assert()
        .success()
        .stdout(contains("ID,Name,Email,Street,City,Zipcode,Phone,Status\n"))
        .stdout(contains("1,Ann,a@x.com,,NYC,,,active\n"))
        .stdout(contains("3,\"Doe, Jane\",jane@example.com"));
}

#[test]
fn export_writes_data_export_csv() {
    let tmp = TempDir::new().unwrap();
    let dir = tmp.path().join("exports");
    cmd(&tmp, "records.json")
        .arg("export")
        .arg("--dir")
        .arg(&dir)
        .assert()
        .success()
        .stdout(contains("Exported 3 record(s)"));

    let csv = std::fs::read_to_string(dir.join("data_export.csv")).unwrap();
    assert_eq!(csv.lines().count(), 4);
}

#[test]
fn review_session_from_stdin() {
    let tmp = TempDir::new().unwrap();
    cmd(&tmp, "records.json")
        .arg("review")
        .write_stdin("open 1\nopen 2\nclick-inside\nescape\nclose\nquit\n")
        .assert()
        .success()
        .stdout(contains("Record Details: Ann"))
        .stdout(contains("Record Details: Bob Stone"))
        .stdout(contains("Detail view closed"));
}

#[test]
fn unknown_error_field_rejected_at_load() {
    let tmp = TempDir::new().unwrap();
    cmd(&tmp, "bad_error_key.json")
        .arg("table")
        .assert()
        .failure()
        .stderr(contains("Record 9 has an error on unknown field 'city'"));
}

#[test]
fn missing_source_fails() {
    let tmp = TempDir::new().unwrap();
    cmd(&tmp, "does-not-exist.json")
        .arg("table")
        .assert()
        .failure()
        .stderr(contains("IO error"));
}
