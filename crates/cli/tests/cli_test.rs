//! # CLI Command Tests
//!
//! These tests drive the compiled `ragstack-cli` binary and assert on its
//! output and exit codes. A mock HTTP server stands in for the Junos
//! device in the connect tests.

use assert_cmd::prelude::*;
use httpmock::{Method, MockServer};
use predicates::prelude::*;
use ragstack_test_utils::helpers::SAMPLE_CSV;
use serde_json::json;
use std::fs;
use std::process::Command;
use tempfile::tempdir;

#[test]
fn test_sources_command_lists_csv() {
    // Arrange
    let temp_dir = tempdir().unwrap();
    let mut cmd = Command::cargo_bin("ragstack-cli").unwrap();
    cmd.current_dir(temp_dir.path());

    // Act & Assert
    cmd.arg("sources")
        .assert()
        .success()
        .stdout(predicate::str::contains("csv_file"));
}

#[test]
fn test_ingest_command_success() {
    // Arrange
    let temp_dir = tempdir().unwrap();
    let csv_path = temp_dir.path().join("people.csv");
    fs::write(&csv_path, SAMPLE_CSV).expect("Failed to write fixture file");
    let db_path = temp_dir.path().join("cli_ingest.db");

    // Act
    let mut cmd = Command::cargo_bin("ragstack-cli").unwrap();
    cmd.current_dir(temp_dir.path())
        .arg("ingest")
        .arg("--file")
        .arg(csv_path.to_str().unwrap())
        .arg("--db")
        .arg(db_path.to_str().unwrap());

    // Assert: three records, one chunk each under the row budget.
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("3 document chunks"))
        .stdout(predicate::str::contains("Stored 3 documents"));
}

#[test]
fn test_ingest_command_without_db_does_not_store() {
    // Arrange
    let temp_dir = tempdir().unwrap();
    let csv_path = temp_dir.path().join("people.csv");
    fs::write(&csv_path, SAMPLE_CSV).expect("Failed to write fixture file");

    // Act
    let mut cmd = Command::cargo_bin("ragstack-cli").unwrap();
    cmd.current_dir(temp_dir.path())
        .arg("ingest")
        .arg("--file")
        .arg(csv_path.to_str().unwrap());

    // Assert
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("3 document chunks"))
        .stdout(predicate::str::contains("Stored").not());
}

#[test]
fn test_ingest_command_no_file() {
    // Arrange
    let temp_dir = tempdir().unwrap();
    let mut cmd = Command::cargo_bin("ragstack-cli").unwrap();
    cmd.current_dir(temp_dir.path());

    // Act & Assert
    cmd.arg("ingest")
        .arg("--file")
        .arg("a/non/existent/file.csv")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read"));
}

#[test]
fn test_connect_junos_success() {
    // Arrange
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(Method::GET).path("/rpc/get-system-information");
        then.status(200).json_body(json!({
            "system-information": {
                "host-name": "lab-mx480",
                "hardware-model": "mx480",
                "os-name": "junos",
                "os-version": "21.4R1.12",
                "serial-number": "JN12AB34CD"
            }
        }));
    });
    let temp_dir = tempdir().unwrap();

    // Act
    let mut cmd = Command::cargo_bin("ragstack-cli").unwrap();
    cmd.current_dir(temp_dir.path())
        .arg("connect")
        .arg("junos")
        .arg("--address")
        .arg(server.host())
        .arg("--port")
        .arg(server.port().to_string())
        .arg("--username")
        .arg("admin")
        .arg("--password")
        .arg("secret");

    // Assert
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("ACTIVE"));
}

#[test]
fn test_connect_junos_failure_sets_exit_code() {
    // Arrange: the device rejects the credentials.
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(Method::GET).path("/rpc/get-system-information");
        then.status(401).body("Unauthorized");
    });
    let temp_dir = tempdir().unwrap();

    // Act
    let mut cmd = Command::cargo_bin("ragstack-cli").unwrap();
    cmd.current_dir(temp_dir.path())
        .arg("connect")
        .arg("junos")
        .arg("--address")
        .arg(server.host())
        .arg("--port")
        .arg(server.port().to_string())
        .arg("--username")
        .arg("admin")
        .arg("--password")
        .arg("wrong");

    // Assert
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("FAILED"));
}
