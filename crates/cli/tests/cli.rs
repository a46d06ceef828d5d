// ABOUTME: Integration tests for the tabex CLI binary.
// ABOUTME: Tests preset and interactive answers, JSON/CSV output, and abort exit codes.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

const PAGE: &str = r#"<!DOCTYPE html>
<html><body>
<table>
  <thead><tr><th>Name</th><th>Age</th></tr></thead>
  <tbody tabindex="-1">
    <tr><td>Alice</td><td>30</td></tr>
    <tr><td>Bob</td><td>25</td></tr>
  </tbody>
</table>
</body></html>"#;

fn tabex_cmd() -> Command {
    Command::cargo_bin("tabex").unwrap()
}

fn write_page(dir: &TempDir) -> PathBuf {
    let path = dir.path().join("page.html");
    fs::write(&path, PAGE).unwrap();
    path
}

#[test]
fn presets_print_json_to_stdout() {
    let temp_dir = TempDir::new().unwrap();
    let page = write_page(&temp_dir);

    let output = tabex_cmd()
        .arg(&page)
        .args(["--columns", "Name", "--no-prompt"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let stdout = String::from_utf8(output).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(parsed, serde_json::json!([{"Name": "Alice"}, {"Name": "Bob"}]));
}

#[test]
fn unknown_column_is_warned_about() {
    let temp_dir = TempDir::new().unwrap();
    let page = write_page(&temp_dir);

    tabex_cmd()
        .arg(&page)
        .args(["--columns", "Name,City", "--no-prompt"])
        .assert()
        .success()
        .stderr(predicate::str::contains("City"))
        .stdout(predicate::str::contains("\"Alice\""));
}

#[test]
fn csv_written_to_out_dir() {
    let temp_dir = TempDir::new().unwrap();
    let page = write_page(&temp_dir);
    let out_dir = temp_dir.path().join("exports");

    tabex_cmd()
        .arg(&page)
        .args(["--columns", "Name", "--format", "csv", "--date", "2024-02-29"])
        .arg("--out-dir")
        .arg(&out_dir)
        .arg("--no-prompt")
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    let csv = fs::read_to_string(out_dir.join("ExportedData_2024-02-29.csv")).unwrap();
    assert_eq!(csv, "\u{FEFF}Name\nAlice\nBob");
}

#[test]
fn interactive_answers_from_stdin() {
    let temp_dir = TempDir::new().unwrap();
    let page = write_page(&temp_dir);

    // Blank lines accept the table and container defaults.
    tabex_cmd()
        .arg(&page)
        .write_stdin("\n\nAge,Name\njson\n")
        .assert()
        .success()
        .stderr(predicate::str::contains("[0] Name"))
        .stdout(predicate::str::contains("\"Age\": \"30\""));
}

#[test]
fn by_index_mode() {
    let temp_dir = TempDir::new().unwrap();
    let page = write_page(&temp_dir);

    tabex_cmd()
        .arg(&page)
        .args(["--by-index", "--columns", "1", "--no-prompt"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"Age\": \"25\""))
        .stdout(predicate::str::contains("Alice").not());
}

#[test]
fn missing_container_fails() {
    let temp_dir = TempDir::new().unwrap();
    let page = write_page(&temp_dir);

    tabex_cmd()
        .arg(&page)
        .args(["--container", "div.data-rows", "--columns", "Name", "--no-prompt"])
        .arg("--out-dir")
        .arg(temp_dir.path())
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("no row container matches"));
}

#[test]
fn cancelled_run_exits_cleanly() {
    let temp_dir = TempDir::new().unwrap();
    let page = write_page(&temp_dir);

    tabex_cmd()
        .arg(&page)
        .write_stdin("")
        .assert()
        .success()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("export cancelled"));
}

#[test]
fn missing_file_fails() {
    tabex_cmd()
        .arg("/no/such/page.html")
        .arg("--no-prompt")
        .assert()
        .failure()
        .stderr(predicate::str::contains("file not found"));
}

#[test]
fn page_from_stdin_with_presets() {
    tabex_cmd()
        .arg("-")
        .args(["--table", "table", "--columns", "Age", "--no-prompt"])
        .write_stdin(PAGE)
        .assert()
        .success()
        .stdout(predicate::str::contains("\"Age\": \"30\""));
}
