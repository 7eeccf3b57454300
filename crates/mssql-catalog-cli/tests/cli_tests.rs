//! CLI integration tests for mssql-catalog.
//!
//! These tests cover argument parsing, help output, the commands that work
//! without a database, and exit codes for error conditions.

use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;

/// Get a command for the mssql-catalog binary.
fn cmd() -> Command {
    Command::cargo_bin("mssql-catalog").unwrap()
}

// =============================================================================
// Help and Version Tests
// =============================================================================

#[test]
fn test_help_shows_all_commands() {
    cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("views"))
        .stdout(predicate::str::contains("sql"))
        .stdout(predicate::str::contains("query"))
        .stdout(predicate::str::contains("schemas"))
        .stdout(predicate::str::contains("tables"))
        .stdout(predicate::str::contains("columns"))
        .stdout(predicate::str::contains("health-check"));
}

#[test]
fn test_query_subcommand_help() {
    cmd()
        .args(["query", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--limit"))
        .stdout(predicate::str::contains("<VIEW>"));
}

#[test]
fn test_tables_subcommand_help() {
    cmd()
        .args(["tables", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--schema"));
}

#[test]
fn test_version_flag() {
    cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("mssql-catalog"));
}

// =============================================================================
// Global Flags Tests
// =============================================================================

#[test]
fn test_output_json_flag_exists() {
    cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--output-json"));
}

#[test]
fn test_log_format_flag_exists() {
    cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--log-format"))
        .stdout(predicate::str::contains("[default: text]"));
}

#[test]
fn test_verbosity_flag_exists() {
    cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--verbosity"))
        .stdout(predicate::str::contains("[default: info]"));
}

#[test]
fn test_config_default_path() {
    cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("[default: config.yaml]"));
}

#[test]
fn test_short_config_flag() {
    cmd()
        .args(["-c", "some_config.yaml", "--help"])
        .assert()
        .success();
}

// =============================================================================
// Registry Commands (no database)
// =============================================================================

#[test]
fn test_views_lists_registered_views() {
    cmd()
        .args(["--config", "nonexistent_config_file.yaml", "views"])
        .assert()
        .success()
        .stdout(predicate::str::contains("sys.all_parameters\t21 columns"))
        .stdout(predicate::str::contains("sys.dm_tran_locks"))
        .stdout(predicate::str::contains("sys.xml_schema_types"));
}

#[test]
fn test_views_json_output() {
    let output = cmd()
        .args(["--output-json", "views"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let views: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let list = views.as_array().unwrap();
    assert_eq!(list.len(), 27);
    assert_eq!(list[0]["name"], "sys.all_parameters");
}

#[test]
fn test_sql_prints_view_query() {
    cmd()
        .args(["sql", "sys.schemas"])
        .assert()
        .success()
        .stdout(predicate::str::contains("SELECT s.[name]"))
        .stdout(predicate::str::contains("FROM [sys].[schemas] s"));
}

#[test]
fn test_sql_accepts_bracketed_name() {
    cmd()
        .args(["sql", "[sys].[masked_columns]"])
        .assert()
        .success()
        .stdout(predicate::str::contains("FROM [sys].[masked_columns] mc"));
}

// =============================================================================
// Exit Code Tests
// =============================================================================

#[test]
fn test_unknown_view_exits_with_code_5() {
    cmd()
        .args(["sql", "sys.no_such_view"])
        .assert()
        .code(5)
        .stderr(predicate::str::contains("Unknown catalog view"));
}

#[test]
fn test_missing_config_exits_with_code_7() {
    // Missing file is an IO error (code 7), not config error (code 1)
    cmd()
        .args(["--config", "nonexistent_config_file.yaml", "health-check"])
        .assert()
        .code(7);
}

#[test]
fn test_invalid_yaml_exits_with_code_1() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "invalid: yaml: content: [").unwrap();

    cmd()
        .args(["--config", file.path().to_str().unwrap(), "schemas"])
        .assert()
        .code(1);
}

#[test]
fn test_empty_config_exits_with_code_1() {
    let file = tempfile::NamedTempFile::new().unwrap();

    cmd()
        .args(["--config", file.path().to_str().unwrap(), "health-check"])
        .assert()
        .code(1);
}

#[test]
fn test_missing_required_fields_exits_with_code_1() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "source:").unwrap();
    writeln!(file, "  host: localhost").unwrap();

    cmd()
        .args(["--config", file.path().to_str().unwrap(), "query", "sys.schemas"])
        .assert()
        .code(1);
}

#[test]
fn test_invalid_pool_settings_exit_with_code_1() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "source:").unwrap();
    writeln!(file, "  host: localhost").unwrap();
    writeln!(file, "  user: sa").unwrap();
    writeln!(file, "pool:").unwrap();
    writeln!(file, "  max_connections: 0").unwrap();

    cmd()
        .args(["--config", file.path().to_str().unwrap(), "tables"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("max_connections"));
}

// =============================================================================
// No Subcommand Tests
// =============================================================================

#[test]
fn test_no_subcommand_shows_help() {
    cmd()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage:"));
}
