//! End-to-end tests for the `migcheck` binary
//!
//! Every run gets its own environment, so configuration never leaks
//! between tests.

use std::fs;
use std::path::Path;
use std::process::{Command, Output};

use tempfile::TempDir;

const CONFIG_VARS: [&str; 7] = [
    "SKIP_MIGRATION_EXECUTION",
    "MIGRATION_COMMAND",
    "SKIP_GIT_CHECK",
    "MOCK_GIT_DIFF",
    "MIGRATIONS_DIR",
    "SCHEMA_PATH",
    "RUST_LOG",
];

fn setup_project(migrations: &[(&str, &str)]) -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::create_dir_all(dir.path().join("db/migrate")).unwrap();
    fs::write(dir.path().join("db/schema.rb"), "ActiveRecord::Schema.define {}\n").unwrap();
    for (name, body) in migrations {
        fs::write(dir.path().join("db/migrate").join(name), body).unwrap();
    }
    dir
}

fn migcheck(root: &Path, env: &[(&str, &str)], args: &[&str]) -> Output {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_migcheck"));
    for var in CONFIG_VARS {
        cmd.env_remove(var);
    }
    cmd.env("NO_COLOR", "1")
        .env("SKIP_MIGRATION_EXECUTION", "true")
        .envs(env.iter().copied())
        .arg("--root")
        .arg(root)
        .args(args);
    cmd.output().expect("failed to run migcheck")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn test_scenario_a_valid_migration_passes() {
    let project = setup_project(&[(
        "20240101010101_create_users.rb",
        "class CreateUsers < ActiveRecord::Migration[7.1]\n  def change\n  end\nend\n",
    )]);

    let output = migcheck(project.path(), &[("MOCK_GIT_DIFF", "db/schema.rb")], &[]);
    let out = stdout(&output);

    assert_eq!(output.status.code(), Some(0), "{}", out);
    assert!(out.contains("All migrations look good."));
    assert!(!out.contains("❌"));
}

#[test]
fn test_scenario_b_bad_filename_fails() {
    let project = setup_project(&[("bad_name.rb", "def change\nend\n")]);

    let output = migcheck(project.path(), &[("SKIP_GIT_CHECK", "true")], &[]);
    let out = stdout(&output);

    assert_eq!(output.status.code(), Some(1), "{}", out);
    assert!(out.contains("❌ Invalid filename format: bad_name.rb"));
    assert!(!out.contains("All migrations look good."));
}

#[test]
fn test_scenario_c_missing_method_fails() {
    let project = setup_project(&[("20240101010101_drop_table.rb", "")]);

    let output = migcheck(project.path(), &[("SKIP_GIT_CHECK", "true")], &[]);
    let out = stdout(&output);

    assert_eq!(output.status.code(), Some(1), "{}", out);
    assert!(out.contains("❌ No migration method found in: 20240101010101_drop_table.rb"));
}

#[test]
fn test_scenario_d_no_migrations_passes() {
    let project = setup_project(&[]);

    let output = migcheck(project.path(), &[], &[]);
    let out = stdout(&output);

    assert_eq!(output.status.code(), Some(0), "{}", out);
    assert!(out.contains("No migration files found. Skipping schema.rb check."));
    assert!(!out.contains("❌"));
}

#[test]
fn test_schema_not_updated_fails() {
    let project = setup_project(&[("20240101010101_create_users.rb", "def change")]);

    let output = migcheck(project.path(), &[("MOCK_GIT_DIFF", "")], &[]);
    let out = stdout(&output);

    assert_eq!(output.status.code(), Some(1), "{}", out);
    assert!(out.contains("❌ schema.rb has not been updated."));
}

#[test]
fn test_skip_execution_hides_running_line() {
    let project = setup_project(&[("20240101010101_create_users.rb", "def change")]);

    let output = migcheck(project.path(), &[("SKIP_GIT_CHECK", "1")], &[]);
    let out = stdout(&output);

    assert!(out.contains("=== Rails db/migrate file checker ==="));
    assert!(!out.contains("Running:"));
}

#[cfg(unix)]
#[test]
fn test_migration_command_runs_with_inherited_stdout() {
    let project = setup_project(&[("20240101010101_create_users.rb", "def change")]);

    let output = migcheck(
        project.path(),
        &[
            ("SKIP_MIGRATION_EXECUTION", ""),
            ("MIGRATION_COMMAND", "echo applying-migrations"),
            ("MOCK_GIT_DIFF", "db/schema.rb"),
        ],
        &[],
    );
    let out = stdout(&output);

    assert_eq!(output.status.code(), Some(0), "{}", out);
    assert!(out.contains("Running: echo applying-migrations"));
    assert!(out.contains("applying-migrations\n"));
}

#[test]
fn test_json_report() {
    let project = setup_project(&[("bad_name.rb", "")]);

    let output = migcheck(project.path(), &[("SKIP_GIT_CHECK", "true")], &["--json"]);
    assert_eq!(output.status.code(), Some(1));

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["errors"].as_array().unwrap().len(), 2);
    assert_eq!(report["errors"][0]["category"], "bad-filename");
    assert_eq!(report["errors"][0]["file"], "bad_name.rb");
}

#[test]
fn test_verbose_lists_migrations() {
    let project = setup_project(&[("20240101010101_create_users.rb", "def change")]);

    let output = migcheck(project.path(), &[("SKIP_GIT_CHECK", "true")], &["--verbose"]);
    let out = stdout(&output);

    assert!(out.contains("20240101010101_create_users.rb"));
    assert!(out.contains("create_users"));
}

#[test]
fn test_blank_migration_command_only_warns() {
    let project = setup_project(&[]);

    let output = migcheck(
        project.path(),
        &[("SKIP_MIGRATION_EXECUTION", ""), ("MIGRATION_COMMAND", "  ")],
        &[],
    );
    let out = stdout(&output);

    assert_eq!(output.status.code(), Some(0), "{}", out);
    assert!(out.contains("Migration command is blank"));
    assert!(out.contains("All migrations look good."));
}
