//! Drives the `rollbook` binary against a throwaway database.

use std::path::Path;
use std::process::{Command, Output};

use tempfile::TempDir;

fn rollbook(db: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_rollbook"))
        .arg("--database")
        .arg(db)
        .arg("--config")
        .arg(db.with_file_name("missing-config.toml"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to run rollbook")
}

/// Run with only a config file, so the database path comes from it.
fn rollbook_with_config(config: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_rollbook"))
        .arg("--config")
        .arg(config)
        .args(args)
        .env_remove("RUST_LOG")
        .env_remove("ROLLBOOK_STORAGE__DATABASE_PATH")
        .env_remove("ROLLBOOK_DISPLAY__FORMAT")
        .output()
        .expect("failed to run rollbook")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn setup() -> (TempDir, std::path::PathBuf) {
    let dir = tempfile::tempdir().unwrap();
    let db = dir.path().join("students.db");
    (dir, db)
}

fn add(db: &Path, name: &str, age: &str) -> Output {
    rollbook(
        db,
        &[
            "add",
            "--name",
            name,
            "--email",
            "someone@example.com",
            "--age",
            age,
            "--gender",
            "Female",
        ],
    )
}

#[test]
fn add_prints_generated_roll_number() {
    let (_dir, db) = setup();

    let first = add(&db, "Asha", "20");
    assert!(first.status.success());
    assert!(stdout(&first).contains("22CSR001"));

    let second = add(&db, "Bina", "21");
    assert!(stdout(&second).contains("22CSR002"));
}

#[test]
fn rejected_add_exits_with_reason() {
    let (_dir, db) = setup();

    let output = add(&db, "Asha", "twenty");
    assert_eq!(output.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&output.stderr).contains("age must be an integer"));

    let list = rollbook(&db, &["list", "--format", "plain"]);
    assert!(stdout(&list).trim().is_empty());
}

#[test]
fn list_json_reflects_update_and_delete() {
    let (_dir, db) = setup();
    add(&db, "Asha", "20");
    add(&db, "Bina", "21");

    let update = rollbook(
        &db,
        &[
            "update", "22CSR001", "--name", "Asha R", "--email", "ar@example.com", "--age", "22",
            "--gender", "Other",
        ],
    );
    assert!(update.status.success());
    assert!(rollbook(&db, &["delete", "22CSR002"]).status.success());

    let list = rollbook(&db, &["list", "--format", "json"]);
    let records: serde_json::Value = serde_json::from_str(&stdout(&list)).unwrap();
    let records = records.as_array().unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0]["roll_no"], "22CSR001");
    assert_eq!(records[0]["name"], "Asha R");
    assert_eq!(records[0]["gender"], "Other");
}

#[test]
fn update_of_missing_roll_number_succeeds() {
    let (_dir, db) = setup();
    add(&db, "Asha", "20");

    let output = rollbook(
        &db,
        &[
            "update", "22CSR999", "--name", "X", "--email", "x@y", "--age", "1", "--gender",
            "Male",
        ],
    );
    assert!(output.status.success());
}

#[test]
fn next_reports_upcoming_roll_number() {
    let (_dir, db) = setup();
    assert_eq!(stdout(&rollbook(&db, &["next"])).trim(), "22CSR001");
    add(&db, "Asha", "20");
    assert_eq!(stdout(&rollbook(&db, &["next"])).trim(), "22CSR002");
}

#[test]
fn update_with_empty_roll_number_is_a_no_op() {
    let (_dir, db) = setup();
    add(&db, "Asha", "20");

    let output = rollbook(
        &db,
        &[
            "update", "", "--name", "X", "--email", "x@y", "--age", "1", "--gender", "Male",
        ],
    );
    assert!(output.status.success());

    let list = rollbook(&db, &["list", "--format", "json"]);
    let records: serde_json::Value = serde_json::from_str(&stdout(&list)).unwrap();
    assert_eq!(records[0]["name"], "Asha");
}

#[test]
fn config_file_sets_database_path() {
    let dir = tempfile::tempdir().unwrap();
    let db = dir.path().join("from-config.db");
    let config = dir.path().join("config.toml");
    std::fs::write(
        &config,
        format!(
            "[storage]\ndatabase_path = {:?}\n\n[display]\nformat = \"json\"\n",
            db.display().to_string()
        ),
    )
    .unwrap();

    let added = rollbook_with_config(
        &config,
        &[
            "add", "--name", "Asha", "--email", "a@example.com", "--age", "20", "--gender",
            "Female",
        ],
    );
    assert!(added.status.success());
    assert!(db.exists());

    // No --format: the configured json format applies.
    let list = rollbook_with_config(&config, &["list"]);
    let records: serde_json::Value = serde_json::from_str(&stdout(&list)).unwrap();
    assert_eq!(records[0]["roll_no"], "22CSR001");
    assert_eq!(records[0]["name"], "Asha");

    let direct = rollbook(&db, &["list", "--format", "plain"]);
    assert!(stdout(&direct).contains("Asha"));
}

#[test]
fn config_validate_fails_on_bad_file() {
    let dir = tempfile::tempdir().unwrap();
    let bad = dir.path().join("bad.toml");
    std::fs::write(&bad, "[display]\nformat = \"yaml\"\n").unwrap();
    let good = dir.path().join("good.toml");
    std::fs::write(&good, "[display]\nformat = \"plain\"\n").unwrap();

    let by_flag = rollbook_with_config(
        &good,
        &["config", "validate", "--file", bad.to_str().unwrap()],
    );
    assert_eq!(by_flag.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&by_flag.stderr).contains("invalid configuration"));

    let by_global = rollbook_with_config(&bad, &["config", "validate"]);
    assert_eq!(by_global.status.code(), Some(1));
    assert!(stdout(&by_global).contains("Validating configuration"));

    let valid = rollbook_with_config(&good, &["config", "validate"]);
    assert!(valid.status.success());
    assert!(stdout(&valid).contains("Configuration is valid."));
}
