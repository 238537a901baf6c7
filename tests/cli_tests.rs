use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use serde_json::Value;

mod common;
use common::{punch_db, setup_test_db};

fn json_stdout(out: &[u8]) -> Value {
    serde_json::from_slice(out).expect("stdout is JSON")
}

#[test]
fn test_init_creates_store() {
    let db = setup_test_db("cli_init");

    punch_db(&db, &["--test", "init"])
        .assert()
        .success()
        .stdout(contains("schema version 4"));

    assert!(db.exists());
}

#[test]
fn test_work_scenario() {
    let db = setup_test_db("cli_work_scenario");

    punch_db(&db, &["profiles", "add", "work", "-d", "Day job"])
        .assert()
        .success()
        .stdout(contains("Profile 'work' added"));

    punch_db(&db, &["in", "-p", "work"])
        .assert()
        .success()
        .stdout(contains("Started session"));

    punch_db(&db, &["in", "-p", "work"])
        .assert()
        .failure()
        .stderr(contains("Session already open"));

    punch_db(&db, &["out", "-p", "work", "-n", "done"])
        .assert()
        .success()
        .stdout(contains("Session ended"));

    let out = punch_db(&db, &["list", "-p", "work", "--today"])
        .output()
        .unwrap();
    assert!(out.status.success());

    let sessions = json_stdout(&out.stdout);
    let sessions = sessions.as_array().unwrap();
    assert_eq!(sessions.len(), 1);
    assert!(!sessions[0]["stop"].is_null());
    assert_eq!(sessions[0]["note"], "done");
}

#[test]
fn test_punch_out_with_delete() {
    let db = setup_test_db("cli_out_delete");

    punch_db(&db, &["in"]).assert().success();
    punch_db(&db, &["out", "--delete"])
        .assert()
        .success()
        .stdout(contains("deleted"));

    let out = punch_db(&db, &["list"]).output().unwrap();
    assert!(out.status.success());
    assert_eq!(json_stdout(&out.stdout), Value::Array(vec![]));
}

#[test]
fn test_punch_out_without_open_session_fails() {
    let db = setup_test_db("cli_out_nothing_open");

    punch_db(&db, &["out"])
        .assert()
        .failure()
        .stderr(contains("No open session for profile 'default'"));
}

#[test]
fn test_punch_in_unknown_profile_fails() {
    let db = setup_test_db("cli_in_unknown_profile");

    punch_db(&db, &["in", "-p", "ghost"])
        .assert()
        .failure()
        .stderr(contains("Unknown profile: ghost"));
}

#[test]
fn test_status_reports_open_session() {
    let db = setup_test_db("cli_status");

    punch_db(&db, &["status"])
        .assert()
        .success()
        .stdout(contains("No open session"));

    punch_db(&db, &["in"]).assert().success();

    let out = punch_db(&db, &["status"]).output().unwrap();
    let session = json_stdout(&out.stdout);
    assert!(session["stop"].is_null());
    assert_eq!(session["profile_id"], 1);
}

#[test]
fn test_profiles_list_and_duplicate() {
    let db = setup_test_db("cli_profiles");

    punch_db(&db, &["profiles", "add", "client-a"]).assert().success();
    punch_db(&db, &["profiles", "add", "client-a"])
        .assert()
        .failure()
        .stderr(contains("already exists"));

    let out = punch_db(&db, &["profiles", "list"]).output().unwrap();
    let profiles = json_stdout(&out.stdout);
    let slugs: Vec<&str> = profiles
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["slug"].as_str().unwrap())
        .collect();
    assert_eq!(slugs, vec!["default", "client-a"]);
}

#[test]
fn test_list_range_filters() {
    let db = setup_test_db("cli_list_range");

    punch_db(&db, &["in"]).assert().success();
    punch_db(&db, &["out"]).assert().success();

    let out = punch_db(&db, &["list", "--since", "2000-01-01", "--before", "2000-12-31"])
        .output()
        .unwrap();
    assert_eq!(json_stdout(&out.stdout), Value::Array(vec![]));

    let out = punch_db(&db, &["list", "--since", "2000-01-01"])
        .output()
        .unwrap();
    assert_eq!(json_stdout(&out.stdout).as_array().unwrap().len(), 1);

    punch_db(&db, &["list", "--since", "2024-02-01", "--before", "2024-01-01"])
        .assert()
        .failure()
        .stderr(contains("Invalid range"));

    punch_db(&db, &["list", "--since", "last week"])
        .assert()
        .failure()
        .stderr(contains("Invalid date format"));
}

#[test]
fn test_delete_by_id() {
    let db = setup_test_db("cli_delete_by_id");

    punch_db(&db, &["in"]).assert().success();
    punch_db(&db, &["delete", "1"])
        .assert()
        .success()
        .stdout(contains("Session 1 deleted"));
    punch_db(&db, &["delete", "1"])
        .assert()
        .failure()
        .stderr(contains("Session 1 does not exist"));
}

#[test]
fn test_db_maintenance() {
    let db = setup_test_db("cli_db_maintenance");

    punch_db(&db, &["db", "--migrate"])
        .assert()
        .success()
        .stdout(contains("Pending: 1_create_profile").and(contains("4 migration(s) applied")));

    punch_db(&db, &["db", "--migrate", "--check", "--info", "--vacuum"])
        .assert()
        .success()
        .stdout(
            contains("No pending migrations")
                .and(contains("Integrity check passed"))
                .and(contains("Schema version: 4"))
                .and(contains("Vacuum completed")),
        );
}

#[test]
fn test_log_print() {
    let db = setup_test_db("cli_log_print");

    punch_db(&db, &["in"]).assert().success();
    punch_db(&db, &["log", "--print"])
        .assert()
        .success()
        .stdout(contains("migration_applied").and(contains("punch_in")));
}
