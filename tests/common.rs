#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn punch() -> Command {
    cargo_bin_cmd!("punch")
}

/// Create a unique test store path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> PathBuf {
    let mut path: PathBuf = env::temp_dir();
    path.push("punch-tests");
    path.push(format!("{}_punch.db", name));
    fs::remove_file(&path).ok();
    path
}

/// `punch --db <path> <args...>`
pub fn punch_db(db: &PathBuf, args: &[&str]) -> Command {
    let mut cmd = punch();
    cmd.arg("--db").arg(db).args(args);
    cmd
}
