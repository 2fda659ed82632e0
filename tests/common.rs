#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use nongkrong::config::Config;
use nongkrong::models::place::Place;
use std::env;
use std::fs;
use std::path::PathBuf;

pub const ADMIN: &str = "nadjakencana";

pub fn nk() -> Command {
    cargo_bin_cmd!("nongkrong")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_nongkrong.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_nongkrong_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Default configuration pointing at `db_path`.
pub fn test_config(db_path: &str) -> Config {
    Config {
        database: db_path.to_string(),
        ..Config::default()
    }
}

pub fn warkop_a() -> Place {
    Place::new(
        "Warkop A", "24 Jam", "Murah", -7.05, 110.44, "", 4.2, "enak",
    )
}

pub fn sample(name: &str, hours: &str, price: &str) -> Place {
    Place::new(name, hours, price, -7.0512, 110.4381, "", 4.0, "")
}

/// Init DB and add two places through the CLI
pub fn init_db_with_data(db_path: &str) {
    nk().args(["--db", db_path, "--test", "init"])
        .assert()
        .success();

    nk().args([
        "--db", db_path, "--test", "--user", "alice", "add", "--name", "Warkop A", "--hours",
        "24 Jam", "--price", "Murah", "--lat", "-7.05", "--lon", "110.44", "--rating", "4.2",
        "--comment", "enak",
    ])
    .assert()
    .success();

    nk().args([
        "--db", db_path, "--test", "--user", "bob", "add", "--name", "Kafe Senja", "--hours",
        "Nggak 24 Jam", "--price", "Mahal", "--lat", "-7.0561", "--lon", "110.4402",
    ])
    .assert()
    .success();
}
