//! Integration tests for store initialization and discovery

use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

mod common;
use common::quoth_cmd;

#[test]
fn test_init_creates_store() {
    let temp = TempDir::new().unwrap();

    quoth_cmd()
        .arg("init")
        .arg(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Initialized quoth store"));

    assert!(temp.path().join(".quoth").is_dir());
    assert!(temp.path().join(".quoth/quotes.json").exists());
    assert!(temp.path().join(".quoth/config.toml").exists());
}

#[test]
fn test_init_seeds_default_quotes() {
    let temp = TempDir::new().unwrap();

    quoth_cmd()
        .arg("init")
        .arg(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Seeded 4 quote(s)"));

    let quotes = fs::read_to_string(temp.path().join(".quoth/quotes.json")).unwrap();
    assert!(quotes.contains("Dream it. Wish it. Do it."));
    assert!(quotes.contains("Motivation"));
    assert!(quotes.contains("Inspiration"));
}

#[test]
fn test_init_writes_default_filter() {
    let temp = TempDir::new().unwrap();

    quoth_cmd().arg("init").arg(temp.path()).assert().success();

    let config = fs::read_to_string(temp.path().join(".quoth/config.toml")).unwrap();
    assert!(config.contains("filter = \"all\""));
}

#[test]
fn test_init_twice_fails() {
    let temp = TempDir::new().unwrap();

    quoth_cmd().arg("init").arg(temp.path()).assert().success();

    quoth_cmd()
        .arg("init")
        .arg(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("already initialized"));
}

#[test]
fn test_commands_outside_store_fail() {
    let temp = TempDir::new().unwrap();

    quoth_cmd()
        .current_dir(temp.path())
        .arg("list")
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("Not a quoth store"))
        .stderr(predicate::str::contains("quoth init"));
}

#[test]
fn test_discovery_from_subdirectory() {
    let temp = TempDir::new().unwrap();

    quoth_cmd().arg("init").arg(temp.path()).assert().success();

    let subdir = temp.path().join("sub").join("deep");
    fs::create_dir_all(&subdir).unwrap();

    quoth_cmd()
        .current_dir(&subdir)
        .arg("categories")
        .assert()
        .success()
        .stdout(predicate::str::contains("Motivation"));
}

#[test]
fn test_quoth_root_env_selects_store() {
    let store = TempDir::new().unwrap();
    let elsewhere = TempDir::new().unwrap();

    quoth_cmd().arg("init").arg(store.path()).assert().success();

    quoth_cmd()
        .current_dir(elsewhere.path())
        .env("QUOTH_ROOT", store.path())
        .arg("categories")
        .assert()
        .success()
        .stdout(predicate::str::contains("Inspiration"));
}

#[test]
fn test_quoth_root_env_uninitialized_fails() {
    let empty = TempDir::new().unwrap();

    quoth_cmd()
        .env("QUOTH_ROOT", empty.path())
        .arg("list")
        .assert()
        .failure()
        .stderr(predicate::str::contains("no .quoth directory"));
}

#[test]
fn test_no_command_prints_hint() {
    quoth_cmd()
        .assert()
        .success()
        .stdout(predicate::str::contains("Use --help"));
}
