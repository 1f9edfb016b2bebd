//! Integration tests for the ratings CLI
//!
//! These tests drive the binary end to end against a temporary data
//! directory: create → show → list → average → delete.

use assert_cmd::cargo;
use predicates::prelude::*;
use serde_json::Value;
use tempfile::TempDir;

/// Helper function to create a ratings command rooted in `dir`
fn ratings(dir: &TempDir) -> assert_cmd::Command {
    let mut cmd = assert_cmd::Command::new(cargo::cargo_bin!("ratings"));
    cmd.current_dir(dir.path())
        .arg("--data-dir")
        .arg(dir.path().join("data"))
        .env("NO_COLOR", "1");
    cmd
}

/// Create a review through the CLI and return its id
fn create(dir: &TempDir, user: &str, rating: &str, review: &str) -> String {
    let output = ratings(dir)
        .args(["--json", "create", "--user", user, "--rating", rating, "--review", review])
        .output()
        .unwrap();
    assert!(output.status.success(), "create failed: {output:?}");

    let value: Value = serde_json::from_slice(&output.stdout).unwrap();
    value["review"]["id"].as_str().unwrap().to_string()
}

// =============================================================================
// CREATE TESTS
// =============================================================================

#[test]
fn test_create_and_show() {
    let temp = TempDir::new().unwrap();
    let id = create(&temp, "u123", "5", "Excellent");

    let output = ratings(&temp).args(["--json", "show", &id]).output().unwrap();
    assert!(output.status.success());

    let value: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["found"], true);
    assert_eq!(value["review"]["user"], "u123");
    assert_eq!(value["review"]["rating"], 5.0);
    assert_eq!(value["review"]["review"], "Excellent");
}

#[test]
fn test_create_human_output() {
    let temp = TempDir::new().unwrap();
    ratings(&temp)
        .args(["create", "-u", "u1", "-r", "4", "-t", "Great course"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created review"))
        .stdout(predicate::str::contains("Rating: 4"));

    assert!(temp.path().join("data/ratingandreviews.json").exists());
}

#[test]
fn test_create_without_rating_fails() {
    let temp = TempDir::new().unwrap();
    ratings(&temp)
        .args(["create", "--review", "Good"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("rating: Path `rating` is required."));
}

#[test]
fn test_create_without_review_fails() {
    let temp = TempDir::new().unwrap();
    ratings(&temp)
        .args(["create", "--rating", "3"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("review: Path `review` is required."));
}

#[test]
fn test_create_invalid_rating_json() {
    let temp = TempDir::new().unwrap();
    let output = ratings(&temp)
        .args(["--json", "create", "--rating", "great", "--review", "x"])
        .output()
        .unwrap();
    assert!(!output.status.success());

    let value: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["success"], false);
    assert_eq!(value["error"]["errors"][0]["path"], "rating");
    assert_eq!(value["error"]["errors"][0]["kind"], "cast");
}

// =============================================================================
// QUERY TESTS
// =============================================================================

#[test]
fn test_list_and_average() {
    let temp = TempDir::new().unwrap();
    create(&temp, "alice", "3", "fine");
    create(&temp, "alice", "5", "loved it");
    create(&temp, "bob", "1", "not for me");

    let output = ratings(&temp).args(["--json", "list"]).output().unwrap();
    let value: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["total"], 3);
    assert_eq!(value["reviews"][0]["review"], "loved it");
    assert_eq!(value["reviews"][2]["review"], "not for me");

    let output = ratings(&temp).args(["--json", "list", "--user", "bob"]).output().unwrap();
    let value: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["total"], 1);

    let output = ratings(&temp).args(["--json", "average"]).output().unwrap();
    let value: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["count"], 3);
    assert_eq!(value["average"], 3.0);

    ratings(&temp)
        .args(["average", "--user", "alice"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Average rating: 4.00 (2 rating(s))"));
}

#[test]
fn test_list_empty() {
    let temp = TempDir::new().unwrap();
    ratings(&temp)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No reviews found."));
}

#[test]
fn test_show_invalid_id() {
    let temp = TempDir::new().unwrap();
    ratings(&temp)
        .args(["show", "not-an-id"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid object id"));
}

// =============================================================================
// DELETE TESTS
// =============================================================================

#[test]
fn test_delete() {
    let temp = TempDir::new().unwrap();
    let id = create(&temp, "u1", "2", "temporary");

    ratings(&temp)
        .args(["delete", &id])
        .assert()
        .success()
        .stdout(predicate::str::contains(format!("Deleted review {id}")));

    ratings(&temp)
        .args(["delete", &id])
        .assert()
        .failure()
        .stdout(predicate::str::contains(format!("Review not found: {id}")))
        .stderr(predicate::str::contains("Error").not());

    let output = ratings(&temp).args(["--json", "show", &id]).output().unwrap();
    let value: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["found"], false);
}

// =============================================================================
// MISC COMMANDS
// =============================================================================

#[test]
fn test_schema_command() {
    let temp = TempDir::new().unwrap();
    ratings(&temp)
        .arg("schema")
        .assert()
        .success()
        .stdout(predicate::str::contains("RatingAndReview"))
        .stdout(predicate::str::contains("ref User"))
        .stdout(predicate::str::contains("Number, required"));
}

#[test]
fn test_init_writes_config() {
    let temp = TempDir::new().unwrap();
    ratings(&temp)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Created .ratings.toml"));

    assert!(temp.path().join(".ratings.toml").exists());
    assert!(temp.path().join("data").is_dir());

    ratings(&temp)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Already initialized"));
}

#[test]
fn test_memory_backend_does_not_write() {
    let temp = TempDir::new().unwrap();
    ratings(&temp)
        .args(["--backend", "memory", "create", "-r", "5", "-t", "ephemeral"])
        .assert()
        .success();
    assert!(!temp.path().join("data").exists());
}

#[test]
fn test_broken_config_is_reported() {
    let temp = TempDir::new().unwrap();
    std::fs::write(temp.path().join(".ratings.toml"), "[storage\ndata_dir = \"mine\"\n").unwrap();

    ratings(&temp)
        .env("RUST_LOG", "warn")
        .args(["create", "-r", "5", "-t", "still works"])
        .assert()
        .success()
        .stderr(predicate::str::contains("ignoring config"))
        .stderr(predicate::str::contains(".ratings.toml"));
}

#[test]
fn test_version() {
    let temp = TempDir::new().unwrap();
    ratings(&temp)
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::contains("ratings v"));
}
