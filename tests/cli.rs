use assert_cmd::Command;
use predicates::prelude::*;

fn grocr(home: &std::path::Path) -> Command {
    let mut cmd = Command::cargo_bin("grocr").unwrap();
    cmd.env("GROCR_HOME", home);
    cmd
}

#[test]
fn empty_list_shows_the_placeholder() {
    let temp_dir = tempfile::tempdir().unwrap();

    grocr(temp_dir.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicates::str::contains("No items in the grocery list."));
}

#[test]
fn add_edit_delete_round_trip() {
    let temp_dir = tempfile::tempdir().unwrap();

    grocr(temp_dir.path())
        .args(["add", "Oranges", "--amount", "5"])
        .assert()
        .success()
        .stdout(predicates::str::contains("Added (1): Oranges"));

    grocr(temp_dir.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicates::str::contains("Oranges"))
        .stdout(predicates::str::contains("pending"));

    grocr(temp_dir.path())
        .args(["edit", "1", "--amount", "10", "--status", "purchased"])
        .assert()
        .success()
        .stdout(predicates::str::contains("Updated (1): Oranges"));

    grocr(temp_dir.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicates::str::contains("10"))
        .stdout(predicates::str::contains("purchased"));

    grocr(temp_dir.path())
        .args(["delete", "1"])
        .assert()
        .success()
        .stdout(predicates::str::contains("Deleted (1)."));

    grocr(temp_dir.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicates::str::contains("No items in the grocery list."));
}

#[test]
fn list_survives_across_invocations() {
    let temp_dir = tempfile::tempdir().unwrap();

    grocr(temp_dir.path())
        .args(["add", "Milk", "--note", "whole"])
        .assert()
        .success();
    grocr(temp_dir.path())
        .args(["add", "Bread", "--amount", "2"])
        .assert()
        .success();

    // A fresh process reads the same slot; ids keep counting up.
    grocr(temp_dir.path())
        .args(["add", "Eggs", "--amount", "12"])
        .assert()
        .success()
        .stdout(predicates::str::contains("Added (3): Eggs"));

    grocr(temp_dir.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicates::str::contains("Milk"))
        .stdout(predicates::str::contains("whole"))
        .stdout(predicates::str::contains("Bread"))
        .stdout(predicates::str::contains("Eggs"));
}

#[test]
fn malformed_slot_reads_as_empty() {
    let temp_dir = tempfile::tempdir().unwrap();
    std::fs::write(temp_dir.path().join("grocery-list.json"), "not json at all").unwrap();

    grocr(temp_dir.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicates::str::contains("No items in the grocery list."));

    // The next add starts a fresh list over the bad blob.
    grocr(temp_dir.path())
        .args(["add", "Oranges"])
        .assert()
        .success()
        .stdout(predicates::str::contains("Added (1): Oranges"));
}

#[test]
fn unknown_ids_are_reported_not_fatal() {
    let temp_dir = tempfile::tempdir().unwrap();

    grocr(temp_dir.path())
        .args(["edit", "42", "--amount", "1"])
        .assert()
        .success()
        .stdout(predicates::str::contains("No item with id 42."));

    grocr(temp_dir.path())
        .args(["delete", "42"])
        .assert()
        .success()
        .stdout(predicates::str::contains("No item with id 42."));
}

#[test]
fn bad_status_value_is_rejected() {
    let temp_dir = tempfile::tempdir().unwrap();

    grocr(temp_dir.path())
        .args(["add", "Oranges", "--status", "bought"])
        .assert()
        .failure()
        .stderr(predicates::str::contains("Unknown status: bought"));

    grocr(temp_dir.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicates::str::contains("No items in the grocery list."));
}

#[test]
fn clear_drops_the_persisted_list() {
    let temp_dir = tempfile::tempdir().unwrap();

    grocr(temp_dir.path()).args(["add", "Milk"]).assert().success();
    grocr(temp_dir.path())
        .arg("clear")
        .assert()
        .success()
        .stdout(predicates::str::contains("Grocery list cleared."));

    assert!(!temp_dir.path().join("grocery-list.json").exists());
    grocr(temp_dir.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicates::str::contains("No items in the grocery list."));
}

#[test]
fn dir_flag_overrides_the_env_home() {
    let temp_home = tempfile::tempdir().unwrap();
    let temp_dir = tempfile::tempdir().unwrap();

    grocr(temp_home.path())
        .args(["--dir"])
        .arg(temp_dir.path())
        .args(["add", "Oranges"])
        .assert()
        .success();

    assert!(temp_dir.path().join("grocery-list.json").exists());
    assert!(!temp_home.path().join("grocery-list.json").exists());
}
