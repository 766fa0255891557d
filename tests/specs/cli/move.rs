// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Rust specs for the `kb move` command.

#![allow(clippy::panic)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;
use yare::parameterized;

fn kb() -> Command {
    let mut cmd = cargo_bin_cmd!("kb");
    cmd.env("NO_COLOR", "1").env_remove("KB_LOG");
    cmd
}

fn init_temp() -> TempDir {
    let temp = TempDir::new().unwrap();
    kb().arg("init").current_dir(temp.path()).assert().success();
    temp
}

fn set_policy(temp: &TempDir, policy: &str) {
    let path = temp.path().join(".kanban/config.toml");
    let config = std::fs::read_to_string(&path).unwrap();
    let config = config.replace("index_policy = \"clamp\"", &format!("index_policy = \"{policy}\""));
    std::fs::write(&path, config).unwrap();
}

/// Card ids of `list`, read back from the stored board.
fn stored_ids(temp: &TempDir, list: &str) -> Vec<u64> {
    let text = std::fs::read_to_string(temp.path().join(".kanban/board.json")).unwrap();
    let board: serde_json::Value = serde_json::from_str(&text).unwrap();
    board[list]
        .as_array()
        .unwrap()
        .iter()
        .map(|item| item["id"].as_u64().unwrap())
        .collect()
}

#[test]
fn move_to_other_list_defaults_to_bottom() {
    let temp = init_temp();
    kb().args(["move", "1", "DONE"])
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout("Moved #1 from BACKLOG to DONE at position 2\n");

    assert_eq!(stored_ids(&temp, "BACKLOG"), vec![2, 3]);
    assert_eq!(stored_ids(&temp, "DONE"), vec![8, 9, 1]);
}

#[test]
fn move_is_persisted_across_runs() {
    let temp = init_temp();
    kb().args(["move", "4", "review", "--top"])
        .current_dir(temp.path())
        .assert()
        .success();
    kb().args(["move", "#5", "REVIEW", "--index", "1"])
        .current_dir(temp.path())
        .assert()
        .success();

    kb().args(["show", "--list", "REVIEW"])
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(
            "REVIEW (4)\n  #4 Implement authentication\n  #5 Build dashboard layout\n  \
             #6 Review API integration\n  #7 UI consistency check\n",
        );
    kb().args(["show", "--list", "IN_PROGRESS"])
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout("IN PROGRESS (0)\n  (empty)\n");
}

#[parameterized(
    first_to_last = { "1", "2", vec![2, 3, 1] },
    last_to_first = { "3", "0", vec![3, 1, 2] },
    middle_to_first = { "2", "0", vec![2, 1, 3] },
    same_position = { "2", "1", vec![1, 2, 3] },
    past_the_end = { "1", "10", vec![2, 3, 1] },
)]
fn reorder_within_list(id: &str, index: &str, expected: Vec<u64>) {
    let temp = init_temp();
    kb().args(["move", id, "BACKLOG", "--index", index])
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("within BACKLOG"));
    assert_eq!(stored_ids(&temp, "BACKLOG"), expected);
}

#[test]
fn move_into_emptied_list() {
    let temp = init_temp();
    for id in ["4", "5"] {
        kb().args(["move", id, "DONE"])
            .current_dir(temp.path())
            .assert()
            .success();
    }
    kb().args(["move", "9", "IN_PROGRESS", "--index", "3"])
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout("Moved #9 from DONE to IN_PROGRESS at position 0\n");
    assert_eq!(stored_ids(&temp, "IN_PROGRESS"), vec![9]);
}

#[test]
fn unknown_item_fails_without_changes() {
    let temp = init_temp();
    let before = std::fs::read_to_string(temp.path().join(".kanban/board.json")).unwrap();

    kb().args(["move", "42", "DONE"])
        .current_dir(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("item not found: 42"));

    let after = std::fs::read_to_string(temp.path().join(".kanban/board.json")).unwrap();
    assert_eq!(before, after);
}

#[test]
fn unknown_list_fails_with_hint() {
    let temp = init_temp();
    kb().args(["move", "1", "ARCHIVE"])
        .current_dir(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown list: 'ARCHIVE'"))
        .stderr(predicate::str::contains("lists on this board are: BACKLOG"));
    assert_eq!(stored_ids(&temp, "BACKLOG"), vec![1, 2, 3]);
}

#[test]
fn unknown_item_wins_over_unknown_list() {
    let temp = init_temp();
    kb().args(["move", "42", "ARCHIVE"])
        .current_dir(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("item not found"));
}

#[test]
fn from_must_name_current_list() {
    let temp = init_temp();
    kb().args(["move", "1", "DONE", "--from", "REVIEW"])
        .current_dir(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("item not found: 1"));

    kb().args(["move", "1", "DONE", "--from", "backlog"])
        .current_dir(temp.path())
        .assert()
        .success();
}

#[test]
fn reject_policy_refuses_far_index() {
    let temp = init_temp();
    set_policy(&temp, "reject");

    kb().args(["move", "1", "DONE", "--index", "3"])
        .current_dir(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("index 3 out of range"));

    kb().args(["move", "1", "DONE", "--index", "2"])
        .current_dir(temp.path())
        .assert()
        .success();
    assert_eq!(stored_ids(&temp, "DONE"), vec![8, 9, 1]);
}

#[test]
fn conflicting_position_flags_fail() {
    let temp = init_temp();
    kb().args(["move", "1", "DONE", "--top", "--bottom"])
        .current_dir(temp.path())
        .assert()
        .failure();
}

#[test]
fn invalid_id_fails() {
    let temp = init_temp();
    kb().args(["move", "abc", "DONE"])
        .current_dir(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid item id"));
}

#[test]
fn save_failure_is_only_a_warning() {
    let temp = init_temp();
    let board = temp.path().join(".kanban/board.json");
    // A directory where the temp file should go makes the write fail.
    std::fs::create_dir(temp.path().join(".kanban/board.json.tmp")).unwrap();

    kb().args(["move", "1", "DONE"])
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Moved #1"))
        .stderr(predicate::str::contains("failed to save board"));

    let text = std::fs::read_to_string(board).unwrap();
    assert!(text.contains("\"BACKLOG\""));
    assert_eq!(stored_ids(&temp, "BACKLOG"), vec![1, 2, 3]);
}
