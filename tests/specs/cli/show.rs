// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Rust specs for the `kb show` and `kb lists` commands.

#![allow(clippy::panic)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

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

const SAMPLE_BOARD: &str = "\
BACKLOG (3)
  #1 Design login page
  #2 Create API contract
  #3 Define user roles & permissions

IN PROGRESS (2)
  #4 Implement authentication
  #5 Build dashboard layout

REVIEW (2)
  #6 Review API integration
  #7 UI consistency check

DONE (2)
  #8 Project setup & repo init
  #9 Development environment ready
";

#[test]
fn show_renders_sample_board() {
    let temp = init_temp();
    let output = kb().arg("show").current_dir(temp.path()).output().unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    similar_asserts::assert_eq!(stdout.as_str(), SAMPLE_BOARD);
}

#[test]
fn show_single_list_is_case_insensitive() {
    let temp = init_temp();
    kb().args(["show", "--list", "in_progress"])
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout("IN PROGRESS (2)\n  #4 Implement authentication\n  #5 Build dashboard layout\n");
}

#[test]
fn show_unknown_list_fails_with_hint() {
    let temp = init_temp();
    kb().args(["show", "--list", "ARCHIVE"])
        .current_dir(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown list: 'ARCHIVE'"))
        .stderr(predicate::str::contains("BACKLOG, IN_PROGRESS, REVIEW, DONE"));
}

#[test]
fn show_json_matches_stored_board() {
    let temp = init_temp();
    let output = kb()
        .args(["show", "-o", "json"])
        .current_dir(temp.path())
        .output()
        .unwrap();
    assert!(output.status.success());

    let shown: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let stored: serde_json::Value = serde_json::from_str(
        &std::fs::read_to_string(temp.path().join(".kanban/board.json")).unwrap(),
    )
    .unwrap();
    assert_eq!(shown, stored);
    assert_eq!(shown["DONE"][1]["id"], 9);
}

#[test]
fn show_json_keeps_column_order() {
    let temp = init_temp();
    let output = kb()
        .args(["show", "-o", "json"])
        .current_dir(temp.path())
        .output()
        .unwrap();
    let text = String::from_utf8_lossy(&output.stdout);
    let positions: Vec<usize> = ["BACKLOG", "IN_PROGRESS", "REVIEW", "DONE"]
        .iter()
        .map(|name| text.find(&format!("\"{name}\"")).unwrap())
        .collect();
    assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));
}

#[test]
fn show_empty_board_has_placeholders() {
    let temp = TempDir::new().unwrap();
    kb().args(["init", "--empty"])
        .current_dir(temp.path())
        .assert()
        .success();

    kb().args(["show", "--list", "DONE"])
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout("DONE (0)\n  (empty)\n");
}

#[test]
fn lists_prints_counts() {
    let temp = init_temp();
    kb().arg("lists")
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout("BACKLOG\t3\nIN_PROGRESS\t2\nREVIEW\t2\nDONE\t2\n");
}

#[test]
fn corrupt_board_is_reported() {
    let temp = init_temp();
    std::fs::write(temp.path().join(".kanban/board.json"), "{ nope").unwrap();
    kb().arg("show")
        .current_dir(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("json error"));
}

#[test]
fn duplicate_card_in_board_file_is_reported() {
    let temp = init_temp();
    std::fs::write(
        temp.path().join(".kanban/board.json"),
        r#"{"A": [{"id": 1, "title": "x"}], "B": [{"id": 1, "title": "x"}]}"#,
    )
    .unwrap();
    kb().arg("lists")
        .current_dir(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("appears in both 'A' and 'B'"));
}
