// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Rust specs for the `kb reset` and `kb completion` commands.

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

#[test]
fn reset_restores_sample_board() {
    let temp = init_temp();
    kb().args(["move", "1", "DONE"])
        .current_dir(temp.path())
        .assert()
        .success();

    kb().arg("reset")
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout("Reset board: 9 cards in 4 lists\n");

    kb().arg("lists")
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout("BACKLOG\t3\nIN_PROGRESS\t2\nREVIEW\t2\nDONE\t2\n");
}

#[test]
fn reset_empty_clears_cards() {
    let temp = init_temp();
    kb().args(["reset", "--empty"])
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout("Reset board: 0 cards in 4 lists\n");

    kb().args(["move", "1", "DONE"])
        .current_dir(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("item not found"));
}

#[test]
fn missing_board_file_starts_fresh() {
    let temp = init_temp();
    std::fs::remove_file(temp.path().join(".kanban/board.json")).unwrap();

    kb().arg("lists")
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("BACKLOG\t3"));
}

#[yare::parameterized(
    bash = { "bash" },
    zsh = { "zsh" },
    fish = { "fish" },
)]
fn completion_generates_script(shell: &str) {
    let output = kb().args(["completion", shell]).output().unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("kb"));
    assert!(stdout.contains("move"));
}

#[test]
fn help_lists_commands() {
    kb().arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"))
        .stdout(predicate::str::contains("move"))
        .stdout(predicate::str::contains("reset"));
}

#[test]
fn version_flag() {
    kb().arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("kb"));
}
