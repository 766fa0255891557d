// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::path::Path;

use kb_core::{FileStore, Store};
use tracing::info;

use crate::cli::BoardArgs;
use crate::config::{get_board_path, init_work_dir, Config};
use crate::error::Result;

use super::fresh_board;

pub fn run(base: &Path, board: BoardArgs, lists: Vec<String>) -> Result<()> {
    println!("{}", run_impl(base, board.empty, lists)?);
    Ok(())
}

/// Creates `.kanban/` under `base` with its config and first board.
///
/// Unlike later saves, the first write must succeed.
pub(crate) fn run_impl(base: &Path, empty: bool, lists: Vec<String>) -> Result<String> {
    let config = if lists.is_empty() {
        Config::default()
    } else {
        Config::with_lists(lists)?
    };

    let work_dir = init_work_dir(base, &config)?;
    let board = fresh_board(&config, empty);
    let store = FileStore::new(get_board_path(&work_dir, &config));
    store.save(&board)?;
    info!(path = %store.path().display(), cards = board.len(), "board created");

    Ok(format!(
        "Initialized board at {}\nLists: {}",
        work_dir.display(),
        config.lists.join(", ")
    ))
}

#[cfg(test)]
#[path = "init_tests.rs"]
mod tests;
