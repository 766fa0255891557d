// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

pub mod init;
pub mod lists;
pub mod mv;
pub mod reset;
pub mod show;
#[cfg(test)]
#[path = "mod_tests.rs"]
pub mod testing;

use std::path::{Path, PathBuf};

use kb_core::{default_partition, FileStore, Partition, DEFAULT_LISTS};
use tracing::debug;

use crate::config::{find_work_dir, get_board_path, Config};
use crate::error::Result;
use crate::session::BoardSession;

/// Session backed by the project's board file.
pub type FileSession = BoardSession<FileStore>;

/// Helper to open the board of the project containing `start`.
///
/// A project whose board file is missing starts from a fresh board.
pub fn open_session(start: &Path) -> Result<(FileSession, Config, PathBuf)> {
    let work_dir = find_work_dir(start)?;
    let config = Config::load(&work_dir)?;
    let board_path = get_board_path(&work_dir, &config);
    debug!(path = %board_path.display(), "opening board");
    let session = BoardSession::open(FileStore::new(board_path), config.index_policy, || {
        fresh_board(&config, false)
    })?;
    Ok((session, config, work_dir))
}

/// The board a new or reset project starts with.
///
/// The sample cards only fit the default columns, so custom columns always
/// start empty.
pub fn fresh_board(config: &Config, empty: bool) -> Partition {
    let default_columns = config
        .lists
        .iter()
        .map(String::as_str)
        .eq(DEFAULT_LISTS.iter().copied());
    if empty || !default_columns {
        Partition::with_lists(config.lists.iter().map(String::as_str))
    } else {
        default_partition()
    }
}
