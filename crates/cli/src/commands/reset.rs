// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::path::Path;

use kb_core::Store;

use crate::cli::BoardArgs;
use crate::config::Config;
use crate::error::Result;
use crate::session::BoardSession;

use super::{fresh_board, open_session};

pub fn run(base: &Path, board: BoardArgs) -> Result<()> {
    let (mut session, config, _) = open_session(base)?;
    println!("{}", run_impl(&mut session, &config, board.empty)?);
    Ok(())
}

/// Internal implementation that accepts the session for testing.
pub(crate) fn run_impl<S: Store>(
    session: &mut BoardSession<S>,
    config: &Config,
    empty: bool,
) -> Result<String> {
    session.replace(fresh_board(config, empty))?;
    let board = session.board();
    Ok(format!(
        "Reset board: {} cards in {} lists",
        board.len(),
        board.list_count()
    ))
}

#[cfg(test)]
#[path = "reset_tests.rs"]
mod tests;
