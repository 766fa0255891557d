// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! kbrs - A small terminal kanban board.
//!
//! This crate provides the `kb` CLI on top of [`kb_core`]: project
//! discovery and configuration, the live board session that persists after
//! every move, and text rendering of columns and cards.
//!
//! # Main Components
//!
//! - [`BoardSession`] - Current board plus the store it is saved to
//! - [`Config`] - Project configuration (columns, board file, index policy)
//! - [`Error`] - Error types for all operations
//!
//! # Usage
//!
//! ```rust,ignore
//! use kbrs::{find_work_dir, get_board_path, BoardSession, Config};
//! use kb_core::{default_partition, FileStore, MoveDescriptor};
//!
//! let work_dir = find_work_dir(Path::new("."))?;
//! let config = Config::load(&work_dir)?;
//! let store = FileStore::new(get_board_path(&work_dir, &config));
//! let mut session = BoardSession::open(store, config.index_policy, default_partition)?;
//! session.apply(&MoveDescriptor::new(4, "DONE", 0))?;
//! ```

mod cli;
pub mod colors;
mod commands;
mod display;
pub mod help;
pub mod logging;
mod session;

pub mod config;
pub mod env;
pub mod error;

pub use cli::{BoardArgs, Cli, Command, OutputFormat, PositionArgs};
pub use config::{find_work_dir, get_board_path, init_work_dir, Config};
pub use error::{Error, Result};
pub use session::BoardSession;

use std::path::PathBuf;

use clap::CommandFactory;
use clap_complete::generate;

/// Execute a parsed command line. This is the main entry point for library
/// users and provides a testable way to run commands without process execution.
pub fn run(cli: Cli) -> Result<()> {
    let base = match cli.directory {
        Some(dir) => PathBuf::from(dir),
        None => std::env::current_dir()?,
    };

    match cli.command {
        Command::Init { board, lists } => commands::init::run(&base, board, lists),
        Command::Show { list, output } => commands::show::run(&base, list, output),
        Command::Move {
            id,
            list,
            from,
            position,
        } => commands::mv::run(&base, id, list, from, &position),
        Command::Lists => commands::lists::run(&base),
        Command::Reset { board } => commands::reset::run(&base, board),
        Command::Completion { shell } => {
            let mut cmd = Cli::command();
            generate(shell, &mut cmd, "kb", &mut std::io::stdout());
            Ok(())
        }
    }
}

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
