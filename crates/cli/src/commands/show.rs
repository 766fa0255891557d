// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::path::Path;

use kb_core::{codec, Partition};

use crate::cli::OutputFormat;
use crate::colors;
use crate::display::format_board;
use crate::error::{Error, Result};

use super::open_session;

pub fn run(base: &Path, list: Option<String>, output: OutputFormat) -> Result<()> {
    let (session, _, _) = open_session(base)?;
    let text = run_impl(
        session.board(),
        list.as_deref(),
        output,
        colors::should_colorize(),
    )?;
    println!("{text}");
    Ok(())
}

/// Internal implementation that accepts the board for testing.
pub(crate) fn run_impl(
    board: &Partition,
    list: Option<&str>,
    output: OutputFormat,
    styled: bool,
) -> Result<String> {
    let board = match list {
        Some(name) => single_column(board, name)?,
        None => board.clone(),
    };

    match output {
        OutputFormat::Text => Ok(format_board(&board, styled)),
        OutputFormat::Json => Ok(codec::encode(&board)?),
    }
}

fn single_column(board: &Partition, name: &str) -> Result<Partition> {
    let (list, items) = board
        .lists()
        .find(|(list, _)| list.as_str() == name)
        .ok_or_else(|| Error::from_core(kb_core::Error::UnknownList(name.to_string()), board))?;
    Ok(Partition::new().list(list.clone(), items.to_vec()))
}

#[cfg(test)]
#[path = "show_tests.rs"]
mod tests;
