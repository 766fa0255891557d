// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Shared argument structs for CLI commands.
//!
//! These structs are used with `#[command(flatten)]`.

use clap::Args;

/// Where a moved card lands in its destination column.
#[derive(Args, Clone, Debug, Default)]
pub struct PositionArgs {
    /// Insert at this position (0 is the top)
    #[arg(long, short = 'i', value_name = "N", conflicts_with_all = ["top", "bottom"])]
    pub index: Option<usize>,

    /// Insert at the top of the column
    #[arg(long, conflicts_with = "bottom")]
    pub top: bool,

    /// Insert at the bottom of the column (default)
    #[arg(long)]
    pub bottom: bool,
}

impl PositionArgs {
    /// The requested index; `len` is the destination length after removal.
    pub fn resolve(&self, len: usize) -> usize {
        match (self.index, self.top) {
            (Some(index), _) => index,
            (None, true) => 0,
            (None, false) => len,
        }
    }
}

/// Column selection for commands that create a board.
#[derive(Args, Clone, Debug, Default)]
pub struct BoardArgs {
    /// Create empty columns instead of the sample board
    #[arg(long)]
    pub empty: bool,
}
