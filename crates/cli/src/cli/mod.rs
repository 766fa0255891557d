// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

mod args;

use crate::colors;
use crate::help;
use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use kb_core::ItemId;

pub use args::{BoardArgs, PositionArgs};

/// Parse a list name: non-empty, no whitespace, upper-cased.
fn list_name(s: &str) -> Result<String, String> {
    let name = s.trim();
    if name.is_empty() {
        Err("cannot be empty".to_string())
    } else if name.chars().any(char::is_whitespace) {
        Err("cannot contain whitespace".to_string())
    } else {
        Ok(name.to_uppercase())
    }
}

/// Parse a card id such as `7` or `#7`.
fn item_id(s: &str) -> Result<ItemId, String> {
    s.parse::<ItemId>().map_err(|e| e.to_string())
}

/// Output format for commands supporting structured output.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Parser)]
#[command(name = "kb")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(disable_version_flag = true)]
#[command(about = "A small kanban board for the terminal")]
#[command(
    long_about = "A small kanban board for the terminal.\n\n\
    Cards live in ordered columns; every move is applied as a single, validated step \
    and the board is saved after each one."
)]
#[command(help_template = help::template())]
#[command(before_help = help::commands())]
#[command(after_help = help::quickstart())]
#[command(styles = help::styles())]
// Allow the unit type field pattern which is required for clap's ArgAction::Version/Help
#[allow(clippy::manual_non_exhaustive)]
pub struct Cli {
    /// Run as if kb was started in <path>
    #[arg(short = 'C', long = "directory", global = true, value_name = "path")]
    pub directory: Option<String>,

    /// Print version
    #[arg(short = 'v', short_alias = 'V', long = "version", action = clap::ArgAction::Version)]
    version: (),

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    // ─────────────────────────────────────────────────────────────────────────
    // Board
    // ─────────────────────────────────────────────────────────────────────────
    /// Show the board
    #[command(after_help = colors::examples("\
Examples:
  kb show                 Show every column
  kb show --list DONE     Show one column
  kb show -o json         Print the stored board"))]
    Show {
        /// Only show this column
        #[arg(long, short, value_parser = list_name)]
        list: Option<String>,

        /// Output format (text, json)
        #[arg(long = "output", short = 'o', value_enum, default_value = "text")]
        output: OutputFormat,
    },

    /// Move a card to a column
    #[command(
        name = "move",
        visible_alias = "mv",
        arg_required_else_help = true,
        after_help = colors::examples("\
Examples:
  kb move 3 DONE                Move card 3 to the bottom of DONE
  kb move 3 DONE --top          Move card 3 to the top of DONE
  kb move '#3' review -i 1      Move card 3 to position 1 of REVIEW
  kb move 3 BACKLOG --index 0   Reorder card 3 within its column"))]
    Move {
        /// Card id (e.g. 3 or #3)
        #[arg(value_parser = item_id)]
        id: ItemId,

        /// Destination column (case-insensitive)
        #[arg(value_parser = list_name)]
        list: String,

        /// Column the card is expected to be in
        #[arg(long, value_parser = list_name)]
        from: Option<String>,

        #[command(flatten)]
        position: PositionArgs,
    },

    /// List columns with card counts
    Lists,

    // ─────────────────────────────────────────────────────────────────────────
    // Setup
    // ─────────────────────────────────────────────────────────────────────────
    /// Initialize a board in the current directory
    #[command(after_help = colors::examples("\
Examples:
  kb init                             Create the sample board
  kb init --empty                     Create the default columns, no cards
  kb init --list TODO --list DONE     Create custom empty columns"))]
    Init {
        #[command(flatten)]
        board: BoardArgs,

        /// Column name (repeat for several; implies custom columns)
        #[arg(long = "list", short, value_parser = list_name)]
        lists: Vec<String>,
    },

    /// Replace the board with a fresh one
    #[command(after_help = colors::examples("\
Examples:
  kb reset           Restore the sample board
  kb reset --empty   Clear every column"))]
    Reset {
        #[command(flatten)]
        board: BoardArgs,
    },

    /// Generate shell completions
    #[command(arg_required_else_help = true)]
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[cfg(test)]
#[path = "../cli_tests/mod.rs"]
mod tests;
