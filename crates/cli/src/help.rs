// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Help text generation with colorization support.

use crate::colors;
use clap::builder::styling::Styles;

/// Generate clap Styles for help output using the board palette.
pub fn styles() -> Styles {
    if !colors::should_colorize() {
        return Styles::plain();
    }

    use anstyle::{Ansi256Color, Color, Style};

    let header = Style::new().fg_color(Some(Color::Ansi256(Ansi256Color(colors::codes::HEADER))));
    let literal = Style::new().fg_color(Some(Color::Ansi256(Ansi256Color(colors::codes::LITERAL))));
    let context = Style::new().fg_color(Some(Color::Ansi256(Ansi256Color(colors::codes::CONTEXT))));

    Styles::styled()
        .header(header)
        .usage(header)
        .literal(literal)
        .placeholder(context)
        .valid(context)
}

/// Main help template with colorized Options header.
pub fn template() -> String {
    format!(
        "{{about-with-newline}}
{{usage-heading}} {{usage}}

{{before-help}}{}
{{options}}{{after-help}}",
        heading("Options:")
    )
}

fn heading(text: &str) -> String {
    if colors::should_colorize() {
        colors::header(text)
    } else {
        text.to_string()
    }
}

fn command(name: &str) -> String {
    if colors::should_colorize() {
        colors::literal(name)
    } else {
        name.to_string()
    }
}

/// Commands list shown before options in main help.
pub fn commands() -> String {
    format!(
        "\
{header_board}
  {show}        Show the board
  {mv}        Move a card to a column
  {lists}       List columns with card counts

{header_setup}
  {init}        Initialize a board
  {reset}       Replace the board with a fresh one
  {completion}  Generate shell completions
",
        header_board = heading("Board:"),
        header_setup = heading("Setup:"),
        show = command("show"),
        mv = command("move"),
        lists = command("lists"),
        init = command("init"),
        reset = command("reset"),
        completion = command("completion"),
    )
}

/// Quickstart help shown after options in main help.
pub fn quickstart() -> String {
    colors::examples(
        "\
Get started:
  kb init                  Create the sample board
  kb show                  Show every column
  kb move 4 DONE           Move card 4 to the bottom of DONE
  kb move 4 DONE --top     Move card 4 to the top of DONE",
    )
}

#[cfg(test)]
#[path = "help_tests.rs"]
mod tests;
