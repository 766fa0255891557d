// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Terminal color utilities for help and board output.
//!
//! Respects environment variables:
//! - `NO_COLOR=1`: Disables colors
//! - `COLOR=1`: Forces colors even without TTY

use std::io::IsTerminal;

use crate::env;

/// ANSI 256-color codes
pub mod codes {
    /// Section headers and column titles: pastel cyan/steel blue
    pub const HEADER: u8 = 74;
    /// Commands/literals: light grey
    pub const LITERAL: u8 = 250;
    /// Card ids, counts, placeholders: medium grey
    pub const CONTEXT: u8 = 245;
}

/// Check if colors should be enabled based on TTY and environment variables.
pub fn should_colorize() -> bool {
    if env::no_color() {
        return false;
    }
    if env::force_color() {
        return true;
    }
    std::io::stdout().is_terminal()
}

/// Format a 256-color ANSI escape sequence for foreground color.
fn fg256(code: u8) -> String {
    format!("\x1b[38;5;{code}m")
}

/// ANSI reset sequence.
const RESET: &str = "\x1b[0m";

fn paint(code: u8, text: &str) -> String {
    format!("{}{}{}", fg256(code), text, RESET)
}

/// Apply header color (section titles, column names) to text.
pub fn header(text: &str) -> String {
    paint(codes::HEADER, text)
}

/// Apply literal color (commands, options) to text.
pub fn literal(text: &str) -> String {
    paint(codes::LITERAL, text)
}

/// Apply context color (ids, counts, placeholders) to text.
pub fn context(text: &str) -> String {
    paint(codes::CONTEXT, text)
}

/// Colorize an examples help block.
///
/// Lines ending in `:` become headers. Lines shaped like
/// `kb command args    Description` get the command part colored as a
/// literal, with `<placeholders>` dimmed; the description is left alone.
pub fn examples(text: &str) -> String {
    if !should_colorize() {
        return text.to_string();
    }

    text.lines()
        .map(|line| {
            let trimmed = line.trim_start();
            let indent = &line[..line.len() - trimmed.len()];
            if trimmed.ends_with(':') && !trimmed.contains("  ") {
                return format!("{indent}{}", header(trimmed));
            }
            match find_description_start(trimmed) {
                Some(end) => format!(
                    "{indent}{}{}",
                    colorize_command(&trimmed[..end]),
                    &trimmed[end..]
                ),
                None => line.to_string(),
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Colorize a command: words as literals, `<placeholder>` words as context.
pub fn colorize_command(cmd: &str) -> String {
    cmd.split(' ')
        .map(|word| {
            if word.is_empty() {
                String::new()
            } else if word.starts_with('<') {
                context(word)
            } else {
                literal(word)
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Find where the description starts (after 2+ spaces following the command).
pub fn find_description_start(line: &str) -> Option<usize> {
    let gap = line.find("  ")?;
    if line[gap..].trim_start().is_empty() {
        return None;
    }
    Some(gap)
}

#[cfg(test)]
#[path = "colors_tests.rs"]
mod tests;
