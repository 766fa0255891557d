// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Text rendering of the board.
//!
//! Every formatter takes a `styled` flag so output can be checked without
//! escape codes; callers pass [`colors::should_colorize`].

use kb_core::{Item, ListName, Location, Partition};

use crate::colors;

/// Maximum line width for card titles (excluding the card indent).
const WRAP_WIDTH: usize = 72;

/// Wrap text at word boundaries if it's a single line.
///
/// - If content contains newlines: return as-is (preserve user formatting)
/// - If content is single line >width characters: wrap at word boundaries
/// - If content is single line <=width characters: return as-is
pub fn wrap_text(content: &str, width: usize) -> String {
    if content.contains('\n') || content.chars().count() <= width {
        return content.to_string();
    }

    let mut lines: Vec<String> = Vec::new();
    let mut current = String::new();
    // Width in characters, not bytes.
    let mut current_width = 0;
    for word in content.split_whitespace() {
        let word_width = word.chars().count();
        if current.is_empty() {
            current.push_str(word);
            current_width = word_width;
        } else if current_width + 1 + word_width <= width {
            current.push(' ');
            current.push_str(word);
            current_width += 1 + word_width;
        } else {
            lines.push(std::mem::take(&mut current));
            current.push_str(word);
            current_width = word_width;
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines.join("\n")
}

fn paint(styled: bool, text: &str, f: fn(&str) -> String) -> String {
    if styled {
        f(text)
    } else {
        text.to_string()
    }
}

/// Column heading: label and card count, e.g. `IN PROGRESS (2)`.
pub fn format_heading(name: &ListName, count: usize, styled: bool) -> String {
    format!(
        "{} {}",
        paint(styled, &name.label(), colors::header),
        paint(styled, &format!("({count})"), colors::context)
    )
}

/// One card: `  #4 Implement authentication`, long titles wrapped under the title.
pub fn format_card(item: &Item, styled: bool) -> Vec<String> {
    let id = format!("#{}", item.id);
    let pad = " ".repeat(id.len() + 1);
    wrap_text(&item.title, WRAP_WIDTH)
        .lines()
        .enumerate()
        .map(|(i, line)| {
            if i == 0 {
                format!("  {} {}", paint(styled, &id, colors::context), line)
            } else {
                format!("  {pad}{line}")
            }
        })
        .collect()
}

/// A column heading followed by its cards, or a drop placeholder when empty.
pub fn format_column(name: &ListName, items: &[Item], styled: bool) -> Vec<String> {
    let mut lines = vec![format_heading(name, items.len(), styled)];
    if items.is_empty() {
        lines.push(format!("  {}", paint(styled, "(empty)", colors::context)));
    }
    for item in items {
        lines.extend(format_card(item, styled));
    }
    lines
}

/// All columns in board order, separated by blank lines.
pub fn format_board(board: &Partition, styled: bool) -> String {
    board
        .lists()
        .map(|(name, items)| format_column(name, items, styled).join("\n"))
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// One line per column: name and count.
pub fn format_lists(board: &Partition) -> String {
    board
        .lists()
        .map(|(name, items)| format!("{name}\t{}", items.len()))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Confirmation line after a successful move.
pub fn format_moved(item: &Item, from: &Location, to: &Location) -> String {
    if from.list == to.list {
        format!(
            "Moved #{} within {} to position {}",
            item.id, to.list, to.index
        )
    } else {
        format!(
            "Moved #{} from {} to {} at position {}",
            item.id, from.list, to.list, to.index
        )
    }
}

#[cfg(test)]
#[path = "display_tests.rs"]
mod tests;
