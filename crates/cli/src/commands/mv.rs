// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::path::Path;

use kb_core::{ItemId, MoveDescriptor, Store};

use crate::cli::PositionArgs;
use crate::display::format_moved;
use crate::error::{Error, Result};
use crate::session::BoardSession;

use super::open_session;

pub fn run(
    base: &Path,
    id: ItemId,
    list: String,
    from: Option<String>,
    position: &PositionArgs,
) -> Result<()> {
    let (mut session, _, _) = open_session(base)?;
    println!("{}", run_impl(&mut session, id, list, from, position)?);
    Ok(())
}

/// Internal implementation that accepts the session for testing.
pub(crate) fn run_impl<S: Store>(
    session: &mut BoardSession<S>,
    id: ItemId,
    list: String,
    from: Option<String>,
    position: &PositionArgs,
) -> Result<String> {
    // Positions count the destination without the moving card.
    let dest_len = session
        .board()
        .get(&list)
        .map(|items| items.iter().filter(|item| item.id != id).count())
        .unwrap_or(0);

    let mut mv = MoveDescriptor::new(id, list, position.resolve(dest_len));
    if let Some(from) = from {
        mv = mv.from_list(from);
    }

    let (from, to) = session.apply(&mv)?;
    let item = session
        .board()
        .item(id)
        .ok_or_else(|| Error::ItemNotFound(id.to_string()))?;
    Ok(format_moved(item, &from, &to))
}

#[cfg(test)]
#[path = "mv_tests.rs"]
mod tests;
