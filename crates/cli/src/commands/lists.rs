// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::path::Path;

use crate::display::format_lists;
use crate::error::Result;

use super::open_session;

pub fn run(base: &Path) -> Result<()> {
    let (session, _, _) = open_session(base)?;
    println!("{}", format_lists(session.board()));
    Ok(())
}
