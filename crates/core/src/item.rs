// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Card types carried by the board.
//!
//! Items are opaque payloads to the reconciler: only the id is inspected,
//! the title travels unchanged.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// Stable identifier of an item, unique across the whole board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(u64);

impl ItemId {
    pub const fn new(raw: u64) -> Self {
        ItemId(raw)
    }

    pub fn get(self) -> u64 {
        self.0
    }
}

impl From<u64> for ItemId {
    fn from(raw: u64) -> Self {
        ItemId(raw)
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ItemId {
    type Err = Error;

    /// Accepts `7` as well as the displayed form `#7`.
    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        let digits = trimmed.strip_prefix('#').unwrap_or(trimmed);
        digits
            .parse::<u64>()
            .map(ItemId)
            .map_err(|_| Error::InvalidItemId(s.to_string()))
    }
}

/// An atomic unit of work shown as one card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub title: String,
}

impl Item {
    pub fn new(id: impl Into<ItemId>, title: impl Into<String>) -> Self {
        Item {
            id: id.into(),
            title: title.into(),
        }
    }
}

#[cfg(test)]
#[path = "item_tests.rs"]
mod tests;
