// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for kb-core operations.

use thiserror::Error;

use crate::item::ItemId;

/// All possible errors that can occur in kb-core operations.
///
/// Every variant is recoverable by the caller: a failed move leaves the
/// prior partition in place.
#[derive(Debug, Error)]
pub enum Error {
    #[error("item not found: {0}")]
    ItemNotFound(ItemId),

    #[error("unknown list: '{0}'")]
    UnknownList(String),

    #[error("index {index} out of range\n  hint: the target list accepts positions 0 through {len}")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("item {id} appears in both '{first}' and '{second}'")]
    DuplicateItem {
        id: ItemId,
        first: String,
        second: String,
    },

    #[error("invalid item id: '{0}'\n  hint: item ids are non-negative integers, e.g. 7 or #7")]
    InvalidItemId(String),

    #[error("invalid index policy: '{0}'\n  hint: valid policies are: clamp, reject")]
    InvalidIndexPolicy(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized Result type for kb-core operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
