// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use thiserror::Error;

/// All possible errors that can occur in the kbrs library.
///
/// Errors provide user-friendly messages with hints for common issues.
#[derive(Debug, Error)]
pub enum Error {
    #[error("not initialized: run 'kb init' first")]
    NotInitialized,

    #[error("already initialized at {0}")]
    AlreadyInitialized(String),

    #[error("item not found: {0}\n  hint: run 'kb show' to see card ids")]
    ItemNotFound(String),

    #[error("unknown list: '{name}'\n  hint: lists on this board are: {available}")]
    UnknownList { name: String, available: String },

    #[error("index {index} out of range\n  hint: the target list accepts positions 0 through {len}")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("board is inconsistent: item {id} appears in both '{first}' and '{second}'")]
    DuplicateItem {
        id: String,
        first: String,
        second: String,
    },

    #[error("invalid item id: '{0}'\n  hint: item ids are non-negative integers, e.g. 7 or #7")]
    InvalidItemId(String),

    #[error("invalid index policy: '{0}'\n  hint: valid policies are: clamp, reject")]
    InvalidIndexPolicy(String),

    #[error("invalid list name: '{0}'\n  hint: list names cannot be empty or contain whitespace")]
    InvalidListName(String),

    #[error("a board needs at least one list")]
    NoLists,

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("config error: {0}")]
    Config(String),
}

/// A specialized Result type for kbrs operations.
pub type Result<T> = std::result::Result<T, Error>;

impl From<kb_core::Error> for Error {
    fn from(e: kb_core::Error) -> Self {
        match e {
            kb_core::Error::ItemNotFound(id) => Error::ItemNotFound(id.to_string()),
            kb_core::Error::UnknownList(name) => Error::UnknownList {
                name,
                available: String::new(),
            },
            kb_core::Error::IndexOutOfRange { index, len } => Error::IndexOutOfRange { index, len },
            kb_core::Error::DuplicateItem { id, first, second } => Error::DuplicateItem {
                id: id.to_string(),
                first,
                second,
            },
            kb_core::Error::InvalidItemId(s) => Error::InvalidItemId(s),
            kb_core::Error::InvalidIndexPolicy(s) => Error::InvalidIndexPolicy(s),
            kb_core::Error::Io(e) => Error::Io(e),
            kb_core::Error::Json(e) => Error::Json(e),
        }
    }
}

impl Error {
    /// Converts a core error, filling in the board's list names for unknown-list hints.
    pub fn from_core(e: kb_core::Error, board: &kb_core::Partition) -> Self {
        match e {
            kb_core::Error::UnknownList(name) => Error::UnknownList {
                name,
                available: board
                    .list_names()
                    .map(|n| n.as_str())
                    .collect::<Vec<_>>()
                    .join(", "),
            },
            other => other.into(),
        }
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
