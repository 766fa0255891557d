// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Text encoding of a partition.
//!
//! The encoding is a JSON object mapping each list name to its ordered
//! array of `{"id", "title"}` records, columns in board order. There is no
//! schema version.

use crate::error::Result;
use crate::partition::Partition;

/// Encodes a partition as pretty-printed JSON.
pub fn encode(partition: &Partition) -> Result<String> {
    Ok(serde_json::to_string_pretty(partition)?)
}

/// Decodes a partition and checks that no item appears twice.
pub fn decode(text: &str) -> Result<Partition> {
    let partition: Partition = serde_json::from_str(text)?;
    partition.validate()?;
    Ok(partition)
}

#[cfg(test)]
#[path = "codec_tests.rs"]
mod tests;
