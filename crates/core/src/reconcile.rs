// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Board reconciliation: compute the next partition from a move.
//!
//! [`apply_move`] is a pure function. It borrows the current partition,
//! never modifies it, and returns a freshly owned partition that differs
//! only in the source and destination lists.
//!
//! Destination indices are counted in the destination list as it looks
//! after the item has been taken out. For moves inside one list this means
//! the index refers to the post-removal list, so moving the first of three
//! items to index 2 puts it last.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::item::ItemId;
use crate::partition::{ListName, Location, Partition};

/// How to treat a destination index past the end of the target list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IndexPolicy {
    /// Clamp to the list length, i.e. append.
    #[default]
    Clamp,
    /// Fail with [`Error::IndexOutOfRange`].
    Reject,
}

impl IndexPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            IndexPolicy::Clamp => "clamp",
            IndexPolicy::Reject => "reject",
        }
    }

    /// Maps a requested index onto `[0, len]`.
    pub fn resolve(&self, index: usize, len: usize) -> Result<usize> {
        match self {
            IndexPolicy::Clamp => Ok(index.min(len)),
            IndexPolicy::Reject if index > len => Err(Error::IndexOutOfRange { index, len }),
            IndexPolicy::Reject => Ok(index),
        }
    }
}

impl fmt::Display for IndexPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for IndexPolicy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "clamp" => Ok(IndexPolicy::Clamp),
            "reject" => Ok(IndexPolicy::Reject),
            _ => Err(Error::InvalidIndexPolicy(s.to_string())),
        }
    }
}

/// One user-initiated relocation of an item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveDescriptor {
    /// The item being moved.
    pub item: ItemId,
    /// List the caller believes holds the item. Looked up when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<ListName>,
    /// Target list, possibly the same as the source.
    pub dest: ListName,
    /// Target position within `dest`, counted after the item is removed.
    pub index: usize,
}

impl MoveDescriptor {
    pub fn new(item: impl Into<ItemId>, dest: impl Into<ListName>, index: usize) -> Self {
        MoveDescriptor {
            item: item.into(),
            source: None,
            dest: dest.into(),
            index,
        }
    }

    /// Pins the source list instead of scanning for it.
    pub fn from_list(mut self, source: impl Into<ListName>) -> Self {
        self.source = Some(source.into());
        self
    }
}

/// Applies `mv` to `partition` with the default [`IndexPolicy::Clamp`].
///
/// # Errors
///
/// - [`Error::ItemNotFound`] if the item is in no list, or not in the supplied source list
/// - [`Error::UnknownList`] if the destination list does not exist
pub fn apply_move(partition: &Partition, mv: &MoveDescriptor) -> Result<Partition> {
    apply_move_with(partition, mv, IndexPolicy::Clamp)
}

/// Applies `mv` to `partition`, resolving the destination index with `policy`.
///
/// Under [`IndexPolicy::Reject`] a move inside one list accepts indices up to
/// the list's length before removal, so the append gesture on the item's own
/// list is never rejected.
///
/// On error nothing observable changes: `partition` is only borrowed.
pub fn apply_move_with(
    partition: &Partition,
    mv: &MoveDescriptor,
    policy: IndexPolicy,
) -> Result<Partition> {
    let from = locate_source(partition, mv)?;
    if !partition.contains_list(mv.dest.as_str()) {
        return Err(Error::UnknownList(mv.dest.to_string()));
    }

    let mut next = partition.clone();

    let removed = next
        .list_mut(from.list.as_str())
        .map(|items| items.remove(from.index))
        .ok_or(Error::ItemNotFound(mv.item))?;

    // Same-list moves see the post-removal list here.
    let dest = next
        .list_mut(mv.dest.as_str())
        .ok_or_else(|| Error::UnknownList(mv.dest.to_string()))?;
    // Inside one list the slot past the last card, as displayed before the
    // removal, is still a valid drop position; it resolves to the end.
    let len = dest.len();
    let bound = if from.list == mv.dest { len + 1 } else { len };
    let index = policy.resolve(mv.index, bound)?.min(len);
    dest.insert(index, removed);

    Ok(next)
}

fn locate_source(partition: &Partition, mv: &MoveDescriptor) -> Result<Location> {
    match &mv.source {
        Some(list) => partition
            .get(list.as_str())
            .and_then(|items| items.iter().position(|item| item.id == mv.item))
            .map(|index| Location {
                list: list.clone(),
                index,
            })
            .ok_or(Error::ItemNotFound(mv.item)),
        None => partition
            .locate(mv.item)
            .ok_or(Error::ItemNotFound(mv.item)),
    }
}

#[cfg(test)]
#[path = "reconcile_tests.rs"]
mod tests;
