// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! The full board state: items partitioned into named, ordered lists.
//!
//! Column order is the insertion order of the underlying map and survives
//! a trip through the text codec. Every item id lives in exactly one list,
//! exactly once; [`Partition::validate`] checks this for data that came
//! from outside the reconciler.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::collections::HashMap;
use std::fmt;

use crate::error::{Error, Result};
use crate::item::{Item, ItemId};

/// Label of one board column, e.g. `BACKLOG` or `IN_PROGRESS`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ListName(String);

impl ListName {
    pub fn new(name: impl Into<String>) -> Self {
        ListName(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Human-facing label: underscores become spaces (`IN_PROGRESS` -> `IN PROGRESS`).
    pub fn label(&self) -> String {
        self.0.replace('_', " ")
    }
}

impl Borrow<str> for ListName {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ListName {
    fn from(name: &str) -> Self {
        ListName(name.to_string())
    }
}

impl From<String> for ListName {
    fn from(name: String) -> Self {
        ListName(name)
    }
}

impl fmt::Display for ListName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Where an item currently sits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    pub list: ListName,
    pub index: usize,
}

/// Mapping from list name to the ordered items of that list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Partition {
    lists: IndexMap<ListName, Vec<Item>>,
}

impl Partition {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a board with the given columns, all empty.
    pub fn with_lists<I, N>(names: I) -> Self
    where
        I: IntoIterator<Item = N>,
        N: Into<ListName>,
    {
        names
            .into_iter()
            .map(|name| (name.into(), Vec::new()))
            .collect()
    }

    /// Appends a column, replacing the items of an existing column with the same name.
    pub fn insert_list(&mut self, name: impl Into<ListName>, items: Vec<Item>) {
        self.lists.insert(name.into(), items);
    }

    /// Builder form of [`Partition::insert_list`].
    pub fn list(mut self, name: impl Into<ListName>, items: Vec<Item>) -> Self {
        self.insert_list(name, items);
        self
    }

    /// Iterates columns in board order.
    pub fn lists(&self) -> impl Iterator<Item = (&ListName, &[Item])> {
        self.lists.iter().map(|(name, items)| (name, items.as_slice()))
    }

    pub fn list_names(&self) -> impl Iterator<Item = &ListName> {
        self.lists.keys()
    }

    pub fn get(&self, list: &str) -> Option<&[Item]> {
        self.lists.get(list).map(Vec::as_slice)
    }

    pub fn contains_list(&self, list: &str) -> bool {
        self.lists.contains_key(list)
    }

    pub(crate) fn list_mut(&mut self, list: &str) -> Option<&mut Vec<Item>> {
        self.lists.get_mut(list)
    }

    /// Finds the list and index holding `id` by scanning every column.
    pub fn locate(&self, id: ItemId) -> Option<Location> {
        self.lists.iter().find_map(|(name, items)| {
            items
                .iter()
                .position(|item| item.id == id)
                .map(|index| Location {
                    list: name.clone(),
                    index,
                })
        })
    }

    pub fn item(&self, id: ItemId) -> Option<&Item> {
        self.lists
            .values()
            .flat_map(|items| items.iter())
            .find(|item| item.id == id)
    }

    /// All item ids, column by column, in board order.
    pub fn item_ids(&self) -> Vec<ItemId> {
        self.lists
            .values()
            .flat_map(|items| items.iter().map(|item| item.id))
            .collect()
    }

    /// Total number of items across all columns.
    pub fn len(&self) -> usize {
        self.lists.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.lists.values().all(Vec::is_empty)
    }

    pub fn list_count(&self) -> usize {
        self.lists.len()
    }

    /// Checks that every item id appears exactly once across the board.
    pub fn validate(&self) -> Result<()> {
        let mut seen: HashMap<ItemId, &ListName> = HashMap::with_capacity(self.len());
        for (name, items) in &self.lists {
            for item in items {
                if let Some(first) = seen.insert(item.id, name) {
                    return Err(Error::DuplicateItem {
                        id: item.id,
                        first: first.to_string(),
                        second: name.to_string(),
                    });
                }
            }
        }
        Ok(())
    }
}

impl FromIterator<(ListName, Vec<Item>)> for Partition {
    fn from_iter<T: IntoIterator<Item = (ListName, Vec<Item>)>>(iter: T) -> Self {
        Partition {
            lists: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
#[path = "partition_tests.rs"]
mod tests;
