// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Translation of drag-and-drop gestures into move descriptors.
//!
//! A column offers three kinds of drop zone: a card, the placeholder shown
//! while the column is empty, and the strip below the last card. The drag
//! source and drop target are plain values handed to [`resolve_drop`]; no
//! drag state is kept between calls.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::item::ItemId;
use crate::partition::{ListName, Partition};
use crate::reconcile::MoveDescriptor;

/// The card picked up by the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DragSource {
    pub item: ItemId,
    pub list: ListName,
}

impl DragSource {
    pub fn new(item: impl Into<ItemId>, list: impl Into<ListName>) -> Self {
        DragSource {
            item: item.into(),
            list: list.into(),
        }
    }
}

/// Where the card was released.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "zone", rename_all = "snake_case")]
pub enum DropTarget {
    /// On the card currently displayed at `index`; the moved card lands just
    /// before it. In the card's own column, dropping onto the card right
    /// below it leaves the order unchanged.
    OnItem { list: ListName, index: usize },
    /// The placeholder of an empty column.
    EmptyList { list: ListName },
    /// The strip below the last card of a column.
    BelowLast { list: ListName },
}

impl DropTarget {
    pub fn list(&self) -> &ListName {
        match self {
            DropTarget::OnItem { list, .. }
            | DropTarget::EmptyList { list }
            | DropTarget::BelowLast { list } => list,
        }
    }
}

/// Resolves a gesture against the board as displayed.
///
/// Display indices are converted to post-removal positions: dropping a card
/// onto a later card of its own column lands it just before that card.
///
/// # Errors
///
/// - [`Error::ItemNotFound`] if the dragged card is not in its source column
/// - [`Error::UnknownList`] if the target column does not exist
pub fn resolve_drop(
    partition: &Partition,
    drag: &DragSource,
    target: &DropTarget,
) -> Result<MoveDescriptor> {
    let from = partition
        .get(drag.list.as_str())
        .and_then(|items| items.iter().position(|item| item.id == drag.item))
        .ok_or(Error::ItemNotFound(drag.item))?;

    let dest = target.list();
    let dest_len = partition
        .get(dest.as_str())
        .map(<[_]>::len)
        .ok_or_else(|| Error::UnknownList(dest.to_string()))?;
    let same_list = *dest == drag.list;

    let index = match target {
        DropTarget::OnItem { index, .. } if same_list && *index > from => index - 1,
        DropTarget::OnItem { index, .. } => *index,
        DropTarget::EmptyList { .. } => 0,
        DropTarget::BelowLast { .. } if same_list => dest_len.saturating_sub(1),
        DropTarget::BelowLast { .. } => dest_len,
    };

    Ok(MoveDescriptor::new(drag.item, dest.clone(), index).from_list(drag.list.clone()))
}

#[cfg(test)]
#[path = "gesture_tests.rs"]
mod tests;
