// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! The live board: current partition plus the store it is persisted to.
//!
//! Each gesture becomes one move applied through the reconciler. A failed
//! move leaves the board as it was. A successful move replaces the board and
//! writes it back; that write is fire-and-forget, so a storage failure is
//! logged and the in-memory board stays authoritative.

use kb_core::{
    apply_move_with, load_or, resolve_drop, DragSource, DropTarget, IndexPolicy, Location,
    MoveDescriptor, Partition, Store,
};
use tracing::{debug, warn};

use crate::error::{Error, Result};

/// Owns the current board state and its persistence adapter.
pub struct BoardSession<S: Store> {
    board: Partition,
    store: S,
    policy: IndexPolicy,
}

impl<S: Store> BoardSession<S> {
    /// Loads the stored board, or starts from `default()` when nothing is stored yet.
    pub fn open(
        store: S,
        policy: IndexPolicy,
        default: impl FnOnce() -> Partition,
    ) -> Result<Self> {
        let board = load_or(&store, default)?;
        debug!(lists = board.list_count(), items = board.len(), "board loaded");
        Ok(BoardSession {
            board,
            store,
            policy,
        })
    }

    pub fn board(&self) -> &Partition {
        &self.board
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn policy(&self) -> IndexPolicy {
        self.policy
    }

    /// Applies one move and persists the result.
    ///
    /// Returns where the item was and where it landed.
    pub fn apply(&mut self, mv: &MoveDescriptor) -> Result<(Location, Location)> {
        let from = self
            .board
            .locate(mv.item)
            .ok_or_else(|| Error::ItemNotFound(mv.item.to_string()))?;
        let next = apply_move_with(&self.board, mv, self.policy)
            .map_err(|e| Error::from_core(e, &self.board))?;
        let to = next
            .locate(mv.item)
            .ok_or_else(|| Error::ItemNotFound(mv.item.to_string()))?;

        debug!(
            item = %mv.item,
            from = %from.list,
            to = %to.list,
            index = to.index,
            "move applied"
        );
        self.board = next;
        self.persist();
        Ok((from, to))
    }

    /// Resolves a drag-and-drop gesture and applies it.
    pub fn drop_on(
        &mut self,
        drag: &DragSource,
        target: &DropTarget,
    ) -> Result<(Location, Location)> {
        let mv = resolve_drop(&self.board, drag, target)
            .map_err(|e| Error::from_core(e, &self.board))?;
        self.apply(&mv)
    }

    /// Replaces the whole board, e.g. on reset.
    pub fn replace(&mut self, board: Partition) -> Result<()> {
        board.validate()?;
        self.board = board;
        self.persist();
        Ok(())
    }

    /// Writes the current board out. Failures are logged, never returned.
    pub fn persist(&self) {
        if let Err(e) = self.store.save(&self.board) {
            warn!(error = %e, "failed to save board");
        }
    }
}

#[cfg(test)]
#[path = "session_tests.rs"]
mod tests;
