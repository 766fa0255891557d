// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! kb-core: Board model and reconciliation for the kb task board
//!
//! This crate provides the partition of cards into columns, the pure
//! reconciler that applies one move at a time, drop-gesture resolution,
//! and the text codec and stores used to persist the board. It performs no
//! logging; callers decide how to report errors.

pub mod codec;
pub mod defaults;
pub mod error;
pub mod gesture;
pub mod item;
pub mod partition;
pub mod reconcile;
pub mod store;

pub use defaults::{default_partition, DEFAULT_LISTS};
pub use error::{Error, Result};
pub use gesture::{resolve_drop, DragSource, DropTarget};
pub use item::{Item, ItemId};
pub use partition::{ListName, Location, Partition};
pub use reconcile::{apply_move, apply_move_with, IndexPolicy, MoveDescriptor};
pub use store::{load_or, FileStore, MemoryStore, Store};
