// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! The board a new project starts with.

use crate::item::Item;
use crate::partition::Partition;

/// Column names of the default board, in display order.
pub const DEFAULT_LISTS: [&str; 4] = ["BACKLOG", "IN_PROGRESS", "REVIEW", "DONE"];

/// Four-column work board seeded with nine sample cards.
pub fn default_partition() -> Partition {
    Partition::new()
        .list(
            "BACKLOG",
            vec![
                Item::new(1, "Design login page"),
                Item::new(2, "Create API contract"),
                Item::new(3, "Define user roles & permissions"),
            ],
        )
        .list(
            "IN_PROGRESS",
            vec![
                Item::new(4, "Implement authentication"),
                Item::new(5, "Build dashboard layout"),
            ],
        )
        .list(
            "REVIEW",
            vec![
                Item::new(6, "Review API integration"),
                Item::new(7, "UI consistency check"),
            ],
        )
        .list(
            "DONE",
            vec![
                Item::new(8, "Project setup & repo init"),
                Item::new(9, "Development environment ready"),
            ],
        )
}
