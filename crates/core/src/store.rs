// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Persistence adapters for the board.
//!
//! A store holds exactly one encoded partition. Writes are synchronous and
//! best-effort: there is no transaction log, and when two writers race the
//! last write wins.

use std::cell::RefCell;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::codec;
use crate::error::Result;
use crate::partition::Partition;

/// Loads and saves the board as text.
pub trait Store {
    /// Returns the stored partition, or `None` if nothing was saved yet.
    fn load(&self) -> Result<Option<Partition>>;

    /// Replaces the stored partition.
    fn save(&self, partition: &Partition) -> Result<()>;
}

/// Startup load: the stored board if there is one, otherwise `default()`.
pub fn load_or<S, F>(store: &S, default: F) -> Result<Partition>
where
    S: Store + ?Sized,
    F: FnOnce() -> Partition,
{
    Ok(store.load()?.unwrap_or_else(default))
}

/// Board stored as a single JSON file.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl AsRef<Path>) -> Self {
        FileStore {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self.path.file_name().unwrap_or_default().to_os_string();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

impl Store for FileStore {
    fn load(&self) -> Result<Option<Partition>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let text = fs::read_to_string(&self.path)?;
        codec::decode(&text).map(Some)
    }

    /// Writes a sibling temp file, syncs it, then renames it over the board.
    fn save(&self, partition: &Partition) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let text = codec::encode(partition)?;
        let temp = self.temp_path();
        let mut file = File::create(&temp)?;
        file.write_all(text.as_bytes())?;
        file.write_all(b"\n")?;
        file.sync_all()?;
        fs::rename(&temp, &self.path)?;

        Ok(())
    }
}

/// In-process store keeping the encoded text, like a browser's local storage slot.
#[derive(Debug, Default)]
pub struct MemoryStore {
    slot: RefCell<Option<String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts with `text` already stored.
    pub fn with_text(text: impl Into<String>) -> Self {
        MemoryStore {
            slot: RefCell::new(Some(text.into())),
        }
    }

    /// The raw stored text, if any.
    pub fn text(&self) -> Option<String> {
        self.slot.borrow().clone()
    }
}

impl Store for MemoryStore {
    fn load(&self) -> Result<Option<Partition>> {
        match self.slot.borrow().as_deref() {
            Some(text) => codec::decode(text).map(Some),
            None => Ok(None),
        }
    }

    fn save(&self, partition: &Partition) -> Result<()> {
        let text = codec::encode(partition)?;
        *self.slot.borrow_mut() = Some(text);
        Ok(())
    }
}

#[cfg(test)]
#[path = "store_tests.rs"]
mod tests;
