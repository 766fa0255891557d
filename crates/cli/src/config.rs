// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Project configuration management.
//!
//! Configuration is stored in `.kanban/config.toml` and includes:
//! - `lists`: Column names used when creating an empty board
//! - `board_file`: Where the encoded board lives (relative to `.kanban/` or absolute)
//! - `index_policy`: How out-of-range drop positions are handled (`clamp` or `reject`)

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use kb_core::{IndexPolicy, DEFAULT_LISTS};

use crate::error::{Error, Result};

const WORK_DIR_NAME: &str = ".kanban";
const CONFIG_FILE_NAME: &str = "config.toml";
const BOARD_FILE_NAME: &str = "board.json";

/// Project configuration stored in `.kanban/config.toml`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Column names, in display order.
    #[serde(default = "default_lists")]
    pub lists: Vec<String>,
    /// Board file path (relative to the `.kanban/` directory or absolute).
    #[serde(default = "default_board_file")]
    pub board_file: String,
    /// Out-of-range index handling for `kb move --index`.
    #[serde(default)]
    pub index_policy: IndexPolicy,
}

fn default_lists() -> Vec<String> {
    DEFAULT_LISTS.iter().map(|s| s.to_string()).collect()
}

fn default_board_file() -> String {
    BOARD_FILE_NAME.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Config {
            lists: default_lists(),
            board_file: default_board_file(),
            index_policy: IndexPolicy::default(),
        }
    }
}

/// Returns true if `name` can be used as a list name.
pub fn validate_list_name(name: &str) -> bool {
    !name.is_empty() && !name.chars().any(char::is_whitespace)
}

impl Config {
    /// Creates a config with the given column names.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoLists`] for an empty list and [`Error::InvalidListName`]
    /// for blank names, names containing whitespace, or repeated names.
    pub fn with_lists(lists: Vec<String>) -> Result<Self> {
        if lists.is_empty() {
            return Err(Error::NoLists);
        }
        for (i, name) in lists.iter().enumerate() {
            if !validate_list_name(name) || lists[..i].contains(name) {
                return Err(Error::InvalidListName(name.clone()));
            }
        }
        Ok(Config {
            lists,
            ..Config::default()
        })
    }

    /// Loads configuration from the given `.kanban/` directory.
    pub fn load(work_dir: &Path) -> Result<Self> {
        let config_path = work_dir.join(CONFIG_FILE_NAME);
        let content = fs::read_to_string(&config_path)
            .map_err(|e| Error::Config(format!("failed to read config: {}", e)))?;
        let config: Config = toml::from_str(&content)
            .map_err(|e| Error::Config(format!("failed to parse config: {}", e)))?;
        Ok(config)
    }

    /// Saves configuration to the given `.kanban/` directory.
    pub fn save(&self, work_dir: &Path) -> Result<()> {
        let config_path = work_dir.join(CONFIG_FILE_NAME);
        let content = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("failed to serialize config: {}", e)))?;
        fs::write(&config_path, content)?;
        Ok(())
    }
}

/// Find the .kanban directory by walking up from `start`.
pub fn find_work_dir(start: &Path) -> Result<PathBuf> {
    let mut current = start.to_path_buf();
    loop {
        let work_dir = current.join(WORK_DIR_NAME);
        if work_dir.is_dir() {
            return Ok(work_dir);
        }
        if !current.pop() {
            return Err(Error::NotInitialized);
        }
    }
}

/// Get the board file path from config
pub fn get_board_path(work_dir: &Path, config: &Config) -> PathBuf {
    let board = Path::new(&config.board_file);
    if board.is_absolute() {
        board.to_path_buf()
    } else {
        work_dir.join(board)
    }
}

/// Initialize a new .kanban directory at the given path
pub fn init_work_dir(path: &Path, config: &Config) -> Result<PathBuf> {
    let work_dir = path.join(WORK_DIR_NAME);

    if work_dir.join(CONFIG_FILE_NAME).exists() {
        return Err(Error::AlreadyInitialized(work_dir.display().to_string()));
    }

    fs::create_dir_all(&work_dir)?;
    config.save(&work_dir)?;

    Ok(work_dir)
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
