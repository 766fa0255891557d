// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Diagnostic logging for the CLI.
//!
//! Logs go to stderr so they never mix with board output. The filter comes
//! from `KB_LOG` (e.g. `KB_LOG=debug` or `KB_LOG=kbrs=trace`), defaulting to
//! warnings only.

use tracing_subscriber::EnvFilter;

use crate::env;

const DEFAULT_FILTER: &str = "warn";

/// Builds the filter from `KB_LOG`.
pub fn filter() -> EnvFilter {
    filter_from(env::kb_log())
}

/// Parses `directives`, falling back to the default when absent or invalid.
fn filter_from(directives: Option<String>) -> EnvFilter {
    directives
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_FILTER))
}

/// Installs the global subscriber. Safe to call more than once.
pub fn setup_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter())
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init();
}

#[cfg(test)]
#[path = "logging_tests.rs"]
mod tests;
