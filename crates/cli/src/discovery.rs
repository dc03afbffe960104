// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Config file discovery.
//!
//! Walks from a starting directory up to the git root looking for nestcheck.toml.

use std::path::{Path, PathBuf};

use crate::config::defaults::CONFIG_FILE;

/// Find nestcheck.toml starting from `start_dir` and walking up to git root.
pub fn find_config(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE);
        if config_path.is_file() {
            return Some(config_path);
        }

        // Stop at git root
        if current.join(".git").exists() {
            return None;
        }

        match current.parent() {
            Some(parent) => current = parent.to_path_buf(),
            None => return None,
        }
    }
}

/// Directory discovery should start from for the given check targets.
///
/// Uses the first target: itself when it is a directory, its parent when it
/// is a file. Falls back to `cwd`.
pub fn search_root(cwd: &Path, targets: &[PathBuf]) -> PathBuf {
    let Some(first) = targets.first() else {
        return cwd.to_path_buf();
    };
    let first = if first.is_absolute() { first.clone() } else { cwd.join(first) };
    if first.is_dir() {
        first
    } else {
        first
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| cwd.to_path_buf())
    }
}

#[cfg(test)]
#[path = "discovery_tests.rs"]
mod tests;
