// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Check target resolution.
//!
//! Explicit file arguments are always checked. Directory arguments are
//! walked with the `ignore` crate (gitignore-aware) and filtered by
//! extension and exclude globs.

use std::path::{Path, PathBuf};

use globset::{Glob, GlobSet, GlobSetBuilder};
use ignore::WalkBuilder;

/// A file discovered during walking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WalkedFile {
    pub path: PathBuf,
}

/// Statistics from one walk.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WalkStats {
    /// Files selected for checking.
    pub files_found: usize,
    /// Files skipped by extension or exclude pattern.
    pub files_skipped: usize,
}

/// Configuration for the file walker.
#[derive(Debug, Clone)]
pub struct WalkerConfig {
    /// Maximum directory depth (None = unlimited).
    pub max_depth: Option<usize>,
    /// Respect .gitignore files.
    pub git_ignore: bool,
    /// Skip hidden files and directories.
    pub hidden: bool,
    /// Glob patterns relative to the walk root to skip.
    pub exclude_patterns: Vec<String>,
    /// Extensions to keep (empty = keep all).
    pub extensions: Vec<String>,
}

impl Default for WalkerConfig {
    fn default() -> Self {
        Self {
            max_depth: None,
            git_ignore: true,
            hidden: true,
            exclude_patterns: Vec::new(),
            extensions: Vec::new(),
        }
    }
}

/// Walks directories and selects files to check.
pub struct FileWalker {
    config: WalkerConfig,
    exclude: GlobSet,
}

impl FileWalker {
    pub fn new(config: WalkerConfig) -> Self {
        let exclude = build_globset(&config.exclude_patterns);
        Self { config, exclude }
    }

    /// Walk `root` and collect selected files, sorted by path.
    pub fn walk_collect(&self, root: &Path) -> (Vec<WalkedFile>, WalkStats) {
        let mut builder = WalkBuilder::new(root);
        builder
            .max_depth(self.config.max_depth)
            .git_ignore(self.config.git_ignore)
            .git_exclude(self.config.git_ignore)
            .git_global(self.config.git_ignore)
            .hidden(self.config.hidden);

        let mut files = Vec::new();
        let mut stats = WalkStats::default();

        for entry in builder.build() {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    tracing::warn!("walk error: {}", e);
                    continue;
                }
            };
            if !entry.file_type().is_some_and(|t| t.is_file()) {
                continue;
            }

            let path = entry.into_path();
            let relative = path.strip_prefix(root).unwrap_or(&path);
            if !self.keeps_extension(&path) || self.exclude.is_match(relative) {
                stats.files_skipped += 1;
                continue;
            }
            files.push(WalkedFile { path });
        }

        files.sort_by(|a, b| a.path.cmp(&b.path));
        stats.files_found = files.len();
        (files, stats)
    }

    fn keeps_extension(&self, path: &Path) -> bool {
        if self.config.extensions.is_empty() {
            return true;
        }
        path.extension()
            .and_then(|e| e.to_str())
            .is_some_and(|ext| self.config.extensions.iter().any(|e| e.eq_ignore_ascii_case(ext)))
    }
}

/// Compile exclude patterns, skipping (and warning about) invalid ones.
fn build_globset(patterns: &[String]) -> GlobSet {
    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        match Glob::new(pattern) {
            Ok(glob) => {
                builder.add(glob);
            }
            Err(_) => tracing::warn!("invalid glob pattern: {}", pattern),
        }
    }
    builder.build().unwrap_or_else(|e| {
        tracing::warn!("failed to build exclude patterns: {}", e);
        GlobSet::empty()
    })
}

/// Expand command-line targets into the list of files to check.
///
/// Files are kept as given (even when their extension is not selected);
/// directories are walked. Missing paths are kept so the check reports them.
pub fn resolve_targets(cwd: &Path, targets: &[PathBuf], walker: &FileWalker) -> Vec<PathBuf> {
    let mut files = Vec::new();
    for target in targets {
        let full = if target.is_absolute() { target.clone() } else { cwd.join(target) };
        if full.is_dir() {
            let (walked, stats) = walker.walk_collect(&full);
            tracing::debug!(
                "{}: {} file(s) selected, {} skipped",
                target.display(),
                stats.files_found,
                stats.files_skipped
            );
            files.extend(walked.into_iter().map(|f| display_path(cwd, f.path)));
        } else {
            files.push(target.clone());
        }
    }
    files
}

/// Prefer cwd-relative paths for display.
fn display_path(cwd: &Path, path: PathBuf) -> PathBuf {
    match path.strip_prefix(cwd) {
        Ok(relative) => relative.to_path_buf(),
        Err(_) => path,
    }
}

#[cfg(test)]
#[path = "walker_tests.rs"]
mod tests;
