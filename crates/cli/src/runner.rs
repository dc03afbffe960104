// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Parallel check runner with error recovery.
//!
//! Runs one balance check per file in parallel using rayon, isolating
//! errors so one unreadable file (or a panic) doesn't prevent other files
//! from being checked. Results keep the input order.

use std::path::{Path, PathBuf};

use rayon::prelude::*;
use serde::Serialize;

use crate::delimiters::{self, DelimiterOutcome};
use crate::tags::{self, TagReport};

/// Which balance check to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckKind {
    /// Bracket balance (fail-fast).
    Syntax,
    /// Markup tag balance (collect-all).
    Tags,
}

impl CheckKind {
    pub fn name(self) -> &'static str {
        match self {
            Self::Syntax => "syntax",
            Self::Tags => "tags",
        }
    }
}

/// Outcome of checking one file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileOutcome {
    Syntax(DelimiterOutcome),
    Tags(TagReport),
    /// The file could not be checked.
    Error(String),
}

/// A checked file and its outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileResult {
    pub path: PathBuf,
    pub outcome: FileOutcome,
}

impl FileResult {
    /// True when the file was checked and found balanced.
    pub fn passed(&self) -> bool {
        match &self.outcome {
            FileOutcome::Syntax(outcome) => outcome.is_balanced(),
            FileOutcome::Tags(report) => report.is_balanced(),
            FileOutcome::Error(_) => false,
        }
    }

    /// True when the file could not be checked at all.
    pub fn errored(&self) -> bool {
        matches!(self.outcome, FileOutcome::Error(_))
    }
}

/// The check runner executes one check over many files in parallel.
#[derive(Debug, Default)]
pub struct CheckRunner;

impl CheckRunner {
    pub fn new() -> Self {
        Self
    }

    /// Run `kind` over every file, returning results in input order.
    pub fn run(&self, kind: CheckKind, files: &[PathBuf]) -> Vec<FileResult> {
        files
            .par_iter()
            .map(|path| {
                let outcome = match std::panic::catch_unwind(|| check_file(kind, path)) {
                    Ok(outcome) => outcome,
                    Err(_) => {
                        tracing::warn!("{} check panicked on {}", kind.name(), path.display());
                        FileOutcome::Error("internal error: check panicked".to_string())
                    }
                };
                FileResult { path: path.clone(), outcome }
            })
            .collect()
    }
}

fn check_file(kind: CheckKind, path: &Path) -> FileOutcome {
    let result = match kind {
        CheckKind::Syntax => delimiters::check_syntax(path).map(FileOutcome::Syntax),
        CheckKind::Tags => tags::check_jsx_balance(path).map(FileOutcome::Tags),
    };
    result.unwrap_or_else(|e| FileOutcome::Error(format!("{e:#}")))
}

#[cfg(test)]
#[path = "runner_tests.rs"]
mod tests;
