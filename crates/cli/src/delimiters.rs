// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Bracket balance checking for `{}`, `[]` and `()`.
//!
//! The text is scanned character by character with no comment or string
//! awareness: a brace inside a string literal counts like any other. The
//! scan is fail-fast and reports only the first defect.

use std::fmt;
use std::path::Path;

use serde::Serialize;

use crate::file_reader;
use crate::scan::{ErrorPolicy, Event, EventKind, Violation, scan};

/// Opening symbols, in the same order as [`CLOSERS`].
pub const OPENERS: [char; 3] = ['{', '[', '('];

/// Closing symbols, in the same order as [`OPENERS`].
pub const CLOSERS: [char; 3] = ['}', ']', ')'];

/// The first structural defect found in a text.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DelimiterDefect {
    /// Closing symbol with nothing open.
    #[error("Extra closing {found} at line {line}")]
    ExtraClosing { found: char, line: usize },

    /// Closing symbol of the wrong type for the innermost open symbol.
    #[error("Mismatched {open} from line {open_line} with {found} at line {line}")]
    Mismatched { open: char, open_line: usize, found: char, line: usize },

    /// Symbol still open at end of input (the most recently opened one).
    #[error("Unclosed {open} from line {open_line}")]
    Unclosed { open: char, open_line: usize },
}

impl DelimiterDefect {
    /// Line the diagnostic points at.
    pub fn line(&self) -> usize {
        match self {
            Self::ExtraClosing { line, .. } | Self::Mismatched { line, .. } => *line,
            Self::Unclosed { open_line, .. } => *open_line,
        }
    }
}

/// Result of a bracket balance check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DelimiterOutcome {
    Balanced,
    Defect(DelimiterDefect),
}

impl DelimiterOutcome {
    pub fn is_balanced(&self) -> bool {
        matches!(self, Self::Balanced)
    }
}

impl fmt::Display for DelimiterOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Balanced => f.write_str("Basic balance check passed"),
            Self::Defect(defect) => defect.fmt(f),
        }
    }
}

/// Closing symbol expected for an opening symbol.
pub fn closer_for(open: char) -> Option<char> {
    OPENERS.iter().position(|&c| c == open).map(|i| CLOSERS[i])
}

/// Lazily turn `text` into bracket events.
///
/// Lines advance on `\n` only, so `\r\n` counts once.
pub fn delimiter_events(text: &str) -> impl Iterator<Item = Event<char>> + '_ {
    let mut line = 1;
    text.char_indices().filter_map(move |(offset, ch)| {
        let current = line;
        if ch == '\n' {
            line += 1;
        }
        let kind = if OPENERS.contains(&ch) {
            EventKind::Open
        } else if CLOSERS.contains(&ch) {
            EventKind::Close
        } else {
            return None;
        };
        Some(Event { offset, line: current, kind, name: ch })
    })
}

/// Check that every bracket in `text` is closed by the right symbol, in order.
pub fn check_balance(text: &str) -> DelimiterOutcome {
    let outcome = scan(delimiter_events(text), ErrorPolicy::Abort, |open, close| {
        closer_for(*open) == Some(*close)
    });

    if let Some(violation) = outcome.violations.into_iter().next() {
        let defect = match violation {
            Violation::ExtraClosing { name, line, .. } => {
                DelimiterDefect::ExtraClosing { found: name, line }
            }
            Violation::Mismatched { open, found, line, .. } => DelimiterDefect::Mismatched {
                open: open.name,
                open_line: open.line,
                found,
                line,
            },
        };
        return DelimiterOutcome::Defect(defect);
    }

    match outcome.unclosed.into_iter().next() {
        Some(top) => DelimiterOutcome::Defect(DelimiterDefect::Unclosed {
            open: top.name,
            open_line: top.line,
        }),
        None => DelimiterOutcome::Balanced,
    }
}

/// Read `path` and check its bracket balance.
pub fn check_syntax(path: &Path) -> anyhow::Result<DelimiterOutcome> {
    let outcome = file_reader::with_text(path, check_balance)?;
    tracing::debug!("{}: {}", path.display(), outcome);
    Ok(outcome)
}

#[cfg(test)]
#[path = "delimiters_tests.rs"]
mod tests;
