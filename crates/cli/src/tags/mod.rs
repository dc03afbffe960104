// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Markup tag balance checking.
//!
//! Comments are stripped, tag events are extracted by pattern scans, and the
//! merged stream is checked with a collect-all stack scan. A closer that does
//! not match the innermost open tag is reported and the open tag stays on the
//! stack, so one typo does not cascade into every enclosing tag.
//!
//! Line numbers refer to the comment-stripped text.

pub mod comments;
pub mod events;

use std::path::Path;

use serde::Serialize;

use crate::file_reader;
use crate::scan::{ErrorPolicy, EventKind, Frame, Violation, scan};

/// Name given to `<>` ... `</>` frames.
pub const FRAGMENT: &str = "Fragment";

/// A closer the scan could not resolve.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TagViolation {
    #[error("Found closing tag </{name}> at line {line} with no opened tag.")]
    ExtraClosingTag { name: String, line: usize },

    #[error("Found closing fragment </> at line {line} with no opened fragment.")]
    ExtraClosingFragment { line: usize },

    #[error(
        "Mismatched tag at line {line}. Expected </{expected}> (opened at {opened_at}), but found </{found}>."
    )]
    Mismatched { expected: String, opened_at: usize, found: String, line: usize },
}

impl From<Violation<String>> for TagViolation {
    fn from(violation: Violation<String>) -> Self {
        match violation {
            Violation::ExtraClosing { kind: EventKind::FragmentClose, line, .. } => {
                Self::ExtraClosingFragment { line }
            }
            Violation::ExtraClosing { name, line, .. } => Self::ExtraClosingTag { name, line },
            Violation::Mismatched { open, found, line, .. } => Self::Mismatched {
                expected: open.name,
                opened_at: open.line,
                found,
                line,
            },
        }
    }
}

/// Everything found by one tag balance check.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TagReport {
    /// Violations in document order.
    pub violations: Vec<TagViolation>,
    /// Tags still open at end of input, innermost first.
    pub unclosed: Vec<Frame<String>>,
}

impl TagReport {
    pub fn is_balanced(&self) -> bool {
        self.violations.is_empty() && self.unclosed.is_empty()
    }
}

/// Check tag nesting in `text`.
pub fn check_tag_balance(text: &str) -> TagReport {
    let stripped = comments::strip_comments(text);
    let events = events::extract_events(&stripped);
    tracing::debug!("extracted {} tag events", events.len());

    let outcome = scan(events, ErrorPolicy::RecordAndContinue, |open, close| open == close);

    TagReport {
        violations: outcome.violations.into_iter().map(TagViolation::from).collect(),
        unclosed: outcome.unclosed,
    }
}

/// Read `path` and check its tag nesting.
pub fn check_jsx_balance(path: &Path) -> anyhow::Result<TagReport> {
    let report = file_reader::with_text(path, check_tag_balance)?;
    tracing::debug!(
        "{}: {} violation(s), {} unclosed",
        path.display(),
        report.violations.len(),
        report.unclosed.len()
    );
    Ok(report)
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
