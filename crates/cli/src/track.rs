// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Line-oriented tracking of a single tag name.
//!
//! Cruder than the tag balance check and useful when that one drowns in
//! noise: only `<tag` and `</tag` are looked at, closers pop whatever is
//! open, and the scan can be limited to a line range. Within a line every
//! opener is pushed before any closer is popped.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::line_index::LineIndex;
use crate::scan::{ErrorPolicy, Event, EventKind, Violation, scan};

/// Inclusive, 1-based line range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LineRange {
    pub start: usize,
    pub end: usize,
}

impl LineRange {
    pub fn contains(&self, line: usize) -> bool {
        (self.start..=self.end).contains(&line)
    }
}

impl fmt::Display for LineRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.start, self.end)
    }
}

/// Invalid `START:END` argument.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LineRangeError {
    #[error("expected START:END, got {0:?}")]
    Format(String),
    #[error("line numbers start at 1")]
    Zero,
    #[error("range start {start} is after end {end}")]
    Reversed { start: usize, end: usize },
}

impl FromStr for LineRange {
    type Err = LineRangeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (start, end) = s.split_once(':').ok_or_else(|| LineRangeError::Format(s.into()))?;
        let parse = |v: &str| v.trim().parse::<usize>().map_err(|_| LineRangeError::Format(s.into()));
        let (start, end) = (parse(start)?, parse(end)?);
        if start == 0 || end == 0 {
            return Err(LineRangeError::Zero);
        }
        if start > end {
            return Err(LineRangeError::Reversed { start, end });
        }
        Ok(Self { start, end })
    }
}

/// Result of tracking one tag.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TrackReport {
    pub tag: String,
    pub range: Option<LineRange>,
    /// Lines holding a closer with nothing open, one entry per closer.
    pub extra_closing: Vec<usize>,
    /// Lines of openers never closed, outermost first.
    pub unclosed: Vec<usize>,
}

impl TrackReport {
    pub fn is_balanced(&self) -> bool {
        self.extra_closing.is_empty() && self.unclosed.is_empty()
    }
}

/// Track `<tag` / `</tag` occurrences line by line.
pub fn track_tag(text: &str, tag: &str, range: Option<LineRange>) -> TrackReport {
    let open = format!("<{tag}");
    let close = format!("</{tag}");

    let total_lines = LineIndex::new(text).line_count();
    if let Some(r) = range
        && r.end > total_lines
    {
        tracing::warn!("line range {} extends past the end of the text ({} lines)", r, total_lines);
    }

    let mut events = Vec::new();
    let mut offset = 0;
    for (idx, content) in text.split('\n').enumerate() {
        let line = idx + 1;
        let line_start = offset;
        offset += content.len() + 1;

        if range.is_some_and(|r| !r.contains(line)) {
            continue;
        }

        let opens = content.matches(open.as_str()).count();
        let closes = content.matches(close.as_str()).count();
        let event = |kind| Event { offset: line_start, line, kind, name: () };
        events.extend(std::iter::repeat_n(event(EventKind::Open), opens));
        events.extend(std::iter::repeat_n(event(EventKind::Close), closes));
    }

    let outcome = scan(events, ErrorPolicy::RecordAndContinue, |_, _| true);

    let extra_closing = outcome
        .violations
        .iter()
        .filter_map(|v| match v {
            Violation::ExtraClosing { line, .. } => Some(*line),
            Violation::Mismatched { .. } => None,
        })
        .collect();

    TrackReport {
        tag: tag.to_string(),
        range,
        extra_closing,
        unclosed: outcome.unclosed.iter().rev().map(|f| f.line).collect(),
    }
}

#[cfg(test)]
#[path = "track_tests.rs"]
mod tests;
