// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Stack scan over an ordered event stream.
//!
//! Every matcher in the crate reduces its input to a sequence of [`Event`]s
//! ordered by source offset and hands it to [`scan`]. The scan keeps a stack
//! of open [`Frame`]s and reports closers that have no frame, or that do not
//! pair with the innermost frame. What happens after a violation is decided
//! by the [`ErrorPolicy`]:
//!
//! - [`ErrorPolicy::Abort`]: stop at the first violation. Events after it are
//!   never pulled from the iterator.
//! - [`ErrorPolicy::RecordAndContinue`]: record the violation and keep going.
//!   On a mismatch the popped frame is pushed back, so the opener is assumed
//!   correct and the closer is treated as the typo.

use serde::Serialize;

/// Kind of a structural event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    Open,
    Close,
    SelfClose,
    FragmentOpen,
    FragmentClose,
}

impl EventKind {
    /// Whether this event pushes a frame.
    pub fn opens(self) -> bool {
        matches!(self, Self::Open | Self::FragmentOpen)
    }

    /// Whether this event must pair with the innermost frame.
    pub fn closes(self) -> bool {
        matches!(self, Self::Close | Self::FragmentClose)
    }
}

/// A single structural occurrence in the source text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event<N> {
    /// Byte offset into the scanned text.
    pub offset: usize,
    /// 1-based line of the occurrence.
    pub line: usize,
    pub kind: EventKind,
    /// Delimiter symbol or tag name.
    pub name: N,
}

/// An open construct still waiting for its closer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Frame<N> {
    pub name: N,
    /// 1-based line where the construct was opened.
    pub line: usize,
}

/// What the scan does after detecting a violation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ErrorPolicy {
    /// Stop at the first violation (fail-fast).
    #[default]
    Abort,
    /// Record the violation and keep scanning (collect-all).
    RecordAndContinue,
}

/// A closer that could not be resolved against the stack.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Violation<N> {
    /// Closer found while the stack was empty.
    ExtraClosing { kind: EventKind, name: N, line: usize },
    /// Closer that does not pair with the innermost frame.
    Mismatched {
        open: Frame<N>,
        kind: EventKind,
        found: N,
        line: usize,
    },
}

impl<N> Violation<N> {
    /// Line of the offending closer.
    pub fn line(&self) -> usize {
        match self {
            Self::ExtraClosing { line, .. } | Self::Mismatched { line, .. } => *line,
        }
    }
}

/// Result of one scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanOutcome<N> {
    /// Violations in the order they were detected.
    pub violations: Vec<Violation<N>>,
    /// Frames left open, innermost first.
    pub unclosed: Vec<Frame<N>>,
    /// True when [`ErrorPolicy::Abort`] stopped the scan early.
    pub aborted: bool,
}

impl<N> ScanOutcome<N> {
    pub fn is_balanced(&self) -> bool {
        self.violations.is_empty() && self.unclosed.is_empty()
    }
}

/// Run the stack discipline over `events`.
///
/// `pairs(open, close)` decides whether a closer named `close` resolves a
/// frame named `open`. Self-close events pop the innermost frame whatever its
/// name, and are a no-op on an empty stack.
pub fn scan<N, I, P>(events: I, policy: ErrorPolicy, pairs: P) -> ScanOutcome<N>
where
    N: Clone,
    I: IntoIterator<Item = Event<N>>,
    P: Fn(&N, &N) -> bool,
{
    let mut stack: Vec<Frame<N>> = Vec::new();
    let mut violations = Vec::new();
    let mut aborted = false;

    for event in events {
        match event.kind {
            EventKind::Open | EventKind::FragmentOpen => {
                stack.push(Frame { name: event.name, line: event.line });
            }
            EventKind::SelfClose => {
                stack.pop();
            }
            EventKind::Close | EventKind::FragmentClose => {
                let Some(open) = stack.pop() else {
                    violations.push(Violation::ExtraClosing {
                        kind: event.kind,
                        name: event.name,
                        line: event.line,
                    });
                    if policy == ErrorPolicy::Abort {
                        aborted = true;
                        break;
                    }
                    continue;
                };

                if pairs(&open.name, &event.name) {
                    continue;
                }

                violations.push(Violation::Mismatched {
                    open: open.clone(),
                    kind: event.kind,
                    found: event.name,
                    line: event.line,
                });
                match policy {
                    ErrorPolicy::Abort => {
                        aborted = true;
                        break;
                    }
                    ErrorPolicy::RecordAndContinue => stack.push(open),
                }
            }
        }
    }

    stack.reverse();
    ScanOutcome { violations, unclosed: stack, aborted }
}

#[cfg(test)]
#[path = "scan_tests.rs"]
mod tests;
