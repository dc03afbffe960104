// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Tag event extraction.
//!
//! Five independent scans over the text, merged into one stream ordered by
//! offset:
//!
//! | scan           | matches                                   |
//! |----------------|-------------------------------------------|
//! | tag-open       | `<name`, name not starting with a digit   |
//! | tag-close      | `</name>`                                 |
//! | self-close     | `/>`, including the tail of `</>`         |
//! | fragment-open  | `<>`                                      |
//! | fragment-close | `</>`                                     |
//!
//! Names are made of ASCII letters, digits and `.`. The scans know nothing
//! about strings or expressions, so `a<b` inside code reads as a tag-open.
//! A `</>` yields a fragment-close followed by a self-close one byte later,
//! so a fragment nested inside a tag also pops that tag.

use std::sync::LazyLock;

use regex::Regex;

use super::FRAGMENT;
use crate::line_index::LineIndex;
use crate::scan::{Event, EventKind};

/// `<` directly followed by a name that does not start with whitespace or a digit.
#[allow(clippy::expect_used)]
static TAG_OPEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<([A-Za-z.][A-Za-z0-9.]*)").expect("valid regex pattern"));

/// `</name>`.
#[allow(clippy::expect_used)]
static TAG_CLOSE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"</([A-Za-z0-9.]+)>").expect("valid regex pattern"));

const SELF_CLOSE: &str = "/>";
const FRAGMENT_OPEN: &str = "<>";
const FRAGMENT_CLOSE: &str = "</>";

/// Extract every tag event from `text`, ordered by offset.
///
/// Events sharing an offset keep scan order: open, close, self-close,
/// fragment-open, fragment-close.
pub fn extract_events(text: &str) -> Vec<Event<String>> {
    let lines = LineIndex::new(text);
    let event = |offset: usize, kind: EventKind, name: &str| Event {
        offset,
        line: lines.line_of(offset),
        kind,
        name: name.to_string(),
    };

    let mut events = Vec::new();

    for caps in TAG_OPEN.captures_iter(text) {
        if let (Some(whole), Some(name)) = (caps.get(0), caps.get(1)) {
            events.push(event(whole.start(), EventKind::Open, name.as_str()));
        }
    }

    for caps in TAG_CLOSE.captures_iter(text) {
        if let (Some(whole), Some(name)) = (caps.get(0), caps.get(1)) {
            events.push(event(whole.start(), EventKind::Close, name.as_str()));
        }
    }

    // Bare `/>`: the tail of every `</>` counts too.
    for (offset, _) in text.match_indices(SELF_CLOSE) {
        events.push(event(offset, EventKind::SelfClose, ""));
    }

    for (offset, _) in text.match_indices(FRAGMENT_OPEN) {
        events.push(event(offset, EventKind::FragmentOpen, FRAGMENT));
    }

    for (offset, _) in text.match_indices(FRAGMENT_CLOSE) {
        events.push(event(offset, EventKind::FragmentClose, FRAGMENT));
    }

    // Stable: ties keep the scan order above.
    events.sort_by_key(|e| e.offset);
    events
}

#[cfg(test)]
#[path = "events_tests.rs"]
mod tests;
