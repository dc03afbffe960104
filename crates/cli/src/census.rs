// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Raw occurrence counts of structural literals.
//!
//! A quick sanity check before reaching for the balance checks: if the
//! number of `{` and `}` differ, something is unclosed somewhere. Counts are
//! literal and ignore comments and strings.

use aho_corasick::{AhoCorasick, BuildError, MatchKind};
use serde::Serialize;

/// Tag counted when none is given.
pub const DEFAULT_TAG: &str = "div";

/// Occurrence counts for one text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Census {
    pub tag: String,
    pub open_braces: usize,
    pub close_braces: usize,
    pub open_parens: usize,
    pub close_parens: usize,
    pub fragment_opens: usize,
    pub fragment_closes: usize,
    /// Occurrences of `<tag` (also matches longer names such as `<divider`).
    pub tag_opens: usize,
    /// Occurrences of `</tag>`.
    pub tag_closes: usize,
}

/// Count braces, parens, fragments and `tag` occurrences in one pass.
///
/// The patterns never overlap at a starting position, so a single
/// leftmost-first pass gives the same counts as searching for each literal
/// separately.
pub fn count(text: &str, tag: &str) -> Result<Census, BuildError> {
    let open_tag = format!("<{tag}");
    let close_tag = format!("</{tag}>");
    let patterns = ["{", "}", "(", ")", "<>", "</>", open_tag.as_str(), close_tag.as_str()];

    let matcher = AhoCorasick::builder()
        .match_kind(MatchKind::LeftmostFirst)
        .build(patterns)?;

    let mut counts = [0usize; 8];
    for m in matcher.find_iter(text) {
        counts[m.pattern().as_usize()] += 1;
    }

    let [
        open_braces,
        close_braces,
        open_parens,
        close_parens,
        fragment_opens,
        fragment_closes,
        tag_opens,
        tag_closes,
    ] = counts;

    Ok(Census {
        tag: tag.to_string(),
        open_braces,
        close_braces,
        open_parens,
        close_parens,
        fragment_opens,
        fragment_closes,
        tag_opens,
        tag_closes,
    })
}

#[cfg(test)]
#[path = "census_tests.rs"]
mod tests;
