// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Best-effort comment stripping for markup sources.
//!
//! Three passes, each replacing matches with nothing:
//! 1. template block comments `{/* ... */}`
//! 2. line comments `// ...`
//! 3. block comments `/* ... */`
//!
//! The template pass runs first so the braces around a template comment go
//! with it. String literals are not recognised: `"http://x"` loses
//! everything from `//` to end of line.

use std::sync::LazyLock;

use regex::Regex;

/// `{/* ... */}`, non-greedy, across lines.
#[allow(clippy::expect_used)]
static TEMPLATE_COMMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)\{/\*.*?\*/\}").expect("valid regex pattern"));

/// `// ...` up to (not including) the line terminator.
#[allow(clippy::expect_used)]
static LINE_COMMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"//.*").expect("valid regex pattern"));

/// `/* ... */`, non-greedy, across lines.
#[allow(clippy::expect_used)]
static BLOCK_COMMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)/\*.*?\*/").expect("valid regex pattern"));

/// Remove comments from `text`.
pub fn strip_comments(text: &str) -> String {
    let text = TEMPLATE_COMMENT.replace_all(text, "");
    let text = LINE_COMMENT.replace_all(&text, "");
    BLOCK_COMMENT.replace_all(&text, "").into_owned()
}

#[cfg(test)]
#[path = "comments_tests.rs"]
mod tests;
