// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Byte offset to line number conversion.

/// Sorted offsets of every `\n` in a text.
///
/// Built once per text so each lookup is a binary search instead of a
/// rescan of the prefix.
pub struct LineIndex {
    newlines: Vec<usize>,
}

impl LineIndex {
    pub fn new(text: &str) -> Self {
        Self { newlines: memchr::memchr_iter(b'\n', text.as_bytes()).collect() }
    }

    /// 1-based line containing `offset`: one plus the number of `\n` before it.
    pub fn line_of(&self, offset: usize) -> usize {
        self.newlines.partition_point(|&nl| nl < offset) + 1
    }

    /// Number of lines in the text (a trailing newline opens an empty line).
    pub fn line_count(&self) -> usize {
        self.newlines.len() + 1
    }
}

#[cfg(test)]
#[path = "line_index_tests.rs"]
mod tests;
