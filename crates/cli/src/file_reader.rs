// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! File reading with a size-based strategy.
//!
// Allow unsafe_code for memory-mapped I/O (required by memmap2).
// Safety justification:
// 1. File handle is valid (just opened)
// 2. We don't mutate the mapped memory
// 3. Stale data on concurrent modification is acceptable for a read-only scan
#![allow(unsafe_code)]
//!
//! - < 64KB: Direct read into buffer
//! - >= 64KB: Memory-mapped I/O

use std::fs::{self, File};
use std::io;
use std::path::Path;

use anyhow::{Context, anyhow};
use memmap2::Mmap;

/// Files at or above this size are memory-mapped instead of read.
pub const MMAP_THRESHOLD: u64 = 64 * 1024;

/// Content of a file, either owned or memory-mapped.
pub enum FileContent {
    /// Small file read into memory.
    Owned(String),
    /// Large file memory-mapped.
    Mapped(MappedContent),
}

/// Memory-mapped file content with UTF-8 validation.
pub struct MappedContent {
    mmap: Mmap,
}

impl MappedContent {
    /// Get content as string slice.
    /// Returns None if content is not valid UTF-8.
    pub fn as_str(&self) -> Option<&str> {
        std::str::from_utf8(&self.mmap).ok()
    }
}

impl FileContent {
    /// Read file using appropriate strategy based on size.
    pub fn read(path: &Path) -> io::Result<Self> {
        let size = fs::metadata(path)?.len();

        if size < MMAP_THRESHOLD {
            let bytes = fs::read(path)?;
            let content = String::from_utf8(bytes)
                .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
            Ok(FileContent::Owned(content))
        } else {
            let file = File::open(path)?;
            // SAFETY: File handle is valid (just opened), we don't mutate the mapped memory,
            // and stale data on concurrent modification is acceptable for a read-only scan.
            let mmap = unsafe { Mmap::map(&file)? };
            Ok(FileContent::Mapped(MappedContent { mmap }))
        }
    }

    /// Get content as string slice.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            FileContent::Owned(s) => Some(s),
            FileContent::Mapped(m) => m.as_str(),
        }
    }
}

/// Read `path` as UTF-8 text and hand it to `f`.
pub fn with_text<T>(path: &Path, f: impl FnOnce(&str) -> T) -> anyhow::Result<T> {
    let content =
        FileContent::read(path).with_context(|| format!("failed to read {}", path.display()))?;
    let text = content
        .as_str()
        .ok_or_else(|| anyhow!("{} is not valid UTF-8", path.display()))?;
    Ok(f(text))
}

#[cfg(test)]
#[path = "file_reader_tests.rs"]
mod tests;
