// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Verbose output logger for diagnostic information.
//!
//! Writes a human-readable summary of what is about to be checked to stderr.
//! Enabled with `--verbose`.

use std::path::{Path, PathBuf};

/// Verbose output logger. Writes to stderr when enabled.
pub struct VerboseLogger {
    enabled: bool,
}

impl VerboseLogger {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Print a verbose line to stderr (indented as content under a section).
    pub fn log(&self, msg: &str) {
        if self.enabled {
            eprintln!("  {}", msg);
        }
    }

    /// Print a verbose section header.
    pub fn section(&self, title: &str) {
        if self.enabled {
            eprintln!("\n{}:", title);
        }
    }

    /// Print where configuration came from.
    pub fn config(&self, config_path: Option<&Path>) {
        self.section("Configuration");
        match config_path {
            Some(path) => self.log(&format!("Config: {}", path.display())),
            None => self.log("Config: (defaults)"),
        }
    }

    /// Print the list of files about to be checked.
    pub fn files(&self, check: &str, files: &[PathBuf]) {
        self.section("Files");
        self.log(&format!("{} file(s) for the {} check", files.len(), check));
        for file in files {
            self.log(&file.display().to_string());
        }
    }
}
