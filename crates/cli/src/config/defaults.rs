// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized default values for configuration.
//!
//! Individual config structs delegate to these via their `default_*` methods.

/// Supported config file version.
pub const VERSION: u32 = 1;

/// Config file name searched for by discovery.
pub const CONFIG_FILE: &str = "nestcheck.toml";

/// Default file extensions per check.
pub mod extensions {
    /// Files the bracket check picks up when walking a directory.
    pub const SYNTAX: &[&str] = &[
        "js", "jsx", "mjs", "cjs", "ts", "tsx", "py", "rs", "go", "c", "h", "cpp", "hpp", "java",
        "kt", "cs", "php", "rb", "swift", "json", "css", "scss",
    ];

    /// Files the tag check picks up when walking a directory.
    pub const TAGS: &[&str] = &["jsx", "tsx"];
}

/// Default walk settings.
pub mod walk {
    /// Maximum directory depth.
    pub const MAX_DEPTH: usize = 100;

    /// Paths skipped even when not gitignored.
    pub const EXCLUDE: &[&str] = &["**/node_modules/**", "**/dist/**", "**/build/**"];
}
