// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Test helpers for behavioral specifications.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(dead_code)]

pub use assert_cmd::prelude::*;
pub use predicates;
pub use predicates::prelude::PredicateBooleanExt;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

/// Returns a Command configured to run the nestcheck binary
pub fn nestcheck_cmd() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("nestcheck"));
    cmd.env_remove("NESTCHECK_CONFIG")
        .env_remove("NESTCHECK_LOG")
        .env("NO_COLOR", "1");
    cmd
}

/// Get path to a test fixture directory
pub fn fixture(name: &str) -> PathBuf {
    let manifest_dir =
        std::env::var("CARGO_MANIFEST_DIR").expect("CARGO_MANIFEST_DIR should be set");
    PathBuf::from(manifest_dir)
        .parent()
        .expect("parent should exist")
        .parent()
        .expect("grandparent should exist")
        .join("tests")
        .join("fixtures")
        .join(name)
}

/// A throwaway project directory.
pub struct Project {
    dir: TempDir,
}

impl Project {
    /// Empty project with a `.git` marker so config discovery stops here.
    pub fn empty() -> Self {
        let dir = TempDir::new().unwrap();
        std::fs::create_dir(dir.path().join(".git")).unwrap();
        Self { dir }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Write nestcheck.toml.
    pub fn config(&self, content: &str) {
        self.file("nestcheck.toml", content);
    }

    /// Write a file, creating parent directories.
    pub fn file(&self, path: &str, content: &str) {
        let full = self.dir.path().join(path);
        if let Some(parent) = full.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(full, content).unwrap();
    }

    /// A nestcheck command running inside this project.
    pub fn cmd(&self) -> Command {
        let mut cmd = nestcheck_cmd();
        cmd.current_dir(self.path());
        cmd
    }
}
