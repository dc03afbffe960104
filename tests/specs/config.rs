// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Behavioral specs for configuration.
//!
//! Tests that nestcheck correctly handles:
//! - Discovery of nestcheck.toml
//! - Explicit --config and NESTCHECK_CONFIG
//! - Unknown keys (warnings) and invalid files (exit 2)

#![allow(clippy::unwrap_used, clippy::expect_used)]

use crate::prelude::*;

/// > Configured extensions replace the defaults when walking
#[test]
fn discovered_config_sets_extensions() {
    let project = Project::empty();
    project.config("version = 1\n[tags]\nextensions = [\"html\"]\n");
    project.file("web/index.html", "<main>\n");
    project.file("web/App.jsx", "<div>\n");

    project
        .cmd()
        .args(["tags", "web"])
        .assert()
        .code(1)
        .stdout(predicates::str::contains("- <main> opened at line 1"))
        .stdout(predicates::str::contains("div").not());
}

/// > Exclude globs skip matching files
#[test]
fn exclude_patterns() {
    let project = Project::empty();
    project.config("version = 1\n[walk]\nexclude = [\"gen/**\"]\n");
    project.file("gen/bad.js", "{");
    project.file("src/ok.js", "{}");

    project
        .cmd()
        .args(["syntax", "."])
        .assert()
        .success()
        .stdout("Basic balance check passed\n");
}

/// > Unknown keys warn but do not fail
#[test]
fn unknown_key_warns() {
    let project = Project::empty();
    project.config("version = 1\n[walk]\nmax_dpth = 3\n");
    project.file("a.js", "{}");

    project
        .cmd()
        .args(["syntax", "a.js"])
        .assert()
        .success()
        .stderr(predicates::str::contains("unknown config key `walk.max_dpth`"));
}

/// > Invalid TOML exits with the config error code
#[test]
fn invalid_config_exits_2() {
    let project = Project::empty();
    project.config("version = [\n");
    project.file("a.js", "{}");

    project
        .cmd()
        .args(["syntax", "a.js"])
        .assert()
        .code(2)
        .stderr(predicates::str::contains("invalid config"));
}

/// > Unsupported version exits with the config error code
#[test]
fn unsupported_version_exits_2() {
    let project = Project::empty();
    project.config("version = 2\n");
    project.file("a.js", "{}");

    project
        .cmd()
        .args(["syntax", "a.js"])
        .assert()
        .code(2)
        .stderr(predicates::str::contains("unsupported config version 2"));
}

/// > NESTCHECK_CONFIG points at an explicit file
#[test]
fn config_from_env() {
    let project = Project::empty();
    project.file("custom.toml", "version = 3\n");
    project.file("a.js", "{}");

    project
        .cmd()
        .env("NESTCHECK_CONFIG", project.path().join("custom.toml"))
        .args(["syntax", "a.js"])
        .assert()
        .code(2);
}

/// > A missing explicit config is a config error
#[test]
fn missing_explicit_config() {
    let project = Project::empty();
    project.file("a.js", "{}");

    project
        .cmd()
        .args(["-C", "nope.toml", "syntax", "a.js"])
        .assert()
        .code(2)
        .stderr(predicates::str::contains("failed to read config"));
}
