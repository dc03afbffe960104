// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Behavioral specs for `nestcheck syntax`.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use crate::prelude::*;

/// > A balanced file prints the pass line and exits 0
#[test]
fn balanced_file_passes() {
    nestcheck_cmd()
        .args(["syntax", "src/util.js"])
        .current_dir(fixture("balanced"))
        .assert()
        .success()
        .stdout("Basic balance check passed\n");
}

/// > Only the first defect is reported
#[test]
fn mismatch_is_reported_once() {
    nestcheck_cmd()
        .args(["syntax", "src/broken.js"])
        .current_dir(fixture("unbalanced"))
        .assert()
        .code(1)
        .stdout("Mismatched ( from line 2 with ] at line 2\n");
}

/// > Directories are walked, excluded paths skipped, and each file gets a header
#[test]
fn directory_walk_prints_headers() {
    nestcheck_cmd()
        .args(["syntax", "."])
        .current_dir(fixture("unbalanced"))
        .assert()
        .code(1)
        .stdout(
            "src/Form.jsx:\nBasic balance check passed\n\n\
             src/broken.js:\nMismatched ( from line 2 with ] at line 2\n",
        );
}

/// > Extra closers and unclosed openers use their own templates
#[test]
fn extra_and_unclosed_messages() {
    let project = Project::empty();
    project.file("extra.js", "a)\n");
    project.file("open.js", "{\n  [\n");

    project
        .cmd()
        .args(["syntax", "extra.js"])
        .assert()
        .code(1)
        .stdout("Extra closing ) at line 1\n");

    project
        .cmd()
        .args(["syntax", "open.js"])
        .assert()
        .code(1)
        .stdout("Unclosed [ from line 2\n");
}

/// > JSON output carries the structured defect and message
#[test]
fn json_output() {
    let output = nestcheck_cmd()
        .args(["syntax", "src/broken.js", "-o", "json"])
        .current_dir(fixture("unbalanced"))
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["passed"], false);
    assert_eq!(json["files"][0]["defect"]["kind"], "mismatched");
    assert_eq!(json["files"][0]["defect"]["found"], "]");
}

/// > An unreadable file is an internal error, other files still get checked
#[test]
fn missing_file_is_internal_error() {
    let project = Project::empty();
    project.file("ok.js", "{}");

    project
        .cmd()
        .args(["syntax", "ok.js", "missing.js"])
        .assert()
        .code(3)
        .stdout(predicates::str::contains("Basic balance check passed"))
        .stdout(predicates::str::contains("Error: failed to read missing.js"));
}

/// > Non-UTF-8 input is rejected rather than decoded lossily
#[test]
fn invalid_utf8_is_internal_error() {
    let project = Project::empty();
    std::fs::write(project.path().join("bin.js"), [0x7b, 0xff, 0x7d]).unwrap();

    project
        .cmd()
        .args(["syntax", "bin.js"])
        .assert()
        .code(3)
        .stdout(predicates::str::contains("Error: failed to read bin.js"));
}
