// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Behavioral specs for `nestcheck track`.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use crate::prelude::*;

const PAGE: &str = "<div>\n</div>\n</div>\n<div>\n  <div>\n";

/// > Extra closers per line, then leftovers outermost first
#[test]
fn reports_extras_and_leftovers() {
    let project = Project::empty();
    project.file("Page.jsx", PAGE);

    project
        .cmd()
        .args(["track", "Page.jsx"])
        .assert()
        .code(1)
        .stdout(
            "Extra closing div at line 3\n\
             Unclosed divs at end:\n\
             Unclosed div from line 4\n\
             Unclosed div from line 5\n",
        );
}

/// > --lines restricts the scan to an inclusive range
#[test]
fn line_range() {
    let project = Project::empty();
    project.file("Page.jsx", PAGE);

    project
        .cmd()
        .args(["track", "Page.jsx", "--lines", "1:2"])
        .assert()
        .success()
        .stdout("All div tags closed\n");
}

/// > A range past the end of the file is allowed but warned about
#[test]
fn range_past_end_warns() {
    let project = Project::empty();
    project.file("Page.jsx", PAGE);

    project
        .cmd()
        .args(["track", "Page.jsx", "--lines", "4:99"])
        .assert()
        .code(1)
        .stderr(predicates::str::contains("extends past the end"));
}

/// > Malformed ranges are usage errors
#[test]
fn malformed_range() {
    nestcheck_cmd().args(["track", "Page.jsx", "--lines", "0:5"]).assert().code(2);
}
