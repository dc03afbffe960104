// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Behavioral specs for `nestcheck count`.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use crate::prelude::*;

/// > Counts are literal occurrences
#[test]
fn counts_default_tag() {
    let project = Project::empty();
    project.file("App.jsx", "<>\n<div>{f(x)}</div>\n<div>\n</>\n");

    project
        .cmd()
        .args(["count", "App.jsx"])
        .assert()
        .success()
        .stdout("Braces: { 1 } 1\nParens: ( 1 ) 1\nFragments: <> 1 </> 1\nTags: <div 2 </div> 1\n");
}

/// > --tag selects which tag name to count
#[test]
fn counts_named_tag() {
    let project = Project::empty();
    project.file("App.jsx", "<form><form></form>");

    project
        .cmd()
        .args(["count", "App.jsx", "--tag", "form", "-o", "json"])
        .assert()
        .success()
        .stdout(predicates::str::contains("\"tag_opens\": 2"))
        .stdout(predicates::str::contains("\"tag_closes\": 1"));
}

/// > Invalid tag names are rejected by argument parsing
#[test]
fn rejects_bad_tag_name() {
    nestcheck_cmd().args(["count", "App.jsx", "--tag", "<div"]).assert().code(2);
}
