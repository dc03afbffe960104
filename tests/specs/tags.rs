// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Behavioral specs for `nestcheck tags`.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use crate::prelude::*;

/// > Comments, fragments and self-closing tags are handled; a balanced file prints nothing
#[test]
fn balanced_component_passes() {
    nestcheck_cmd()
        .args(["tags", "src/App.jsx"])
        .current_dir(fixture("balanced"))
        .assert()
        .success()
        .stdout("");
}

/// > Nested balanced tags produce empty output
#[test]
fn nested_tags_print_nothing() {
    let project = Project::empty();
    project.file("App.jsx", "<a><b></b></a>");

    project.cmd().args(["tags", "App.jsx"]).assert().success().stdout("");
}

/// > The `/>` tail of a fragment close pops the enclosing tag
#[test]
fn fragment_inside_tag_reports_stray_closer() {
    let project = Project::empty();
    project.file("App.jsx", "<div>\n<>\n<p/>\n</>\n</div>\n");

    project
        .cmd()
        .args(["tags", "App.jsx"])
        .assert()
        .code(1)
        .stdout("Error: Found closing tag </div> at line 5 with no opened tag.\n");
}

/// > Every violation is reported, followed by the remaining stack
#[test]
fn collects_all_violations() {
    nestcheck_cmd()
        .args(["tags", "src/Form.jsx"])
        .current_dir(fixture("unbalanced"))
        .assert()
        .code(1)
        .stdout(
            "Error: Mismatched tag at line 6. Expected </div> (opened at 4), but found </span>.\n\
             Error: Mismatched tag at line 7. Expected </div> (opened at 4), but found </form>.\n\
             \n\
             Unclosed tags remaining in stack:\n\
             - <div> opened at line 4\n\
             - <form> opened at line 3\n",
        );
}

/// > Only jsx/tsx files are picked up when walking
#[test]
fn directory_walk_filters_by_extension() {
    nestcheck_cmd()
        .args(["tags", "src"])
        .current_dir(fixture("balanced"))
        .assert()
        .success()
        .stdout("");
}

/// > Stray fragment closer has its own message
#[test]
fn extra_fragment_closer() {
    let project = Project::empty();
    project.file("App.tsx", "<></>\n</>\n");

    project
        .cmd()
        .args(["tags", "App.tsx"])
        .assert()
        .code(1)
        .stdout("Error: Found closing fragment </> at line 2 with no opened fragment.\n");
}

/// > JSON lists violations and unclosed frames
#[test]
fn json_output() {
    let output = nestcheck_cmd()
        .args(["tags", "src/Form.jsx", "--output", "json"])
        .current_dir(fixture("unbalanced"))
        .output()
        .unwrap();

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let file = &json["files"][0];
    assert_eq!(file["path"], "src/Form.jsx");
    assert_eq!(file["violations"].as_array().unwrap().len(), 2);
    assert_eq!(file["unclosed"][0]["name"], "div");
    assert_eq!(file["unclosed"][1]["line"], 3);
}

/// > --verbose prints the configuration and file list to stderr
#[test]
fn verbose_lists_files() {
    nestcheck_cmd()
        .args(["tags", "src", "-v"])
        .current_dir(fixture("balanced"))
        .assert()
        .success()
        .stderr(predicates::str::contains("Files:"))
        .stderr(predicates::str::contains("1 file(s) for the tags check"))
        .stderr(predicates::str::contains("App.jsx"));
}
