// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Structural balance checking for brackets and markup tags.
//!
//! Two matchers share one stack-scan engine ([`scan`]):
//! - [`delimiters`] checks `{}`, `[]` and `()` and stops at the first defect.
//! - [`tags`] checks markup tags and fragments and reports every defect.
//!
//! [`census`] and [`track`] are quick diagnostics for narrowing down where a
//! large file goes wrong.

pub mod census;
pub mod cli;
pub mod color;
pub mod config;
pub mod delimiters;
pub mod discovery;
pub mod error;
pub mod file_reader;
pub mod line_index;
pub mod report;
pub mod runner;
pub mod scan;
pub mod tags;
pub mod track;
pub mod verbose;
pub mod walker;

#[cfg(test)]
mod test_utils;
