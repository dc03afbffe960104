// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Report formatting for check, census and tracker results.
//!
//! Formatters write to a [`WriteColor`] so the same code serves colored
//! terminals, plain pipes and in-memory buffers in tests.

mod json;
mod text;

use termcolor::WriteColor;

use crate::census::Census;
use crate::cli::OutputFormat;
use crate::runner::FileResult;
use crate::track::TrackReport;

pub use json::JsonFormatter;
pub use text::TextFormatter;

/// Trait for rendering results into an output format.
pub trait ReportFormatter {
    /// Write the results of a `syntax` or `tags` run.
    fn results(&self, w: &mut dyn WriteColor, results: &[FileResult]) -> anyhow::Result<()>;

    /// Write literal occurrence counts.
    fn census(&self, w: &mut dyn WriteColor, census: &Census) -> anyhow::Result<()>;

    /// Write a single-tag tracking report.
    fn track(&self, w: &mut dyn WriteColor, report: &TrackReport) -> anyhow::Result<()>;
}

/// Formatter for the selected output format.
pub fn formatter(format: OutputFormat) -> Box<dyn ReportFormatter> {
    match format {
        OutputFormat::Text => Box::new(TextFormatter),
        OutputFormat::Json => Box::new(JsonFormatter),
    }
}
