// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Text format report output.

use std::path::Path;

use termcolor::{ColorSpec, WriteColor};

use crate::census::Census;
use crate::color::scheme;
use crate::delimiters::DelimiterOutcome;
use crate::runner::{FileOutcome, FileResult};
use crate::tags::TagReport;
use crate::track::TrackReport;

use super::ReportFormatter;

/// Text format report formatter.
pub struct TextFormatter;

impl ReportFormatter for TextFormatter {
    fn results(&self, w: &mut dyn WriteColor, results: &[FileResult]) -> anyhow::Result<()> {
        let with_headers = results.len() > 1;

        for (i, result) in results.iter().enumerate() {
            if with_headers {
                if i > 0 {
                    writeln!(w)?;
                }
                write_path(w, &result.path)?;
            }

            match &result.outcome {
                FileOutcome::Syntax(outcome) => write_syntax(w, outcome)?,
                FileOutcome::Tags(report) => write_tags(w, report)?,
                FileOutcome::Error(message) => {
                    paint(w, &scheme::fail(), "Error:")?;
                    writeln!(w, " {message}")?;
                }
            }
        }
        Ok(())
    }

    fn census(&self, w: &mut dyn WriteColor, census: &Census) -> anyhow::Result<()> {
        let tag = &census.tag;
        writeln!(w, "Braces: {{ {} }} {}", census.open_braces, census.close_braces)?;
        writeln!(w, "Parens: ( {} ) {}", census.open_parens, census.close_parens)?;
        writeln!(
            w,
            "Fragments: <> {} </> {}",
            census.fragment_opens, census.fragment_closes
        )?;
        writeln!(w, "Tags: <{tag} {} </{tag}> {}", census.tag_opens, census.tag_closes)?;
        Ok(())
    }

    fn track(&self, w: &mut dyn WriteColor, report: &TrackReport) -> anyhow::Result<()> {
        let tag = &report.tag;

        for line in &report.extra_closing {
            paint(w, &scheme::fail(), &format!("Extra closing {tag}"))?;
            write!(w, " at line ")?;
            paint(w, &scheme::line_number(), &line.to_string())?;
            writeln!(w)?;
        }

        if !report.unclosed.is_empty() {
            paint(w, &scheme::header(), &format!("Unclosed {tag}s at end:"))?;
            writeln!(w)?;
            for line in &report.unclosed {
                write!(w, "Unclosed {tag} from line ")?;
                paint(w, &scheme::line_number(), &line.to_string())?;
                writeln!(w)?;
            }
        } else if report.extra_closing.is_empty() {
            paint(w, &scheme::pass(), &format!("All {tag} tags closed"))?;
            writeln!(w)?;
        }
        Ok(())
    }
}

fn write_path(w: &mut dyn WriteColor, path: &Path) -> std::io::Result<()> {
    paint(w, &scheme::path(), &format!("{}:", path.display()))?;
    writeln!(w)
}

fn write_syntax(w: &mut dyn WriteColor, outcome: &DelimiterOutcome) -> std::io::Result<()> {
    let spec = if outcome.is_balanced() { scheme::pass() } else { scheme::fail() };
    paint(w, &spec, &outcome.to_string())?;
    writeln!(w)
}

/// A balanced report writes nothing.
fn write_tags(w: &mut dyn WriteColor, report: &TagReport) -> std::io::Result<()> {
    for violation in &report.violations {
        paint(w, &scheme::fail(), "Error:")?;
        writeln!(w, " {violation}")?;
    }

    if !report.unclosed.is_empty() {
        writeln!(w)?;
        paint(w, &scheme::header(), "Unclosed tags remaining in stack:")?;
        writeln!(w)?;
        for frame in &report.unclosed {
            write!(w, "- <{}> opened at line ", frame.name)?;
            paint(w, &scheme::line_number(), &frame.line.to_string())?;
            writeln!(w)?;
        }
    }
    Ok(())
}

/// Write `text` in `spec`, then reset.
fn paint(w: &mut dyn WriteColor, spec: &ColorSpec, text: &str) -> std::io::Result<()> {
    w.set_color(spec)?;
    write!(w, "{text}")?;
    w.reset()
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
