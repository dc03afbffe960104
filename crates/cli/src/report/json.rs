// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! JSON format report output.

use serde::Serialize;
use serde_json::{Value, json};
use termcolor::WriteColor;

use crate::census::Census;
use crate::delimiters::DelimiterOutcome;
use crate::runner::{FileOutcome, FileResult};
use crate::track::TrackReport;

use super::ReportFormatter;

/// JSON format report formatter.
pub struct JsonFormatter;

impl ReportFormatter for JsonFormatter {
    fn results(&self, w: &mut dyn WriteColor, results: &[FileResult]) -> anyhow::Result<()> {
        let files = results
            .iter()
            .map(file_entry)
            .collect::<Result<Vec<_>, _>>()?;

        let output = json!({
            "passed": results.iter().all(FileResult::passed),
            "files": files,
        });
        write_value(w, &output)
    }

    fn census(&self, w: &mut dyn WriteColor, census: &Census) -> anyhow::Result<()> {
        write_value(w, &serde_json::to_value(census)?)
    }

    fn track(&self, w: &mut dyn WriteColor, report: &TrackReport) -> anyhow::Result<()> {
        let mut output = serde_json::to_value(report)?;
        if let Value::Object(map) = &mut output {
            map.insert("passed".to_string(), json!(report.is_balanced()));
        }
        write_value(w, &output)
    }
}

fn file_entry(result: &FileResult) -> serde_json::Result<Value> {
    let path = result.path.display().to_string();
    let passed = result.passed();

    let entry = match &result.outcome {
        FileOutcome::Syntax(outcome) => {
            let defect = match outcome {
                DelimiterOutcome::Balanced => Value::Null,
                DelimiterOutcome::Defect(defect) => with_message(defect)?,
            };
            json!({
                "path": path,
                "passed": passed,
                "defect": defect,
                "message": outcome.to_string(),
            })
        }
        FileOutcome::Tags(report) => {
            let violations =
                report.violations.iter().map(with_message).collect::<Result<Vec<_>, _>>()?;
            json!({
                "path": path,
                "passed": passed,
                "violations": violations,
                "unclosed": report.unclosed,
            })
        }
        FileOutcome::Error(message) => json!({
            "path": path,
            "passed": false,
            "error": message,
        }),
    };
    Ok(entry)
}

/// Serialize a diagnostic and attach its human-readable message.
fn with_message<T: Serialize + std::fmt::Display>(item: &T) -> serde_json::Result<Value> {
    let mut value = serde_json::to_value(item)?;
    if let Value::Object(map) = &mut value {
        map.insert("message".to_string(), json!(item.to_string()));
    }
    Ok(value)
}

fn write_value(w: &mut dyn WriteColor, value: &Value) -> anyhow::Result<()> {
    writeln!(w, "{}", serde_json::to_string_pretty(value)?)?;
    Ok(())
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
