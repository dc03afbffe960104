// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! CLI argument parsing with clap derive.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::census::DEFAULT_TAG;
use crate::color::ColorMode;
use crate::track::LineRange;

/// Structural balance checker for brackets and markup tags
#[derive(Parser)]
#[command(name = "nestcheck")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Use specific config file
    #[arg(short = 'C', long = "config", global = true, env = "NESTCHECK_CONFIG")]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Check that {}, [] and () are balanced (stops at the first defect)
    Syntax(CheckArgs),
    /// Check that markup tags and fragments are balanced (reports every defect)
    Tags(CheckArgs),
    /// Count braces, parens, fragments and one tag name
    Count(CountArgs),
    /// Track opens and closes of one tag name line by line
    Track(TrackArgs),
}

#[derive(clap::Args)]
pub struct CheckArgs {
    /// Files or directories to check
    #[arg(value_name = "PATH", required = true)]
    pub paths: Vec<PathBuf>,

    /// Output format
    #[arg(short, long, default_value = "text")]
    pub output: OutputFormat,

    /// Color output mode
    #[arg(long, default_value = "auto", value_name = "WHEN")]
    pub color: ColorMode,

    /// Disable color output (shorthand for --color=never)
    #[arg(long)]
    pub no_color: bool,

    /// Maximum directory depth to traverse (overrides config)
    #[arg(long, value_name = "N")]
    pub max_depth: Option<usize>,
}

#[derive(clap::Args)]
pub struct CountArgs {
    /// File to count
    #[arg(value_name = "PATH")]
    pub path: PathBuf,

    /// Tag name to count
    #[arg(long, default_value = DEFAULT_TAG, value_parser = parse_tag_name)]
    pub tag: String,

    /// Output format
    #[arg(short, long, default_value = "text")]
    pub output: OutputFormat,

    /// Color output mode
    #[arg(long, default_value = "auto", value_name = "WHEN")]
    pub color: ColorMode,

    /// Disable color output (shorthand for --color=never)
    #[arg(long)]
    pub no_color: bool,
}

#[derive(clap::Args)]
pub struct TrackArgs {
    /// File to scan
    #[arg(value_name = "PATH")]
    pub path: PathBuf,

    /// Tag name to track
    #[arg(long, default_value = DEFAULT_TAG, value_parser = parse_tag_name)]
    pub tag: String,

    /// Only scan lines START through END (1-based, inclusive)
    #[arg(long, value_name = "START:END")]
    pub lines: Option<LineRange>,

    /// Output format
    #[arg(short, long, default_value = "text")]
    pub output: OutputFormat,

    /// Color output mode
    #[arg(long, default_value = "auto", value_name = "WHEN")]
    pub color: ColorMode,

    /// Disable color output (shorthand for --color=never)
    #[arg(long)]
    pub no_color: bool,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Accept names made of the characters a tag pattern can match.
fn parse_tag_name(s: &str) -> Result<String, String> {
    if s.is_empty() {
        return Err("tag name cannot be empty".to_string());
    }
    if !s.chars().all(|c| c.is_ascii_alphanumeric() || c == '.' || c == '-' || c == '_') {
        return Err(format!("invalid tag name: {s}"));
    }
    Ok(s.to_string())
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
