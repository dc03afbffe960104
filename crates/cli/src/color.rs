// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Terminal color handling.

use std::io::IsTerminal;

use termcolor::ColorChoice;

/// `--color` argument values.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum ColorMode {
    /// Color when stdout is a terminal and NO_COLOR is unset.
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    /// Resolve the mode, with `--no-color` taking priority.
    pub fn choice(self, no_color_flag: bool) -> ColorChoice {
        match self {
            Self::Always => resolve_color(true, no_color_flag),
            Self::Never => ColorChoice::Never,
            Self::Auto => {
                let no_color = no_color_flag || std::env::var_os("NO_COLOR").is_some();
                if no_color || !std::io::stdout().is_terminal() {
                    ColorChoice::Never
                } else {
                    ColorChoice::Auto
                }
            }
        }
    }
}

/// Resolve an explicit force/disable pair. Disabling wins.
pub fn resolve_color(force_color: bool, no_color: bool) -> ColorChoice {
    if no_color {
        ColorChoice::Never
    } else if force_color {
        ColorChoice::Always
    } else {
        ColorChoice::Auto
    }
}

/// Color specifications for output elements.
pub mod scheme {
    use termcolor::{Color, ColorSpec};

    /// File path headers: cyan.
    pub fn path() -> ColorSpec {
        let mut spec = ColorSpec::new();
        spec.set_fg(Some(Color::Cyan));
        spec
    }

    /// Line numbers: yellow.
    pub fn line_number() -> ColorSpec {
        let mut spec = ColorSpec::new();
        spec.set_fg(Some(Color::Yellow));
        spec
    }

    /// Failure labels: bold red.
    pub fn fail() -> ColorSpec {
        let mut spec = ColorSpec::new();
        spec.set_fg(Some(Color::Red)).set_bold(true);
        spec
    }

    /// Pass messages: bold green.
    pub fn pass() -> ColorSpec {
        let mut spec = ColorSpec::new();
        spec.set_fg(Some(Color::Green)).set_bold(true);
        spec
    }

    /// Section headers: bold, no color.
    pub fn header() -> ColorSpec {
        let mut spec = ColorSpec::new();
        spec.set_bold(true);
        spec
    }
}

#[cfg(test)]
#[path = "color_tests.rs"]
mod tests;
