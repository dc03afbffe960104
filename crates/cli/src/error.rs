// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Process exit codes.

/// Exit codes returned by the `nestcheck` binary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Every checked file is balanced.
    Success = 0,
    /// At least one file has a structural violation.
    CheckFailed = 1,
    /// The configuration file is invalid.
    ConfigError = 2,
    /// A file could not be checked (unreadable, not UTF-8, internal failure).
    InternalError = 3,
}

impl ExitCode {
    /// Combine two codes, keeping the more severe one.
    pub fn worst(self, other: Self) -> Self {
        if (other as u8) > (self as u8) { other } else { self }
    }
}

impl From<ExitCode> for std::process::ExitCode {
    fn from(code: ExitCode) -> Self {
        std::process::ExitCode::from(code as u8)
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
