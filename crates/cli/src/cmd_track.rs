// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! `nestcheck track` command implementation.

use std::io::Write;

use termcolor::StandardStream;

use nestcheck::cli::TrackArgs;
use nestcheck::error::ExitCode;
use nestcheck::file_reader;
use nestcheck::report;
use nestcheck::track;

/// Track one tag name through a file, or a line range of it.
pub fn run(args: &TrackArgs) -> anyhow::Result<ExitCode> {
    let report =
        file_reader::with_text(&args.path, |text| track::track_tag(text, &args.tag, args.lines))?;

    let mut stdout = StandardStream::stdout(args.color.choice(args.no_color));
    report::formatter(args.output).track(&mut stdout, &report)?;
    stdout.flush()?;

    Ok(if report.is_balanced() { ExitCode::Success } else { ExitCode::CheckFailed })
}
