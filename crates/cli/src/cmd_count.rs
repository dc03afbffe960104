// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! `nestcheck count` command implementation.

use std::io::Write;

use termcolor::StandardStream;

use nestcheck::census;
use nestcheck::cli::CountArgs;
use nestcheck::error::ExitCode;
use nestcheck::file_reader;
use nestcheck::report;

/// Print literal occurrence counts for one file.
pub fn run(args: &CountArgs) -> anyhow::Result<ExitCode> {
    let counts = file_reader::with_text(&args.path, |text| census::count(text, &args.tag))??;

    let mut stdout = StandardStream::stdout(args.color.choice(args.no_color));
    report::formatter(args.output).census(&mut stdout, &counts)?;
    stdout.flush()?;

    Ok(ExitCode::Success)
}
