// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! `nestcheck syntax` and `nestcheck tags` command implementation.

use std::io::Write;
use std::path::PathBuf;

use termcolor::StandardStream;

use nestcheck::cli::{CheckArgs, Cli};
use nestcheck::config::{self, Config};
use nestcheck::discovery;
use nestcheck::error::ExitCode;
use nestcheck::report;
use nestcheck::runner::{CheckKind, CheckRunner, FileResult};
use nestcheck::verbose::VerboseLogger;
use nestcheck::walker::{self, FileWalker, WalkerConfig};

/// Run one balance check over the given paths.
pub fn run(cli: &Cli, args: &CheckArgs, kind: CheckKind) -> anyhow::Result<ExitCode> {
    let cwd = std::env::current_dir()?;
    let verbose = VerboseLogger::new(cli.verbose);

    // Explicit config wins over discovery
    let config_path = match &cli.config {
        Some(path) => Some(path.clone()),
        None => discovery::find_config(&discovery::search_root(&cwd, &args.paths)),
    };
    let config = match &config_path {
        Some(path) => config::load_with_warnings(path)?,
        None => Config::default(),
    };
    verbose.config(config_path.as_deref());

    let walker = FileWalker::new(WalkerConfig {
        max_depth: Some(args.max_depth.unwrap_or(config.walk.max_depth)),
        exclude_patterns: config.walk.exclude.clone(),
        extensions: config.extensions_for(kind).to_vec(),
        ..Default::default()
    });
    let files: Vec<PathBuf> = walker::resolve_targets(&cwd, &args.paths, &walker);
    verbose.files(kind.name(), &files);

    if files.is_empty() {
        tracing::warn!("no files matched for the {} check", kind.name());
        return Ok(ExitCode::Success);
    }

    let results = CheckRunner::new().run(kind, &files);

    let mut stdout = StandardStream::stdout(args.color.choice(args.no_color));
    report::formatter(args.output).results(&mut stdout, &results)?;
    stdout.flush()?;

    Ok(exit_code(&results))
}

fn exit_code(results: &[FileResult]) -> ExitCode {
    results.iter().fold(ExitCode::Success, |code, result| {
        let this = if result.errored() {
            ExitCode::InternalError
        } else if result.passed() {
            ExitCode::Success
        } else {
            ExitCode::CheckFailed
        };
        code.worst(this)
    })
}
