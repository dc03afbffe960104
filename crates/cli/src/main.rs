// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! `nestcheck` binary entry point.

mod cmd_check;
mod cmd_count;
mod cmd_track;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use nestcheck::cli::{Cli, Command};
use nestcheck::config::ConfigError;
use nestcheck::error::ExitCode;
use nestcheck::runner::CheckKind;

fn main() -> std::process::ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(&cli) {
        Ok(code) => code.into(),
        Err(e) => {
            eprintln!("nestcheck: {:#}", e);
            exit_code_for(&e).into()
        }
    }
}

fn run(cli: &Cli) -> anyhow::Result<ExitCode> {
    match &cli.command {
        Command::Syntax(args) => cmd_check::run(cli, args, CheckKind::Syntax),
        Command::Tags(args) => cmd_check::run(cli, args, CheckKind::Tags),
        Command::Count(args) => cmd_count::run(args),
        Command::Track(args) => cmd_track::run(args),
    }
}

/// Log to stderr, filtered by `NESTCHECK_LOG` (default `warn`, `debug` with `--verbose`).
fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_env("NESTCHECK_LOG").unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();
}

fn exit_code_for(error: &anyhow::Error) -> ExitCode {
    if error.downcast_ref::<ConfigError>().is_some() {
        ExitCode::ConfigError
    } else {
        ExitCode::InternalError
    }
}
