// Copyright (c) 2025 Kilos contributors. Licensed under Apache License, Version 2.0.

use clap::Parser;
use kilos::{clap_config::CliArg, run_editor, try_initialize_logging};
use std::process::ExitCode;

fn main() -> miette::Result<ExitCode> {
    let cli_arg = CliArg::parse();

    try_initialize_logging(cli_arg.tracing_config())?;
    tracing::debug!(message = "kilos starting", ?cli_arg);

    // The terminal is back in cooked mode by the time `run_editor()` returns.
    match run_editor(cli_arg.session_config()) {
        Ok(()) => Ok(ExitCode::SUCCESS),
        Err(error) => {
            tracing::error!(message = "kilos exiting on error", ?error);
            eprintln!("{:?}", miette::Report::new(error));
            Ok(ExitCode::FAILURE)
        }
    }
}
