// Copyright (c) 2025 Kilos contributors. Licensed under Apache License, Version 2.0.

//! Command line arguments of the `kilos` binary.

use crate::{DEFAULT_LOG_FILE, RawModeConfig, SessionConfig, TracingConfig};
use clap::{Args, Parser, ValueEnum};

/// More info: <https://docs.rs/clap/latest/clap/_derive/_tutorial/chapter_2/index.html>
#[derive(Debug, Parser)]
#[command(bin_name = "kilos")]
#[command(about = "A minimal terminal screen editor. Arrow keys move, Ctrl+Q quits.")]
#[command(version)]
#[command(next_line_help = true)]
#[command(arg_required_else_help(false))]
/// More info: <https://docs.rs/clap/latest/clap/struct.Command.html#method.help_template>
#[command(
    help_template = "{about}\nVersion: {bin} {version}\n\nUSAGE:\n  kilos [\x1b[34moptions\x1b[0m]\n\n[options]\n{options}"
)]
pub struct CliArg {
    #[command(flatten)]
    pub logging_options: LoggingOption,

    #[command(flatten)]
    pub terminal_options: TerminalOption,
}

#[derive(Debug, Args)]
pub struct LoggingOption {
    #[arg(
        long,
        short = 'l',
        help = "Log debug output to a file (see --log-file). Off by default"
    )]
    pub enable_logging: bool,

    #[arg(
        long,
        value_name = "PATH",
        default_value = DEFAULT_LOG_FILE,
        help = "Log file used with --enable-logging"
    )]
    pub log_file: String,

    #[arg(long, value_enum, default_value_t = LogLevel::Debug, help = "Most verbose level written to the log file")]
    pub log_level: LogLevel,
}

#[derive(Debug, Args)]
pub struct TerminalOption {
    #[arg(
        long,
        value_name = "DECISECONDS",
        default_value_t = 0,
        value_parser = clap::value_parser!(u8),
        help = "Raw mode read timeout (VTIME) in tenths of a second. 0 blocks until a key is pressed"
    )]
    pub read_timeout: u8,

    #[arg(long, help = "Don't re-query the window size when the terminal is resized")]
    pub no_resize: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for tracing::Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => tracing::Level::ERROR,
            LogLevel::Warn => tracing::Level::WARN,
            LogLevel::Info => tracing::Level::INFO,
            LogLevel::Debug => tracing::Level::DEBUG,
            LogLevel::Trace => tracing::Level::TRACE,
        }
    }
}

impl CliArg {
    #[must_use]
    pub fn tracing_config(&self) -> TracingConfig {
        let LoggingOption {
            enable_logging,
            log_file,
            log_level,
        } = &self.logging_options;
        let config = if *enable_logging {
            TracingConfig::new_file(Some(log_file.clone()))
        } else {
            TracingConfig::disabled()
        };
        config.with_level((*log_level).into())
    }

    #[must_use]
    pub fn session_config(&self) -> SessionConfig {
        SessionConfig {
            raw_mode: RawModeConfig::with_read_timeout(self.terminal_options.read_timeout),
            watch_resize: !self.terminal_options.no_resize,
        }
    }
}
