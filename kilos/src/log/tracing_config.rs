// Copyright (c) 2025 Kilos contributors. Licensed under Apache License, Version 2.0.

use tracing_core::LevelFilter;

/// Default log file, relative to the working directory.
pub const DEFAULT_LOG_FILE: &str = "kilos_log.txt";

/// Configure logging: where to write, and the most verbose level that gets written.
///
/// Pass it to [`try_initialize_logging()`](crate::try_initialize_logging).
#[derive(Debug, Clone)]
pub struct TracingConfig {
    pub writer_config: WriterConfig,
    pub level: tracing::Level,
}

/// Where log output goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WriterConfig {
    /// Logging disabled.
    None,
    /// Append to this file path.
    File(String),
}

impl TracingConfig {
    /// Log at `DEBUG` to `filename`, or [`DEFAULT_LOG_FILE`].
    #[must_use]
    pub fn new_file(filename: Option<String>) -> Self {
        Self {
            writer_config: WriterConfig::File(
                filename.unwrap_or_else(|| DEFAULT_LOG_FILE.to_string()),
            ),
            level: tracing::Level::DEBUG,
        }
    }

    #[must_use]
    pub fn disabled() -> Self {
        Self {
            writer_config: WriterConfig::None,
            level: tracing::Level::DEBUG,
        }
    }

    #[must_use]
    pub fn with_level(mut self, level: tracing::Level) -> Self {
        self.level = level;
        self
    }

    #[must_use]
    pub fn get_writer_config(&self) -> WriterConfig { self.writer_config.clone() }

    #[must_use]
    pub fn get_level_filter(&self) -> LevelFilter { LevelFilter::from_level(self.level) }
}
