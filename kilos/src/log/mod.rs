// Copyright (c) 2025 Kilos contributors. Licensed under Apache License, Version 2.0.

//! File based `tracing` setup. Standard output is the editor screen and standard error
//! must stay clean while the terminal is in raw mode, so logs only ever go to a file.

// Attach sources.
pub mod file_appender;
pub mod tracing_config;
pub mod tracing_init;

// Re-export.
pub use file_appender::*;
pub use tracing_config::*;
pub use tracing_init::*;
