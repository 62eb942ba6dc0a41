// Copyright (c) 2025 Kilos contributors. Licensed under Apache License, Version 2.0.

//! Fixtures for tests that need a real pseudo terminal.

// Attach sources.
pub mod generate_pty_test;
pub mod slave_report;

// Re-export.
pub use slave_report::*;
