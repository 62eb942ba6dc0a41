// Copyright (c) 2025 Kilos contributors. Licensed under Apache License, Version 2.0.

// cspell:words sigwinch

//! The session controller: owns the decoder, the output stream, the viewport, and the
//! cursor, and runs the paint, read, update loop until the quit chord.
//!
//! [`run_editor()`] is the whole program minus argument parsing: it acquires raw mode,
//! probes the viewport, watches for `SIGWINCH`, runs an [`EditorSession`] on standard
//! input and output, and restores the terminal on every exit path.

// Attach sources.
pub mod editor_session;
pub mod resize_monitor;
pub mod run_editor;
pub mod session_config;

// Re-export.
pub use editor_session::*;
pub use resize_monitor::*;
pub use run_editor::*;
pub use session_config::*;

// PTY based integration tests (Unix only).
#[cfg(all(unix, test))]
mod integration_tests;
