// Copyright (c) 2025 Kilos contributors. Licensed under Apache License, Version 2.0.

// cspell:words termios sigwinch kilos

//! # kilos
//!
//! A minimal terminal screen editor skeleton. There is no text buffer and no file I/O;
//! what this crate does implement is the **terminal session state machine** that every
//! screen editor needs underneath:
//!
//! 1. [`terminal_raw_mode`] - Capture the original terminal attributes, switch the
//!    terminal into raw mode, and restore the original attributes exactly once on every
//!    exit path (normal quit, fatal error, panic) via [`RawModeGuard`].
//! 2. [`viewport_probe`] - Determine the terminal size using the `TIOCGWINSZ` ioctl,
//!    falling back to the cursor position report protocol (`ESC [ 6 n`).
//! 3. [`key_decoder`] - Turn raw bytes from standard input into [`KeyEvent`]s, telling
//!    arrow key escape sequences apart from plain bytes with a bounded lookahead.
//! 4. [`render_loop`] - Paint the viewport (tildes, a centered welcome banner, the
//!    cursor) and move the cursor in response to arrow keys.
//!
//! The [`session`] module ties these together into the run loop that the `kilos`
//! binary drives.
//!
//! ```text
//! main
//!  │
//!  ├─▶ RawModeGuard::enable()        (terminal_raw_mode)
//!  ├─▶ get_window_size()             (viewport_probe)
//!  └─▶ loop {
//!        render_refresh()            (render_loop)
//!        KeyDecoder::read_key()      (key_decoder)
//!        EditorSession::process_key()
//!      }                             Ctrl+Q → clear screen, restore, exit 0
//! ```

// Skip rustfmt for rest of file.
// https://stackoverflow.com/a/75910283/2085356
#![cfg_attr(rustfmt, rustfmt_skip)]

// Enforce strict error handling in production library code only. Tests are allowed to
// use .unwrap() (workspace `Cargo.toml` config allows it).
#![cfg_attr(not(test), deny(clippy::unwrap_in_result))]

// Attach modules (re-exported below to provide clean public API).
pub mod ansi;
pub mod clap_config;
pub mod error;
pub mod key_decoder;
pub mod log;
pub mod render_loop;
pub mod session;
pub mod terminal_raw_mode;
pub mod viewport_probe;

// Test only modules.
#[cfg(all(unix, test))]
pub mod test_fixtures;

// Re-export stable public API using glob imports for ergonomic, flat API surface.
pub use ansi::*;
pub use error::*;
pub use key_decoder::*;
pub use log::*;
pub use render_loop::*;
pub use session::*;
pub use terminal_raw_mode::*;
pub use viewport_probe::*;
