// Copyright (c) 2025 Kilos contributors. Licensed under Apache License, Version 2.0.

// cspell:words termios tcgetattr tcsetattr cfmakeraw icanon isig ixon icrnl opost
// cspell:words brkint inpck istrip vmin vtime stty

//! Terminal raw mode lifecycle: capture, apply, restore.
//!
//! ## Raw Mode vs Cooked Mode
//!
//! **Cooked Mode** (default):
//! - Input is line-buffered (waits for Enter key)
//! - Special characters are interpreted (Ctrl+C sends `SIGINT`, Ctrl+Z sends `SIGTSTP`)
//! - Typed characters are echoed
//! - Output `\n` is translated to `\r\n`
//!
//! **Raw Mode**:
//! - No line buffering, bytes are available immediately
//! - Ctrl+C, Ctrl+Z, Ctrl+S, Ctrl+Q arrive as plain bytes
//! - No echo
//! - No output post processing
//!
//! ## Flag Deltas
//!
//! [`RawModeConfig`] computes the raw attributes from the captured originals. Only these
//! flags change, every other bit is carried over from the original record:
//!
//! | Field         | Cleared flags                               |
//! | :------------ | :------------------------------------------ |
//! | `local_modes` | `ECHO`, `ICANON`, `ISIG`                    |
//! | `input_modes` | `BRKINT`, `ICRNL`, `INPCK`, `ISTRIP`, `IXON` |
//! | `output_modes`| `OPOST`                                     |
//!
//! And the special codes `VMIN = 1` (block until at least one byte is available) and
//! `VTIME = 0` (no inter-byte timeout; configurable).
//!
//! You can see the same flags from a shell with `stty -a`, and recover a terminal that
//! was left in raw mode with `stty sane`.
//!
//! ## Restore Exactly Once
//!
//! [`RawModeGuard`] owns the saved [`TerminalAttributes`]. Restoring takes them out of
//! the guard, so the explicit [`RawModeGuard::restore()`] and the `Drop` impl can never
//! apply them twice, and `Drop` still runs on early returns and panics.
//!
//! ```no_run
//! use kilos::{RawModeConfig, RawModeGuard};
//!
//! let guard = RawModeGuard::enable(RawModeConfig::default()).expect("raw mode");
//! // ... read keys, paint ...
//! guard.restore().expect("restore"); // Or just let `guard` drop.
//! ```

// Attach sources.
pub mod raw_mode_config;
pub mod raw_mode_core;
pub mod raw_mode_unix;

// Re-export.
pub use raw_mode_config::*;
pub use raw_mode_core::*;
pub use raw_mode_unix::*;

// PTY based integration tests (Unix only).
#[cfg(all(unix, test))]
mod integration_tests;
