// Copyright (c) 2025 Kilos contributors. Licensed under Apache License, Version 2.0.

// cspell:words ioctl tiocgwinsz winsize

//! Terminal size discovery.
//!
//! Two paths, tried in order by [`get_window_size()`]:
//!
//! 1. **ioctl**: `TIOCGWINSZ` on the controlling terminal ([`IoctlWindowSize`]). A reply
//!    of zero rows or zero columns counts as a failure.
//! 2. **Cursor report fallback**: move the cursor by 999 columns right and 999 rows
//!    down (`ESC [ 999 C`, `ESC [ 999 B`). The terminal clamps it at the bottom right
//!    cell, so asking for its position with `ESC [ 6 n` yields the size. See
//!    [`get_cursor_position()`].
//!
//! The fallback blocks until the terminal answers. There is no timeout: a terminal that
//! never answers stalls the probe.

// Attach sources.
pub mod cursor_report;
pub mod viewport_size;
pub mod window_size_query;

// Re-export.
pub use cursor_report::*;
pub use viewport_size::*;
pub use window_size_query::*;
