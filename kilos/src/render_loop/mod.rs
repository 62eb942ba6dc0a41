// Copyright (c) 2025 Kilos contributors. Licensed under Apache License, Version 2.0.

//! Screen painting and cursor movement. Nothing here reads input or touches terminal
//! attributes; [`render_refresh()`] returns the bytes and the session writes them.

// Attach sources.
pub mod cursor_position;
pub mod refresh;

// Re-export.
pub use cursor_position::*;
pub use refresh::*;
