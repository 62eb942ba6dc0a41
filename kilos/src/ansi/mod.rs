// Copyright (c) 2025 Kilos contributors. Licensed under Apache License, Version 2.0.

//! ANSI/VT100 escape sequence constants shared by the input and output sides of the
//! session.

// Attach sources.
pub mod constants;

// Re-export.
pub use constants::*;
