// Copyright (c) 2025 Kilos contributors. Licensed under Apache License, Version 2.0.

//! Raw bytes from standard input to [`KeyEvent`]s.
//!
//! [`KeyDecoder::read_key()`] does one blocking `read()` of up to [`LOOKAHEAD_LEN`]
//! bytes, then classifies the front of that buffer:
//!
//! 1. A literal sequence from [`KEY_SEQUENCES`] (longest first), e.g. `ESC [ A`.
//! 2. Any other complete CSI sequence (`ESC [ <params> <final>`) inside the buffer:
//!    [`KeyEvent::Unrecognized`], consumed whole.
//! 3. Otherwise the first byte alone: [`KeyEvent::ControlChord`] if it is the chord of
//!    a recognized letter, else [`KeyEvent::PrintableByte`].
//!
//! Bytes left over after classification are decoded by the next call before anything
//! new is read. If the leftovers are the start of an escape sequence, one more read tops
//! them up to [`LOOKAHEAD_LEN`] first. There is no timer based disambiguation: a
//! sequence whose first byte arrived alone in a fresh read decodes as separate bytes.

// Attach sources.
pub mod decoder;
pub mod key_event;
pub mod sequence_table;

// Re-export.
pub use decoder::*;
pub use key_event::*;
pub use sequence_table::*;
