// Copyright (c) 2025 Kilos contributors. Licensed under Apache License, Version 2.0.

/// One decoded keypress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyEvent {
    /// Any byte that is not part of a recognized sequence or chord, including bytes of
    /// an incomplete escape sequence.
    PrintableByte(u8),
    /// Ctrl + a recognized letter, carrying the chord byte (e.g. `0x11` for Ctrl+Q).
    ControlChord(u8),
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    /// A complete CSI sequence with no table entry (e.g. `ESC [ 5 ~`) that fits in the
    /// 4 byte lookahead.
    ///
    /// Longer sequences such as F5 (`ESC [ 1 5 ~`) or Ctrl+Up (`ESC [ 1 ; 5 A`) don't
    /// fit, so they decode byte by byte as [`KeyEvent::PrintableByte`], starting with
    /// the `ESC`.
    Unrecognized,
}
