// Copyright (c) 2025 Kilos contributors. Licensed under Apache License, Version 2.0.

//! ANSI/VT100 escape sequence constants.
//!
//! # Input Sequences
//!
//! Arrow keys arrive as CSI (Control Sequence Introducer) sequences:
//! - Up: `ESC[A`
//! - Down: `ESC[B`
//! - Right: `ESC[C`
//! - Left: `ESC[D`
//!
//! Control chords (Ctrl + letter) arrive as a single byte: the ASCII value of the letter
//! with bits 5-7 cleared, see [`ctrl_key()`].
//!
//! # Output Sequences
//!
//! | Constant                     | Sequence    | Meaning                             |
//! | :--------------------------- | :---------- | :---------------------------------- |
//! | [`CLEAR_SCREEN`]             | `ESC[2J`    | Erase the whole display             |
//! | [`CURSOR_HOME`]              | `ESC[H`     | Move cursor to row 1, col 1         |
//! | [`CLEAR_LINE_TO_END`]        | `ESC[K`     | Erase from cursor to end of line    |
//! | [`HIDE_CURSOR`]              | `ESC[?25l`  | Hide cursor while painting          |
//! | [`SHOW_CURSOR`]              | `ESC[?25h`  | Show cursor after painting          |
//! | [`REQUEST_CURSOR_POSITION`]  | `ESC[6n`    | Device Status Report: cursor pos    |
//! | [`CURSOR_FORWARD_MAX`]       | `ESC[999C`  | Move right, clamped at last column  |
//! | [`CURSOR_DOWN_MAX`]          | `ESC[999B`  | Move down, clamped at last row      |
//!
//! Positioning the cursor (`ESC[row;colH`) takes parameters, so it is produced by
//! [`cursor_position_sequence()`].

// Skip rustfmt for rest of file to preserve manual alignment.
// https://stackoverflow.com/a/75910283/2085356
#![cfg_attr(rustfmt, rustfmt_skip)]

use const_format::concatcp;

// ==================== ANSI Sequence Components ====================

/// ESC byte (27 in decimal, 0x1B in hex)
pub const ANSI_ESC: u8 = 0x1B;

/// CSI bracket byte: `[` (91 in decimal, 0x5B in hex)
pub const ANSI_CSI_BRACKET: u8 = 0x5B;

/// Parameter separator byte: `;` (59 in decimal, 0x3B in hex)
pub const ANSI_PARAM_SEPARATOR: u8 = b';';

/// CSI sequence start: ESC [
pub const CSI_START: &str = "\x1b[";

// ==================== Keyboard Input ====================

/// Arrow up final byte: `ESC [ A`
pub const ARROW_UP_FINAL: u8 = b'A';
/// Arrow down final byte: `ESC [ B`
pub const ARROW_DOWN_FINAL: u8 = b'B';
/// Arrow right final byte: `ESC [ C`
pub const ARROW_RIGHT_FINAL: u8 = b'C';
/// Arrow left final byte: `ESC [ D`
pub const ARROW_LEFT_FINAL: u8 = b'D';

/// Mask that turns a letter into its control chord byte.
pub const CONTROL_CHORD_MASK: u8 = 0x1F;

/// The control chord byte for `letter` (e.g. `ctrl_key(b'q') == 0x11`).
#[must_use]
pub const fn ctrl_key(letter: u8) -> u8 { letter & CONTROL_CHORD_MASK }

/// Letter that quits the editor when pressed with Ctrl.
pub const QUIT_LETTER: u8 = b'q';

// ==================== Device Status Report ====================

/// Request cursor position report: ESC [ 6 n
pub const REQUEST_CURSOR_POSITION: &str = concatcp!(CSI_START, "6n");

/// Cursor position response terminator: R
pub const DSR_CURSOR_POSITION_RESPONSE_END: u8 = b'R';

// ==================== Screen Output ====================

/// Erase entire display: ESC [ 2 J
pub const CLEAR_SCREEN: &str = concatcp!(CSI_START, "2J");

/// Cursor to home position (row 1, col 1): ESC [ H
pub const CURSOR_HOME: &str = concatcp!(CSI_START, "H");

/// Erase from cursor to end of line: ESC [ K
pub const CLEAR_LINE_TO_END: &str = concatcp!(CSI_START, "K");

/// Hide cursor (DECTCEM reset): ESC [ ? 25 l
pub const HIDE_CURSOR: &str = concatcp!(CSI_START, "?25l");

/// Show cursor (DECTCEM set): ESC [ ? 25 h
pub const SHOW_CURSOR: &str = concatcp!(CSI_START, "?25h");

/// Cursor forward by 999 columns, the terminal clamps at the right edge: ESC [ 999 C
pub const CURSOR_FORWARD_MAX: &str = concatcp!(CSI_START, "999C");

/// Cursor down by 999 rows, the terminal clamps at the bottom edge: ESC [ 999 B
pub const CURSOR_DOWN_MAX: &str = concatcp!(CSI_START, "999B");

/// Separator between painted rows. Output post processing is off in raw mode, so a bare
/// `\n` would not return the carriage.
pub const ROW_SEPARATOR: &str = "\r\n";

/// Filler glyph painted on rows past the (nonexistent) end of the document.
pub const FILLER_GLYPH: char = '~';

/// Build the cursor position sequence `ESC [ <row> ; <col> H`. Both arguments are
/// 1-based, as the terminal expects.
#[must_use]
pub fn cursor_position_sequence(row_one_based: u32, col_one_based: u32) -> String {
    format!("{CSI_START}{row_one_based};{col_one_based}H")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_ctrl_key() {
        assert_eq!(ctrl_key(b'q'), 0x11);
        assert_eq!(ctrl_key(b'Q'), 0x11);
        assert_eq!(ctrl_key(b'a'), 0x01);
    }

    #[test]
    fn test_composed_sequences() {
        assert_eq!(CLEAR_SCREEN, "\x1b[2J");
        assert_eq!(REQUEST_CURSOR_POSITION, "\x1b[6n");
        assert_eq!(HIDE_CURSOR, "\x1b[?25l");
        assert_eq!(cursor_position_sequence(1, 1), "\x1b[1;1H");
    }
}
