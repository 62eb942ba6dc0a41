// Copyright (c) 2025 Kilos contributors. Licensed under Apache License, Version 2.0.

use super::KeyEvent;
use crate::{ANSI_CSI_BRACKET, ANSI_ESC, ARROW_DOWN_FINAL, ARROW_LEFT_FINAL,
            ARROW_RIGHT_FINAL, ARROW_UP_FINAL};

/// Bytes read per `read()` call. Enough to hold the longest entry of
/// [`KEY_SEQUENCES`].
pub const LOOKAHEAD_LEN: usize = 4;

/// Literal byte sequences and the events they decode to, in descending length order.
/// The first prefix match wins.
pub const KEY_SEQUENCES: &[(&[u8], KeyEvent)] = &[
    (&[ANSI_ESC, ANSI_CSI_BRACKET, ARROW_UP_FINAL], KeyEvent::ArrowUp),
    (&[ANSI_ESC, ANSI_CSI_BRACKET, ARROW_DOWN_FINAL], KeyEvent::ArrowDown),
    (&[ANSI_ESC, ANSI_CSI_BRACKET, ARROW_RIGHT_FINAL], KeyEvent::ArrowRight),
    (&[ANSI_ESC, ANSI_CSI_BRACKET, ARROW_LEFT_FINAL], KeyEvent::ArrowLeft),
];

/// The first entry of [`KEY_SEQUENCES`] that `buffer` starts with, and its length.
#[must_use]
pub fn match_sequence(buffer: &[u8]) -> Option<(KeyEvent, usize)> {
    KEY_SEQUENCES
        .iter()
        .find(|(sequence, _)| buffer.starts_with(sequence))
        .map(|(sequence, event)| (*event, sequence.len()))
}

/// Length of a complete CSI sequence at the start of `buffer`: `ESC [`, then parameter
/// bytes (`0x30..=0x3F`), intermediate bytes (`0x20..=0x2F`), and one final byte
/// (`0x40..=0x7E`). `None` if the buffer doesn't start with one, or it is cut off.
#[must_use]
pub fn complete_csi_len(buffer: &[u8]) -> Option<usize> {
    let [ANSI_ESC, ANSI_CSI_BRACKET, rest @ ..] = buffer else {
        return None;
    };
    let params = rest.iter().take_while(|b| (0x30..=0x3F).contains(*b)).count();
    let intermediates = rest[params..]
        .iter()
        .take_while(|b| (0x20..=0x2F).contains(*b))
        .count();
    let final_index = params + intermediates;
    match rest.get(final_index) {
        Some(b) if (0x40..=0x7E).contains(b) => Some(2 + final_index + 1),
        _ => None,
    }
}

/// Whether `buffer` is the start of an escape sequence that isn't complete yet: `ESC`,
/// `ESC [`, or `ESC [` followed by parameter and intermediate bytes only.
#[must_use]
pub fn is_incomplete_sequence(buffer: &[u8]) -> bool {
    match buffer {
        [ANSI_ESC] | [ANSI_ESC, ANSI_CSI_BRACKET] => true,
        [ANSI_ESC, ANSI_CSI_BRACKET, tail @ ..] => {
            tail.iter().all(|b| (0x20..=0x3F).contains(b))
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    #[test]
    fn test_table_is_longest_first_and_fits_lookahead() {
        let lengths: Vec<usize> = KEY_SEQUENCES.iter().map(|(s, _)| s.len()).collect();
        let mut sorted = lengths.clone();
        sorted.sort_by(|a, b| b.cmp(a));
        assert_eq!(lengths, sorted);
        assert!(lengths.iter().all(|&len| len <= LOOKAHEAD_LEN));
    }

    #[test_case(b"\x1b[A", Some((KeyEvent::ArrowUp, 3)) ; "up")]
    #[test_case(b"\x1b[Bx", Some((KeyEvent::ArrowDown, 3)) ; "down with trailing byte")]
    #[test_case(b"\x1b[C", Some((KeyEvent::ArrowRight, 3)) ; "right")]
    #[test_case(b"\x1b[D", Some((KeyEvent::ArrowLeft, 3)) ; "left")]
    #[test_case(b"\x1bA", None ; "no bracket")]
    #[test_case(b"\x1b[", None ; "cut off")]
    fn test_match_sequence(buffer: &[u8], expected: Option<(KeyEvent, usize)>) {
        assert_eq!(match_sequence(buffer), expected);
    }

    #[test_case(b"\x1b[5~", Some(4) ; "page up")]
    #[test_case(b"\x1b[Z", Some(3) ; "shift tab")]
    #[test_case(b"\x1b[1;", None ; "cut off in params")]
    #[test_case(b"\x1b[", None ; "bare introducer")]
    #[test_case(b"x[Z", None ; "no escape")]
    fn test_complete_csi_len(buffer: &[u8], expected: Option<usize>) {
        assert_eq!(complete_csi_len(buffer), expected);
    }

    #[test_case(b"\x1b", true ; "escape")]
    #[test_case(b"\x1b[", true ; "introducer")]
    #[test_case(b"\x1b[12", true ; "params")]
    #[test_case(b"\x1b[A", false ; "complete")]
    #[test_case(b"\x1bA", false ; "no bracket")]
    #[test_case(b"x", false ; "plain byte")]
    fn test_is_incomplete_sequence(buffer: &[u8], expected: bool) {
        assert_eq!(is_incomplete_sequence(buffer), expected);
    }
}
