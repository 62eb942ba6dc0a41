// Copyright (c) 2025 Kilos contributors. Licensed under Apache License, Version 2.0.

// cspell:words eintr

use super::{KeyEvent, LOOKAHEAD_LEN, complete_csi_len, is_incomplete_sequence,
            match_sequence};
use crate::{KilosError, KilosResult, QUIT_LETTER, ctrl_key};
use smallvec::{SmallVec, smallvec};
use std::io::{self, Read};

/// Decodes [`KeyEvent`]s from a byte source (standard input in the editor). See the
/// [module docs](mod@super) for the algorithm.
#[derive(Debug)]
pub struct KeyDecoder<R> {
    input: R,
    /// Bytes read but not yet decoded.
    pending: SmallVec<[u8; LOOKAHEAD_LEN]>,
    /// Letters whose control chord decodes as [`KeyEvent::ControlChord`].
    chord_letters: SmallVec<[u8; 4]>,
}

impl<R: Read> KeyDecoder<R> {
    /// A decoder that recognizes the quit chord (Ctrl+Q) only.
    pub fn new(input: R) -> Self {
        Self {
            input,
            pending: SmallVec::new(),
            chord_letters: smallvec![QUIT_LETTER],
        }
    }

    /// Replace the set of letters whose control chords are recognized. The editor only
    /// needs the default; this is for library users that handle more chords.
    #[must_use]
    pub fn with_chord_letters(mut self, letters: impl IntoIterator<Item = u8>) -> Self {
        self.chord_letters = letters.into_iter().collect();
        self
    }

    /// Bytes that the next [`Self::read_key()`] will decode before reading again.
    #[must_use]
    pub fn pending(&self) -> &[u8] { &self.pending }

    /// Block until at least one byte is available and decode one key.
    ///
    /// Leftover bytes that end in an incomplete escape sequence (e.g. a lone `ESC` at
    /// the end of the previous read) are topped up with one more read, up to
    /// [`LOOKAHEAD_LEN`] bytes, before decoding. Freshly read bytes are never topped up.
    ///
    /// # Errors
    ///
    /// [`KilosError::KeyReadFailed`] on end of input or any read error other than
    /// `Interrupted`, which is retried.
    pub fn read_key(&mut self) -> KilosResult<KeyEvent> {
        let needs_top_up = !self.pending.is_empty()
            && self.pending.len() < LOOKAHEAD_LEN
            && is_incomplete_sequence(&self.pending);
        if self.pending.is_empty() || needs_top_up {
            self.fill()?;
        }

        let (event, consumed) = self.classify();
        self.pending.drain(..consumed);

        tracing::trace!(message = "decoded key", ?event, consumed, pending = ?self.pending);
        Ok(event)
    }

    /// One `read()` into the free part of the lookahead. End of input is only an error
    /// when there is nothing left to decode.
    fn fill(&mut self) -> KilosResult<()> {
        let mut buffer = [0_u8; LOOKAHEAD_LEN];
        let free = LOOKAHEAD_LEN - self.pending.len();
        loop {
            match self.input.read(&mut buffer[..free]) {
                Ok(0) if self.pending.is_empty() => {
                    return Err(KilosError::KeyReadFailed(
                        io::ErrorKind::UnexpectedEof.into(),
                    ));
                }
                Ok(0) => return Ok(()),
                Ok(count) => {
                    self.pending.extend_from_slice(&buffer[..count]);
                    return Ok(());
                }
                Err(e) if e.kind() == io::ErrorKind::Interrupted => {
                    tracing::trace!(message = "key read interrupted, retrying");
                }
                Err(e) => return Err(KilosError::KeyReadFailed(e)),
            }
        }
    }

    /// Classify the front of `pending`, which is non-empty. Returns the event and how
    /// many bytes it used.
    fn classify(&self) -> (KeyEvent, usize) {
        let buffer = self.pending.as_slice();

        if let Some(found) = match_sequence(buffer) {
            return found;
        }
        if let Some(len) = complete_csi_len(buffer) {
            return (KeyEvent::Unrecognized, len);
        }

        let byte = buffer[0];
        let is_chord = self
            .chord_letters
            .iter()
            .any(|&letter| ctrl_key(letter) == byte);
        if is_chord {
            (KeyEvent::ControlChord(byte), 1)
        } else {
            (KeyEvent::PrintableByte(byte), 1)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Cursor;
    use test_case::test_case;

    fn decode_all(bytes: &[u8]) -> Vec<KeyEvent> {
        let mut decoder = KeyDecoder::new(Cursor::new(bytes.to_vec()));
        let mut events = vec![];
        while let Ok(event) = decoder.read_key() {
            events.push(event);
        }
        events
    }

    /// Hands out its chunks one `read()` at a time, with an `Interrupted` error first.
    struct ChunkedReader {
        chunks: Vec<Vec<u8>>,
        interrupted: bool,
    }

    impl Read for ChunkedReader {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            if !self.interrupted {
                self.interrupted = true;
                return Err(io::ErrorKind::Interrupted.into());
            }
            if self.chunks.is_empty() {
                return Ok(0);
            }
            let chunk = self.chunks.remove(0);
            buf[..chunk.len()].copy_from_slice(&chunk);
            Ok(chunk.len())
        }
    }

    #[test_case(0x41, KeyEvent::ArrowUp ; "up")]
    #[test_case(0x42, KeyEvent::ArrowDown ; "down")]
    #[test_case(0x43, KeyEvent::ArrowRight ; "right")]
    #[test_case(0x44, KeyEvent::ArrowLeft ; "left")]
    fn test_arrow_sequences(final_byte: u8, expected: KeyEvent) {
        assert_eq!(decode_all(&[0x1B, 0x5B, final_byte]), vec![expected]);
    }

    #[test]
    fn test_escape_without_bracket_is_not_an_arrow() {
        assert_eq!(
            decode_all(b"\x1bA"),
            vec![KeyEvent::PrintableByte(0x1B), KeyEvent::PrintableByte(b'A')]
        );
    }

    #[test]
    fn test_ctrl_q_is_distinct_from_q() {
        assert_eq!(decode_all(&[0x11]), vec![KeyEvent::ControlChord(0x11)]);
        assert_eq!(decode_all(&[0x71]), vec![KeyEvent::PrintableByte(b'q')]);
    }

    #[test]
    fn test_unrecognized_chord_is_printable() {
        assert_eq!(decode_all(&[0x01]), vec![KeyEvent::PrintableByte(0x01)]);

        let mut decoder =
            KeyDecoder::new(Cursor::new(vec![0x01])).with_chord_letters([b'a', b'q']);
        assert_eq!(decoder.read_key().unwrap(), KeyEvent::ControlChord(0x01));
    }

    #[test]
    fn test_leftover_bytes_are_decoded_next() {
        let mut decoder = KeyDecoder::new(Cursor::new(b"\x1b[Ax".to_vec()));
        assert_eq!(decoder.read_key().unwrap(), KeyEvent::ArrowUp);
        assert_eq!(decoder.pending(), b"x");
        assert_eq!(decoder.read_key().unwrap(), KeyEvent::PrintableByte(b'x'));
        assert!(decoder.pending().is_empty());
    }

    #[test]
    fn test_unknown_csi_is_consumed_whole() {
        assert_eq!(
            decode_all(b"\x1b[5~"),
            vec![KeyEvent::Unrecognized]
        );
        assert_eq!(
            decode_all(b"\x1b[Zq"),
            vec![KeyEvent::Unrecognized, KeyEvent::PrintableByte(b'q')]
        );
    }

    #[test_case(b"\x1b[15~" ; "f5")]
    #[test_case(b"\x1b[1;5A" ; "ctrl up")]
    fn test_csi_longer_than_lookahead_decodes_bytewise(bytes: &[u8]) {
        let expected: Vec<KeyEvent> =
            bytes.iter().map(|&byte| KeyEvent::PrintableByte(byte)).collect();
        assert_eq!(decode_all(bytes), expected);
    }

    #[test]
    fn test_pasted_arrows_split_at_lookahead_boundary() {
        // Reads of 4 bytes cut the second and third sequence after `ESC`.
        assert_eq!(
            decode_all(b"\x1b[B\x1b[C\x1b[C\x11"),
            vec![
                KeyEvent::ArrowDown,
                KeyEvent::ArrowRight,
                KeyEvent::ArrowRight,
                KeyEvent::ControlChord(0x11)
            ]
        );
    }

    #[test]
    fn test_leftover_escape_at_end_of_input() {
        assert_eq!(
            decode_all(b"abc\x1b"),
            vec![
                KeyEvent::PrintableByte(b'a'),
                KeyEvent::PrintableByte(b'b'),
                KeyEvent::PrintableByte(b'c'),
                KeyEvent::PrintableByte(0x1B)
            ]
        );
    }

    #[test]
    fn test_sequence_split_across_reads_decodes_bytewise() {
        let reader = ChunkedReader {
            chunks: vec![b"\x1b".to_vec(), b"[A".to_vec()],
            interrupted: false,
        };
        let mut decoder = KeyDecoder::new(reader);
        assert_eq!(decoder.read_key().unwrap(), KeyEvent::PrintableByte(0x1B));
        assert_eq!(decoder.read_key().unwrap(), KeyEvent::PrintableByte(b'['));
        assert_eq!(decoder.read_key().unwrap(), KeyEvent::PrintableByte(b'A'));
    }

    #[test]
    fn test_end_of_input_is_fatal() {
        let mut decoder = KeyDecoder::new(Cursor::new(Vec::new()));
        match decoder.read_key() {
            Err(KilosError::KeyReadFailed(e)) => {
                assert_eq!(e.kind(), io::ErrorKind::UnexpectedEof);
            }
            other => panic!("expected KeyReadFailed, got {other:?}"),
        }
    }

    #[test]
    fn test_read_error_is_fatal() {
        struct BrokenReader;
        impl Read for BrokenReader {
            fn read(&mut self, _: &mut [u8]) -> io::Result<usize> {
                Err(io::Error::other("device gone"))
            }
        }
        let mut decoder = KeyDecoder::new(BrokenReader);
        assert!(matches!(
            decoder.read_key(),
            Err(KilosError::KeyReadFailed(_))
        ));
    }
}
