// Copyright (c) 2025 Kilos contributors. Licensed under Apache License, Version 2.0.

// cspell:words eintr

//! The cursor position report protocol: write `ESC [ 6 n`, the terminal answers with
//! `ESC [ <row> ; <col> R` on standard input.

use crate::{ANSI_CSI_BRACKET, ANSI_ESC, ANSI_PARAM_SEPARATOR,
            DSR_CURSOR_POSITION_RESPONSE_END, KilosError, KilosResult,
            REQUEST_CURSOR_POSITION};
use smallvec::SmallVec;
use std::io::{self, Read, Write};

/// Longest answer accepted before giving up on finding the `R` terminator.
/// `ESC [ 65535 ; 65535 R` is 14 bytes.
pub const MAX_CURSOR_REPORT_LEN: usize = 32;

/// Ask the terminal where the cursor is. Returns `(row, col)`, 1-based, exactly as
/// reported.
///
/// Reads one byte at a time up to and including the `R` terminator, so input that
/// follows the report stays unread.
///
/// # Errors
///
/// - [`KilosError::ViewportProbeFailed`] if the request can't be written or the answer
///   can't be read.
/// - [`KilosError::CursorReportParseFailed`] if the answer ends early, runs past
///   [`MAX_CURSOR_REPORT_LEN`], or is not of the form `ESC [ <row> ; <col> R`.
pub fn get_cursor_position(
    input: &mut impl Read,
    output: &mut impl Write,
) -> KilosResult<(u16, u16)> {
    output
        .write_all(REQUEST_CURSOR_POSITION.as_bytes())
        .and_then(|()| output.flush())
        .map_err(|source| KilosError::ViewportProbeFailed {
            reason: "could not send the cursor position request",
            source: Some(source),
        })?;

    let mut report = SmallVec::<[u8; MAX_CURSOR_REPORT_LEN]>::new();
    loop {
        let mut byte = [0_u8; 1];
        match input.read(&mut byte) {
            Ok(0) => {
                return Err(KilosError::cursor_report(
                    "input ended before the `R` terminator",
                    &report,
                ));
            }
            Ok(_) => {
                report.push(byte[0]);
                if byte[0] == DSR_CURSOR_POSITION_RESPONSE_END {
                    break;
                }
                if report.len() >= MAX_CURSOR_REPORT_LEN {
                    return Err(KilosError::cursor_report(
                        "no `R` terminator within the length limit",
                        &report,
                    ));
                }
            }
            Err(e) if e.kind() == io::ErrorKind::Interrupted => {}
            Err(source) => {
                return Err(KilosError::ViewportProbeFailed {
                    reason: "could not read the cursor position report",
                    source: Some(source),
                });
            }
        }
    }

    let position = parse_cursor_position_report(&report)?;
    tracing::debug!(message = "cursor position report", row = position.0, col = position.1);
    Ok(position)
}

/// Parse exactly `ESC [ <row> ; <col> R`. Both fields must be non-empty runs of ASCII
/// digits that fit in a `u16`. Anything else is an error, never a partial result.
///
/// # Errors
///
/// [`KilosError::CursorReportParseFailed`] naming what was wrong.
pub fn parse_cursor_position_report(report: &[u8]) -> KilosResult<(u16, u16)> {
    let fail = |reason| KilosError::cursor_report(reason, report);

    let params = match report {
        [ANSI_ESC, ANSI_CSI_BRACKET, params @ ..] => params,
        _ => return Err(fail("missing `ESC [` prefix")),
    };
    let params = match params {
        [params @ .., DSR_CURSOR_POSITION_RESPONSE_END] => params,
        _ => return Err(fail("missing `R` terminator")),
    };

    let mut fields = params.split(|&byte| byte == ANSI_PARAM_SEPARATOR);
    let (Some(row), Some(col), None) = (fields.next(), fields.next(), fields.next())
    else {
        return Err(fail("expected exactly two `;` separated fields"));
    };

    Ok((
        parse_field(row).ok_or_else(|| fail("row is not a number"))?,
        parse_field(col).ok_or_else(|| fail("column is not a number"))?,
    ))
}

fn parse_field(digits: &[u8]) -> Option<u16> {
    if digits.is_empty() || !digits.iter().all(u8::is_ascii_digit) {
        return None;
    }
    std::str::from_utf8(digits).ok()?.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Cursor;
    use test_case::test_case;

    #[test_case(b"\x1b[24;80R", (24, 80) ; "standard 24x80")]
    #[test_case(b"\x1b[1;1R", (1, 1) ; "top left")]
    #[test_case(b"\x1b[0;0R", (0, 0) ; "zero is not a parse error")]
    #[test_case(b"\x1b[65535;200R", (65535, 200) ; "u16 max")]
    fn test_parse_valid(report: &[u8], expected: (u16, u16)) {
        assert_eq!(parse_cursor_position_report(report).unwrap(), expected);
    }

    #[test_case(b"\x1b[24;80" ; "missing terminator")]
    #[test_case(b"[24;80R" ; "missing escape")]
    #[test_case(b"\x1b24;80R" ; "missing bracket")]
    #[test_case(b"\x1b[x;80R" ; "non numeric row")]
    #[test_case(b"\x1b[24;8xR" ; "non numeric column")]
    #[test_case(b"\x1b[;80R" ; "empty row")]
    #[test_case(b"\x1b[24;R" ; "empty column")]
    #[test_case(b"\x1b[24R" ; "single field")]
    #[test_case(b"\x1b[24;80;1R" ; "three fields")]
    #[test_case(b"\x1b[+24;80R" ; "sign")]
    #[test_case(b"\x1b[65536;80R" ; "row overflows u16")]
    #[test_case(b"" ; "empty")]
    fn test_parse_malformed(report: &[u8]) {
        let result = parse_cursor_position_report(report);
        assert!(
            matches!(result, Err(KilosError::CursorReportParseFailed { .. })),
            "{result:?}"
        );
    }

    #[test]
    fn test_get_cursor_position_leaves_following_input_unread() {
        let mut input = Cursor::new(b"\x1b[24;80Rhi".to_vec());
        let mut output = Vec::new();

        let position = get_cursor_position(&mut input, &mut output).unwrap();

        assert_eq!(position, (24, 80));
        assert_eq!(output, b"\x1b[6n");
        let mut rest = Vec::new();
        input.read_to_end(&mut rest).unwrap();
        assert_eq!(rest, b"hi");
    }

    #[test]
    fn test_get_cursor_position_eof_before_terminator() {
        let mut input = Cursor::new(b"\x1b[24;80".to_vec());
        let mut output = Vec::new();

        let result = get_cursor_position(&mut input, &mut output);

        assert!(matches!(
            result,
            Err(KilosError::CursorReportParseFailed { .. })
        ));
    }

    #[test]
    fn test_get_cursor_position_runaway_answer() {
        let mut input = Cursor::new(vec![b'9'; 100]);
        let mut output = Vec::new();

        let result = get_cursor_position(&mut input, &mut output);

        assert!(matches!(
            result,
            Err(KilosError::CursorReportParseFailed { .. })
        ));
        assert_eq!(input.position(), MAX_CURSOR_REPORT_LEN as u64);
    }
}
