// Copyright (c) 2025 Kilos contributors. Licensed under Apache License, Version 2.0.

// cspell:words ioctl tiocgwinsz winsize tcgetwinsize

use super::{ViewportSize, get_cursor_position};
use crate::{CURSOR_DOWN_MAX, CURSOR_FORWARD_MAX, KilosError, KilosResult};
use rustix::{fd::AsFd, termios};
use std::io::{self, Read, Write};

/// The primary window size query. Implemented by [`IoctlWindowSize`]; tests substitute
/// their own.
pub trait WindowSizeQuery {
    /// # Errors
    ///
    /// Any error makes [`get_window_size()`] take the cursor report fallback.
    fn query_window_size(&self) -> io::Result<ViewportSize>;
}

/// `TIOCGWINSZ` on a terminal file descriptor.
#[derive(Debug)]
pub struct IoctlWindowSize<F: AsFd>(pub F);

impl<F: AsFd> WindowSizeQuery for IoctlWindowSize<F> {
    fn query_window_size(&self) -> io::Result<ViewportSize> {
        let winsize = termios::tcgetwinsize(&self.0)?;
        ViewportSize::new(winsize.ws_row, winsize.ws_col).ok_or_else(|| {
            io::Error::other(format!(
                "ioctl reported a {}x{} window",
                winsize.ws_row, winsize.ws_col
            ))
        })
    }
}

/// Determine the viewport size: `query` first, then the cursor report fallback, which
/// writes to `output` and reads the answer from `input`.
///
/// # Errors
///
/// - [`KilosError::ViewportProbeFailed`] if the fallback can't talk to the terminal, or
///   the reported position is zero.
/// - [`KilosError::CursorReportParseFailed`] if the fallback answer is malformed.
pub fn get_window_size(
    query: &impl WindowSizeQuery,
    input: &mut impl Read,
    output: &mut impl Write,
) -> KilosResult<ViewportSize> {
    match query.query_window_size() {
        Ok(size) => {
            tracing::debug!(message = "viewport size from ioctl", %size);
            return Ok(size);
        }
        Err(error) => {
            tracing::debug!(
                message = "ioctl window size unavailable, using cursor report fallback",
                %error
            );
        }
    }

    output
        .write_all(CURSOR_FORWARD_MAX.as_bytes())
        .and_then(|()| output.write_all(CURSOR_DOWN_MAX.as_bytes()))
        .map_err(|source| KilosError::ViewportProbeFailed {
            reason: "could not move the cursor to the bottom right corner",
            source: Some(source),
        })?;

    let (row, col) = get_cursor_position(input, output)?;
    let size = ViewportSize::new(row, col).ok_or(KilosError::ViewportProbeFailed {
        reason: "the terminal reported a zero cursor position",
        source: None,
    })?;
    tracing::debug!(message = "viewport size from cursor report", %size);
    Ok(size)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Cursor;

    struct FixedQuery(io::Result<ViewportSize>);

    impl WindowSizeQuery for FixedQuery {
        fn query_window_size(&self) -> io::Result<ViewportSize> {
            match &self.0 {
                Ok(size) => Ok(*size),
                Err(e) => Err(io::Error::new(e.kind(), e.to_string())),
            }
        }
    }

    #[test]
    fn test_ioctl_path_writes_nothing() {
        let query = FixedQuery(Ok(ViewportSize::new(40, 120).unwrap()));
        let mut input = Cursor::new(Vec::new());
        let mut output = Vec::new();

        let size = get_window_size(&query, &mut input, &mut output).unwrap();

        assert_eq!(size, ViewportSize::new(40, 120).unwrap());
        assert!(output.is_empty());
    }

    #[test]
    fn test_fallback_moves_cursor_then_asks_for_position() {
        let query = FixedQuery(Err(io::Error::other("not a tty")));
        let mut input = Cursor::new(b"\x1b[24;80R".to_vec());
        let mut output = Vec::new();

        let size = get_window_size(&query, &mut input, &mut output).unwrap();

        assert_eq!(size, ViewportSize::new(24, 80).unwrap());
        assert_eq!(output, b"\x1b[999C\x1b[999B\x1b[6n");
    }

    #[test]
    fn test_fallback_malformed_report_is_a_parse_error() {
        let query = FixedQuery(Err(io::Error::other("not a tty")));
        let mut input = Cursor::new(b"\x1b[24;xR".to_vec());
        let mut output = Vec::new();

        let result = get_window_size(&query, &mut input, &mut output);

        assert!(matches!(
            result,
            Err(KilosError::CursorReportParseFailed { .. })
        ));
    }

    #[test]
    fn test_fallback_zero_position_fails_the_probe() {
        let query = FixedQuery(Err(io::Error::other("not a tty")));
        let mut input = Cursor::new(b"\x1b[0;80R".to_vec());
        let mut output = Vec::new();

        let result = get_window_size(&query, &mut input, &mut output);

        assert!(matches!(
            result,
            Err(KilosError::ViewportProbeFailed { source: None, .. })
        ));
    }

    #[test]
    fn test_ioctl_on_a_regular_file_fails() {
        let file = tempfile::tempfile().unwrap();
        assert!(IoctlWindowSize(file).query_window_size().is_err());
    }
}
