// Copyright (c) 2025 Kilos contributors. Licensed under Apache License, Version 2.0.

// cspell:words termios ioctl

//! Error types for the terminal session.
//!
//! Every variant of [`KilosError`] is fatal to the session. None of them represent a
//! transient condition that could be told apart from permanent loss of the terminal, so
//! nothing is retried. The caller restores the terminal (the [`RawModeGuard`] does this
//! on drop), prints the diagnostic to standard error, and exits with a nonzero code.
//!
//! | Variant                     | Raised by                        | Terminal restored? |
//! | :-------------------------- | :------------------------------- | :----------------- |
//! | [`TermiosQueryFailed`]      | [`RawModeGuard::enable()`]       | Nothing to restore |
//! | [`TermiosApplyFailed`]      | [`RawModeGuard::enable()`]       | Nothing to restore |
//! | [`TermiosRestoreFailed`]    | [`RawModeGuard::restore()`]      | Failed             |
//! | [`ViewportProbeFailed`]     | [`get_window_size()`]            | Yes                |
//! | [`CursorReportParseFailed`] | [`get_cursor_position()`]        | Yes                |
//! | [`KeyReadFailed`]           | [`KeyDecoder::read_key()`]       | Yes                |
//! | [`OutputWriteFailed`]       | [`EditorSession`] paint and echo | Yes                |
//!
//! [`TermiosQueryFailed`]: KilosError::TermiosQueryFailed
//! [`TermiosApplyFailed`]: KilosError::TermiosApplyFailed
//! [`TermiosRestoreFailed`]: KilosError::TermiosRestoreFailed
//! [`ViewportProbeFailed`]: KilosError::ViewportProbeFailed
//! [`CursorReportParseFailed`]: KilosError::CursorReportParseFailed
//! [`KeyReadFailed`]: KilosError::KeyReadFailed
//! [`OutputWriteFailed`]: KilosError::OutputWriteFailed
//! [`RawModeGuard`]: crate::RawModeGuard
//! [`RawModeGuard::enable()`]: crate::RawModeGuard::enable
//! [`RawModeGuard::restore()`]: crate::RawModeGuard::restore
//! [`get_window_size()`]: crate::get_window_size
//! [`get_cursor_position()`]: crate::get_cursor_position
//! [`KeyDecoder::read_key()`]: crate::KeyDecoder::read_key
//! [`EditorSession`]: crate::EditorSession

use miette::Diagnostic;

/// Result type used throughout the library.
pub type KilosResult<T> = Result<T, KilosError>;

/// Fatal errors of the terminal session. See the [module docs](self) for which
/// component raises each one.
#[derive(Debug, thiserror::Error, Diagnostic)]
pub enum KilosError {
    /// `tcgetattr()` failed, so there is no restore point and raw mode can't be enabled.
    #[error("Failed to read the terminal attributes")]
    #[diagnostic(
        code(kilos::termios::query),
        help("kilos must run in an interactive terminal (stdin or /dev/tty must be a tty)")
    )]
    TermiosQueryFailed(#[source] std::io::Error),

    /// `tcsetattr()` with the raw mode attributes failed.
    #[error("Failed to apply the raw mode terminal attributes")]
    #[diagnostic(code(kilos::termios::apply))]
    TermiosApplyFailed(#[source] std::io::Error),

    /// `tcsetattr()` with the saved attributes failed.
    #[error("Failed to restore the original terminal attributes")]
    #[diagnostic(
        code(kilos::termios::restore),
        help("Run `stty sane` or `reset` to recover the terminal")
    )]
    TermiosRestoreFailed(#[source] std::io::Error),

    /// Neither the ioctl nor the cursor position report produced a usable size.
    #[error("Failed to determine the terminal window size: {reason}")]
    #[diagnostic(code(kilos::viewport::probe))]
    ViewportProbeFailed {
        reason: &'static str,
        #[source]
        source: Option<std::io::Error>,
    },

    /// The terminal's answer to `ESC [ 6 n` was not exactly `ESC [ <row> ; <col> R`.
    #[error("Malformed cursor position report {raw:?}: {reason}")]
    #[diagnostic(
        code(kilos::viewport::cursor_report),
        help("Expected a response of the form `ESC [ <row> ; <col> R`")
    )]
    CursorReportParseFailed { reason: &'static str, raw: String },

    /// Standard input hit end of file or failed. The session has lost its keyboard.
    #[error("Failed to read a key from standard input")]
    #[diagnostic(code(kilos::input::key_read))]
    KeyReadFailed(#[source] std::io::Error),

    /// Writing or flushing escape sequences to the terminal failed.
    #[error("Failed to write to the terminal")]
    #[diagnostic(code(kilos::output::write))]
    OutputWriteFailed(#[source] std::io::Error),
}

impl KilosError {
    /// Shorthand for a [`KilosError::CursorReportParseFailed`] carrying the offending
    /// bytes, rendered lossily so escape bytes show up in the diagnostic.
    #[must_use]
    pub fn cursor_report(reason: &'static str, raw: &[u8]) -> Self {
        KilosError::CursorReportParseFailed {
            reason,
            raw: String::from_utf8_lossy(raw).into_owned(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_cursor_report_keeps_raw_bytes() {
        let error = KilosError::cursor_report("missing `R` terminator", b"\x1b[24;80");
        assert_eq!(
            error.to_string(),
            "Malformed cursor position report \"\\u{1b}[24;80\": missing `R` terminator"
        );
    }

    #[test]
    fn test_diagnostic_codes() {
        let error = KilosError::KeyReadFailed(std::io::ErrorKind::UnexpectedEof.into());
        let code = error.code().map(|it| it.to_string());
        assert_eq!(code.as_deref(), Some("kilos::input::key_read"));
    }
}
