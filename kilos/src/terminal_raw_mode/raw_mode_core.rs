// Copyright (c) 2025 Kilos contributors. Licensed under Apache License, Version 2.0.

// cspell:words termios tcsetattr

//! The raw mode RAII guard and the attribute snapshot it owns.

use super::{RawModeConfig, TerminalFd, get_terminal_fd, read_attributes,
            write_attributes};
use crate::{KilosError, KilosResult};
use rustix::termios::{SpecialCodes, Termios};

/// Immutable snapshot of a terminal's line discipline attributes, taken before raw mode
/// is applied. This is the restore point.
#[derive(Debug, Clone)]
pub struct TerminalAttributes(Termios);

impl TerminalAttributes {
    #[must_use]
    pub fn new(termios: Termios) -> Self { Self(termios) }

    #[must_use]
    pub fn termios(&self) -> &Termios { &self.0 }

    /// Field by field comparison of every attribute: the mode flags (including bits
    /// with no named flag), the line discipline where the platform has one, the speeds,
    /// and every `c_cc` slot.
    #[must_use]
    pub fn same_as(&self, other: &Termios) -> bool {
        let this = &self.0;
        this.input_modes == other.input_modes
            && this.output_modes == other.output_modes
            && this.control_modes == other.control_modes
            && this.local_modes == other.local_modes
            && same_line_discipline(this, other)
            && this.input_speed() == other.input_speed()
            && this.output_speed() == other.output_speed()
            && same_special_codes(&this.special_codes, &other.special_codes)
    }
}

/// rustix keeps the `c_cc` array private; its `Debug` prints each slot, unnamed ones
/// included, with a distinct rendering per byte value.
fn same_special_codes(lhs: &SpecialCodes, rhs: &SpecialCodes) -> bool {
    format!("{lhs:?}") == format!("{rhs:?}")
}

#[cfg(any(target_os = "linux", target_os = "android"))]
fn same_line_discipline(lhs: &Termios, rhs: &Termios) -> bool {
    lhs.line_discipline == rhs.line_discipline
}

#[cfg(not(any(target_os = "linux", target_os = "android")))]
fn same_line_discipline(_lhs: &Termios, _rhs: &Termios) -> bool { true }

/// RAII guard that holds the terminal in raw mode.
///
/// - [`RawModeGuard::enable()`] captures the original attributes and applies the raw
///   mode deltas from [`RawModeConfig`].
/// - [`RawModeGuard::restore()`] re-applies the original attributes and reports errors.
/// - `Drop` re-applies them if `restore()` wasn't called (early return, `?`, panic).
///
/// The saved attributes are moved out on the first restore, so they are applied exactly
/// once. See the [module docs](mod@super) for details.
#[derive(Debug)]
pub struct RawModeGuard {
    terminal: TerminalFd,
    original: Option<TerminalAttributes>,
}

impl RawModeGuard {
    /// Enable raw mode on the controlling terminal (stdin if it's a tty, otherwise
    /// `/dev/tty`).
    ///
    /// # Errors
    ///
    /// - [`KilosError::TermiosQueryFailed`] if there is no terminal, or `tcgetattr()`
    ///   fails. Nothing was changed.
    /// - [`KilosError::TermiosApplyFailed`] if `tcsetattr()` fails. Nothing was changed.
    pub fn enable(config: RawModeConfig) -> KilosResult<Self> {
        let terminal = get_terminal_fd().map_err(KilosError::TermiosQueryFailed)?;
        Self::enable_on(terminal, config)
    }

    /// Enable raw mode on a specific terminal.
    ///
    /// # Errors
    ///
    /// See [`RawModeGuard::enable()`].
    pub fn enable_on(terminal: TerminalFd, config: RawModeConfig) -> KilosResult<Self> {
        let original =
            read_attributes(&terminal).map_err(KilosError::TermiosQueryFailed)?;
        let raw = config.derive_raw_attributes(&original);
        write_attributes(&terminal, &raw).map_err(KilosError::TermiosApplyFailed)?;

        tracing::debug!(
            message = "raw mode enabled",
            read_timeout_deciseconds = config.read_timeout_deciseconds,
            ?terminal
        );

        Ok(Self {
            terminal,
            original: Some(TerminalAttributes::new(original)),
        })
    }

    /// The restore point captured by [`RawModeGuard::enable()`]. `None` once restored.
    #[must_use]
    pub fn original_attributes(&self) -> Option<&TerminalAttributes> {
        self.original.as_ref()
    }

    /// The terminal this guard controls, e.g. for the window size ioctl.
    #[must_use]
    pub fn terminal(&self) -> &TerminalFd { &self.terminal }

    /// Restore the original attributes and consume the guard.
    ///
    /// # Errors
    ///
    /// Returns [`KilosError::TermiosRestoreFailed`] if `tcsetattr()` fails.
    pub fn restore(mut self) -> KilosResult<()> { self.restore_once() }

    fn restore_once(&mut self) -> KilosResult<()> {
        let Some(original) = self.original.take() else {
            return Ok(());
        };
        write_attributes(&self.terminal, original.termios())
            .map_err(KilosError::TermiosRestoreFailed)?;
        tracing::debug!(message = "raw mode disabled, original attributes restored");
        Ok(())
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        if let Err(error) = self.restore_once() {
            tracing::error!(message = "failed to restore terminal on drop", ?error);
        }
    }
}
