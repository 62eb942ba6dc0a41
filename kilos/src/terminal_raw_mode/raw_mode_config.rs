// Copyright (c) 2025 Kilos contributors. Licensed under Apache License, Version 2.0.

// cspell:words termios vmin vtime icanon isig ixon icrnl opost brkint inpck istrip

use rustix::termios::{InputModes, LocalModes, OutputModes, SpecialCodeIndex, Termios};

/// `VMIN` for raw mode: `read()` blocks until at least one byte is available.
pub const VMIN_RAW_MODE: u8 = 1;

/// Default `VTIME` for raw mode: no inter-byte timeout.
pub const VTIME_RAW_MODE: u8 = 0;

/// The attribute deltas that turn a terminal's original attributes into raw mode
/// attributes. See the [module docs](mod@super) for the full flag table.
///
/// The only knob is the read timeout (`VTIME`, in tenths of a second). The default of 0
/// together with `VMIN = 1` gives a plain blocking read, which is what the key decoder
/// expects. A nonzero value makes `read()` return after that interval once at least one
/// byte has arrived.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawModeConfig {
    pub read_timeout_deciseconds: u8,
}

impl Default for RawModeConfig {
    fn default() -> Self {
        Self {
            read_timeout_deciseconds: VTIME_RAW_MODE,
        }
    }
}

impl RawModeConfig {
    #[must_use]
    pub fn with_read_timeout(read_timeout_deciseconds: u8) -> Self {
        Self {
            read_timeout_deciseconds,
        }
    }

    /// Flags cleared from `local_modes`.
    #[must_use]
    pub fn local_modes_cleared() -> LocalModes {
        LocalModes::ECHO | LocalModes::ICANON | LocalModes::ISIG
    }

    /// Flags cleared from `input_modes`.
    #[must_use]
    pub fn input_modes_cleared() -> InputModes {
        InputModes::BRKINT
            | InputModes::ICRNL
            | InputModes::INPCK
            | InputModes::ISTRIP
            | InputModes::IXON
    }

    /// Flags cleared from `output_modes`.
    #[must_use]
    pub fn output_modes_cleared() -> OutputModes { OutputModes::OPOST }

    /// Compute the raw mode attributes from a copy of the original attributes. The
    /// original is left untouched so it can serve as the restore point.
    #[must_use]
    pub fn derive_raw_attributes(&self, original: &Termios) -> Termios {
        let mut raw = original.clone();
        raw.local_modes.remove(Self::local_modes_cleared());
        raw.input_modes.remove(Self::input_modes_cleared());
        raw.output_modes.remove(Self::output_modes_cleared());
        raw.special_codes[SpecialCodeIndex::VMIN] = VMIN_RAW_MODE;
        raw.special_codes[SpecialCodeIndex::VTIME] = self.read_timeout_deciseconds;
        raw
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_is_blocking_read() {
        assert_eq!(RawModeConfig::default().read_timeout_deciseconds, 0);
        assert_eq!(
            RawModeConfig::with_read_timeout(1),
            RawModeConfig {
                read_timeout_deciseconds: 1
            }
        );
    }

    #[test]
    fn test_cleared_flags() {
        let local = RawModeConfig::local_modes_cleared();
        assert!(local.contains(LocalModes::ECHO));
        assert!(local.contains(LocalModes::ICANON));
        assert!(local.contains(LocalModes::ISIG));

        let input = RawModeConfig::input_modes_cleared();
        assert!(input.contains(InputModes::IXON));
        assert!(input.contains(InputModes::ICRNL));
        assert!(!input.contains(InputModes::IGNBRK));

        assert_eq!(RawModeConfig::output_modes_cleared(), OutputModes::OPOST);
    }
}
