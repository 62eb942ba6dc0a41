// Copyright (c) 2025 Kilos contributors. Licensed under Apache License, Version 2.0.

use crate::RawModeConfig;

/// Runtime options for [`run_editor()`](crate::run_editor).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionConfig {
    pub raw_mode: RawModeConfig,
    /// Re-query the window size after `SIGWINCH`.
    pub watch_resize: bool,
}

impl Default for SessionConfig {
    fn default() -> Self { Self::new(RawModeConfig::default()) }
}

impl SessionConfig {
    #[must_use]
    pub fn new(raw_mode: RawModeConfig) -> Self {
        Self {
            raw_mode,
            watch_resize: true,
        }
    }
}
