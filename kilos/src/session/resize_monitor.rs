// Copyright (c) 2025 Kilos contributors. Licensed under Apache License, Version 2.0.

// cspell:words sigwinch

use signal_hook::{SigId, consts::SIGWINCH};
use std::{io,
          sync::{Arc,
                 atomic::{AtomicBool, Ordering}}};

/// Sets a flag when the terminal is resized (`SIGWINCH`). The session polls it before
/// each repaint. Since the key read blocks, a resize shows up after the next keypress.
///
/// The handler is unregistered on drop.
#[derive(Debug)]
pub struct ResizeMonitor {
    pending: Arc<AtomicBool>,
    signal_id: SigId,
}

impl ResizeMonitor {
    /// # Errors
    ///
    /// If the signal handler can't be registered.
    pub fn install() -> io::Result<Self> {
        let pending = Arc::new(AtomicBool::new(false));
        let signal_id = signal_hook::flag::register(SIGWINCH, Arc::clone(&pending))?;
        Ok(Self { pending, signal_id })
    }

    /// Whether a resize happened since the last call.
    #[must_use]
    pub fn take_pending(&self) -> bool { self.pending.swap(false, Ordering::Relaxed) }
}

impl Drop for ResizeMonitor {
    fn drop(&mut self) { signal_hook::low_level::unregister(self.signal_id); }
}
