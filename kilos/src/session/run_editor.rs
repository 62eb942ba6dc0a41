// Copyright (c) 2025 Kilos contributors. Licensed under Apache License, Version 2.0.

// cspell:words sigwinch ioctl

use super::{EditorSession, ResizeMonitor, SessionConfig};
use crate::{CLEAR_SCREEN, CURSOR_HOME, IoctlWindowSize, KeyDecoder, KilosResult,
            RawModeGuard, WindowSizeQuery, get_window_size};
use std::io::{self, Write};

/// Run the editor on the controlling terminal until Ctrl+Q.
///
/// Raw mode is held by a [`RawModeGuard`] for the whole run and restored exactly once
/// on every exit path: explicitly here on quit and on errors, by its `Drop` on panic.
/// On a fatal error the screen is cleared (best effort) before restoring, so the
/// diagnostic the caller prints lands on a clean screen.
///
/// # Errors
///
/// - Raw mode could not be enabled: nothing was changed.
/// - Any fatal session error, after the terminal was restored.
/// - [`KilosError::TermiosRestoreFailed`](crate::KilosError::TermiosRestoreFailed) if
///   the session ended normally but restoring failed.
pub fn run_editor(config: SessionConfig) -> KilosResult<()> {
    let guard = RawModeGuard::enable(config.raw_mode)?;

    let result = run_in_raw_mode(&guard, config);

    if let Err(error) = &result {
        tracing::error!(message = "session failed", ?error);
        let mut stdout = io::stdout();
        // Best effort, the original error is what gets reported.
        let _unused = stdout
            .write_all(CLEAR_SCREEN.as_bytes())
            .and_then(|()| stdout.write_all(CURSOR_HOME.as_bytes()))
            .and_then(|()| stdout.flush());
    }

    match (result, guard.restore()) {
        (Ok(()), restored) => restored,
        (Err(error), Ok(())) => Err(error),
        (Err(error), Err(restore_error)) => {
            tracing::error!(message = "restore after session failure also failed", ?restore_error);
            Err(error)
        }
    }
}

fn run_in_raw_mode(guard: &RawModeGuard, config: SessionConfig) -> KilosResult<()> {
    let mut stdin = io::stdin();
    let mut stdout = io::stdout();

    let size_query = IoctlWindowSize(guard.terminal());
    let viewport = get_window_size(&size_query, &mut stdin, &mut stdout)?;

    let resize_monitor = if config.watch_resize {
        ResizeMonitor::install()
            .inspect_err(|error| {
                tracing::warn!(message = "resize notifications unavailable", %error);
            })
            .ok()
    } else {
        None
    };

    let mut session = EditorSession::new(KeyDecoder::new(stdin), stdout.lock(), viewport);
    tracing::debug!(message = "session started", %viewport);

    session.run(|| {
        let monitor = resize_monitor.as_ref()?;
        if !monitor.take_pending() {
            return None;
        }
        size_query
            .query_window_size()
            .inspect_err(|error| {
                tracing::warn!(message = "window size query after resize failed", %error);
            })
            .ok()
    })?;

    tracing::debug!(message = "session ended by quit chord");
    Ok(())
}
