// Copyright (c) 2025 Kilos contributors. Licensed under Apache License, Version 2.0.

use crate::{CLEAR_SCREEN, CURSOR_HOME, CursorPosition, KeyDecoder, KeyEvent,
            KilosError, KilosResult, QUIT_LETTER, ViewportSize, apply_movement,
            ctrl_key, render_refresh};
use std::io::{Read, Write};

/// What the run loop does after a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionAction {
    Continue,
    Quit,
}

/// Explicit session state, owned by the run loop for its whole lifetime.
///
/// Generic over the byte source and sink so it can run on standard input and output,
/// or on in-memory buffers in tests. It knows nothing about terminal attributes: the
/// caller holds the [`RawModeGuard`](crate::RawModeGuard).
#[derive(Debug)]
pub struct EditorSession<R, W> {
    decoder: KeyDecoder<R>,
    output: W,
    viewport: ViewportSize,
    cursor: CursorPosition,
}

impl<R: Read, W: Write> EditorSession<R, W> {
    pub fn new(decoder: KeyDecoder<R>, output: W, viewport: ViewportSize) -> Self {
        Self {
            decoder,
            output,
            viewport,
            cursor: CursorPosition::default(),
        }
    }

    #[must_use]
    pub fn viewport(&self) -> ViewportSize { self.viewport }

    #[must_use]
    pub fn cursor(&self) -> CursorPosition { self.cursor }

    pub fn set_viewport(&mut self, viewport: ViewportSize) {
        if viewport != self.viewport {
            tracing::debug!(message = "viewport resized", from = %self.viewport, to = %viewport);
        }
        self.viewport = viewport;
    }

    /// The output sink. Used by tests and by library users that render into a buffer.
    pub fn output(&self) -> &W { &self.output }

    /// Paint the whole viewport and flush.
    ///
    /// # Errors
    ///
    /// [`KilosError::OutputWriteFailed`].
    pub fn refresh_screen(&mut self) -> KilosResult<()> {
        let frame = render_refresh(self.viewport, self.cursor);
        self.write_bytes(frame.as_bytes())?;
        self.flush()
    }

    /// React to one key:
    ///
    /// - Ctrl+Q: clear the screen, home the cursor, [`SessionAction::Quit`].
    /// - arrows: move the cursor.
    /// - [`KeyEvent::Unrecognized`]: ignored.
    /// - any other byte (printable or chord): echoed as is.
    ///
    /// # Errors
    ///
    /// [`KilosError::OutputWriteFailed`].
    pub fn process_key(&mut self, event: KeyEvent) -> KilosResult<SessionAction> {
        match event {
            KeyEvent::ControlChord(byte) if byte == ctrl_key(QUIT_LETTER) => {
                tracing::debug!(message = "quit chord received");
                self.write_bytes(CLEAR_SCREEN.as_bytes())?;
                self.write_bytes(CURSOR_HOME.as_bytes())?;
                self.flush()?;
                return Ok(SessionAction::Quit);
            }
            KeyEvent::ArrowUp
            | KeyEvent::ArrowDown
            | KeyEvent::ArrowLeft
            | KeyEvent::ArrowRight => {
                self.cursor = apply_movement(self.cursor, event);
            }
            KeyEvent::PrintableByte(byte) | KeyEvent::ControlChord(byte) => {
                self.write_bytes(&[byte])?;
            }
            KeyEvent::Unrecognized => {}
        }
        Ok(SessionAction::Continue)
    }

    /// Paint, read one key, react. Returns what [`Self::process_key()`] returned.
    ///
    /// # Errors
    ///
    /// [`KilosError::OutputWriteFailed`] or [`KilosError::KeyReadFailed`].
    pub fn step(&mut self) -> KilosResult<SessionAction> {
        self.refresh_screen()?;
        let event = self.decoder.read_key()?;
        self.process_key(event)
    }

    /// Run until the quit chord. Before each repaint `poll_resize` may supply a new
    /// viewport size.
    ///
    /// # Errors
    ///
    /// The first error from [`Self::step()`]. All of them are fatal.
    pub fn run(
        &mut self,
        mut poll_resize: impl FnMut() -> Option<ViewportSize>,
    ) -> KilosResult<()> {
        loop {
            if let Some(viewport) = poll_resize() {
                self.set_viewport(viewport);
            }
            if self.step()? == SessionAction::Quit {
                return Ok(());
            }
        }
    }

    fn write_bytes(&mut self, bytes: &[u8]) -> KilosResult<()> {
        self.output
            .write_all(bytes)
            .map_err(KilosError::OutputWriteFailed)
    }

    fn flush(&mut self) -> KilosResult<()> {
        self.output.flush().map_err(KilosError::OutputWriteFailed)
    }
}
