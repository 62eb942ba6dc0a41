// Copyright (c) 2025 Kilos contributors. Licensed under Apache License, Version 2.0.

// cspell:words termios tcgetattr tcsetattr

//! The controlling terminal and `termios` get/set, via rustix.

use rustix::{fd::{AsFd, BorrowedFd},
             termios::{self, OptionalActions, Termios}};
use std::{fs::File, io};

/// The controlling terminal: standard input when it is a tty, `/dev/tty` when standard
/// input is redirected (`echo x | kilos`).
#[derive(Debug)]
pub enum TerminalFd {
    Stdin(io::Stdin),
    DevTty(File),
}

impl AsFd for TerminalFd {
    fn as_fd(&self) -> BorrowedFd<'_> {
        match self {
            TerminalFd::Stdin(it) => it.as_fd(),
            TerminalFd::DevTty(it) => it.as_fd(),
        }
    }
}

/// Open the controlling terminal, see [`TerminalFd`].
///
/// # Errors
///
/// If standard input isn't a tty and `/dev/tty` can't be opened read/write (no
/// controlling terminal, e.g. under a daemon or in CI).
pub fn get_terminal_fd() -> io::Result<TerminalFd> {
    let stdin = io::stdin();
    if termios::isatty(&stdin) {
        return Ok(TerminalFd::Stdin(stdin));
    }
    File::options()
        .read(true)
        .write(true)
        .open("/dev/tty")
        .map(TerminalFd::DevTty)
}

/// `tcgetattr()` on `fd`.
///
/// # Errors
///
/// Returns the OS error if `fd` is not a terminal or the query fails.
pub fn read_attributes(fd: impl AsFd) -> io::Result<Termios> {
    termios::tcgetattr(fd).map_err(io::Error::from)
}

/// `tcsetattr(TCSANOW)` on `fd`.
///
/// # Errors
///
/// Returns the OS error if the attributes can't be applied.
pub fn write_attributes(fd: impl AsFd, attributes: &Termios) -> io::Result<()> {
    termios::tcsetattr(fd, OptionalActions::Now, attributes).map_err(io::Error::from)
}
