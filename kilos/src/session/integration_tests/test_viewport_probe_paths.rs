// Copyright (c) 2025 Kilos contributors. Licensed under Apache License, Version 2.0.

// cspell:words ioctl

//! Both viewport probe paths against a 24x80 PTY. For the fallback the master plays the
//! terminal and answers `ESC [ 6 n`.

use crate::{IoctlWindowSize, RawModeConfig, RawModeGuard, ViewportSize, WindowSizeQuery,
            generate_pty_test, get_window_size,
            test_fixtures::{read_slave_report, read_until_contains, slave_fail,
                            slave_succeed}};
use std::io::{self, Write};

generate_pty_test! {
    /// Run with: `cargo test -p kilos --lib test_pty_viewport_ioctl -- --nocapture`
    test_fn: test_pty_viewport_ioctl,
    master: ioctl_master_entry_point,
    slave: ioctl_slave_entry_point
}

generate_pty_test! {
    /// Run with:
    /// `cargo test -p kilos --lib test_pty_viewport_cursor_report_fallback -- --nocapture`
    test_fn: test_pty_viewport_cursor_report_fallback,
    master: fallback_master_entry_point,
    slave: fallback_slave_entry_point
}

fn ioctl_master_entry_point(
    pty_pair: portable_pty::PtyPair,
    mut child: Box<dyn portable_pty::Child + Send + Sync>,
) {
    let reader = pty_pair
        .master
        .try_clone_reader()
        .expect("Failed to get reader");

    let report = read_slave_report(reader);

    assert!(report.slave_started, "Slave did not start properly");
    let line = report.success_line.expect("Test did not report success");
    assert!(line.ends_with("24x80"), "{line}");

    let status = child.wait().expect("Failed to wait for slave");
    assert!(status.success(), "Slave exited with {status:?}");
}

fn ioctl_slave_entry_point() -> ! {
    match IoctlWindowSize(io::stdin()).query_window_size() {
        Ok(size) => slave_succeed(size),
        Err(e) => slave_fail(format!("ioctl: {e}")),
    }
}

fn fallback_master_entry_point(
    pty_pair: portable_pty::PtyPair,
    mut child: Box<dyn portable_pty::Child + Send + Sync>,
) {
    let mut reader = pty_pair
        .master
        .try_clone_reader()
        .expect("Failed to get reader");
    let mut writer = pty_pair.master.take_writer().expect("Failed to get writer");
    let mut output = Vec::new();

    assert!(
        read_until_contains(&mut reader, &mut output, b"\x1b[999C\x1b[999B\x1b[6n"),
        "No cursor position request: {:?}",
        String::from_utf8_lossy(&output)
    );

    writer.write_all(b"\x1b[24;80R").expect("Failed to write");
    writer.flush().expect("Failed to flush");

    let report = read_slave_report(reader);
    let line = report.success_line.expect("Test did not report success");
    assert!(line.ends_with("24x80"), "{line}");

    let status = child.wait().expect("Failed to wait for slave");
    assert!(status.success(), "Slave exited with {status:?}");
}

/// Forces the fallback.
struct UnsupportedQuery;

impl WindowSizeQuery for UnsupportedQuery {
    fn query_window_size(&self) -> io::Result<ViewportSize> {
        Err(io::ErrorKind::Unsupported.into())
    }
}

fn fallback_slave_entry_point() -> ! {
    // Raw mode, so the answer isn't line buffered or echoed.
    let guard = match RawModeGuard::enable(RawModeConfig::default()) {
        Ok(it) => it,
        Err(e) => slave_fail(format!("enable: {e}")),
    };

    let result = get_window_size(&UnsupportedQuery, &mut io::stdin(), &mut io::stdout());

    if let Err(e) = guard.restore() {
        slave_fail(format!("restore: {e}"));
    }
    match result {
        Ok(size) => slave_succeed(size),
        Err(e) => slave_fail(format!("fallback probe: {e}")),
    }
}
