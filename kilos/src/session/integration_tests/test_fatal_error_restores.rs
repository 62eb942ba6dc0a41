// Copyright (c) 2025 Kilos contributors. Licensed under Apache License, Version 2.0.

// cspell:words ioctl

//! A fatal session error: the master shrinks the PTY to 0x0 so the ioctl probe fails,
//! then answers the cursor position request with garbage. `run_editor()` must return
//! the parse error with the terminal attributes restored.

use crate::{CLEAR_SCREEN, KilosError, SessionConfig, TerminalAttributes,
            generate_pty_test, read_attributes, run_editor,
            test_fixtures::{find_bytes, read_until_contains, slave_fail, slave_succeed}};
use portable_pty::PtySize;
use std::io::{BufRead, Write};

generate_pty_test! {
    /// Run with: `cargo test -p kilos --lib test_pty_editor_fatal_error_restores -- --nocapture`
    test_fn: test_pty_editor_fatal_error_restores,
    master: pty_master_entry_point,
    slave: pty_slave_entry_point
}

fn pty_master_entry_point(
    pty_pair: portable_pty::PtyPair,
    mut child: Box<dyn portable_pty::Child + Send + Sync>,
) {
    let mut reader = pty_pair
        .master
        .try_clone_reader()
        .expect("Failed to get reader");
    let mut writer = pty_pair.master.take_writer().expect("Failed to get writer");
    let mut output = Vec::new();

    assert!(read_until_contains(&mut reader, &mut output, b"SLAVE_STARTING"));

    pty_pair
        .master
        .resize(PtySize {
            rows: 0,
            cols: 0,
            pixel_width: 0,
            pixel_height: 0,
        })
        .expect("Failed to resize");

    // Still in cooked mode, the slave waits for a whole line.
    writer.write_all(b"go\n").expect("Failed to write");
    writer.flush().expect("Failed to flush");

    assert!(
        read_until_contains(&mut reader, &mut output, b"\x1b[999C\x1b[999B\x1b[6n"),
        "No cursor position request: {:?}",
        String::from_utf8_lossy(&output)
    );

    writer.write_all(b"\x1b[xyzR").expect("Failed to write");
    writer.flush().expect("Failed to flush");

    assert!(
        read_until_contains(&mut reader, &mut output, b"SUCCESS:"),
        "Slave did not report success: {:?}",
        String::from_utf8_lossy(&output)
    );
    assert!(
        find_bytes(&output, b"FAILED:").is_none(),
        "{}",
        String::from_utf8_lossy(&output)
    );
    assert!(find_bytes(&output, CLEAR_SCREEN.as_bytes()).is_some());

    let status = child.wait().expect("Failed to wait for slave");
    assert!(status.success(), "Slave exited with {status:?}");
}

fn pty_slave_entry_point() -> ! {
    let stdin = std::io::stdin();

    let mut line = String::new();
    if let Err(e) = stdin.lock().read_line(&mut line) {
        slave_fail(format!("read go line: {e}"));
    }

    let before = match read_attributes(&stdin) {
        Ok(it) => TerminalAttributes::new(it),
        Err(e) => slave_fail(format!("tcgetattr before run: {e}")),
    };

    match run_editor(SessionConfig::default()) {
        Err(KilosError::CursorReportParseFailed { .. }) => {}
        Err(e) => slave_fail(format!("unexpected error: {e}")),
        Ok(()) => slave_fail("editor returned Ok on a malformed cursor report"),
    }

    match read_attributes(&stdin) {
        Ok(after) if before.same_as(&after) => {
            slave_succeed("attributes restored after fatal error");
        }
        Ok(_) => slave_fail("attributes differ after fatal error"),
        Err(e) => slave_fail(format!("tcgetattr after run: {e}")),
    }
}
