// Copyright (c) 2025 Kilos contributors. Licensed under Apache License, Version 2.0.

//! End to end: the slave runs the editor, the master types `h`, `i`, Ctrl+Q and checks
//! the echo, the clear screen on quit, and a clean exit with the terminal attributes
//! restored.

use crate::{CLEAR_SCREEN, SHOW_CURSOR, SessionConfig, TerminalAttributes,
            generate_pty_test, read_attributes, run_editor,
            test_fixtures::{find_bytes, read_until_contains, slave_fail, slave_succeed}};
use std::io::Write;

generate_pty_test! {
    /// Run with: `cargo test -p kilos --lib test_pty_editor_echo_then_quit -- --nocapture`
    test_fn: test_pty_editor_echo_then_quit,
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

    // First frame painted, raw mode is on.
    assert!(
        read_until_contains(&mut reader, &mut output, SHOW_CURSOR.as_bytes()),
        "No frame painted: {:?}",
        String::from_utf8_lossy(&output)
    );

    // An echoed byte directly follows the end of the frame before it.
    let echo_h = format!("{SHOW_CURSOR}h");
    let echo_i = format!("{SHOW_CURSOR}i");

    writer.write_all(b"h").expect("Failed to write");
    writer.flush().expect("Failed to flush");
    assert!(read_until_contains(&mut reader, &mut output, echo_h.as_bytes()));

    writer.write_all(b"i").expect("Failed to write");
    writer.flush().expect("Failed to flush");
    assert!(read_until_contains(&mut reader, &mut output, echo_i.as_bytes()));

    writer.write_all(&[0x11]).expect("Failed to write");
    writer.flush().expect("Failed to flush");
    assert!(
        read_until_contains(&mut reader, &mut output, b"SUCCESS:"),
        "Slave did not report success: {:?}",
        String::from_utf8_lossy(&output)
    );

    let h = find_bytes(&output, echo_h.as_bytes()).expect("h echoed");
    let i = find_bytes(&output, echo_i.as_bytes()).expect("i echoed");
    let clear = find_bytes(&output, CLEAR_SCREEN.as_bytes()).expect("screen cleared");
    assert!(h < i && i < clear, "Out of order: h={h} i={i} clear={clear}");

    let status = child.wait().expect("Failed to wait for slave");
    assert!(status.success(), "Slave exited with {status:?}");
}

fn pty_slave_entry_point() -> ! {
    let stdin = std::io::stdin();
    let before = match read_attributes(&stdin) {
        Ok(it) => TerminalAttributes::new(it),
        Err(e) => slave_fail(format!("tcgetattr before run: {e}")),
    };

    if let Err(e) = run_editor(SessionConfig::default()) {
        slave_fail(format!("editor failed: {e}"));
    }

    match read_attributes(&stdin) {
        Ok(after) if before.same_as(&after) => slave_succeed("editor quit"),
        Ok(_) => slave_fail("attributes differ after quit"),
        Err(e) => slave_fail(format!("tcgetattr after run: {e}")),
    }
}
