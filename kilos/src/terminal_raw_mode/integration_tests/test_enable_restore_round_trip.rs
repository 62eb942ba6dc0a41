// Copyright (c) 2025 Kilos contributors. Licensed under Apache License, Version 2.0.

//! `enable()` then `restore()` leaves the attribute record bit for bit equal to the snapshot taken
//! before `enable()`. Also covers the `Drop` path, both on a normal end of scope and
//! while unwinding from a panic, and a second enable/restore cycle.

use crate::{RawModeConfig, RawModeGuard, TerminalAttributes, generate_pty_test,
            read_attributes,
            test_fixtures::{read_slave_report, slave_fail, slave_succeed}};
use rustix::termios::SpecialCodeIndex;

generate_pty_test! {
    /// Run with: `cargo test -p kilos --lib test_pty_raw_mode_round_trip -- --nocapture`
    test_fn: test_pty_raw_mode_round_trip,
    master: pty_master_entry_point,
    slave: pty_slave_entry_point
}

fn pty_master_entry_point(
    pty_pair: portable_pty::PtyPair,
    mut child: Box<dyn portable_pty::Child + Send + Sync>,
) {
    let reader = pty_pair
        .master
        .try_clone_reader()
        .expect("Failed to get reader");

    let report = read_slave_report(reader);

    assert!(report.slave_started, "Slave did not start properly");
    assert!(
        report.success_line.is_some(),
        "Test did not report success: {:?}",
        report.lines
    );

    let status = child.wait().expect("Failed to wait for slave");
    assert!(status.success(), "Slave exited with {status:?}");
}

fn pty_slave_entry_point() -> ! {
    let stdin = std::io::stdin();
    let before = match read_attributes(&stdin) {
        Ok(it) => TerminalAttributes::new(it),
        Err(e) => slave_fail(format!("tcgetattr before enable: {e}")),
    };

    // The comparison sees special codes the raw mode deltas never touch.
    for index in [SpecialCodeIndex::VEOL2, SpecialCodeIndex::VLNEXT] {
        let mut changed = before.termios().clone();
        changed.special_codes[index] = changed.special_codes[index].wrapping_add(1);
        if before.same_as(&changed) {
            slave_fail(format!("{index:?} change not detected"));
        }
    }

    // Explicit restore.
    let guard = match RawModeGuard::enable(RawModeConfig::default()) {
        Ok(it) => it,
        Err(e) => slave_fail(format!("enable: {e}")),
    };
    match guard.original_attributes() {
        Some(saved) if saved.same_as(before.termios()) => {}
        _ => slave_fail("saved attributes differ from the pre-enable snapshot"),
    }
    if let Err(e) = guard.restore() {
        slave_fail(format!("restore: {e}"));
    }
    match read_attributes(&stdin) {
        Ok(after) if before.same_as(&after) => {}
        Ok(_) => slave_fail("attributes differ after explicit restore"),
        Err(e) => slave_fail(format!("tcgetattr after restore: {e}")),
    }

    // Restore on drop, with a nonzero read timeout this time.
    {
        let _guard = match RawModeGuard::enable(RawModeConfig::with_read_timeout(5)) {
            Ok(it) => it,
            Err(e) => slave_fail(format!("second enable: {e}")),
        };
    }
    match read_attributes(&stdin) {
        Ok(after) if before.same_as(&after) => {}
        Ok(_) => slave_fail("attributes differ after drop"),
        Err(e) => slave_fail(format!("tcgetattr after drop: {e}")),
    }

    // Restore on drop while unwinding.
    let unwound = std::panic::catch_unwind(|| {
        let _guard = match RawModeGuard::enable(RawModeConfig::default()) {
            Ok(it) => it,
            Err(e) => slave_fail(format!("third enable: {e}")),
        };
        panic!("panic while raw mode is on");
    });
    if unwound.is_ok() {
        slave_fail("closure did not panic");
    }
    match read_attributes(&stdin) {
        Ok(after) if before.same_as(&after) => {}
        Ok(_) => slave_fail("attributes differ after panic"),
        Err(e) => slave_fail(format!("tcgetattr after panic: {e}")),
    }

    slave_succeed("attributes restored after explicit restore, drop, and panic");
}
