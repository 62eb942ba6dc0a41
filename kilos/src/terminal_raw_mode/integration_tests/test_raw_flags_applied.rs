// Copyright (c) 2025 Kilos contributors. Licensed under Apache License, Version 2.0.

// cspell:words termios icanon isig ixon icrnl opost brkint inpck istrip vmin vtime

//! While the guard is alive the live attributes carry exactly the raw mode deltas.

use crate::{RawModeConfig, RawModeGuard, generate_pty_test, read_attributes,
            test_fixtures::{read_slave_report, slave_fail, slave_succeed}};
use rustix::termios::{SpecialCodeIndex, Termios};

generate_pty_test! {
    /// Run with: `cargo test -p kilos --lib test_pty_raw_flags_applied -- --nocapture`
    test_fn: test_pty_raw_flags_applied,
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

fn check_raw_flags(live: &Termios, original: &Termios) -> Result<(), String> {
    if live.local_modes.intersects(RawModeConfig::local_modes_cleared()) {
        return Err(format!("local modes still set: {:?}", live.local_modes));
    }
    if live.input_modes.intersects(RawModeConfig::input_modes_cleared()) {
        return Err(format!("input modes still set: {:?}", live.input_modes));
    }
    if live.output_modes.intersects(RawModeConfig::output_modes_cleared()) {
        return Err(format!("output modes still set: {:?}", live.output_modes));
    }
    if live.special_codes[SpecialCodeIndex::VMIN] != 1 {
        return Err("VMIN != 1".into());
    }
    if live.special_codes[SpecialCodeIndex::VTIME] != 0 {
        return Err("VTIME != 0".into());
    }
    // Everything outside the deltas is carried over.
    if live.control_modes != original.control_modes {
        return Err("control modes changed".into());
    }
    let untouched_local = original.local_modes - RawModeConfig::local_modes_cleared();
    if !live.local_modes.contains(untouched_local) {
        return Err("unrelated local modes were cleared".into());
    }
    Ok(())
}

fn pty_slave_entry_point() -> ! {
    let guard = match RawModeGuard::enable(RawModeConfig::default()) {
        Ok(it) => it,
        Err(e) => slave_fail(format!("enable: {e}")),
    };

    let live = match read_attributes(guard.terminal()) {
        Ok(it) => it,
        Err(e) => slave_fail(format!("tcgetattr while raw: {e}")),
    };
    let verdict = match guard.original_attributes() {
        Some(original) => check_raw_flags(&live, original.termios()),
        None => Err("guard has no saved attributes".into()),
    };

    // Restore before reporting: `exit()` skips `Drop`.
    if let Err(e) = guard.restore() {
        slave_fail(format!("restore: {e}"));
    }
    match verdict {
        Ok(()) => slave_succeed("raw mode flags applied"),
        Err(reason) => slave_fail(reason),
    }
}
