// Copyright (c) 2025 Kilos contributors. Licensed under Apache License, Version 2.0.

use std::{io::{BufRead, BufReader, Read, Write},
          time::{Duration, Instant}};

/// How long the master waits for the slave to report.
pub const SLAVE_REPORT_TIMEOUT: Duration = Duration::from_secs(5);

/// What the master saw on the PTY.
#[derive(Debug, Default)]
pub struct SlaveReport {
    pub slave_started: bool,
    /// The `SUCCESS:` line, if any.
    pub success_line: Option<String>,
    /// Every line read, trimmed, in order.
    pub lines: Vec<String>,
}

/// Read lines from the PTY master until the slave prints `SUCCESS:`, the stream ends, or
/// [`SLAVE_REPORT_TIMEOUT`] elapses.
///
/// # Panics
///
/// On a `FAILED:` line, or a read error other than `WouldBlock`.
pub fn read_slave_report(reader: impl Read) -> SlaveReport {
    let mut buf_reader = BufReader::new(reader);
    let mut report = SlaveReport::default();
    let start = Instant::now();

    while start.elapsed() < SLAVE_REPORT_TIMEOUT {
        let mut line = String::new();
        match buf_reader.read_line(&mut line) {
            Ok(0) => break,
            Ok(_) => {
                let trimmed = line.trim().to_string();
                eprintln!("  ← Slave output: {trimmed:?}");
                if trimmed.contains("SLAVE_STARTING") {
                    report.slave_started = true;
                }
                assert!(!trimmed.contains("FAILED:"), "Test failed: {trimmed}");
                let is_success = trimmed.contains("SUCCESS:");
                if is_success {
                    report.success_line = Some(trimmed.clone());
                }
                report.lines.push(trimmed);
                if is_success {
                    break;
                }
            }
            Err(e) if e.kind() == std::io::ErrorKind::WouldBlock => {
                std::thread::sleep(Duration::from_millis(10));
            }
            Err(e) => panic!("Read error: {e}"),
        }
    }

    report
}

/// Slave side: print a `FAILED:` line and exit with status 1.
pub fn slave_fail(message: impl std::fmt::Display) -> ! {
    println!("FAILED: {message}");
    std::io::stdout().flush().expect("Failed to flush");
    std::process::exit(1);
}

/// Slave side: print a `SUCCESS:` line and exit with status 0.
pub fn slave_succeed(message: impl std::fmt::Display) -> ! {
    println!("SUCCESS: {message}");
    std::io::stdout().flush().expect("Failed to flush");
    std::process::exit(0);
}

/// Master side, for output that isn't line oriented: read raw bytes into `acc` until it
/// contains `needle`, the stream ends, or [`SLAVE_REPORT_TIMEOUT`] elapses. Returns
/// whether `needle` was found.
pub fn read_until_contains(reader: &mut impl Read, acc: &mut Vec<u8>, needle: &[u8]) -> bool {
    let start = Instant::now();
    let mut buffer = [0_u8; 1024];
    while !contains(acc, needle) && start.elapsed() < SLAVE_REPORT_TIMEOUT {
        match reader.read(&mut buffer) {
            Ok(0) => break,
            Ok(count) => acc.extend_from_slice(&buffer[..count]),
            Err(e) if e.kind() == std::io::ErrorKind::WouldBlock => {
                std::thread::sleep(Duration::from_millis(10));
            }
            // EIO once the slave side is closed.
            Err(_) => break,
        }
    }
    contains(acc, needle)
}

/// Byte offset of the first `needle` in `haystack`.
pub fn find_bytes(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    haystack
        .windows(needle.len())
        .position(|window| window == needle)
}

fn contains(haystack: &[u8], needle: &[u8]) -> bool { find_bytes(haystack, needle).is_some() }
