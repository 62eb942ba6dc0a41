// Copyright (c) 2025 Kilos contributors. Licensed under Apache License, Version 2.0.

/// Macro that generates a PTY based integration test.
///
/// The generated `#[test]` function runs twice, in two processes:
///
/// 1. **Master** (no env var set): skips in CI, opens a 24x80 PTY pair, re-spawns the
///    current test binary inside the PTY with the env var set, and hands the pair and
///    the child to `master`.
/// 2. **Slave** (env var set): prints `SLAVE_STARTING` and runs `slave`, which owns the
///    PTY as its controlling terminal and must end with `std::process::exit()`.
///
/// ```text
/// ┌────────────────────────┐   spawn    ┌──────────────────────────────┐
/// │ Master                 ├───────────▶│ Slave (stdin/stdout = PTY)   │
/// │ - opens PTY pair       │            │ - enables raw mode, etc.     │
/// │ - writes keys (opt)    ├───────────▶│ - prints SUCCESS:/FAILED:    │
/// │ - reads report lines   │◀───────────┤ - exits                      │
/// │ - asserts, waits       │            └──────────────────────────────┘
/// └────────────────────────┘
/// ```
///
/// In a PTY stdout and stderr are merged into one stream on the master side, so the
/// slave reports with `println!()` and the master filters by content. See
/// [`read_slave_report()`](crate::test_fixtures::read_slave_report).
///
/// The slave is spawned with the test name as a filter, so test names that use this
/// macro must not be a prefix of another test name.
///
/// # Master Function Signature
///
/// - `pty_pair: portable_pty::PtyPair`
/// - `child: Box<dyn portable_pty::Child + Send + Sync>`
#[macro_export]
macro_rules! generate_pty_test {
    (
        $(#[$meta:meta])*
        test_fn: $test_name:ident,
        master: $master_fn:expr,
        slave: $slave_fn:expr
    ) => {
        $(#[$meta])*
        #[test]
        fn $test_name() {
            use std::io::Write;
            use portable_pty::{CommandBuilder, NativePtySystem, PtySize, PtySystem};

            const PTY_SLAVE_ENV_VAR: &str = "KILOS_PTY_TEST_SLAVE";

            let pty_slave_env_var = std::env::var(PTY_SLAVE_ENV_VAR);
            eprintln!("🔍 TEST ENTRY: {} env = {:?}", PTY_SLAVE_ENV_VAR, pty_slave_env_var);

            // Skip in CI if running as master.
            if pty_slave_env_var.is_err() && is_ci::cached() {
                println!("⏭️  Skipped in CI (requires interactive terminal)");
                return;
            }

            if pty_slave_env_var.is_ok() {
                println!("SLAVE_STARTING");
                std::io::stdout().flush().expect("Failed to flush stdout");

                // Never returns.
                $slave_fn();
            }

            let pty_system = NativePtySystem::default();
            let pty_pair = pty_system
                .openpty(PtySize {
                    rows: 24,
                    cols: 80,
                    pixel_width: 0,
                    pixel_height: 0,
                })
                .expect("Failed to create PTY pair");

            let test_binary =
                std::env::current_exe().expect("Failed to get current executable");
            let mut cmd = CommandBuilder::new(&test_binary);
            cmd.env(PTY_SLAVE_ENV_VAR, "1");
            cmd.env("RUST_BACKTRACE", "1");
            cmd.args(&["--test-threads", "1", "--nocapture", stringify!($test_name)]);

            eprintln!("🚀 Master: Spawning slave process...");
            let child = pty_pair
                .slave
                .spawn_command(cmd)
                .expect("Failed to spawn slave process");

            $master_fn(pty_pair, child);
        }
    };
}
