// Copyright (c) 2025 Kilos contributors. Licensed under Apache License, Version 2.0.

//! Session and viewport tests that run inside a real PTY. See
//! [`generate_pty_test!`](crate::generate_pty_test).

mod test_echo_then_quit;
mod test_fatal_error_restores;
mod test_viewport_probe_paths;
