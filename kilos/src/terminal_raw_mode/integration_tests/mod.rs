// Copyright (c) 2025 Kilos contributors. Licensed under Apache License, Version 2.0.

//! Raw mode tests that run inside a real PTY. See
//! [`generate_pty_test!`](crate::generate_pty_test).

mod test_enable_restore_round_trip;
mod test_raw_flags_applied;
