// Copyright (c) 2025 Kilos contributors. Licensed under Apache License, Version 2.0.

use crate::{CLEAR_LINE_TO_END, CURSOR_HOME, CursorPosition, FILLER_GLYPH, HIDE_CURSOR,
            ROW_SEPARATOR, SHOW_CURSOR, ViewportSize, cursor_position_sequence};
use const_format::concatcp;

/// Painted on the vertical center row.
pub const WELCOME_BANNER: &str =
    concatcp!("Kilos editor -- version ", env!("CARGO_PKG_VERSION"));

/// The bytes for one full repaint:
///
/// 1. hide cursor, cursor home
/// 2. each row: the banner on row `rows / 2`, otherwise [`FILLER_GLYPH`]; then
///    clear to end of line; then [`ROW_SEPARATOR`] except after the last row
/// 3. move the cursor to `cursor` (converted to 1-based), show cursor
#[must_use]
pub fn render_refresh(viewport: ViewportSize, cursor: CursorPosition) -> String {
    let rows = viewport.rows();
    let banner_row = rows / 2;
    let banner = welcome_row(viewport.cols());

    let mut acc = String::with_capacity(usize::from(rows) * 8 + banner.len() + 32);
    acc.push_str(HIDE_CURSOR);
    acc.push_str(CURSOR_HOME);

    for row in 0..rows {
        if row == banner_row {
            acc.push_str(&banner);
        } else {
            acc.push(FILLER_GLYPH);
        }
        acc.push_str(CLEAR_LINE_TO_END);
        if row + 1 < rows {
            acc.push_str(ROW_SEPARATOR);
        }
    }

    acc.push_str(&cursor_position_sequence(
        u32::from(cursor.row) + 1,
        u32::from(cursor.col) + 1,
    ));
    acc.push_str(SHOW_CURSOR);
    acc
}

/// [`WELCOME_BANNER`] centered in `cols` with leading spaces, or truncated to `cols`
/// when it doesn't fit.
#[must_use]
pub fn welcome_row(cols: u16) -> String {
    let cols = usize::from(cols);
    let len = WELCOME_BANNER.len();
    if len >= cols {
        return WELCOME_BANNER[..cols].to_string();
    }
    let padding = (cols - len) / 2;
    format!("{:padding$}{WELCOME_BANNER}", "")
}
