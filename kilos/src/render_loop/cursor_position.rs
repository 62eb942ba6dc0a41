// Copyright (c) 2025 Kilos contributors. Licensed under Apache License, Version 2.0.

use crate::KeyEvent;

/// 0-based cursor cell.
///
/// Movement has a floor of 0 but no ceiling: the cursor can be moved past the last
/// row or column of the viewport, where the terminal clamps what it displays.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct CursorPosition {
    pub row: u16,
    pub col: u16,
}

impl CursorPosition {
    #[must_use]
    pub fn new(row: u16, col: u16) -> Self { Self { row, col } }
}

/// Move `cursor` one cell for an arrow key. Every other event leaves it as is.
#[must_use]
pub fn apply_movement(cursor: CursorPosition, event: KeyEvent) -> CursorPosition {
    let CursorPosition { row, col } = cursor;
    match event {
        KeyEvent::ArrowUp => CursorPosition::new(row.saturating_sub(1), col),
        KeyEvent::ArrowDown => CursorPosition::new(row.saturating_add(1), col),
        KeyEvent::ArrowLeft => CursorPosition::new(row, col.saturating_sub(1)),
        KeyEvent::ArrowRight => CursorPosition::new(row, col.saturating_add(1)),
        KeyEvent::PrintableByte(_) | KeyEvent::ControlChord(_) | KeyEvent::Unrecognized => {
            cursor
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    #[test_case(KeyEvent::ArrowUp, (4, 7) ; "up")]
    #[test_case(KeyEvent::ArrowDown, (6, 7) ; "down")]
    #[test_case(KeyEvent::ArrowLeft, (5, 6) ; "left")]
    #[test_case(KeyEvent::ArrowRight, (5, 8) ; "right")]
    #[test_case(KeyEvent::PrintableByte(b'x'), (5, 7) ; "printable")]
    #[test_case(KeyEvent::ControlChord(0x11), (5, 7) ; "chord")]
    #[test_case(KeyEvent::Unrecognized, (5, 7) ; "unrecognized")]
    fn test_apply_movement(event: KeyEvent, (row, col): (u16, u16)) {
        assert_eq!(
            apply_movement(CursorPosition::new(5, 7), event),
            CursorPosition::new(row, col)
        );
    }

    #[test]
    fn test_floor_is_idempotent() {
        let mut cursor = CursorPosition::default();
        for _ in 0..3 {
            cursor = apply_movement(cursor, KeyEvent::ArrowUp);
            cursor = apply_movement(cursor, KeyEvent::ArrowLeft);
        }
        assert_eq!(cursor, CursorPosition::new(0, 0));
    }

    #[test]
    fn test_no_ceiling() {
        let mut cursor = CursorPosition::default();
        for _ in 0..100 {
            cursor = apply_movement(cursor, KeyEvent::ArrowDown);
        }
        assert_eq!(cursor.row, 100);
        assert_eq!(
            apply_movement(CursorPosition::new(0, u16::MAX), KeyEvent::ArrowRight).col,
            u16::MAX
        );
    }
}
