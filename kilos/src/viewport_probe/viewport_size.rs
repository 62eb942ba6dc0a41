// Copyright (c) 2025 Kilos contributors. Licensed under Apache License, Version 2.0.

use std::fmt;

/// Visible terminal grid. Both dimensions are at least 1, which [`ViewportSize::new()`]
/// enforces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ViewportSize {
    rows: u16,
    cols: u16,
}

impl ViewportSize {
    /// `None` if either dimension is zero.
    #[must_use]
    pub fn new(rows: u16, cols: u16) -> Option<Self> {
        (rows > 0 && cols > 0).then_some(Self { rows, cols })
    }

    #[must_use]
    pub fn rows(&self) -> u16 { self.rows }

    #[must_use]
    pub fn cols(&self) -> u16 { self.cols }
}

impl fmt::Display for ViewportSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.rows, self.cols)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_zero_dimensions_rejected() {
        assert_eq!(ViewportSize::new(0, 80), None);
        assert_eq!(ViewportSize::new(24, 0), None);
        let size = ViewportSize::new(24, 80).unwrap();
        assert_eq!((size.rows(), size.cols()), (24, 80));
        assert_eq!(size.to_string(), "24x80");
    }
}
