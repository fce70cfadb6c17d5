use std::fmt;

use serde::{Deserialize, Serialize};

/// A cell coordinate on the terminal screen.
///
/// Columns grow to the right and rows grow downwards from the top-left
/// corner at `(0, 0)`. Values may be negative: a window larger than the
/// screen is centered at a position left of or above the origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct TerminalPosition {
    pub column: i32,
    pub row: i32,
}

impl TerminalPosition {
    pub const TOP_LEFT_CORNER: Self = Self::new(0, 0);

    pub const fn new(column: i32, row: i32) -> Self {
        Self { column, row }
    }

    /// Returns this position shifted by the given number of columns and rows,
    /// saturating at the `i32` bounds.
    pub fn with_relative(&self, delta_columns: i32, delta_rows: i32) -> Self {
        Self::new(
            self.column.saturating_add(delta_columns),
            self.row.saturating_add(delta_rows),
        )
    }
}

impl fmt::Display for TerminalPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.column, self.row)
    }
}

/// A size in terminal cells.
///
/// Sizes are signed so that clamping against a screen edge that a window
/// has already crossed produces a degenerate value instead of wrapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct TerminalSize {
    pub columns: i32,
    pub rows: i32,
}

impl TerminalSize {
    pub const ZERO: Self = Self::new(0, 0);

    pub const fn new(columns: i32, rows: i32) -> Self {
        Self { columns, rows }
    }

    /// Returns this size grown (or shrunk) by the given deltas, saturating at
    /// the `i32` bounds.
    pub fn with_relative(&self, delta_columns: i32, delta_rows: i32) -> Self {
        Self::new(
            self.columns.saturating_add(delta_columns),
            self.rows.saturating_add(delta_rows),
        )
    }

    /// Per-axis minimum of the two sizes.
    pub fn min(&self, other: &TerminalSize) -> Self {
        Self::new(self.columns.min(other.columns), self.rows.min(other.rows))
    }

    /// Per-axis maximum of the two sizes.
    pub fn max(&self, other: &TerminalSize) -> Self {
        Self::new(self.columns.max(other.columns), self.rows.max(other.rows))
    }

    /// The space left between `origin` and the far edges of this size.
    ///
    /// No lower bound is applied; an origin past the edge yields zero or
    /// negative dimensions.
    pub fn remaining_from(&self, origin: &TerminalPosition) -> Self {
        Self::new(
            self.columns.saturating_sub(origin.column),
            self.rows.saturating_sub(origin.row),
        )
    }

    /// The position that centers a box of `inner` size within this size.
    ///
    /// Uses truncating integer division on each half independently, so a
    /// 20-column box on an 80-column screen lands on column `40 - 10 = 30`.
    pub fn centered(&self, inner: &TerminalSize) -> TerminalPosition {
        TerminalPosition::new(
            self.columns / 2 - inner.columns / 2,
            self.rows / 2 - inner.rows / 2,
        )
    }
}

impl fmt::Display for TerminalSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.columns, self.rows)
    }
}
