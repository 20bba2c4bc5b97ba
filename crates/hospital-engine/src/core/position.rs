use serde::{Deserialize, Serialize};

/// A cell of the level grid.
///
/// Rows grow downwards and columns grow to the right, matching the layout of
/// the level file. Positions order row-major, so maps keyed by position
/// iterate in the same order a level file is read.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
pub struct Position {
    pub row: i32,
    pub col: i32,
}

impl Position {
    #[must_use]
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Creates a position from grid indices.
    #[expect(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
    #[must_use]
    pub const fn from_grid(row: usize, col: usize) -> Self {
        Self::new(row as i32, col as i32)
    }

    /// Sum of absolute coordinate differences.
    ///
    /// This is the movement cost between two cells on an open grid; walls are
    /// not taken into account.
    #[must_use]
    pub const fn manhattan_distance(self, other: Self) -> u32 {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col)
    }
}

impl From<(i32, i32)> for Position {
    fn from((row, col): (i32, i32)) -> Self {
        Self::new(row, col)
    }
}
