//! Grid positions and the alive-set container alias.

use indexmap::IndexSet;
use std::fmt;

/// A cell coordinate on the grid: `(col, row)`.
///
/// Plain value type: equality and hashing are by value, and no ordering
/// is defined — the simulation only ever tests membership. Coordinates
/// are signed so that cells stranded outside the grid by a resize stay
/// representable.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Position {
    /// Column (x), growing rightward.
    pub col: i32,
    /// Row (y), growing downward.
    pub row: i32,
}

impl Position {
    /// Create a position from column and row.
    pub const fn new(col: i32, row: i32) -> Self {
        Self { col, row }
    }

    /// The position displaced by `(dcol, drow)`.
    pub const fn offset(self, dcol: i32, drow: i32) -> Self {
        Self {
            col: self.col + dcol,
            row: self.row + drow,
        }
    }
}

impl From<(i32, i32)> for Position {
    fn from((col, row): (i32, i32)) -> Self {
        Self { col, row }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.col, self.row)
    }
}

/// The live cells of one generation.
///
/// Backed by an [`IndexSet`]: membership is all the transition rule
/// cares about, but iteration follows insertion order, which keeps
/// stepping, seeding, and rendering reproducible run-to-run.
pub type AliveSet = IndexSet<Position>;
