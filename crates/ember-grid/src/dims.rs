//! Grid extents and Moore neighborhood enumeration.

use ember_core::Position;
use smallvec::SmallVec;

/// All 8 Moore offsets as `(dcol, drow)`: W, E, N, S, NW, NE, SW, SE.
const OFFSETS_8: [(i32, i32); 8] = [
    (-1, 0),
    (1, 0),
    (0, -1),
    (0, 1),
    (-1, -1),
    (-1, 1),
    (1, -1),
    (1, 1),
];

/// Bounded grid extents: the half-open coordinate range
/// `[0, width) × [0, height)`.
///
/// The boundary is a hard wall. Neighbor enumeration drops positions
/// outside the range, so cells can never be born or sustained by
/// projecting past an edge — there is no wraparound to the opposite
/// side.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct GridDims {
    width: u32,
    height: u32,
}

impl GridDims {
    /// Create grid extents.
    ///
    /// Total: zero extents are accepted and degenerate to a grid with
    /// no in-bounds positions (every step yields an empty generation).
    /// Initial configurations should go through the engine's
    /// `WorldConfig`, which rejects empty grids up front.
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Width in cells.
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Height in cells.
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Number of cells inside the bounds.
    pub const fn cell_count(&self) -> usize {
        (self.width as usize) * (self.height as usize)
    }

    /// Whether `pos` lies strictly inside `[0, width) × [0, height)`.
    pub fn contains(&self, pos: Position) -> bool {
        pos.col >= 0
            && (pos.col as u32) < self.width
            && pos.row >= 0
            && (pos.row as u32) < self.height
    }

    /// The in-bounds Moore neighbors of `pos`.
    ///
    /// Out-of-bounds neighbors are omitted: interior cells have 8,
    /// edge cells 5, corner cells 3. `pos` itself need not be in
    /// bounds — a cell stranded outside the grid by a resize still
    /// projects onto whichever of its neighbors are inside.
    pub fn moore_neighbours(&self, pos: Position) -> SmallVec<[Position; 8]> {
        let mut out = SmallVec::new();
        for (dcol, drow) in OFFSETS_8 {
            let neighbour = pos.offset(dcol, drow);
            if self.contains(neighbour) {
                out.push(neighbour);
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn p(col: i32, row: i32) -> Position {
        Position::new(col, row)
    }

    // ── Containment ─────────────────────────────────────────────

    #[test]
    fn contains_is_half_open() {
        let d = GridDims::new(5, 4);
        assert!(d.contains(p(0, 0)));
        assert!(d.contains(p(4, 3)));
        assert!(!d.contains(p(5, 3)));
        assert!(!d.contains(p(4, 4)));
        assert!(!d.contains(p(-1, 0)));
        assert!(!d.contains(p(0, -1)));
    }

    #[test]
    fn zero_extents_contain_nothing() {
        let d = GridDims::new(0, 7);
        assert!(!d.contains(p(0, 0)));
        assert_eq!(d.cell_count(), 0);
    }

    // ── Neighbor enumeration ────────────────────────────────────

    #[test]
    fn neighbours_interior() {
        let d = GridDims::new(5, 5);
        assert_eq!(d.moore_neighbours(p(2, 2)).len(), 8);
    }

    #[test]
    fn neighbours_corner() {
        let d = GridDims::new(5, 5);
        let n = d.moore_neighbours(p(0, 0));
        assert_eq!(n.len(), 3);
        assert!(n.contains(&p(1, 0)));
        assert!(n.contains(&p(0, 1)));
        assert!(n.contains(&p(1, 1)));
    }

    #[test]
    fn neighbours_edge() {
        let d = GridDims::new(5, 5);
        assert_eq!(d.moore_neighbours(p(2, 0)).len(), 5);
    }

    #[test]
    fn single_cell_grid_has_no_neighbours() {
        let d = GridDims::new(1, 1);
        assert!(d.moore_neighbours(p(0, 0)).is_empty());
    }

    #[test]
    fn out_of_bounds_cell_still_projects_inward() {
        // A cell one column past the left wall reaches the first column.
        let d = GridDims::new(5, 5);
        let n = d.moore_neighbours(p(-1, 2));
        assert_eq!(n.len(), 3);
        assert!(n.contains(&p(0, 1)));
        assert!(n.contains(&p(0, 2)));
        assert!(n.contains(&p(0, 3)));
    }

    #[test]
    fn no_wraparound_at_the_far_edge() {
        let d = GridDims::new(5, 5);
        let n = d.moore_neighbours(p(4, 4));
        assert_eq!(n.len(), 3);
        assert!(!n.contains(&p(0, 0)));
        assert!(!n.contains(&p(0, 4)));
    }

    // ── Property tests ──────────────────────────────────────────

    proptest! {
        #[test]
        fn neighbours_are_always_in_bounds(
            width in 0u32..12,
            height in 0u32..12,
            col in -3i32..15,
            row in -3i32..15,
        ) {
            let d = GridDims::new(width, height);
            for n in d.moore_neighbours(p(col, row)) {
                prop_assert!(d.contains(n));
            }
        }

        #[test]
        fn neighbour_symmetry_for_in_bounds_cells(
            width in 1u32..12,
            height in 1u32..12,
            col in 0i32..12,
            row in 0i32..12,
        ) {
            let d = GridDims::new(width, height);
            let pos = p(col % width as i32, row % height as i32);
            for n in d.moore_neighbours(pos) {
                prop_assert!(
                    d.moore_neighbours(n).contains(&pos),
                    "neighbour symmetry violated between {} and {}",
                    pos,
                    n,
                );
            }
        }
    }
}
