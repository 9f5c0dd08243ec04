//! Exclusive owner of the alive-set.

use crate::dims::GridDims;
use ember_core::{AliveSet, Position};

/// Grid extents plus the set of currently-alive cells.
///
/// The alive set is never exposed mutably: all edits go through the
/// explicit operations below, and a computed generation only becomes
/// current through the wholesale [`replace`](GridState::replace) swap.
/// Readers get `&`-views via [`cells`](GridState::cells).
#[derive(Clone, Debug)]
pub struct GridState {
    dims: GridDims,
    cells: AliveSet,
}

impl GridState {
    /// Create a grid with the given extents and no alive cells.
    pub fn new(dims: GridDims) -> Self {
        Self {
            dims,
            cells: AliveSet::new(),
        }
    }

    /// Current extents.
    pub fn dims(&self) -> GridDims {
        self.dims
    }

    /// Read-only view of the alive cells.
    pub fn cells(&self) -> &AliveSet {
        &self.cells
    }

    /// Number of alive cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether no cells are alive.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Whether `pos` is currently alive.
    pub fn contains(&self, pos: Position) -> bool {
        self.cells.contains(&pos)
    }

    /// Insert `pos` into the alive set. Idempotent.
    ///
    /// No bounds check: an out-of-range insert is accepted as-is and
    /// behaves like any other stranded cell — it can fertilize its
    /// in-bounds neighbors for one step but can never itself survive.
    /// Callers wanting rejection must validate against
    /// [`dims`](GridState::dims) before calling.
    pub fn add(&mut self, pos: Position) {
        self.cells.insert(pos);
    }

    /// Remove `pos` if present; no-op otherwise.
    pub fn remove(&mut self, pos: Position) {
        self.cells.swap_remove(&pos);
    }

    /// Remove every alive cell. Extents are unchanged.
    pub fn clear(&mut self) {
        self.cells.clear();
    }

    /// Replace the extents.
    ///
    /// Alive cells outside the new bounds are deliberately not clipped:
    /// they remain in the set, stop being countable as neighbors, and
    /// decay out through the transition rule (gone one step later).
    /// Total: zero extents are accepted and degenerate to an
    /// always-empty next generation.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.dims = GridDims::new(width, height);
    }

    /// Atomically replace the alive set with an externally supplied
    /// pattern.
    ///
    /// Equivalent to `clear` followed by repeated [`add`](GridState::add),
    /// but wholesale. Coordinates are accepted as-is, including
    /// out-of-range ones, under the same policy as `add`.
    pub fn load<I>(&mut self, cells: I)
    where
        I: IntoIterator<Item = Position>,
    {
        self.cells = cells.into_iter().collect();
    }

    /// Swap in a freshly computed generation wholesale.
    ///
    /// The sole mutation point for generation transitions: the new set
    /// is complete before the old one is dropped, so no reader ever
    /// observes a partially-updated generation.
    pub fn replace(&mut self, next: AliveSet) {
        self.cells = next;
    }
}
