//! The Game of Life transition rule, computed sparsely.
//!
//! One step is O(alive × 8) regardless of grid size: only the Moore
//! neighborhoods of currently-alive cells are visited, never the full
//! grid. The returned set is complete before the caller swaps it in,
//! so the generation transition is atomic from any reader's
//! perspective.

use ember_core::{AliveSet, Position};
use ember_grid::GridDims;
use indexmap::IndexMap;

/// Compute the next generation from the current alive set.
///
/// Conway's rules against a hard (non-wrapping) boundary: a counted
/// position is alive next generation iff it has exactly three alive
/// neighbors, or exactly two and is itself alive. Positions with no
/// alive neighbors at all — including previously-alive isolated
/// cells — are dead.
///
/// Alive cells outside `dims` (possible after a shrink or an unchecked
/// add) still project onto their in-bounds neighbors, but are never
/// counted as candidates themselves, so they vanish after one step.
/// Zero extents degenerate to an empty next generation.
pub fn next_generation(alive: &AliveSet, dims: GridDims) -> AliveSet {
    // Count in-bounds Moore neighbors of every alive cell. A position
    // absent from the map has no alive neighbors.
    let mut counts: IndexMap<Position, u8> = IndexMap::with_capacity(alive.len() * 4);
    for &pos in alive {
        for neighbour in dims.moore_neighbours(pos) {
            *counts.entry(neighbour).or_insert(0) += 1;
        }
    }

    let mut next = AliveSet::new();
    for (pos, count) in &counts {
        if *count == 3 || (*count == 2 && alive.contains(pos)) {
            next.insert(*pos);
        }
    }
    next
}
