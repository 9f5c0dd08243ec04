//! Deterministic random pattern generation.
//!
//! The reproducibility contract matches the rest of the engine: the
//! RNG is a ChaCha8 stream seeded from the caller's seed, so identical
//! `(dims, probability, seed)` inputs produce identical patterns.

use ember_core::{AliveSet, Position};
use ember_grid::GridDims;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Generate a random alive set over the in-bounds cells of `dims`.
///
/// Each cell is alive independently with `probability`, clamped to
/// `[0, 1]`. Cells are visited in row-major order, so the mapping from
/// the RNG stream to cells is stable.
pub fn random_pattern(dims: GridDims, probability: f64, seed: u64) -> AliveSet {
    let p = probability.clamp(0.0, 1.0);
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut cells = AliveSet::new();
    for row in 0..clamp_extent(dims.height()) {
        for col in 0..clamp_extent(dims.width()) {
            if rng.random::<f64>() < p {
                cells.insert(Position::new(col, row));
            }
        }
    }
    cells
}

/// Extents past `i32::MAX` cannot be addressed by `i32` coordinates;
/// config validation caps initial extents, and resized grids beyond
/// the cap simply stop being seedable past it.
fn clamp_extent(extent: u32) -> i32 {
    extent.min(i32::MAX as u32) as i32
}
