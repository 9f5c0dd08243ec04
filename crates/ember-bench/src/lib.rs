//! Shared fixtures for the Ember criterion benches.
//!
//! Inputs are deterministic: soups come from the engine's seeded
//! pattern generator, so every run measures the same workload.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

use ember_core::{AliveSet, Position};
use ember_engine::seed::random_pattern;
use ember_grid::GridDims;

/// A deterministic random soup at the given density.
pub fn soup(dims: GridDims, density: f64, seed: u64) -> AliveSet {
    random_pattern(dims, density, seed)
}

/// A glider with its bounding box anchored at `(col, row)`.
pub fn glider_at(col: i32, row: i32) -> AliveSet {
    [(1, 0), (2, 1), (0, 2), (1, 2), (2, 2)]
        .into_iter()
        .map(|(dcol, drow)| Position::new(col + dcol, row + drow))
        .collect()
}
