//! Ember: a sparse Game of Life engine with per-cell afterglow fade.
//!
//! This is the top-level facade crate that re-exports the public API
//! from the Ember sub-crates. For most embedders, adding `ember` as a
//! single dependency is sufficient.
//!
//! The engine owns the simulation and the fade state; the embedding
//! driver owns everything else — the window, input dispatch, the tick
//! counter that gates step frequency, and pattern files. Each frame
//! the driver forwards raw edits, advances fade state with the frame
//! delta, and reads alive cells and fade alphas back out for drawing.
//!
//! # Quick start
//!
//! ```rust
//! use ember::prelude::*;
//!
//! // An 8×8 board with a vertical blinker.
//! let mut world = LifeWorld::new(WorldConfig {
//!     width: 8,
//!     height: 8,
//!     ..WorldConfig::default()
//! })
//! .unwrap();
//! world.load_pattern([(2, 1), (2, 2), (2, 3)].map(Position::from));
//!
//! world.update_fade(0.0); // frame while the blinker is vertical
//! world.step();           // blinker flips horizontal
//! world.update_fade(0.25);
//!
//! assert!(world.contains(Position::new(1, 2)));
//! assert_eq!(world.generation(), GenerationId(1));
//!
//! // The dead tip is cooling off; the surviving center is at full glow.
//! let tip = world.cell_alpha(Position::new(2, 1));
//! assert!(tip > 0.0 && tip < 1.0);
//! assert_eq!(world.cell_alpha(Position::new(2, 2)), 1.0);
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in
//! the [`prelude`]:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `ember-core` | Positions, alive-set alias, generation counter, colors |
//! | [`grid`] | `ember-grid` | Grid extents, Moore neighborhoods, owned alive-set |
//! | [`engine`] | `ember-engine` | Transition rule, fade tracker, config, world orchestrator |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core value types (`ember-core`).
pub use ember_core as types;

/// Grid extents and state (`ember-grid`).
pub use ember_grid as grid;

/// Transition rule, fade tracking, and the world orchestrator
/// (`ember-engine`).
pub use ember_engine as engine;

pub mod prelude {
    //! Commonly used types, re-exported for glob import.

    pub use ember_core::{AliveSet, GenerationId, Position, Rgb};
    pub use ember_engine::{
        ConfigError, Edit, FadeTracker, LifeWorld, StepMetrics, WorldConfig,
    };
    pub use ember_grid::{GridDims, GridState};
}
