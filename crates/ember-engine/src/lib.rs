//! Simulation engine for the Ember Life engine.
//!
//! Wires the transition rule, fade tracker, edit queue, and metrics
//! into [`LifeWorld`] — the single-threaded call surface an external
//! render/input driver owns. The driver gates step frequency with its
//! own tick counter, forwards raw edits as they arrive, and advances
//! fade state once per rendered frame.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod edits;
pub mod fade;
pub mod metrics;
pub mod rule;
pub mod seed;
pub mod world;

pub use config::{ConfigError, WorldConfig};
pub use edits::{Edit, EditQueue};
pub use fade::FadeTracker;
pub use metrics::StepMetrics;
pub use rule::next_generation;
pub use world::LifeWorld;
