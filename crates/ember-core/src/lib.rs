//! Core value types for the Ember Life engine.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the position and color value types, the alive-set container alias,
//! and the generation counter shared by the grid and engine crates.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod color;
pub mod id;
pub mod position;

pub use color::Rgb;
pub use id::GenerationId;
pub use position::{AliveSet, Position};
