//! Bounded grid state for the Ember Life engine.
//!
//! [`GridDims`] describes the playable extent and enumerates Moore
//! neighborhoods against a hard (non-wrapping) boundary. [`GridState`]
//! exclusively owns the alive-set and exposes the explicit edit
//! operations the driver forwards into the simulation; the backing set
//! never escapes mutably.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod dims;
pub mod state;

pub use dims::GridDims;
pub use state::GridState;
