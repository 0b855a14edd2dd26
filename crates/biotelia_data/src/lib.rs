//! Core data structures for the Biotelia pollination simulation.
//!
//! Everything here is plain data: colors, visitor input records, pollination
//! events and the per-frame render snapshot handed to renderers.

pub mod data;

pub use data::color::*;
pub use data::event::*;
pub use data::render::*;
pub use data::visitor::*;
