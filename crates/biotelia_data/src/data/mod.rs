//! Core data structures for the Biotelia simulation.

pub mod color;
pub mod event;
pub mod render;
pub mod visitor;
