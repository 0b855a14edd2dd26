//! Biotelia: a generative pollination installation.
//!
//! The simulation itself lives in `biotelia_core`; this crate wires it to a
//! simulated visitor source, configuration files and frame recording.

pub mod app;
pub mod model;
