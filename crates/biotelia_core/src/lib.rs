//! # Biotelia Core
//!
//! The simulation engine behind the Biotelia pollination installation.
//!
//! Visitors and autonomous pollinators wander a canvas of colored structures.
//! Touching a structure makes a pollinator carry its color as a glowing aura
//! and leave a fading trail; carrying a color into a differently colored
//! structure sets off a pollination dance.
//!
//! This crate contains the deterministic, frame-stepped simulation:
//! - Structures with a breathing animation
//! - The mycelial background network
//! - Visitor auras and movement trails
//! - Pollination dances
//! - Autonomous pollinators (bees, butterflies, moths)
//! - The [`PollinationSystem`] orchestrator producing render snapshots
//!
//! It never renders pixels and never reads input devices.
//!
//! ## Example
//!
//! ```
//! use biotelia_core::config::AppConfig;
//! use biotelia_core::PollinationSystem;
//! use biotelia_data::VisitorPosition;
//!
//! let config = AppConfig {
//!     seed: Some(42),
//!     ..Default::default()
//! };
//! let mut system = PollinationSystem::new(config);
//! let visitors = [VisitorPosition::new(0, 384.0, 324.0)];
//! let snapshot = system.update(&visitors, Some(1.0 / 60.0));
//! assert_eq!(snapshot.auras.len(), 1);
//! ```

/// Autonomous pollinators with a flying/collecting state machine
pub mod agent;
/// Carried colors and visitor auras
pub mod aura;
/// Simulation-owned clock
pub mod clock;
/// Configuration management for simulation parameters
pub mod config;
/// Pollination dance effect
pub mod dance;
/// Frame counters and structured logging
pub mod metrics;
/// Mycelial background network
pub mod mycelium;
/// Static structures (trees and mushrooms)
pub mod structure;
/// The orchestrator
pub mod system;
/// Movement trails
pub mod trail;

pub use agent::{AgentState, AutonomousAgent};
pub use aura::{CarriedColor, VisitorAura};
pub use config::{AgentKind, AppConfig};
pub use dance::PollinationDance;
pub use metrics::{init_logging, Metrics};
pub use mycelium::MycelialNetwork;
pub use structure::Structure;
pub use system::{PollinationSystem, VisitorState};
pub use trail::{MovementTrail, TrailBuffer};
