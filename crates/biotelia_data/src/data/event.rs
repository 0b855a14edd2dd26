use super::color::Rgb;
use super::visitor::{AgentId, VisitorId};
use serde::{Deserialize, Serialize};

/// Who carried the color into the structure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Pollinator {
    Visitor(VisitorId),
    Agent(AgentId),
}

/// A carried color met a structure of a different color.
///
/// `x`/`y` is the structure center, which is also where the dance spawns.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PollinationEvent {
    pub x: f64,
    pub y: f64,
    pub carried: Rgb,
    pub structure: Rgb,
    pub source: Pollinator,
}
