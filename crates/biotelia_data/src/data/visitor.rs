use serde::{Deserialize, Serialize};

/// Identifier of an externally tracked visitor.
pub type VisitorId = u32;

/// Identifier of an autonomous pollinator.
pub type AgentId = u32;

/// One tracked visitor position for a single frame, in canvas pixels.
///
/// A visitor id missing from a frame's input is the signal that the visitor
/// has left.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VisitorPosition {
    pub id: VisitorId,
    pub x: f64,
    pub y: f64,
}

impl VisitorPosition {
    #[must_use]
    pub fn new(id: VisitorId, x: f64, y: f64) -> Self {
        Self { id, x, y }
    }
}
