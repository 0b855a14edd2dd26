//! Render snapshot records.
//!
//! A snapshot is a read-only copy of one frame. Renderers must not hold onto
//! it across frames expecting it to track the simulation.

use super::color::Rgb;
use super::visitor::VisitorPosition;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StructureRender {
    pub id: u32,
    pub x: f64,
    pub y: f64,
    pub radius: f64,
    pub color: Rgb,
    pub energy: f64,
    pub pulse: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FlowParticleRender {
    pub x: f64,
    pub y: f64,
    pub alpha: f64,
}

/// One mycelial connection line plus its in-flight particles.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MyceliumLinkRender {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
    pub flow: f64,
    pub particles: Vec<FlowParticleRender>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AuraRender {
    pub x: f64,
    pub y: f64,
    pub color: Rgb,
    pub intensity: f64,
    pub glow_radius: f64,
    pub pulse: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrailPointRender {
    pub x: f64,
    pub y: f64,
    pub color: Rgb,
    pub alpha: f64,
    pub size: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DanceParticleRender {
    pub x: f64,
    pub y: f64,
    pub color: Rgb,
    pub alpha: f64,
    pub size: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RingRender {
    pub x: f64,
    pub y: f64,
    pub radius: f64,
    pub color: Rgb,
    pub alpha: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DanceRender {
    pub x: f64,
    pub y: f64,
    pub visitor_color: Rgb,
    pub structure_color: Rgb,
    pub alpha: f64,
    pub particles: Vec<DanceParticleRender>,
    pub rings: Vec<RingRender>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GlowRender {
    pub color: Rgb,
    pub intensity: f64,
    pub radius: f64,
    pub pulse: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentRender {
    pub id: u32,
    pub x: f64,
    pub y: f64,
    pub size: f64,
    pub base_color: Rgb,
    pub trail: Vec<TrailPointRender>,
    pub glow: Option<GlowRender>,
}

/// Everything a renderer needs for one frame.
///
/// `auras` and `trails` are aligned index-by-index with `visitors`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RenderSnapshot {
    pub time: f64,
    pub intensity: f64,
    pub structures: Vec<StructureRender>,
    pub mycelium: Vec<MyceliumLinkRender>,
    pub auras: Vec<Option<AuraRender>>,
    pub trails: Vec<Vec<TrailPointRender>>,
    pub dances: Vec<DanceRender>,
    pub agents: Vec<AgentRender>,
    pub visitors: Vec<VisitorPosition>,
}
