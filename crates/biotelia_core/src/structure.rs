//! Structures: the fixed trees and mushrooms visitors pollinate.

use biotelia_data::{Rgb, StructureRender};

const ENERGY_BASE: f64 = 0.3;
const ENERGY_SWING: f64 = 0.1;
const BREATH_FREQ: f64 = 0.5;
const PULSE_FREQ: f64 = 2.0;

#[derive(Debug, Clone, PartialEq)]
pub struct Structure {
    pub id: u32,
    pub x: f64,
    pub y: f64,
    pub radius: f64,
    pub color: Rgb,
    /// Breathing level, oscillates in `[0.2, 0.4]`.
    pub energy: f64,
}

impl Structure {
    #[must_use]
    pub fn new(id: u32, x: f64, y: f64, radius: f64, color: Rgb) -> Self {
        Self {
            id,
            x,
            y,
            radius,
            color,
            energy: ENERGY_BASE,
        }
    }

    pub fn update(&mut self, sim_time: f64) {
        self.energy = ENERGY_BASE + (sim_time * BREATH_FREQ).sin() * ENERGY_SWING;
    }

    /// Strictly inside: a point exactly on the rim does not count.
    #[must_use]
    pub fn contains_point(&self, px: f64, py: f64) -> bool {
        let dx = px - self.x;
        let dy = py - self.y;
        (dx * dx + dy * dy).sqrt() < self.radius
    }

    #[must_use]
    pub fn distance_to(&self, other: &Structure) -> f64 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        (dx * dx + dy * dy).sqrt()
    }

    #[must_use]
    pub fn render(&self, sim_time: f64) -> StructureRender {
        StructureRender {
            id: self.id,
            x: self.x,
            y: self.y,
            radius: self.radius,
            color: self.color,
            energy: self.energy,
            pulse: 1.0 + (sim_time * PULSE_FREQ).sin() * 0.1,
        }
    }
}
