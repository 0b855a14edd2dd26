//! Movement trails.
//!
//! A trail is a bounded, distance-gated buffer of fading points that follows
//! a colored pollinator. It only grows while a color is carried; otherwise
//! existing points age out at the faster idle rate.

use crate::aura::VisitorAura;
use crate::config::TrailConfig;
use biotelia_data::{Rgb, TrailPointRender, VisitorId};
use std::collections::VecDeque;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrailPoint {
    pub x: f64,
    pub y: f64,
    pub color: Rgb,
    /// In `(0, 1]` while the point is alive.
    pub life: f64,
}

/// Point buffer shared by visitor trails and agent trails.
#[derive(Debug, Clone, PartialEq)]
pub struct TrailBuffer {
    points: VecDeque<TrailPoint>,
    last_position: Option<(f64, f64)>,
    max_points: usize,
    min_distance: f64,
    fade_rate: f64,
    idle_fade_rate: f64,
}

impl TrailBuffer {
    #[must_use]
    pub fn new(config: &TrailConfig) -> Self {
        Self {
            points: VecDeque::with_capacity(config.max_points + 1),
            last_position: None,
            max_points: config.max_points,
            min_distance: config.min_distance,
            fade_rate: config.fade_rate,
            idle_fade_rate: config.idle_fade_rate,
        }
    }

    /// Advances the trail by one frame at position `(x, y)`.
    ///
    /// `color` is the currently carried color, `None` when nothing is carried.
    pub fn update(&mut self, x: f64, y: f64, dt: f64, color: Option<Rgb>) {
        let Some(color) = color else {
            self.fade(dt * self.idle_fade_rate);
            return;
        };

        match self.last_position {
            None => self.last_position = Some((x, y)),
            Some((lx, ly)) => {
                let dx = x - lx;
                let dy = y - ly;
                if (dx * dx + dy * dy).sqrt() > self.min_distance {
                    self.points.push_back(TrailPoint {
                        x,
                        y,
                        color,
                        life: 1.0,
                    });
                    self.last_position = Some((x, y));
                    while self.points.len() > self.max_points {
                        self.points.pop_front();
                    }
                }
            }
        }

        self.fade(dt * self.fade_rate);
    }

    fn fade(&mut self, amount: f64) {
        for p in &mut self.points {
            p.life -= amount;
        }
        self.points.retain(|p| p.life > 0.0);
    }

    /// Oldest first.
    pub fn points(&self) -> impl Iterator<Item = &TrailPoint> {
        self.points.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    #[must_use]
    pub fn last_position(&self) -> Option<(f64, f64)> {
        self.last_position
    }

    #[must_use]
    pub fn max_points(&self) -> usize {
        self.max_points
    }

    /// Renders every point with a size derived from its remaining life.
    #[must_use]
    pub fn render_with(&self, size_of: impl Fn(f64) -> f64) -> Vec<TrailPointRender> {
        self.points
            .iter()
            .map(|p| TrailPointRender {
                x: p.x,
                y: p.y,
                color: p.color,
                alpha: p.life,
                size: size_of(p.life),
            })
            .collect()
    }
}

/// Trail behind one visitor, fed by that visitor's [`VisitorAura`].
#[derive(Debug, Clone, PartialEq)]
pub struct MovementTrail {
    pub person_id: VisitorId,
    pub point_size: f64,
    buffer: TrailBuffer,
}

impl MovementTrail {
    #[must_use]
    pub fn new(person_id: VisitorId, config: &TrailConfig) -> Self {
        Self {
            person_id,
            point_size: config.point_size,
            buffer: TrailBuffer::new(config),
        }
    }

    pub fn update(&mut self, x: f64, y: f64, dt: f64, aura: &VisitorAura) {
        self.buffer.update(x, y, dt, aura.color());
    }

    #[must_use]
    pub fn buffer(&self) -> &TrailBuffer {
        &self.buffer
    }

    #[must_use]
    pub fn render(&self) -> Vec<TrailPointRender> {
        let base = self.point_size;
        self.buffer.render_with(|life| base * (0.5 + 0.5 * life))
    }
}
