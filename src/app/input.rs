//! Simulated visitors for running the installation without motion capture.
//!
//! Each simulated visitor drifts with a randomly perturbed velocity, is
//! speed-limited, bounces softly off a margin-inset canvas and is damped
//! every step.

use biotelia_data::{VisitorId, VisitorPosition};
use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

const MAX_SPEED: f64 = 60.0;
const WALL_MARGIN: f64 = 50.0;
const SPAWN_MARGIN: f64 = 200.0;
const RESTITUTION: f64 = 0.8;
const DAMPING: f64 = 0.95;
const JITTER: f64 = 10.0;

#[derive(Debug, Clone, PartialEq)]
struct SimulatedVisitor {
    id: VisitorId,
    x: f64,
    y: f64,
    vx: f64,
    vy: f64,
}

pub struct VisitorSimulator {
    width: f64,
    height: f64,
    visitors: Vec<SimulatedVisitor>,
    rng: ChaCha8Rng,
}

impl VisitorSimulator {
    #[must_use]
    pub fn new(width: f64, height: f64, count: usize, seed: u64) -> Self {
        let mut sim = Self {
            width,
            height,
            visitors: Vec::with_capacity(count),
            rng: ChaCha8Rng::seed_from_u64(seed),
        };
        for _ in 0..count {
            sim.add_visitor();
        }
        sim
    }

    /// Adds a visitor with the next free id and returns that id.
    pub fn add_visitor(&mut self) -> VisitorId {
        let id = self.visitors.iter().map(|v| v.id + 1).max().unwrap_or(0);
        let x = spawn(self.width, &mut self.rng);
        let y = spawn(self.height, &mut self.rng);
        let vx = self.rng.gen_range(-20.0..20.0);
        let vy = self.rng.gen_range(-20.0..20.0);
        self.visitors.push(SimulatedVisitor { id, x, y, vx, vy });
        id
    }

    /// Removes the most recently added visitor.
    pub fn remove_visitor(&mut self) -> Option<VisitorId> {
        self.visitors.pop().map(|v| v.id)
    }

    pub fn step(&mut self, dt: f64) {
        let (min_x, max_x) = (WALL_MARGIN, self.width - WALL_MARGIN);
        let (min_y, max_y) = (WALL_MARGIN, self.height - WALL_MARGIN);

        for v in &mut self.visitors {
            v.vx += self.rng.gen_range(-JITTER..JITTER) * dt;
            v.vy += self.rng.gen_range(-JITTER..JITTER) * dt;

            let speed = (v.vx * v.vx + v.vy * v.vy).sqrt();
            if speed > MAX_SPEED {
                v.vx = v.vx / speed * MAX_SPEED;
                v.vy = v.vy / speed * MAX_SPEED;
            }

            v.x += v.vx * dt;
            v.y += v.vy * dt;

            if v.x < min_x || v.x > max_x {
                v.vx *= -RESTITUTION;
                v.x = v.x.min(max_x).max(min_x);
            }
            if v.y < min_y || v.y > max_y {
                v.vy *= -RESTITUTION;
                v.y = v.y.min(max_y).max(min_y);
            }

            v.vx *= DAMPING;
            v.vy *= DAMPING;
        }
    }

    #[must_use]
    pub fn positions(&self) -> Vec<VisitorPosition> {
        self.visitors
            .iter()
            .map(|v| VisitorPosition::new(v.id, v.x, v.y))
            .collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.visitors.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.visitors.is_empty()
    }
}

fn spawn(extent: f64, rng: &mut ChaCha8Rng) -> f64 {
    if extent > SPAWN_MARGIN * 2.0 {
        rng.gen_range(SPAWN_MARGIN..extent - SPAWN_MARGIN)
    } else {
        extent / 2.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_visitors_stay_in_bounds() {
        let mut sim = VisitorSimulator::new(800.0, 600.0, 6, 11);
        for _ in 0..(60 * 120) {
            sim.step(1.0 / 60.0);
            for p in sim.positions() {
                assert!(p.x >= 50.0 && p.x <= 750.0);
                assert!(p.y >= 50.0 && p.y <= 550.0);
            }
        }
    }

    #[test]
    fn test_add_and_remove_ids() {
        let mut sim = VisitorSimulator::new(1920.0, 1080.0, 2, 1);
        assert_eq!(sim.add_visitor(), 2);
        assert_eq!(sim.remove_visitor(), Some(2));
        assert_eq!(sim.remove_visitor(), Some(1));
        assert_eq!(sim.len(), 1);
        assert_eq!(sim.add_visitor(), 1);
    }

    #[test]
    fn test_same_seed_same_paths() {
        let mut a = VisitorSimulator::new(1920.0, 1080.0, 4, 5);
        let mut b = VisitorSimulator::new(1920.0, 1080.0, 4, 5);
        for _ in 0..300 {
            a.step(1.0 / 60.0);
            b.step(1.0 / 60.0);
        }
        assert_eq!(a.positions(), b.positions());
    }
}
