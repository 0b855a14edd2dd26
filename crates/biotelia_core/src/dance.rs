//! Pollination dance: the swirl spawned when a carried color meets a
//! structure of a different color.

use crate::config::DanceConfig;
use biotelia_data::{DanceParticleRender, DanceRender, Rgb, RingRender};
use rand::Rng;

/// Golden angle in radians, `π (3 - √5)`.
const GOLDEN_ANGLE: f64 = 2.399_963_229_728_653;

const INNER_RADIUS: f64 = 20.0;
const SPIRAL_SPREAD: f64 = 60.0;
const SWIRL_FACTOR: f64 = 2.0;
const EXPANSION_SPEED: f64 = 20.0;

/// Life below this is treated as fully spent, so accumulated float error
/// cannot leave a dance alive for one extra frame.
const LIFE_EPSILON: f64 = 1e-9;

#[derive(Debug, Clone, PartialEq)]
pub struct SwirlParticle {
    pub angle: f64,
    pub radius: f64,
    pub angular_speed: f64,
    pub color: Rgb,
    pub life: f64,
    pub size: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Ring {
    pub radius: f64,
    pub max_radius: f64,
    pub color: Rgb,
    pub speed: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PollinationDance {
    x: f64,
    y: f64,
    visitor_color: Rgb,
    structure_color: Rgb,
    duration: f64,
    elapsed: f64,
    life: f64,
    particles: Vec<SwirlParticle>,
    rings: Vec<Ring>,
}

impl PollinationDance {
    pub fn new<R: Rng + ?Sized>(
        x: f64,
        y: f64,
        visitor_color: Rgb,
        structure_color: Rgb,
        config: &DanceConfig,
        rng: &mut R,
    ) -> Self {
        let count = config.particle_count.max(1);
        let particles = (0..count)
            .map(|i| {
                let spiral = i as f64 / count as f64;
                SwirlParticle {
                    angle: i as f64 * GOLDEN_ANGLE,
                    radius: INNER_RADIUS + spiral * SPIRAL_SPREAD,
                    angular_speed: rng.gen_range(0.8..1.5),
                    color: if i % 2 == 0 {
                        visitor_color
                    } else {
                        structure_color
                    },
                    life: 1.0,
                    size: rng.gen_range(4.0..9.0),
                }
            })
            .collect();

        let rings = [visitor_color, structure_color]
            .into_iter()
            .map(|color| Ring {
                radius: 0.0,
                max_radius: config.ring_max_radius,
                color,
                speed: rng.gen_range(40.0..60.0),
            })
            .collect();

        Self {
            x,
            y,
            visitor_color,
            structure_color,
            duration: config.duration,
            elapsed: 0.0,
            life: 1.0,
            particles,
            rings,
        }
    }

    pub fn update(&mut self, dt: f64) {
        self.elapsed += dt;
        let mut life = 1.0 - self.elapsed / self.duration;
        if life < LIFE_EPSILON {
            life = 0.0;
        }
        self.life = life;

        for p in &mut self.particles {
            p.angle += p.angular_speed * dt * SWIRL_FACTOR;
            p.radius += dt * EXPANSION_SPEED;
            p.life = life;
        }
        for ring in &mut self.rings {
            ring.radius += dt * ring.speed;
        }
    }

    #[must_use]
    pub fn is_dead(&self) -> bool {
        self.life <= 0.0
    }

    #[must_use]
    pub fn life(&self) -> f64 {
        self.life
    }

    #[must_use]
    pub fn origin(&self) -> (f64, f64) {
        (self.x, self.y)
    }

    /// `(carried, structure)`.
    #[must_use]
    pub fn colors(&self) -> (Rgb, Rgb) {
        (self.visitor_color, self.structure_color)
    }

    #[must_use]
    pub fn particles(&self) -> &[SwirlParticle] {
        &self.particles
    }

    #[must_use]
    pub fn rings(&self) -> &[Ring] {
        &self.rings
    }

    #[must_use]
    pub fn render(&self) -> DanceRender {
        let alpha = self.life;

        let particles = self
            .particles
            .iter()
            .filter(|p| p.life > 0.0)
            .map(|p| DanceParticleRender {
                x: self.x + p.angle.cos() * p.radius,
                y: self.y + p.angle.sin() * p.radius,
                color: p.color,
                alpha: p.life * alpha,
                size: p.size,
            })
            .collect();

        let rings = self
            .rings
            .iter()
            .filter(|r| r.radius < r.max_radius)
            .map(|r| RingRender {
                x: self.x,
                y: self.y,
                radius: r.radius,
                color: r.color,
                alpha: alpha * (1.0 - r.radius / r.max_radius),
            })
            .collect();

        DanceRender {
            x: self.x,
            y: self.y,
            visitor_color: self.visitor_color,
            structure_color: self.structure_color,
            alpha,
            particles,
            rings,
        }
    }
}
