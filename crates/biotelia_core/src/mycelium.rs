//! Mycelial network: the always-present background web between structures.
//!
//! Topology is fixed at construction. Each structure links to two or three of
//! its nearest later-listed neighbours within range, so every pair is linked
//! at most once. Flow particles drift along the links and expire.

use crate::config::MyceliumConfig;
use crate::structure::Structure;
use biotelia_data::{FlowParticleRender, MyceliumLinkRender};
use rand::Rng;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlowParticle {
    /// Position along the link, `0.0` at `a`, `1.0` at `b`.
    pub progress: f64,
    /// `+1.0` travels a to b, `-1.0` travels b to a.
    pub direction: f64,
    pub life: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Connection {
    pub a: u32,
    pub b: u32,
    pub from: (f64, f64),
    pub to: (f64, f64),
    pub flow: f64,
    pub particles: Vec<FlowParticle>,
}

impl Connection {
    fn point_at(&self, progress: f64) -> (f64, f64) {
        (
            self.from.0 + (self.to.0 - self.from.0) * progress,
            self.from.1 + (self.to.1 - self.from.1) * progress,
        )
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MycelialNetwork {
    connections: Vec<Connection>,
    spawn_rate: f64,
    particle_speed: f64,
    particle_lifetime: f64,
}

impl MycelialNetwork {
    pub fn new<R: Rng + ?Sized>(
        structures: &[Structure],
        config: &MyceliumConfig,
        rng: &mut R,
    ) -> Self {
        let mut connections = Vec::new();

        for (i, a) in structures.iter().enumerate() {
            let mut nearby: Vec<(f64, &Structure)> = structures
                .iter()
                .skip(i + 1)
                .map(|b| (a.distance_to(b), b))
                .filter(|(d, _)| *d < config.max_connection_distance)
                .collect();
            if nearby.is_empty() {
                continue;
            }
            nearby.sort_by(|x, y| x.0.total_cmp(&y.0));

            let wanted = rng.gen_range(2..=3usize);
            for (_, b) in nearby.into_iter().take(wanted) {
                connections.push(Connection {
                    a: a.id,
                    b: b.id,
                    from: (a.x, a.y),
                    to: (b.x, b.y),
                    flow: 0.2,
                    particles: Vec::new(),
                });
            }
        }

        tracing::debug!(
            structures = structures.len(),
            connections = connections.len(),
            "Mycelial network grown"
        );

        Self {
            connections,
            spawn_rate: config.spawn_rate,
            particle_speed: config.particle_speed,
            particle_lifetime: config.particle_lifetime,
        }
    }

    pub fn update<R: Rng + ?Sized>(&mut self, dt: f64, sim_time: f64, rng: &mut R) {
        let flow = 0.2 + (sim_time * 0.3).sin() * 0.1;
        let step = dt * self.particle_speed;

        for conn in &mut self.connections {
            conn.flow = flow;

            if rng.gen::<f64>() < dt * self.spawn_rate {
                let (progress, direction) = if rng.gen_bool(0.5) {
                    (0.0, 1.0)
                } else {
                    (1.0, -1.0)
                };
                conn.particles.push(FlowParticle {
                    progress,
                    direction,
                    life: self.particle_lifetime,
                });
            }

            for p in &mut conn.particles {
                p.progress += p.direction * step;
                p.life -= dt;
            }
            conn.particles
                .retain(|p| p.life > 0.0 && (0.0..=1.0).contains(&p.progress));
        }
    }

    #[must_use]
    pub fn connections(&self) -> &[Connection] {
        &self.connections
    }

    #[must_use]
    pub fn particle_count(&self) -> usize {
        self.connections.iter().map(|c| c.particles.len()).sum()
    }

    #[must_use]
    pub fn render(&self) -> Vec<MyceliumLinkRender> {
        self.connections
            .iter()
            .map(|conn| MyceliumLinkRender {
                x1: conn.from.0,
                y1: conn.from.1,
                x2: conn.to.0,
                y2: conn.to.1,
                flow: conn.flow,
                particles: conn
                    .particles
                    .iter()
                    .map(|p| {
                        let (x, y) = conn.point_at(p.progress);
                        FlowParticleRender {
                            x,
                            y,
                            alpha: p.life / self.particle_lifetime,
                        }
                    })
                    .collect(),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use biotelia_data::Rgb;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use std::collections::HashSet;

    fn grid_structures() -> Vec<Structure> {
        (0..6)
            .map(|i| {
                Structure::new(
                    i,
                    100.0 + (i % 3) as f64 * 200.0,
                    100.0 + (i / 3) as f64 * 200.0,
                    40.0,
                    Rgb::new(i as u8 * 40, 100, 100),
                )
            })
            .collect()
    }

    #[test]
    fn test_empty_structures_gives_empty_network() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let mut net = MycelialNetwork::new(&[], &MyceliumConfig::default(), &mut rng);
        net.update(1.0, 1.0, &mut rng);
        assert!(net.connections().is_empty());
        assert!(net.render().is_empty());
    }

    #[test]
    fn test_each_node_links_to_nearest_few() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let structures = grid_structures();
        let net = MycelialNetwork::new(&structures, &MyceliumConfig::default(), &mut rng);

        let mut seen = HashSet::new();
        for conn in net.connections() {
            assert!(conn.a < conn.b);
            assert!(seen.insert((conn.a, conn.b)), "duplicate link");
        }
        for s in &structures {
            let outgoing = net.connections().iter().filter(|c| c.a == s.id).count();
            let later = structures.len() - 1 - s.id as usize;
            assert!(outgoing <= 3);
            assert!(outgoing >= later.min(2));
        }
    }

    #[test]
    fn test_distance_limit() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let structures = grid_structures();
        let config = MyceliumConfig {
            max_connection_distance: 10.0,
            ..Default::default()
        };
        let net = MycelialNetwork::new(&structures, &config, &mut rng);
        assert!(net.connections().is_empty());
    }

    #[test]
    fn test_particles_expire_and_stay_on_link() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let structures = grid_structures();
        let config = MyceliumConfig {
            spawn_rate: 20.0,
            ..Default::default()
        };
        let mut net = MycelialNetwork::new(&structures, &config, &mut rng);
        let mut spawned_any = false;
        for frame in 0..600 {
            net.update(1.0 / 60.0, frame as f64 / 60.0, &mut rng);
            spawned_any |= net.particle_count() > 0;
            for conn in net.connections() {
                assert!((conn.flow - 0.2).abs() <= 0.1 + 1e-12);
                for p in &conn.particles {
                    assert!(p.life > 0.0 && p.life <= 3.0);
                    assert!((0.0..=1.0).contains(&p.progress));
                }
            }
        }
        assert!(spawned_any);
    }
}
