//! The pollination system: owns every entity and advances one world per call.
//!
//! Frame order matters. Collision resolution samples a visitor's carried
//! color from before the frame's own collection overwrites it, and dances
//! spawned by agents this frame are first advanced on the next frame.

use crate::agent::AutonomousAgent;
use crate::aura::VisitorAura;
use crate::clock::SimClock;
use crate::config::{AgentKind, AppConfig, DanceConfig};
use crate::dance::PollinationDance;
use crate::metrics::Metrics;
use crate::mycelium::MycelialNetwork;
use crate::structure::Structure;
use crate::trail::MovementTrail;
use biotelia_data::{
    AgentId, PollinationEvent, Pollinator, RenderSnapshot, VisitorId, VisitorPosition,
};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::collections::{HashMap, HashSet};
use std::time::Instant;

/// Per-visitor state, created the first frame an id appears and dropped the
/// first frame it is missing.
#[derive(Debug, Clone, PartialEq)]
pub struct VisitorState {
    pub aura: VisitorAura,
    pub trail: MovementTrail,
}

pub struct PollinationSystem {
    config: AppConfig,
    clock: SimClock,
    rng: ChaCha8Rng,
    structures: Vec<Structure>,
    mycelium: MycelialNetwork,
    visitors: HashMap<VisitorId, VisitorState>,
    dances: Vec<PollinationDance>,
    agents: Vec<AutonomousAgent>,
    last_input: Vec<VisitorPosition>,
    last_events: Vec<PollinationEvent>,
    metrics: Metrics,
}

impl PollinationSystem {
    /// Builds the world and spawns one agent per configured kind.
    ///
    /// Never fails: structures with a non-positive radius are skipped, and an
    /// empty structure list simply yields a world without collisions.
    #[must_use]
    pub fn new(config: AppConfig) -> Self {
        let mut system = Self::without_agents(config);
        system.spawn_configured_agents();
        system
    }

    /// Builds the world with no autonomous agents.
    #[must_use]
    pub fn without_agents(config: AppConfig) -> Self {
        let mut rng = match config.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        };

        let structures: Vec<Structure> = config
            .structures
            .iter()
            .filter_map(|s| {
                if s.radius.is_nan() || s.radius <= 0.0 {
                    tracing::warn!(
                        id = s.id,
                        radius = s.radius,
                        "Skipping structure with non-positive radius"
                    );
                    return None;
                }
                let (x, y) = s.resolve_position(&config.canvas);
                Some(Structure::new(s.id, x, y, s.radius, s.color))
            })
            .collect();

        if structures.is_empty() {
            tracing::warn!("No structures configured; running without collisions");
        }

        let mycelium = MycelialNetwork::new(&structures, &config.mycelium, &mut rng);
        let fps = config.target_fps.max(1) as f64;
        let clock = SimClock::new(1.0 / fps, config.max_frame_dt);

        tracing::info!(
            width = config.canvas.width,
            height = config.canvas.height,
            structures = structures.len(),
            connections = mycelium.connections().len(),
            fingerprint = %config.fingerprint(),
            "Pollination system initialized"
        );

        Self {
            config,
            clock,
            rng,
            structures,
            mycelium,
            visitors: HashMap::new(),
            dances: Vec::new(),
            agents: Vec::new(),
            last_input: Vec::new(),
            last_events: Vec::new(),
            metrics: Metrics::new(),
        }
    }

    pub fn spawn_configured_agents(&mut self) {
        let kinds = self.config.agents.kinds.clone();
        for kind in kinds {
            self.add_autonomous_agent(kind);
        }
    }

    /// Adds a pollinator at a random position. Ids are sequential.
    pub fn add_autonomous_agent(&mut self, kind: AgentKind) -> AgentId {
        let id = self.agents.len() as AgentId;
        let agent = AutonomousAgent::new(id, kind, &self.structures, &self.config, &mut self.rng);
        tracing::debug!(
            agent = id,
            kind = kind.name(),
            x = agent.x,
            y = agent.y,
            "Agent spawned"
        );
        self.agents.push(agent);
        id
    }

    /// Advances the world by one frame and returns its render snapshot.
    ///
    /// With `dt == None` the timestep is derived from wall-clock time since
    /// the previous call, capped at `max_frame_dt`.
    pub fn update(&mut self, visitors: &[VisitorPosition], dt: Option<f64>) -> RenderSnapshot {
        let started = Instant::now();
        let dt = self.clock.advance(dt);
        let now = self.clock.time();
        self.last_events.clear();

        for structure in &mut self.structures {
            structure.update(now);
        }
        self.mycelium.update(dt, now, &mut self.rng);

        self.update_visitors(visitors, dt, now);

        for dance in &mut self.dances {
            dance.update(dt);
        }
        self.dances.retain(|d| !d.is_dead());

        self.update_agents(dt, now);

        self.last_input = visitors.to_vec();
        self.metrics
            .record_frame(started.elapsed(), self.visitors.len(), self.dances.len());
        self.render_snapshot()
    }

    fn update_visitors(&mut self, visitors: &[VisitorPosition], dt: f64, now: f64) {
        for v in visitors {
            let state = self.visitors.entry(v.id).or_insert_with(|| {
                self.metrics.record_visitor_joined();
                tracing::debug!(visitor = v.id, "Visitor arrived");
                VisitorState {
                    aura: VisitorAura::new(v.id, &self.config.aura),
                    trail: MovementTrail::new(v.id, &self.config.trail),
                }
            });

            for structure in &self.structures {
                if !structure.contains_point(v.x, v.y) {
                    continue;
                }
                if let Some(carried) = state.aura.color() {
                    if carried != structure.color {
                        let event = PollinationEvent {
                            x: structure.x,
                            y: structure.y,
                            carried,
                            structure: structure.color,
                            source: Pollinator::Visitor(v.id),
                        };
                        spawn_dance(&mut self.dances, &event, &self.config.dance, &mut self.rng);
                        self.last_events.push(event);
                        self.metrics.record_visitor_dance();
                    }
                }
                state.aura.collect_color(structure.color, now);
            }

            state.aura.update(dt);
            state.trail.update(v.x, v.y, dt, &state.aura);
        }

        let active: HashSet<VisitorId> = visitors.iter().map(|v| v.id).collect();
        let before = self.visitors.len();
        self.visitors.retain(|id, _| active.contains(id));
        let left = before - self.visitors.len();
        if left > 0 {
            self.metrics.record_visitors_left(left);
            tracing::debug!(left, "Visitors retired");
        }
    }

    fn update_agents(&mut self, dt: f64, now: f64) {
        let speed = self.config.speed;
        for agent in &mut self.agents {
            agent.update(dt, now, speed, &self.structures, &mut self.rng);
            if let Some(event) = agent.take_pollination() {
                if event.carried == event.structure {
                    continue;
                }
                spawn_dance(&mut self.dances, &event, &self.config.dance, &mut self.rng);
                self.last_events.push(event);
                self.metrics.record_agent_dance();
            }
        }
    }

    /// Renders the current state against the most recent visitor input.
    #[must_use]
    pub fn render_snapshot(&self) -> RenderSnapshot {
        let now = self.clock.time();
        let mut auras = Vec::with_capacity(self.last_input.len());
        let mut trails = Vec::with_capacity(self.last_input.len());
        for v in &self.last_input {
            if let Some(state) = self.visitors.get(&v.id) {
                auras.push(state.aura.render(v.x, v.y, now));
                trails.push(state.trail.render());
            }
        }

        RenderSnapshot {
            time: now,
            intensity: self.config.intensity,
            structures: self.structures.iter().map(|s| s.render(now)).collect(),
            mycelium: self.mycelium.render(),
            auras,
            trails,
            dances: self.dances.iter().map(PollinationDance::render).collect(),
            agents: self.agents.iter().map(|a| a.render(now)).collect(),
            visitors: self.last_input.clone(),
        }
    }

    #[must_use]
    pub fn time(&self) -> f64 {
        self.clock.time()
    }

    #[must_use]
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    #[must_use]
    pub fn structures(&self) -> &[Structure] {
        &self.structures
    }

    #[must_use]
    pub fn mycelium(&self) -> &MycelialNetwork {
        &self.mycelium
    }

    #[must_use]
    pub fn visitor(&self, id: VisitorId) -> Option<&VisitorState> {
        self.visitors.get(&id)
    }

    /// Sorted ids of every visitor currently tracked.
    #[must_use]
    pub fn active_visitor_ids(&self) -> Vec<VisitorId> {
        let mut ids: Vec<VisitorId> = self.visitors.keys().copied().collect();
        ids.sort_unstable();
        ids
    }

    #[must_use]
    pub fn dances(&self) -> &[PollinationDance] {
        &self.dances
    }

    #[must_use]
    pub fn agents(&self) -> &[AutonomousAgent] {
        &self.agents
    }

    /// Pollination events resolved during the most recent frame.
    #[must_use]
    pub fn last_events(&self) -> &[PollinationEvent] {
        &self.last_events
    }

    #[must_use]
    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }
}

fn spawn_dance(
    dances: &mut Vec<PollinationDance>,
    event: &PollinationEvent,
    config: &DanceConfig,
    rng: &mut ChaCha8Rng,
) {
    tracing::debug!(
        x = event.x,
        y = event.y,
        carried = %event.carried,
        structure = %event.structure,
        source = ?event.source,
        "Pollination dance"
    );
    dances.push(PollinationDance::new(
        event.x,
        event.y,
        event.carried,
        event.structure,
        config,
        rng,
    ));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::StructureConfig;
    use biotelia_data::Rgb;

    const RED: Rgb = Rgb::new(255, 0, 0);
    const BLUE: Rgb = Rgb::new(0, 0, 255);
    const DT: Option<f64> = Some(1.0 / 60.0);

    fn two_structure_system() -> PollinationSystem {
        PollinationSystem::without_agents(AppConfig {
            structures: vec![
                StructureConfig::new(0, 100.0, 100.0, 50.0, RED),
                StructureConfig::new(1, 400.0, 100.0, 50.0, BLUE),
            ],
            seed: Some(1),
            ..Default::default()
        })
    }

    #[test]
    fn test_first_touch_collects_without_dance() {
        let mut system = two_structure_system();
        let snapshot = system.update(&[VisitorPosition::new(7, 100.0, 100.0)], DT);

        let state = system.visitor(7).unwrap();
        assert_eq!(state.aura.color(), Some(RED));
        assert!(system.dances().is_empty());
        assert!(system.last_events().is_empty());
        assert_eq!(snapshot.auras.len(), 1);
        assert_eq!(snapshot.auras[0].unwrap().color, RED);
    }

    #[test]
    fn test_mismatch_spawns_one_dance() {
        let mut system = two_structure_system();
        system.update(&[VisitorPosition::new(7, 100.0, 100.0)], DT);
        system.update(&[VisitorPosition::new(7, 400.0, 100.0)], DT);

        assert_eq!(system.dances().len(), 1);
        assert_eq!(system.dances()[0].colors(), (RED, BLUE));
        assert_eq!(system.dances()[0].origin(), (400.0, 100.0));
        assert_eq!(system.visitor(7).unwrap().aura.color(), Some(BLUE));
        assert_eq!(system.metrics().visitor_dances(), 1);
        assert_eq!(system.last_events()[0].source, Pollinator::Visitor(7));
    }

    #[test]
    fn test_same_color_never_dances() {
        let mut system = two_structure_system();
        for _ in 0..120 {
            system.update(&[VisitorPosition::new(1, 110.0, 90.0)], DT);
        }
        assert!(system.dances().is_empty());
        assert_eq!(system.metrics().total_dances(), 0);
    }

    #[test]
    fn test_visitors_retire_immediately() {
        let mut system = two_structure_system();
        system.update(
            &[
                VisitorPosition::new(1, 10.0, 10.0),
                VisitorPosition::new(2, 20.0, 20.0),
            ],
            DT,
        );
        assert_eq!(system.active_visitor_ids(), vec![1, 2]);
        system.update(&[VisitorPosition::new(2, 20.0, 20.0)], DT);
        assert_eq!(system.active_visitor_ids(), vec![2]);
        system.update(&[], DT);
        assert!(system.active_visitor_ids().is_empty());
        assert_eq!(system.metrics().visitors_left(), 2);
    }

    #[test]
    fn test_non_positive_radius_is_skipped() {
        let system = PollinationSystem::without_agents(AppConfig {
            structures: vec![
                StructureConfig::new(0, 100.0, 100.0, 0.0, RED),
                StructureConfig::new(1, 400.0, 100.0, 50.0, BLUE),
            ],
            seed: Some(1),
            ..Default::default()
        });
        assert_eq!(system.structures().len(), 1);
        assert_eq!(system.structures()[0].id, 1);
    }

    #[test]
    fn test_normalized_structure_positions() {
        let system = PollinationSystem::without_agents(AppConfig {
            seed: Some(1),
            ..Default::default()
        });
        let first = &system.structures()[0];
        assert!((first.x - 384.0).abs() < 1e-9);
        assert!((first.y - 324.0).abs() < 1e-9);
    }

    #[test]
    fn test_configured_agents_spawn() {
        let system = PollinationSystem::new(AppConfig {
            seed: Some(9),
            ..Default::default()
        });
        assert_eq!(system.agents().len(), 3);
        let ids: Vec<_> = system.agents().iter().map(|a| a.id).collect();
        assert_eq!(ids, vec![0, 1, 2]);
    }
}
