//! Autonomous pollinators: bees, butterflies and moths.
//!
//! Each agent cycles forever between two states:
//!
//! - **Flying** toward a randomly chosen target structure, with an organic
//!   sinusoidal wiggle on top of straight-line steering.
//! - **Collecting** on a small orbit around the target until its dwell timer
//!   runs out. It then takes the structure's color (reporting a pollination
//!   event if it was carrying a different one) and picks a new target.
//!
//! Agents carry color and leave trails with the same rules as visitors.

use crate::aura::CarriedColor;
use crate::config::{AgentKind, AgentTraits, AppConfig};
use crate::structure::Structure;
use crate::trail::TrailBuffer;
use biotelia_data::{AgentId, AgentRender, GlowRender, Pollinator, PollinationEvent, Rgb};
use rand::seq::SliceRandom;
use rand::Rng;

const WIGGLE_AMPLITUDE: f64 = 20.0;
const WIGGLE_FREQ_X: f64 = 3.0;
const WIGGLE_FREQ_Y: f64 = 4.0;
const ORBIT_FREQ: f64 = 2.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AgentState {
    Flying,
    Collecting,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AutonomousAgent {
    pub id: AgentId,
    pub kind: AgentKind,
    pub x: f64,
    pub y: f64,
    state: AgentState,
    state_timer: f64,
    /// Index into the owning system's structure list.
    target: Option<usize>,
    traits: AgentTraits,
    carried: CarriedColor,
    trail: TrailBuffer,
    pending: Option<PollinationEvent>,
    bounds: (f64, f64, f64, f64),
    arrival_distance: f64,
    orbit_radius: f64,
}

impl AutonomousAgent {
    /// Spawns an agent at a random position and points it at a random
    /// structure. With no structures it stays targetless and idle.
    pub fn new<R: Rng + ?Sized>(
        id: AgentId,
        kind: AgentKind,
        structures: &[Structure],
        config: &AppConfig,
        rng: &mut R,
    ) -> Self {
        let canvas = &config.canvas;
        let x = spawn_coordinate(canvas.width, canvas.spawn_margin, rng);
        let y = spawn_coordinate(canvas.height, canvas.spawn_margin, rng);
        Self::new_at(id, kind, x, y, structures, config, rng)
    }

    pub fn new_at<R: Rng + ?Sized>(
        id: AgentId,
        kind: AgentKind,
        x: f64,
        y: f64,
        structures: &[Structure],
        config: &AppConfig,
        rng: &mut R,
    ) -> Self {
        let canvas = &config.canvas;
        let mut agent = Self {
            id,
            kind,
            x,
            y,
            state: AgentState::Flying,
            state_timer: 0.0,
            target: None,
            traits: kind.traits(),
            carried: CarriedColor::new(config.aura.decay_rate, config.aura.min_intensity),
            trail: TrailBuffer::new(&config.trail),
            pending: None,
            bounds: (
                canvas.margin,
                canvas.margin,
                canvas.width - canvas.margin,
                canvas.height - canvas.margin,
            ),
            arrival_distance: config.agents.arrival_distance,
            orbit_radius: config.agents.orbit_radius,
        };
        agent.pick_new_target(structures, rng);
        agent
    }

    fn pick_new_target<R: Rng + ?Sized>(&mut self, structures: &[Structure], rng: &mut R) {
        let indices: Vec<usize> = (0..structures.len()).collect();
        let Some(&index) = indices.choose(rng) else {
            return;
        };
        self.target = Some(index);
        self.state = AgentState::Flying;
        self.state_timer = rng.gen_range(3.0..8.0);
    }

    /// Advances the agent by one frame.
    ///
    /// `structures` must be the same list the agent was created against.
    pub fn update<R: Rng + ?Sized>(
        &mut self,
        dt: f64,
        sim_time: f64,
        speed_multiplier: f64,
        structures: &[Structure],
        rng: &mut R,
    ) {
        self.state_timer -= dt;

        let Some(target) = self.target.and_then(|i| structures.get(i)) else {
            self.pick_new_target(structures, rng);
            return;
        };
        let (tx, ty) = (target.x, target.y);

        let dx = tx - self.x;
        let dy = ty - self.y;
        let distance = (dx * dx + dy * dy).sqrt();

        match self.state {
            AgentState::Flying => {
                let wiggle_x =
                    (sim_time * WIGGLE_FREQ_X).sin() * self.traits.wiggle * WIGGLE_AMPLITUDE;
                let wiggle_y =
                    (sim_time * WIGGLE_FREQ_Y).cos() * self.traits.wiggle * WIGGLE_AMPLITUDE;

                if distance > 0.0 {
                    let step = self.traits.speed * dt * speed_multiplier;
                    self.x += dx / distance * step + wiggle_x * dt;
                    self.y += dy / distance * step + wiggle_y * dt;
                }

                if distance < self.arrival_distance {
                    self.state = AgentState::Collecting;
                    self.state_timer = rng.gen_range(1.0..2.0);
                    tracing::debug!(agent = self.id, structure = target.id, "Agent arrived");
                }
            }
            AgentState::Collecting => {
                let angle = sim_time * ORBIT_FREQ;
                self.x = tx + angle.cos() * self.orbit_radius;
                self.y = ty + angle.sin() * self.orbit_radius;

                if self.state_timer <= 0.0 {
                    let color = target.color;
                    if let Some(carried) = self.carried.color() {
                        if carried != color {
                            self.pending = Some(PollinationEvent {
                                x: tx,
                                y: ty,
                                carried,
                                structure: color,
                                source: Pollinator::Agent(self.id),
                            });
                        }
                    }
                    self.carried.collect(color, sim_time);
                    self.pick_new_target(structures, rng);
                    tracing::debug!(agent = self.id, target = ?self.target, "Agent switched target");
                }
            }
        }

        let (min_x, min_y, max_x, max_y) = self.bounds;
        self.x = self.x.min(max_x).max(min_x);
        self.y = self.y.min(max_y).max(min_y);

        self.carried.decay(dt);
        self.trail.update(self.x, self.y, dt, self.carried.color());
    }

    /// Hands over the pollination event from the last completed collection.
    pub fn take_pollination(&mut self) -> Option<PollinationEvent> {
        self.pending.take()
    }

    #[must_use]
    pub fn state(&self) -> AgentState {
        self.state
    }

    #[must_use]
    pub fn state_timer(&self) -> f64 {
        self.state_timer
    }

    #[must_use]
    pub fn target(&self) -> Option<usize> {
        self.target
    }

    #[must_use]
    pub fn color(&self) -> Option<Rgb> {
        self.carried.color()
    }

    #[must_use]
    pub fn intensity(&self) -> f64 {
        self.carried.intensity()
    }

    #[must_use]
    pub fn traits(&self) -> AgentTraits {
        self.traits
    }

    #[must_use]
    pub fn trail(&self) -> &TrailBuffer {
        &self.trail
    }

    #[must_use]
    pub fn render(&self, sim_time: f64) -> AgentRender {
        let glow = self.carried.color().map(|color| GlowRender {
            color,
            intensity: self.carried.intensity(),
            radius: self.traits.size * 2.0,
            pulse: self.carried.pulse(sim_time),
        });
        AgentRender {
            id: self.id,
            x: self.x,
            y: self.y,
            size: self.traits.size,
            base_color: self.traits.body_color,
            trail: self.trail.render_with(|life| 3.0 + life * 2.0),
            glow,
        }
    }
}

fn spawn_coordinate<R: Rng + ?Sized>(extent: f64, margin: f64, rng: &mut R) -> f64 {
    if extent > margin * 2.0 {
        rng.gen_range(margin..extent - margin)
    } else {
        extent / 2.0
    }
}
