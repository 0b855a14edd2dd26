//! Configuration management for simulation parameters.
//!
//! This module provides strongly-typed configuration structures that map to
//! the `config.toml` file. Every tunable of the installation lives here:
//! canvas size, structure layout, aura/trail/dance look, and the autonomous
//! pollinator roster.
//!
//! ## Example `config.toml`
//!
//! ```toml
//! intensity = 0.7
//! speed = 0.6
//! seed = 42
//!
//! [canvas]
//! width = 1920.0
//! height = 1080.0
//!
//! [[structures]]
//! id = 0
//! x = 0.2
//! y = 0.3
//! radius = 80.0
//! color = [255, 230, 100]
//!
//! [agents]
//! kinds = ["bee", "moth"]
//! ```

use biotelia_data::Rgb;
use serde::{Deserialize, Serialize};

/// Canvas geometry in pixels.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(default)]
pub struct CanvasConfig {
    pub width: f64,
    pub height: f64,
    /// Agents are clamped to the canvas inset by this many pixels.
    pub margin: f64,
    /// Agents spawn at least this far from the canvas edge.
    pub spawn_margin: f64,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            width: 1920.0,
            height: 1080.0,
            margin: 50.0,
            spawn_margin: 100.0,
        }
    }
}

/// Placement of one structure.
///
/// A coordinate `<= 1.0` is treated as normalized and scaled by the canvas
/// dimension on that axis; anything larger is taken as absolute pixels.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct StructureConfig {
    pub id: u32,
    pub x: f64,
    pub y: f64,
    pub radius: f64,
    pub color: Rgb,
}

impl StructureConfig {
    #[must_use]
    pub fn new(id: u32, x: f64, y: f64, radius: f64, color: Rgb) -> Self {
        Self {
            id,
            x,
            y,
            radius,
            color,
        }
    }

    /// Resolves the configured position to canvas pixels.
    #[must_use]
    pub fn resolve_position(&self, canvas: &CanvasConfig) -> (f64, f64) {
        let x = if self.x <= 1.0 {
            self.x * canvas.width
        } else {
            self.x
        };
        let y = if self.y <= 1.0 {
            self.y * canvas.height
        } else {
            self.y
        };
        (x, y)
    }
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(default)]
pub struct AuraConfig {
    pub glow_radius: f64,
    /// Per-frame multiplier at the 60 Hz reference rate.
    pub decay_rate: f64,
    /// Below this the color is dropped entirely.
    pub min_intensity: f64,
}

impl Default for AuraConfig {
    fn default() -> Self {
        Self {
            glow_radius: 18.0,
            decay_rate: 0.998,
            min_intensity: 0.05,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(default)]
pub struct TrailConfig {
    pub max_points: usize,
    pub min_distance: f64,
    pub fade_rate: f64,
    pub point_size: f64,
    /// Fade rate applied while no color is carried.
    pub idle_fade_rate: f64,
}

impl Default for TrailConfig {
    fn default() -> Self {
        Self {
            max_points: 80,
            min_distance: 8.0,
            fade_rate: 0.15,
            point_size: 6.0,
            idle_fade_rate: 0.5,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(default)]
pub struct DanceConfig {
    pub duration: f64,
    pub particle_count: usize,
    pub ring_max_radius: f64,
}

impl Default for DanceConfig {
    fn default() -> Self {
        Self {
            duration: 2.5,
            particle_count: 40,
            ring_max_radius: 90.0,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(default)]
pub struct MyceliumConfig {
    pub max_connection_distance: f64,
    /// Spawn probability per connection per second.
    pub spawn_rate: f64,
    /// Fraction of the connection length travelled per second.
    pub particle_speed: f64,
    pub particle_lifetime: f64,
}

impl Default for MyceliumConfig {
    fn default() -> Self {
        Self {
            max_connection_distance: 2000.0,
            spawn_rate: 0.5,
            particle_speed: 0.2,
            particle_lifetime: 3.0,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(default)]
pub struct AgentConfig {
    /// One autonomous pollinator is spawned per entry.
    pub kinds: Vec<AgentKind>,
    pub arrival_distance: f64,
    pub orbit_radius: f64,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            kinds: vec![AgentKind::Bee, AgentKind::Butterfly, AgentKind::Moth],
            arrival_distance: 30.0,
            orbit_radius: 25.0,
        }
    }
}

/// Pollinator species. Unknown names deserialize to [`AgentKind::Bee`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum AgentKind {
    #[default]
    Bee,
    Butterfly,
    Moth,
}

/// Fixed movement and look constants for an [`AgentKind`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AgentTraits {
    pub speed: f64,
    pub size: f64,
    pub wiggle: f64,
    pub body_color: Rgb,
}

impl AgentKind {
    #[must_use]
    pub fn traits(self) -> AgentTraits {
        match self {
            AgentKind::Bee => AgentTraits {
                speed: 60.0,
                size: 35.0,
                wiggle: 0.8,
                body_color: Rgb::new(255, 220, 60),
            },
            AgentKind::Butterfly => AgentTraits {
                speed: 40.0,
                size: 40.0,
                wiggle: 1.5,
                body_color: Rgb::new(255, 160, 200),
            },
            AgentKind::Moth => AgentTraits {
                speed: 50.0,
                size: 35.0,
                wiggle: 1.0,
                body_color: Rgb::new(180, 200, 220),
            },
        }
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            AgentKind::Bee => "bee",
            AgentKind::Butterfly => "butterfly",
            AgentKind::Moth => "moth",
        }
    }
}

impl From<&str> for AgentKind {
    fn from(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "butterfly" => AgentKind::Butterfly,
            "moth" => AgentKind::Moth,
            _ => AgentKind::Bee,
        }
    }
}

impl From<String> for AgentKind {
    fn from(name: String) -> Self {
        AgentKind::from(name.as_str())
    }
}

impl From<AgentKind> for String {
    fn from(kind: AgentKind) -> Self {
        kind.name().to_string()
    }
}

/// The five-structure layout the installation ships with.
#[must_use]
pub fn default_structures() -> Vec<StructureConfig> {
    vec![
        StructureConfig::new(0, 0.20, 0.30, 80.0, Rgb::new(255, 230, 100)),
        StructureConfig::new(1, 0.75, 0.25, 80.0, Rgb::new(255, 140, 180)),
        StructureConfig::new(2, 0.50, 0.50, 80.0, Rgb::new(180, 120, 255)),
        StructureConfig::new(3, 0.25, 0.75, 70.0, Rgb::new(100, 255, 180)),
        StructureConfig::new(4, 0.80, 0.70, 70.0, Rgb::new(255, 180, 100)),
    ]
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(default)]
pub struct AppConfig {
    pub canvas: CanvasConfig,
    pub structures: Vec<StructureConfig>,
    pub aura: AuraConfig,
    pub trail: TrailConfig,
    pub dance: DanceConfig,
    pub mycelium: MyceliumConfig,
    pub agents: AgentConfig,
    /// Global brightness handed through to renderers.
    pub intensity: f64,
    /// Global speed multiplier for autonomous pollinators.
    pub speed: f64,
    pub seed: Option<u64>,
    pub target_fps: u64,
    /// Cap on wall-clock derived timesteps, in seconds.
    pub max_frame_dt: f64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            canvas: CanvasConfig::default(),
            structures: default_structures(),
            aura: AuraConfig::default(),
            trail: TrailConfig::default(),
            dance: DanceConfig::default(),
            mycelium: MyceliumConfig::default(),
            agents: AgentConfig::default(),
            intensity: 0.7,
            speed: 0.6,
            seed: None,
            target_fps: 60,
            max_frame_dt: 0.1,
        }
    }
}

impl AppConfig {
    /// Validates all configuration parameters.
    ///
    /// An empty structure list is accepted: the simulation then runs with no
    /// collisions and an empty mycelial network.
    pub fn validate(&self) -> anyhow::Result<()> {
        // Canvas
        anyhow::ensure!(
            self.canvas.width.is_finite() && self.canvas.width > 0.0,
            "Canvas width must be positive"
        );
        anyhow::ensure!(
            self.canvas.height.is_finite() && self.canvas.height > 0.0,
            "Canvas height must be positive"
        );
        anyhow::ensure!(
            self.canvas.margin >= 0.0 && self.canvas.spawn_margin >= 0.0,
            "Canvas margins must be non-negative"
        );

        for s in &self.structures {
            anyhow::ensure!(
                s.radius.is_finite() && s.radius > 0.0,
                "Structure {} radius must be positive",
                s.id
            );
            anyhow::ensure!(
                s.x.is_finite() && s.y.is_finite(),
                "Structure {} position must be finite",
                s.id
            );
        }

        // Aura
        anyhow::ensure!(
            self.aura.decay_rate > 0.0 && self.aura.decay_rate <= 1.0,
            "Aura decay rate must be in (0.0, 1.0]"
        );
        anyhow::ensure!(
            self.aura.min_intensity >= 0.0 && self.aura.min_intensity < 1.0,
            "Aura min intensity must be in [0.0, 1.0)"
        );
        anyhow::ensure!(
            self.aura.glow_radius >= 0.0,
            "Aura glow radius must be non-negative"
        );

        // Trail
        anyhow::ensure!(self.trail.max_points > 0, "Trail max points must be positive");
        anyhow::ensure!(
            self.trail.min_distance >= 0.0,
            "Trail min distance must be non-negative"
        );
        anyhow::ensure!(
            self.trail.fade_rate >= 0.0 && self.trail.idle_fade_rate >= 0.0,
            "Trail fade rates must be non-negative"
        );

        // Dance
        anyhow::ensure!(
            self.dance.duration > 0.0,
            "Dance duration must be positive"
        );
        anyhow::ensure!(
            (40..=60).contains(&self.dance.particle_count),
            "Dance particle count must be in [40, 60]"
        );
        anyhow::ensure!(
            self.dance.ring_max_radius > 0.0,
            "Dance ring max radius must be positive"
        );

        // Mycelium
        anyhow::ensure!(
            self.mycelium.max_connection_distance >= 0.0,
            "Mycelium connection distance must be non-negative"
        );
        anyhow::ensure!(
            self.mycelium.spawn_rate >= 0.0 && self.mycelium.particle_speed >= 0.0,
            "Mycelium rates must be non-negative"
        );
        anyhow::ensure!(
            self.mycelium.particle_lifetime > 0.0,
            "Mycelium particle lifetime must be positive"
        );

        // Agents
        anyhow::ensure!(
            self.agents.arrival_distance > 0.0,
            "Agent arrival distance must be positive"
        );
        anyhow::ensure!(
            self.agents.orbit_radius >= 0.0,
            "Agent orbit radius must be non-negative"
        );

        anyhow::ensure!(self.intensity >= 0.0, "Intensity must be non-negative");
        anyhow::ensure!(self.speed >= 0.0, "Speed must be non-negative");
        anyhow::ensure!(self.max_frame_dt > 0.0, "Max frame dt must be positive");
        anyhow::ensure!(self.target_fps > 0, "Target FPS must be positive");
        anyhow::ensure!(self.target_fps <= 240, "Target FPS too high (max 240)");

        Ok(())
    }

    /// Parses and validates configuration from `config.toml` content.
    pub fn from_toml(content: &str) -> anyhow::Result<Self> {
        let config = toml::from_str::<Self>(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Hash of everything that affects simulation behavior.
    ///
    /// Two runs with equal fingerprints and equal seeds replay identically.
    #[must_use]
    pub fn fingerprint(&self) -> String {
        use sha2::{Digest, Sha256};
        let mut hasher = Sha256::new();
        hasher.update(format!("{:?}", self.canvas).as_bytes());
        hasher.update(format!("{:?}", self.structures).as_bytes());
        hasher.update(format!("{:?}", self.aura).as_bytes());
        hasher.update(format!("{:?}", self.trail).as_bytes());
        hasher.update(format!("{:?}", self.dance).as_bytes());
        hasher.update(format!("{:?}", self.mycelium).as_bytes());
        hasher.update(format!("{:?}", self.agents).as_bytes());
        hasher.update(format!("{:?}", (self.speed, self.seed)).as_bytes());
        hex::encode(hasher.finalize())
    }
}
