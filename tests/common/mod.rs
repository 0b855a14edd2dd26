pub mod macros;

use biotelia_core::config::{AgentKind, AppConfig, StructureConfig};
use biotelia_core::PollinationSystem;
use biotelia_data::{Rgb, VisitorPosition};

#[allow(dead_code)]
pub const RED: Rgb = Rgb::new(255, 0, 0);
#[allow(dead_code)]
pub const BLUE: Rgb = Rgb::new(0, 0, 255);
#[allow(dead_code)]
pub const GREEN: Rgb = Rgb::new(0, 255, 0);

#[allow(dead_code)]
pub const FRAME: Option<f64> = Some(1.0 / 60.0);

#[allow(dead_code)]
pub struct SystemBuilder {
    config: AppConfig,
    agents: Vec<AgentKind>,
}

#[allow(dead_code)]
impl SystemBuilder {
    /// Empty canvas: no structures, no agents, fixed seed.
    pub fn new() -> Self {
        let config = AppConfig {
            structures: Vec::new(),
            seed: Some(42),
            ..Default::default()
        };
        Self {
            config,
            agents: Vec::new(),
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.config.seed = Some(seed);
        self
    }

    pub fn with_structure(mut self, x: f64, y: f64, radius: f64, color: Rgb) -> Self {
        let id = self.config.structures.len() as u32;
        self.config
            .structures
            .push(StructureConfig::new(id, x, y, radius, color));
        self
    }

    pub fn with_agent(mut self, kind: AgentKind) -> Self {
        self.agents.push(kind);
        self
    }

    pub fn with_config<F>(mut self, modifier: F) -> Self
    where
        F: FnOnce(&mut AppConfig),
    {
        modifier(&mut self.config);
        self
    }

    pub fn build(self) -> PollinationSystem {
        let mut system = PollinationSystem::without_agents(self.config);
        for kind in self.agents {
            system.add_autonomous_agent(kind);
        }
        system
    }
}

#[allow(dead_code)]
pub fn visitor(id: u32, x: f64, y: f64) -> VisitorPosition {
    VisitorPosition::new(id, x, y)
}
