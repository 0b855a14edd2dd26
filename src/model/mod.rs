pub use biotelia_core::{AgentKind, AppConfig, PollinationSystem};
pub mod agent {
    pub use biotelia_core::agent::*;
}
pub mod aura {
    pub use biotelia_core::aura::*;
}
pub mod clock {
    pub use biotelia_core::clock::*;
}
pub mod config {
    pub use biotelia_core::config::*;
}
pub mod dance {
    pub use biotelia_core::dance::*;
}
pub mod metrics {
    pub use biotelia_core::metrics::*;
}
pub mod mycelium {
    pub use biotelia_core::mycelium::*;
}
pub mod structure {
    pub use biotelia_core::structure::*;
}
pub mod system {
    pub use biotelia_core::system::*;
}
pub mod trail {
    pub use biotelia_core::trail::*;
}
pub mod state {
    pub use biotelia_data::*;
}
