//! File adapters for the Biotelia simulation: configuration loading and
//! frame recording. The simulation core itself never touches the disk.

pub mod config_file;
pub mod error;
pub mod recorder;

pub use config_file::{load_config, save_config};
pub use error::{IoError, Result};
pub use recorder::FrameRecorder;
