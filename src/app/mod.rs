pub mod input;

pub use input::VisitorSimulator;

use anyhow::{Context, Result};
use biotelia_core::config::AppConfig;
use biotelia_core::PollinationSystem;
use biotelia_io::FrameRecorder;
use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

/// How a headless run is driven.
#[derive(Debug, Clone)]
pub struct RunOptions {
    /// Stop after this many frames; run until stopped when `None`.
    pub frames: Option<u64>,
    /// Number of simulated visitors.
    pub visitors: usize,
    /// Write every snapshot as a JSON line to this file.
    pub record: Option<PathBuf>,
    /// Pace frames to `target_fps` and take timesteps from the wall clock.
    pub realtime: bool,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            frames: Some(600),
            visitors: 4,
            record: None,
            realtime: false,
        }
    }
}

/// What a finished run did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub frames: u64,
    pub visitor_dances: u64,
    pub agent_dances: u64,
}

pub struct App {
    pub system: PollinationSystem,
    pub input: VisitorSimulator,
    pub running: bool,
    recorder: Option<FrameRecorder<BufWriter<File>>>,
    options: RunOptions,
    frame_dt: f64,
}

impl App {
    /// Loads `path`, falling back to defaults when the file is unusable.
    pub fn load_config(path: impl AsRef<Path>) -> AppConfig {
        let path = path.as_ref();
        match biotelia_io::load_config(path) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "Falling back to default config");
                AppConfig::default()
            }
        }
    }

    pub fn new(config: AppConfig, options: RunOptions) -> Result<Self> {
        let input_seed = config.seed.unwrap_or(0).wrapping_add(0x5EED);
        let input = VisitorSimulator::new(
            config.canvas.width,
            config.canvas.height,
            options.visitors,
            input_seed,
        );
        let recorder = match &options.record {
            Some(path) => Some(
                FrameRecorder::create(path)
                    .with_context(|| format!("creating recording {}", path.display()))?,
            ),
            None => None,
        };
        let frame_dt = 1.0 / config.target_fps.max(1) as f64;

        Ok(Self {
            system: PollinationSystem::new(config),
            input,
            running: true,
            recorder,
            options,
            frame_dt,
        })
    }

    /// Steps the visitor source and the simulation by one frame.
    pub fn tick(&mut self) -> Result<()> {
        let dt = if self.options.realtime {
            None
        } else {
            Some(self.frame_dt)
        };
        self.input.step(self.frame_dt);
        let visitors = self.input.positions();
        let snapshot = self.system.update(&visitors, dt);

        if let Some(recorder) = &mut self.recorder {
            recorder.record(&snapshot).context("recording frame")?;
        }

        if let Some(limit) = self.options.frames {
            if self.system.metrics().frames() >= limit {
                self.running = false;
            }
        }
        Ok(())
    }

    pub fn run(&mut self) -> Result<RunSummary> {
        let frame_budget = Duration::from_secs_f64(self.frame_dt);
        while self.running {
            let started = Instant::now();
            self.tick()?;
            if self.options.realtime {
                if let Some(rest) = frame_budget.checked_sub(started.elapsed()) {
                    std::thread::sleep(rest);
                }
            }
        }

        if let Some(recorder) = &mut self.recorder {
            recorder.flush().context("flushing recording")?;
            tracing::info!(frames = recorder.frames(), "Recording written");
        }

        let metrics = self.system.metrics();
        Ok(RunSummary {
            frames: metrics.frames(),
            visitor_dances: metrics.visitor_dances(),
            agent_dances: metrics.agent_dances(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_stops_at_frame_limit() {
        let config = AppConfig {
            seed: Some(3),
            ..Default::default()
        };
        let options = RunOptions {
            frames: Some(120),
            ..Default::default()
        };
        let mut app = App::new(config, options).unwrap();
        let summary = app.run().unwrap();
        assert_eq!(summary.frames, 120);
        assert!(!app.running);
        assert!((app.system.time() - 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_recording_has_one_line_per_frame() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("run.jsonl");
        let options = RunOptions {
            frames: Some(30),
            record: Some(path.clone()),
            ..Default::default()
        };
        let config = AppConfig {
            seed: Some(4),
            ..Default::default()
        };
        App::new(config, options).unwrap().run().unwrap();
        let text = std::fs::read_to_string(path).unwrap();
        assert_eq!(text.lines().count(), 30);
    }
}
