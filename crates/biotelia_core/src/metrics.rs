//! Simulation counters and structured logging setup.

use std::time::Duration;
use tracing_subscriber::EnvFilter;

/// Frames between periodic summary log lines (ten seconds at 60 fps).
const SUMMARY_INTERVAL: u64 = 600;

/// Running counters for one simulation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Metrics {
    frames: u64,
    visitor_dances: u64,
    agent_dances: u64,
    visitors_joined: u64,
    visitors_left: u64,
}

impl Metrics {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a completed frame and logs a summary every few hundred frames.
    pub fn record_frame(&mut self, duration: Duration, visitors: usize, dances: usize) {
        self.frames += 1;
        if self.frames.is_multiple_of(SUMMARY_INTERVAL) {
            tracing::info!(
                frame = self.frames,
                visitors = visitors,
                active_dances = dances,
                total_dances = self.total_dances(),
                duration_us = duration.as_micros() as u64,
                "Simulation frame"
            );
        }
    }

    pub fn record_visitor_dance(&mut self) {
        self.visitor_dances += 1;
    }

    pub fn record_agent_dance(&mut self) {
        self.agent_dances += 1;
    }

    pub fn record_visitor_joined(&mut self) {
        self.visitors_joined += 1;
    }

    pub fn record_visitors_left(&mut self, count: usize) {
        self.visitors_left += count as u64;
    }

    #[must_use]
    pub fn frames(&self) -> u64 {
        self.frames
    }

    #[must_use]
    pub fn visitor_dances(&self) -> u64 {
        self.visitor_dances
    }

    #[must_use]
    pub fn agent_dances(&self) -> u64 {
        self.agent_dances
    }

    #[must_use]
    pub fn total_dances(&self) -> u64 {
        self.visitor_dances + self.agent_dances
    }

    #[must_use]
    pub fn visitors_joined(&self) -> u64 {
        self.visitors_joined
    }

    #[must_use]
    pub fn visitors_left(&self) -> u64 {
        self.visitors_left
    }
}

/// Initialize tracing subscriber for logging.
///
/// Honors `RUST_LOG`; defaults to `info`.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing::subscriber::set_global_default(
        tracing_subscriber::FmtSubscriber::builder()
            .with_env_filter(filter)
            .finish(),
    )
    .ok();
}
