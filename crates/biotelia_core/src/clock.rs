//! Simulation clock.
//!
//! The simulation owns its notion of time. Every pulse, wiggle and orbit
//! phase is a function of [`SimClock::time`], never of wall-clock reads, so a
//! run driven with explicit timesteps is fully reproducible.

use std::time::Instant;

#[derive(Debug, Clone)]
pub struct SimClock {
    time: f64,
    frame: u64,
    last_instant: Option<Instant>,
    fallback_dt: f64,
    max_dt: f64,
}

impl SimClock {
    /// `fallback_dt` is used for the first wall-clock driven frame, `max_dt`
    /// caps every wall-clock derived step.
    #[must_use]
    pub fn new(fallback_dt: f64, max_dt: f64) -> Self {
        Self {
            time: 0.0,
            frame: 0,
            last_instant: None,
            fallback_dt,
            max_dt,
        }
    }

    /// Advances the clock and returns the timestep actually applied.
    ///
    /// With `Some(dt)` the caller's timestep is used as is. With `None` the
    /// step is the wall-clock delta since the previous call, capped at
    /// `max_dt` so a stall does not produce one huge jump.
    pub fn advance(&mut self, dt: Option<f64>) -> f64 {
        let now = Instant::now();
        let dt = match dt {
            Some(dt) => dt.max(0.0),
            None => match self.last_instant {
                Some(prev) => now.duration_since(prev).as_secs_f64().min(self.max_dt),
                None => self.fallback_dt.min(self.max_dt),
            },
        };
        self.last_instant = Some(now);
        self.time += dt;
        self.frame += 1;
        dt
    }

    #[must_use]
    pub fn time(&self) -> f64 {
        self.time
    }

    #[must_use]
    pub fn frame(&self) -> u64 {
        self.frame
    }
}
