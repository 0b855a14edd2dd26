//! Bioluminescent auras.
//!
//! A pollinator carries at most one color. Touching a structure replaces it
//! outright and resets intensity to full; it then fades exponentially and is
//! dropped once it gets too faint.

use crate::config::AuraConfig;
use biotelia_data::{AuraRender, Rgb, VisitorId};

/// Frame rate the decay rate is expressed against.
const REFERENCE_FPS: f64 = 60.0;

/// A single carried color with its decaying intensity.
///
/// Invariant: `intensity == 0.0` exactly when `color` is `None`.
#[derive(Debug, Clone, PartialEq)]
pub struct CarriedColor {
    color: Option<Rgb>,
    intensity: f64,
    collected_at: f64,
    decay_rate: f64,
    min_intensity: f64,
}

impl CarriedColor {
    #[must_use]
    pub fn new(decay_rate: f64, min_intensity: f64) -> Self {
        Self {
            color: None,
            intensity: 0.0,
            collected_at: 0.0,
            decay_rate,
            min_intensity,
        }
    }

    /// Replaces whatever was carried. No blending.
    pub fn collect(&mut self, color: Rgb, now: f64) {
        self.color = Some(color);
        self.intensity = 1.0;
        self.collected_at = now;
    }

    pub fn decay(&mut self, dt: f64) {
        if self.intensity <= 0.0 {
            return;
        }
        self.intensity *= self.decay_rate.powf(dt * REFERENCE_FPS);
        if self.intensity < self.min_intensity {
            self.intensity = 0.0;
            self.color = None;
        }
    }

    #[must_use]
    pub fn has_color(&self) -> bool {
        self.color.is_some() && self.intensity > 0.0
    }

    /// The carried color, only while it is still visible.
    #[must_use]
    pub fn color(&self) -> Option<Rgb> {
        self.color.filter(|_| self.intensity > 0.0)
    }

    #[must_use]
    pub fn intensity(&self) -> f64 {
        self.intensity
    }

    #[must_use]
    pub fn collected_at(&self) -> f64 {
        self.collected_at
    }

    /// Gentle ±10% pulse, phased from the moment of collection.
    #[must_use]
    pub fn pulse(&self, now: f64) -> f64 {
        1.0 + ((now - self.collected_at) * 2.0).sin() * 0.1
    }
}

/// The glow around one tracked visitor.
#[derive(Debug, Clone, PartialEq)]
pub struct VisitorAura {
    pub person_id: VisitorId,
    pub glow_radius: f64,
    carried: CarriedColor,
}

impl VisitorAura {
    #[must_use]
    pub fn new(person_id: VisitorId, config: &AuraConfig) -> Self {
        Self {
            person_id,
            glow_radius: config.glow_radius,
            carried: CarriedColor::new(config.decay_rate, config.min_intensity),
        }
    }

    pub fn collect_color(&mut self, color: Rgb, now: f64) {
        self.carried.collect(color, now);
    }

    pub fn update(&mut self, dt: f64) {
        self.carried.decay(dt);
    }

    #[must_use]
    pub fn has_color(&self) -> bool {
        self.carried.has_color()
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
    pub fn collected_at(&self) -> f64 {
        self.carried.collected_at()
    }

    /// `None` when no color is carried.
    #[must_use]
    pub fn render(&self, x: f64, y: f64, now: f64) -> Option<AuraRender> {
        let color = self.carried.color()?;
        Some(AuraRender {
            x,
            y,
            color,
            intensity: self.carried.intensity(),
            glow_radius: self.glow_radius,
            pulse: self.carried.pulse(now),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED: Rgb = Rgb::new(255, 0, 0);
    const BLUE: Rgb = Rgb::new(0, 0, 255);

    fn aura() -> VisitorAura {
        VisitorAura::new(1, &AuraConfig::default())
    }

    #[test]
    fn test_new_aura_is_dark() {
        let a = aura();
        assert!(!a.has_color());
        assert_eq!(a.intensity(), 0.0);
        assert!(a.render(0.0, 0.0, 0.0).is_none());
    }

    #[test]
    fn test_collect_replaces_color() {
        let mut a = aura();
        a.collect_color(RED, 1.0);
        a.update(5.0);
        assert!(a.intensity() < 1.0);

        a.collect_color(BLUE, 6.0);
        assert_eq!(a.color(), Some(BLUE));
        assert_eq!(a.intensity(), 1.0);
        assert_eq!(a.collected_at(), 6.0);
    }

    #[test]
    fn test_decay_is_frame_rate_normalized() {
        let mut one_step = aura();
        let mut many_steps = aura();
        one_step.collect_color(RED, 0.0);
        many_steps.collect_color(RED, 0.0);

        one_step.update(1.0);
        for _ in 0..60 {
            many_steps.update(1.0 / 60.0);
        }
        assert!((one_step.intensity() - 0.998f64.powi(60)).abs() < 1e-12);
        assert!((one_step.intensity() - many_steps.intensity()).abs() < 1e-9);
    }

    #[test]
    fn test_color_clears_below_threshold() {
        let mut a = aura();
        a.collect_color(RED, 0.0);
        // 0.998^(60 t) < 0.05 once t > ~24.9 s
        let mut t = 0.0;
        while a.has_color() {
            let before = a.intensity();
            a.update(0.5);
            assert!(a.intensity() <= before);
            t += 0.5;
            assert!(t < 60.0, "aura never faded");
        }
        assert_eq!(a.intensity(), 0.0);
        assert_eq!(a.color(), None);
        assert!(t > 24.0);
    }

    #[test]
    fn test_render_pulse_phase() {
        let mut a = aura();
        a.collect_color(RED, 10.0);
        let r = a.render(5.0, 6.0, 10.0).unwrap();
        assert_eq!(r.pulse, 1.0);
        assert_eq!(r.glow_radius, 18.0);
        assert_eq!((r.x, r.y), (5.0, 6.0));
    }
}
