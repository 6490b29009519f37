use crate::config::PulseConfig;
use crate::easing::ease_out_quad;

/// One-shot alpha dip on a won wedge: waits `delay`, fades to `min_alpha`
/// over `duration`, then plays back to full alpha once.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pulse {
    index: usize,
    elapsed: f64,
    config: PulseConfig,
}

impl Pulse {
    pub fn new(index: usize, config: PulseConfig) -> Self {
        Self {
            index,
            elapsed: 0.0,
            config,
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn advance(&mut self, dt: f64) -> f64 {
        self.elapsed += dt.max(0.0);
        self.alpha()
    }

    pub fn alpha(&self) -> f64 {
        let PulseConfig { delay, duration, min_alpha } = self.config;
        let t = self.elapsed - delay;
        if t <= 0.0 || t >= 2.0 * duration {
            return 1.0;
        }

        // Yoyo: the return leg replays the fade backwards.
        let leg = if t < duration { t / duration } else { 2.0 - t / duration };
        1.0 - (1.0 - min_alpha) * ease_out_quad(leg)
    }

    pub fn is_finished(&self) -> bool {
        self.elapsed >= self.config.delay + 2.0 * self.config.duration
    }
}
