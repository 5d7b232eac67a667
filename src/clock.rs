//! Simulation clock
//!
//! The simulation never reads the wall clock. The host hands each frame's
//! delta-seconds to `advance`, and everything downstream (state durations,
//! relationship expiry) works off the accumulated time. Identical delta
//! sequences therefore produce identical runs.

use serde::{Deserialize, Serialize};

/// Accumulated simulation time plus per-frame delta
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Clock {
    now_seconds: f64,
    delta_seconds: f32,
    time_scale: f32,
    paused: bool,
    /// Incoming deltas above this are clamped (0 disables the clamp)
    max_delta_seconds: f32,
}

impl Default for Clock {
    fn default() -> Self {
        Self {
            now_seconds: 0.0,
            delta_seconds: 0.0,
            time_scale: 1.0,
            paused: false,
            max_delta_seconds: 0.0,
        }
    }
}

impl Clock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply pause, scale, and clamp to an incoming delta, then accumulate
    pub fn advance(&mut self, delta_seconds: f32) {
        let mut delta = if self.paused { 0.0 } else { delta_seconds * self.time_scale };
        if self.max_delta_seconds > 0.0 && delta > self.max_delta_seconds {
            delta = self.max_delta_seconds;
        }
        self.delta_seconds = delta;
        self.now_seconds += delta as f64;
    }

    /// Absolute simulation time in seconds
    pub fn now(&self) -> f64 {
        self.now_seconds
    }

    /// The delta applied by the most recent `advance`
    pub fn delta_seconds(&self) -> f32 {
        self.delta_seconds
    }

    pub fn time_scale(&self) -> f32 {
        self.time_scale
    }

    pub fn set_time_scale(&mut self, scale: f32) {
        self.time_scale = scale;
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn pause(&mut self) {
        self.paused = true;
    }

    pub fn unpause(&mut self) {
        self.paused = false;
    }

    pub fn set_max_delta_seconds(&mut self, max: f32) {
        self.max_delta_seconds = max;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_advance_accumulates() {
        let mut clock = Clock::new();
        clock.advance(0.016);
        clock.advance(0.016);
        assert!((clock.now() - 0.032).abs() < 1e-6);
        assert!((clock.delta_seconds() - 0.016).abs() < 1e-6);
    }

    #[test]
    fn test_paused_clock_holds_still() {
        let mut clock = Clock::new();
        clock.advance(0.5);
        clock.pause();
        clock.advance(0.5);
        assert_eq!(clock.delta_seconds(), 0.0);
        assert!((clock.now() - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_time_scale_and_clamp() {
        let mut clock = Clock::new();
        clock.set_time_scale(2.0);
        clock.advance(0.25);
        assert!((clock.now() - 0.5).abs() < 1e-6);

        clock.set_max_delta_seconds(0.1);
        clock.advance(1.0);
        assert!((clock.delta_seconds() - 0.1).abs() < 1e-6);
    }
}
