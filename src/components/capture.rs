use bevy::prelude::*;

/// Accumulated continuous occupancy of the capture zone.
///
/// Strict policy: the timer zeroes the instant any zone condition fails, and
/// on every transition out of the playing phase. Partial dwell never carries
/// over.
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct CaptureProgress {
    dwell: f64,
}

impl CaptureProgress {
    /// Seconds of continuous, fully-met zone occupancy
    pub fn dwell(&self) -> f64 {
        self.dwell
    }

    pub fn accumulate(&mut self, dt: f64) {
        self.dwell += dt;
    }

    pub fn clear(&mut self) {
        self.dwell = 0.0;
    }
}
