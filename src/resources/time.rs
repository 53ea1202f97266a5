use bevy::prelude::*;

/// Host-driven tick clock.
///
/// The host hands in a wall-clock delta each frame; it is clamped before any
/// system sees it, so a stalled frame cannot spike forces or dwell
/// accumulation.
#[derive(Resource, Debug, Clone)]
pub struct SimTime {
    delta: f64,
    elapsed: f64,
    frame_count: u64,
    max_delta: f64,
}

impl SimTime {
    pub fn new(max_delta: f64) -> Self {
        Self {
            delta: 0.0,
            elapsed: 0.0,
            frame_count: 0,
            max_delta,
        }
    }

    /// Record the next tick's delta, clamped to `[0, max_delta]`.
    pub fn advance(&mut self, dt: f64) {
        self.delta = dt.clamp(0.0, self.max_delta);
        self.elapsed += self.delta;
        self.frame_count += 1;
    }

    pub fn delta_seconds(&self) -> f64 {
        self.delta
    }

    pub fn elapsed_seconds(&self) -> f64 {
        self.elapsed
    }

    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stalled_frames_are_clamped() {
        let mut time = SimTime::new(0.05);
        time.advance(0.5);
        assert_eq!(time.delta_seconds(), 0.05);
        assert_eq!(time.elapsed_seconds(), 0.05);
    }

    #[test]
    fn negative_deltas_are_rejected() {
        let mut time = SimTime::new(0.05);
        time.advance(-1.0);
        assert_eq!(time.delta_seconds(), 0.0);
    }

    #[test]
    fn elapsed_accumulates_clamped_deltas() {
        let mut time = SimTime::new(0.05);
        for _ in 0..10 {
            time.advance(0.016);
        }
        assert!((time.elapsed_seconds() - 0.16).abs() < 1e-12);
        assert_eq!(time.frame_count(), 10);
    }
}
