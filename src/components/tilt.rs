use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Cosmetic lean of the booster model while maneuvering.
///
/// Purely visual: smoothed toward the input-derived target every tick and
/// never read by the force computation or written to the physics attitude.
/// Keeping it separate from the rigid-body rotation is what prevents
/// tilt-induced force drift.
#[derive(Component, Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct TiltComponent {
    /// Display pitch (lean along Z travel) [rad]
    pub pitch: f64,
    /// Display roll (lean along X travel) [rad]
    pub roll: f64,
}

impl TiltComponent {
    /// Exponentially smooth toward the target angles.
    ///
    /// The lerp factor is `dt * rate * 5`, clamped to 1 so a stalled frame
    /// cannot overshoot the target.
    pub fn update(&mut self, dt: f64, rate: f64, target_pitch: f64, target_roll: f64) {
        let factor = (dt * rate * 5.0).clamp(0.0, 1.0);
        self.pitch += (target_pitch - self.pitch) * factor;
        self.roll += (target_roll - self.roll) * factor;
    }

    pub fn clear(&mut self) {
        self.pitch = 0.0;
        self.roll = 0.0;
    }
}
