use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Exhaust plume intensity in `[0, 1]`, for the host's particle effect.
///
/// Snaps to full brightness while thrusting, fades out otherwise. Cosmetic
/// only.
#[derive(Component, Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct PlumeComponent {
    intensity: f64,
}

impl PlumeComponent {
    pub fn intensity(&self) -> f64 {
        self.intensity
    }

    pub fn is_visible(&self) -> bool {
        self.intensity > 0.01
    }

    pub fn ignite(&mut self) {
        self.intensity = 1.0;
    }

    pub fn fade(&mut self, dt: f64, rate: f64) {
        self.intensity = (self.intensity - dt * rate).max(0.0);
    }

    pub fn extinguish(&mut self) {
        self.intensity = 0.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ignites_instantly_and_fades_gradually() {
        let mut plume = PlumeComponent::default();
        plume.ignite();
        assert_eq!(plume.intensity(), 1.0);
        assert!(plume.is_visible());

        plume.fade(0.5, 0.8);
        assert!(plume.intensity() > 0.0 && plume.intensity() < 1.0);

        plume.fade(10.0, 0.8);
        assert_eq!(plume.intensity(), 0.0);
        assert!(!plume.is_visible());
    }
}
