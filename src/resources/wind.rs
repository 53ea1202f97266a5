use bevy::prelude::*;
use nalgebra::Vector3;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::f64::consts::TAU;

/// Per-episode wind bias in the horizontal plane.
///
/// Drawn once at episode start and constant for the episode's lifetime:
/// direction uniform over `[0, 2π)`, magnitude uniform over
/// `[0, max_strength)`. The Y component is always zero.
#[derive(Resource, Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct WindVector {
    pub bias: Vector3<f64>,
}

impl WindVector {
    pub fn generate(rng: &mut impl Rng, max_strength: f64) -> Self {
        let angle = rng.gen::<f64>() * TAU;
        let strength = rng.gen::<f64>() * max_strength;
        Self {
            bias: Vector3::new(angle.cos() * strength, 0.0, angle.sin() * strength),
        }
    }
}
