use bevy::prelude::*;
use nalgebra::Vector3;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;
use std::fs;
use std::path::Path;

use super::error::{ConfigError, Result};

/// Top-level simulation configuration.
///
/// Defaults carry the tuned values for the stock scene. All of them are
/// design knobs; only the relationships checked in [`SimConfig::validate`]
/// are contracts.
#[derive(Resource, Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    pub flight: FlightConfig,
    pub capture: CaptureZoneConfig,
    pub wind: WindConfig,
    pub episode: EpisodeConfig,
    pub scene: SceneConfig,
    /// Seed for the episode RNG; `None` draws from entropy
    pub seed: Option<u64>,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            flight: FlightConfig::default(),
            capture: CaptureZoneConfig::default(),
            wind: WindConfig::default(),
            episode: EpisodeConfig::default(),
            scene: SceneConfig::default(),
            seed: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FlightConfig {
    /// Effective gravity magnitude pulling the booster down [N]
    pub gravity_magnitude: f64,
    /// Upward thrust as a multiple of gravity; > 1.0 means the booster can climb
    pub thrust_factor: f64,
    /// Lateral maneuvering force per held direction symbol [N]
    pub maneuver_force: f64,
    /// Scale applied to the episode wind bias before adding it to the net force
    pub wind_force_scale: f64,
    /// Upper clamp on the tick delta time [s]
    pub max_tick_dt: f64,
    /// Cosmetic tilt target when a lateral symbol is held [rad]
    pub tilt_angle: f64,
    /// Cosmetic tilt smoothing rate [1/s]
    pub tilt_rate: f64,
    /// Exhaust plume fade-out rate while not thrusting [1/s]
    pub plume_fade_rate: f64,
}

impl Default for FlightConfig {
    fn default() -> Self {
        Self {
            gravity_magnitude: 9.81 * 0.8 * 1.5,
            thrust_factor: 1.41,
            maneuver_force: 6.0,
            wind_force_scale: 5.0,
            max_tick_dt: 0.05,
            tilt_angle: PI / 22.0,
            tilt_rate: 0.45,
            plume_fade_rate: 0.8,
        }
    }
}

impl FlightConfig {
    /// Total upward force while the thrust symbol is held [N]
    pub fn thrust_force(&self) -> f64 {
        self.gravity_magnitude * self.thrust_factor
    }
}

/// The axis-aligned volume the booster center must occupy continuously to be
/// caught. Static for the process lifetime.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CaptureZoneConfig {
    /// Zone center in the horizontal plane [m]
    pub center_x: f64,
    pub center_z: f64,
    /// Horizontal half-extents [m]
    pub half_width: f64,
    pub half_depth: f64,
    /// Vertical band the booster center must stay within [m]
    pub min_y: f64,
    pub max_y: f64,
    /// Continuous occupancy required for a successful catch [s]
    pub required_dwell: f64,
    /// Pose the booster is frozen at once caught
    pub snap_position: Vector3<f64>,
}

impl Default for CaptureZoneConfig {
    fn default() -> Self {
        Self {
            center_x: -2.0,
            center_z: 0.0,
            half_width: 0.5,
            half_depth: 0.5,
            min_y: -9.0,
            max_y: -2.8,
            required_dwell: 0.69,
            snap_position: Vector3::new(-2.0, -6.61, 0.0),
        }
    }
}

impl CaptureZoneConfig {
    /// Whether `position` satisfies all three zone conditions at once.
    pub fn contains(&self, position: &Vector3<f64>) -> bool {
        position.y >= self.min_y
            && position.y <= self.max_y
            && (position.x - self.center_x).abs() <= self.half_width
            && (position.z - self.center_z).abs() <= self.half_depth
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WindConfig {
    /// Upper bound (exclusive) on the per-episode wind bias magnitude
    pub max_strength: f64,
}

impl Default for WindConfig {
    fn default() -> Self {
        Self {
            max_strength: 0.001,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EpisodeConfig {
    /// Spawn altitude of the booster center [m]
    pub start_height: f64,
    /// Spawn XZ positions are drawn uniformly from [-range, range] [m]
    pub start_range: f64,
    /// Delay between the reset teleport and play resuming [s]
    pub settle_delay: f64,
    /// Falling below this Y ends the episode ("lost in space") [m]
    pub scene_bottom: f64,
}

impl Default for EpisodeConfig {
    fn default() -> Self {
        Self {
            start_height: 31.0,
            start_range: 8.0,
            settle_delay: 0.05,
            scene_bottom: -25.0,
        }
    }
}

impl EpisodeConfig {
    /// Draw a fresh spawn position for the start of an episode.
    pub fn sample_start(&self, rng: &mut impl Rng) -> Vector3<f64> {
        let x = rng.gen_range(-self.start_range..self.start_range);
        let z = rng.gen_range(-self.start_range..self.start_range);
        Vector3::new(x, self.start_height, z)
    }
}

/// Dimensions of the fixed scene geometry. The capture zone and snap position
/// defaults were derived from these; hosts use them to place their colliders.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    pub platform_center_x: f64,
    pub platform_center_z: f64,
    pub platform_width: f64,
    pub platform_depth: f64,
    pub platform_height: f64,
    /// Y of the floor slab center [m]
    pub floor_y: f64,
    pub floor_height: f64,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            platform_center_x: 0.0,
            platform_center_z: 0.0,
            platform_width: 1.0,
            platform_depth: 1.0,
            platform_height: 14.5,
            floor_y: -16.5,
            floor_height: 0.5,
        }
    }
}

impl SceneConfig {
    /// Y of the top surface of the catch tower [m]
    pub fn platform_top_y(&self) -> f64 {
        self.floor_y + self.platform_height
    }

    /// Y of the top surface of the floor slab [m]
    pub fn floor_top_y(&self) -> f64 {
        self.floor_y + self.floor_height / 2.0
    }
}

impl SimConfig {
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    pub fn validate(&self) -> Result<()> {
        if self.capture.min_y >= self.capture.max_y {
            return Err(ConfigError::Invalid(format!(
                "capture zone band is inverted: min_y ({}) >= max_y ({})",
                self.capture.min_y, self.capture.max_y
            )));
        }
        if self.capture.half_width <= 0.0 || self.capture.half_depth <= 0.0 {
            return Err(ConfigError::Invalid(
                "capture zone half extents must be positive".to_string(),
            ));
        }
        if self.capture.required_dwell <= 0.0 {
            return Err(ConfigError::Invalid(
                "required dwell time must be positive".to_string(),
            ));
        }
        if self.flight.max_tick_dt <= 0.0 {
            return Err(ConfigError::Invalid(
                "max tick dt must be positive".to_string(),
            ));
        }
        if self.flight.gravity_magnitude <= 0.0 || self.flight.maneuver_force < 0.0 {
            return Err(ConfigError::Invalid(
                "gravity must be positive and maneuver force non-negative".to_string(),
            ));
        }
        if self.wind.max_strength < 0.0 {
            return Err(ConfigError::Invalid(
                "wind max strength must be non-negative".to_string(),
            ));
        }
        if self.episode.settle_delay < 0.0 {
            return Err(ConfigError::Invalid(
                "settle delay must be non-negative".to_string(),
            ));
        }
        if self.episode.start_height <= self.capture.max_y {
            return Err(ConfigError::Invalid(
                "start height must lie above the capture zone".to_string(),
            ));
        }
        if self.episode.scene_bottom >= self.capture.min_y {
            return Err(ConfigError::Invalid(
                "scene bottom must lie below the capture zone".to_string(),
            ));
        }
        if self.capture.min_y < self.scene.floor_top_y() {
            return Err(ConfigError::Invalid(
                "capture zone must sit above the floor".to_string(),
            ));
        }
        Ok(())
    }
}
