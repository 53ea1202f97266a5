mod error;
mod sim;

pub use error::{ConfigError, Result};
pub use sim::{
    CaptureZoneConfig, EpisodeConfig, FlightConfig, SceneConfig, SimConfig, WindConfig,
};
