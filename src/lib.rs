pub mod components;
pub mod config;
pub mod physics;
pub mod plugins;
pub mod resources;
pub mod systems;

mod simulation;

pub use components::SurfaceTag;
pub use config::{ConfigError, SimConfig};
pub use physics::{KinematicBody, PhysicsBody};
pub use plugins::SimulationPlugin;
pub use resources::{ControlSymbol, GamePhase, PhaseChanged};
pub use simulation::Simulation;
