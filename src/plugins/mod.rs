mod simulation;

pub use simulation::{SimulationPlugin, SimulationSet};
