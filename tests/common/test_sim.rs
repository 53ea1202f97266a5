use nalgebra::Vector3;
use skycatch::{KinematicBody, SimConfig, Simulation};

use super::SharedBody;

/// Builder for a deterministic test simulation.
///
/// Seeds the RNG and disables wind by default so force assertions are exact;
/// individual tests opt back into wind where it matters.
pub struct TestSimBuilder {
    config: SimConfig,
}

impl Default for TestSimBuilder {
    fn default() -> Self {
        let mut config = SimConfig::default();
        config.seed = Some(42);
        config.wind.max_strength = 0.0;
        Self { config }
    }
}

impl TestSimBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.config.seed = Some(seed);
        self
    }

    pub fn with_wind(mut self, max_strength: f64) -> Self {
        self.config.wind.max_strength = max_strength;
        self
    }

    pub fn with_settle_delay(mut self, settle_delay: f64) -> Self {
        self.config.episode.settle_delay = settle_delay;
        self
    }

    pub fn with_required_dwell(mut self, required_dwell: f64) -> Self {
        self.config.capture.required_dwell = required_dwell;
        self
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    /// Simulation plus a shared mock body the test can reposition and
    /// inspect.
    pub fn build_with_shared_body(self) -> (Simulation, SharedBody) {
        let mut sim = Simulation::new(self.config).expect("test config must validate");
        let body = SharedBody::default();
        sim.attach_body(body.handle());
        (sim, body)
    }

    /// Simulation with the bundled integrating body, for end-to-end flight.
    pub fn build_with_kinematic_body(self) -> Simulation {
        let mut sim = Simulation::new(self.config).expect("test config must validate");
        sim.attach_body(Box::new(KinematicBody::default()));
        sim
    }

    /// Simulation with no body attached; every tick must be a no-op.
    pub fn build_detached(self) -> Simulation {
        Simulation::new(self.config).expect("test config must validate")
    }
}

/// Advance `sim` in fixed `dt` steps covering `seconds` of simulated time.
pub fn step_for(sim: &mut Simulation, seconds: f64, dt: f64) {
    let steps = (seconds / dt).round() as usize;
    for _ in 0..steps {
        sim.step(dt);
    }
}

/// A position satisfying all three capture-zone conditions of the default
/// config.
pub fn zone_center() -> Vector3<f64> {
    let zone = SimConfig::default().capture;
    Vector3::new(zone.center_x, (zone.min_y + zone.max_y) / 2.0, zone.center_z)
}
