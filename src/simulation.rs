use bevy::prelude::*;
use nalgebra::Vector3;

use crate::components::{Booster, CaptureProgress, CollisionEvent, PhysicsHandle, PlumeComponent, SurfaceTag, TiltComponent};
use crate::config::{ConfigError, SimConfig};
use crate::physics::PhysicsBody;
use crate::plugins::SimulationPlugin;
use crate::resources::{
    ControlSymbol, EpisodeState, GamePhase, InputState, PhaseChanged, ResetEvent, SimRng, SimTime,
    StatusMessage, WindVector,
};

/// Host-facing facade over the simulation `App`.
///
/// Owns every piece of mutable simulation state and advances it through one
/// entry point, [`step`](Self::step). Key events, the collision feed, and
/// reset requests come in through the methods below; outcomes go out as
/// drained [`PhaseChanged`] notifications and the status line. All methods
/// are expected on the tick thread.
pub struct Simulation {
    app: App,
}

impl Simulation {
    /// Validate `config` and build the simulation, running one zero-delta
    /// update so the booster entity exists before the host attaches a body.
    pub fn new(config: SimConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let mut app = App::new();
        app.add_plugins(SimulationPlugin::new(config));
        app.finish();
        app.cleanup();
        app.update();
        Ok(Self { app })
    }

    /// Advance the simulation by `dt` seconds of host frame time. The delta
    /// is clamped before any system sees it.
    pub fn step(&mut self, dt: f64) {
        self.app
            .world_mut()
            .resource_mut::<SimTime>()
            .advance(dt);
        self.app.update();
    }

    /// Hand the host's rigid body to the simulation and place it at a fresh
    /// spawn position.
    pub fn attach_body(&mut self, mut body: Box<dyn PhysicsBody>) {
        let world = self.app.world_mut();
        let start = {
            let episode = world.resource::<SimConfig>().episode.clone();
            let mut rng = world.resource_mut::<SimRng>();
            episode.sample_start(&mut rng.0)
        };
        body.set_pose(start, nalgebra::UnitQuaternion::identity());
        body.zero_velocity();

        let mut query = world.query_filtered::<&mut PhysicsHandle, With<Booster>>();
        if let Ok(mut handle) = query.get_single_mut(world) {
            handle.attach(body);
        } else {
            warn!("No booster entity to attach the physics body to");
        }
    }

    // --- Inbound: key events, reset, collision feed ---

    pub fn press(&mut self, symbol: ControlSymbol) {
        self.app
            .world_mut()
            .resource_mut::<InputState>()
            .press(symbol);
    }

    pub fn release(&mut self, symbol: ControlSymbol) {
        self.app
            .world_mut()
            .resource_mut::<InputState>()
            .release(symbol);
    }

    pub fn request_reset(&mut self) {
        self.app.world_mut().send_event(ResetEvent);
    }

    /// Inject one collision-start event from the host's collision feed.
    pub fn inject_collision(&mut self, surface: SurfaceTag) {
        self.app.world_mut().send_event(CollisionEvent { surface });
    }

    // --- Outbound: state, notifications, display values ---

    pub fn phase(&self) -> GamePhase {
        self.app.world().resource::<EpisodeState>().phase()
    }

    pub fn is_landed(&self) -> bool {
        self.app.world().resource::<EpisodeState>().is_landed()
    }

    pub fn is_crashed(&self) -> bool {
        self.app.world().resource::<EpisodeState>().is_crashed()
    }

    pub fn status(&self) -> String {
        self.app
            .world()
            .resource::<StatusMessage>()
            .as_str()
            .to_string()
    }

    pub fn wind(&self) -> Vector3<f64> {
        self.app.world().resource::<WindVector>().bias
    }

    /// Transitions that occurred since the last drain, in order.
    pub fn drain_transitions(&mut self) -> Vec<PhaseChanged> {
        self.app
            .world_mut()
            .resource_mut::<Events<PhaseChanged>>()
            .drain()
            .collect()
    }

    /// Seconds of continuous capture-zone occupancy so far.
    pub fn dwell(&mut self) -> f64 {
        let world = self.app.world_mut();
        let mut query = world.query_filtered::<&CaptureProgress, With<Booster>>();
        query
            .get_single(world)
            .map(|progress| progress.dwell())
            .unwrap_or(0.0)
    }

    /// Cosmetic display tilt as `(pitch, roll)` radians.
    pub fn tilt(&mut self) -> (f64, f64) {
        let world = self.app.world_mut();
        let mut query = world.query_filtered::<&TiltComponent, With<Booster>>();
        query
            .get_single(world)
            .map(|tilt| (tilt.pitch, tilt.roll))
            .unwrap_or((0.0, 0.0))
    }

    /// Exhaust plume intensity in `[0, 1]`.
    pub fn plume_intensity(&mut self) -> f64 {
        let world = self.app.world_mut();
        let mut query = world.query_filtered::<&PlumeComponent, With<Booster>>();
        query
            .get_single(world)
            .map(|plume| plume.intensity())
            .unwrap_or(0.0)
    }

    /// Current body position, if a body is attached.
    pub fn body_position(&mut self) -> Option<Vector3<f64>> {
        self.with_body(|body| body.position())
    }

    /// Current body linear velocity, if a body is attached.
    pub fn body_velocity(&mut self) -> Option<Vector3<f64>> {
        self.with_body(|body| body.velocity())
    }

    /// Run `f` against the attached body, if any.
    pub fn with_body<R>(&mut self, f: impl FnOnce(&dyn PhysicsBody) -> R) -> Option<R> {
        let world = self.app.world_mut();
        let mut query = world.query_filtered::<&PhysicsHandle, With<Booster>>();
        query
            .get_single(world)
            .ok()
            .and_then(|handle| handle.body().map(f))
    }

    /// Direct world access for hosts that embed deeper than the facade.
    pub fn world_mut(&mut self) -> &mut World {
        self.app.world_mut()
    }
}
