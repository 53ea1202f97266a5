use bevy::prelude::*;

use crate::components::{
    Booster, CaptureProgress, CollisionEvent, PhysicsHandle, PlumeComponent, TiltComponent,
};
use crate::config::SimConfig;
use crate::resources::{
    CrashEvent, EpisodeState, InputState, LandingEvent, PhaseChanged, ResetEvent, SimRng, SimTime,
    StatusMessage, WindVector,
};
use crate::systems::{
    apply_transitions_system, capture_zone_system, collision_crash_system, fall_out_system,
    flight_control_system, physics_step_system, settle_system,
};

/// Tick phases, chained in dependency order: forces are applied before the
/// body integrates, and the capture/crash checks run against the
/// just-updated pose before transitions are applied.
#[derive(Debug, Hash, PartialEq, Eq, Clone, SystemSet)]
pub enum SimulationSet {
    Flight,
    Integrate,
    Capture,
    CrashCheck,
    StateApply,
    Settle,
}

/// Wires the whole core: resources, events, the booster entity, and the
/// chained tick systems. Hosts embed this plugin, or use the
/// [`Simulation`](crate::Simulation) facade which owns the `App` for them.
pub struct SimulationPlugin {
    config: SimConfig,
}

impl SimulationPlugin {
    pub fn new(config: SimConfig) -> Self {
        Self { config }
    }
}

impl Default for SimulationPlugin {
    fn default() -> Self {
        Self::new(SimConfig::default())
    }
}

impl Plugin for SimulationPlugin {
    fn build(&self, app: &mut App) {
        let config = self.config.clone();

        // The initial wind draw happens here so the invariant "one wind
        // vector per episode" covers the very first episode too.
        let mut rng = SimRng::from_seed(config.seed);
        let wind = WindVector::generate(&mut rng.0, config.wind.max_strength);

        app.add_event::<CollisionEvent>()
            .add_event::<LandingEvent>()
            .add_event::<CrashEvent>()
            .add_event::<ResetEvent>()
            .add_event::<PhaseChanged>();

        app.insert_resource(SimTime::new(config.flight.max_tick_dt))
            .insert_resource(InputState::default())
            .insert_resource(StatusMessage::default())
            .insert_resource(EpisodeState::default())
            .insert_resource(wind)
            .insert_resource(rng)
            .insert_resource(config);

        app.configure_sets(
            Update,
            (
                SimulationSet::Flight,
                SimulationSet::Integrate,
                SimulationSet::Capture,
                SimulationSet::CrashCheck,
                SimulationSet::StateApply,
                SimulationSet::Settle,
            )
                .chain(),
        );

        app.add_systems(Startup, spawn_booster);
        app.add_systems(
            Update,
            (
                flight_control_system.in_set(SimulationSet::Flight),
                physics_step_system.in_set(SimulationSet::Integrate),
                capture_zone_system.in_set(SimulationSet::Capture),
                (collision_crash_system, fall_out_system).in_set(SimulationSet::CrashCheck),
                apply_transitions_system.in_set(SimulationSet::StateApply),
                settle_system.in_set(SimulationSet::Settle),
            ),
        );
    }
}

fn spawn_booster(mut commands: Commands) {
    commands.spawn((
        Booster,
        PhysicsHandle::default(),
        TiltComponent::default(),
        PlumeComponent::default(),
        CaptureProgress::default(),
    ));
}
