use bevy::prelude::*;

use crate::components::{Booster, PhysicsHandle};
use crate::resources::SimTime;

/// Advance internally-simulated bodies once the tick's forces are in.
///
/// Bodies backed by an external engine ignore the call; the capture and
/// crash checks that follow then run against the engine's latest pose.
pub fn physics_step_system(
    time: Res<SimTime>,
    mut query: Query<&mut PhysicsHandle, With<Booster>>,
) {
    let dt = time.delta_seconds();
    for mut handle in query.iter_mut() {
        if let Some(body) = handle.body_mut() {
            body.step(dt);
        }
    }
}
