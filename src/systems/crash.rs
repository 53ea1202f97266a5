use bevy::prelude::*;

use crate::components::{Booster, CollisionEvent, PhysicsHandle};
use crate::config::SimConfig;
use crate::resources::{CrashEvent, CrashReason, EpisodeState};

/// Turn hazard contacts into crash signals, but only mid-episode.
///
/// Collisions arriving while landed, crashed or resetting are consumed and
/// ignored: a caught booster cannot retroactively crash, and the reset
/// teleport may brush stale contacts.
pub fn collision_crash_system(
    episode: Res<EpisodeState>,
    mut collisions: EventReader<CollisionEvent>,
    mut crashes: EventWriter<CrashEvent>,
) {
    for collision in collisions.read() {
        if !episode.is_playing() || !collision.surface.is_hazard() {
            continue;
        }
        debug!("Hazard contact with {}", collision.surface);
        crashes.send(CrashEvent {
            reason: CrashReason::Impact(collision.surface),
        });
    }
}

/// "Lost in space" check: falling below the scene's lower bound crashes the
/// episode. Fires at most once per descent because the state machine leaves
/// `Playing` on the same tick.
pub fn fall_out_system(
    config: Res<SimConfig>,
    episode: Res<EpisodeState>,
    query: Query<&PhysicsHandle, With<Booster>>,
    mut crashes: EventWriter<CrashEvent>,
) {
    if !episode.is_playing() {
        return;
    }

    for handle in query.iter() {
        let Some(body) = handle.body() else {
            continue;
        };
        if body.position().y < config.episode.scene_bottom {
            debug!("Booster fell below {}", config.episode.scene_bottom);
            crashes.send(CrashEvent {
                reason: CrashReason::OutOfBounds,
            });
        }
    }
}
