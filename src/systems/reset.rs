use bevy::prelude::*;

use crate::resources::{EpisodeState, GamePhase, PhaseChanged, SimTime};

/// Second half of the two-phase reset: count down the settle delay and
/// resume play. This transition is time-driven, never player-triggered.
pub fn settle_system(
    time: Res<SimTime>,
    mut episode: ResMut<EpisodeState>,
    mut changes: EventWriter<PhaseChanged>,
) {
    if episode.phase() != GamePhase::Resetting {
        return;
    }

    episode.settle_remaining -= time.delta_seconds();
    if episode.settle_remaining <= 0.0 {
        episode.settle_remaining = 0.0;
        if let Some(change) = episode.set_phase(GamePhase::Playing) {
            info!("Settle delay elapsed, play resumed");
            changes.send(change);
        }
    }
}
