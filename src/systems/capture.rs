use bevy::prelude::*;

use crate::components::{Booster, CaptureProgress, PhysicsHandle};
use crate::config::SimConfig;
use crate::resources::{EpisodeState, LandingEvent, SimTime, SnapPose, StatusMessage};

/// Dwell-time protocol for the capture volume.
///
/// All three zone conditions (vertical band, X extent, Z extent) must hold at
/// once for dwell to accumulate; the instant any one fails the timer zeroes.
/// Intermittent occupancy never adds up — this is a strict reset, not a leaky
/// counter. Reaching the threshold emits the landing signal together with the
/// snap pose the state machine freezes the booster at.
pub fn capture_zone_system(
    config: Res<SimConfig>,
    time: Res<SimTime>,
    episode: Res<EpisodeState>,
    mut status: ResMut<StatusMessage>,
    mut query: Query<(&PhysicsHandle, &mut CaptureProgress), With<Booster>>,
    mut landings: EventWriter<LandingEvent>,
) {
    if !episode.is_playing() {
        return;
    }
    let zone = &config.capture;

    for (handle, mut progress) in query.iter_mut() {
        let Some(body) = handle.body() else {
            continue;
        };

        if zone.contains(&body.position()) {
            progress.accumulate(time.delta_seconds());
            status.set(format!(
                "In capture zone... {:.1} / {:.1}s",
                progress.dwell(),
                zone.required_dwell
            ));

            if progress.dwell() >= zone.required_dwell {
                info!(
                    "Capture complete after {:.2}s of continuous dwell",
                    progress.dwell()
                );
                landings.send(LandingEvent {
                    snap: SnapPose::upright_at(zone.snap_position),
                });
            }
        } else if progress.dwell() > 0.0 {
            progress.clear();
            status.clear();
        }
    }
}
