use bevy::prelude::*;
use nalgebra::UnitQuaternion;

use crate::components::{Booster, CaptureProgress, PhysicsHandle, PlumeComponent, TiltComponent};
use crate::config::SimConfig;
use crate::resources::{
    CrashEvent, CrashReason, EpisodeState, GamePhase, LandingEvent, PhaseChanged, ResetEvent,
    SimRng, StatusMessage, WindVector,
};

type BoosterQuery<'w, 's> = Query<
    'w,
    's,
    (
        &'static mut PhysicsHandle,
        &'static mut CaptureProgress,
        &'static mut TiltComponent,
        &'static mut PlumeComponent,
    ),
    With<Booster>,
>;

/// The single writer of [`EpisodeState`]. Collects this tick's landing,
/// crash, and reset signals, applies the transition rules, and performs the
/// entry side effects.
///
/// Precedence within one tick: an explicit reset wins over everything, then
/// landing, then crash. Once landed, collision signals no longer matter, so
/// `Landed -> Crashed` is unreachable by construction.
pub fn apply_transitions_system(
    config: Res<SimConfig>,
    mut episode: ResMut<EpisodeState>,
    mut rng: ResMut<SimRng>,
    mut wind: ResMut<WindVector>,
    mut status: ResMut<StatusMessage>,
    mut landings: EventReader<LandingEvent>,
    mut crashes: EventReader<CrashEvent>,
    mut resets: EventReader<ResetEvent>,
    mut query: BoosterQuery,
    mut changes: EventWriter<PhaseChanged>,
) {
    let reset_requested = !resets.is_empty();
    resets.clear();
    let landing = landings.read().last().copied();
    // First crash signal of the tick wins; drain the rest
    let crash = crashes.read().fold(None, |first, event| first.or(Some(*event)));

    // A reset request interrupts any phase except an in-flight reset.
    if reset_requested && episode.phase() != GamePhase::Resetting {
        begin_reset(
            &config,
            &mut episode,
            &mut rng,
            &mut wind,
            &mut status,
            &mut query,
            &mut changes,
        );
        return;
    }

    match episode.phase() {
        GamePhase::Playing => {
            if let Some(landing) = landing {
                episode.snap_pose = Some(landing.snap);
                for (mut handle, mut progress, _, _) in query.iter_mut() {
                    progress.clear();
                    if let Some(body) = handle.body_mut() {
                        body.set_pose(landing.snap.position, landing.snap.attitude);
                        body.zero_velocity();
                    }
                }
                status.set(format!(
                    "Captured! Held position for {:.1}s. Press R.",
                    config.capture.required_dwell
                ));
                if let Some(change) = episode.set_phase(GamePhase::Landed) {
                    info!("Booster caught");
                    changes.send(change);
                }
            } else if let Some(crash) = crash {
                for (mut handle, mut progress, _, _) in query.iter_mut() {
                    progress.clear();
                    if let Some(body) = handle.body_mut() {
                        body.zero_velocity();
                    }
                }
                match crash.reason {
                    CrashReason::Impact(surface) => {
                        info!("Booster crashed on {}", surface);
                        status.set(format!("CRASHED on {}! Press R.", surface));
                    }
                    CrashReason::OutOfBounds => {
                        info!("Booster lost below the scene bounds");
                        status.set("Lost in space... Press R.");
                    }
                }
                if let Some(change) = episode.set_phase(GamePhase::Crashed) {
                    changes.send(change);
                }
            }
        }
        GamePhase::Landed => {
            // Hold the snap pose against residual physics drift
            if let Some(snap) = episode.snap_pose {
                for (mut handle, _, _, _) in query.iter_mut() {
                    if let Some(body) = handle.body_mut() {
                        body.set_pose(snap.position, snap.attitude);
                        body.zero_velocity();
                    }
                }
            }
        }
        GamePhase::Crashed | GamePhase::Resetting => {}
    }
}

/// Entry into `Resetting`: clear every piece of episode state, roll fresh
/// spawn conditions, and teleport the body. Play resumes once the settle
/// delay elapses (see [`settle_system`](crate::systems::settle_system)),
/// which gives the physics host time to discard stale contact data.
fn begin_reset(
    config: &SimConfig,
    episode: &mut EpisodeState,
    rng: &mut SimRng,
    wind: &mut WindVector,
    status: &mut StatusMessage,
    query: &mut BoosterQuery,
    changes: &mut EventWriter<PhaseChanged>,
) {
    episode.snap_pose = None;
    episode.settle_remaining = config.episode.settle_delay;
    status.clear();

    *wind = WindVector::generate(&mut rng.0, config.wind.max_strength);
    let start = config.episode.sample_start(&mut rng.0);
    info!(
        "Reset: respawning at ({:.1}, {:.1}, {:.1})",
        start.x, start.y, start.z
    );

    for (mut handle, mut progress, mut tilt, mut plume) in query.iter_mut() {
        progress.clear();
        tilt.clear();
        plume.extinguish();
        match handle.body_mut() {
            Some(body) => {
                body.set_pose(start, UnitQuaternion::identity());
                body.zero_velocity();
            }
            None => warn!("Physics body not attached during reset"),
        }
    }

    if let Some(change) = episode.set_phase(GamePhase::Resetting) {
        changes.send(change);
    }
}
