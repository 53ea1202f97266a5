use bevy::prelude::*;
use nalgebra::{UnitQuaternion, Vector3};
use serde::{Deserialize, Serialize};

use crate::components::SurfaceTag;

/// Episode phase. Exactly one value at any time; written only by the
/// state-application system.
///
/// Legal transitions:
/// `Playing -> Landed | Crashed`, any phase `-> Resetting` on an explicit
/// reset request, and `Resetting -> Playing` once the settle delay elapses.
/// `Landed -> Crashed` is deliberately unreachable: once caught, further
/// collisions are ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    Playing,
    Landed,
    Crashed,
    Resetting,
}

/// Pose the booster is frozen at on a successful catch. Re-applied every tick
/// while landed to defeat residual physics drift.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SnapPose {
    pub position: Vector3<f64>,
    pub attitude: UnitQuaternion<f64>,
}

impl SnapPose {
    pub fn upright_at(position: Vector3<f64>) -> Self {
        Self {
            position,
            attitude: UnitQuaternion::identity(),
        }
    }
}

/// The state machine's owned data: current phase, the landing snap pose, the
/// two observer flags, and the reset settle countdown.
#[derive(Resource, Debug, Clone)]
pub struct EpisodeState {
    phase: GamePhase,
    pub snap_pose: Option<SnapPose>,
    landed: bool,
    crashed: bool,
    /// Seconds left in the `Resetting` phase before play resumes
    pub settle_remaining: f64,
}

impl Default for EpisodeState {
    fn default() -> Self {
        Self {
            phase: GamePhase::Playing,
            snap_pose: None,
            landed: false,
            crashed: false,
            settle_remaining: 0.0,
        }
    }
}

impl EpisodeState {
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn is_playing(&self) -> bool {
        self.phase == GamePhase::Playing
    }

    /// Net landed flag shown to observers. Never true together with
    /// [`is_crashed`](Self::is_crashed).
    pub fn is_landed(&self) -> bool {
        self.landed
    }

    pub fn is_crashed(&self) -> bool {
        self.crashed
    }

    /// Move to `to`, updating the observer flags from the net state.
    ///
    /// Returns the change notification to emit, or `None` for a self
    /// transition. Callers are responsible for entry side effects (velocity
    /// freeze, snap capture, timers).
    pub fn set_phase(&mut self, to: GamePhase) -> Option<PhaseChanged> {
        let from = self.phase;
        if from == to {
            return None;
        }
        self.phase = to;
        self.landed = to == GamePhase::Landed;
        self.crashed = to == GamePhase::Crashed;
        Some(PhaseChanged {
            from,
            to,
            landed: self.landed,
            crashed: self.crashed,
        })
    }
}

/// Emitted by the capture monitor when dwell time reaches the threshold.
#[derive(Event, Debug, Clone, Copy)]
pub struct LandingEvent {
    pub snap: SnapPose,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CrashReason {
    /// Contact with a hazard-tagged surface
    Impact(SurfaceTag),
    /// Fell below the scene's lower bound
    OutOfBounds,
}

/// Emitted by the crash detector or the fall-out check.
#[derive(Event, Debug, Clone, Copy)]
pub struct CrashEvent {
    pub reason: CrashReason,
}

/// Explicit reset request from input or external UI. Honoured in any phase
/// except `Resetting`.
#[derive(Event, Debug, Clone, Copy, Default)]
pub struct ResetEvent;

/// Outbound change notification, one per transition. The host polls these
/// instead of being called back from inside the core.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhaseChanged {
    pub from: GamePhase,
    pub to: GamePhase,
    /// Net landed flag after the transition
    pub landed: bool,
    /// Net crashed flag after the transition
    pub crashed: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_track_net_state() {
        let mut episode = EpisodeState::default();

        let change = episode.set_phase(GamePhase::Landed).unwrap();
        assert!(change.landed && !change.crashed);
        assert!(episode.is_landed() && !episode.is_crashed());

        let change = episode.set_phase(GamePhase::Resetting).unwrap();
        assert!(!change.landed && !change.crashed);
        assert!(!episode.is_landed() && !episode.is_crashed());
    }

    #[test]
    fn self_transition_emits_nothing() {
        let mut episode = EpisodeState::default();
        assert!(episode.set_phase(GamePhase::Playing).is_none());
        assert_eq!(episode.phase(), GamePhase::Playing);
    }

    #[test]
    fn landed_and_crashed_are_mutually_exclusive() {
        let mut episode = EpisodeState::default();
        episode.set_phase(GamePhase::Crashed);
        assert!(episode.is_crashed() && !episode.is_landed());

        episode.set_phase(GamePhase::Resetting);
        episode.set_phase(GamePhase::Playing);
        episode.set_phase(GamePhase::Landed);
        assert!(episode.is_landed() && !episode.is_crashed());
    }
}
