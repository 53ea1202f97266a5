mod game_state;
mod input;
mod rng;
mod status;
mod time;
mod wind;

pub use game_state::{
    CrashEvent, CrashReason, EpisodeState, GamePhase, LandingEvent, PhaseChanged, ResetEvent,
    SnapPose,
};
pub use input::{ControlSymbol, InputState};
pub use rng::SimRng;
pub use status::StatusMessage;
pub use time::SimTime;
pub use wind::WindVector;
