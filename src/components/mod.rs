mod booster;
mod capture;
mod collision;
mod plume;
mod tilt;

pub use booster::{Booster, PhysicsHandle};
pub use capture::CaptureProgress;
pub use collision::{CollisionEvent, SurfaceTag};
pub use plume::PlumeComponent;
pub use tilt::TiltComponent;
