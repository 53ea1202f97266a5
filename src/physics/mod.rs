mod body;
mod kinematic;

pub use body::PhysicsBody;
pub use kinematic::KinematicBody;
