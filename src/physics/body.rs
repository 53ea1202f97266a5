use nalgebra::{UnitQuaternion, Vector3};

/// Handle to the rigid body the simulation steers.
///
/// The host supplies the concrete body: a wrapper around its physics engine,
/// or the bundled [`KinematicBody`](super::KinematicBody) when no engine is
/// present. The simulation only ever reads pose and velocity, accumulates
/// forces, teleports, and zeroes velocities through this trait.
pub trait PhysicsBody: Send + Sync {
    /// Position of the body center in world space [m]
    fn position(&self) -> Vector3<f64>;

    /// Attitude quaternion (rotation from body to world frame)
    fn attitude(&self) -> UnitQuaternion<f64>;

    /// Linear velocity in world space [m/s]
    fn velocity(&self) -> Vector3<f64>;

    /// Angular velocity in body frame [rad/s]
    fn angular_velocity(&self) -> Vector3<f64>;

    /// Accumulate a world-frame force for the current tick [N]
    fn apply_force(&mut self, force: Vector3<f64>);

    /// Teleport the body, discarding any interpolation state
    fn set_pose(&mut self, position: Vector3<f64>, attitude: UnitQuaternion<f64>);

    /// Zero linear and angular velocity immediately
    fn zero_velocity(&mut self);

    /// Advance internally-simulated bodies by `dt` seconds.
    ///
    /// Bodies driven by an external physics engine leave this as a no-op;
    /// the engine integrates on its own clock.
    fn step(&mut self, _dt: f64) {}
}
