use nalgebra::{UnitQuaternion, Vector3};
use skycatch::PhysicsBody;
use std::sync::{Arc, Mutex};

/// Observable state of a [`SharedBody`].
#[derive(Debug, Clone)]
pub struct BodySnapshot {
    pub position: Vector3<f64>,
    pub attitude: UnitQuaternion<f64>,
    pub velocity: Vector3<f64>,
    pub angular_velocity: Vector3<f64>,
    /// Every force applied, in tick order
    pub forces: Vec<Vector3<f64>>,
    /// Count of `set_pose` calls
    pub teleports: usize,
    /// Count of `zero_velocity` calls
    pub velocity_zeroed: usize,
}

impl Default for BodySnapshot {
    fn default() -> Self {
        Self {
            position: Vector3::zeros(),
            attitude: UnitQuaternion::identity(),
            velocity: Vector3::zeros(),
            angular_velocity: Vector3::zeros(),
            forces: Vec::new(),
            teleports: 0,
            velocity_zeroed: 0,
        }
    }
}

/// Mock physics body for scenario tests.
///
/// Clones share state, so a test can hand one clone to the simulation and
/// keep the other to move the body around and inspect the commands the
/// simulation issued. It never integrates: position only changes through
/// `set_pose` or the test's own `set_position`.
#[derive(Clone, Default)]
pub struct SharedBody {
    state: Arc<Mutex<BodySnapshot>>,
}

impl SharedBody {
    pub fn handle(&self) -> Box<dyn PhysicsBody> {
        Box::new(self.clone())
    }

    pub fn snapshot(&self) -> BodySnapshot {
        self.state.lock().unwrap().clone()
    }

    pub fn set_position(&self, position: Vector3<f64>) {
        self.state.lock().unwrap().position = position;
    }

    pub fn set_velocity(&self, velocity: Vector3<f64>) {
        self.state.lock().unwrap().velocity = velocity;
    }

    pub fn current_position(&self) -> Vector3<f64> {
        self.state.lock().unwrap().position
    }

    pub fn forces(&self) -> Vec<Vector3<f64>> {
        self.state.lock().unwrap().forces.clone()
    }

    pub fn clear_forces(&self) {
        self.state.lock().unwrap().forces.clear();
    }

    pub fn teleports(&self) -> usize {
        self.state.lock().unwrap().teleports
    }

    pub fn velocity_zeroed(&self) -> usize {
        self.state.lock().unwrap().velocity_zeroed
    }
}

impl PhysicsBody for SharedBody {
    fn position(&self) -> Vector3<f64> {
        self.state.lock().unwrap().position
    }

    fn attitude(&self) -> UnitQuaternion<f64> {
        self.state.lock().unwrap().attitude
    }

    fn velocity(&self) -> Vector3<f64> {
        self.state.lock().unwrap().velocity
    }

    fn angular_velocity(&self) -> Vector3<f64> {
        self.state.lock().unwrap().angular_velocity
    }

    fn apply_force(&mut self, force: Vector3<f64>) {
        self.state.lock().unwrap().forces.push(force);
    }

    fn set_pose(&mut self, position: Vector3<f64>, attitude: UnitQuaternion<f64>) {
        let mut state = self.state.lock().unwrap();
        state.position = position;
        state.attitude = attitude;
        state.teleports += 1;
    }

    fn zero_velocity(&mut self) {
        let mut state = self.state.lock().unwrap();
        state.velocity = Vector3::zeros();
        state.angular_velocity = Vector3::zeros();
        state.velocity_zeroed += 1;
    }
}
