use nalgebra::{UnitQuaternion, Vector3};
use serde::{Deserialize, Serialize};

use super::PhysicsBody;

/// Reference rigid body with semi-implicit Euler integration.
///
/// Used by hosts without a physics engine and by the integration tests.
/// Terminal-velocity behaviour comes from the linear damping coefficient,
/// applied with the `1 / (1 + dt * d)` form so large timesteps stay stable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KinematicBody {
    pub position: Vector3<f64>,
    pub velocity: Vector3<f64>,
    pub attitude: UnitQuaternion<f64>,
    pub angular_velocity: Vector3<f64>,
    /// Body mass [kg]
    pub mass: f64,
    /// Linear damping coefficient [1/s]
    pub linear_damping: f64,
    #[serde(skip)]
    accumulated_force: Vector3<f64>,
}

impl Default for KinematicBody {
    fn default() -> Self {
        Self {
            position: Vector3::zeros(),
            velocity: Vector3::zeros(),
            attitude: UnitQuaternion::identity(),
            angular_velocity: Vector3::zeros(),
            mass: 1.0,
            linear_damping: 1.1,
            accumulated_force: Vector3::zeros(),
        }
    }
}

impl KinematicBody {
    pub fn new(mass: f64, linear_damping: f64) -> Self {
        Self {
            mass,
            linear_damping,
            ..Default::default()
        }
    }

    pub fn at_position(position: Vector3<f64>) -> Self {
        Self {
            position,
            ..Default::default()
        }
    }
}

impl PhysicsBody for KinematicBody {
    fn position(&self) -> Vector3<f64> {
        self.position
    }

    fn attitude(&self) -> UnitQuaternion<f64> {
        self.attitude
    }

    fn velocity(&self) -> Vector3<f64> {
        self.velocity
    }

    fn angular_velocity(&self) -> Vector3<f64> {
        self.angular_velocity
    }

    fn apply_force(&mut self, force: Vector3<f64>) {
        self.accumulated_force += force;
    }

    fn set_pose(&mut self, position: Vector3<f64>, attitude: UnitQuaternion<f64>) {
        self.position = position;
        self.attitude = attitude;
    }

    fn zero_velocity(&mut self) {
        self.velocity = Vector3::zeros();
        self.angular_velocity = Vector3::zeros();
    }

    fn step(&mut self, dt: f64) {
        if dt <= 0.0 {
            self.accumulated_force = Vector3::zeros();
            return;
        }

        let acceleration = self.accumulated_force / self.mass;
        self.velocity += acceleration * dt;
        self.velocity /= 1.0 + dt * self.linear_damping;
        self.position += self.velocity * dt;

        if self.angular_velocity.norm() > 0.0 {
            let rotation = UnitQuaternion::from_scaled_axis(self.angular_velocity * dt);
            self.attitude = rotation * self.attitude;
        }

        self.accumulated_force = Vector3::zeros();
    }
}
