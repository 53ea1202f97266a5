use bevy::prelude::*;

use crate::physics::PhysicsBody;

/// Marker for the steered booster entity. Exactly one is spawned.
#[derive(Component, Debug, Default)]
pub struct Booster;

/// Slot for the host-supplied rigid body.
///
/// The handle is absent during the first ticks, before the host is ready;
/// every system treats an empty slot as a no-op tick.
#[derive(Component, Default)]
pub struct PhysicsHandle {
    body: Option<Box<dyn PhysicsBody>>,
}

impl PhysicsHandle {
    pub fn attach(&mut self, body: Box<dyn PhysicsBody>) {
        self.body = Some(body);
    }

    pub fn detach(&mut self) -> Option<Box<dyn PhysicsBody>> {
        self.body.take()
    }

    pub fn is_attached(&self) -> bool {
        self.body.is_some()
    }

    pub fn body(&self) -> Option<&dyn PhysicsBody> {
        self.body.as_deref()
    }

    pub fn body_mut(&mut self) -> Option<&mut (dyn PhysicsBody + 'static)> {
        self.body.as_deref_mut()
    }
}
