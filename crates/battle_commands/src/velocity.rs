//! Velocity commands
//!
//! Plain delegations used as building blocks by the movement orders.
//! Failures from the target pass through untranslated.

use crate::capability::{VelocityChangable, VelocityDeletable};
use crate::command::Command;
use crate::error::Result;
use battle_math::Vec2;

/// Assigns a velocity to its target
pub struct ChangeVelocityCommand<V> {
    object: V,
    velocity: Vec2,
}

impl<V: VelocityChangable> ChangeVelocityCommand<V> {
    pub fn new(object: V, velocity: Vec2) -> Self {
        Self { object, velocity }
    }
}

impl<V: VelocityChangable> Command for ChangeVelocityCommand<V> {
    fn name(&self) -> &str {
        "change_velocity"
    }

    fn execute(&self) -> Result<()> {
        log::trace!("set velocity {}", self.velocity);
        Ok(self.object.set_velocity(self.velocity)?)
    }
}

/// Removes the velocity from its target
pub struct DeleteVelocityCommand<V> {
    object: V,
}

impl<V: VelocityDeletable> DeleteVelocityCommand<V> {
    pub fn new(object: V) -> Self {
        Self { object }
    }
}

impl<V: VelocityDeletable> Command for DeleteVelocityCommand<V> {
    fn name(&self) -> &str {
        "delete_velocity"
    }

    fn execute(&self) -> Result<()> {
        log::trace!("delete velocity");
        Ok(self.object.del_velocity()?)
    }
}
