//! Capability contracts
//!
//! Each command depends on the narrowest contract it needs rather than on
//! the full property object. A type may satisfy any number of these.

use battle_core::error::Result;
use battle_math::Vec2;
use std::sync::Arc;

/// Something that can change its position on the map
pub trait Movable: Send + Sync {
    /// Current position on the map
    fn get_position(&self) -> Result<Vec2>;

    /// Move to a new position on the map
    fn set_position(&self, position: Vec2) -> Result<()>;

    /// Displacement applied per move step
    fn get_movement_velocity(&self) -> Result<Vec2>;
}

/// Something that can turn
///
/// Degrees are nominally in (-360, 360); nothing here enforces that.
pub trait Rotable: Send + Sync {
    /// Current heading in degrees
    fn get_direction(&self) -> Result<i32>;

    /// Degrees turned per rotation step
    fn get_rotation_velocity(&self) -> Result<i32>;

    /// Set a new heading
    fn set_direction(&self, direction: i32) -> Result<()>;
}

/// Something whose velocity can be assigned
pub trait VelocityChangable: Send + Sync {
    fn set_velocity(&self, velocity: Vec2) -> Result<()>;
}

/// Something whose velocity can be removed
pub trait VelocityDeletable: Send + Sync {
    fn del_velocity(&self) -> Result<()>;
}

impl<T: Movable + ?Sized> Movable for Arc<T> {
    fn get_position(&self) -> Result<Vec2> {
        (**self).get_position()
    }

    fn set_position(&self, position: Vec2) -> Result<()> {
        (**self).set_position(position)
    }

    fn get_movement_velocity(&self) -> Result<Vec2> {
        (**self).get_movement_velocity()
    }
}

impl<T: Rotable + ?Sized> Rotable for Arc<T> {
    fn get_direction(&self) -> Result<i32> {
        (**self).get_direction()
    }

    fn get_rotation_velocity(&self) -> Result<i32> {
        (**self).get_rotation_velocity()
    }

    fn set_direction(&self, direction: i32) -> Result<()> {
        (**self).set_direction(direction)
    }
}

impl<T: VelocityChangable + ?Sized> VelocityChangable for Arc<T> {
    fn set_velocity(&self, velocity: Vec2) -> Result<()> {
        (**self).set_velocity(velocity)
    }
}

impl<T: VelocityDeletable + ?Sized> VelocityDeletable for Arc<T> {
    fn del_velocity(&self) -> Result<()> {
        (**self).del_velocity()
    }
}
