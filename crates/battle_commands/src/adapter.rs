//! Capability adapters over property objects
//!
//! Each adapter narrows a [`SharedObject`] to one capability by delegating
//! to property get/set/delete on a well-known key. No validation happens
//! here beyond the type check needed to hand back a typed value.

use crate::capability::{Movable, Rotable, VelocityChangable, VelocityDeletable};
use battle_core::error::{PropertyError, Result};
use battle_core::{keys, SharedObject};
use battle_math::Vec2;

/// Exposes `position` and `velocity` as a [`Movable`]
pub struct MovableAdapter {
    object: SharedObject,
}

impl MovableAdapter {
    pub fn new(object: SharedObject) -> Self {
        Self { object }
    }
}

impl Movable for MovableAdapter {
    fn get_position(&self) -> Result<Vec2> {
        self.object.read().get_value(keys::POSITION)?.expect_vec2(keys::POSITION)
    }

    fn set_position(&self, position: Vec2) -> Result<()> {
        self.object.write().set_value(keys::POSITION, position.into())
    }

    fn get_movement_velocity(&self) -> Result<Vec2> {
        self.object.read().get_value(keys::VELOCITY)?.expect_vec2(keys::VELOCITY)
    }
}

/// Exposes `direction` and `rotation_velocity` as a [`Rotable`]
pub struct RotableAdapter {
    object: SharedObject,
}

impl RotableAdapter {
    pub fn new(object: SharedObject) -> Self {
        Self { object }
    }

    fn get_degrees(&self, key: &str) -> Result<i32> {
        let degrees = self.object.read().get_value(key)?.expect_int(key)?;
        i32::try_from(degrees).map_err(|_| PropertyError::out_of_range(key))
    }
}

impl Rotable for RotableAdapter {
    fn get_direction(&self) -> Result<i32> {
        self.get_degrees(keys::DIRECTION)
    }

    fn get_rotation_velocity(&self) -> Result<i32> {
        self.get_degrees(keys::ROTATION_VELOCITY)
    }

    fn set_direction(&self, direction: i32) -> Result<()> {
        self.object.write().set_value(keys::DIRECTION, direction.into())
    }
}

/// Exposes `velocity` assignment as a [`VelocityChangable`]
pub struct VelocityChangeAdapter {
    object: SharedObject,
}

impl VelocityChangeAdapter {
    pub fn new(object: SharedObject) -> Self {
        Self { object }
    }
}

impl VelocityChangable for VelocityChangeAdapter {
    fn set_velocity(&self, velocity: Vec2) -> Result<()> {
        self.object.write().set_value(keys::VELOCITY, velocity.into())
    }
}

/// Exposes `velocity` removal as a [`VelocityDeletable`]
pub struct VelocityDeletableAdapter {
    object: SharedObject,
}

impl VelocityDeletableAdapter {
    pub fn new(object: SharedObject) -> Self {
        Self { object }
    }
}

impl VelocityDeletable for VelocityDeletableAdapter {
    fn del_velocity(&self) -> Result<()> {
        self.object.write().del_value(keys::VELOCITY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use battle_core::{GameObject, PropertyValue};

    fn ship() -> SharedObject {
        GameObject::named("frigate")
            .with_property(keys::POSITION, Vec2::new(12.0, 5.0))
            .with_property(keys::VELOCITY, Vec2::new(-7.0, 3.0))
            .with_property(keys::DIRECTION, 45)
            .with_property(keys::ROTATION_VELOCITY, 30)
            .into_shared()
    }

    #[test]
    fn test_movable_adapter_delegates() {
        let object = ship();
        let movable = MovableAdapter::new(object.clone());

        assert_eq!(movable.get_position().unwrap(), Vec2::new(12.0, 5.0));
        assert_eq!(movable.get_movement_velocity().unwrap(), Vec2::new(-7.0, 3.0));

        movable.set_position(Vec2::ZERO).unwrap();
        assert_eq!(
            object.read().get_value(keys::POSITION).unwrap(),
            PropertyValue::Vec2(Vec2::ZERO)
        );
    }

    #[test]
    fn test_movable_adapter_type_mismatch() {
        let object = GameObject::new().with_property(keys::VELOCITY, 5).into_shared();
        let movable = MovableAdapter::new(object);

        assert_eq!(
            movable.get_movement_velocity(),
            Err(PropertyError::type_mismatch("velocity", "vec2", "int"))
        );
    }

    #[test]
    fn test_rotable_adapter_delegates() {
        let object = ship();
        let rotable = RotableAdapter::new(object.clone());

        assert_eq!(rotable.get_direction().unwrap(), 45);
        assert_eq!(rotable.get_rotation_velocity().unwrap(), 30);

        rotable.set_direction(-90).unwrap();
        assert_eq!(object.read().get_value(keys::DIRECTION).unwrap().as_int(), Some(-90));
    }

    #[test]
    fn test_rotable_adapter_rejects_out_of_range() {
        let object = GameObject::new()
            .with_property(keys::DIRECTION, i64::MAX)
            .into_shared();

        assert_eq!(
            RotableAdapter::new(object).get_direction(),
            Err(PropertyError::out_of_range("direction"))
        );
    }

    #[test]
    fn test_velocity_adapters() {
        let object = GameObject::new().into_shared();

        VelocityChangeAdapter::new(object.clone()).set_velocity(Vec2::X).unwrap();
        assert_eq!(object.read().get_value(keys::VELOCITY).unwrap().as_vec2(), Some(Vec2::X));

        let deletable = VelocityDeletableAdapter::new(object.clone());
        deletable.del_velocity().unwrap();
        assert_eq!(deletable.del_velocity(), Err(PropertyError::missing("velocity")));
    }
}
