//! The property object contract and its default implementation

use crate::error::{PropertyError, Result};
use crate::id::ObjectId;
use crate::value::PropertyValue;
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;

/// Well-known property keys
pub mod keys {
    /// Map position, `Vec2`
    pub const POSITION: &str = "position";
    /// Movement velocity, `Vec2`. Present only while the object is moving.
    pub const VELOCITY: &str = "velocity";
    /// Heading in integer degrees, nominally within (-360, 360)
    pub const DIRECTION: &str = "direction";
    /// Degrees turned per rotation step
    pub const ROTATION_VELOCITY: &str = "rotation_velocity";
}

/// Contract for any game object: named values that can be read, written and removed
pub trait UObject: Send + Sync {
    /// Get a property value. Fails with [`PropertyError::Missing`] if absent.
    fn get_value(&self, key: &str) -> Result<PropertyValue>;

    /// Set a property value, creating it if needed
    fn set_value(&mut self, key: &str, value: PropertyValue) -> Result<()>;

    /// Remove a property. Fails with [`PropertyError::Missing`] if absent.
    fn del_value(&mut self, key: &str) -> Result<()>;
}

/// Handle to a game object owned by the world and shared with commands
pub type SharedObject = Arc<RwLock<dyn UObject>>;

/// Property-bag game object
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameObject {
    id: ObjectId,
    properties: HashMap<String, PropertyValue>,
}

impl GameObject {
    /// Create an empty object with a fresh id
    pub fn new() -> Self {
        Self {
            id: ObjectId::next(),
            properties: HashMap::new(),
        }
    }

    /// Create an empty object whose id is derived from `name`
    pub fn named(name: &str) -> Self {
        Self {
            id: ObjectId::from_name(name),
            properties: HashMap::new(),
        }
    }

    /// Builder-style property assignment
    pub fn with_property(mut self, key: impl Into<String>, value: impl Into<PropertyValue>) -> Self {
        self.properties.insert(key.into(), value.into());
        self
    }

    pub fn id(&self) -> ObjectId {
        self.id
    }

    /// Check whether a property is set
    pub fn contains(&self, key: &str) -> bool {
        self.properties.contains_key(key)
    }

    /// Number of properties set
    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    /// Move the object into a shared handle
    pub fn into_shared(self) -> SharedObject {
        Arc::new(RwLock::new(self))
    }
}

impl Default for GameObject {
    fn default() -> Self {
        Self::new()
    }
}

impl UObject for GameObject {
    fn get_value(&self, key: &str) -> Result<PropertyValue> {
        self.properties
            .get(key)
            .cloned()
            .ok_or_else(|| PropertyError::missing(key))
    }

    fn set_value(&mut self, key: &str, value: PropertyValue) -> Result<()> {
        self.properties.insert(key.to_string(), value);
        Ok(())
    }

    fn del_value(&mut self, key: &str) -> Result<()> {
        self.properties
            .remove(key)
            .map(|_| ())
            .ok_or_else(|| PropertyError::missing(key))
    }
}
