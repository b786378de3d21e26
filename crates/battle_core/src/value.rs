//! Property values
//!
//! The set of value types a game object property may hold.

use crate::error::{PropertyError, Result};
use battle_math::Vec2;
use serde::{Deserialize, Serialize};

/// A value stored under a property key
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PropertyValue {
    /// Integer value (degrees)
    Int(i64),
    /// Planar vector (position, velocity)
    Vec2(Vec2),
}

impl PropertyValue {
    /// Get as integer
    pub fn as_int(&self) -> Option<i64> {
        match self {
            PropertyValue::Int(v) => Some(*v),
            _ => None,
        }
    }

    /// Get as vector
    pub fn as_vec2(&self) -> Option<Vec2> {
        match self {
            PropertyValue::Vec2(v) => Some(*v),
            _ => None,
        }
    }

    /// Read as vector, failing with a type mismatch on `key`
    pub fn expect_vec2(&self, key: &str) -> Result<Vec2> {
        self.as_vec2()
            .ok_or_else(|| PropertyError::type_mismatch(key, "vec2", self.type_name()))
    }

    /// Read as integer, failing with a type mismatch on `key`
    pub fn expect_int(&self, key: &str) -> Result<i64> {
        self.as_int()
            .ok_or_else(|| PropertyError::type_mismatch(key, "int", self.type_name()))
    }

    /// Get type name for diagnostics
    pub fn type_name(&self) -> &'static str {
        match self {
            PropertyValue::Int(_) => "int",
            PropertyValue::Vec2(_) => "vec2",
        }
    }
}

impl From<i64> for PropertyValue {
    fn from(v: i64) -> Self {
        PropertyValue::Int(v)
    }
}

impl From<i32> for PropertyValue {
    fn from(v: i32) -> Self {
        PropertyValue::Int(v.into())
    }
}

impl From<Vec2> for PropertyValue {
    fn from(v: Vec2) -> Self {
        PropertyValue::Vec2(v)
    }
}
