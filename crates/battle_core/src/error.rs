//! Error types for property access

use thiserror::Error;

/// Result type for property operations
pub type Result<T> = std::result::Result<T, PropertyError>;

/// Failures of the property contract
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PropertyError {
    /// The object has no property under this key
    #[error("property '{key}' is not set")]
    Missing { key: String },

    /// The property exists but holds a value of another type
    #[error("property '{key}' has type {found}, expected {expected}")]
    TypeMismatch {
        key: String,
        expected: &'static str,
        found: &'static str,
    },

    /// A value derived from the property does not fit its type
    #[error("property '{key}' is out of range")]
    OutOfRange { key: String },
}

impl PropertyError {
    /// Create a missing-property error
    pub fn missing(key: impl Into<String>) -> Self {
        PropertyError::Missing { key: key.into() }
    }

    /// Create a type mismatch error
    pub fn type_mismatch(key: impl Into<String>, expected: &'static str, found: &'static str) -> Self {
        PropertyError::TypeMismatch {
            key: key.into(),
            expected,
            found,
        }
    }

    /// Create an out-of-range error
    pub fn out_of_range(key: impl Into<String>) -> Self {
        PropertyError::OutOfRange { key: key.into() }
    }

    /// The key the failed access was made with
    pub fn key(&self) -> &str {
        match self {
            PropertyError::Missing { key }
            | PropertyError::TypeMismatch { key, .. }
            | PropertyError::OutOfRange { key } => key,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_and_keys() {
        let missing = PropertyError::missing("velocity");
        assert_eq!(missing.key(), "velocity");
        assert_eq!(missing.to_string(), "property 'velocity' is not set");

        let range = PropertyError::out_of_range("direction");
        assert_eq!(range.key(), "direction");
        assert_eq!(range.to_string(), "property 'direction' is out of range");

        assert_eq!(PropertyError::type_mismatch("position", "vec2", "int").key(), "position");
    }
}
