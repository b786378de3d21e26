//! Error types for commands and orders

use battle_core::PropertyError;
use std::path::PathBuf;
use thiserror::Error;

/// Result type for command execution
pub type Result<T> = std::result::Result<T, CommandError>;

/// Errors raised while executing a command
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CommandError {
    /// The target lacks a capability the move command needs
    #[error("The object cannot be moved.{}", with_cause(.0))]
    NotMovable(Option<String>),

    /// The target lacks a capability the rotate command needs
    #[error("The object cannot be rotated.{}", with_cause(.0))]
    NotRotable(Option<String>),

    /// Untranslated property failure
    #[error(transparent)]
    Property(#[from] PropertyError),

    /// The order descriptor could not supply what was asked of it
    #[error("Invalid order: {0}")]
    InvalidOrder(String),
}

impl CommandError {
    /// Not-movable error carrying the underlying cause
    pub fn not_movable(cause: impl ToString) -> Self {
        CommandError::NotMovable(Some(cause.to_string()))
    }

    /// Not-rotable error carrying the underlying cause
    pub fn not_rotable(cause: impl ToString) -> Self {
        CommandError::NotRotable(Some(cause.to_string()))
    }

    pub fn invalid_order(message: impl Into<String>) -> Self {
        CommandError::InvalidOrder(message.into())
    }
}

fn with_cause(cause: &Option<String>) -> String {
    match cause {
        Some(cause) => format!(" {}", cause),
        None => String::new(),
    }
}

/// Errors loading [`OrderConfig`](crate::config::OrderConfig)
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Config file could not be read
    #[error("Failed to read config '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Config text is not valid
    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
}
