//! Order configuration
//!
//! ```toml
//! # What EndMoveCommand does with the object's velocity:
//! # "retain" (default) leaves it in place, "delete" removes it.
//! velocity_release = "delete"
//! ```
//!
//! The `BATTLE_VELOCITY_RELEASE` environment variable overrides the file.

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Environment variable overriding [`OrderConfig::velocity_release`]
pub const VELOCITY_RELEASE_ENV: &str = "BATTLE_VELOCITY_RELEASE";

/// What ending a move does with the object's velocity property
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VelocityRelease {
    /// Delete the velocity property
    Delete,
    /// Build the delete command but leave the velocity in place
    ///
    /// Ending a move stays repeatable: only the queue is touched.
    Retain,
}

impl Default for VelocityRelease {
    fn default() -> Self {
        Self::Retain
    }
}

impl std::fmt::Display for VelocityRelease {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Delete => write!(f, "delete"),
            Self::Retain => write!(f, "retain"),
        }
    }
}

impl std::str::FromStr for VelocityRelease {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "delete" | "del" => Ok(Self::Delete),
            "retain" | "keep" => Ok(Self::Retain),
            _ => Err(format!("Unknown velocity release: {}", s)),
        }
    }
}

/// Settings for the movement orders
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrderConfig {
    pub velocity_release: VelocityRelease,
}

impl OrderConfig {
    /// Parse configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Load configuration from a TOML file
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&content)?;
        log::info!("Loaded order config from {}", path.display());
        Ok(config)
    }

    /// Load from `path`, then apply environment overrides
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Ok(Self::load_from_file(path)?.with_overrides(|key| std::env::var(key).ok()))
    }

    /// Apply overrides from a key lookup such as the process environment
    ///
    /// Unparseable values are logged and ignored.
    pub fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(value) = lookup(VELOCITY_RELEASE_ENV) {
            match value.parse() {
                Ok(release) => {
                    self.velocity_release = release;
                    log::info!("Velocity release from env: {}", release);
                }
                Err(e) => log::warn!("Ignoring {}: {}", VELOCITY_RELEASE_ENV, e),
            }
        }
        self
    }
}
