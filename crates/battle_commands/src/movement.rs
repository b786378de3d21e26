//! Move and rotate commands
//!
//! These are the capability-boundary commands: any property failure met
//! while reading or writing the target is re-raised as
//! [`CommandError::NotMovable`] or [`CommandError::NotRotable`].

use crate::capability::{Movable, Rotable};
use crate::command::Command;
use crate::error::{CommandError, Result};
use battle_core::error::Result as PropertyResult;
use battle_core::{keys, PropertyError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Moves an object by its movement velocity: `position += velocity`
pub struct MoveCommand<M> {
    object: M,
}

impl<M: Movable> MoveCommand<M> {
    pub fn new(object: M) -> Self {
        Self { object }
    }

    fn step(&self) -> PropertyResult<()> {
        let position = self.object.get_position()?;
        let velocity = self.object.get_movement_velocity()?;
        let new_position = position + velocity;
        log::trace!("move {} -> {}", position, new_position);
        self.object.set_position(new_position)
    }
}

impl<M: Movable> Command for MoveCommand<M> {
    fn name(&self) -> &str {
        "move"
    }

    fn execute(&self) -> Result<()> {
        self.step().map_err(CommandError::not_movable)
    }
}

/// Turn direction for [`RotateCommand`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Turn {
    /// Counter-clockwise: direction decreases
    Left,
    /// Clockwise: direction increases
    Right,
}

impl fmt::Display for Turn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Turn::Left => write!(f, "left"),
            Turn::Right => write!(f, "right"),
        }
    }
}

impl std::str::FromStr for Turn {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "left" => Ok(Turn::Left),
            "right" => Ok(Turn::Right),
            _ => Err(format!("Unknown turn direction: {}", s)),
        }
    }
}

/// Turns an object by its rotation velocity
///
/// The resulting heading is written as-is, without wrapping into any
/// canonical degree range.
pub struct RotateCommand<R> {
    object: R,
    turn: Turn,
}

impl<R: Rotable> RotateCommand<R> {
    pub fn new(object: R, turn: Turn) -> Self {
        Self { object, turn }
    }

    pub fn turn(&self) -> Turn {
        self.turn
    }

    fn step(&self) -> PropertyResult<()> {
        let direction = self.object.get_direction()?;
        let rotation_velocity = self.object.get_rotation_velocity()?;
        let new_direction = match self.turn {
            Turn::Left => direction.checked_sub(rotation_velocity),
            Turn::Right => direction.checked_add(rotation_velocity),
        }
        .ok_or_else(|| PropertyError::out_of_range(keys::DIRECTION))?;
        log::trace!("rotate {} {} -> {}", self.turn, direction, new_direction);
        self.object.set_direction(new_direction)
    }
}

impl<R: Rotable> Command for RotateCommand<R> {
    fn name(&self) -> &str {
        "rotate"
    }

    fn execute(&self) -> Result<()> {
        self.step().map_err(CommandError::not_rotable)
    }
}
