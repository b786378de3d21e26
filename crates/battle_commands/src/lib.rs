//! Battle Commands - Game Object Commands and Movement Orders
//!
//! Discrete operations over property-bag game objects, expressed through
//! narrow capability contracts instead of a shared game-object type.
//!
//! # Features
//!
//! - Capability traits: [`Movable`], [`Rotable`], [`VelocityChangable`], [`VelocityDeletable`]
//! - Adapters narrowing a [`SharedObject`](battle_core::SharedObject) to one capability
//! - Atomic commands: move, rotate, change velocity, delete velocity
//! - Per-object [`CommandQueue`] drained by an external tick loop
//! - Orders that start and stop continuous movement
//!
//! # Example
//!
//! ```ignore
//! use battle_commands::prelude::*;
//!
//! let queue = CommandQueue::new().into_shared();
//! let start = StartMoveCommand::new(StartMoveOrder {
//!     object: ship.clone(),
//!     start_velocity: Vec2::new(2.0, 0.0),
//!     queue: queue.clone(),
//! });
//! start.execute()?;
//!
//! // Later, stop exactly the move command that was started
//! EndMoveCommand::new(EndMoveOrder {
//!     move_command: start.started_command().unwrap(),
//!     object: ship,
//!     queue,
//! })
//! .execute()?;
//! ```

pub mod adapter;
pub mod capability;
pub mod command;
pub mod config;
pub mod error;
pub mod movement;
pub mod order;
pub mod queue;
pub mod velocity;

pub mod prelude {
    pub use crate::adapter::{MovableAdapter, RotableAdapter, VelocityChangeAdapter, VelocityDeletableAdapter};
    pub use crate::capability::{Movable, Rotable, VelocityChangable, VelocityDeletable};
    pub use crate::command::Command;
    pub use crate::config::{OrderConfig, VelocityRelease};
    pub use crate::error::{CommandError, ConfigError, Result};
    pub use crate::movement::{MoveCommand, RotateCommand, Turn};
    pub use crate::order::{
        EndMoveCommand, EndMoveOrder, MoveCommandEndable, MoveCommandStartable, StartMoveCommand,
        StartMoveOrder,
    };
    pub use crate::queue::{CommandQueue, SharedQueue};
    pub use crate::velocity::{ChangeVelocityCommand, DeleteVelocityCommand};
    pub use battle_math::Vec2;
}

pub use prelude::*;
