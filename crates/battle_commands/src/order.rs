//! Movement orders
//!
//! An order couples a state change on the target object with a change to
//! its command queue. [`StartMoveCommand`] gives the object a velocity and
//! enqueues a recurring [`MoveCommand`]; [`EndMoveCommand`] takes that same
//! command instance back out and, when configured with
//! [`VelocityRelease::Delete`], removes the velocity.
//!
//! Both run their steps strictly in order with no compensation: if a later
//! step fails, effects of earlier steps stay applied and the error is
//! returned to the caller unchanged.

use crate::adapter::{MovableAdapter, VelocityChangeAdapter, VelocityDeletableAdapter};
use crate::command::Command;
use crate::config::{OrderConfig, VelocityRelease};
use crate::error::Result;
use crate::movement::MoveCommand;
use crate::queue::SharedQueue;
use crate::velocity::{ChangeVelocityCommand, DeleteVelocityCommand};
use battle_core::SharedObject;
use battle_math::Vec2;
use parking_lot::Mutex;
use std::sync::Arc;

/// Descriptor of an order to start moving
pub trait MoveCommandStartable: Send + Sync {
    /// The object that will move in a straight line
    fn get_target_object(&self) -> Result<SharedObject>;

    /// Velocity the object starts moving with
    fn get_target_start_velocity(&self) -> Result<Vec2>;

    /// Queue the new move command is appended to
    fn get_target_command_queue(&self) -> Result<SharedQueue>;
}

/// Descriptor of an order to stop moving
pub trait MoveCommandEndable: Send + Sync {
    /// The queued move command to take off the queue
    fn get_target_move_command(&self) -> Result<Arc<dyn Command>>;

    /// The object being moved by that command
    fn get_target_moving_object(&self) -> Result<SharedObject>;

    /// Queue holding the move command
    fn get_target_commands_queue(&self) -> Result<SharedQueue>;
}

/// Start order with everything resolved up front
#[derive(Clone)]
pub struct StartMoveOrder {
    pub object: SharedObject,
    pub start_velocity: Vec2,
    pub queue: SharedQueue,
}

impl MoveCommandStartable for StartMoveOrder {
    fn get_target_object(&self) -> Result<SharedObject> {
        Ok(self.object.clone())
    }

    fn get_target_start_velocity(&self) -> Result<Vec2> {
        Ok(self.start_velocity)
    }

    fn get_target_command_queue(&self) -> Result<SharedQueue> {
        Ok(self.queue.clone())
    }
}

/// End order with everything resolved up front
#[derive(Clone)]
pub struct EndMoveOrder {
    pub move_command: Arc<dyn Command>,
    pub object: SharedObject,
    pub queue: SharedQueue,
}

impl MoveCommandEndable for EndMoveOrder {
    fn get_target_move_command(&self) -> Result<Arc<dyn Command>> {
        Ok(self.move_command.clone())
    }

    fn get_target_moving_object(&self) -> Result<SharedObject> {
        Ok(self.object.clone())
    }

    fn get_target_commands_queue(&self) -> Result<SharedQueue> {
        Ok(self.queue.clone())
    }
}

/// Puts a move command on the target's queue
pub struct StartMoveCommand<O> {
    order: O,
    started: Mutex<Option<Arc<dyn Command>>>,
}

impl<O: MoveCommandStartable> StartMoveCommand<O> {
    pub fn new(order: O) -> Self {
        Self {
            order,
            started: Mutex::new(None),
        }
    }

    /// The move command enqueued by the last successful execution
    ///
    /// This is the instance an [`EndMoveOrder`] must name to stop the
    /// movement again.
    pub fn started_command(&self) -> Option<Arc<dyn Command>> {
        self.started.lock().clone()
    }
}

impl<O: MoveCommandStartable> Command for StartMoveCommand<O> {
    fn name(&self) -> &str {
        "start_move"
    }

    fn execute(&self) -> Result<()> {
        let object = self.order.get_target_object()?;

        let velocity = self.order.get_target_start_velocity()?;
        ChangeVelocityCommand::new(VelocityChangeAdapter::new(object.clone()), velocity).execute()?;

        let move_command: Arc<dyn Command> = Arc::new(MoveCommand::new(MovableAdapter::new(object)));

        let queue = self.order.get_target_command_queue()?;
        let queued = {
            let mut queue = queue.lock();
            queue.push(move_command.clone());
            queue.len()
        };

        log::debug!("Started move with velocity {} ({} queued)", velocity, queued);
        *self.started.lock() = Some(move_command);
        Ok(())
    }
}

/// Takes a move command off the target's queue
pub struct EndMoveCommand<O> {
    order: O,
    config: OrderConfig,
}

impl<O: MoveCommandEndable> EndMoveCommand<O> {
    /// End order with the default config, which leaves the velocity set
    pub fn new(order: O) -> Self {
        Self::with_config(order, OrderConfig::default())
    }

    pub fn with_config(order: O, config: OrderConfig) -> Self {
        Self { order, config }
    }

    fn release_velocity(&self) -> Result<()> {
        let object = self.order.get_target_moving_object()?;
        let release = DeleteVelocityCommand::new(VelocityDeletableAdapter::new(object));

        match self.config.velocity_release {
            VelocityRelease::Delete => release.execute(),
            VelocityRelease::Retain => {
                log::trace!("Velocity retained on end of move");
                Ok(())
            }
        }
    }

    fn dequeue(&self) -> Result<()> {
        let queue = self.order.get_target_commands_queue()?;
        let move_command = self.order.get_target_move_command()?;

        if queue.lock().remove(&move_command) {
            log::debug!("Ended move '{}'", move_command.name());
        } else {
            log::warn!("Move command '{}' was not queued; nothing to end", move_command.name());
        }
        Ok(())
    }
}

impl<O: MoveCommandEndable> Command for EndMoveCommand<O> {
    fn name(&self) -> &str {
        "end_move"
    }

    fn execute(&self) -> Result<()> {
        self.release_velocity()?;
        self.dequeue()
    }
}
