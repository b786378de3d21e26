//! Integration tests for battle_commands
//!
//! Drives orders and queued commands against real game objects the way a
//! tick loop would.

use battle_commands::prelude::*;
use battle_core::error::Result as PropertyResult;
use battle_core::{keys, GameObject, PropertyError, SharedObject};
use parking_lot::Mutex;
use std::sync::Arc;

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn frigate() -> SharedObject {
    GameObject::named("frigate")
        .with_property(keys::POSITION, Vec2::new(12.0, 5.0))
        .with_property(keys::DIRECTION, 45)
        .with_property(keys::ROTATION_VELOCITY, 30)
        .into_shared()
}

fn position(object: &SharedObject) -> Option<Vec2> {
    object.read().get_value(keys::POSITION).ok()?.as_vec2()
}

/// One drain cycle: run every queued command once, requeueing those that recur
fn tick(queue: &SharedQueue) -> Result<()> {
    let pending = queue.lock().len();
    for _ in 0..pending {
        let Some(command) = queue.lock().pop_front() else { break };
        command.execute()?;
        if command.name() == "move" {
            queue.lock().push(command);
        }
    }
    Ok(())
}

#[test]
fn test_start_tick_end() {
    init_logging();

    let ship = frigate();
    let queue = CommandQueue::new().into_shared();

    let start = StartMoveCommand::new(StartMoveOrder {
        object: ship.clone(),
        start_velocity: Vec2::new(-7.0, 3.0),
        queue: queue.clone(),
    });
    start.execute().unwrap();
    let move_command = start.started_command().unwrap();

    tick(&queue).unwrap();
    assert_eq!(position(&ship), Some(Vec2::new(5.0, 8.0)));

    tick(&queue).unwrap();
    assert_eq!(position(&ship), Some(Vec2::new(-2.0, 11.0)));

    let config = OrderConfig {
        velocity_release: VelocityRelease::Delete,
    };
    EndMoveCommand::with_config(
        EndMoveOrder {
            move_command,
            object: ship.clone(),
            queue: queue.clone(),
        },
        config,
    )
    .execute()
    .unwrap();

    assert!(queue.lock().is_empty());
    assert_eq!(
        ship.read().get_value(keys::VELOCITY),
        Err(PropertyError::missing("velocity"))
    );

    tick(&queue).unwrap();
    assert_eq!(position(&ship), Some(Vec2::new(-2.0, 11.0)));
}

#[test]
fn test_end_leaves_other_commands_queued() {
    init_logging();

    let ship = frigate();
    let queue = CommandQueue::new().into_shared();

    let rotate: Arc<dyn Command> = Arc::new(RotateCommand::new(
        RotableAdapter::new(ship.clone()),
        Turn::Left,
    ));
    queue.lock().push(rotate.clone());

    let order = StartMoveOrder {
        object: ship.clone(),
        start_velocity: Vec2::new(1.0, 0.0),
        queue: queue.clone(),
    };
    let first = StartMoveCommand::new(order.clone());
    let second = StartMoveCommand::new(order);
    first.execute().unwrap();
    second.execute().unwrap();
    assert_eq!(queue.lock().len(), 3);

    EndMoveCommand::new(EndMoveOrder {
        move_command: first.started_command().unwrap(),
        object: ship.clone(),
        queue: queue.clone(),
    })
    .execute()
    .unwrap();

    // The default config leaves the velocity for the second move.
    assert!(ship.read().get_value(keys::VELOCITY).is_ok());

    let queue = queue.lock();
    assert_eq!(queue.len(), 2);
    assert!(queue.contains(&rotate));
    assert!(queue.contains(&second.started_command().unwrap()));
    assert!(!queue.contains(&first.started_command().unwrap()));
}

#[test]
fn test_queued_move_without_velocity_is_not_movable() {
    init_logging();

    let ship = frigate();
    let queue = CommandQueue::new().into_shared();
    queue.lock().push(Arc::new(MoveCommand::new(MovableAdapter::new(ship.clone()))));

    let err = tick(&queue).unwrap_err();
    assert_eq!(err.to_string(), "The object cannot be moved. property 'velocity' is not set");
    assert_eq!(position(&ship), Some(Vec2::new(12.0, 5.0)));
}

#[test]
fn test_rotate_game_object() {
    let ship = frigate();

    RotateCommand::new(RotableAdapter::new(ship.clone()), Turn::Right).execute().unwrap();
    assert_eq!(ship.read().get_value(keys::DIRECTION).unwrap().as_int(), Some(75));

    RotateCommand::new(RotableAdapter::new(ship.clone()), Turn::Left).execute().unwrap();
    RotateCommand::new(RotableAdapter::new(ship.clone()), Turn::Left).execute().unwrap();
    assert_eq!(ship.read().get_value(keys::DIRECTION).unwrap().as_int(), Some(15));
}

#[test]
fn test_rotate_object_without_rotation_is_not_rotable() {
    let rock = GameObject::new().with_property(keys::DIRECTION, 0).into_shared();

    let err = RotateCommand::new(RotableAdapter::new(rock), Turn::Left).execute().unwrap_err();
    assert!(matches!(err, CommandError::NotRotable(Some(_))));
}

/// Satisfies `Rotable` directly, with typed fields and no property bag
struct Turret {
    heading: Mutex<i32>,
    traverse: i32,
}

impl Rotable for Turret {
    fn get_direction(&self) -> PropertyResult<i32> {
        Ok(*self.heading.lock())
    }

    fn get_rotation_velocity(&self) -> PropertyResult<i32> {
        Ok(self.traverse)
    }

    fn set_direction(&self, direction: i32) -> PropertyResult<()> {
        *self.heading.lock() = direction;
        Ok(())
    }
}

#[test]
fn test_rotate_conforming_object() {
    let turret = Arc::new(Turret {
        heading: Mutex::new(45),
        traverse: 30,
    });

    RotateCommand::new(turret.clone(), Turn::Left).execute().unwrap();
    assert_eq!(*turret.heading.lock(), 15);
}
