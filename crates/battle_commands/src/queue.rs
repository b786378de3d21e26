//! Per-object command queue
//!
//! Insertion order is execution order. The queue is drained by an
//! external tick loop; orders only append to it or remove from it.

use crate::command::Command;
use parking_lot::Mutex;
use std::collections::VecDeque;
use std::fmt;
use std::sync::Arc;

/// Handle to a queue shared between the tick loop and the orders feeding it
pub type SharedQueue = Arc<Mutex<CommandQueue>>;

/// Ordered sequence of pending commands
#[derive(Default)]
pub struct CommandQueue {
    commands: VecDeque<Arc<dyn Command>>,
}

impl CommandQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Move the queue into a shared handle
    pub fn into_shared(self) -> SharedQueue {
        Arc::new(Mutex::new(self))
    }

    /// Append a command at the back
    pub fn push(&mut self, command: Arc<dyn Command>) {
        log::trace!("queue push '{}' (len {})", command.name(), self.commands.len() + 1);
        self.commands.push_back(command);
    }

    /// Take the next command to run
    pub fn pop_front(&mut self) -> Option<Arc<dyn Command>> {
        self.commands.pop_front()
    }

    /// Remove the first entry that is this exact command instance
    ///
    /// Matching is by identity, not by value: a different command of the
    /// same kind stays queued. Returns `false`, leaving the queue
    /// untouched, when the command is not present. Linear in queue length.
    pub fn remove(&mut self, command: &Arc<dyn Command>) -> bool {
        match self.commands.iter().position(|queued| same_instance(queued, command)) {
            Some(index) => {
                self.commands.remove(index);
                log::trace!("queue remove '{}' (len {})", command.name(), self.commands.len());
                true
            }
            None => false,
        }
    }

    /// Check whether this exact command instance is queued
    pub fn contains(&self, command: &Arc<dyn Command>) -> bool {
        self.commands.iter().any(|queued| same_instance(queued, command))
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Iterate pending commands in execution order
    pub fn iter(&self) -> impl Iterator<Item = &Arc<dyn Command>> {
        self.commands.iter()
    }
}

impl fmt::Debug for CommandQueue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.commands.iter().map(|command| command.name()))
            .finish()
    }
}

// Compare data pointers only; vtable pointers for one type may differ
// between codegen units.
fn same_instance(a: &Arc<dyn Command>, b: &Arc<dyn Command>) -> bool {
    Arc::as_ptr(a) as *const () == Arc::as_ptr(b) as *const ()
}
