//! Deferred scheduler commands.
//!
//! Callbacks run while the scheduler is mid-step and cannot borrow it. They
//! capture a [`CommandQueue`] instead; queued commands are applied right after
//! the step that queued them.

use std::cell::RefCell;
use std::rc::Rc;

use crate::ids::{IdAllocator, TaskHandle};
use crate::task::TimedTask;

pub(crate) enum Command {
    Schedule {
        slot: usize,
        handle: TaskHandle,
        task: TimedTask,
    },
    Cancel {
        slot: usize,
    },
    CancelTask(TaskHandle),
}

#[derive(Default)]
struct QueueState {
    ids: IdAllocator,
    pending: Vec<Command>,
}

/// Cloneable handle onto a scheduler's pending-command queue. Handles
/// allocated here share the scheduler's id space.
#[derive(Clone, Default)]
pub struct CommandQueue {
    inner: Rc<RefCell<QueueState>>,
}

impl CommandQueue {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn alloc(&self) -> TaskHandle {
        self.inner.borrow_mut().ids.alloc_task()
    }

    /// Queue `task` for installation into `slot`. The task first steps on the
    /// tick after it is applied.
    pub fn schedule(&self, slot: usize, task: impl Into<TimedTask>) -> TaskHandle {
        let mut state = self.inner.borrow_mut();
        let handle = state.ids.alloc_task();
        state.pending.push(Command::Schedule {
            slot,
            handle,
            task: task.into(),
        });
        handle
    }

    pub fn cancel(&self, slot: usize) {
        self.inner.borrow_mut().pending.push(Command::Cancel { slot });
    }

    pub fn cancel_task(&self, handle: TaskHandle) {
        self.inner
            .borrow_mut()
            .pending
            .push(Command::CancelTask(handle));
    }

    pub fn len(&self) -> usize {
        self.inner.borrow().pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub(crate) fn drain(&self) -> Vec<Command> {
        std::mem::take(&mut self.inner.borrow_mut().pending)
    }
}

impl std::fmt::Debug for CommandQueue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CommandQueue")
            .field("pending", &self.len())
            .finish()
    }
}
