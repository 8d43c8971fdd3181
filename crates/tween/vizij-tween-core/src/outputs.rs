//! Per-tick outputs from the scheduler.
//!
//! Outputs carry the lifecycle events produced during one `advance` call,
//! preceded by those recorded by scheduling or cancelling since the last one.
//! Hosts that only care about callbacks can ignore them.

use serde::{Deserialize, Serialize};

use crate::ids::TaskHandle;

/// Discrete lifecycle signals emitted while scheduling and stepping.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[non_exhaustive]
pub enum TaskEvent {
    /// A task reported completion this tick. `slot` is `None` for tasks that
    /// were already displaced from their slot.
    Completed {
        task: TaskHandle,
        slot: Option<usize>,
    },
    Cancelled {
        task: TaskHandle,
        slot: Option<usize>,
    },
    /// `next` was installed over `previous`, which keeps running detached.
    Replaced {
        slot: usize,
        previous: TaskHandle,
        next: TaskHandle,
    },
}

/// Outputs returned by `Scheduler::advance()`.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Outputs {
    #[serde(default)]
    pub events: Vec<TaskEvent>,
    /// Number of task steps performed this tick.
    #[serde(default)]
    pub stepped: usize,
}

impl Outputs {
    #[inline]
    pub fn clear(&mut self) {
        self.events.clear();
        self.stepped = 0;
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty() && self.stepped == 0
    }

    /// Handles of tasks that completed this tick.
    pub fn completed(&self) -> impl Iterator<Item = TaskHandle> + '_ {
        self.events.iter().filter_map(|e| match e {
            TaskEvent::Completed { task, .. } => Some(*task),
            _ => None,
        })
    }
}
