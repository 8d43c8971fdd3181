//! Identifiers and simple allocators for scheduled tasks and owners.

use serde::{Deserialize, Serialize};

/// Opaque handle to one scheduled task. Cancels that task regardless of
/// which slot (if any) still refers to it.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct TaskHandle(pub u32);

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct OwnerId(pub u32);

/// Monotonic allocator for TaskHandle values.
#[derive(Default, Debug)]
pub struct IdAllocator {
    next_task: u32,
}

impl IdAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn alloc_task(&mut self) -> TaskHandle {
        let id = TaskHandle(self.next_task);
        self.next_task = self.next_task.wrapping_add(1);
        id
    }
}
