//! Scheduler: a fixed slot table of timed tasks advanced by the host once per tick.
//!
//! Methods:
//! - schedule / try_schedule and per-variant helpers (lerp_float, delay, ...)
//! - is_updating (liveness query that also refreshes the cached result)
//! - cancel / cancel_task
//! - advance (steps every live task once)
//!
//! Slot 0 is the implicit default slot used by the helpers without a `slot`
//! argument. Installing a task into an occupied slot does not stop the previous
//! occupant: it keeps being advanced as a detached execution until it finishes
//! or is cancelled through its [`TaskHandle`].

use log::{debug, trace, warn};

use crate::commands::{Command, CommandQueue};
use crate::config::Config;
use crate::error::{Result, TweenError};
use crate::ids::TaskHandle;
use crate::outputs::{Outputs, TaskEvent};
use crate::task::{StepResult, TaskStatus, TaskValue, TimedTask};
use crate::tasks::{Delay, FloatLerp, Repeater, WaitFrames};

/// The implicit slot used by helpers that take no slot argument.
pub const DEFAULT_SLOT: usize = 0;

/// One task execution owned by the scheduler.
#[derive(Debug)]
struct Entry {
    handle: TaskHandle,
    task: TimedTask,
    cancelled: bool,
    /// Slot currently referring to this task, if any.
    slot: Option<usize>,
}

impl Entry {
    #[inline]
    fn is_live(&self) -> bool {
        !self.cancelled && self.task.status().is_running()
    }
}

#[derive(Debug)]
pub struct Scheduler {
    name: String,
    cfg: Config,
    slots: Vec<Option<TaskHandle>>,
    /// Values cached by `is_updating`, parallel to `slots`.
    results: Vec<TaskValue>,
    /// Executions in scheduling order: live tasks plus finished/cancelled ones a slot still refers to.
    entries: Vec<Entry>,
    queue: CommandQueue,
    outputs: Outputs,
    /// Events recorded between ticks, reported by the next `advance`.
    pending: Vec<TaskEvent>,
    /// Set while `advance` is stepping; retirement is deferred until it ends.
    ticking: bool,
}

impl Scheduler {
    /// Create a scheduler with `cfg.slots + 1` slots.
    ///
    /// `cfg` is used as given. A zero `max_events_per_tick` records no events;
    /// use [`Scheduler::try_new`] to reject such a config.
    pub fn new(cfg: Config) -> Self {
        Self::named("tween", cfg)
    }

    /// Validating variant of [`Scheduler::new`].
    pub fn try_new(cfg: Config) -> Result<Self> {
        cfg.validate()?;
        Ok(Self::new(cfg))
    }

    pub fn named(name: impl Into<String>, cfg: Config) -> Self {
        let capacity = cfg.capacity();
        Self {
            name: name.into(),
            slots: vec![None; capacity],
            results: vec![TaskValue::Pending; capacity],
            entries: Vec::new(),
            queue: CommandQueue::new(),
            outputs: Outputs::default(),
            pending: Vec::new(),
            ticking: false,
            cfg,
        }
    }

    /// Shorthand for `Scheduler::new(Config::with_slots(slots))`.
    pub fn with_slots(slots: usize) -> Self {
        Self::new(Config::with_slots(slots))
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn config(&self) -> &Config {
        &self.cfg
    }

    /// Slot table length, including the default slot.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Queue handle for callbacks that need to schedule or cancel while a tick is running.
    pub fn commands(&self) -> CommandQueue {
        self.queue.clone()
    }

    /// Outputs of the most recent `advance`.
    #[inline]
    pub fn outputs(&self) -> &Outputs {
        &self.outputs
    }

    /// Events from scheduling or cancelling since the last `advance`. The next
    /// `advance` reports them ahead of its own events.
    #[inline]
    pub fn pending_events(&self) -> &[TaskEvent] {
        &self.pending
    }

    /// Number of executions still being advanced, detached ones included.
    pub fn live_tasks(&self) -> usize {
        self.entries.iter().filter(|e| e.is_live()).count()
    }

    fn check_slot(&self, slot: usize) -> Result<()> {
        if slot < self.slots.len() {
            Ok(())
        } else {
            Err(TweenError::SlotOutOfRange {
                slot,
                capacity: self.slots.len(),
            })
        }
    }

    #[track_caller]
    fn expect_slot(&self, slot: usize) {
        assert!(
            slot < self.slots.len(),
            "slot {slot} is out of range for scheduler '{}' (capacity {})",
            self.name,
            self.slots.len()
        );
    }

    fn entry(&self, handle: TaskHandle) -> Option<&Entry> {
        self.entries.iter().find(|e| e.handle == handle)
    }

    fn entry_mut(&mut self, handle: TaskHandle) -> Option<&mut Entry> {
        self.entries.iter_mut().find(|e| e.handle == handle)
    }

    fn slot_entry(&self, slot: usize) -> Option<&Entry> {
        self.slots[slot].and_then(|h| self.entry(h))
    }

    fn push_event(&mut self, event: TaskEvent) {
        let events = if self.ticking {
            &mut self.outputs.events
        } else {
            &mut self.pending
        };
        if events.len() < self.cfg.max_events_per_tick {
            events.push(event);
        }
    }

    // ---------------------------------------------------------------------
    // Scheduling
    // ---------------------------------------------------------------------

    /// Install `task` into `slot`, replacing (but not stopping) any previous occupant.
    ///
    /// # Panics
    /// Panics if `slot >= self.capacity()`.
    #[track_caller]
    pub fn schedule(&mut self, slot: usize, task: impl Into<TimedTask>) -> TaskHandle {
        self.expect_slot(slot);
        let handle = self.queue.alloc();
        self.install(slot, handle, task.into());
        handle
    }

    /// Checked variant of [`Scheduler::schedule`].
    pub fn try_schedule(&mut self, slot: usize, task: impl Into<TimedTask>) -> Result<TaskHandle> {
        self.check_slot(slot)?;
        let handle = self.queue.alloc();
        self.install(slot, handle, task.into());
        Ok(handle)
    }

    fn install(&mut self, slot: usize, handle: TaskHandle, task: TimedTask) {
        debug!(
            "{}: scheduling {} task {:?} into slot {}",
            self.name,
            task.kind().name(),
            handle,
            slot
        );
        if let Some(previous) = self.slots[slot].replace(handle) {
            let still_running = match self.entry_mut(previous) {
                Some(prev) => {
                    prev.slot = None;
                    prev.is_live()
                }
                None => false,
            };
            if still_running {
                debug!(
                    "{}: slot {} replaced; task {:?} keeps running detached",
                    self.name, slot, previous
                );
                self.push_event(TaskEvent::Replaced {
                    slot,
                    previous,
                    next: handle,
                });
            }
            self.retire();
        }
        self.entries.push(Entry {
            handle,
            task,
            cancelled: false,
            slot: Some(slot),
        });
    }

    /// Interpolate linearly from `start` to `end` over `duration` seconds in the default slot.
    pub fn lerp_float(
        &mut self,
        duration: f32,
        start: f32,
        end: f32,
        to_do: impl FnMut(f32) + 'static,
        callback: impl FnOnce() + 'static,
    ) -> TaskHandle {
        self.lerp_float_in(DEFAULT_SLOT, duration, start, end, to_do, callback)
    }

    #[track_caller]
    pub fn lerp_float_in(
        &mut self,
        slot: usize,
        duration: f32,
        start: f32,
        end: f32,
        to_do: impl FnMut(f32) + 'static,
        callback: impl FnOnce() + 'static,
    ) -> TaskHandle {
        let task = FloatLerp::linear(duration, start, end)
            .on_update(to_do)
            .on_complete(callback);
        self.schedule(slot, task)
    }

    /// Smoothstep-eased variant of [`Scheduler::lerp_float`].
    pub fn lerp_float_smooth(
        &mut self,
        duration: f32,
        start: f32,
        end: f32,
        to_do: impl FnMut(f32) + 'static,
        callback: impl FnOnce() + 'static,
    ) -> TaskHandle {
        self.lerp_float_smooth_in(DEFAULT_SLOT, duration, start, end, to_do, callback)
    }

    #[track_caller]
    pub fn lerp_float_smooth_in(
        &mut self,
        slot: usize,
        duration: f32,
        start: f32,
        end: f32,
        to_do: impl FnMut(f32) + 'static,
        callback: impl FnOnce() + 'static,
    ) -> TaskHandle {
        let task = FloatLerp::smooth(duration, start, end)
            .on_update(to_do)
            .on_complete(callback);
        self.schedule(slot, task)
    }

    /// Run `callback` once `delay` seconds have accumulated.
    pub fn delay(&mut self, delay: f32, callback: impl FnOnce() + 'static) -> TaskHandle {
        self.delay_in(DEFAULT_SLOT, delay, callback)
    }

    #[track_caller]
    pub fn delay_in(
        &mut self,
        slot: usize,
        delay: f32,
        callback: impl FnOnce() + 'static,
    ) -> TaskHandle {
        self.schedule(slot, Delay::new(delay).on_complete(callback))
    }

    /// Run `callback` on the `frames`-th tick from now.
    pub fn wait_frames(&mut self, frames: u32, callback: impl FnOnce() + 'static) -> TaskHandle {
        self.wait_frames_in(DEFAULT_SLOT, frames, callback)
    }

    #[track_caller]
    pub fn wait_frames_in(
        &mut self,
        slot: usize,
        frames: u32,
        callback: impl FnOnce() + 'static,
    ) -> TaskHandle {
        self.schedule(slot, WaitFrames::new(frames).on_complete(callback))
    }

    /// Run `callback` on the next tick.
    pub fn wait_for_end_of_frame(&mut self, callback: impl FnOnce() + 'static) -> TaskHandle {
        self.wait_for_end_of_frame_in(DEFAULT_SLOT, callback)
    }

    #[track_caller]
    pub fn wait_for_end_of_frame_in(
        &mut self,
        slot: usize,
        callback: impl FnOnce() + 'static,
    ) -> TaskHandle {
        self.schedule(slot, WaitFrames::end_of_frame().on_complete(callback))
    }

    /// Run `to_repeat` every `interval` seconds until cancelled.
    pub fn repeater(&mut self, interval: f32, to_repeat: impl FnMut() + 'static) -> TaskHandle {
        self.repeater_in(DEFAULT_SLOT, interval, to_repeat)
    }

    #[track_caller]
    pub fn repeater_in(
        &mut self,
        slot: usize,
        interval: f32,
        to_repeat: impl FnMut() + 'static,
    ) -> TaskHandle {
        self.schedule(slot, Repeater::new(interval).on_repeat(to_repeat))
    }

    // ---------------------------------------------------------------------
    // Queries
    // ---------------------------------------------------------------------

    /// True iff `slot` holds a running, non-cancelled task. When true, the
    /// task's last value is copied into the slot's cached [`Scheduler::result`].
    ///
    /// # Panics
    /// Panics if `slot >= self.capacity()`.
    #[track_caller]
    pub fn is_updating(&mut self, slot: usize) -> bool {
        self.expect_slot(slot);
        let last = match self.slot_entry(slot) {
            Some(e) if e.is_live() => e.task.last_value(),
            _ => return false,
        };
        self.results[slot] = last;
        true
    }

    pub fn try_is_updating(&mut self, slot: usize) -> Result<bool> {
        self.check_slot(slot)?;
        Ok(self.is_updating(slot))
    }

    /// Value cached by the most recent `is_updating(slot)` that returned true.
    #[track_caller]
    pub fn result(&self, slot: usize) -> TaskValue {
        self.expect_slot(slot);
        self.results[slot]
    }

    /// Status of the task a slot refers to. A cancelled task keeps `Running`.
    #[track_caller]
    pub fn status(&self, slot: usize) -> Option<TaskStatus> {
        self.expect_slot(slot);
        self.slot_entry(slot).map(|e| e.task.status())
    }

    /// Last value produced by the slot's task, without touching the result cache.
    #[track_caller]
    pub fn value(&self, slot: usize) -> Option<TaskValue> {
        self.expect_slot(slot);
        self.slot_entry(slot).map(|e| e.task.last_value())
    }

    /// Whether the task behind `handle` is still being advanced.
    pub fn is_task_live(&self, handle: TaskHandle) -> bool {
        self.entry(handle).is_some_and(Entry::is_live)
    }

    // ---------------------------------------------------------------------
    // Cancellation
    // ---------------------------------------------------------------------

    /// Stop the task held in `slot`. No-op for an empty slot or a task that
    /// already finished or was cancelled. The slot keeps its reference.
    ///
    /// # Panics
    /// Panics if `slot >= self.capacity()`.
    #[track_caller]
    pub fn cancel(&mut self, slot: usize) {
        self.expect_slot(slot);
        if let Some(handle) = self.slots[slot] {
            self.cancel_task(handle);
        }
    }

    pub fn try_cancel(&mut self, slot: usize) -> Result<()> {
        self.check_slot(slot)?;
        self.cancel(slot);
        Ok(())
    }

    /// Stop one task by handle, wherever it lives. Returns true if it was live.
    pub fn cancel_task(&mut self, handle: TaskHandle) -> bool {
        let slot = match self.entry_mut(handle) {
            Some(e) if e.is_live() => {
                e.cancelled = true;
                e.slot
            }
            _ => return false,
        };
        debug!("{}: cancelled task {:?} (slot {:?})", self.name, handle, slot);
        self.push_event(TaskEvent::Cancelled { task: handle, slot });
        self.retire();
        true
    }

    /// Cancel every live task and empty all slots. Cached results are kept.
    pub fn clear(&mut self) {
        let live: Vec<TaskHandle> = self
            .entries
            .iter()
            .filter(|e| e.is_live())
            .map(|e| e.handle)
            .collect();
        for handle in live {
            self.cancel_task(handle);
        }
        self.slots.iter_mut().for_each(|s| *s = None);
        self.entries.clear();
    }

    // ---------------------------------------------------------------------
    // Ticking
    // ---------------------------------------------------------------------

    /// Step every live task once by `dt` seconds, in scheduling order.
    ///
    /// The returned outputs start with the events recorded since the previous
    /// call (see [`Scheduler::pending_events`]), followed by this tick's.
    /// Negative or non-finite `dt` is treated as 0. Tasks scheduled from
    /// callbacks during this call first step on the next tick. A panic raised
    /// by a callback propagates out of this call.
    pub fn advance(&mut self, dt: f32) -> &Outputs {
        self.outputs.clear();
        self.outputs.events.append(&mut self.pending);
        let dt = if dt >= 0.0 && dt.is_finite() {
            dt
        } else {
            warn!("{}: invalid dt {} clamped to 0", self.name, dt);
            0.0
        };
        trace!(
            "{}: advance dt={} live={}",
            self.name,
            dt,
            self.live_tasks()
        );

        // Entries are only appended while ticking, so indices stay stable and
        // tasks appended by callbacks wait for the next tick.
        self.ticking = true;
        // Commands queued between ticks take effect before this tick's steps.
        self.apply_commands();
        let n = self.entries.len();
        for i in 0..n {
            let entry = &mut self.entries[i];
            if entry.is_live() {
                let res = entry.task.step(dt);
                let (handle, slot) = (entry.handle, entry.slot);
                self.outputs.stepped += 1;
                if let StepResult::Completed(_) = res {
                    debug!("{}: task {:?} completed (slot {:?})", self.name, handle, slot);
                    self.push_event(TaskEvent::Completed { task: handle, slot });
                }
            }
            self.apply_commands();
        }
        self.ticking = false;
        self.retire();
        &self.outputs
    }

    fn apply_commands(&mut self) {
        for cmd in self.queue.drain() {
            match cmd {
                Command::Schedule { slot, handle, task } => {
                    self.expect_slot(slot);
                    self.install(slot, handle, task);
                }
                Command::Cancel { slot } => self.cancel(slot),
                Command::CancelTask(handle) => {
                    self.cancel_task(handle);
                }
            }
        }
    }

    /// Drop executions that are no longer live and no slot refers to.
    fn retire(&mut self) {
        if self.ticking {
            return;
        }
        self.entries.retain(|e| e.is_live() || e.slot.is_some());
    }
}
