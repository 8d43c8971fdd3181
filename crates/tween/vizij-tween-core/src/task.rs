//! Step contract shared by every timed task, plus the `TimedTask` wrapper that
//! tracks status and the last produced value.
//!
//! A task is an explicit state machine: the scheduler calls `step(dt)` once per
//! tick and the task reports whether it wants another tick.

use serde::{Deserialize, Serialize};

use crate::interp::Easing;

/// Per-step value callback (receives the interpolated value).
pub type ValueCallback = Box<dyn FnMut(f32)>;
/// Completion callback, invoked at most once.
pub type Callback = Box<dyn FnOnce()>;
/// Callback invoked on every repeat cycle.
pub type RepeatCallback = Box<dyn FnMut()>;

/// Last value produced by a task.
#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data", rename_all = "lowercase")]
pub enum TaskValue {
    /// Nothing produced yet.
    #[default]
    Pending,
    Float(f32),
    /// Produced by tasks that carry no value (delays, frame waits, repeaters).
    Unit,
}

impl TaskValue {
    #[inline]
    pub fn as_float(&self) -> Option<f32> {
        match self {
            TaskValue::Float(v) => Some(*v),
            _ => None,
        }
    }
}

/// Outcome of one step.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum StepResult {
    Continuing(TaskValue),
    Completed(TaskValue),
}

impl StepResult {
    #[inline]
    pub fn value(&self) -> TaskValue {
        match self {
            StepResult::Continuing(v) | StepResult::Completed(v) => *v,
        }
    }

    #[inline]
    pub fn is_completed(&self) -> bool {
        matches!(self, StepResult::Completed(_))
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TaskStatus {
    Running,
    Finished,
}

impl TaskStatus {
    #[inline]
    pub fn is_running(&self) -> bool {
        matches!(self, Self::Running)
    }
}

/// Which variant a task is; used for logging and events.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TaskKind {
    Tween(Easing),
    Delay,
    WaitFrames,
    Repeater,
    Custom,
}

impl TaskKind {
    pub fn name(&self) -> &'static str {
        match self {
            TaskKind::Tween(Easing::Linear) => "lerp",
            TaskKind::Tween(Easing::SmoothStep) => "lerp_smooth",
            TaskKind::Delay => "delay",
            TaskKind::WaitFrames => "wait_frames",
            TaskKind::Repeater => "repeater",
            TaskKind::Custom => "custom",
        }
    }
}

/// Resumable unit of timed work. Implementors own their progress state and
/// callbacks; `step` is called once per tick until it reports `Completed`.
pub trait Step {
    fn step(&mut self, dt: f32) -> StepResult;

    fn kind(&self) -> TaskKind {
        TaskKind::Custom
    }
}

/// A step function together with its status and last produced value.
///
/// Once finished the inner step is never called again; further `step` calls
/// return `Completed` with the final value and invoke nothing.
pub struct TimedTask {
    inner: Box<dyn Step>,
    status: TaskStatus,
    last: TaskValue,
}

impl TimedTask {
    pub fn new(step: impl Step + 'static) -> Self {
        Self::from_boxed(Box::new(step))
    }

    pub fn from_boxed(inner: Box<dyn Step>) -> Self {
        Self {
            inner,
            status: TaskStatus::Running,
            last: TaskValue::Pending,
        }
    }

    pub fn step(&mut self, dt: f32) -> StepResult {
        if self.status == TaskStatus::Finished {
            return StepResult::Completed(self.last);
        }
        let res = self.inner.step(dt);
        self.last = res.value();
        if res.is_completed() {
            self.status = TaskStatus::Finished;
        }
        res
    }

    #[inline]
    pub fn status(&self) -> TaskStatus {
        self.status
    }

    #[inline]
    pub fn last_value(&self) -> TaskValue {
        self.last
    }

    #[inline]
    pub fn kind(&self) -> TaskKind {
        self.inner.kind()
    }
}

impl std::fmt::Debug for TimedTask {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TimedTask")
            .field("kind", &self.kind())
            .field("status", &self.status)
            .field("last", &self.last)
            .finish()
    }
}

impl<S: Step + 'static> From<S> for TimedTask {
    fn from(step: S) -> Self {
        TimedTask::new(step)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Countdown(u32);

    impl Step for Countdown {
        fn step(&mut self, _dt: f32) -> StepResult {
            self.0 = self.0.saturating_sub(1);
            if self.0 == 0 {
                StepResult::Completed(TaskValue::Float(0.0))
            } else {
                StepResult::Continuing(TaskValue::Float(self.0 as f32))
            }
        }
    }

    #[test]
    fn finished_task_is_not_stepped_again() {
        let mut task = TimedTask::new(Countdown(2));
        assert_eq!(task.status(), TaskStatus::Running);
        assert_eq!(task.last_value(), TaskValue::Pending);

        assert_eq!(task.step(0.1), StepResult::Continuing(TaskValue::Float(1.0)));
        assert_eq!(task.step(0.1), StepResult::Completed(TaskValue::Float(0.0)));
        assert_eq!(task.status(), TaskStatus::Finished);

        // Countdown would saturate and keep reporting; the wrapper must not call it.
        assert_eq!(task.step(0.1), StepResult::Completed(TaskValue::Float(0.0)));
        assert_eq!(task.kind(), TaskKind::Custom);
    }

    #[test]
    fn task_value_serializes_tagged() {
        let json = serde_json::to_value(TaskValue::Float(0.5)).unwrap();
        assert_eq!(json, serde_json::json!({ "type": "float", "data": 0.5 }));
        let unit = serde_json::to_value(TaskValue::Unit).unwrap();
        assert_eq!(unit, serde_json::json!({ "type": "unit" }));
    }
}
