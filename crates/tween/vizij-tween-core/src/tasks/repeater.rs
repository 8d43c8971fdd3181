use crate::interp::whole_intervals;
use crate::task::{RepeatCallback, Step, StepResult, TaskKind, TaskValue};

/// Invokes its callback every `interval` seconds, forever.
///
/// The accumulator carries the remainder past each interval so the number of
/// invocations equals the number of whole intervals crossed, even when a single
/// large `dt` crosses several, up to [`Repeater::MAX_FIRES_PER_STEP`] per step.
/// A non-positive interval fires once per step. Non-finite `dt` is ignored.
pub struct Repeater {
    interval: f32,
    acc: f32,
    fired: u64,
    on_repeat: Option<RepeatCallback>,
}

impl Repeater {
    /// Catch-up limit for one step; time beyond it is dropped.
    pub const MAX_FIRES_PER_STEP: u64 = 1 << 16;

    pub fn new(interval: f32) -> Self {
        Self {
            interval,
            acc: 0.0,
            fired: 0,
            on_repeat: None,
        }
    }

    pub fn on_repeat(mut self, f: impl FnMut() + 'static) -> Self {
        self.on_repeat = Some(Box::new(f));
        self
    }

    /// How many times the callback has fired.
    #[inline]
    pub fn fired(&self) -> u64 {
        self.fired
    }

    fn fire(&mut self) {
        self.fired += 1;
        if let Some(f) = self.on_repeat.as_mut() {
            f();
        }
    }
}

impl Step for Repeater {
    fn step(&mut self, dt: f32) -> StepResult {
        if self.interval <= 0.0 {
            self.fire();
            return StepResult::Continuing(TaskValue::Unit);
        }
        if dt.is_finite() && dt > 0.0 {
            self.acc += dt;
        }
        let whole = whole_intervals(self.acc, self.interval);
        if whole < 1.0 {
            return StepResult::Continuing(TaskValue::Unit);
        }
        let cap = Self::MAX_FIRES_PER_STEP as f32;
        let crossed = if whole > cap {
            let rem = self.acc.rem_euclid(self.interval);
            self.acc = if rem.is_finite() { rem } else { 0.0 };
            Self::MAX_FIRES_PER_STEP
        } else {
            self.acc = (self.acc - whole * self.interval).max(0.0);
            whole as u64
        };
        for _ in 0..crossed {
            self.fire();
        }
        StepResult::Continuing(TaskValue::Unit)
    }

    fn kind(&self) -> TaskKind {
        TaskKind::Repeater
    }
}
