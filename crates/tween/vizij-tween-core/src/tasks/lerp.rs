use crate::interp::{reached, Easing};
use crate::task::{Callback, Step, StepResult, TaskKind, TaskValue, ValueCallback};

/// Interpolates a float from `start` to `end` over `duration` seconds.
///
/// Each step accumulates `dt` first. While the accumulated time is below the
/// duration the eased value is delivered to the update callback; once it is
/// reached the update callback receives exactly `end` (never an overshoot),
/// the completion callback runs and the task completes.
pub struct FloatLerp {
    duration: f32,
    start: f32,
    end: f32,
    easing: Easing,
    elapsed: f32,
    on_update: Option<ValueCallback>,
    on_complete: Option<Callback>,
}

impl FloatLerp {
    pub fn new(duration: f32, start: f32, end: f32, easing: Easing) -> Self {
        Self {
            duration,
            start,
            end,
            easing,
            elapsed: 0.0,
            on_update: None,
            on_complete: None,
        }
    }

    pub fn linear(duration: f32, start: f32, end: f32) -> Self {
        Self::new(duration, start, end, Easing::Linear)
    }

    pub fn smooth(duration: f32, start: f32, end: f32) -> Self {
        Self::new(duration, start, end, Easing::SmoothStep)
    }

    pub fn on_update(mut self, f: impl FnMut(f32) + 'static) -> Self {
        self.on_update = Some(Box::new(f));
        self
    }

    pub fn on_complete(mut self, f: impl FnOnce() + 'static) -> Self {
        self.on_complete = Some(Box::new(f));
        self
    }

    fn emit(&mut self, value: f32) {
        if let Some(f) = self.on_update.as_mut() {
            f(value);
        }
    }
}

impl Step for FloatLerp {
    fn step(&mut self, dt: f32) -> StepResult {
        self.elapsed += dt;
        if self.duration <= 0.0 || reached(self.elapsed, self.duration) {
            let end = self.end;
            self.emit(end);
            if let Some(done) = self.on_complete.take() {
                done();
            }
            return StepResult::Completed(TaskValue::Float(end));
        }
        let t = self.elapsed / self.duration;
        let value = self.easing.apply(self.start, self.end, t);
        self.emit(value);
        StepResult::Continuing(TaskValue::Float(value))
    }

    fn kind(&self) -> TaskKind {
        TaskKind::Tween(self.easing)
    }
}
