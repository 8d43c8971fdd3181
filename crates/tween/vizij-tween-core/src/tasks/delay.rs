use crate::interp::reached;
use crate::task::{Callback, Step, StepResult, TaskKind, TaskValue};

/// Waits until `delay` seconds have accumulated, then fires its callback once.
pub struct Delay {
    delay: f32,
    elapsed: f32,
    on_complete: Option<Callback>,
}

impl Delay {
    pub fn new(delay: f32) -> Self {
        Self {
            delay,
            elapsed: 0.0,
            on_complete: None,
        }
    }

    pub fn on_complete(mut self, f: impl FnOnce() + 'static) -> Self {
        self.on_complete = Some(Box::new(f));
        self
    }
}

impl Step for Delay {
    fn step(&mut self, dt: f32) -> StepResult {
        self.elapsed += dt;
        if self.delay > 0.0 && !reached(self.elapsed, self.delay) {
            return StepResult::Continuing(TaskValue::Unit);
        }
        if let Some(done) = self.on_complete.take() {
            done();
        }
        StepResult::Completed(TaskValue::Unit)
    }

    fn kind(&self) -> TaskKind {
        TaskKind::Delay
    }
}
