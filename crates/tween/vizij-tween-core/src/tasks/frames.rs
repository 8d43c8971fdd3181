use crate::task::{Callback, Step, StepResult, TaskKind, TaskValue};

/// Counts ticks instead of time: completes on the `frames`-th step regardless of dt.
pub struct WaitFrames {
    frames: u32,
    counted: u32,
    on_complete: Option<Callback>,
}

impl WaitFrames {
    pub fn new(frames: u32) -> Self {
        Self {
            frames,
            counted: 0,
            on_complete: None,
        }
    }

    /// Wait for a single frame.
    pub fn end_of_frame() -> Self {
        Self::new(1)
    }

    pub fn on_complete(mut self, f: impl FnOnce() + 'static) -> Self {
        self.on_complete = Some(Box::new(f));
        self
    }

    #[inline]
    pub fn remaining(&self) -> u32 {
        self.frames.saturating_sub(self.counted)
    }
}

impl Step for WaitFrames {
    fn step(&mut self, _dt: f32) -> StepResult {
        self.counted = self.counted.saturating_add(1);
        if self.counted < self.frames {
            return StepResult::Continuing(TaskValue::Unit);
        }
        if let Some(done) = self.on_complete.take() {
            done();
        }
        StepResult::Completed(TaskValue::Unit)
    }

    fn kind(&self) -> TaskKind {
        TaskKind::WaitFrames
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn completes_on_nth_step_ignoring_dt() {
        let mut wait = WaitFrames::new(3);
        assert!(!wait.step(100.0).is_completed());
        assert_eq!(wait.remaining(), 2);
        assert!(!wait.step(0.0).is_completed());
        assert!(wait.step(0.0).is_completed());
        assert_eq!(wait.remaining(), 0);
    }

    #[test]
    fn zero_frames_completes_on_first_step() {
        assert!(WaitFrames::new(0).step(0.016).is_completed());
        assert!(WaitFrames::end_of_frame().step(0.016).is_completed());
    }
}
