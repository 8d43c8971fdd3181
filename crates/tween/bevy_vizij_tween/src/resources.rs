use bevy::prelude::*;
use vizij_tween_core::Engine;

/// Non-send resource wrapping the tween engine. Use `engine.0.global()` for the
/// shared ten-slot scheduler or create per-owner schedulers.
#[derive(Default)]
pub struct TweenEngine(pub Engine);

/// Optional fixed timestep (seconds per frame). When `None` the frame's
/// `Time::delta_seconds()` is used.
#[derive(Resource, Default, Debug, Clone, Copy)]
pub struct FixedDt(pub Option<f32>);
