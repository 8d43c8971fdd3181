use bevy::prelude::*;

use crate::resources::{FixedDt, TweenEngine};

/// Advance every tween owner by this frame's delta.
pub fn tick_tweens_system(
    mut engine: NonSendMut<TweenEngine>,
    time: Res<Time>,
    fixed: Res<FixedDt>,
) {
    let dt = fixed.0.unwrap_or_else(|| time.delta_seconds());
    engine.0.advance(dt);
}
