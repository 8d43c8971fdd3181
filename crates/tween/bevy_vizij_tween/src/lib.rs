//! Bevy adapter for vizij-tween-core.
//!
//! The plugin stores a tween [`Engine`] as a non-send resource (task callbacks
//! are plain closures and need not be `Send`) and advances it once per frame in
//! `Update`.

use bevy::prelude::*;

pub mod resources;
pub mod systems;

pub use resources::{FixedDt, TweenEngine};
pub use systems::tick_tweens_system;
pub use vizij_tween_core::{Engine, Scheduler, TaskHandle};

/// System set containing the per-frame tween tick; order gameplay systems against it.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub struct TweenTick;

pub struct VizijTweenPlugin;

impl Plugin for VizijTweenPlugin {
    fn build(&self, app: &mut App) {
        app.insert_non_send_resource(TweenEngine::default())
            .init_resource::<FixedDt>()
            .add_systems(Update, tick_tweens_system.in_set(TweenTick));
    }
}
