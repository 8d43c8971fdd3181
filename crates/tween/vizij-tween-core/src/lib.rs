//! Vizij Tween Core (engine-agnostic)
//!
//! Frame-driven scheduler for float tweens, delays, frame waits and repeating
//! callbacks. A [`Scheduler`] owns a fixed table of slots; the host calls
//! [`Scheduler::advance`] (or [`Engine::advance`]) once per tick and every live
//! task takes exactly one step.
//!
//! ```
//! use std::{cell::Cell, rc::Rc};
//! use vizij_tween_core::Scheduler;
//!
//! let mut tweens = Scheduler::with_slots(1);
//! let value = Rc::new(Cell::new(0.0));
//! let v = value.clone();
//! tweens.lerp_float_in(1, 1.0, 0.0, 10.0, move |x| v.set(x), || {});
//! tweens.advance(0.5);
//! assert_eq!(value.get(), 5.0);
//! tweens.advance(0.5);
//! assert_eq!(value.get(), 10.0);
//! assert!(!tweens.is_updating(1));
//! ```

pub mod commands;
pub mod config;
pub mod engine;
pub mod error;
pub mod ids;
pub mod interp;
pub mod outputs;
pub mod scheduler;
pub mod task;
pub mod tasks;

// Re-exports for consumers (adapters)
pub use commands::CommandQueue;
pub use config::Config;
pub use engine::Engine;
pub use error::{Result, TweenError};
pub use ids::{OwnerId, TaskHandle};
pub use interp::Easing;
pub use outputs::{Outputs, TaskEvent};
pub use scheduler::{Scheduler, DEFAULT_SLOT};
pub use task::{Step, StepResult, TaskKind, TaskStatus, TaskValue, TimedTask};
pub use tasks::{Delay, FloatLerp, Repeater, WaitFrames};
