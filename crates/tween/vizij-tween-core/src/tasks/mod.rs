//! Built-in task variants.

pub mod delay;
pub mod frames;
pub mod lerp;
pub mod repeater;

pub use delay::Delay;
pub use frames::WaitFrames;
pub use lerp::FloatLerp;
pub use repeater::Repeater;
