//! Error types for the tween core.

use thiserror::Error;

use crate::ids::OwnerId;

/// Errors surfaced by the checked (`try_*`) scheduler APIs and config loading.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum TweenError {
    /// Slot index outside the capacity the scheduler was built with.
    #[error("slot {slot} is out of range (capacity {capacity})")]
    SlotOutOfRange { slot: usize, capacity: usize },

    #[error("unknown tween owner {0:?}")]
    UnknownOwner(OwnerId),

    #[error("invalid tween config: {0}")]
    InvalidConfig(String),

    #[error("tween config json: {0}")]
    Config(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, TweenError>;
