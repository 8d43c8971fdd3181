//! Core configuration for vizij-tween-core.

use serde::{Deserialize, Serialize};

use crate::error::{Result, TweenError};

/// Sizing for one scheduler.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Number of addressable slots in addition to the default slot 0.
    pub slots: usize,

    /// Maximum events retained per tick; extra events are dropped.
    pub max_events_per_tick: usize,
}

impl Config {
    /// Slot count of the shared scheduler returned by `Engine::global`.
    pub const GLOBAL_SLOTS: usize = 10;

    pub fn with_slots(slots: usize) -> Self {
        Self {
            slots,
            ..Self::default()
        }
    }

    /// Config used for the shared global scheduler.
    pub fn global() -> Self {
        Self::with_slots(Self::GLOBAL_SLOTS)
    }

    /// Total slot table length, including slot 0.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.slots + 1
    }

    /// Parse and validate a config from JSON. Missing fields fall back to defaults.
    pub fn from_json(text: &str) -> Result<Self> {
        let cfg: Config = serde_json::from_str(text)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<()> {
        if self.max_events_per_tick == 0 {
            return Err(TweenError::InvalidConfig(
                "max_events_per_tick must be greater than zero".into(),
            ));
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            slots: 0,
            max_events_per_tick: 1024,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capacity_reserves_default_slot() {
        assert_eq!(Config::default().capacity(), 1);
        assert_eq!(Config::with_slots(3).capacity(), 4);
        assert_eq!(Config::global().capacity(), Config::GLOBAL_SLOTS + 1);
    }

    #[test]
    fn from_json_fills_missing_fields() {
        let cfg = Config::from_json(r#"{ "slots": 4 }"#).expect("valid config");
        assert_eq!(cfg.slots, 4);
        assert_eq!(cfg.max_events_per_tick, 1024);
    }

    #[test]
    fn from_json_rejects_zero_event_budget() {
        let err = Config::from_json(r#"{ "slots": 1, "max_events_per_tick": 0 }"#)
            .expect_err("zero budget is invalid");
        assert!(matches!(err, TweenError::InvalidConfig(_)));
    }

    #[test]
    fn from_json_reports_parse_errors() {
        let err = Config::from_json("{ slots: ").expect_err("malformed json");
        assert!(matches!(err, TweenError::Config(_)));
    }
}
