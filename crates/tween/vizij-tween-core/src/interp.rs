//! Interpolation helpers:
//! - lerp_f32 (linear)
//! - smoothstep (cubic ease with zero slope at both ends)
//! - Easing selector used by float tweens

use serde::{Deserialize, Serialize};

/// Relative tolerance applied when comparing accumulated time against a
/// threshold. Sums of f32 frame deltas rarely land exactly on the target.
pub const TIME_EPSILON: f32 = 1e-5;

/// Linear interpolation of scalars.
#[inline]
pub fn lerp_f32(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Smoothstep easing of a normalized fraction: 3t² − 2t³ with t clamped to [0, 1].
#[inline]
pub fn smoothstep(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}

/// True once `elapsed` has reached `target`, allowing a shortfall of
/// [`TIME_EPSILON`] times the target. A positive target is never reached
/// with zero elapsed time.
#[inline]
pub fn reached(elapsed: f32, target: f32) -> bool {
    elapsed >= target - TIME_EPSILON * target.abs()
}

/// Number of whole `interval`s contained in `elapsed` under the same
/// tolerance as [`reached`]. `interval` must be positive.
#[inline]
pub fn whole_intervals(elapsed: f32, interval: f32) -> f32 {
    (elapsed / (interval * (1.0 - TIME_EPSILON))).floor().max(0.0)
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Easing {
    #[default]
    Linear,
    SmoothStep,
}

impl Easing {
    /// Interpolate `a → b` at fraction `t` using this easing.
    #[inline]
    pub fn apply(self, a: f32, b: f32, t: f32) -> f32 {
        match self {
            Easing::Linear => lerp_f32(a, b, t),
            Easing::SmoothStep => lerp_f32(a, b, smoothstep(t)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn smoothstep_endpoints_and_midpoint() {
        assert_eq!(smoothstep(0.0), 0.0);
        assert_eq!(smoothstep(1.0), 1.0);
        assert!((smoothstep(0.5) - 0.5).abs() < 1e-6);
        // clamped outside [0, 1]
        assert_eq!(smoothstep(-1.0), 0.0);
        assert_eq!(smoothstep(2.0), 1.0);
    }

    #[test]
    fn smoothstep_is_flat_near_edges() {
        // slower than linear near 0, faster near the middle
        assert!(smoothstep(0.1) < 0.1);
        assert!(smoothstep(0.9) > 0.9);
    }

    #[test]
    fn reached_tolerates_float_drift() {
        let mut acc = 0.0f32;
        for _ in 0..10 {
            acc += 0.1;
        }
        assert!(reached(acc, 1.0));
        assert!(!reached(0.9, 1.0));
    }

    #[test]
    fn tolerance_scales_with_target() {
        assert!(!reached(0.0, 5e-6));
        assert!(reached(5e-6, 5e-6));
        assert!(reached(0.0, 0.0));
        assert!(reached(999.995, 1000.0));
        assert!(!reached(999.9, 1000.0));
    }

    #[test]
    fn whole_intervals_counts_crossings() {
        assert_eq!(whole_intervals(0.0, 1.0), 0.0);
        assert_eq!(whole_intervals(1.6, 0.5), 3.0);
        assert_eq!(whole_intervals(0.99999994, 1.0), 1.0);
        assert_eq!(whole_intervals(0.0, 5e-6), 0.0);
    }

    #[test]
    fn easing_apply_linear_matches_lerp() {
        assert_eq!(Easing::Linear.apply(2.0, 4.0, 0.25), lerp_f32(2.0, 4.0, 0.25));
        assert_eq!(Easing::SmoothStep.apply(2.0, 4.0, 0.0), 2.0);
        assert_eq!(Easing::SmoothStep.apply(2.0, 4.0, 1.0), 4.0);
    }
}
