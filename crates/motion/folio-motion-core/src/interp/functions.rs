//! Interpolation helpers:
//! - ease_out_cubic (front-loaded timing curve)
//! - lerp (scalar blend)
//! - Rounding (per-sink output policy)

use serde::{Deserialize, Serialize};

/// Exponent of the ease-out curve.
pub const EASING_EXPONENT: i32 = 3;

/// Linear interpolation of scalars.
#[inline]
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

/// `1 - (1 - p)^3` with `p` clamped to [0, 1]. NaN maps to 0.
#[inline]
pub fn ease_out_cubic(p: f64) -> f64 {
    if p.is_nan() {
        return 0.0;
    }
    let p = p.clamp(0.0, 1.0);
    1.0 - (1.0 - p).powi(EASING_EXPONENT)
}

/// How an intermediate value is rounded before it reaches a sink.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Rounding {
    /// Round toward negative infinity (counter displays).
    Floor,
    /// Keep sub-pixel precision (scroll offsets).
    #[default]
    Exact,
}

impl Rounding {
    #[inline]
    pub fn apply(self, v: f64) -> f64 {
        match self {
            Rounding::Floor => v.floor(),
            Rounding::Exact => v,
        }
    }
}
