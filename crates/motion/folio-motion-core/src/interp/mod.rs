//! Easing and interpolation helpers.
//!
//! Only the ease-out-cubic curve is registered; the page needs nothing else.

pub mod functions;

pub use functions::{ease_out_cubic, lerp, Rounding, EASING_EXPONENT};
