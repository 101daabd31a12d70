//! A single eased interpolation from `start` to `end`.
//!
//! Model:
//! - The first step (or an explicit `anchor`) pins `start_timestamp` to
//!   `now + delay_ms`; everything after is measured from that anchor.
//! - Raw progress is `elapsed / duration_ms` clamped to [0, 1], then eased with
//!   ease-out-cubic and blended linearly between the endpoints.
//! - Progress is a high-water mark, so output stays monotonic even if the host
//!   hands in an older timestamp. Once done, the run keeps returning `end`.

use serde::{Deserialize, Serialize};

use crate::interp::{ease_out_cubic, lerp, Rounding};

/// Output of one step.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Step {
    pub value: f64,
    pub done: bool,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct InterpolationRun {
    start: f64,
    end: f64,
    /// Zero means the run completes on its first step.
    duration_ms: f64,
    delay_ms: f64,
    rounding: Rounding,
    start_timestamp: Option<f64>,
    progress: f64,
    finished: bool,
}

impl InterpolationRun {
    /// Create a run with exact (unrounded) output and no delay.
    ///
    /// Malformed input is clamped rather than rejected: a non-finite endpoint
    /// collapses onto the other one, and a non-finite or non-positive duration
    /// turns the run into a single step that emits `end`.
    pub fn new(start: f64, end: f64, duration_ms: f64) -> Self {
        let (start, end) = match (start.is_finite(), end.is_finite()) {
            (true, true) => (start, end),
            (true, false) => (start, start),
            (false, true) => (end, end),
            (false, false) => (0.0, 0.0),
        };
        let duration_ms = if duration_ms.is_finite() && duration_ms > 0.0 {
            duration_ms
        } else {
            log::warn!("run duration {duration_ms} is not positive; completing immediately");
            0.0
        };
        Self {
            start,
            end,
            duration_ms,
            delay_ms: 0.0,
            rounding: Rounding::Exact,
            start_timestamp: None,
            progress: 0.0,
            finished: false,
        }
    }

    /// Counter run: `0 -> goal`, floored to whole numbers.
    pub fn counter(goal: i64, duration_ms: f64) -> Self {
        Self::new(0.0, goal as f64, duration_ms).with_rounding(Rounding::Floor)
    }

    /// Postpone the anchor by `delay_ms` after the first observed frame.
    pub fn with_delay(mut self, delay_ms: f64) -> Self {
        self.delay_ms = if delay_ms.is_finite() && delay_ms > 0.0 {
            delay_ms
        } else {
            0.0
        };
        self
    }

    pub fn with_rounding(mut self, rounding: Rounding) -> Self {
        self.rounding = rounding;
        self
    }

    #[inline]
    pub fn start(&self) -> f64 {
        self.start
    }

    #[inline]
    pub fn end(&self) -> f64 {
        self.end
    }

    #[inline]
    pub fn duration_ms(&self) -> f64 {
        self.duration_ms
    }

    #[inline]
    pub fn delay_ms(&self) -> f64 {
        self.delay_ms
    }

    #[inline]
    pub fn rounding(&self) -> Rounding {
        self.rounding
    }

    #[inline]
    pub fn start_timestamp(&self) -> Option<f64> {
        self.start_timestamp
    }

    #[inline]
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Pin the start timestamp on first call and return it.
    pub fn anchor(&mut self, now: f64) -> f64 {
        if let Some(t0) = self.start_timestamp {
            return t0;
        }
        let base = if now.is_finite() { now } else { 0.0 };
        let t0 = base + self.delay_ms;
        self.start_timestamp = Some(t0);
        t0
    }

    /// True while `now` is still inside the stagger delay. Anchors the run.
    pub fn is_waiting(&mut self, now: f64) -> bool {
        let t0 = self.anchor(now);
        !self.is_finished() && now < t0
    }

    /// Advance to `now` and return the value to apply.
    pub fn step(&mut self, now: f64) -> Step {
        if self.is_finished() {
            return self.final_step();
        }
        let t0 = self.anchor(now);
        let raw = if self.duration_ms <= 0.0 {
            1.0
        } else {
            let elapsed = now - t0;
            if elapsed.is_nan() {
                0.0
            } else {
                (elapsed / self.duration_ms).clamp(0.0, 1.0)
            }
        };
        self.progress = self.progress.max(raw);

        if self.progress >= 1.0 {
            self.finished = true;
            return self.final_step();
        }

        let eased = ease_out_cubic(self.progress);
        let (lo, hi) = if self.start <= self.end {
            (self.start, self.end)
        } else {
            (self.end, self.start)
        };
        let value = self
            .rounding
            .apply(lerp(self.start, self.end, eased))
            .clamp(lo, hi);
        Step { value, done: false }
    }

    #[inline]
    fn final_step(&self) -> Step {
        Step {
            value: self.end,
            done: true,
        }
    }
}
