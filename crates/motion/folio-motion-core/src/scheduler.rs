//! Frame scheduler port.
//!
//! The animator only ever asks for "call me before the next repaint". A
//! browser adapter forwards that to `requestAnimationFrame`; tests and
//! headless hosts use [`ManualScheduler`] and advance frames by hand.
//! [`ImmediateScheduler`] is for hosts with no frame clock at all.

use std::cell::RefCell;

/// Callback run once on the next frame with that frame's timestamp (ms).
pub type FrameCallback = Box<dyn FnOnce(f64)>;

pub trait FrameScheduler {
    /// Register `callback` to run once before the next rendering pass.
    fn schedule(&self, callback: FrameCallback);
}

/// Synchronous fake frame clock.
///
/// Callbacks registered while a frame is running are queued for the next
/// frame, matching how a display-refresh callback behaves.
#[derive(Default)]
pub struct ManualScheduler {
    queue: RefCell<Vec<FrameCallback>>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of callbacks waiting for the next frame.
    pub fn pending(&self) -> usize {
        self.queue.borrow().len()
    }

    /// Run every callback queued before this call with timestamp `now`.
    /// Returns how many callbacks ran.
    pub fn run_frame(&self, now: f64) -> usize {
        let due = std::mem::take(&mut *self.queue.borrow_mut());
        let n = due.len();
        for cb in due {
            cb(now);
        }
        n
    }

    /// Run frames every `interval_ms` starting at `from` until nothing is
    /// pending or `max_frames` have run. Returns the timestamp of the last frame.
    pub fn run_until_idle(&self, from: f64, interval_ms: f64, max_frames: usize) -> f64 {
        let mut now = from;
        for i in 0..max_frames {
            if self.pending() == 0 {
                break;
            }
            now = from + interval_ms * i as f64;
            self.run_frame(now);
        }
        now
    }
}

impl std::fmt::Debug for ManualScheduler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ManualScheduler")
            .field("pending", &self.pending())
            .finish()
    }
}

impl FrameScheduler for ManualScheduler {
    fn schedule(&self, callback: FrameCallback) {
        self.queue.borrow_mut().push(callback);
    }
}

/// Runs each callback at once with an infinite timestamp, so every run jumps
/// straight to its end value instead of waiting on frames that never come.
#[derive(Copy, Clone, Debug, Default)]
pub struct ImmediateScheduler;

impl FrameScheduler for ImmediateScheduler {
    fn schedule(&self, callback: FrameCallback) {
        callback(f64::INFINITY);
    }
}
