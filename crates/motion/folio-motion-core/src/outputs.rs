//! Output contracts from the animator.
//!
//! Values go straight to sinks each frame; events are the discrete lifecycle
//! signals hosts may drain and forward.

use serde::{Deserialize, Serialize};

use crate::ids::{RunId, SinkId};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[non_exhaustive]
pub enum MotionEvent {
    RunStarted {
        sink: SinkId,
        run: RunId,
        start: f64,
        end: f64,
        duration_ms: f64,
        delay_ms: f64,
    },
    /// A newer run took over the sink before this one finished.
    RunSuperseded {
        sink: SinkId,
        run: RunId,
        by: RunId,
    },
    RunCancelled {
        sink: SinkId,
        run: RunId,
    },
    RunCompleted {
        sink: SinkId,
        run: RunId,
        value: f64,
    },
}
