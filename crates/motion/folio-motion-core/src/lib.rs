//! Folio Motion Core (engine-agnostic)
//!
//! Drives the page's two eased animations: stat counters that count up when
//! their section scrolls into view, and the smooth "scroll to top" return.
//! Hosts supply timestamps through a [`FrameScheduler`] and observe values
//! through [`Sink`]s; nothing here touches a document directly.

pub mod animator;
pub mod config;
pub mod error;
pub mod ids;
pub mod interp;
pub mod outputs;
pub mod run;
pub mod scheduler;
pub mod sink;
pub mod triggers;

// Re-exports for consumers (adapters)
pub use animator::Animator;
pub use config::MotionConfig;
pub use error::MotionError;
pub use ids::{RunId, SinkId};
pub use interp::{ease_out_cubic, lerp, Rounding};
pub use outputs::MotionEvent;
pub use run::{InterpolationRun, Step};
pub use scheduler::{FrameCallback, FrameScheduler, ImmediateScheduler, ManualScheduler};
pub use sink::{NumericDisplay, ScrollPosition, Sink, SinkKind, SinkValue};
pub use triggers::{parse_goal, scroll_to_top, CounterTarget, CounterTrigger};

/// Motion core result type
pub type Result<T> = core::result::Result<T, MotionError>;
