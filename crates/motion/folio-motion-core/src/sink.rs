//! Sinks: the single destination each run writes to.
//!
//! Adapters implement [`Sink`] over host objects (a stat element, the
//! window scroll offset). The built-in sinks keep the last write so tests and
//! headless hosts can observe output without a page.

use std::cell::RefCell;
use std::rc::Rc;

use serde::{Deserialize, Serialize};

use crate::interp::Rounding;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SinkKind {
    /// Integer rendered as text.
    NumericDisplay,
    /// Vertical viewport offset in pixels.
    ScrollPosition,
}

impl SinkKind {
    /// Rounding applied to intermediate values written to this kind of sink.
    #[inline]
    pub fn rounding(self) -> Rounding {
        match self {
            SinkKind::NumericDisplay => Rounding::Floor,
            SinkKind::ScrollPosition => Rounding::Exact,
        }
    }

    #[inline]
    pub fn value(self, v: f64) -> SinkValue {
        match self {
            SinkKind::NumericDisplay => SinkValue::Integer(v as i64),
            SinkKind::ScrollPosition => SinkValue::Offset(v),
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum SinkValue {
    Integer(i64),
    Offset(f64),
}

impl SinkValue {
    /// Text form written into a display.
    pub fn to_text(&self) -> String {
        match self {
            SinkValue::Integer(n) => n.to_string(),
            SinkValue::Offset(v) => v.to_string(),
        }
    }

    #[inline]
    pub fn as_f64(&self) -> f64 {
        match self {
            SinkValue::Integer(n) => *n as f64,
            SinkValue::Offset(v) => *v,
        }
    }
}

/// Capability to accept one value per animation step.
///
/// `kind` is read once at registration. `write` runs with the animator
/// released, so it may call back into it.
pub trait Sink {
    fn kind(&self) -> SinkKind;
    fn write(&mut self, value: SinkValue);
}

/// Shared sinks let the host keep a handle while the animator writes.
impl<S: Sink> Sink for Rc<RefCell<S>> {
    fn kind(&self) -> SinkKind {
        self.borrow().kind()
    }

    fn write(&mut self, value: SinkValue) {
        self.borrow_mut().write(value);
    }
}

/// Headless stat display: keeps the rendered text.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct NumericDisplay {
    pub text: String,
    pub writes: usize,
}

impl NumericDisplay {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Sink for NumericDisplay {
    fn kind(&self) -> SinkKind {
        SinkKind::NumericDisplay
    }

    fn write(&mut self, value: SinkValue) {
        self.text = value.to_text();
        self.writes += 1;
    }
}

/// Headless viewport: keeps the vertical offset.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ScrollPosition {
    pub offset: f64,
    pub writes: usize,
}

impl ScrollPosition {
    pub fn new(offset: f64) -> Self {
        Self { offset, writes: 0 }
    }
}

impl Sink for ScrollPosition {
    fn kind(&self) -> SinkKind {
        SinkKind::ScrollPosition
    }

    fn write(&mut self, value: SinkValue) {
        self.offset = value.as_f64();
        self.writes += 1;
    }
}
