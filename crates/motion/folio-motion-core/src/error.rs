//! Error types for the motion core

use serde::{Deserialize, Serialize};

use crate::ids::SinkId;
use crate::sink::SinkKind;

/// Failures on host-identified input. Interpolation itself never fails.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[non_exhaustive]
pub enum MotionError {
    /// No sink registered under this id
    #[error("Sink not found: {sink:?}")]
    UnknownSink { sink: SinkId },

    /// Sink registered with a kind the operation cannot drive
    #[error("Sink {sink:?} is not a {expected:?}")]
    WrongSinkKind { sink: SinkId, expected: SinkKind },

    /// Counter goal text without a leading integer
    #[error("Invalid counter goal: {raw:?}")]
    InvalidGoal { raw: String },

    /// Configuration could not be parsed
    #[error("Config error: {reason}")]
    Config { reason: String },
}

impl MotionError {
    /// Get error category for logging
    #[inline]
    pub fn category(&self) -> &'static str {
        match self {
            Self::UnknownSink { .. } | Self::WrongSinkKind { .. } => "sink",
            Self::InvalidGoal { .. } => "validation",
            Self::Config { .. } => "config",
        }
    }
}
