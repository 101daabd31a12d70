//! Core configuration for folio-motion-core.

use serde::{Deserialize, Serialize};

use crate::error::MotionError;

/// Durations and buffer sizing for the animator.
/// The easing exponent is fixed (cubic) and deliberately not configurable.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MotionConfig {
    /// Length of a stat counter run.
    pub counter_duration_ms: f64,
    /// Extra start delay per counter position within one section.
    pub counter_stagger_ms: f64,
    /// Length of the smooth scroll back to the top.
    pub scroll_top_duration_ms: f64,
    /// Maximum retained events before the oldest are dropped.
    pub max_events: usize,
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            counter_duration_ms: 2000.0,
            counter_stagger_ms: 100.0,
            scroll_top_duration_ms: 1000.0,
            max_events: 1024,
        }
    }
}

impl MotionConfig {
    /// Parse a (possibly partial) JSON config; missing fields take defaults.
    pub fn from_json(s: &str) -> crate::Result<Self> {
        serde_json::from_str(s).map_err(|e| MotionError::Config {
            reason: e.to_string(),
        })
    }
}
