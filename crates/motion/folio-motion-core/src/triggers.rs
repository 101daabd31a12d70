//! Trigger glue: turns page signals into runs.
//!
//! - Section entered view -> stat counters count up from 0, staggered.
//! - Scroll-to-top pressed -> viewport offset eases back to 0.

use hashbrown::HashSet;
use serde::{Deserialize, Serialize};

use crate::animator::Animator;
use crate::error::MotionError;
use crate::ids::{RunId, SinkId};
use crate::run::InterpolationRun;
use crate::sink::SinkKind;

/// One stat display inside a revealed section, with its raw goal attribute.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CounterTarget {
    pub sink: SinkId,
    pub goal: String,
}

impl CounterTarget {
    pub fn new(sink: SinkId, goal: impl Into<String>) -> Self {
        Self {
            sink,
            goal: goal.into(),
        }
    }
}

/// Parse a goal the way the page's integer attribute parse reads it: leading
/// whitespace, an optional sign, then as many decimal digits as present.
/// Trailing text is ignored ("250+" is 250). Out-of-range values saturate.
pub fn parse_goal(raw: &str) -> crate::Result<i64> {
    let s = raw.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let mut seen = false;
    let mut n: i64 = 0;
    for b in digits.bytes().take_while(u8::is_ascii_digit) {
        seen = true;
        let d = i64::from(b - b'0');
        n = if negative {
            n.saturating_mul(10).saturating_sub(d)
        } else {
            n.saturating_mul(10).saturating_add(d)
        };
    }
    if !seen {
        return Err(MotionError::InvalidGoal { raw: raw.to_string() });
    }
    Ok(n)
}

/// Starts counters for revealed sections, at most once per display.
#[derive(Debug, Default)]
pub struct CounterTrigger {
    started: HashSet<SinkId>,
}

impl CounterTrigger {
    pub fn new() -> Self {
        Self::default()
    }

    /// A section holding `targets` entered the viewport.
    ///
    /// Target `i` starts after `i * counter_stagger_ms`. Displays that already
    /// ran are left alone; malformed goals and unknown sinks are logged and
    /// skipped so the remaining targets still animate.
    pub fn section_entered(&mut self, animator: &Animator, targets: &[CounterTarget]) -> Vec<RunId> {
        let cfg = animator.config();
        let mut runs = Vec::with_capacity(targets.len());
        for (i, target) in targets.iter().enumerate() {
            if self.started.contains(&target.sink) {
                continue;
            }
            let goal = match parse_goal(&target.goal) {
                Ok(goal) => goal,
                Err(e) => {
                    log::warn!("counter {:?} skipped ({}): {e}", target.sink, e.category());
                    continue;
                }
            };
            let run = InterpolationRun::counter(goal, cfg.counter_duration_ms)
                .with_delay(i as f64 * cfg.counter_stagger_ms);
            match animator.start(target.sink, run) {
                Ok(id) => {
                    self.started.insert(target.sink);
                    runs.push(id);
                }
                Err(e) => log::warn!(
                    "counter {:?} not started ({}): {e}",
                    target.sink,
                    e.category()
                ),
            }
        }
        runs
    }

    pub fn has_started(&self, sink: SinkId) -> bool {
        self.started.contains(&sink)
    }

    /// Allow `sink` to count again on its next reveal.
    pub fn reset(&mut self, sink: SinkId) -> bool {
        self.started.remove(&sink)
    }
}

/// Ease the viewport from `current_offset` back to the top.
///
/// `sink` must be a scroll position; a stat display is rejected.
pub fn scroll_to_top(animator: &Animator, sink: SinkId, current_offset: f64) -> crate::Result<RunId> {
    if animator.sink_kind(sink)? != SinkKind::ScrollPosition {
        return Err(MotionError::WrongSinkKind {
            sink,
            expected: SinkKind::ScrollPosition,
        });
    }
    let cfg = animator.config();
    animator.start(
        sink,
        InterpolationRun::new(current_offset, 0.0, cfg.scroll_top_duration_ms),
    )
}
