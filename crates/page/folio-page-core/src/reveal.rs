//! Reveal planning for a section that scrolled into view.
//!
//! The host's visibility observer reports a section; the plan says what to
//! change: mark it visible, fill its skill bars after a short delay, and hand
//! its stat counters to the motion core's counter trigger.

use folio_motion_core::CounterTarget;
use serde::{Deserialize, Serialize};

use crate::config::PageConfig;

/// Skill progress bar with its raw width attribute (percent).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillBar {
    pub bar: String,
    pub width: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RevealSection {
    pub id: String,
    #[serde(default)]
    pub skill_bars: Vec<SkillBar>,
    #[serde(default)]
    pub counters: Vec<CounterTarget>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SkillFill {
    pub bar: String,
    pub width_pct: f64,
    pub delay_ms: f64,
}

impl SkillFill {
    /// CSS width to set once the delay has passed.
    pub fn css_width(&self) -> String {
        format!("{}%", self.width_pct)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RevealPlan {
    /// Section that gets the `visible` class.
    pub section: String,
    pub skill_fills: Vec<SkillFill>,
    pub counters: Vec<CounterTarget>,
}

/// Build the reveal plan. Bars whose width is not a finite number are skipped.
pub fn plan_reveal(section: &RevealSection, cfg: &PageConfig) -> RevealPlan {
    let skill_fills = section
        .skill_bars
        .iter()
        .filter_map(|b| match b.width.trim().parse::<f64>() {
            Ok(w) if w.is_finite() => Some(SkillFill {
                bar: b.bar.clone(),
                width_pct: w,
                delay_ms: cfg.skill_fill_delay_ms,
            }),
            _ => {
                log::warn!("skill bar {:?} has unusable width {:?}", b.bar, b.width);
                None
            }
        })
        .collect();
    RevealPlan {
        section: section.id.clone(),
        skill_fills,
        counters: section.counters.clone(),
    }
}
