//! Decorative star field behind the hero.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::config::PageConfig;

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Star {
    /// Horizontal position, percent of the container width, in [0, 100).
    pub left_pct: f64,
    /// Vertical position, percent of the container height, in [0, 100).
    pub top_pct: f64,
    /// Twinkle animation delay in seconds.
    pub animation_delay_s: f64,
}

impl Star {
    /// Inline style for the star element.
    pub fn style(&self) -> String {
        format!(
            "left: {}%; top: {}%; animation-delay: {}s;",
            self.left_pct, self.top_pct, self.animation_delay_s
        )
    }
}

/// Scatter `cfg.star_count` stars uniformly over the container.
pub fn generate_stars<R: Rng + ?Sized>(rng: &mut R, cfg: &PageConfig) -> Vec<Star> {
    let max_delay = if cfg.star_max_delay_s.is_finite() && cfg.star_max_delay_s > 0.0 {
        cfg.star_max_delay_s
    } else {
        0.0
    };
    (0..cfg.star_count)
        .map(|_| Star {
            left_pct: rng.gen::<f64>() * 100.0,
            top_pct: rng.gen::<f64>() * 100.0,
            animation_delay_s: rng.gen::<f64>() * max_delay,
        })
        .collect()
}
