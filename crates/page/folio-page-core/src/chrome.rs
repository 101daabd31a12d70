//! Scroll-derived chrome: navbar background, scroll-to-top button, hero parallax.

use serde::{Deserialize, Serialize};

use crate::config::PageConfig;

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScrollChrome {
    pub navbar_scrolled: bool,
    pub scroll_top_visible: bool,
    /// Hero translateY in pixels. `None` past the parallax limit: the host
    /// leaves the last transform in place.
    pub parallax_offset: Option<f64>,
}

impl ScrollChrome {
    /// Chrome state for a vertical scroll offset.
    pub fn at(scroll_y: f64, cfg: &PageConfig) -> Self {
        let y = if scroll_y.is_finite() { scroll_y } else { 0.0 };
        Self {
            navbar_scrolled: y > cfg.navbar_scrolled_threshold,
            scroll_top_visible: y > cfg.scroll_top_threshold,
            parallax_offset: (y < cfg.parallax_limit).then(|| y * cfg.parallax_factor),
        }
    }

    /// CSS transform for the hero image, if it should change.
    pub fn parallax_transform(&self) -> Option<String> {
        self.parallax_offset.map(|px| format!("translateY({px}px)"))
    }
}

/// Whether the loading screen should be hidden `since_load_ms` after the load event.
pub fn loader_hidden(since_load_ms: f64, cfg: &PageConfig) -> bool {
    since_load_ms >= cfg.loader_dismiss_delay_ms
}
