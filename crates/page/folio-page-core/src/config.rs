//! Page thresholds, delays and counts.

use serde::{Deserialize, Serialize};

use crate::error::PageError;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    /// A section becomes active this many pixels before its top reaches the viewport top.
    pub section_activation_offset: f64,
    /// Scroll-to-top button shows strictly above this offset.
    pub scroll_top_threshold: f64,
    /// Navbar gets its solid background strictly above this offset.
    pub navbar_scrolled_threshold: f64,
    pub parallax_factor: f64,
    /// Parallax stops updating at or beyond this offset.
    pub parallax_limit: f64,
    pub skill_fill_delay_ms: f64,
    pub loader_dismiss_delay_ms: f64,
    pub star_count: usize,
    pub star_max_delay_s: f64,
    pub submit_delay_ms: f64,
    pub success_visible_ms: f64,
    /// Fraction of a section that must be visible to reveal it.
    pub reveal_threshold: f64,
    /// Bottom root margin for reveal observation, in pixels (negative shrinks).
    pub reveal_root_margin_bottom: f64,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            section_activation_offset: 200.0,
            scroll_top_threshold: 300.0,
            navbar_scrolled_threshold: 50.0,
            parallax_factor: 0.3,
            parallax_limit: 800.0,
            skill_fill_delay_ms: 200.0,
            loader_dismiss_delay_ms: 500.0,
            star_count: 100,
            star_max_delay_s: 3.0,
            submit_delay_ms: 1500.0,
            success_visible_ms: 5000.0,
            reveal_threshold: 0.1,
            reveal_root_margin_bottom: -100.0,
        }
    }
}

impl PageConfig {
    /// Parse a (possibly partial) JSON config; missing fields take defaults.
    pub fn from_json(s: &str) -> crate::Result<Self> {
        serde_json::from_str(s).map_err(|e| PageError::Config {
            reason: e.to_string(),
        })
    }

    /// Root margin string for the host's visibility observer.
    pub fn observer_root_margin(&self) -> String {
        format!("0px 0px {}px 0px", self.reveal_root_margin_bottom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_margin_matches_page_default() {
        assert_eq!(
            PageConfig::default().observer_root_margin(),
            "0px 0px -100px 0px"
        );
    }

    #[test]
    fn partial_json() {
        let cfg = PageConfig::from_json(r#"{ "star_count": 12 }"#).unwrap();
        assert_eq!(cfg.star_count, 12);
        assert_eq!(cfg.scroll_top_threshold, 300.0);
    }

    #[test]
    fn malformed_json_is_config_error() {
        let err = PageConfig::from_json("{ star_count: ").unwrap_err();
        assert!(matches!(err, PageError::Config { .. }));
    }
}
