//! Active navigation link from scroll position.

use serde::{Deserialize, Serialize};

use crate::error::PageError;

/// A page section with an id, in document order.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SectionBounds {
    pub id: String,
    /// Offset of the section's top from the document top, in pixels.
    pub top: f64,
    #[serde(default)]
    pub height: f64,
}

impl SectionBounds {
    pub fn new(id: impl Into<String>, top: f64, height: f64) -> crate::Result<Self> {
        let id = id.into();
        if !top.is_finite() {
            return Err(PageError::InvalidSection { id });
        }
        Ok(Self { id, top, height })
    }
}

/// The last section (document order) whose top, less `offset`, is at or above `scroll_y`.
pub fn active_section<'a>(
    scroll_y: f64,
    sections: &'a [SectionBounds],
    offset: f64,
) -> Option<&'a str> {
    sections
        .iter()
        .rev()
        .find(|s| scroll_y >= s.top - offset)
        .map(|s| s.id.as_str())
}

/// Whether a nav link's `href` ("#about") points at section `id`.
pub fn nav_link_matches(href: &str, id: &str) -> bool {
    href.strip_prefix('#').unwrap_or(href) == id
}
