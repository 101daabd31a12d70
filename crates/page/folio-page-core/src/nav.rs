//! Mobile navigation menu and its hamburger icon.

use serde::{Deserialize, Serialize};

/// Inline style for one hamburger bar.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct BarStyle {
    pub transform: &'static str,
    pub opacity: &'static str,
}

const CLOSED: [BarStyle; 3] = [
    BarStyle { transform: "none", opacity: "1" },
    BarStyle { transform: "none", opacity: "1" },
    BarStyle { transform: "none", opacity: "1" },
];

// Top and bottom bars cross into an X, middle bar fades out.
const OPEN: [BarStyle; 3] = [
    BarStyle {
        transform: "rotate(45deg) translate(5px, 5px)",
        opacity: "1",
    },
    BarStyle { transform: "none", opacity: "0" },
    BarStyle {
        transform: "rotate(-45deg) translate(7px, -6px)",
        opacity: "1",
    },
];

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavMenu {
    pub open: bool,
}

impl NavMenu {
    pub fn new() -> Self {
        Self::default()
    }

    /// Hamburger pressed. Returns the new open state.
    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    /// A nav link was followed.
    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn hamburger(&self) -> [BarStyle; 3] {
        if self.open {
            OPEN
        } else {
            CLOSED
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_and_close() {
        let mut m = NavMenu::new();
        assert!(m.toggle());
        assert_eq!(m.hamburger()[1].opacity, "0");
        assert_eq!(m.hamburger()[2].transform, "rotate(-45deg) translate(7px, -6px)");
        m.close();
        assert!(!m.open);
        assert_eq!(m.hamburger(), CLOSED);
        assert!(m.toggle());
        assert!(!m.toggle());
    }
}
