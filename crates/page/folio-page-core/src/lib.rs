//! Folio Page Core
//!
//! Page behaviour that does not animate through the motion core: navbar and
//! scroll-to-top visibility, parallax, active-link highlighting, the mobile
//! menu, contact-form checks with the simulated send, the star field and
//! reveal planning. Everything is a pure function or a small state machine;
//! the host owns the document and applies the results.

pub mod chrome;
pub mod config;
pub mod error;
pub mod form;
pub mod nav;
pub mod reveal;
pub mod sections;
pub mod stars;

pub use chrome::{loader_hidden, ScrollChrome};
pub use config::PageConfig;
pub use error::PageError;
pub use form::{
    clears_error, ContactForm, Field, FieldState, SubmissionPhase, SubmissionTimeline,
    ValidationReport,
};
pub use nav::{BarStyle, NavMenu};
pub use reveal::{plan_reveal, RevealPlan, RevealSection, SkillBar, SkillFill};
pub use sections::{active_section, nav_link_matches, SectionBounds};
pub use stars::{generate_stars, Star};

/// Page core result type
pub type Result<T> = core::result::Result<T, PageError>;
