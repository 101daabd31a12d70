//! Contact form checks and the simulated send.
//!
//! Rules (values are trimmed first):
//! - name and message must be non-empty
//! - email must look like `local@domain.tld` with no whitespace or extra `@`
//!
//! There is no network submission. A valid form goes through a fixed timeline:
//! sending (button disabled) -> success banner shown, form reset -> idle.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::config::PageConfig;

static EMAIL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern should compile")
});

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Name,
    Email,
    Message,
}

impl Field {
    pub const ALL: [Field; 3] = [Field::Name, Field::Email, Field::Message];

    /// Id of the inline error element for this field.
    pub fn error_id(self) -> &'static str {
        match self {
            Field::Name => "nameError",
            Field::Email => "emailError",
            Field::Message => "messageError",
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum FieldState {
    Valid,
    Invalid,
}

impl FieldState {
    #[inline]
    fn from_ok(ok: bool) -> Self {
        if ok {
            FieldState::Valid
        } else {
            FieldState::Invalid
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub message: String,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationReport {
    pub name: FieldState,
    pub email: FieldState,
    pub message: FieldState,
}

impl ValidationReport {
    pub fn state(&self, field: Field) -> FieldState {
        match field {
            Field::Name => self.name,
            Field::Email => self.email,
            Field::Message => self.message,
        }
    }

    pub fn is_valid(&self) -> bool {
        Field::ALL.iter().all(|f| self.state(*f) == FieldState::Valid)
    }

    pub fn invalid_fields(&self) -> Vec<Field> {
        Field::ALL
            .into_iter()
            .filter(|f| self.state(*f) == FieldState::Invalid)
            .collect()
    }
}

impl ContactForm {
    pub fn validate(&self) -> ValidationReport {
        let report = ValidationReport {
            name: FieldState::from_ok(!self.name.trim().is_empty()),
            email: FieldState::from_ok(EMAIL.is_match(self.email.trim())),
            message: FieldState::from_ok(!self.message.trim().is_empty()),
        };
        if !report.is_valid() {
            log::debug!("contact form rejected: {:?}", report.invalid_fields());
        }
        report
    }

    /// Clear all fields after a successful send.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Real-time check while typing: any non-blank input clears the field's error.
pub fn clears_error(value: &str) -> bool {
    !value.trim().is_empty()
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SubmissionPhase {
    /// Button disabled with a spinner label.
    Sending,
    /// Success banner visible, form reset, button restored.
    Succeeded,
    /// Banner hidden again.
    Idle,
}

impl SubmissionPhase {
    pub fn button_disabled(self) -> bool {
        self == SubmissionPhase::Sending
    }

    pub fn success_visible(self) -> bool {
        self == SubmissionPhase::Succeeded
    }

    /// Label for the submit button, given its resting label.
    pub fn button_label(self, original: &str) -> String {
        match self {
            SubmissionPhase::Sending => "Sending...".to_string(),
            _ => original.to_string(),
        }
    }
}

/// Fixed timeline of a simulated send, measured from the submit press.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SubmissionTimeline {
    pub submit_delay_ms: f64,
    pub success_visible_ms: f64,
}

impl SubmissionTimeline {
    pub fn new(cfg: &PageConfig) -> Self {
        Self {
            submit_delay_ms: cfg.submit_delay_ms,
            success_visible_ms: cfg.success_visible_ms,
        }
    }

    pub fn phase_at(&self, elapsed_ms: f64) -> SubmissionPhase {
        if elapsed_ms.is_nan() || elapsed_ms < self.submit_delay_ms {
            SubmissionPhase::Sending
        } else if elapsed_ms < self.submit_delay_ms + self.success_visible_ms {
            SubmissionPhase::Succeeded
        } else {
            SubmissionPhase::Idle
        }
    }

    /// Total time from submit press until the banner hides.
    pub fn total_ms(&self) -> f64 {
        self.submit_delay_ms + self.success_visible_ms
    }
}
