//! Field-level validation for candidate events.
//!
//! Rules are checked independently (never short-circuited) and each produces
//! at most one message:
//!
//! 1. title missing or blank after trimming → "Title is required"
//! 2. title longer than the title limit
//! 3. description longer than the description limit
//! 4. end earlier than start
//!
//! Lengths are counted in characters, not bytes.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::config::CalendarConfig;
use crate::event::Event;

pub const TITLE_REQUIRED: &str = "Title is required";
pub const END_BEFORE_START: &str = "End date must be after start date";

/// A possibly incomplete event as submitted by a form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EventCandidate {
    pub title: Option<String>,
    pub description: Option<String>,
    #[serde(rename = "startDate")]
    pub start: Option<NaiveDateTime>,
    #[serde(rename = "endDate")]
    pub end: Option<NaiveDateTime>,
}

impl From<&Event> for EventCandidate {
    fn from(event: &Event) -> Self {
        Self {
            title: Some(event.title.clone()),
            description: event.description.clone(),
            start: Some(event.start),
            end: Some(event.end),
        }
    }
}

/// Messages keyed by the form field they belong to.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldErrors {
    pub title: Option<String>,
    pub description: Option<String>,
    #[serde(rename = "endDate")]
    pub end: Option<String>,
}

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.description.is_none() && self.end.is_none()
    }
}

/// Validation rules parameterised by the configured length limits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Validator {
    max_title_chars: usize,
    max_description_chars: usize,
}

impl Default for Validator {
    fn default() -> Self {
        Self::new(&CalendarConfig::default())
    }
}

impl Validator {
    pub fn new(config: &CalendarConfig) -> Self {
        Self {
            max_title_chars: config.max_title_chars,
            max_description_chars: config.max_description_chars,
        }
    }

    /// All rule violations for `candidate`, in rule order. Empty means valid.
    pub fn validate(&self, candidate: &EventCandidate) -> Vec<String> {
        let mut errors = Vec::new();

        if title_missing(candidate) {
            errors.push(TITLE_REQUIRED.to_string());
        }
        if self.title_too_long(candidate) {
            errors.push(self.title_length_message());
        }
        if self.description_too_long(candidate) {
            errors.push(self.description_length_message());
        }
        if end_before_start(candidate) {
            errors.push(END_BEFORE_START.to_string());
        }

        errors
    }

    /// Per-field messages for inline form display.
    ///
    /// The title field shows one message: "required" wins over "too long".
    pub fn field_errors(&self, candidate: &EventCandidate) -> FieldErrors {
        let title = if title_missing(candidate) {
            Some(TITLE_REQUIRED.to_string())
        } else if self.title_too_long(candidate) {
            Some(self.title_length_message())
        } else {
            None
        };

        FieldErrors {
            title,
            description: self
                .description_too_long(candidate)
                .then(|| self.description_length_message()),
            end: end_before_start(candidate).then(|| END_BEFORE_START.to_string()),
        }
    }

    fn title_too_long(&self, candidate: &EventCandidate) -> bool {
        candidate
            .title
            .as_deref()
            .is_some_and(|t| t.chars().count() > self.max_title_chars)
    }

    fn description_too_long(&self, candidate: &EventCandidate) -> bool {
        candidate
            .description
            .as_deref()
            .is_some_and(|d| d.chars().count() > self.max_description_chars)
    }

    fn title_length_message(&self) -> String {
        format!("Title must be {} characters or less", self.max_title_chars)
    }

    fn description_length_message(&self) -> String {
        format!(
            "Description must be {} characters or less",
            self.max_description_chars
        )
    }
}

/// Validate with the default limits (100-character title, 500-character
/// description).
pub fn validate(candidate: &EventCandidate) -> Vec<String> {
    Validator::default().validate(candidate)
}

fn title_missing(candidate: &EventCandidate) -> bool {
    candidate
        .title
        .as_deref()
        .map_or(true, |t| t.trim().is_empty())
}

fn end_before_start(candidate: &EventCandidate) -> bool {
    matches!((candidate.start, candidate.end), (Some(start), Some(end)) if end < start)
}
