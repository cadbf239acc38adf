//! Editable form state for the create/edit modal.
//!
//! A draft holds raw field values as typed by the user. It only becomes an
//! [`Event`] through [`EventDraft::into_event`], which runs the validator,
//! trims text fields and assigns an id when the draft has none.

use chrono::{Duration, Local, NaiveDateTime};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::config::CalendarConfig;
use crate::error::{CalendarError, Result};
use crate::event::Event;
use crate::validator::{EventCandidate, FieldErrors, Validator};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventDraft {
    /// Set when editing an existing event.
    pub id: Option<String>,
    pub title: String,
    pub description: String,
    #[serde(rename = "startDate")]
    pub start: NaiveDateTime,
    #[serde(rename = "endDate")]
    pub end: NaiveDateTime,
    pub color: String,
    pub category: String,
}

impl EventDraft {
    /// An empty draft starting now on the local clock.
    pub fn blank(config: &CalendarConfig) -> Self {
        Self::prefilled(Local::now().naive_local(), config)
    }

    /// An empty draft starting at `start` and lasting the configured default
    /// duration.
    pub fn prefilled(start: NaiveDateTime, config: &CalendarConfig) -> Self {
        let end = start
            .checked_add_signed(Duration::minutes(config.default_duration_minutes))
            .unwrap_or(start);
        Self {
            id: None,
            title: String::new(),
            description: String::new(),
            start,
            end,
            color: config.default_color.clone(),
            category: String::new(),
        }
    }

    /// A draft for editing `event`. Missing colour falls back to the default.
    pub fn from_event(event: &Event, config: &CalendarConfig) -> Self {
        Self {
            id: Some(event.id.clone()),
            title: event.title.clone(),
            description: event.description.clone().unwrap_or_default(),
            start: event.start,
            end: event.end,
            color: event
                .color
                .clone()
                .unwrap_or_else(|| config.default_color.clone()),
            category: event.category.clone().unwrap_or_default(),
        }
    }

    pub fn candidate(&self) -> EventCandidate {
        EventCandidate {
            title: Some(self.title.clone()),
            description: non_empty(&self.description),
            start: Some(self.start),
            end: Some(self.end),
        }
    }

    pub fn field_errors(&self, validator: &Validator) -> FieldErrors {
        validator.field_errors(&self.candidate())
    }

    /// Validate and convert into an event.
    ///
    /// # Errors
    /// Returns `CalendarError::Validation` with every rule violation when the
    /// draft is not valid.
    pub fn into_event(self, validator: &Validator, config: &CalendarConfig) -> Result<Event> {
        let errors = validator.validate(&self.candidate());
        if !errors.is_empty() {
            return Err(CalendarError::Validation(errors));
        }

        let id = self
            .id
            .unwrap_or_else(|| format!("{}-{}", config.id_prefix, Uuid::new_v4()));

        Ok(Event {
            id,
            title: self.title.trim().to_string(),
            description: non_empty(self.description.trim()),
            start: self.start,
            end: self.end,
            color: non_empty(&self.color),
            category: non_empty(self.category.trim()),
        })
    }
}

fn non_empty(s: &str) -> Option<String> {
    (!s.is_empty()).then(|| s.to_string())
}
