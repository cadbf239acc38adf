//! Event records and the partial-update patch applied by the store.

use chrono::NaiveDateTime;
use serde::{Deserialize, Deserializer, Serialize};

/// A titled, time-bounded record displayed on the calendar.
///
/// Timestamps are wall-clock values with no zone attached. `end >= start` is
/// checked by the validator only; the store accepts whatever it is given.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "startDate")]
    pub start: NaiveDateTime,
    #[serde(rename = "endDate")]
    pub end: NaiveDateTime,
    /// Display tag only; no semantic constraint.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

impl Event {
    /// Build an event with only the required fields set.
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: None,
            start,
            end,
            color: None,
            category: None,
        }
    }
}

/// Field-wise replacement for an existing [`Event`].
///
/// `None` leaves the field untouched. For the optional event fields the inner
/// option distinguishes clearing (`Some(None)`) from setting
/// (`Some(Some(value))`). In JSON an absent key means "leave" and an explicit
/// `null` means "clear".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(
        default,
        deserialize_with = "present",
        skip_serializing_if = "Option::is_none"
    )]
    pub description: Option<Option<String>>,
    #[serde(rename = "startDate", default, skip_serializing_if = "Option::is_none")]
    pub start: Option<NaiveDateTime>,
    #[serde(rename = "endDate", default, skip_serializing_if = "Option::is_none")]
    pub end: Option<NaiveDateTime>,
    #[serde(
        default,
        deserialize_with = "present",
        skip_serializing_if = "Option::is_none"
    )]
    pub color: Option<Option<String>>,
    #[serde(
        default,
        deserialize_with = "present",
        skip_serializing_if = "Option::is_none"
    )]
    pub category: Option<Option<String>>,
}

impl EventPatch {
    /// A patch that replaces every field of the target with `event`'s values.
    ///
    /// The id is not part of a patch; the target keeps its own.
    pub fn replace_with(event: &Event) -> Self {
        Self {
            title: Some(event.title.clone()),
            description: Some(event.description.clone()),
            start: Some(event.start),
            end: Some(event.end),
            color: Some(event.color.clone()),
            category: Some(event.category.clone()),
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Return a copy of `event` with the set fields of this patch applied.
    pub fn apply(&self, event: &Event) -> Event {
        Event {
            id: event.id.clone(),
            title: self.title.clone().unwrap_or_else(|| event.title.clone()),
            description: merge(&self.description, &event.description),
            start: self.start.unwrap_or(event.start),
            end: self.end.unwrap_or(event.end),
            color: merge(&self.color, &event.color),
            category: merge(&self.category, &event.category),
        }
    }
}

fn merge(patch: &Option<Option<String>>, current: &Option<String>) -> Option<String> {
    match patch {
        Some(value) => value.clone(),
        None => current.clone(),
    }
}

/// Deserialize a present key (including `null`) as `Some(..)`; absent keys fall
/// back to `Default` via `#[serde(default)]`.
fn present<'de, D, T>(deserializer: D) -> std::result::Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}
