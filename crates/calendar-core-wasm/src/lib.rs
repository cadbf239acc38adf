//! WASM bindings for calendar-core.
//!
//! Exposes grid arithmetic, event placement and validation to a JavaScript
//! rendering layer via `wasm-bindgen`. Complex values cross the boundary as
//! JSON strings.
//!
//! ## Build process
//!
//! ```sh
//! cargo build -p calendar-core-wasm --target wasm32-unknown-unknown --release
//! wasm-bindgen --target web --out-dir packages/calendar-core-js/wasm/ \
//!   target/wasm32-unknown-unknown/release/calendar_core_wasm.wasm
//! ```
//!
//! Each export is a thin wrapper over a plain Rust function returning
//! `Result<_, String>`, so the conversion logic is testable off-wasm.

use calendar_core::{CalendarConfig, Event, EventCandidate};
use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;

// ---------------------------------------------------------------------------
// Serde-friendly DTOs for crossing the WASM boundary as JSON
// ---------------------------------------------------------------------------

/// Event as sent from JavaScript. Timestamps are strings so that both
/// `datetime-local` values (no seconds) and full ISO timestamps are accepted.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct EventInput {
    id: String,
    title: String,
    #[serde(default)]
    description: Option<String>,
    start_date: String,
    end_date: String,
    #[serde(default)]
    color: Option<String>,
    #[serde(default)]
    category: Option<String>,
}

/// A partially filled form, as passed to `validateEvent`.
#[derive(Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
struct CandidateInput {
    title: Option<String>,
    description: Option<String>,
    start_date: Option<String>,
    end_date: Option<String>,
}

// ---------------------------------------------------------------------------
// Helpers: parse dates and event lists
// ---------------------------------------------------------------------------

fn parse_date(s: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|e| format!("Invalid date '{}': {}", s, e))
}

/// Parse a local timestamp, with or without seconds.
fn parse_datetime(s: &str) -> Result<NaiveDateTime, String> {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S")
        .or_else(|_| NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M"))
        .map_err(|e| format!("Invalid datetime '{}': {}", s, e))
}

impl TryFrom<EventInput> for Event {
    type Error = String;

    fn try_from(input: EventInput) -> Result<Self, Self::Error> {
        Ok(Event {
            id: input.id,
            title: input.title,
            description: input.description,
            start: parse_datetime(&input.start_date)?,
            end: parse_datetime(&input.end_date)?,
            color: input.color,
            category: input.category,
        })
    }
}

fn parse_event_json(json: &str) -> Result<Event, String> {
    let input: EventInput =
        serde_json::from_str(json).map_err(|e| format!("Invalid event JSON: {}", e))?;
    Event::try_from(input)
}

fn parse_events_json(json: &str) -> Result<Vec<Event>, String> {
    let inputs: Vec<EventInput> =
        serde_json::from_str(json).map_err(|e| format!("Invalid events JSON: {}", e))?;
    inputs.into_iter().map(Event::try_from).collect()
}

fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String, String> {
    serde_json::to_string(value).map_err(|e| format!("Serialization error: {}", e))
}

fn dates_json(dates: &[NaiveDate]) -> Result<String, String> {
    let strings: Vec<String> = dates.iter().map(NaiveDate::to_string).collect();
    to_json(&strings)
}

// ---------------------------------------------------------------------------
// Plain implementations
// ---------------------------------------------------------------------------

fn month_grid_impl(date: &str) -> Result<String, String> {
    dates_json(&calendar_core::month_grid(parse_date(date)?))
}

fn week_days_impl(date: &str) -> Result<String, String> {
    dates_json(&calendar_core::week_days(parse_date(date)?))
}

fn events_on_day_impl(events_json: &str, date: &str) -> Result<String, String> {
    let events = parse_events_json(events_json)?;
    to_json(&calendar_core::events_on_day(&events, parse_date(date)?))
}

fn events_in_hour_slot_impl(events_json: &str, date: &str, hour: u32) -> Result<String, String> {
    let events = parse_events_json(events_json)?;
    to_json(&calendar_core::events_in_hour_slot(
        &events,
        parse_date(date)?,
        hour,
    ))
}

fn sort_by_start_impl(events_json: &str) -> Result<String, String> {
    let events = parse_events_json(events_json)?;
    to_json(&calendar_core::sort_by_start(&events))
}

fn is_multi_day_impl(event_json: &str) -> Result<bool, String> {
    Ok(calendar_core::is_multi_day(&parse_event_json(event_json)?))
}

fn validate_event_impl(candidate_json: &str, config_json: Option<&str>) -> Result<String, String> {
    let input: CandidateInput = serde_json::from_str(candidate_json)
        .map_err(|e| format!("Invalid event JSON: {}", e))?;
    let candidate = EventCandidate {
        title: input.title,
        description: input.description,
        start: input.start_date.as_deref().map(parse_datetime).transpose()?,
        end: input.end_date.as_deref().map(parse_datetime).transpose()?,
    };
    let config = match config_json {
        Some(json) => CalendarConfig::from_json(json).map_err(|e| e.to_string())?,
        None => CalendarConfig::default(),
    };
    to_json(&calendar_core::Validator::new(&config).validate(&candidate))
}

fn days_between_impl(start: &str, end: &str) -> Result<f64, String> {
    Ok(calendar_core::days_between(parse_datetime(start)?, parse_datetime(end)?) as f64)
}

fn month_cells_impl(
    events_json: &str,
    date: &str,
    today: &str,
    visible: usize,
) -> Result<String, String> {
    let events = parse_events_json(events_json)?;
    let cells = calendar_core::view::month_cells(
        parse_date(date)?,
        &events,
        parse_date(today)?,
        visible,
    );
    to_json(&cells)
}

// ---------------------------------------------------------------------------
// WASM exports
// ---------------------------------------------------------------------------

fn js_err(message: String) -> JsValue {
    JsValue::from_str(&message)
}

/// The 42 dates (`YYYY-MM-DD`) of the month grid for `date`'s month.
#[wasm_bindgen(js_name = "monthGrid")]
pub fn month_grid(date: &str) -> Result<String, JsValue> {
    month_grid_impl(date).map_err(js_err)
}

/// The 7 dates of the Sunday-based week containing `date`.
#[wasm_bindgen(js_name = "weekDays")]
pub fn week_days(date: &str) -> Result<String, JsValue> {
    week_days_impl(date).map_err(js_err)
}

/// Events from `events_json` that overlap `date`, as a JSON array.
#[wasm_bindgen(js_name = "eventsOnDay")]
pub fn events_on_day(events_json: &str, date: &str) -> Result<String, JsValue> {
    events_on_day_impl(events_json, date).map_err(js_err)
}

/// Events from `events_json` starting on `date` during `hour`.
#[wasm_bindgen(js_name = "eventsInHourSlot")]
pub fn events_in_hour_slot(events_json: &str, date: &str, hour: u32) -> Result<String, JsValue> {
    events_in_hour_slot_impl(events_json, date, hour).map_err(js_err)
}

#[wasm_bindgen(js_name = "sortByStart")]
pub fn sort_by_start(events_json: &str) -> Result<String, JsValue> {
    sort_by_start_impl(events_json).map_err(js_err)
}

#[wasm_bindgen(js_name = "isMultiDay")]
pub fn is_multi_day(event_json: &str) -> Result<bool, JsValue> {
    is_multi_day_impl(event_json).map_err(js_err)
}

/// Validate a (possibly partial) event. Returns a JSON array of messages;
/// empty means valid. `config_json` overrides the default limits.
#[wasm_bindgen(js_name = "validateEvent")]
pub fn validate_event(candidate_json: &str, config_json: Option<String>) -> Result<String, JsValue> {
    validate_event_impl(candidate_json, config_json.as_deref()).map_err(js_err)
}

#[wasm_bindgen(js_name = "daysBetween")]
pub fn days_between(start: &str, end: &str) -> Result<f64, JsValue> {
    days_between_impl(start, end).map_err(js_err)
}

/// Month-view cells with placed events, today/current-month flags and
/// overflow counts.
#[wasm_bindgen(js_name = "monthCells")]
pub fn month_cells(
    events_json: &str,
    date: &str,
    today: &str,
    visible: usize,
) -> Result<String, JsValue> {
    month_cells_impl(events_json, date, today, visible).map_err(js_err)
}
