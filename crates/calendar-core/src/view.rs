//! Cell and slot view models for the month and week views.
//!
//! These bundle the grid dates with the events placed on them so a renderer
//! only has to draw. Flags such as "today" and "current month" are computed
//! here from the grid, not stored on the events.

use std::borrow::Borrow;
use std::ops::Range;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::Serialize;

use crate::error::{CalendarError, Result};
use crate::event::Event;
use crate::grid::{is_same_day, is_same_month, month_grid, week_days, WEEK_DAYS};
use crate::matcher::{events_in_hour_slot, events_on_day};

/// Hour rows in the week view.
pub const HOURS_PER_DAY: u32 = 24;

/// One day cell in the month view.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthCell<'a> {
    pub date: NaiveDate,
    pub is_today: bool,
    /// False for the leading/trailing days borrowed from adjacent months.
    pub is_current_month: bool,
    /// Events to draw, at most `visible` of them, in input order.
    pub events: Vec<&'a Event>,
    /// Events on this day that did not fit ("+N more").
    pub overflow: usize,
}

/// The 42 month-view cells for `reference`'s month.
///
/// Each cell lists the events overlapping its day, truncated to `visible`.
pub fn month_cells<E: Borrow<Event>>(
    reference: NaiveDate,
    events: &[E],
    today: NaiveDate,
    visible: usize,
) -> Vec<MonthCell<'_>> {
    month_grid(reference)
        .into_iter()
        .map(|date| {
            let mut day_events = events_on_day(events, date);
            let overflow = day_events.len().saturating_sub(visible);
            day_events.truncate(visible);
            MonthCell {
                date,
                is_today: is_same_day(&date, &today),
                is_current_month: is_same_month(&date, &reference),
                events: day_events,
                overflow,
            }
        })
        .collect()
}

/// Hours shown as rows in the week view.
pub fn hour_slots() -> Range<u32> {
    0..HOURS_PER_DAY
}

/// Start time of the week-view slot at (`day`, `hour`).
///
/// # Errors
/// Returns `CalendarError::InvalidHour` if `hour` is 24 or more.
pub fn slot_start(day: NaiveDate, hour: u32) -> Result<NaiveDateTime> {
    NaiveTime::from_hms_opt(hour, 0, 0)
        .map(|time| day.and_time(time))
        .ok_or(CalendarError::InvalidHour(hour))
}

/// One hour row of the week view: the events starting in that hour, per day.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeekRow<'a> {
    pub hour: u32,
    pub days: [Vec<&'a Event>; WEEK_DAYS],
}

/// The 24 hour rows for the week containing `reference`.
pub fn week_rows<E: Borrow<Event>>(reference: NaiveDate, events: &[E]) -> Vec<WeekRow<'_>> {
    let days = week_days(reference);
    hour_slots()
        .map(|hour| WeekRow {
            hour,
            days: days.map(|day| events_in_hour_slot(events, day, hour)),
        })
        .collect()
}
