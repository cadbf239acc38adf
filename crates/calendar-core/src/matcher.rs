//! Event placement: which events belong in which day cell or hour slot.
//!
//! Day membership is an inclusive interval-overlap test against
//! `[day 00:00:00, day 23:59:59]`, so a multi-day event shows up on every day
//! it touches. Hour-slot membership keys off the start time only.
//!
//! Nothing here mutates its input; filters return borrowed subsequences in
//! input order.

use std::borrow::Borrow;

use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime, Timelike};

use crate::event::Event;
use crate::grid::is_same_day;

/// Last second of a day, relative to midnight.
const LAST_SECOND: i64 = 24 * 60 * 60 - 1;

/// Events whose `[start, end]` overlaps the given calendar day.
///
/// An event is included iff `start <= day 23:59:59 && end >= day 00:00:00`.
pub fn events_on_day<E: Borrow<Event>>(events: &[E], day: NaiveDate) -> Vec<&Event> {
    let (day_start, day_end) = day_bounds(day);
    events
        .iter()
        .map(<E as Borrow<Event>>::borrow)
        .filter(|e| e.start <= day_end && e.end >= day_start)
        .collect()
}

/// Events that start on `day` within the given hour (0-23).
///
/// An event that starts at 09:30 and runs until 11:00 appears in the 9 o'clock
/// slot only.
pub fn events_in_hour_slot<E: Borrow<Event>>(
    events: &[E],
    day: NaiveDate,
    hour: u32,
) -> Vec<&Event> {
    events
        .iter()
        .map(<E as Borrow<Event>>::borrow)
        .filter(|e| is_same_day(&e.start, &day) && e.start.hour() == hour)
        .collect()
}

/// True when the event starts and ends on different calendar days.
pub fn is_multi_day(event: &Event) -> bool {
    !is_same_day(&event.start, &event.end)
}

/// Copy of `events` in ascending start order.
///
/// The sort is stable: events with identical starts keep their input order.
pub fn sort_by_start<E: Borrow<Event> + Clone>(events: &[E]) -> Vec<E> {
    let mut sorted = events.to_vec();
    sorted.sort_by_key(|e| <E as Borrow<Event>>::borrow(e).start);
    sorted
}

fn day_bounds(day: NaiveDate) -> (NaiveDateTime, NaiveDateTime) {
    let start = day.and_time(NaiveTime::MIN);
    (start, start + Duration::seconds(LAST_SECOND))
}
