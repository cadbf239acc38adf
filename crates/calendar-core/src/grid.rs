//! Month and week grid arithmetic.
//!
//! The month view is always a fixed 6×7 grid that starts on the Sunday on or
//! before the 1st of the month, so leading and trailing days from the
//! neighbouring months fill the gaps. Cells carry no "other month" flag;
//! callers compare months with [`is_same_month`].
//!
//! Every function here is pure. chrono dates are `Copy`, so nothing is ever
//! shifted in place. Near the ends of chrono's date range the grids saturate:
//! cells that would fall outside the range repeat `NaiveDate::MIN` or
//! `NaiveDate::MAX` instead of panicking.

use chrono::{Datelike, Days, Duration, Local, Months, NaiveDate, NaiveDateTime, NaiveTime};

/// Cells in a month grid (6 weeks of 7 days).
pub const MONTH_GRID_CELLS: usize = 42;

/// Days in a week row.
pub const WEEK_DAYS: usize = 7;

/// The 42 consecutive days displayed for `reference`'s month.
///
/// The first cell is the Sunday on or before the 1st of the month.
pub fn month_grid(reference: NaiveDate) -> [NaiveDate; MONTH_GRID_CELLS] {
    let first = first_of_month(reference);
    let start = sunday_on_or_before(first);
    std::array::from_fn(|i| forward(start, i as u64))
}

/// The 7 days of the Sunday-based week containing `reference`.
pub fn week_days(reference: NaiveDate) -> [NaiveDate; WEEK_DAYS] {
    let start = sunday_on_or_before(reference);
    std::array::from_fn(|i| forward(start, i as u64))
}

/// True when both values fall on the same calendar day. Time of day is ignored.
pub fn is_same_day<A: Datelike, B: Datelike>(a: &A, b: &B) -> bool {
    a.year() == b.year() && a.month() == b.month() && a.day() == b.day()
}

/// True when both values fall in the same month of the same year.
pub fn is_same_month<A: Datelike, B: Datelike>(a: &A, b: &B) -> bool {
    a.year() == b.year() && a.month() == b.month()
}

/// Whole days from `start` to `end`, rounded toward negative infinity.
///
/// 23 hours is 0 days; -1 hour is -1 day.
pub fn days_between(start: NaiveDateTime, end: NaiveDateTime) -> i64 {
    let delta = end - start;
    let days = delta.num_days();
    // num_days truncates toward zero; step down for a negative remainder.
    if delta < Duration::days(days) {
        days - 1
    } else {
        days
    }
}

/// Number of days in `date`'s month.
pub fn days_in_month<D: Datelike>(date: &D) -> u32 {
    NaiveDate::from_ymd_opt(date.year(), date.month(), 1)
        .and_then(|first| first.checked_add_months(Months::new(1)))
        .and_then(|next| next.pred_opt())
        .map_or(31, |last| last.day())
}

/// First day of the month `months` away from `date`'s month.
///
/// Returns `None` only when the result would fall outside chrono's
/// representable range.
pub fn add_months(date: NaiveDate, months: i32) -> Option<NaiveDate> {
    let first = first_of_month(date);
    let delta = Months::new(months.unsigned_abs());
    if months >= 0 {
        first.checked_add_months(delta)
    } else {
        first.checked_sub_months(delta)
    }
}

/// Today's date on the local clock.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// True when `date` falls on `today`. The clock is passed in so callers (and
/// tests) decide what "today" means.
pub fn is_today<D: Datelike>(date: &D, today: NaiveDate) -> bool {
    is_same_day(date, &today)
}

/// Header label for a month view, e.g. "November 2025".
pub fn format_month_year(date: NaiveDate) -> String {
    date.format("%B %Y").to_string()
}

/// 12-hour clock label, e.g. "09:00 AM".
pub fn format_time(time: NaiveTime) -> String {
    time.format("%I:%M %p").to_string()
}

fn first_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

fn sunday_on_or_before(date: NaiveDate) -> NaiveDate {
    let back = Days::new(u64::from(date.weekday().num_days_from_sunday()));
    date.checked_sub_days(back).unwrap_or(NaiveDate::MIN)
}

fn forward(date: NaiveDate, days: u64) -> NaiveDate {
    date.checked_add_days(Days::new(days)).unwrap_or(NaiveDate::MAX)
}
