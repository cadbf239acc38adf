//! Tests for month/week grid arithmetic and date helpers.

use calendar_core::grid::{
    add_months, days_in_month, format_month_year, format_time, is_same_month, is_today,
    MONTH_GRID_CELLS,
};
use calendar_core::{days_between, is_same_day, month_grid, week_days};
use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime, NaiveTime, Weekday};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
    date(y, m, d).and_hms_opt(h, min, 0).unwrap()
}

// ---------------------------------------------------------------------------
// month_grid
// ---------------------------------------------------------------------------

#[test]
fn november_2025_grid_starts_on_last_sunday_of_october() {
    // Nov 1 2025 is a Saturday, so the grid opens on Sunday Oct 26.
    let grid = month_grid(date(2025, 11, 11));

    assert_eq!(grid.len(), MONTH_GRID_CELLS);
    assert_eq!(grid[0], date(2025, 10, 26));
    assert_eq!(grid[6], date(2025, 11, 1));
    assert_eq!(grid[41], date(2025, 12, 6));
}

#[test]
fn month_starting_on_sunday_has_no_leading_days() {
    // June 1 2025 is a Sunday.
    let grid = month_grid(date(2025, 6, 20));

    assert_eq!(grid[0], date(2025, 6, 1));
    assert_eq!(grid[41], date(2025, 7, 12));
}

#[test]
fn february_in_non_leap_year_still_fills_six_rows() {
    // Feb 2026 starts on a Sunday and has 28 days: two trailing weeks of March.
    let grid = month_grid(date(2026, 2, 14));

    assert_eq!(grid[0], date(2026, 2, 1));
    assert_eq!(grid[27], date(2026, 2, 28));
    assert_eq!(grid[28], date(2026, 3, 1));
    assert_eq!(grid[41], date(2026, 3, 14));
}

#[test]
fn grid_crosses_year_boundary() {
    // Jan 1 2026 is a Thursday.
    let grid = month_grid(date(2026, 1, 31));

    assert_eq!(grid[0], date(2025, 12, 28));
    assert_eq!(grid[4], date(2026, 1, 1));
}

#[test]
fn other_month_cells_are_detected_by_month_comparison() {
    let reference = date(2025, 11, 11);
    let grid = month_grid(reference);

    let in_month = grid.iter().filter(|d| is_same_month(*d, &reference)).count();
    assert_eq!(in_month, 30);
    assert!(!is_same_month(&grid[0], &reference));
}

// ---------------------------------------------------------------------------
// week_days
// ---------------------------------------------------------------------------

#[test]
fn week_of_a_tuesday_runs_sunday_to_saturday() {
    let week = week_days(date(2025, 11, 11));

    assert_eq!(week[0], date(2025, 11, 9));
    assert_eq!(week[0].weekday(), Weekday::Sun);
    assert_eq!(week[6], date(2025, 11, 15));
    assert_eq!(week[6].weekday(), Weekday::Sat);
}

#[test]
fn week_of_a_sunday_starts_on_that_sunday() {
    let week = week_days(date(2025, 11, 9));
    assert_eq!(week[0], date(2025, 11, 9));
}

#[test]
fn week_spanning_month_end() {
    let week = week_days(date(2025, 12, 31));

    assert_eq!(week[0], date(2025, 12, 28));
    assert_eq!(week[6], date(2026, 1, 3));
}

#[test]
fn grids_saturate_at_the_end_of_the_date_range() {
    let grid = month_grid(NaiveDate::MAX);
    assert_eq!(grid[0].weekday(), Weekday::Sun);
    assert!(grid[0] <= NaiveDate::MAX.with_day(1).unwrap());
    assert_eq!(grid[41], NaiveDate::MAX);
    assert!(grid.windows(2).all(|pair| pair[0] <= pair[1]));

    let week = week_days(NaiveDate::MAX);
    assert_eq!(week[6], NaiveDate::MAX);
    assert!(week.contains(&NaiveDate::MAX));
}

#[test]
fn grids_saturate_at_the_start_of_the_date_range() {
    let grid = month_grid(NaiveDate::MIN);
    assert_eq!(grid[0], NaiveDate::MIN);
    assert!(grid.windows(2).all(|pair| pair[0] <= pair[1]));

    let week = week_days(NaiveDate::MIN);
    assert_eq!(week[0], NaiveDate::MIN);
    assert!(week.contains(&NaiveDate::MIN));
}

// ---------------------------------------------------------------------------
// is_same_day / days_between
// ---------------------------------------------------------------------------

#[test]
fn same_day_ignores_time_of_day() {
    assert!(is_same_day(
        &at(2025, 11, 11, 0, 0),
        &at(2025, 11, 11, 23, 59)
    ));
    assert!(is_same_day(&at(2025, 11, 11, 9, 0), &date(2025, 11, 11)));
}

#[test]
fn same_day_requires_matching_month_and_year() {
    assert!(!is_same_day(&date(2025, 11, 11), &date(2025, 10, 11)));
    assert!(!is_same_day(&date(2025, 11, 11), &date(2024, 11, 11)));
    assert!(!is_same_day(&date(2025, 11, 11), &date(2025, 11, 12)));
}

#[test]
fn days_between_counts_whole_days() {
    assert_eq!(days_between(at(2025, 11, 11, 9, 0), at(2025, 11, 15, 9, 0)), 4);
    assert_eq!(days_between(at(2025, 11, 11, 9, 0), at(2025, 11, 12, 8, 59)), 0);
    assert_eq!(days_between(at(2025, 11, 11, 9, 0), at(2025, 11, 11, 9, 0)), 0);
}

#[test]
fn days_between_floors_negative_spans() {
    assert_eq!(days_between(at(2025, 11, 15, 9, 0), at(2025, 11, 11, 9, 0)), -4);
    // One hour backwards is still the previous whole day.
    assert_eq!(days_between(at(2025, 11, 11, 9, 0), at(2025, 11, 11, 8, 0)), -1);
}

#[test]
fn days_between_floors_sub_millisecond_spans() {
    let t = at(2025, 11, 11, 9, 0);
    assert_eq!(days_between(t, t - Duration::nanoseconds(1)), -1);
    assert_eq!(days_between(t, t + Duration::nanoseconds(1)), 0);
    assert_eq!(days_between(t, t - Duration::days(2) - Duration::nanoseconds(1)), -3);
}

// ---------------------------------------------------------------------------
// Supporting helpers
// ---------------------------------------------------------------------------

#[test]
fn days_in_month_handles_leap_february() {
    assert_eq!(days_in_month(&date(2024, 2, 10)), 29);
    assert_eq!(days_in_month(&date(2025, 2, 10)), 28);
    assert_eq!(days_in_month(&date(2025, 4, 1)), 30);
    assert_eq!(days_in_month(&date(2025, 12, 31)), 31);
}

#[test]
fn days_in_month_follows_gregorian_century_rules() {
    assert_eq!(days_in_month(&date(2000, 2, 1)), 29);
    assert_eq!(days_in_month(&date(1900, 2, 1)), 28);
    assert_eq!(days_in_month(&NaiveDate::MAX), 31);
}

#[test]
fn add_months_lands_on_the_first() {
    assert_eq!(add_months(date(2025, 1, 31), 1), Some(date(2025, 2, 1)));
    assert_eq!(add_months(date(2025, 1, 31), -1), Some(date(2024, 12, 1)));
    assert_eq!(add_months(date(2025, 11, 11), 0), Some(date(2025, 11, 1)));
    assert_eq!(add_months(date(2025, 11, 11), 14), Some(date(2027, 1, 1)));
}

#[test]
fn is_today_compares_against_supplied_date() {
    let today = date(2025, 11, 11);
    assert!(is_today(&at(2025, 11, 11, 18, 30), today));
    assert!(!is_today(&date(2025, 11, 12), today));
}

#[test]
fn formats_month_header_and_time_labels() {
    assert_eq!(format_month_year(date(2025, 11, 11)), "November 2025");
    assert_eq!(
        format_time(NaiveTime::from_hms_opt(9, 0, 0).unwrap()),
        "09:00 AM"
    );
    assert_eq!(
        format_time(NaiveTime::from_hms_opt(17, 5, 0).unwrap()),
        "05:05 PM"
    );
}
