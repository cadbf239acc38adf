//! Navigation state for the calendar widget.
//!
//! `CalendarState` is a small `Copy` value. Transitions consume it and return
//! the next state; the owner decides when to store the result.

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::grid::add_months;

/// Which grid is on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum View {
    #[default]
    Month,
    Week,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarState {
    /// The date the visible month or week is built around.
    pub current: NaiveDate,
    pub view: View,
    pub selected: Option<NaiveDate>,
}

impl CalendarState {
    pub fn new(current: NaiveDate, view: View) -> Self {
        Self {
            current,
            view,
            selected: None,
        }
    }

    /// Move to the 1st of the following month.
    pub fn next_month(self) -> Self {
        self.shift_months(1)
    }

    /// Move to the 1st of the preceding month.
    pub fn previous_month(self) -> Self {
        self.shift_months(-1)
    }

    pub fn next_week(self) -> Self {
        Self {
            current: self
                .current
                .checked_add_days(Days::new(7))
                .unwrap_or(self.current),
            ..self
        }
    }

    pub fn previous_week(self) -> Self {
        Self {
            current: self
                .current
                .checked_sub_days(Days::new(7))
                .unwrap_or(self.current),
            ..self
        }
    }

    /// Jump to `date` (e.g. "Today").
    pub fn go_to(self, date: NaiveDate) -> Self {
        Self {
            current: date,
            ..self
        }
    }

    pub fn with_view(self, view: View) -> Self {
        Self { view, ..self }
    }

    pub fn select(self, selected: Option<NaiveDate>) -> Self {
        Self { selected, ..self }
    }

    // Out-of-range targets leave the state where it is.
    fn shift_months(self, months: i32) -> Self {
        Self {
            current: add_months(self.current, months).unwrap_or(self.current),
            ..self
        }
    }
}
