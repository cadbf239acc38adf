//! # calendar-core
//!
//! Grid arithmetic, event placement and in-memory event state for calendar
//! widgets.
//!
//! The rendering layer asks [`grid`] for the dates to lay out, asks
//! [`matcher`] which events belong in each day cell or hour slot, and routes
//! user edits through [`validator`] before they reach the [`store`]. The
//! [`controller`] wires those pieces together behind one owner.
//!
//! ## Modules
//!
//! - [`grid`] — 42-cell month grid, 7-day week span, day comparisons
//! - [`matcher`] — day/hour-slot membership, multi-day detection, sorting
//! - [`store`] — id-keyed event collection with last-write-wins inserts
//! - [`validator`] — form validation producing human-readable messages
//! - [`event`] — `Event` records and `EventPatch` partial updates
//! - [`draft`] — modal form state that converts into events
//! - [`view`] — month cell and week row view models
//! - [`state`] — navigation state (current date, month/week view)
//! - [`controller`] — `Calendar`, the single owner of all of the above
//! - [`config`] — limits and defaults
//! - [`error`] — Error types

pub mod config;
pub mod controller;
pub mod draft;
pub mod error;
pub mod event;
pub mod grid;
pub mod matcher;
pub mod state;
pub mod store;
pub mod validator;
pub mod view;

pub use config::CalendarConfig;
pub use controller::{Calendar, Editor};
pub use draft::EventDraft;
pub use error::CalendarError;
pub use event::{Event, EventPatch};
pub use grid::{days_between, is_same_day, month_grid, week_days};
pub use matcher::{events_in_hour_slot, events_on_day, is_multi_day, sort_by_start};
pub use state::{CalendarState, View};
pub use store::EventStore;
pub use validator::{validate, EventCandidate, Validator};
