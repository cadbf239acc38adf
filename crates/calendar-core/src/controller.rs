//! The calendar controller: one owner for navigation state, the event store
//! and the open editor.
//!
//! Renderers call the `open_*` methods on user clicks, mutate the draft while
//! the modal is shown, then `save`, `delete_open` or `close`. Saves go through
//! the validator before touching the store.

use chrono::{NaiveDate, NaiveTime};
use tracing::{debug, warn};

use crate::config::CalendarConfig;
use crate::draft::EventDraft;
use crate::error::{CalendarError, Result};
use crate::event::{Event, EventPatch};
use crate::state::{CalendarState, View};
use crate::store::EventStore;
use crate::validator::Validator;
use crate::view::{self, MonthCell, WeekRow};

/// The modal currently open, if any.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Editor {
    Creating(EventDraft),
    Editing { id: String, draft: EventDraft },
}

impl Editor {
    pub fn draft(&self) -> &EventDraft {
        match self {
            Editor::Creating(draft) | Editor::Editing { draft, .. } => draft,
        }
    }

    fn draft_mut(&mut self) -> &mut EventDraft {
        match self {
            Editor::Creating(draft) | Editor::Editing { draft, .. } => draft,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Calendar {
    config: CalendarConfig,
    validator: Validator,
    state: CalendarState,
    store: EventStore,
    editor: Option<Editor>,
}

impl Calendar {
    /// # Errors
    /// Returns `CalendarError::InvalidConfig` if `config` fails validation.
    pub fn new(config: CalendarConfig, initial: CalendarState, store: EventStore) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            validator: Validator::new(&config),
            config,
            state: initial,
            store,
            editor: None,
        })
    }

    pub fn config(&self) -> &CalendarConfig {
        &self.config
    }

    pub fn validator(&self) -> &Validator {
        &self.validator
    }

    pub fn state(&self) -> CalendarState {
        self.state
    }

    pub fn store(&self) -> &EventStore {
        &self.store
    }

    pub fn editor(&self) -> Option<&Editor> {
        self.editor.as_ref()
    }

    /// Replace the navigation state with the result of `transition`.
    ///
    /// ```
    /// # use calendar_core::{Calendar, CalendarConfig, CalendarState, EventStore, View};
    /// # use chrono::NaiveDate;
    /// let start = NaiveDate::from_ymd_opt(2025, 11, 11).unwrap();
    /// let mut calendar = Calendar::new(
    ///     CalendarConfig::default(),
    ///     CalendarState::new(start, View::Month),
    ///     EventStore::new(),
    /// )
    /// .unwrap();
    ///
    /// calendar.navigate(CalendarState::next_month);
    /// assert_eq!(calendar.state().current, NaiveDate::from_ymd_opt(2025, 12, 1).unwrap());
    /// ```
    pub fn navigate(&mut self, transition: impl FnOnce(CalendarState) -> CalendarState) {
        let next = transition(self.state);
        if next != self.state {
            debug!(
                from = %self.state.current,
                to = %next.current,
                view = ?next.view,
                "calendar navigated"
            );
        }
        self.state = next;
    }

    /// Open a create draft starting at midnight of `date` (month-view click).
    pub fn open_day(&mut self, date: NaiveDate) {
        let start = date.and_time(NaiveTime::MIN);
        self.editor = Some(Editor::Creating(EventDraft::prefilled(start, &self.config)));
    }

    /// Open a create draft starting at the week-view slot (`day`, `hour`).
    ///
    /// # Errors
    /// Returns `CalendarError::InvalidHour` if `hour` is 24 or more.
    pub fn open_slot(&mut self, day: NaiveDate, hour: u32) -> Result<()> {
        let start = view::slot_start(day, hour)?;
        self.editor = Some(Editor::Creating(EventDraft::prefilled(start, &self.config)));
        Ok(())
    }

    /// Open an edit draft for the event with `id`. Returns `false` if there is
    /// no such event.
    pub fn open_event(&mut self, id: &str) -> bool {
        let Some(event) = self.store.get(id) else {
            return false;
        };
        let draft = EventDraft::from_event(event, &self.config);
        self.editor = Some(Editor::Editing {
            id: id.to_string(),
            draft,
        });
        true
    }

    /// Apply `edit` to the open draft. Returns `false` if no editor is open.
    pub fn edit_draft(&mut self, edit: impl FnOnce(&mut EventDraft)) -> bool {
        match self.editor.as_mut() {
            Some(editor) => {
                edit(editor.draft_mut());
                true
            }
            None => false,
        }
    }

    /// Validate the open draft and write it to the store.
    ///
    /// Creating adds a new event; editing replaces every field of the edited
    /// event. On success the editor closes and the saved id is returned.
    ///
    /// # Errors
    /// Returns `CalendarError::Validation` if the draft is invalid (the editor
    /// stays open), `CalendarError::NoEditor` if nothing is open, or
    /// `CalendarError::NotFound` if the edited event was deleted while its
    /// editor was open. In the last case the editor closes and nothing is
    /// written.
    pub fn save(&mut self) -> Result<String> {
        let Some(editor) = self.editor.as_ref() else {
            return Err(CalendarError::NoEditor);
        };

        let event = match editor.draft().clone().into_event(&self.validator, &self.config) {
            Ok(event) => event,
            Err(err) => {
                warn!(error = %err, "rejected event save");
                return Err(err);
            }
        };

        let id = match editor {
            Editor::Creating(_) => {
                let id = event.id.clone();
                self.store.add(event);
                id
            }
            Editor::Editing { id, .. } => {
                let id = id.clone();
                if !self.store.update(&id, &EventPatch::replace_with(&event)) {
                    warn!(id = %id, "edited event no longer exists");
                    self.editor = None;
                    return Err(CalendarError::NotFound(id));
                }
                id
            }
        };

        debug!(id = %id, "saved event");
        self.editor = None;
        Ok(id)
    }

    /// Delete the event open in the editor and close it.
    ///
    /// Returns the removed event; `None` when creating or when nothing is open.
    pub fn delete_open(&mut self) -> Option<Event> {
        let id = match self.editor.as_ref()? {
            Editor::Editing { id, .. } => id.clone(),
            Editor::Creating(_) => return None,
        };
        self.editor = None;
        self.store.delete(&id)
    }

    pub fn close(&mut self) {
        self.editor = None;
    }

    pub fn add(&mut self, event: Event) {
        self.store.add(event);
    }

    pub fn update(&mut self, id: &str, patch: &EventPatch) -> bool {
        self.store.update(id, patch)
    }

    pub fn delete(&mut self, id: &str) -> Option<Event> {
        self.store.delete(id)
    }

    /// Month-view cells for the current state.
    pub fn month_cells(&self, today: NaiveDate) -> Vec<MonthCell<'_>> {
        view::month_cells(
            self.state.current,
            self.store.all(),
            today,
            self.config.visible_events_per_cell,
        )
    }

    /// Week-view rows for the current state.
    pub fn week_rows(&self) -> Vec<WeekRow<'_>> {
        view::week_rows(self.state.current, self.store.all())
    }

    pub fn view(&self) -> View {
        self.state.view
    }
}
