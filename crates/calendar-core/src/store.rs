//! In-memory event collection keyed by id.
//!
//! The store is the single owner of event records. Reads hand out borrowed
//! snapshots; every mutation is synchronous and visible to the next read.
//! It does not re-check `end >= start`; that is the validator's job.

use tracing::debug;

use crate::event::{Event, EventPatch};

/// Events in insertion order, unique by id.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventStore {
    events: Vec<Event>,
}

impl EventStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from existing events. Later duplicates of an id replace
    /// earlier ones, as with [`EventStore::add`].
    pub fn with_events(events: impl IntoIterator<Item = Event>) -> Self {
        let mut store = Self::new();
        for event in events {
            store.add(event);
        }
        store
    }

    /// Insert `event`. If its id is already present the stored record is
    /// replaced in place (last write wins) and its position is kept.
    pub fn add(&mut self, event: Event) {
        match self.position(&event.id) {
            Some(index) => {
                debug!(id = %event.id, "replacing event with duplicate id");
                self.events[index] = event;
            }
            None => {
                debug!(id = %event.id, "adding event");
                self.events.push(event);
            }
        }
    }

    /// Merge the set fields of `patch` into the event with `id`.
    ///
    /// Returns `false` (and changes nothing) when no such event exists.
    pub fn update(&mut self, id: &str, patch: &EventPatch) -> bool {
        let Some(index) = self.position(id) else {
            debug!(id, "update ignored: no such event");
            return false;
        };
        let updated = patch.apply(&self.events[index]);
        self.events[index] = updated;
        debug!(id, "updated event");
        true
    }

    /// Remove the event with `id`, returning it. Deleting an absent id is a
    /// no-op and returns `None`.
    pub fn delete(&mut self, id: &str) -> Option<Event> {
        let Some(index) = self.position(id) else {
            debug!(id, "delete ignored: no such event");
            return None;
        };
        debug!(id, "deleted event");
        Some(self.events.remove(index))
    }

    pub fn get(&self, id: &str) -> Option<&Event> {
        self.events.iter().find(|e| e.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.position(id).is_some()
    }

    /// All events in insertion order.
    pub fn all(&self) -> &[Event] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.events.iter().position(|e| e.id == id)
    }
}

impl FromIterator<Event> for EventStore {
    fn from_iter<I: IntoIterator<Item = Event>>(iter: I) -> Self {
        Self::with_events(iter)
    }
}
