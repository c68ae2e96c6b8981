//! Course sheet: the editable rows of the current semester

use super::signal::{Signal, SubscriptionId};
use crate::core::models::{CourseEntry, CourseField, CourseId};
use crate::debug;

/// Change notification emitted by [`CourseSheet`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SheetEvent {
    /// A row was appended
    Added(CourseId),
    /// One field of a row was overwritten
    Edited(CourseId, CourseField),
    /// A row was deleted
    Removed(CourseId),
    /// The sheet was cleared down to a single blank row
    Reset(CourseId),
}

/// Ordered course rows with unique ids.
///
/// Ids come from a counter that is never rewound, so an id is not reused
/// even after [`CourseSheet::reset`].
#[derive(Debug)]
pub struct CourseSheet {
    entries: Vec<CourseEntry>,
    next_id: u64,
    revision: u64,
    changed: Signal<SheetEvent>,
}

impl CourseSheet {
    /// Create a sheet holding one blank row
    #[must_use]
    pub fn new() -> Self {
        let mut sheet = Self {
            entries: Vec::new(),
            next_id: 1,
            revision: 0,
            changed: Signal::new(),
        };
        let id = sheet.allocate_id();
        sheet.entries.push(CourseEntry::blank(id));
        sheet
    }

    fn allocate_id(&mut self) -> CourseId {
        let id = CourseId(self.next_id);
        self.next_id += 1;
        id
    }

    fn notify(&mut self, event: &SheetEvent) {
        self.revision += 1;
        debug!("course sheet r{}: {event:?}", self.revision);
        self.changed.emit(event);
    }

    /// Rows in display order
    #[must_use]
    pub fn entries(&self) -> &[CourseEntry] {
        &self.entries
    }

    /// Row with the given id
    #[must_use]
    pub fn get(&self, id: CourseId) -> Option<&CourseEntry> {
        self.entries.iter().find(|entry| entry.id == id)
    }

    /// Number of mutations so far; pollers compare it to detect changes
    #[must_use]
    pub const fn revision(&self) -> u64 {
        self.revision
    }

    /// Append a blank row and return its id
    pub fn add(&mut self) -> CourseId {
        let id = self.allocate_id();
        self.entries.push(CourseEntry::blank(id));
        self.notify(&SheetEvent::Added(id));
        id
    }

    /// Append a filled row and return its id
    pub fn add_filled(&mut self, name: &str, credits: &str, grade: &str) -> CourseId {
        let id = self.allocate_id();
        self.entries.push(CourseEntry::new(id, name, credits, grade));
        self.notify(&SheetEvent::Added(id));
        id
    }

    /// Overwrite one field of the row `id`. Returns `false` if no row matched.
    pub fn edit(&mut self, id: CourseId, field: CourseField, value: &str) -> bool {
        let Some(entry) = self.entries.iter_mut().find(|entry| entry.id == id) else {
            return false;
        };
        entry.set(field, value);
        self.notify(&SheetEvent::Edited(id, field));
        true
    }

    /// Delete the row `id`. Returns `false` if no row matched.
    pub fn remove(&mut self, id: CourseId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|entry| entry.id != id);
        if self.entries.len() == before {
            return false;
        }
        self.notify(&SheetEvent::Removed(id));
        true
    }

    /// Drop every row and start over with one blank row
    pub fn reset(&mut self) -> CourseId {
        let id = self.allocate_id();
        self.entries.clear();
        self.entries.push(CourseEntry::blank(id));
        self.notify(&SheetEvent::Reset(id));
        id
    }

    /// Listen for changes
    pub fn subscribe<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: FnMut(&SheetEvent) + 'static,
    {
        self.changed.connect(listener)
    }

    /// Stop listening. Returns `false` if `id` was not subscribed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.changed.disconnect(id)
    }
}

impl Default for CourseSheet {
    fn default() -> Self {
        Self::new()
    }
}
