//! Append-only archive of past semesters

use super::signal::{Signal, SubscriptionId};
use crate::core::gpa::{compute_cgpa, Cgpa};
use crate::core::models::SemesterSummary;
use crate::debug;

/// Change notification emitted by [`SemesterArchive`]
#[derive(Debug, Clone, PartialEq)]
pub enum ArchiveEvent {
    /// A summary was appended at `index`
    Appended {
        /// Position in the archive (0-based)
        index: usize,
        /// The appended summary
        summary: SemesterSummary,
    },
}

/// Past semesters in insertion order
#[derive(Debug, Default)]
pub struct SemesterArchive {
    semesters: Vec<SemesterSummary>,
    changed: Signal<ArchiveEvent>,
}

impl SemesterArchive {
    /// Create an empty archive
    #[must_use]
    pub const fn new() -> Self {
        Self {
            semesters: Vec::new(),
            changed: Signal::new(),
        }
    }

    /// Append a validated summary and return its index
    pub fn push(&mut self, summary: SemesterSummary) -> usize {
        let index = self.semesters.len();
        self.semesters.push(summary);
        debug!("archive: semester {} appended ({summary})", index + 1);
        self.changed.emit(&ArchiveEvent::Appended { index, summary });
        index
    }

    /// Summaries in insertion order
    #[must_use]
    pub fn semesters(&self) -> &[SemesterSummary] {
        &self.semesters
    }

    /// Number of archived semesters
    #[must_use]
    pub fn len(&self) -> usize {
        self.semesters.len()
    }

    /// Whether no semester has been archived
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.semesters.is_empty()
    }

    /// Number of appends so far. Equal to `len()` since the archive is append-only.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.semesters.len() as u64
    }

    /// Sum of archived credit hours
    #[must_use]
    pub fn total_credit_hours(&self) -> f64 {
        self.semesters
            .iter()
            .map(SemesterSummary::credit_hours)
            .sum()
    }

    /// Cumulative GPA, recomputed on every call
    #[must_use]
    pub fn cgpa(&self) -> Cgpa {
        compute_cgpa(&self.semesters)
    }

    /// Listen for appends
    pub fn subscribe<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: FnMut(&ArchiveEvent) + 'static,
    {
        self.changed.connect(listener)
    }

    /// Stop listening. Returns `false` if `id` was not subscribed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.changed.disconnect(id)
    }
}
