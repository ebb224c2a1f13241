//! Priority-ordered list of escalated complaints.

use super::{Complaint, ComplaintId};

/// An escalated complaint together with its priority number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrgentEntry {
    /// Priority number; lower means more urgent.
    pub priority: u32,
    /// Snapshot of the complaint at escalation time.
    pub complaint: Complaint,
}

/// Complaints escalated by an admin, kept sorted by ascending priority.
///
/// The same complaint id may be inserted more than once; no deduplication is
/// performed.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct UrgentList {
    entries: Vec<UrgentEntry>,
}

impl UrgentList {
    /// Creates an empty list.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a complaint at its priority position.
    ///
    /// The insert is stable: a new entry goes after existing entries with the
    /// same priority number.
    pub fn insert(&mut self, priority: u32, complaint: Complaint) {
        let index = self
            .entries
            .iter()
            .position(|entry| entry.priority > priority)
            .unwrap_or(self.entries.len());
        self.entries.insert(index, UrgentEntry { priority, complaint });
    }

    /// Removes the first entry carrying the given complaint id.
    ///
    /// Returns `false` when the id is not present.
    pub fn remove(&mut self, id: ComplaintId) -> bool {
        if let Some(index) = self.entries.iter().position(|entry| entry.complaint.id == id) {
            self.entries.remove(index);
            true
        } else {
            false
        }
    }

    /// Iterates entries in ascending priority order.
    pub fn iter(&self) -> impl Iterator<Item = &UrgentEntry> {
        self.entries.iter()
    }

    /// Number of escalated entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the list is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
