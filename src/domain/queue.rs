//! FIFO queue of live complaints.

use std::collections::VecDeque;

use super::{Complaint, ComplaintId};

/// FIFO collection of complaints in submission order.
///
/// This is the canonical store: reply, summary, and urgent flows all mutate
/// the queue's copy in place via [`ComplaintQueue::get_mut`]. Empty or absent
/// lookups are reported through `Option`/`bool` returns rather than errors;
/// callers decide what to tell the operator.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ComplaintQueue {
    entries: VecDeque<Complaint>,
}

impl ComplaintQueue {
    /// Creates an empty queue.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a complaint at the tail.
    pub fn enqueue(&mut self, complaint: Complaint) {
        self.entries.push_back(complaint);
    }

    /// Removes and returns the head complaint, or `None` when empty.
    pub fn dequeue(&mut self) -> Option<Complaint> {
        self.entries.pop_front()
    }

    /// The head complaint, if any.
    #[must_use]
    pub fn front(&self) -> Option<&Complaint> {
        self.entries.front()
    }

    /// Removes the complaint with the given id.
    ///
    /// Returns `false` when no such complaint exists; the queue is unchanged
    /// in that case.
    pub fn remove(&mut self, id: ComplaintId) -> bool {
        if let Some(index) = self.entries.iter().position(|c| c.id == id) {
            self.entries.remove(index);
            true
        } else {
            false
        }
    }

    /// Looks up a complaint by id.
    #[must_use]
    pub fn get(&self, id: ComplaintId) -> Option<&Complaint> {
        self.entries.iter().find(|c| c.id == id)
    }

    /// Looks up a complaint by id for in-place mutation.
    pub fn get_mut(&mut self, id: ComplaintId) -> Option<&mut Complaint> {
        self.entries.iter_mut().find(|c| c.id == id)
    }

    /// Iterates complaints in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Complaint> {
        self.entries.iter()
    }

    /// Number of live complaints.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the queue holds no complaints.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<Complaint> for ComplaintQueue {
    fn from_iter<I: IntoIterator<Item = Complaint>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}
