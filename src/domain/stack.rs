//! LIFO stack of summarised complaints.

use super::Complaint;

/// Complaints that have received a problem summary, most recent on top.
///
/// Iteration is non-destructive: [`SummaryStack::iter`] walks the backing
/// storage from the top down and leaves the stack untouched.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SummaryStack {
    entries: Vec<Complaint>,
}

impl SummaryStack {
    /// Creates an empty stack.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Pushes a complaint onto the top of the stack.
    pub fn push(&mut self, complaint: Complaint) {
        self.entries.push(complaint);
    }

    /// Removes and returns the most recent complaint, or `None` when empty.
    pub fn pop(&mut self) -> Option<Complaint> {
        self.entries.pop()
    }

    /// The most recent complaint without removing it.
    #[must_use]
    pub fn peek(&self) -> Option<&Complaint> {
        self.entries.last()
    }

    /// Iterates entries most-recent first without disturbing the stack.
    pub fn iter(&self) -> impl Iterator<Item = &Complaint> {
        self.entries.iter().rev()
    }

    /// Number of stacked summaries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the stack is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
