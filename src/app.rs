//! Top-level application state.
//!
//! [`Desk`] owns every collection plus the id allocator and exposes the
//! operations the menu handlers call. State lives here rather than in
//! globals, so each flow can be exercised directly in tests.

use std::{io, path::Path};

use crate::{
    domain::{
        Complaint, ComplaintId, ComplaintIdAllocator, ComplaintQueue, Customer, Employee,
        EmployeeRoster, SummaryStack, UrgentList,
    },
    storage::{self, LoadError},
};

/// Why a complaint submission was rejected.
///
/// The `Display` text doubles as the operator-facing message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SubmitError {
    /// The email was empty or did not contain `@`.
    #[error("Invalid email format!")]
    InvalidEmail,

    /// The complaint text was empty.
    #[error("Complaint content cannot be empty!")]
    EmptyContent,
}

/// The complaint desk: all live collections plus the id allocator.
#[derive(Debug, Default)]
pub struct Desk {
    queue: ComplaintQueue,
    summaries: SummaryStack,
    urgent: UrgentList,
    roster: EmployeeRoster,
    ids: ComplaintIdAllocator,
}

impl Desk {
    /// Creates an empty desk.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads the complaint queue from `path`.
    ///
    /// The id counter resumes after the highest loaded id so new complaints
    /// never collide with reloaded ones.
    ///
    /// # Errors
    ///
    /// Returns a [`LoadError`] if the file exists but cannot be read or holds
    /// a malformed record. Nothing is recovered from a malformed file.
    pub fn load(path: &Path) -> Result<Self, LoadError> {
        let mut desk = Self::new();
        for complaint in storage::load(path)? {
            desk.ids.resume_after(complaint.id);
            desk.queue.enqueue(complaint);
        }
        Ok(desk)
    }

    /// Persists the complaint queue to `path`, overwriting it wholesale.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written. In-memory state is
    /// unaffected by a failed save.
    pub fn save(&self, path: &Path) -> io::Result<()> {
        storage::save(path, &self.queue)
    }

    /// Registers a new complaint and returns its assigned id.
    ///
    /// # Errors
    ///
    /// Rejects an empty or `@`-less email and empty content; nothing is
    /// enqueued in that case.
    pub fn submit(
        &mut self,
        content: impl Into<String>,
        customer: Customer,
    ) -> Result<ComplaintId, SubmitError> {
        let content = content.into();
        if customer.email.is_empty() || !customer.email.contains('@') {
            return Err(SubmitError::InvalidEmail);
        }
        if content.is_empty() {
            return Err(SubmitError::EmptyContent);
        }

        let id = self.ids.allocate();
        self.queue.enqueue(Complaint::new(id, content, customer));
        Ok(id)
    }

    /// Deletes a complaint from the queue.
    ///
    /// Urgent-list and summary-stack snapshots of the same id are untouched.
    /// Returns `false` when the id is not in the queue.
    pub fn delete(&mut self, id: ComplaintId) -> bool {
        self.queue.remove(id)
    }

    /// Looks up a complaint by id.
    #[must_use]
    pub fn complaint(&self, id: ComplaintId) -> Option<&Complaint> {
        self.queue.get(id)
    }

    /// All complaints submitted under `email`, in queue order.
    #[must_use]
    pub fn history(&self, email: &str) -> Vec<&Complaint> {
        self.queue
            .iter()
            .filter(|c| c.customer.email == email)
            .collect()
    }

    /// Records an employee reply on the queue copy.
    ///
    /// Returns `false` when the id is not in the queue.
    pub fn reply(&mut self, id: ComplaintId, text: impl Into<String>) -> bool {
        match self.queue.get_mut(id) {
            Some(complaint) => {
                complaint.add_reply(text);
                true
            }
            None => false,
        }
    }

    /// Records a problem summary on the queue copy and pushes a snapshot onto
    /// the summary stack.
    ///
    /// Returns `false` when the id is not in the queue.
    pub fn add_summary(&mut self, id: ComplaintId, text: impl Into<String>) -> bool {
        let Some(complaint) = self.queue.get_mut(id) else {
            return false;
        };
        complaint.add_summary(text);
        self.summaries.push(complaint.clone());
        true
    }

    /// Flags the queue copy urgent and inserts a snapshot into the urgent
    /// list at the given priority (lower number = higher priority).
    ///
    /// Returns `false` when the id is not in the queue.
    pub fn mark_urgent(&mut self, id: ComplaintId, priority: u32) -> bool {
        let Some(complaint) = self.queue.get_mut(id) else {
            return false;
        };
        complaint.urgent = true;
        let snapshot = complaint.clone();
        self.urgent.insert(priority, snapshot);
        true
    }

    /// Complaints without a recorded reply, in queue order.
    #[must_use]
    pub fn unreplied(&self) -> Vec<&Complaint> {
        self.queue.iter().filter(|c| !c.replied).collect()
    }

    /// Summarised complaints whose content contains `needle`, most recent
    /// first.
    #[must_use]
    pub fn search_summaries(&self, needle: &str) -> Vec<&Complaint> {
        self.summaries
            .iter()
            .filter(|c| c.content.contains(needle))
            .collect()
    }

    /// Adds an employee to the roster. Duplicate ids are accepted.
    pub fn add_employee(&mut self, employee: Employee) {
        self.roster.add(employee);
    }

    /// Removes the first roster match for `id`; `false` when absent.
    pub fn remove_employee(&mut self, id: &str) -> bool {
        self.roster.remove(id)
    }

    /// Count of live complaints.
    #[must_use]
    pub fn total(&self) -> usize {
        self.queue.len()
    }

    /// The complaint queue.
    #[must_use]
    pub const fn queue(&self) -> &ComplaintQueue {
        &self.queue
    }

    /// The summary stack.
    #[must_use]
    pub const fn summaries(&self) -> &SummaryStack {
        &self.summaries
    }

    /// The urgent list.
    #[must_use]
    pub const fn urgent(&self) -> &UrgentList {
        &self.urgent
    }

    /// The employee roster.
    #[must_use]
    pub const fn roster(&self) -> &EmployeeRoster {
        &self.roster
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alice() -> Customer {
        Customer::new("Alice", "555-1111", "alice@x.com")
    }

    #[test]
    fn first_complaint_in_a_fresh_run_gets_id_one() {
        let mut desk = Desk::new();
        let id = desk.submit("Late delivery", alice()).unwrap();
        assert_eq!(id, 1);
        assert_eq!(desk.total(), 1);
    }

    #[test]
    fn reply_sets_flag_and_text() {
        let mut desk = Desk::new();
        let id = desk.submit("Late delivery", alice()).unwrap();

        assert!(desk.reply(id, "Refund issued"));

        let complaint = desk.complaint(id).unwrap();
        assert!(complaint.replied);
        assert_eq!(complaint.reply, "Refund issued");
        assert!(desk.unreplied().is_empty());
    }

    #[test]
    fn submit_rejects_bad_email_and_empty_content() {
        let mut desk = Desk::new();
        let bad_email = Customer::new("Bob", "555-2222", "bob.example.com");
        assert_eq!(
            desk.submit("anything", bad_email),
            Err(SubmitError::InvalidEmail)
        );
        assert_eq!(desk.submit("", alice()), Err(SubmitError::EmptyContent));
        assert_eq!(desk.total(), 0);
    }

    #[test]
    fn delete_missing_id_leaves_queue_unchanged() {
        let mut desk = Desk::new();
        desk.submit("Late delivery", alice()).unwrap();

        assert!(!desk.delete(99));
        assert_eq!(desk.total(), 1);

        assert!(desk.delete(1));
        assert_eq!(desk.total(), 0);
    }

    #[test]
    fn deleted_ids_are_never_reused() {
        let mut desk = Desk::new();
        desk.submit("a", alice()).unwrap();
        desk.submit("b", alice()).unwrap();
        assert!(desk.delete(2));

        let id = desk.submit("c", alice()).unwrap();
        assert_eq!(id, 3);
    }

    #[test]
    fn urgent_snapshot_is_independent_of_the_queue_copy() {
        let mut desk = Desk::new();
        let id = desk.submit("Late delivery", alice()).unwrap();

        assert!(desk.mark_urgent(id, 1));
        assert!(desk.complaint(id).unwrap().urgent);

        // Mutating the queue copy afterwards does not touch the snapshot.
        desk.reply(id, "Refund issued");
        let entry = desk.urgent().iter().next().unwrap();
        assert!(!entry.complaint.replied);
    }

    #[test]
    fn mark_urgent_unknown_id_is_reported() {
        let mut desk = Desk::new();
        assert!(!desk.mark_urgent(5, 1));
        assert!(desk.urgent().is_empty());
    }

    #[test]
    fn add_summary_pushes_snapshot_and_keeps_queue_copy() {
        let mut desk = Desk::new();
        let id = desk.submit("Late delivery", alice()).unwrap();

        assert!(desk.add_summary(id, "courier dispute"));

        assert_eq!(desk.summaries().len(), 1);
        assert_eq!(desk.summaries().peek().unwrap().summary, "courier dispute");
        assert_eq!(desk.complaint(id).unwrap().summary, "courier dispute");
        // A summary is not a reply.
        assert!(!desk.complaint(id).unwrap().replied);
    }

    #[test]
    fn search_summaries_matches_content_substring() {
        let mut desk = Desk::new();
        let a = desk.submit("Late delivery", alice()).unwrap();
        let b = desk.submit("Wrong item", alice()).unwrap();
        desk.add_summary(a, "s1");
        desk.add_summary(b, "s2");

        let hits = desk.search_summaries("delivery");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, a);
        assert!(desk.search_summaries("refund").is_empty());
    }

    #[test]
    fn history_filters_by_exact_email() {
        let mut desk = Desk::new();
        desk.submit("a", alice()).unwrap();
        desk.submit("b", Customer::new("Bob", "555-2222", "bob@x.com"))
            .unwrap();
        desk.submit("c", alice()).unwrap();

        let history = desk.history("alice@x.com");
        let ids: Vec<_> = history.iter().map(|c| c.id).collect();
        assert_eq!(ids, [1, 3]);
        assert!(desk.history("nobody@x.com").is_empty());
    }

    #[test]
    fn load_resumes_id_counter_past_loaded_ids() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("complaint_data.txt");

        let mut desk = Desk::new();
        desk.submit("a", alice()).unwrap();
        desk.submit("b", alice()).unwrap();
        desk.save(&path).unwrap();

        let mut reloaded = Desk::load(&path).unwrap();
        assert_eq!(reloaded.total(), 2);
        let id = reloaded.submit("c", alice()).unwrap();
        assert_eq!(id, 3);
    }

    #[test]
    fn save_then_load_preserves_queue_order_and_fields() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("complaint_data.txt");

        let mut desk = Desk::new();
        let a = desk.submit("Late delivery", alice()).unwrap();
        desk.submit("Wrong item", Customer::new("Bob", "555-2222", "bob@x.com"))
            .unwrap();
        desk.reply(a, "Refund issued");
        desk.save(&path).unwrap();

        let reloaded = Desk::load(&path).unwrap();
        let tuples: Vec<_> = reloaded
            .queue()
            .iter()
            .map(|c| (c.id, c.content.as_str(), c.replied, c.reply.as_str()))
            .collect();
        assert_eq!(
            tuples,
            [
                (1, "Late delivery", true, "Refund issued"),
                (2, "Wrong item", false, ""),
            ]
        );
    }

    #[test]
    fn roster_operations_round_trip() {
        let mut desk = Desk::new();
        desk.add_employee(Employee::new("Sara", "E-1", "pw"));
        assert_eq!(desk.roster().len(), 1);
        assert!(desk.remove_employee("E-1"));
        assert!(!desk.remove_employee("E-1"));
    }
}
