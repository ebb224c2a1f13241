use super::Customer;

/// Identifier assigned to a complaint.
///
/// Ids come from a monotonically increasing per-process counter and are never
/// reused, even after the complaint is deleted.
pub type ComplaintId = u32;

/// A customer complaint.
///
/// Logically a value type: the queue owns the canonical copy, while the
/// summary stack and urgent list hold independent clones taken at push time.
/// Mutating the queue copy after a push does not affect those clones.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Complaint {
    /// Unique id within a process run.
    pub id: ComplaintId,
    /// The complaint text as submitted by the customer.
    pub content: String,
    /// Whether an employee reply has been recorded.
    pub replied: bool,
    /// Whether an admin has escalated this complaint.
    pub urgent: bool,
    /// Snapshot of the submitting customer.
    pub customer: Customer,
    /// Employee reply text. Empty until a reply is recorded.
    pub reply: String,
    /// Problem summary text, kept separate from `reply`: the two fields serve
    /// distinct flows even though only the reply is persisted.
    pub summary: String,
}

impl Complaint {
    /// Creates a fresh, unreplied, non-urgent complaint.
    #[must_use]
    pub fn new(id: ComplaintId, content: impl Into<String>, customer: Customer) -> Self {
        Self {
            id,
            content: content.into(),
            replied: false,
            urgent: false,
            customer,
            reply: String::new(),
            summary: String::new(),
        }
    }

    /// Records an employee reply and marks the complaint as replied.
    pub fn add_reply(&mut self, reply: impl Into<String>) {
        self.reply = reply.into();
        self.replied = true;
    }

    /// Records a problem summary. Does not affect the replied flag.
    pub fn add_summary(&mut self, summary: impl Into<String>) {
        self.summary = summary.into();
    }
}

/// Hands out complaint ids from a monotonic counter.
///
/// The counter is never decremented and is not reset when complaints are
/// deleted.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ComplaintIdAllocator {
    last: ComplaintId,
}

impl ComplaintIdAllocator {
    /// Creates an allocator whose first id will be `1`.
    #[must_use]
    pub const fn new() -> Self {
        Self { last: 0 }
    }

    /// Advances the counter past `id` if it is not already past it.
    ///
    /// Called once per loaded record on startup so that new complaints never
    /// collide with ids read back from the data file.
    pub const fn resume_after(&mut self, id: ComplaintId) {
        if id > self.last {
            self.last = id;
        }
    }

    /// Returns the next id.
    pub const fn allocate(&mut self) -> ComplaintId {
        self.last += 1;
        self.last
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn allocator_is_monotonic_from_one() {
        let mut ids = ComplaintIdAllocator::new();
        assert_eq!(ids.allocate(), 1);
        assert_eq!(ids.allocate(), 2);
        assert_eq!(ids.allocate(), 3);
    }

    #[test]
    fn resume_after_skips_loaded_ids() {
        let mut ids = ComplaintIdAllocator::new();
        ids.resume_after(4);
        ids.resume_after(9);
        ids.resume_after(2);
        assert_eq!(ids.allocate(), 10);
    }

    #[test]
    fn add_reply_sets_flag_and_text() {
        let mut complaint =
            Complaint::new(1, "Late delivery", Customer::new("Alice", "555-1111", "alice@x.com"));
        assert!(!complaint.replied);

        complaint.add_reply("Refund issued");

        assert!(complaint.replied);
        assert_eq!(complaint.reply, "Refund issued");
    }

    #[test]
    fn add_summary_leaves_replied_flag_alone() {
        let mut complaint =
            Complaint::new(1, "Late delivery", Customer::new("Alice", "555-1111", "alice@x.com"));

        complaint.add_summary("courier dispute");

        assert!(!complaint.replied);
        assert_eq!(complaint.summary, "courier dispute");
        assert!(complaint.reply.is_empty());
    }
}
