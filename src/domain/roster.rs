//! The employee roster.

use super::Employee;

/// Unordered collection of employees.
///
/// Scans yield the most-recently-added employee first; this is an explicit
/// design choice, not alphabetical or id order. Ids are not checked for
/// uniqueness, and removal takes only the first match in scan order.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct EmployeeRoster {
    entries: Vec<Employee>,
}

impl EmployeeRoster {
    /// Creates an empty roster.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an employee. Duplicate ids are accepted silently.
    pub fn add(&mut self, employee: Employee) {
        self.entries.push(employee);
    }

    /// Removes the first employee in scan order with the given id.
    ///
    /// Returns `false` when the id is not on the roster.
    pub fn remove(&mut self, id: &str) -> bool {
        // Scan order is reverse insertion, so the first match is the latest
        // insertion with that id.
        if let Some(index) = self.entries.iter().rposition(|e| e.id == id) {
            self.entries.remove(index);
            true
        } else {
            false
        }
    }

    /// Iterates employees most-recently-added first.
    pub fn iter(&self) -> impl Iterator<Item = &Employee> {
        self.entries.iter().rev()
    }

    /// Number of employees on the roster.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the roster is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
