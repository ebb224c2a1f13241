//! Console-based complaint management.
//!
//! Customers submit complaints, employees triage and reply, admins manage the
//! employee roster and escalate urgent items. Records live in in-memory
//! collections and the complaint queue is persisted to a flat text file
//! between runs.

pub mod app;
pub use app::{Desk, SubmitError};

pub mod domain;
pub use domain::{
    Complaint, ComplaintId, ComplaintQueue, Config, Customer, Employee, EmployeeRoster,
    SummaryStack, UrgentList,
};

/// Flat-file persistence for the complaint queue.
pub mod storage;
pub use storage::LoadError;
