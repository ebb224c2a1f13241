//! Domain models for the complaint desk.
//!
//! This module contains the record types (customers, employees, complaints)
//! and the collections that hold them. Each collection is independently
//! owned: the summary stack and urgent list hold clones of queue entries
//! taken at push time, never shared references.

mod complaint;
pub use complaint::{Complaint, ComplaintId, ComplaintIdAllocator};

mod config;
pub use config::{Config, DEFAULT_DATA_FILE};

mod customer;
pub use customer::Customer;

mod employee;
pub use employee::Employee;

pub mod queue;
pub use queue::ComplaintQueue;

pub mod roster;
pub use roster::EmployeeRoster;

pub mod stack;
pub use stack::SummaryStack;

pub mod urgent;
pub use urgent::{UrgentEntry, UrgentList};
