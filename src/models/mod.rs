//! Core data models for restaurant payroll.
//!
//! This module contains the employee record, employee sets, locations, and
//! the reported summary.

mod employee;
mod employee_set;
mod location;
mod summary;

pub use employee::Employee;
pub use employee_set::EmployeeSet;
pub use location::Location;
pub use summary::PayrollSummary;
