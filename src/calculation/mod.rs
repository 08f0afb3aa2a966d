//! Calculation logic for restaurant payroll.
//!
//! This module contains the set arithmetic over location staff, the
//! payroll total, and the summary that combines them for two locations.

mod payroll;
mod set_operations;
mod summary;

pub use payroll::calculate_total_payroll;
pub use set_operations::{difference, intersection, symmetric_difference, union};
pub use summary::{shared_identifiers, split_identifiers, summarize};
