//! Restaurant payroll across locations.
//!
//! This crate computes payroll totals for restaurant staff and reports set
//! arithmetic (union, intersection, difference, symmetric difference) over
//! the staff of two locations.

#![warn(missing_docs)]

pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
