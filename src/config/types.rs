//! Roster configuration types.
//!
//! This module contains the strongly-typed structures deserialized from
//! roster YAML.

use rust_decimal::Decimal;
use serde::Deserialize;

/// One employee record as listed in a roster.
#[derive(Debug, Clone, Deserialize)]
pub struct EmployeeEntry {
    /// Staff identifier.
    pub id: String,
    /// The employee's name.
    pub name: String,
    /// Hours worked in the pay period.
    pub hours_worked: Decimal,
    /// Hourly pay rate.
    pub hourly_rate: Decimal,
}

/// A location as listed in a roster.
#[derive(Debug, Clone, Deserialize)]
pub struct LocationConfig {
    /// Display name of the location.
    pub name: String,
    /// Employee records at this location.
    #[serde(default)]
    pub employees: Vec<EmployeeEntry>,
}

/// Roster file structure.
#[derive(Debug, Clone, Deserialize)]
pub struct RosterConfig {
    /// Locations in report order.
    pub locations: Vec<LocationConfig>,
}
