//! Roster loading functionality.
//!
//! This module provides the [`RosterLoader`] type, which parses roster YAML
//! and builds the employee records for each location exactly once.

use tracing::debug;

use crate::error::{PayrollError, PayrollResult};
use crate::models::{Employee, EmployeeSet, Location};

use super::types::{LocationConfig, RosterConfig};

/// The roster compiled into the binary.
const BUILTIN_ROSTER: &str = include_str!("../../config/restaurants.yaml");

/// Loads roster data and provides access to location staff.
///
/// Employee records are created when the roster is loaded. Every lookup
/// afterwards returns the same records, so set operations across
/// lookups see consistent identities.
///
/// # Example
///
/// ```
/// use restaurant_payroll::config::RosterLoader;
///
/// let loader = RosterLoader::builtin()?;
/// let (restaurant_a, restaurant_b) = loader.location_sets()?;
/// assert_eq!(restaurant_a.len(), 3);
/// assert_eq!(restaurant_b.len(), 3);
/// # Ok::<(), restaurant_payroll::error::PayrollError>(())
/// ```
#[derive(Debug, Clone)]
pub struct RosterLoader {
    locations: Vec<Location>,
}

impl RosterLoader {
    /// Loads the roster shipped with the crate.
    pub fn builtin() -> PayrollResult<Self> {
        Self::from_yaml_str("builtin", BUILTIN_ROSTER)
    }

    /// Parses roster YAML.
    ///
    /// # Arguments
    ///
    /// * `source_name` - Label for the roster used in error messages
    /// * `yaml` - The roster text
    ///
    /// # Returns
    ///
    /// Returns a `RosterLoader`, or `RosterParseError` if the text is not a
    /// valid roster.
    pub fn from_yaml_str(source_name: &str, yaml: &str) -> PayrollResult<Self> {
        let roster: RosterConfig =
            serde_yaml::from_str(yaml).map_err(|e| PayrollError::RosterParseError {
                source_name: source_name.to_string(),
                message: e.to_string(),
            })?;

        let locations: Vec<Location> = roster.locations.into_iter().map(build_location).collect();

        debug!(
            source = source_name,
            locations = locations.len(),
            "Roster loaded"
        );

        Ok(Self { locations })
    }

    /// Returns all locations in roster order.
    pub fn locations(&self) -> &[Location] {
        &self.locations
    }

    /// Gets the staff of a location by name.
    ///
    /// # Returns
    ///
    /// Returns the staff set if found, or `LocationNotFound` error.
    pub fn location(&self, name: &str) -> PayrollResult<&EmployeeSet> {
        self.locations
            .iter()
            .find(|l| l.name == name)
            .map(|l| &l.staff)
            .ok_or_else(|| PayrollError::LocationNotFound {
                name: name.to_string(),
            })
    }

    /// Returns the first two locations, which the report compares.
    ///
    /// # Returns
    ///
    /// Returns `NotEnoughLocations` if the roster lists fewer than two.
    pub fn location_pair(&self) -> PayrollResult<(&Location, &Location)> {
        match self.locations.as_slice() {
            [first, second, ..] => Ok((first, second)),
            _ => Err(PayrollError::NotEnoughLocations {
                found: self.locations.len(),
            }),
        }
    }

    /// Returns the staff of the first two locations.
    ///
    /// The returned sets share records with the loader.
    pub fn location_sets(&self) -> PayrollResult<(EmployeeSet, EmployeeSet)> {
        let (first, second) = self.location_pair()?;
        Ok((first.staff.clone(), second.staff.clone()))
    }
}

fn build_location(config: LocationConfig) -> Location {
    let staff: EmployeeSet = config
        .employees
        .into_iter()
        .map(|entry| Employee::new(entry.id, entry.name, entry.hours_worked, entry.hourly_rate))
        .collect();

    Location::new(config.name, staff)
}
