//! Restaurant location model.

use super::EmployeeSet;

/// A restaurant location and its staff.
#[derive(Debug, Clone)]
pub struct Location {
    /// Display name of the location (e.g., "Restaurant A").
    pub name: String,
    /// The records of everyone working at this location.
    pub staff: EmployeeSet,
}

impl Location {
    /// Creates a location with the given staff.
    pub fn new(name: impl Into<String>, staff: EmployeeSet) -> Self {
        Self {
            name: name.into(),
            staff,
        }
    }
}
