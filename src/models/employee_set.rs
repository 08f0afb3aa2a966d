//! Unordered collections of employee records.

use std::collections::{HashSet, hash_set};

use super::Employee;

/// The staff of a location, or a set derived from location staff.
///
/// Membership follows [`Employee`] equality, which is record identity.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmployeeSet {
    members: HashSet<Employee>,
}

impl EmployeeSet {
    /// Creates an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a record. Returns false if that record was already present.
    pub fn insert(&mut self, employee: Employee) -> bool {
        self.members.insert(employee)
    }

    /// Returns true if the given record is a member.
    pub fn contains(&self, employee: &Employee) -> bool {
        self.members.contains(employee)
    }

    /// Number of member records.
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Returns true if the set has no members.
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Iterates over member records in no particular order.
    pub fn iter(&self) -> hash_set::Iter<'_, Employee> {
        self.members.iter()
    }
}

impl FromIterator<Employee> for EmployeeSet {
    fn from_iter<I: IntoIterator<Item = Employee>>(iter: I) -> Self {
        Self {
            members: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for EmployeeSet {
    type Item = Employee;
    type IntoIter = hash_set::IntoIter<Employee>;

    fn into_iter(self) -> Self::IntoIter {
        self.members.into_iter()
    }
}

impl<'a> IntoIterator for &'a EmployeeSet {
    type Item = &'a Employee;
    type IntoIter = hash_set::Iter<'a, Employee>;

    fn into_iter(self) -> Self::IntoIter {
        self.members.iter()
    }
}
