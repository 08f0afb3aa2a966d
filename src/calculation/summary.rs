//! Location comparison summary.
//!
//! This module combines the set operations and payroll total into the
//! [`PayrollSummary`] reported for two locations.

use std::collections::{BTreeMap, BTreeSet};

use tracing::{debug, warn};

use crate::models::{EmployeeSet, Location, PayrollSummary};

use super::payroll::calculate_total_payroll;
use super::set_operations::{difference, intersection, symmetric_difference, union};

/// Returns the staff identifiers that appear on records in both sets, sorted.
///
/// This looks at identifiers, not record identity. It never changes set
/// membership; it only names the people a location comparison keeps apart.
///
/// # Examples
///
/// ```
/// use restaurant_payroll::calculation::shared_identifiers;
/// use restaurant_payroll::models::{Employee, EmployeeSet};
/// use rust_decimal::Decimal;
///
/// let a: EmployeeSet = vec![Employee::new("002", "Bob", Decimal::from(35), Decimal::from(12))]
///     .into_iter()
///     .collect();
/// let b: EmployeeSet = vec![Employee::new("002", "Bob", Decimal::from(30), Decimal::from(12))]
///     .into_iter()
///     .collect();
///
/// assert_eq!(shared_identifiers(&a, &b), vec!["002".to_string()]);
/// ```
pub fn shared_identifiers(a: &EmployeeSet, b: &EmployeeSet) -> Vec<String> {
    let in_a: BTreeSet<&str> = a.iter().map(|e| e.id()).collect();
    let in_b: BTreeSet<&str> = b.iter().map(|e| e.id()).collect();
    in_a.intersection(&in_b).map(|id| id.to_string()).collect()
}

/// Returns the identifiers carried by more than one record in the set, sorted.
pub fn split_identifiers(employees: &EmployeeSet) -> Vec<String> {
    let mut records_per_id: BTreeMap<&str, usize> = BTreeMap::new();
    for employee in employees {
        *records_per_id.entry(employee.id()).or_default() += 1;
    }

    records_per_id
        .into_iter()
        .filter(|(_, records)| *records > 1)
        .map(|(id, _)| id.to_string())
        .collect()
}

/// Builds the payroll summary for two locations.
///
/// The union of both staff sets is the workforce whose pay is totalled.
/// Intersection, `first` minus `second`, and symmetric difference are
/// counted for the report.
///
/// Any identifier carried by more than one record in the union is logged at
/// `warn`, because the counts treat those records as different employees.
pub fn summarize(first: &Location, second: &Location) -> PayrollSummary {
    let all_employees = union(&first.staff, &second.staff);
    let total_payroll = calculate_total_payroll(&all_employees);
    let shared = intersection(&first.staff, &second.staff);
    let exclusive = difference(&first.staff, &second.staff);
    let single_location = symmetric_difference(&first.staff, &second.staff);

    for id in split_identifiers(&all_employees) {
        warn!(
            employee_id = %id,
            "Identifier appears on separate records; counted as distinct employees"
        );
    }

    debug!(
        first = %first.name,
        second = %second.name,
        unique_employees = all_employees.len(),
        total_payroll = %total_payroll,
        "Payroll summary built"
    );

    PayrollSummary {
        first_location: first.name.clone(),
        unique_employees: all_employees.len(),
        total_payroll,
        shared_employees: shared.len(),
        exclusive_to_first: exclusive.len(),
        single_location_employees: single_location.len(),
        shared_identifiers: shared_identifiers(&first.staff, &second.staff),
    }
}
