//! Payroll summary model.
//!
//! [`PayrollSummary`] holds the values reported for a pair of locations and
//! renders them as the five-line console report.

use std::fmt;

use rust_decimal::Decimal;

/// The reported figures for two locations.
///
/// # Example
///
/// ```
/// use restaurant_payroll::models::PayrollSummary;
/// use rust_decimal::Decimal;
///
/// let summary = PayrollSummary {
///     first_location: "Restaurant A".to_string(),
///     unique_employees: 2,
///     total_payroll: Decimal::from(1020),
///     shared_employees: 0,
///     exclusive_to_first: 1,
///     single_location_employees: 2,
///     shared_identifiers: vec![],
/// };
/// assert!(summary.to_string().starts_with("Total unique employees: 2\n"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PayrollSummary {
    /// Name of the first location, used to label its exclusive staff.
    pub first_location: String,
    /// Size of the union of both locations' staff.
    pub unique_employees: usize,
    /// Sum of pay over the union.
    pub total_payroll: Decimal,
    /// Size of the intersection.
    pub shared_employees: usize,
    /// Size of the first location's staff minus the second's.
    pub exclusive_to_first: usize,
    /// Size of the symmetric difference.
    pub single_location_employees: usize,
    /// Staff identifiers that appear on records at both locations, sorted.
    ///
    /// Not part of the console report.
    pub shared_identifiers: Vec<String>,
}

impl fmt::Display for PayrollSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Total unique employees: {}", self.unique_employees)?;
        writeln!(f, "Total payroll: ${}", self.total_payroll)?;
        writeln!(
            f,
            "Employees working in both restaurants: {}",
            self.shared_employees
        )?;
        writeln!(
            f,
            "Exclusive employees in {}: {}",
            self.first_location, self.exclusive_to_first
        )?;
        write!(
            f,
            "Employees working in just one restaurant: {}",
            self.single_location_employees
        )
    }
}
