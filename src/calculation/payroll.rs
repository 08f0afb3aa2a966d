//! Payroll totals.

use rust_decimal::Decimal;

use crate::models::EmployeeSet;

/// Sums the pay of every record in the set.
///
/// The sum is exact and unrounded.
///
/// # Examples
///
/// ```
/// use restaurant_payroll::calculation::calculate_total_payroll;
/// use restaurant_payroll::models::{Employee, EmployeeSet};
/// use rust_decimal::Decimal;
///
/// let staff: EmployeeSet = vec![
///     Employee::new("001", "Alice", Decimal::from(40), Decimal::from(15)),
///     Employee::new("002", "Bob", Decimal::from(35), Decimal::from(12)),
/// ]
/// .into_iter()
/// .collect();
///
/// assert_eq!(calculate_total_payroll(&staff), Decimal::from(1020));
/// ```
pub fn calculate_total_payroll(employees: &EmployeeSet) -> Decimal {
    employees.iter().map(|e| e.calculate_pay()).sum()
}
