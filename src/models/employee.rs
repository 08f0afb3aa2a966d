//! Employee model.
//!
//! This module defines the Employee record used for pay calculation and
//! staff set membership.

use std::hash::{Hash, Hasher};

use rust_decimal::Decimal;
use uuid::Uuid;

/// Represents an employee working at a restaurant location.
///
/// Every call to [`Employee::new`] creates a distinct record. Equality and
/// hashing compare record identity only, so two records with the same
/// identifier, name, hours and rate are still different set members.
/// Cloning an `Employee` keeps the identity: the clone is the same record.
/// Fields are read-only after construction, so records with the same
/// identity always carry the same payload.
///
/// # Example
///
/// ```
/// use restaurant_payroll::models::Employee;
/// use rust_decimal::Decimal;
///
/// let morning = Employee::new("002", "Bob", Decimal::from(35), Decimal::from(12));
/// let evening = Employee::new("002", "Bob", Decimal::from(35), Decimal::from(12));
///
/// assert_ne!(morning, evening);
/// assert_eq!(morning, morning.clone());
/// ```
///
/// Fields cannot be assigned after construction:
///
/// ```compile_fail
/// use restaurant_payroll::models::Employee;
/// use rust_decimal::Decimal;
///
/// let mut bob = Employee::new("002", "Bob", Decimal::from(35), Decimal::from(12));
/// bob.hours_worked = Decimal::from(100);
/// ```
#[derive(Debug, Clone)]
pub struct Employee {
    record_id: Uuid,
    id: String,
    name: String,
    hours_worked: Decimal,
    hourly_rate: Decimal,
}

impl Employee {
    /// Creates a new employee record. No validation is applied.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        hours_worked: Decimal,
        hourly_rate: Decimal,
    ) -> Self {
        Self {
            record_id: Uuid::new_v4(),
            id: id.into(),
            name: name.into(),
            hours_worked,
            hourly_rate,
        }
    }

    /// Returns the identity that defines set membership for this record.
    pub fn record_id(&self) -> Uuid {
        self.record_id
    }

    /// Staff identifier (e.g., "001").
    pub fn id(&self) -> &str {
        &self.id
    }

    /// The employee's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Hours worked in the pay period.
    pub fn hours_worked(&self) -> Decimal {
        self.hours_worked
    }

    /// Hourly pay rate.
    pub fn hourly_rate(&self) -> Decimal {
        self.hourly_rate
    }

    /// Returns the pay for this record: hours worked times hourly rate.
    ///
    /// # Examples
    ///
    /// ```
    /// use restaurant_payroll::models::Employee;
    /// use rust_decimal::Decimal;
    ///
    /// let alice = Employee::new("001", "Alice", Decimal::from(40), Decimal::from(15));
    /// assert_eq!(alice.calculate_pay(), Decimal::from(600));
    /// ```
    pub fn calculate_pay(&self) -> Decimal {
        self.hours_worked * self.hourly_rate
    }
}

impl PartialEq for Employee {
    fn eq(&self, other: &Self) -> bool {
        self.record_id == other.record_id
    }
}

impl Eq for Employee {}

impl Hash for Employee {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.record_id.hash(state);
    }
}
