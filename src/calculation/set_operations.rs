//! Set arithmetic over employee sets.
//!
//! All operations compare members by record identity, so records that
//! merely share an identifier are never merged.

use tracing::debug;

use crate::models::EmployeeSet;

/// Returns every record that belongs to `a`, `b`, or both.
///
/// # Examples
///
/// ```
/// use restaurant_payroll::calculation::union;
/// use restaurant_payroll::models::{Employee, EmployeeSet};
/// use rust_decimal::Decimal;
///
/// let bob = Employee::new("002", "Bob", Decimal::from(35), Decimal::from(12));
/// let a: EmployeeSet = vec![bob.clone()].into_iter().collect();
/// let b: EmployeeSet = vec![
///     bob,
///     Employee::new("002", "Bob", Decimal::from(30), Decimal::from(12)),
/// ]
/// .into_iter()
/// .collect();
///
/// assert_eq!(union(&a, &b).len(), 2);
/// ```
pub fn union(a: &EmployeeSet, b: &EmployeeSet) -> EmployeeSet {
    let result: EmployeeSet = a.iter().chain(b.iter()).cloned().collect();
    debug!(left = a.len(), right = b.len(), size = result.len(), "union");
    result
}

/// Returns the records present in both `a` and `b`.
pub fn intersection(a: &EmployeeSet, b: &EmployeeSet) -> EmployeeSet {
    let result: EmployeeSet = a.iter().filter(|e| b.contains(e)).cloned().collect();
    debug!(left = a.len(), right = b.len(), size = result.len(), "intersection");
    result
}

/// Returns the records of `a` that are not in `b`.
pub fn difference(a: &EmployeeSet, b: &EmployeeSet) -> EmployeeSet {
    let result: EmployeeSet = a.iter().filter(|e| !b.contains(e)).cloned().collect();
    debug!(left = a.len(), right = b.len(), size = result.len(), "difference");
    result
}

/// Returns the records that belong to exactly one of `a` and `b`.
pub fn symmetric_difference(a: &EmployeeSet, b: &EmployeeSet) -> EmployeeSet {
    let result: EmployeeSet = a
        .iter()
        .filter(|e| !b.contains(e))
        .chain(b.iter().filter(|e| !a.contains(e)))
        .cloned()
        .collect();
    debug!(
        left = a.len(),
        right = b.len(),
        size = result.len(),
        "symmetric difference"
    );
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Employee;
    use rust_decimal::Decimal;

    fn employee(id: &str, name: &str, hours: i64, rate: i64) -> Employee {
        Employee::new(id, name, Decimal::from(hours), Decimal::from(rate))
    }

    fn set_of(records: &[&Employee]) -> EmployeeSet {
        records.iter().map(|e| (*e).clone()).collect()
    }

    /// Two locations that share one Bob record and each have their own.
    fn create_overlapping_sets() -> (EmployeeSet, EmployeeSet, Employee) {
        let alice = employee("001", "Alice", 40, 15);
        let shared_bob = employee("002", "Bob", 35, 12);
        let dave = employee("004", "Dave", 38, 14);
        let other_bob = employee("002", "Bob", 30, 12);

        let a = set_of(&[&alice, &shared_bob]);
        let b = set_of(&[&dave, &shared_bob, &other_bob]);
        (a, b, shared_bob)
    }

    #[test]
    fn test_union_merges_shared_record_once() {
        let (a, b, shared_bob) = create_overlapping_sets();
        let result = union(&a, &b);

        assert_eq!(result.len(), 4);
        assert!(result.contains(&shared_bob));
    }

    #[test]
    fn test_intersection_contains_only_shared_record() {
        let (a, b, shared_bob) = create_overlapping_sets();
        let result = intersection(&a, &b);

        assert_eq!(result.len(), 1);
        assert!(result.contains(&shared_bob));
    }

    #[test]
    fn test_difference_excludes_shared_record() {
        let (a, b, shared_bob) = create_overlapping_sets();
        let result = difference(&a, &b);

        assert_eq!(result.len(), 1);
        assert!(!result.contains(&shared_bob));
        assert_eq!(result.iter().next().unwrap().name(), "Alice");
    }

    #[test]
    fn test_symmetric_difference_excludes_shared_record() {
        let (a, b, shared_bob) = create_overlapping_sets();
        let result = symmetric_difference(&a, &b);

        assert_eq!(result.len(), 3);
        assert!(!result.contains(&shared_bob));
    }

    #[test]
    fn test_lookalike_records_never_intersect() {
        let a = set_of(&[&employee("002", "Bob", 35, 12)]);
        let b = set_of(&[&employee("002", "Bob", 35, 12)]);

        assert!(intersection(&a, &b).is_empty());
        assert_eq!(union(&a, &b).len(), 2);
        assert_eq!(difference(&a, &b).len(), 1);
        assert_eq!(symmetric_difference(&a, &b).len(), 2);
    }

    #[test]
    fn test_operations_with_empty_set() {
        let a = set_of(&[&employee("001", "Alice", 40, 15)]);
        let empty = EmployeeSet::new();

        assert_eq!(union(&a, &empty), a);
        assert!(intersection(&a, &empty).is_empty());
        assert_eq!(difference(&a, &empty), a);
        assert!(difference(&empty, &a).is_empty());
        assert_eq!(symmetric_difference(&empty, &a), a);
    }
}

#[cfg(test)]
mod property_based_tests {
    use super::*;
    use crate::calculation::calculate_total_payroll;
    use crate::models::Employee;
    use proptest::prelude::*;
    use rust_decimal::Decimal;

    /// Each entry is one record: hours, rate, and whether it is staffed at A and at B.
    fn roster_strategy() -> impl Strategy<Value = Vec<(u32, u32, bool, bool)>> {
        prop::collection::vec((0u32..60, 0u32..40, any::<bool>(), any::<bool>()), 0..24)
    }

    fn build_sets(roster: &[(u32, u32, bool, bool)]) -> (EmployeeSet, EmployeeSet) {
        let mut a = EmployeeSet::new();
        let mut b = EmployeeSet::new();
        for (index, (hours, rate, in_a, in_b)) in roster.iter().enumerate() {
            let record = Employee::new(
                format!("{:03}", index % 5),
                "Staff",
                Decimal::from(*hours),
                Decimal::from(*rate),
            );
            if *in_a {
                a.insert(record.clone());
            }
            if *in_b {
                b.insert(record);
            }
        }
        (a, b)
    }

    proptest! {
        /// Union is at least as large as either input and at most their combined size.
        #[test]
        fn union_size_is_bounded(roster in roster_strategy()) {
            let (a, b) = build_sets(&roster);
            let size = union(&a, &b).len();

            prop_assert!(size >= a.len().max(b.len()));
            prop_assert!(size <= a.len() + b.len());
        }

        /// Intersection and symmetric difference partition the union.
        #[test]
        fn intersection_and_symmetric_difference_partition_union(roster in roster_strategy()) {
            let (a, b) = build_sets(&roster);
            let all = union(&a, &b);
            let both = intersection(&a, &b);
            let one = symmetric_difference(&a, &b);

            prop_assert_eq!(both.len() + one.len(), all.len());
            for record in &all {
                prop_assert!(both.contains(record) != one.contains(record));
            }
        }

        /// Every record of A is either shared with B or exclusive to A.
        #[test]
        fn first_set_splits_into_shared_and_exclusive(roster in roster_strategy()) {
            let (a, b) = build_sets(&roster);

            prop_assert_eq!(a.len(), intersection(&a, &b).len() + difference(&a, &b).len());
        }

        /// Total payroll of the union does not depend on input order.
        #[test]
        fn union_payroll_is_order_independent(roster in roster_strategy()) {
            let (a, b) = build_sets(&roster);
            let forward = calculate_total_payroll(&union(&a, &b));
            let reversed = calculate_total_payroll(&union(&b, &a));

            let mut records: Vec<Employee> = a.iter().chain(b.iter()).cloned().collect();
            records.reverse();
            let rebuilt: EmployeeSet = records.into_iter().collect();

            prop_assert_eq!(forward, reversed);
            prop_assert_eq!(forward, calculate_total_payroll(&rebuilt));
        }
    }
}
