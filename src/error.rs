//! Error types for restaurant payroll.
//!
//! Set arithmetic and pay calculation cannot fail. Errors only arise while
//! reading roster data into location sets.

use thiserror::Error;

/// The main error type for restaurant payroll.
///
/// # Example
///
/// ```
/// use restaurant_payroll::error::PayrollError;
///
/// let error = PayrollError::LocationNotFound {
///     name: "Restaurant C".to_string(),
/// };
/// assert_eq!(error.to_string(), "Location not found: Restaurant C");
/// ```
#[derive(Debug, Error)]
pub enum PayrollError {
    /// Roster data could not be parsed.
    #[error("Failed to parse roster '{source_name}': {message}")]
    RosterParseError {
        /// Where the roster text came from.
        source_name: String,
        /// A description of the parse error.
        message: String,
    },

    /// A location was not present in the roster.
    #[error("Location not found: {name}")]
    LocationNotFound {
        /// The location name that was requested.
        name: String,
    },

    /// The roster does not list enough locations to compare.
    #[error("Roster needs at least two locations, found {found}")]
    NotEnoughLocations {
        /// The number of locations present.
        found: usize,
    },
}

/// A type alias for Results that return PayrollError.
pub type PayrollResult<T> = Result<T, PayrollError>;
