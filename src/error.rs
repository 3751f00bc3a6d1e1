//! Error types for the Roster Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while managing a roster.

use thiserror::Error;
use uuid::Uuid;

/// The main error type for the Roster Engine.
///
/// All fallible operations in the crate return this error type.
///
/// # Example
///
/// ```
/// use roster_engine::error::RosterError;
///
/// let error = RosterError::VacationShortage {
///     requested: 25,
///     remaining: 20,
/// };
/// assert_eq!(
///     error.to_string(),
///     "Vacation shortage: requested 25 day(s) but only 20 remaining"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RosterError {
    /// A vacation deduction asked for more days than the balance holds.
    #[error("Vacation shortage: requested {requested} day(s) but only {remaining} remaining")]
    VacationShortage {
        /// The number of days requested.
        requested: u32,
        /// The balance at the time of the request.
        remaining: u32,
    },

    /// A vacation deduction asked for a day count that is not allowed.
    #[error("Invalid day count: {days} (at least one day must be requested)")]
    InvalidDayCount {
        /// The rejected day count.
        days: u32,
    },

    /// No employee with the given id is held by the roster.
    #[error("Employee not found: {id}")]
    EmployeeNotFound {
        /// The id that was looked up.
        id: Uuid,
    },

    /// An employee record was invalid or contained inconsistent data.
    #[error("Invalid employee field '{field}': {message}")]
    InvalidEmployee {
        /// The field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// A pay calculation could not be represented as a decimal amount.
    #[error("Calculation error: {message}")]
    CalculationError {
        /// A description of the calculation error.
        message: String,
    },

    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },
}

/// A type alias for Results that return RosterError.
pub type RosterResult<T> = Result<T, RosterError>;
