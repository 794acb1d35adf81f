//! Error types for the payroll calculation engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur during a pay calculation.

use thiserror::Error;

/// The main error type for the payroll calculation engine.
///
/// All operations in the engine return this error type, making it easy
/// to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use paykit_engine::error::EngineError;
///
/// let error = EngineError::RatesNotFound { year: 2019 };
/// assert_eq!(error.to_string(), "No legal rate table for year 2019");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// No legal rate table exists for the requested year.
    #[error("No legal rate table for year {year}")]
    RatesNotFound {
        /// The year that has no rate table.
        year: i32,
    },

    /// The calculation month string could not be parsed.
    #[error("Invalid calculation month '{value}': expected YYYY-MM")]
    InvalidMonth {
        /// The value that failed to parse.
        value: String,
    },

    /// A work shift was invalid or contained inconsistent data.
    #[error("Invalid shift on {date}: {message}")]
    InvalidShift {
        /// The date of the invalid shift (or the raw input when the date
        /// itself failed to parse).
        date: String,
        /// A description of what made the shift invalid.
        message: String,
    },

    /// An employee record was invalid or contained inconsistent data.
    #[error("Invalid employee field '{field}': {message}")]
    InvalidEmployee {
        /// The field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// An allowance entry was invalid.
    #[error("Invalid allowance '{name}': {message}")]
    InvalidAllowance {
        /// The name of the invalid allowance.
        name: String,
        /// A description of what made the allowance invalid.
        message: String,
    },

    /// The request was structurally valid but semantically unusable.
    #[error("Invalid request: {message}")]
    InvalidRequest {
        /// A description of the problem.
        message: String,
    },

    /// A CSV shift import row could not be parsed.
    #[error("CSV parse error at line {line}: {message}")]
    CsvParseError {
        /// The 1-based line number of the bad row.
        line: usize,
        /// A description of the parse failure.
        message: String,
    },

    /// A general calculation error occurred.
    #[error("Calculation error: {message}")]
    CalculationError {
        /// A description of the calculation error.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
