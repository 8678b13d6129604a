//! Input parsing error types.

use thiserror::Error;

/// Errors from malformed coordinate input.
///
/// These are user-correctable: every variant maps to a message the input
/// form can show next to the offending field. They are never logged as
/// system faults.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseError {
    /// A field did not parse as a number (includes empty required fields)
    #[error("invalid number: '{0}'")]
    InvalidNumber(String),
    /// The degrees field of a DMS form was left blank
    #[error("degrees are required for {0}")]
    MissingDegrees(&'static str),
    /// A minutes or seconds component is outside [0, 60)
    #[error("{field} value {value} out of range (must be at least 0 and less than 60)")]
    OutOfRange { field: &'static str, value: f64 },
    /// A free-text DMS string did not contain two coordinate groups
    #[error("could not find two degree-minute-second groups in '{0}'")]
    Unparseable(String),
}
