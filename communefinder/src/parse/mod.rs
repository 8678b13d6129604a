//! Coordinate input normalization.
//!
//! Converts any of the four supported input encodings into a canonical
//! (latitude, longitude) pair, or reports why it could not. Free text that
//! is not a coordinate at all comes back as a name query rather than an
//! error, so the caller can fall through to the commune-name resolver.

mod decimal;
mod dms_fields;
mod dms_text;
mod error;

pub use decimal::{parse_decimal_fields, scan_decimal_pair, DecimalPairScan};
pub use dms_fields::{parse_dms_fields, DmsFieldSet};
pub use dms_text::parse_dms_text;
pub use error::ParseError;

use thiserror::Error;

use crate::coord::{validate, CanonicalPoint, RangeError};

/// One of the four supported coordinate input encodings.
///
/// Exactly one is active at a time in the entry form; values are not
/// converted between encodings when the form switches, except through the
/// explicit decimal↔DMS toggle handled by the controller.
#[derive(Debug, Clone, PartialEq)]
pub enum InputEncoding {
    /// Free text: either a `lat, lon` decimal pair or a commune name.
    SingleDecimalPair(String),
    /// Separate latitude and longitude text fields.
    DualDecimalFields { lat: String, lon: String },
    /// Six numeric fields: degrees/minutes/seconds for each axis.
    DmsFields(DmsFieldSet),
    /// Free text containing two degree-minute-second-compass groups.
    SingleDmsString(String),
}

/// Outcome of normalizing an input encoding.
#[derive(Debug, Clone, PartialEq)]
pub enum Normalized {
    /// The input was a coordinate and passed range validation.
    Point(CanonicalPoint),
    /// The input was free text with no coordinate in it; resolve it as a
    /// commune name instead.
    NameQuery(String),
}

/// Why an input failed to normalize.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum NormalizeError {
    /// The input is malformed
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// The input parsed but is geographically out of bounds
    #[error(transparent)]
    Range(#[from] RangeError),
}

/// Normalizes any input encoding to a validated canonical point.
///
/// All four paths funnel through [`validate`]; a numerically well-formed
/// pair that is out of Earth bounds is rejected here, never clamped.
pub fn normalize(encoding: &InputEncoding) -> Result<Normalized, NormalizeError> {
    let (lat, lon) = match encoding {
        InputEncoding::SingleDecimalPair(text) => match scan_decimal_pair(text) {
            DecimalPairScan::Pair { lat, lon } => (lat, lon),
            DecimalPairScan::NameQuery => {
                return Ok(Normalized::NameQuery(text.trim().to_string()));
            }
        },
        InputEncoding::DualDecimalFields { lat, lon } => parse_decimal_fields(lat, lon)?,
        InputEncoding::DmsFields(fields) => parse_dms_fields(fields)?,
        InputEncoding::SingleDmsString(text) => parse_dms_text(text)?,
    };

    Ok(Normalized::Point(validate(lat, lon)?))
}
