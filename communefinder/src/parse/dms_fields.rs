//! The six-field degree/minute/second input form.

use super::error::ParseError;
use crate::coord::combine_components;

/// Raw values of the six DMS entry fields, one triple per axis.
///
/// All fields are kept as entered; parsing happens in [`parse_dms_fields`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DmsFieldSet {
    pub lat_degrees: String,
    pub lat_minutes: String,
    pub lat_seconds: String,
    pub lon_degrees: String,
    pub lon_minutes: String,
    pub lon_seconds: String,
}

/// Parses the six DMS fields into a signed decimal (latitude, longitude).
///
/// Degrees are required for both axes; minutes and seconds default to 0
/// when blank and must lie in `[0, 60)`. The sign of each result follows
/// the sign of its degrees field, there is no separate hemisphere flag.
pub fn parse_dms_fields(fields: &DmsFieldSet) -> Result<(f64, f64), ParseError> {
    let lat = parse_axis(
        "latitude",
        &fields.lat_degrees,
        &fields.lat_minutes,
        &fields.lat_seconds,
    )?;
    let lon = parse_axis(
        "longitude",
        &fields.lon_degrees,
        &fields.lon_minutes,
        &fields.lon_seconds,
    )?;
    Ok((lat, lon))
}

fn parse_axis(
    axis: &'static str,
    degrees: &str,
    minutes: &str,
    seconds: &str,
) -> Result<f64, ParseError> {
    let degrees = degrees.trim();
    if degrees.is_empty() {
        return Err(ParseError::MissingDegrees(axis));
    }
    let degrees: f64 = degrees
        .parse()
        .map_err(|_| ParseError::InvalidNumber(degrees.to_string()))?;

    let minutes = parse_component("minutes", minutes)?;
    let seconds = parse_component("seconds", seconds)?;

    Ok(combine_components(degrees, minutes, seconds))
}

/// Parses an optional minutes/seconds field, defaulting blanks to 0.
fn parse_component(field: &'static str, raw: &str) -> Result<f64, ParseError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(0.0);
    }
    let value: f64 = trimmed
        .parse()
        .map_err(|_| ParseError::InvalidNumber(trimmed.to_string()))?;
    if !(0.0..60.0).contains(&value) {
        return Err(ParseError::OutOfRange { field, value });
    }
    Ok(value)
}
