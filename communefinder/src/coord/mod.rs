//! Canonical coordinates and range validation.
//!
//! Provides the [`CanonicalPoint`] type produced by every lookup path, the
//! [`validate`] gate that all input encodings funnel through, and conversions
//! between decimal degrees and degrees-minutes-seconds.

mod dms;
mod types;

pub use dms::{combine_components, decimal_to_dms, dms_to_decimal, DmsAngle};
pub use types::{CanonicalPoint, RangeError, MAX_LAT, MAX_LON, MIN_LAT, MIN_LON};

/// Validates a (latitude, longitude) pair and produces a [`CanonicalPoint`].
///
/// Fails closed: both values must be finite, latitude inclusive in
/// `[-90, 90]` and longitude inclusive in `[-180, 180]`. Out-of-range values
/// are never corrected.
pub fn validate(lat: f64, lon: f64) -> Result<CanonicalPoint, RangeError> {
    if !lat.is_finite() {
        return Err(RangeError::NonFiniteLatitude);
    }
    if !lon.is_finite() {
        return Err(RangeError::NonFiniteLongitude);
    }
    if !(MIN_LAT..=MAX_LAT).contains(&lat) {
        return Err(RangeError::InvalidLatitude(lat));
    }
    if !(MIN_LON..=MAX_LON).contains(&lon) {
        return Err(RangeError::InvalidLongitude(lon));
    }
    Ok(CanonicalPoint::new_unchecked(lat, lon))
}
