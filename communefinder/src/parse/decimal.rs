//! Decimal coordinate input: free-text pairs and split fields.

use regex::Regex;
use std::sync::LazyLock;

use super::error::ParseError;

/// Matches `number, number` with optional whitespace, sign and fraction.
static DECIMAL_PAIR_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*([+-]?\d+(?:\.\d+)?)\s*,\s*([+-]?\d+(?:\.\d+)?)\s*$").expect("valid regex")
});

/// Result of scanning free text for a decimal coordinate pair.
#[derive(Debug, Clone, PartialEq)]
pub enum DecimalPairScan {
    /// The text is a coordinate pair, interpreted as (latitude, longitude).
    Pair { lat: f64, lon: f64 },
    /// The text is not a coordinate pair and should be treated as a name query.
    NameQuery,
}

/// Scans free text for a `lat, lon` decimal pair.
///
/// Text that does not match the pair pattern is not an error: it signals
/// that the input should be resolved as a commune name instead.
///
/// When the first number falls outside ±90 but the second falls within,
/// the interpretation is swapped (first number taken as longitude). This
/// tolerates either ordering convention but is ambiguous when both numbers
/// are within latitude range: the as-written (lat, lon) order always wins
/// there, even if the user meant the opposite.
pub fn scan_decimal_pair(text: &str) -> DecimalPairScan {
    let Some(captures) = DECIMAL_PAIR_RE.captures(text) else {
        return DecimalPairScan::NameQuery;
    };

    // The regex only admits well-formed numbers, so these parses cannot fail
    let first: f64 = captures[1].parse().unwrap_or(f64::NAN);
    let second: f64 = captures[2].parse().unwrap_or(f64::NAN);

    if first.abs() > 90.0 && second.abs() <= 90.0 {
        DecimalPairScan::Pair {
            lat: second,
            lon: first,
        }
    } else {
        DecimalPairScan::Pair {
            lat: first,
            lon: second,
        }
    }
}

/// Parses the split latitude/longitude text fields.
///
/// Both fields are required; each is parsed independently as a float.
pub fn parse_decimal_fields(lat: &str, lon: &str) -> Result<(f64, f64), ParseError> {
    let lat = parse_field(lat)?;
    let lon = parse_field(lon)?;
    Ok((lat, lon))
}

fn parse_field(raw: &str) -> Result<f64, ParseError> {
    let trimmed = raw.trim();
    trimmed
        .parse::<f64>()
        .map_err(|_| ParseError::InvalidNumber(trimmed.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scan_plain_pair() {
        let scan = scan_decimal_pair("-21.5,165.5");
        assert_eq!(
            scan,
            DecimalPairScan::Pair {
                lat: -21.5,
                lon: 165.5
            }
        );
    }

    #[test]
    fn test_scan_pair_with_whitespace_and_signs() {
        let scan = scan_decimal_pair("  +45.0 , -120.25  ");
        assert_eq!(
            scan,
            DecimalPairScan::Pair {
                lat: 45.0,
                lon: -120.25
            }
        );
    }

    #[test]
    fn test_scan_swaps_when_first_is_longitude() {
        // 166.458 cannot be a latitude, so the ordering is taken as (lon, lat)
        let scan = scan_decimal_pair("166.458, -22.2758");
        assert_eq!(
            scan,
            DecimalPairScan::Pair {
                lat: -22.2758,
                lon: 166.458
            }
        );
    }

    #[test]
    fn test_scan_keeps_as_written_order_when_both_fit_latitude() {
        // Both values fit ±90: the as-written (lat, lon) reading wins
        let scan = scan_decimal_pair("45.0, 60.0");
        assert_eq!(
            scan,
            DecimalPairScan::Pair {
                lat: 45.0,
                lon: 60.0
            }
        );
    }

    #[test]
    fn test_scan_no_swap_when_both_out_of_latitude_range() {
        // Neither value fits ±90; left for the range validator to reject
        let scan = scan_decimal_pair("120.0, 150.0");
        assert_eq!(
            scan,
            DecimalPairScan::Pair {
                lat: 120.0,
                lon: 150.0
            }
        );
    }

    #[test]
    fn test_scan_name_query_for_plain_text() {
        assert_eq!(scan_decimal_pair("Nouméa"), DecimalPairScan::NameQuery);
        assert_eq!(scan_decimal_pair("noum"), DecimalPairScan::NameQuery);
    }

    #[test]
    fn test_scan_name_query_for_partial_pair() {
        assert_eq!(scan_decimal_pair("-21.5,"), DecimalPairScan::NameQuery);
        assert_eq!(scan_decimal_pair("-21.5"), DecimalPairScan::NameQuery);
        assert_eq!(
            scan_decimal_pair("-21.5, 165.5, 12"),
            DecimalPairScan::NameQuery
        );
    }

    #[test]
    fn test_parse_decimal_fields() {
        let (lat, lon) = parse_decimal_fields(" -22.2758 ", "166.458").unwrap();
        assert_eq!(lat, -22.2758);
        assert_eq!(lon, 166.458);
    }

    #[test]
    fn test_parse_decimal_fields_rejects_empty() {
        let err = parse_decimal_fields("", "166.458").unwrap_err();
        assert_eq!(err, ParseError::InvalidNumber(String::new()));
    }

    #[test]
    fn test_parse_decimal_fields_rejects_garbage() {
        let err = parse_decimal_fields("-22.27", "east").unwrap_err();
        assert_eq!(err, ParseError::InvalidNumber("east".to_string()));
    }
}
