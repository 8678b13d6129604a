//! Free-text DMS coordinate scanner.
//!
//! Accepts strings like `20°44'19.7"S 164°47'41.6"E`, as copied from most
//! mapping sites. Minute and second marks are accepted in both their ASCII
//! (`'`, `"`) and Unicode prime (`′`, `″`) forms.

use regex::Regex;
use std::sync::LazyLock;

use super::error::ParseError;
use crate::coord::combine_components;

/// One `degrees° minutes′ seconds″ compass` group. Minutes and seconds are
/// optional and default to 0.
static DMS_GROUP_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"([+-]?\d+(?:\.\d+)?)\s*°\s*(?:(\d+(?:\.\d+)?)\s*['′]\s*)?(?:(\d+(?:\.\d+)?)\s*["″]\s*)?([NSEWnsew])"#,
    )
    .expect("valid regex")
});

/// Scans free text for two DMS coordinate groups.
///
/// The first two matches in left-to-right order are taken as latitude then
/// longitude; the compass letters do not reassign axes, they only carry the
/// hemisphere. When the degree token itself is signed, its sign wins over
/// the compass letter.
pub fn parse_dms_text(text: &str) -> Result<(f64, f64), ParseError> {
    let mut groups = DMS_GROUP_RE.captures_iter(text);

    let lat = groups.next();
    let lon = groups.next();
    match (lat, lon) {
        (Some(lat), Some(lon)) => Ok((group_value(&lat), group_value(&lon))),
        _ => Err(ParseError::Unparseable(text.to_string())),
    }
}

fn group_value(captures: &regex::Captures<'_>) -> f64 {
    // The regex admits only well-formed numbers in each component
    let degrees: f64 = captures[1].parse().unwrap_or(f64::NAN);
    let minutes: f64 = captures
        .get(2)
        .map_or(0.0, |m| m.as_str().parse().unwrap_or(f64::NAN));
    let seconds: f64 = captures
        .get(3)
        .map_or(0.0, |m| m.as_str().parse().unwrap_or(f64::NAN));

    let value = combine_components(degrees, minutes, seconds);

    // A signed degree token is authoritative; otherwise S and W point the
    // magnitude negative
    if degrees.is_sign_negative() {
        value
    } else {
        match &captures[4] {
            "S" | "s" | "W" | "w" => -value,
            _ => value,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ascii_marks() {
        let (lat, lon) = parse_dms_text(r#"20°44'19.7"S 164°47'41.6"E"#).unwrap();
        assert!((lat - (-20.7388)).abs() < 0.0001);
        assert!((lon - 164.7947).abs() < 0.0001);
    }

    #[test]
    fn test_unicode_prime_marks() {
        let (lat, lon) = parse_dms_text("20°44′19.7″S 164°47′41.6″E").unwrap();
        assert!((lat - (-20.7388)).abs() < 0.0001);
        assert!((lon - 164.7947).abs() < 0.0001);
    }

    #[test]
    fn test_minutes_and_seconds_optional() {
        let (lat, lon) = parse_dms_text("21°S 165°30'E").unwrap();
        assert_eq!(lat, -21.0);
        assert_eq!(lon, 165.5);
    }

    #[test]
    fn test_positional_order_beats_compass_letters() {
        // Longitude written first: the first group is still taken as latitude
        let (lat, lon) = parse_dms_text("164°47'41.6\"E 20°44'19.7\"S").unwrap();
        assert!((lat - 164.7947).abs() < 0.0001);
        assert!((lon - (-20.7388)).abs() < 0.0001);
    }

    #[test]
    fn test_signed_degree_token_wins_over_compass() {
        // -20°…N keeps the explicit negative sign
        let (lat, _) = parse_dms_text("-20°44'19.7\"N 164°47'41.6\"E").unwrap();
        assert!((lat - (-20.7388)).abs() < 0.0001);
    }

    #[test]
    fn test_north_and_east_are_positive() {
        let (lat, lon) = parse_dms_text("48°51'24\"N 2°21'08\"E").unwrap();
        assert!((lat - 48.85667).abs() < 0.0001);
        assert!((lon - 2.35222).abs() < 0.0001);
    }

    #[test]
    fn test_lowercase_compass_letters() {
        let (lat, lon) = parse_dms_text("20°44'19.7\"s 164°47'41.6\"e").unwrap();
        assert!(lat < 0.0);
        assert!(lon > 0.0);
    }

    #[test]
    fn test_single_group_is_unparseable() {
        let err = parse_dms_text("20°44'19.7\"S").unwrap_err();
        assert_eq!(err, ParseError::Unparseable("20°44'19.7\"S".to_string()));
    }

    #[test]
    fn test_plain_text_is_unparseable() {
        assert!(parse_dms_text("Nouméa").is_err());
        assert!(parse_dms_text("").is_err());
    }
}
