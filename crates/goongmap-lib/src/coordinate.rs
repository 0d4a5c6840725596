//! Coordinate string validation.
//!
//! The Goong API takes coordinates as text in `"lat,lng"` form, either as a
//! single value or as a delimited list. The gateway validates the textual shape
//! before any network call; it does not range-check latitude/longitude values,
//! matching the upstream contract.

use once_cell::sync::Lazy;
use regex::Regex;

/// Delimiter between coordinates in `origins`/`destinations` lists.
pub const ORIGINS_DELIMITER: char = '|';

/// Delimiter between coordinates in `waypoints` lists.
pub const WAYPOINTS_DELIMITER: char = ';';

static LATLNG_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^-?\d+(\.\d+)?,-?\d+(\.\d+)?$").expect("lat,lng pattern is valid")
});

/// True when `value` is a single coordinate in `"lat,lng"` form.
///
/// Each component is a decimal number with an optional leading `-`; no
/// surrounding whitespace is allowed.
pub fn is_valid_latlng(value: &str) -> bool {
    LATLNG_PATTERN.is_match(value)
}

/// True when `value` is a non-empty list of coordinates joined by `delimiter`.
///
/// Each segment is trimmed before being checked, so `"21.0,105.8| 21.1,105.9"`
/// is accepted.
pub fn is_valid_latlng_list(value: &str, delimiter: char) -> bool {
    value
        .split(delimiter)
        .all(|segment| is_valid_latlng(segment.trim()))
}
