//! Recursive snake_case → camelCase key rewrite for JSON values.
//!
//! The Goong API answers with underscore-separated keys at arbitrary nesting
//! depth (`geocoded_waypoints`, `overview_polyline`, ...). The gateway's
//! callers consume camelCase, so every successful upstream body is rewritten
//! before it leaves the client.

use serde_json::Value;

/// Rewrite every object key in `value` from snake_case to camelCase.
///
/// Arrays are normalized element-wise with order and length preserved; numbers,
/// strings, booleans and null pass through unchanged. Only `_x` sequences
/// (underscore followed by a lowercase ASCII letter) are rewritten, so keys
/// that are already camelCase come back untouched and the function is
/// idempotent.
///
/// Known limitation: if two distinct source keys rewrite to the same target key
/// (for example `place_id` and `placeId` in one object), the later one in
/// iteration order silently wins.
pub fn camel_case_keys(value: Value) -> Value {
    match value {
        Value::Array(items) => Value::Array(items.into_iter().map(camel_case_keys).collect()),
        Value::Object(fields) => Value::Object(
            fields
                .into_iter()
                .map(|(key, value)| (camel_case_key(&key), camel_case_keys(value)))
                .collect(),
        ),
        other => other,
    }
}

/// Rewrite a single key, replacing each `_x` with uppercase `X`.
fn camel_case_key(key: &str) -> String {
    let mut out = String::with_capacity(key.len());
    let mut chars = key.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch == '_' {
            if let Some(next) = chars.peek().copied() {
                if next.is_ascii_lowercase() {
                    out.push(next.to_ascii_uppercase());
                    chars.next();
                    continue;
                }
            }
        }
        out.push(ch);
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_key_rewrite() {
        assert_eq!(camel_case_key("place_id"), "placeId");
        assert_eq!(camel_case_key("overview_polyline"), "overviewPolyline");
        assert_eq!(camel_case_key("weight_name"), "weightName");
        assert_eq!(camel_case_key("a_b_c"), "aBC");
    }

    #[test]
    fn test_key_rewrite_leaves_non_matches_alone() {
        assert_eq!(camel_case_key("status"), "status");
        assert_eq!(camel_case_key("alreadyCamel"), "alreadyCamel");
        // Underscore not followed by a lowercase letter is kept.
        assert_eq!(camel_case_key("trailing_"), "trailing_");
        assert_eq!(camel_case_key("_1st"), "_1st");
        assert_eq!(camel_case_key("SCREAMING_CASE"), "SCREAMING_CASE");
        // Only the second underscore of a double underscore matches.
        assert_eq!(camel_case_key("a__b"), "a_B");
    }

    #[test]
    fn test_nested_normalization() {
        let input = json!({
            "geocoded_waypoints": [{"place_id": "abc"}],
            "routes": [{
                "overview_polyline": {"points": "xyz"},
                "legs": [{"start_location": {"lat": 21.0, "lng": 105.8}}]
            }]
        });

        let expected = json!({
            "geocodedWaypoints": [{"placeId": "abc"}],
            "routes": [{
                "overviewPolyline": {"points": "xyz"},
                "legs": [{"startLocation": {"lat": 21.0, "lng": 105.8}}]
            }]
        });

        assert_eq!(camel_case_keys(input), expected);
    }

    #[test]
    fn test_idempotent_on_camel_input() {
        let input = json!({"geocodedWaypoints": [{"placeId": "abc"}], "status": "OK"});
        assert_eq!(camel_case_keys(input.clone()), input);
    }

    #[test]
    fn test_primitives_and_arrays_pass_through() {
        assert_eq!(camel_case_keys(json!(null)), json!(null));
        assert_eq!(camel_case_keys(json!(42)), json!(42));
        assert_eq!(camel_case_keys(json!("snake_case")), json!("snake_case"));
        assert_eq!(camel_case_keys(json!(true)), json!(true));
        assert_eq!(camel_case_keys(json!([1, "a_b", null])), json!([1, "a_b", null]));
    }

    #[test]
    fn test_structure_preserved() {
        let input = json!({"rows": [{"elements": [{"distance": {"value": 5}}, {"distance": {"value": 7}}]}]});
        let normalized = camel_case_keys(input);
        let elements = normalized["rows"][0]["elements"].as_array().unwrap();
        assert_eq!(elements.len(), 2);
        assert_eq!(elements[1]["distance"]["value"], 7);
    }

    #[test]
    fn test_collision_last_write_wins() {
        // Documented limitation, not a guarantee: the later key in iteration
        // order overwrites the earlier one.
        let input = json!({"place_id": "first", "placeId": "second"});
        let normalized = camel_case_keys(input);
        let object = normalized.as_object().unwrap();
        assert_eq!(object.len(), 1);
        assert!(object.contains_key("placeId"));
    }
}
