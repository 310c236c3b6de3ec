//! Helpers shared by every provider's record mapping.

use super::traits::RawRecord;
use serde_json::Value;

/// Separator between the city and state parts of a location string
pub const LOCATION_SEPARATOR: char = ',';

/// Ensure every key in `keys` is present in `record`.
///
/// Keys that are absent or hold JSON `null` are set to the empty string.
/// Keys already holding a value are left untouched, and keys outside `keys`
/// pass through.
#[must_use]
pub fn parse_attribute_defaults(mut record: RawRecord, keys: &[&str]) -> RawRecord {
    for key in keys {
        match record.get(*key) {
            Some(value) if !value.is_null() => {}
            _ => {
                record.insert((*key).to_string(), Value::String(String::new()));
            }
        }
    }
    record
}

/// Read `key` from a defaulted record as a string.
///
/// Strings come back as-is, other scalars in their JSON text form, and
/// a missing or `null` key as the empty string.
#[must_use]
pub fn string_attribute(record: &RawRecord, key: &str) -> String {
    match record.get(key) {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Null) | None => String::new(),
        Some(other) => other.to_string(),
    }
}

/// Split a combined "City, State" string into at most two trimmed tokens.
///
/// Tokens are positional: the first is always the city part and the second
/// the state part, even when one of them is blank. Anything after the
/// second separator is dropped.
#[must_use]
pub fn parse_location(location: &str) -> Vec<String> {
    location
        .splitn(3, LOCATION_SEPARATOR)
        .take(2)
        .map(|part| part.trim().to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(value: Value) -> RawRecord {
        match value {
            Value::Object(map) => map,
            _ => panic!("fixture must be an object"),
        }
    }

    #[test]
    fn test_defaults_fill_missing_and_null_keys() {
        let raw = record(json!({"jobtitle": "Engineer", "company": null}));
        let defaulted = parse_attribute_defaults(raw, &["jobtitle", "company", "date"]);

        assert_eq!(defaulted["jobtitle"], json!("Engineer"));
        assert_eq!(defaulted["company"], json!(""));
        assert_eq!(defaulted["date"], json!(""));
    }

    #[test]
    fn test_defaults_keep_unlisted_keys() {
        let raw = record(json!({"sponsored": false}));
        let defaulted = parse_attribute_defaults(raw, &["url"]);

        assert_eq!(defaulted["sponsored"], json!(false));
        assert_eq!(defaulted["url"], json!(""));
    }

    #[test]
    fn test_string_attribute() {
        let raw = record(json!({"title": "Dev", "radius": 25, "gone": null}));

        assert_eq!(string_attribute(&raw, "title"), "Dev");
        assert_eq!(string_attribute(&raw, "radius"), "25");
        assert_eq!(string_attribute(&raw, "gone"), "");
        assert_eq!(string_attribute(&raw, "missing"), "");
    }

    #[test]
    fn test_parse_location() {
        let test_cases = vec![
            ("Austin, TX", vec!["Austin", "TX"]),
            ("Remote", vec!["Remote"]),
            ("Portland,OR", vec!["Portland", "OR"]),
            ("Springfield, IL, US", vec!["Springfield", "IL"]),
            (", TX", vec!["", "TX"]),
            ("Austin, ", vec!["Austin", ""]),
            ("", vec![""]),
            ("   ", vec![""]),
        ];

        for (input, expected) in test_cases {
            assert_eq!(parse_location(input), expected, "Failed for input: {input:?}");
        }
    }
}
