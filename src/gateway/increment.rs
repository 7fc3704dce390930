// ============================================================================
// Increment Resolution
// ============================================================================
//
// Clients may express relative updates with sentinel keys named
// "<base>_increment". Resolution rewrites each sentinel into an absolute
// value computed from the entity's current state:
//
//   { accepted_count_increment: 3 }  +  current accepted_count = 7
//   =>  { accepted_count: 10 }
//
// Resolution is exclusive per field: the forwarded payload never carries
// both a sentinel and a raw override for the same base field.
//
// ============================================================================

use serde_json::{Map, Number, Value};

use crate::gateway::GatewayError;

pub const INCREMENT_SUFFIX: &str = "_increment";

/// True if any key in the payload is an increment sentinel.
pub fn has_increment_keys(payload: &Map<String, Value>) -> bool {
    payload.keys().any(|key| sentinel_base(key).is_some())
}

/// Rewrite every increment sentinel into an absolute base-field value.
///
/// Non-sentinel keys pass through unchanged. A raw value for a base field
/// that also has a sentinel is overwritten by the resolved increment.
/// Base fields absent from the current entity count as 0.
pub fn resolve_increments(
    payload: Map<String, Value>,
    current: &Value,
) -> Result<Map<String, Value>, GatewayError> {
    let mut merged = Map::with_capacity(payload.len());
    let mut increments: Vec<(String, i64)> = Vec::new();

    for (key, value) in payload {
        match sentinel_base(&key) {
            Some(base) => {
                let delta = value.as_i64().ok_or_else(|| {
                    GatewayError::InvalidPayload(format!("field {key} must be an integer delta"))
                })?;
                increments.push((base.to_string(), delta));
            }
            None => {
                merged.insert(key, value);
            }
        }
    }

    for (base, delta) in increments {
        let current_value = current.get(&base).and_then(Value::as_i64).unwrap_or(0);
        merged.insert(base, Value::Number(Number::from(current_value + delta)));
    }

    Ok(merged)
}

/// Base field named by a sentinel key, or None for ordinary keys.
/// A bare "_increment" key names no base field and is not a sentinel.
fn sentinel_base(key: &str) -> Option<&str> {
    key.strip_suffix(INCREMENT_SUFFIX).filter(|base| !base.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn payload(value: Value) -> Map<String, Value> {
        value.as_object().expect("test payload must be an object").clone()
    }

    #[test]
    fn plain_payloads_have_no_sentinels() {
        assert!(!has_increment_keys(&payload(json!({"status": "approved"}))));
        assert!(has_increment_keys(&payload(json!({"credits_increment": 50}))));
    }

    #[test]
    fn sentinel_resolves_against_current_value() {
        let current = json!({"accepted_count": 7, "title": "Synthwave Summer"});
        let merged =
            resolve_increments(payload(json!({"accepted_count_increment": 3})), &current).unwrap();

        assert_eq!(merged.get("accepted_count"), Some(&json!(10)));
        assert!(!merged.contains_key("accepted_count_increment"));
    }

    #[test]
    fn multiple_sentinels_resolve_independently() {
        let current = json!({"credits": 100, "accepted": 2});
        let merged = resolve_increments(
            payload(json!({"credits_increment": 50, "accepted_increment": 1})),
            &current,
        )
        .unwrap();

        assert_eq!(merged.get("credits"), Some(&json!(150)));
        assert_eq!(merged.get("accepted"), Some(&json!(3)));
    }

    #[test]
    fn missing_base_field_counts_as_zero() {
        let merged =
            resolve_increments(payload(json!({"credits_increment": 25})), &json!({})).unwrap();

        assert_eq!(merged.get("credits"), Some(&json!(25)));
    }

    #[test]
    fn non_numeric_base_field_counts_as_zero() {
        let current = json!({"credits": "not-a-number"});
        let merged =
            resolve_increments(payload(json!({"credits_increment": 5})), &current).unwrap();

        assert_eq!(merged.get("credits"), Some(&json!(5)));
    }

    #[test]
    fn increment_wins_over_raw_override() {
        let current = json!({"accepted_count": 7});
        let merged = resolve_increments(
            payload(json!({"accepted_count": 100, "accepted_count_increment": 1})),
            &current,
        )
        .unwrap();

        assert_eq!(merged.get("accepted_count"), Some(&json!(8)));
    }

    #[test]
    fn non_sentinel_keys_pass_through() {
        let current = json!({"credits": 10});
        let merged = resolve_increments(
            payload(json!({"credits_increment": 1, "genre": "electronic"})),
            &current,
        )
        .unwrap();

        assert_eq!(merged.get("genre"), Some(&json!("electronic")));
        assert_eq!(merged.get("credits"), Some(&json!(11)));
    }

    #[test]
    fn non_integer_delta_is_rejected() {
        let result = resolve_increments(
            payload(json!({"credits_increment": "fifty"})),
            &json!({"credits": 1}),
        );

        assert!(matches!(result, Err(GatewayError::InvalidPayload(_))));
    }

    #[test]
    fn bare_increment_key_is_not_a_sentinel() {
        let raw = payload(json!({"_increment": 4}));
        assert!(!has_increment_keys(&raw));

        let merged = resolve_increments(raw, &json!({})).unwrap();
        assert_eq!(merged.get("_increment"), Some(&json!(4)));
    }
}
