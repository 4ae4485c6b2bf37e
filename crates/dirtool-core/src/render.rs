//! JSON helpers shared by the body codecs and response decoders.

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

/// Round-trip an argument bag through a typed model.
///
/// Fields the model does not declare are dropped; declared fields with a
/// mismatched JSON type make the conversion fail. Applying the round trip
/// to its own output is a no-op, so the field drop is idempotent.
pub fn encode_body<T>(args: &Value) -> Result<Value, serde_json::Error>
where
    T: DeserializeOwned + Serialize,
{
    let typed: T = serde_json::from_value(args.clone())?;
    serde_json::to_value(&typed)
}

/// Decode a response body into a typed model and re-render it as pretty
/// JSON (2-space indent). `None` when the body does not parse as the model.
pub fn decode_pretty<T>(body: &str) -> Option<String>
where
    T: DeserializeOwned + Serialize,
{
    let typed: T = serde_json::from_str(body).ok()?;
    serde_json::to_string_pretty(&typed).ok()
}

/// Decode a response body as untyped JSON and pretty-print it. Used by
/// endpoints without a response schema (deletes, actions).
pub fn decode_untyped(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    serde_json::to_string_pretty(&value).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Member, User};
    use serde_json::json;

    #[test]
    fn test_encode_body_drops_unknown_fields() {
        let args = json!({
            "primaryEmail": "ada@example.com",
            "suspended": true,
            "notAUserField": "dropped",
            "resolveConflictAccount": true
        });
        let body = encode_body::<User>(&args).unwrap();
        assert_eq!(body["primaryEmail"], "ada@example.com");
        assert_eq!(body["suspended"], true);
        assert!(body.get("notAUserField").is_none());
        assert!(body.get("resolveConflictAccount").is_none());
    }

    #[test]
    fn test_encode_body_is_idempotent() {
        let args = json!({
            "email": "eng@example.com",
            "role": "MEMBER",
            "bogus": 1
        });
        let once = encode_body::<Member>(&args).unwrap();
        let twice = encode_body::<Member>(&once).unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn test_encode_body_rejects_mismatched_types() {
        // `suspended` is boolean in the model
        let args = json!({ "suspended": "yes" });
        assert!(encode_body::<User>(&args).is_err());
    }

    #[test]
    fn test_decode_pretty_round_trip() {
        let body = r#"{"primaryEmail":"ada@example.com","suspended":false}"#;
        let pretty = decode_pretty::<User>(body).unwrap();
        // 2-space indentation, and decoding the pretty output again is stable
        assert!(pretty.contains("\n  \"primaryEmail\": \"ada@example.com\""));
        assert_eq!(decode_pretty::<User>(&pretty).unwrap(), pretty);
    }

    #[test]
    fn test_decode_pretty_rejects_non_json() {
        assert!(decode_pretty::<User>("not json at all").is_none());
        assert!(decode_pretty::<User>("").is_none());
    }

    #[test]
    fn test_decode_untyped() {
        assert_eq!(decode_untyped("{}").unwrap(), "{}");
        assert!(decode_untyped("").is_none());
        let pretty = decode_untyped(r#"{"kind":"admin#directory#member"}"#).unwrap();
        assert!(pretty.contains("\"kind\": \"admin#directory#member\""));
    }
}
