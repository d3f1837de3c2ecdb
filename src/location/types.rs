//! Core types for the suggestion subsystem.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::time::Duration;
use thiserror::Error;

/// One geocoding result exactly as the provider returned it.
///
/// Only `display_name` is interpreted; address components, coordinates and
/// everything else pass through to the client untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LocationRecord(Map<String, Value>);

impl LocationRecord {
    /// The provider's human-readable label. Missing, empty, or non-string
    /// values count as absent.
    /// A number or other non-string never qualifies, even when non-zero.
    pub fn display_name(&self) -> Option<&str> {
        self.0
            .get("display_name")
            .and_then(Value::as_str)
            .filter(|name| !name.is_empty())
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.get(field)
    }
}

impl From<Map<String, Value>> for LocationRecord {
    fn from(fields: Map<String, Value>) -> Self {
        Self(fields)
    }
}

/// The body of `/api/suggest` and of `navhud suggest`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SuggestResponse {
    pub results: Vec<LocationRecord>,
}

/// Upstream lookup failures. A non-success HTTP status is not one of
/// these: it yields an empty result list.
#[derive(Debug, Error)]
pub enum GeocodeError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Request timed out after {0:?}")]
    Timeout(Duration),

    #[error("Invalid API response: {0}")]
    InvalidResponse(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(value: Value) -> LocationRecord {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_display_name_string() {
        let r = record(json!({ "display_name": "Oslo, Norway", "lat": "59.91" }));
        assert_eq!(r.display_name(), Some("Oslo, Norway"));
        assert_eq!(r.get("lat"), Some(&json!("59.91")));
    }

    #[test]
    fn test_display_name_absent_forms() {
        assert_eq!(record(json!({})).display_name(), None);
        assert_eq!(record(json!({ "display_name": "" })).display_name(), None);
        assert_eq!(record(json!({ "display_name": null })).display_name(), None);
        assert_eq!(record(json!({ "display_name": 42 })).display_name(), None);
        assert_eq!(record(json!({ "display_name": ["Oslo"] })).display_name(), None);
    }

    #[test]
    fn test_record_serializes_unchanged() {
        let value = json!({
            "display_name": "Oslo, Norway",
            "address": { "city": "Oslo", "country_code": "no" },
            "importance": 0.8
        });
        let r = record(value.clone());
        assert_eq!(serde_json::to_value(&r).unwrap(), value);
    }
}
