use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const FALLBACK_SOURCE: &str = "fallback";

/// Body served in place of the data hub's response when it cannot be used.
#[derive(Debug, Serialize, Deserialize)]
pub struct FallbackPayload<T> {
    pub data: Vec<T>,
    pub count: usize,
    pub timestamp: String,
    pub source: String,
}

impl<T> FallbackPayload<T> {
    pub fn new(data: Vec<T>, now: DateTime<Utc>) -> Self {
        Self {
            count: data.len(),
            data,
            timestamp: iso_timestamp(now),
            source: FALLBACK_SOURCE.to_string(),
        }
    }
}

/// What a proxy route answers with. Serialized without a tag, so upstream
/// bodies pass through exactly as received.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum ProxyBody<T> {
    Upstream(Value),
    Fallback(FallbackPayload<T>),
}

impl<T> ProxyBody<T> {
    pub fn is_fallback(&self) -> bool {
        matches!(self, ProxyBody::Fallback(_))
    }
}

/// ISO-8601 in UTC with millisecond precision, e.g. `2024-01-01T12:00:00.000Z`.
pub fn iso_timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn timestamps_use_millis_and_zulu() {
        let at = Utc.with_ymd_and_hms(2024, 3, 9, 17, 5, 0).unwrap();
        assert_eq!(iso_timestamp(at), "2024-03-09T17:05:00.000Z");
    }

    #[test]
    fn count_tracks_data_len() {
        let payload = FallbackPayload::new(vec!["a", "b", "c"], Utc::now());
        assert_eq!(payload.count, 3);
        assert_eq!(payload.source, "fallback");
    }

    #[test]
    fn upstream_body_serializes_untouched() {
        let body: ProxyBody<()> = ProxyBody::Upstream(serde_json::json!({"data": [], "count": 0}));
        assert!(!body.is_fallback());
        assert_eq!(
            serde_json::to_string(&body).unwrap(),
            r#"{"data":[],"count":0}"#
        );
    }
}
