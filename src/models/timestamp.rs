// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Client-supplied activity timestamps.
//!
//! Clients send `timestamp` as whatever their platform produces: RFC3339
//! strings, naive local-looking strings, plain dates, or epoch milliseconds.
//! The raw JSON value is echoed back untouched; the parsed instant is computed
//! once on decode and used for ordering.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

const NAIVE_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

/// A timestamp as sent by the client, plus its parsed UTC instant (if any).
#[derive(Debug, Clone, PartialEq)]
pub struct ActivityTime {
    raw: Value,
    instant: Option<DateTime<Utc>>,
}

impl ActivityTime {
    /// Wrap a raw JSON value, parsing it into an instant where possible.
    pub fn from_value(raw: Value) -> Self {
        let instant = match &raw {
            Value::String(s) => parse_str(s),
            Value::Number(n) => n
                .as_i64()
                .or_else(|| n.as_f64().map(|f| f as i64))
                .and_then(DateTime::from_timestamp_millis),
            _ => None,
        };
        Self { raw, instant }
    }

    /// The parsed instant, or `None` if the value was not a recognised time.
    pub fn instant(&self) -> Option<DateTime<Utc>> {
        self.instant
    }

    /// The value exactly as the client sent it.
    pub fn raw(&self) -> &Value {
        &self.raw
    }
}

impl From<&str> for ActivityTime {
    fn from(s: &str) -> Self {
        Self::from_value(Value::String(s.to_string()))
    }
}

fn parse_str(s: &str) -> Option<DateTime<Utc>> {
    let s = s.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }

    for format in NAIVE_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(s, format) {
            return Some(naive.and_utc());
        }
    }

    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

impl Serialize for ActivityTime {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.raw.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for ActivityTime {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Value::deserialize(deserializer).map(Self::from_value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parses_rfc3339_with_offset() {
        let t = ActivityTime::from("2024-01-01T10:00:00+02:00");
        assert_eq!(
            t.instant(),
            DateTime::parse_from_rfc3339("2024-01-01T08:00:00Z")
                .ok()
                .map(|d| d.with_timezone(&Utc))
        );
    }

    #[test]
    fn test_parses_naive_and_date_only_as_utc() {
        let naive = ActivityTime::from("2024-03-05T12:30:00.250");
        assert_eq!(
            naive.instant().unwrap().to_rfc3339(),
            "2024-03-05T12:30:00.250+00:00"
        );

        let spaced = ActivityTime::from("2024-03-05 12:30:00");
        assert_eq!(
            spaced.instant().unwrap().to_rfc3339(),
            "2024-03-05T12:30:00+00:00"
        );

        let date = ActivityTime::from("2024-03-05");
        assert_eq!(
            date.instant().unwrap().to_rfc3339(),
            "2024-03-05T00:00:00+00:00"
        );
    }

    #[test]
    fn test_epoch_millis_number() {
        let t = ActivityTime::from_value(json!(1_704_096_000_000_i64));
        assert_eq!(t.instant().unwrap().to_rfc3339(), "2024-01-01T08:00:00+00:00");
    }

    #[test]
    fn test_unparseable_keeps_raw_value() {
        let t = ActivityTime::from("yesterday-ish");
        assert!(t.instant().is_none());
        assert_eq!(serde_json::to_value(&t).unwrap(), json!("yesterday-ish"));

        let t = ActivityTime::from_value(json!({ "when": "later" }));
        assert!(t.instant().is_none());
    }

    #[test]
    fn test_round_trips_raw_representation() {
        let t: ActivityTime = serde_json::from_value(json!("2024-01-01T08:00:00Z")).unwrap();
        assert_eq!(
            serde_json::to_value(&t).unwrap(),
            json!("2024-01-01T08:00:00Z")
        );
        assert!(t.instant().is_some());
    }
}
