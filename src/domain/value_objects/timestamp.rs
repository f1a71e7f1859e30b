//! Nanosecond RFC 3339 timestamps.
//!
//! Every timestamp that crosses the wire (HTTP responses and queued jobs)
//! is rendered in UTC with exactly nine fractional digits and a `Z` suffix,
//! e.g. `2025-11-08T00:15:15.123456789Z`. Use with
//! `#[serde(with = "rfc3339_nanos")]`.

use chrono::{DateTime, SecondsFormat, Utc};

/// Render a timestamp in the wire format.
pub fn format_rfc3339_nanos(value: &DateTime<Utc>) -> String {
    value.to_rfc3339_opts(SecondsFormat::Nanos, true)
}

pub mod rfc3339_nanos {
    use chrono::{DateTime, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&super::format_rfc3339_nanos(value))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        DateTime::parse_from_rfc3339(&raw)
            .map(|t| t.with_timezone(&Utc))
            .map_err(serde::de::Error::custom)
    }
}
