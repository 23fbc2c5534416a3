//! Field decoders that tolerate the loose typing of form-posted records.
//!
//! Counts may arrive as numbers or numeric strings, dates as RFC 3339
//! timestamps, plain `YYYY-MM-DD` or epoch milliseconds, and keywords in any
//! case. Anything unparseable decodes as `None` rather than failing the
//! whole record.

use std::str::FromStr;

use chrono::{NaiveDate, TimeZone, Utc};
use harpal_core::types::Timestamp;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

#[derive(Deserialize)]
#[serde(untagged)]
enum RawCount {
    Number(u64),
    Text(String),
    Other(serde_json::Value),
}

pub(crate) fn count<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<RawCount>::deserialize(deserializer)? {
        Some(RawCount::Number(n)) => Some(n),
        Some(RawCount::Text(s)) => s.trim().parse().ok(),
        Some(RawCount::Other(_)) | None => None,
    })
}

pub(crate) fn timestamp<'de, D>(deserializer: D) -> Result<Option<Timestamp>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::String(raw)) => parse_timestamp(raw.trim()),
        Some(Value::Number(n)) => n
            .as_i64()
            .and_then(|millis| Utc.timestamp_millis_opt(millis).single()),
        _ => None,
    })
}

/// A string keyword parsed with `T::from_str`; other JSON types and
/// rejected strings decode as `None`.
pub(crate) fn keyword<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::String(raw)) => raw.trim().parse().ok(),
        _ => None,
    })
}

fn parse_timestamp(raw: &str) -> Option<Timestamp> {
    if let Ok(ts) = chrono::DateTime::parse_from_rfc3339(raw) {
        return Some(ts.with_timezone(&Utc));
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|dt| Utc.from_utc_datetime(&dt))
}

/// The date part of an ISO date or timestamp (`2024-03-01T00:00:00Z` → `2024-03-01`).
pub(crate) fn date_part(raw: &str) -> &str {
    raw.split('T').next().unwrap_or(raw)
}
