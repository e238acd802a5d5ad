//! Lenient deserializers for document-store records.
//!
//! Records are authored through admin forms without validation, so fields may
//! be missing, `null`, or carry older shapes. None of that should fail a load.

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Deserializer};

/// `null` or missing → `T::default()`.
pub fn nullable<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// `null` or missing → `true` (the `active` flag).
pub fn nullable_true<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<bool>::deserialize(deserializer)?.unwrap_or(true))
}

pub fn default_true() -> bool {
    true
}

/// Blank strings become `None`.
pub fn non_blank<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.filter(|s| !s.trim().is_empty()))
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawTimestamp {
    Text(String),
    Millis(i64),
    FractionalMillis(f64),
    Seconds {
        #[serde(alias = "_seconds")]
        seconds: i64,
        #[serde(default, alias = "_nanoseconds")]
        nanoseconds: u32,
    },
}

impl RawTimestamp {
    fn into_datetime(self) -> Option<DateTime<Utc>> {
        match self {
            RawTimestamp::Text(s) => DateTime::parse_from_rfc3339(s.trim())
                .ok()
                .map(|dt| dt.with_timezone(&Utc)),
            RawTimestamp::Millis(ms) => Utc.timestamp_millis_opt(ms).single(),
            RawTimestamp::FractionalMillis(ms) if ms.is_finite() => {
                Utc.timestamp_millis_opt(ms as i64).single()
            }
            RawTimestamp::FractionalMillis(_) => None,
            RawTimestamp::Seconds {
                seconds,
                nanoseconds,
            } => Utc.timestamp_opt(seconds, nanoseconds).single(),
        }
    }
}

/// Timestamp as RFC 3339 text, epoch milliseconds, or a
/// `{seconds, nanoseconds}` object. Unreadable values become `None`.
pub fn timestamp<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(raw
        .and_then(|value| serde_json::from_value::<RawTimestamp>(value).ok())
        .and_then(RawTimestamp::into_datetime))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Deserialize)]
    struct Stamped {
        #[serde(default, deserialize_with = "timestamp")]
        at: Option<DateTime<Utc>>,
    }

    fn at(json: &str) -> Option<DateTime<Utc>> {
        serde_json::from_str::<Stamped>(json).unwrap().at
    }

    #[test]
    fn reads_every_timestamp_shape() {
        let expected = Utc.timestamp_opt(1_700_000_000, 0).single();
        assert_eq!(at(r#"{"at":"2023-11-14T22:13:20Z"}"#), expected);
        assert_eq!(at(r#"{"at":1700000000000}"#), expected);
        assert_eq!(at(r#"{"at":{"seconds":1700000000,"nanoseconds":0}}"#), expected);
        assert_eq!(at(r#"{"at":{"_seconds":1700000000,"_nanoseconds":0}}"#), expected);
    }

    #[test]
    fn unreadable_timestamps_are_absent() {
        assert_eq!(at(r#"{"at":"ontem"}"#), None);
        assert_eq!(at(r#"{"at":null}"#), None);
        assert_eq!(at(r#"{"at":[1,2]}"#), None);
        assert_eq!(at(r#"{}"#), None);
    }
}
