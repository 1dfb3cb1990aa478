//! Lenient timestamp deserialization for CRM exports.
//!
//! Records arrive with RFC 3339 timestamps, naive local-looking timestamps,
//! bare dates or (possibly fractional) unix seconds depending on the source system. Everything is
//! normalized to UTC; values without an offset are taken to already be UTC.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{de::Error as _, Deserialize, Deserializer};

const NAIVE_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

const OFFSET_FORMATS: &[&str] = &["%Y-%m-%d %H:%M:%S%.f%:z", "%Y-%m-%d %H:%M:%S%.f%z"];

#[derive(Deserialize)]
#[serde(untagged)]
enum RawTimestamp {
    Seconds(i64),
    FractionalSeconds(f64),
    Text(String),
}

/// Parses the textual forms accepted on the wire.
pub fn parse_timestamp(value: &str) -> Option<DateTime<Utc>> {
    let value = value.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Some(dt) = OFFSET_FORMATS
        .iter()
        .find_map(|fmt| DateTime::parse_from_str(value, fmt).ok())
    {
        return Some(dt.with_timezone(&Utc));
    }
    if let Some(naive) = NAIVE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(value, fmt).ok())
    {
        return Some(naive.and_utc());
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

fn from_raw<E: serde::de::Error>(raw: RawTimestamp) -> Result<DateTime<Utc>, E> {
    match raw {
        RawTimestamp::Seconds(secs) => DateTime::from_timestamp(secs, 0)
            .ok_or_else(|| E::custom(format!("timestamp {secs} is out of range"))),
        RawTimestamp::FractionalSeconds(secs) => {
            let whole = secs.floor();
            let nanos = ((secs - whole) * 1e9).round().min(999_999_999.0) as u32;
            DateTime::from_timestamp(whole as i64, nanos)
                .ok_or_else(|| E::custom(format!("timestamp {secs} is out of range")))
        }
        RawTimestamp::Text(text) => {
            parse_timestamp(&text).ok_or_else(|| E::custom(format!("invalid datetime '{text}'")))
        }
    }
}

pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = RawTimestamp::deserialize(deserializer)
        .map_err(|_| D::Error::custom("expected a datetime string or unix seconds"))?;
    from_raw(raw)
}

pub fn deserialize_option<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<RawTimestamp>::deserialize(deserializer)
        .map_err(|_| D::Error::custom("expected a datetime string, unix seconds or null"))?;
    raw.map(from_raw).transpose()
}
