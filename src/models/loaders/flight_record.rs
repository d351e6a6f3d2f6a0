//! Decoding of a single JSONL line into a `Flight`

use chrono::{DateTime, FixedOffset, NaiveDateTime};
use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};
use tracing::debug;

use crate::error::RecordError;
use crate::models::{Airplane, Flight};
use crate::services::AirlineResolver;

/// Wire shape of one input line
#[derive(Debug, Deserialize)]
struct FlightRecord {
    registration: String,
    from: String,
    to: String,
    #[serde(deserialize_with = "deserialize_timestamp")]
    scheduled_start: DateTime<FixedOffset>,
    #[serde(deserialize_with = "deserialize_timestamp")]
    scheduled_end: DateTime<FixedOffset>,
    #[serde(deserialize_with = "deserialize_timestamp")]
    actual_start: DateTime<FixedOffset>,
    #[serde(deserialize_with = "deserialize_timestamp")]
    actual_end: DateTime<FixedOffset>,
}

/// Parse one raw record into a `Flight`
///
/// All-or-nothing: any missing or mistyped field is `RecordError::Malformed`,
/// and an unresolvable registration is passed through from the resolver.
pub fn parse_flight(raw: &str, resolver: &dyn AirlineResolver) -> Result<Flight, RecordError> {
    // Go through a map first so that JSON arrays are rejected instead of
    // being accepted positionally by the derived struct visitor.
    let object: Map<String, Value> = serde_json::from_str(raw.trim())?;
    let record = FlightRecord::deserialize(Value::Object(object))?;

    let airline = resolver.resolve(&record.registration)?;
    debug!(
        "parsed flight {} {} -> {} ({})",
        record.registration,
        record.from,
        record.to,
        airline.name()
    );

    Ok(Flight::new(
        Airplane::new(record.registration, airline),
        record.from,
        record.to,
        record.scheduled_start,
        record.scheduled_end,
        record.actual_start,
        record.actual_end,
    ))
}

// `%#z` also takes hour-only offsets such as `+02`.
const OFFSET_FORMATS: [&str; 8] = [
    "%Y-%m-%dT%H:%M:%S%.f%:z",
    "%Y-%m-%dT%H:%M:%S%.f%#z",
    "%Y-%m-%dT%H:%M%:z",
    "%Y-%m-%dT%H:%M%#z",
    "%Y-%m-%d %H:%M:%S%.f%:z",
    "%Y-%m-%d %H:%M:%S%.f%#z",
    "%Y-%m-%d %H:%M%:z",
    "%Y-%m-%d %H:%M%#z",
];

const NAIVE_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

/// Parse an ISO-8601 timestamp, keeping whatever offset it carries
///
/// Timestamps without an offset are taken as UTC.
pub fn parse_timestamp(value: &str) -> Option<DateTime<FixedOffset>> {
    let value = value.trim();

    if let Ok(timestamp) = DateTime::parse_from_rfc3339(value) {
        return Some(timestamp);
    }

    let with_offset = match value.strip_suffix('Z') {
        Some(stripped) => format!("{}+00:00", stripped),
        None => value.to_string(),
    };
    if let Some(timestamp) = OFFSET_FORMATS
        .iter()
        .find_map(|format| DateTime::parse_from_str(&with_offset, format).ok())
    {
        return Some(timestamp);
    }

    NAIVE_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
        .map(|naive| naive.and_utc().fixed_offset())
}

fn deserialize_timestamp<'de, D>(deserializer: D) -> Result<DateTime<FixedOffset>, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Visitor;
    use std::fmt;

    struct TimestampVisitor;

    impl<'de> Visitor<'de> for TimestampVisitor {
        type Value = DateTime<FixedOffset>;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("an ISO-8601 datetime string")
        }

        fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            parse_timestamp(value)
                .ok_or_else(|| E::custom(format!("invalid ISO-8601 datetime '{}'", value)))
        }
    }

    deserializer.deserialize_str(TimestampVisitor)
}
