//! Time Feature Derivation
//!
//! The model was trained with pandas-style calendar features; the weekday
//! numbering here is explicitly Monday=0..Sunday=6 so the weekend boundary
//! matches the training data.

use crate::FeatureError;
use chrono::{DateTime, Datelike, NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};

/// Timestamp formats accepted in addition to RFC 3339. The landing page
/// submits `datetime-local` values, which carry no seconds.
const TIMESTAMP_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
];

/// Calendar features derived from the request timestamp
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeFeatures {
    /// Hour of day (0-23)
    pub hour: u32,
    /// Day of month (1-31)
    pub day: u32,
    /// Month (1-12)
    pub month: u32,
    /// Day of week, Monday=0 .. Sunday=6
    pub day_of_week: u32,
    /// 1 if Saturday or Sunday, else 0
    pub is_weekend: u8,
}

impl TimeFeatures {
    /// Derive calendar features from a parsed datetime.
    pub fn from_datetime(dt: NaiveDateTime) -> Self {
        let day_of_week = dt.weekday().num_days_from_monday();
        Self {
            hour: dt.hour(),
            day: dt.day(),
            month: dt.month(),
            day_of_week,
            is_weekend: u8::from(day_of_week >= 5),
        }
    }
}

/// Parse a request timestamp.
///
/// Accepts RFC 3339 (any offset, which is discarded) and the naive
/// `YYYY-MM-DD[T ]HH:MM[:SS]` forms.
pub fn parse_timestamp(raw: &str) -> Result<NaiveDateTime, FeatureError> {
    let raw = raw.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Ok(dt.naive_local());
    }
    for fmt in TIMESTAMP_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, fmt) {
            return Ok(dt);
        }
    }

    Err(FeatureError::InvalidTimestamp(raw.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_datetime_local_format() {
        // What the landing page form actually sends.
        let dt = parse_timestamp("2024-03-15T14:30").unwrap();
        let tf = TimeFeatures::from_datetime(dt);
        assert_eq!(tf.hour, 14);
        assert_eq!(tf.day, 15);
        assert_eq!(tf.month, 3);
        // 2024-03-15 is a Friday
        assert_eq!(tf.day_of_week, 4);
        assert_eq!(tf.is_weekend, 0);
    }

    #[test]
    fn test_rfc3339_offset_discarded() {
        let dt = parse_timestamp("2024-03-16T08:00:00+02:00").unwrap();
        let tf = TimeFeatures::from_datetime(dt);
        assert_eq!(tf.hour, 8);
    }

    #[test]
    fn test_weekend_boundary() {
        // Friday, Saturday, Sunday, Monday
        let cases = [
            ("2024-03-15 23:59:59", 4, 0),
            ("2024-03-16 00:00:00", 5, 1),
            ("2024-03-17 12:00:00", 6, 1),
            ("2024-03-18 00:00:00", 0, 0),
        ];
        for (raw, dow, weekend) in cases {
            let tf = TimeFeatures::from_datetime(parse_timestamp(raw).unwrap());
            assert_eq!(tf.day_of_week, dow, "{raw}");
            assert_eq!(tf.is_weekend, weekend, "{raw}");
        }
    }

    #[test]
    fn test_garbage_timestamp_rejected() {
        assert!(parse_timestamp("not-a-date").is_err());
        assert!(parse_timestamp("").is_err());
        assert!(parse_timestamp("2024-13-01T00:00").is_err());
    }
}
