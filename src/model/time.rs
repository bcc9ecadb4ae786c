//! Normalized timestamps and display formatting.
//!
//! Every message carries a [`Timestamp`]: milliseconds since the Unix epoch,
//! computed once when fixtures are parsed or generated. Sorting compares the
//! integer directly; `chrono` is only involved when a timestamp is shown.

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Format used for the full date shown next to a highlighted message,
/// e.g. `Mon. Jan 5, 2026 3:04pm`.
pub const FULL_DATE_FORMAT: &str = "%a. %b %-d, %Y %-I:%M%P";

// Rounding thresholds for relative labels.
const SECONDS_THRESHOLD: f64 = 45.0;
const MINUTES_THRESHOLD: f64 = 45.0;
const HOURS_THRESHOLD: f64 = 22.0;
const DAYS_THRESHOLD: f64 = 26.0;
const MONTHS_THRESHOLD: f64 = 11.0;

const MS_PER_SECOND: f64 = 1_000.0;
const MS_PER_MINUTE: f64 = 60_000.0;
const MS_PER_HOUR: f64 = 3_600_000.0;
const MS_PER_DAY: f64 = 86_400_000.0;
/// 400 years hold 146097 days and 4800 months.
const MONTHS_PER_DAY: f64 = 4_800.0 / 146_097.0;

// ===== Timestamp =====

/// Point in time as milliseconds since the Unix epoch (UTC).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Timestamp(i64);

impl Timestamp {
    /// Build from raw epoch milliseconds.
    pub const fn from_millis(millis: i64) -> Self {
        Self(millis)
    }

    /// Epoch milliseconds.
    pub const fn as_millis(self) -> i64 {
        self.0
    }

    /// Current wall-clock time.
    pub fn now() -> Self {
        Self::from_datetime(Utc::now())
    }

    /// Normalize a `chrono` datetime in any zone.
    pub fn from_datetime<Tz: TimeZone>(datetime: DateTime<Tz>) -> Self {
        Self(datetime.timestamp_millis())
    }

    /// Parse an RFC 3339 string such as `2026-01-05T15:04:00Z`.
    pub fn parse_rfc3339(raw: &str) -> Result<Self, chrono::ParseError> {
        DateTime::parse_from_rfc3339(raw).map(Self::from_datetime)
    }

    /// Convert back to a UTC datetime for display.
    ///
    /// Values outside chrono's range clamp to the epoch.
    pub fn to_datetime(self) -> DateTime<Utc> {
        DateTime::from_timestamp_millis(self.0).unwrap_or_default()
    }

    /// This timestamp shifted by `millis` (negative moves into the past).
    pub const fn offset_millis(self, millis: i64) -> Self {
        Self(self.0.saturating_add(millis))
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            self.to_datetime()
                .to_rfc3339_opts(chrono::SecondsFormat::Millis, true)
        )
    }
}

impl Serialize for Timestamp {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Timestamp {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Self::parse_rfc3339(&raw).map_err(serde::de::Error::custom)
    }
}

// ===== Formatting =====

/// Compact relative label for `then` as seen at `now`.
///
/// Labels: `Now`, `1m`, `{n}m`, `1h`, `{n}h`, `1d`, `{n}d`, then months
/// (also suffixed `m`) and years (`y`). Future times get an `in ` prefix.
pub fn relative_time(then: Timestamp, now: Timestamp) -> String {
    let delta = now.0.saturating_sub(then.0);
    let label = relative_label(delta.unsigned_abs() as f64);

    if delta < 0 {
        format!("in {label}")
    } else {
        label
    }
}

fn relative_label(abs_millis: f64) -> String {
    let seconds = (abs_millis / MS_PER_SECOND).round();
    let minutes = (abs_millis / MS_PER_MINUTE).round();
    let hours = (abs_millis / MS_PER_HOUR).round();
    let days_exact = abs_millis / MS_PER_DAY;
    let days = days_exact.round();
    let months_exact = days_exact * MONTHS_PER_DAY;
    let months = months_exact.round();
    let years = (months_exact / 12.0).round();

    if seconds < SECONDS_THRESHOLD {
        "Now".to_string()
    } else if minutes <= 1.0 {
        "1m".to_string()
    } else if minutes < MINUTES_THRESHOLD {
        format!("{minutes}m")
    } else if hours <= 1.0 {
        "1h".to_string()
    } else if hours < HOURS_THRESHOLD {
        format!("{hours}h")
    } else if days <= 1.0 {
        "1d".to_string()
    } else if days < DAYS_THRESHOLD {
        format!("{days}d")
    } else if months <= 1.0 {
        "1m".to_string()
    } else if months < MONTHS_THRESHOLD {
        format!("{months}m")
    } else if years <= 1.0 {
        "1y".to_string()
    } else {
        format!("{years}y")
    }
}

/// Full date label in the given zone, e.g. `Mon. Jan 5, 2026 3:04pm`.
pub fn format_full<Tz>(timestamp: Timestamp, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    timestamp
        .to_datetime()
        .with_timezone(tz)
        .format(FULL_DATE_FORMAT)
        .to_string()
}

// ===== Tests =====
