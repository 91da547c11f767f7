//! Core Data timestamps as stored by Bear.
//!
//! Bear persists dates as seconds since the Core Data reference date,
//! 2001-01-01T00:00:00Z. Reads add [`CORE_DATA_EPOCH_OFFSET`] to get Unix
//! time; writes subtract it.

use chrono::{DateTime, Local, TimeZone, Utc};
use std::fmt;

/// Seconds between the Unix epoch and the Core Data reference date.
pub const CORE_DATA_EPOCH_OFFSET: i64 = 978_307_200;

/// Format used wherever a timestamp is shown to a caller.
pub const DISPLAY_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

// ===========================================
// Codec Functions
// ===========================================

/// Converts raw Core Data seconds into local calendar time.
///
/// Fractional seconds are floored. Returns `None` for values that are not
/// finite or fall outside chrono's representable range.
pub fn to_calendar(raw_seconds: f64) -> Option<DateTime<Local>> {
    to_utc(raw_seconds).map(|utc| utc.with_timezone(&Local))
}

/// Converts a calendar time back into raw Core Data seconds.
///
/// Sub-second precision is dropped.
pub fn to_raw<Tz: TimeZone>(datetime: &DateTime<Tz>) -> i64 {
    datetime.timestamp() - CORE_DATA_EPOCH_OFFSET
}

fn to_utc(raw_seconds: f64) -> Option<DateTime<Utc>> {
    if !raw_seconds.is_finite() {
        return None;
    }
    let floored = raw_seconds.floor();
    if floored < i64::MIN as f64 || floored > i64::MAX as f64 {
        return None;
    }
    let unix = (floored as i64).checked_add(CORE_DATA_EPOCH_OFFSET)?;
    DateTime::from_timestamp(unix, 0)
}

// ===========================================
// CoreDataTimestamp
// ===========================================

/// A validated Core Data timestamp, held at whole-second precision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CoreDataTimestamp(DateTime<Utc>);

impl CoreDataTimestamp {
    /// Builds a timestamp from raw Core Data seconds.
    pub fn from_raw(raw_seconds: f64) -> Option<Self> {
        to_utc(raw_seconds).map(Self)
    }

    /// Builds a timestamp from any calendar time.
    pub fn from_calendar<Tz: TimeZone>(datetime: &DateTime<Tz>) -> Self {
        let utc = datetime.with_timezone(&Utc);
        let whole = DateTime::from_timestamp(utc.timestamp(), 0).unwrap_or(utc);
        Self(whole)
    }

    /// The current moment.
    pub fn now() -> Self {
        Self::from_calendar(&Utc::now())
    }

    /// Raw Core Data seconds, as Bear stores them.
    pub fn raw(&self) -> i64 {
        to_raw(&self.0)
    }

    /// The timestamp in the executing environment's local zone.
    pub fn to_local(&self) -> DateTime<Local> {
        self.0.with_timezone(&Local)
    }

    /// The timestamp in UTC.
    pub fn to_utc(&self) -> DateTime<Utc> {
        self.0
    }
}

impl fmt::Display for CoreDataTimestamp {
    /// Renders as `YYYY-MM-DD HH:MM:SS` in local time.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_local().format(DISPLAY_FORMAT))
    }
}
