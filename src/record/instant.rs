//! Conversion of caller instants into record timestamps.

use chrono::{DateTime, TimeZone};
use std::time::{Duration, SystemTime};

/// A point in time that can be stored as a record timestamp.
///
/// Conversion truncates toward the past at microsecond resolution and never
/// panics; `SystemTime` values beyond the `i64` microsecond range saturate.
pub trait RecordInstant {
    fn to_record_micros(&self) -> i64;
}

impl<Tz: TimeZone> RecordInstant for DateTime<Tz> {
    fn to_record_micros(&self) -> i64 {
        self.timestamp_micros()
    }
}

impl RecordInstant for SystemTime {
    fn to_record_micros(&self) -> i64 {
        match self.duration_since(SystemTime::UNIX_EPOCH) {
            Ok(after) => i64::try_from(after.as_micros()).unwrap_or(i64::MAX),
            Err(e) => {
                let before = e.duration();
                let micros = before.as_micros() + u128::from(has_sub_micros(before));
                i64::try_from(micros).map(|m| -m).unwrap_or(i64::MIN)
            }
        }
    }
}

fn has_sub_micros(duration: Duration) -> bool {
    duration.subsec_nanos() % 1_000 != 0
}
