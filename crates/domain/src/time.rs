//! Time and timestamp helpers.

use chrono::{DateTime, Duration, NaiveDate, NaiveTime, Utc};

/// UTC timestamp used for reading insert times.
pub type Timestamp = DateTime<Utc>;

/// Return the current UTC time.
#[must_use]
pub fn now() -> Timestamp {
    Utc::now()
}

/// Inclusive UTC day window for a calendar date:
/// `[date 00:00:00.000, date 23:59:59.999]`.
///
/// Readings are stored at millisecond precision, so the upper bound covers
/// the last representable instant of the day.
#[must_use]
pub fn day_bounds(date: NaiveDate) -> (Timestamp, Timestamp) {
    let start = date.and_time(NaiveTime::MIN).and_utc();
    let end = start + Duration::days(1) - Duration::milliseconds(1);
    (start, end)
}
