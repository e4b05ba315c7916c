//! Time primitives for calendar entities.
//!
//! [`EventTime`] carries the start or end of an event, which is either a
//! zoned instant or an all-day date. [`TimeWindow`] is the half-open
//! `[start, end)` range a host platform passes when it queries events.

use chrono::{DateTime, Duration, NaiveDate, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// The start or end of a calendar event.
///
/// Timed events carry an instant (stored in UTC); date-precision events
/// such as meal plans or expiry dates carry only a calendar day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value")]
pub enum EventTime {
    /// A specific instant, stored in UTC.
    DateTime(DateTime<Utc>),
    /// An all-day date with no time of day.
    AllDay(NaiveDate),
}

impl EventTime {
    /// Creates a timed value from a UTC instant.
    pub fn from_utc(dt: DateTime<Utc>) -> Self {
        Self::DateTime(dt)
    }

    /// Creates a timed value from an instant in any zone.
    pub fn from_local<Tz: TimeZone>(dt: DateTime<Tz>) -> Self {
        Self::DateTime(dt.with_timezone(&Utc))
    }

    /// Creates an all-day value.
    pub fn from_date(date: NaiveDate) -> Self {
        Self::AllDay(date)
    }

    /// Returns `true` for all-day values.
    pub fn is_all_day(&self) -> bool {
        matches!(self, Self::AllDay(_))
    }

    /// Returns `true` for timed values.
    pub fn is_datetime(&self) -> bool {
        matches!(self, Self::DateTime(_))
    }

    /// Returns the instant if this is a timed value.
    pub fn as_datetime(&self) -> Option<&DateTime<Utc>> {
        match self {
            Self::DateTime(dt) => Some(dt),
            Self::AllDay(_) => None,
        }
    }

    /// Returns the date if this is an all-day value.
    pub fn as_date(&self) -> Option<&NaiveDate> {
        match self {
            Self::AllDay(date) => Some(date),
            Self::DateTime(_) => None,
        }
    }

    /// Collapses to a UTC instant for comparisons.
    ///
    /// All-day values compare at midnight UTC of their date.
    pub fn to_utc_datetime(&self) -> DateTime<Utc> {
        match self {
            Self::DateTime(dt) => *dt,
            Self::AllDay(date) => date.and_hms_opt(0, 0, 0).expect("valid time").and_utc(),
        }
    }

    /// The calendar date of this value (the UTC date for timed values).
    pub fn date(&self) -> NaiveDate {
        match self {
            Self::DateTime(dt) => dt.date_naive(),
            Self::AllDay(date) => *date,
        }
    }
}

impl PartialOrd for EventTime {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for EventTime {
    fn cmp(&self, other: &Self) -> Ordering {
        self.to_utc_datetime().cmp(&other.to_utc_datetime())
    }
}

/// A half-open `[start, end)` query range in UTC.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeWindow {
    /// Start of the window (inclusive).
    pub start: DateTime<Utc>,
    /// End of the window (exclusive).
    pub end: DateTime<Utc>,
}

impl TimeWindow {
    /// Creates a new window.
    ///
    /// # Panics
    ///
    /// Panics if `start` is after `end`.
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        assert!(start <= end, "TimeWindow start must be <= end");
        Self { start, end }
    }

    /// Creates a window covering `duration` from `start`.
    pub fn from_duration(start: DateTime<Utc>, duration: Duration) -> Self {
        Self::new(start, start + duration)
    }

    /// Creates a window covering one calendar day in the given zone.
    pub fn for_date<Tz: TimeZone>(date: NaiveDate, tz: &Tz) -> Self {
        let midnight = |d: NaiveDate| {
            tz.from_local_datetime(&d.and_hms_opt(0, 0, 0).expect("valid time"))
                .single()
                .expect("unambiguous local time")
                .with_timezone(&Utc)
        };
        Self {
            start: midnight(date),
            end: midnight(date.succ_opt().expect("valid successor date")),
        }
    }

    /// The length of this window.
    pub fn duration(&self) -> Duration {
        self.end - self.start
    }

    /// Whether an instant falls inside the window.
    pub fn contains(&self, dt: DateTime<Utc>) -> bool {
        self.start <= dt && dt < self.end
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn utc(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, h, min, s).unwrap()
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    mod event_time {
        use super::*;

        #[test]
        fn datetime_accessors() {
            let dt = utc(2026, 3, 5, 10, 30, 0);
            let et = EventTime::from_utc(dt);
            assert!(et.is_datetime());
            assert!(!et.is_all_day());
            assert_eq!(et.as_datetime(), Some(&dt));
            assert_eq!(et.as_date(), None);
            assert_eq!(et.date(), date(2026, 3, 5));
        }

        #[test]
        fn allday_accessors() {
            let d = date(2026, 3, 5);
            let et = EventTime::from_date(d);
            assert!(et.is_all_day());
            assert!(!et.is_datetime());
            assert_eq!(et.as_date(), Some(&d));
            assert_eq!(et.as_datetime(), None);
        }

        #[test]
        fn from_local_converts_to_utc() {
            let offset = chrono::FixedOffset::east_opt(2 * 3600).unwrap();
            let local = offset.with_ymd_and_hms(2026, 3, 5, 12, 0, 0).unwrap();
            let et = EventTime::from_local(local);
            assert_eq!(et.to_utc_datetime(), utc(2026, 3, 5, 10, 0, 0));
        }

        #[test]
        fn allday_collapses_to_midnight_utc() {
            let et = EventTime::from_date(date(2026, 3, 5));
            assert_eq!(et.to_utc_datetime(), utc(2026, 3, 5, 0, 0, 0));
        }

        #[test]
        fn ordering() {
            let morning = EventTime::from_utc(utc(2026, 3, 5, 10, 0, 0));
            let noon = EventTime::from_utc(utc(2026, 3, 5, 12, 0, 0));
            let all_day = EventTime::from_date(date(2026, 3, 5));

            assert!(all_day < morning); // midnight < 10:00
            assert!(morning < noon);
        }

        #[test]
        fn serde_roundtrip() {
            for et in [
                EventTime::from_utc(utc(2026, 3, 5, 10, 30, 0)),
                EventTime::from_date(date(2026, 3, 5)),
            ] {
                let json = serde_json::to_string(&et).unwrap();
                let parsed: EventTime = serde_json::from_str(&json).unwrap();
                assert_eq!(et, parsed);
            }
        }
    }

    mod time_window {
        use super::*;

        #[test]
        fn creation_and_duration() {
            let window = TimeWindow::new(utc(2026, 3, 5, 9, 0, 0), utc(2026, 3, 5, 17, 0, 0));
            assert_eq!(window.duration(), Duration::hours(8));
        }

        #[test]
        #[should_panic(expected = "start must be <= end")]
        fn rejects_inverted_range() {
            TimeWindow::new(utc(2026, 3, 5, 17, 0, 0), utc(2026, 3, 5, 9, 0, 0));
        }

        #[test]
        fn contains_is_half_open() {
            let window = TimeWindow::new(utc(2026, 3, 5, 9, 0, 0), utc(2026, 3, 5, 17, 0, 0));
            assert!(window.contains(utc(2026, 3, 5, 9, 0, 0)));
            assert!(window.contains(utc(2026, 3, 5, 16, 59, 59)));
            assert!(!window.contains(utc(2026, 3, 5, 17, 0, 0)));
            assert!(!window.contains(utc(2026, 3, 5, 8, 59, 59)));
        }

        #[test]
        fn for_date_spans_one_day() {
            let window = TimeWindow::for_date(date(2026, 3, 5), &Utc);
            assert_eq!(window.start, utc(2026, 3, 5, 0, 0, 0));
            assert_eq!(window.end, utc(2026, 3, 6, 0, 0, 0));
        }

        #[test]
        fn from_duration() {
            let start = utc(2026, 3, 5, 10, 0, 0);
            let window = TimeWindow::from_duration(start, Duration::minutes(90));
            assert_eq!(window.end, utc(2026, 3, 5, 11, 30, 0));
        }
    }
}
