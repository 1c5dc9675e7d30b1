//! Derived fields: leave-day counts and periodic rest durations.
//!
//! Both derivations interpret dates and times as wall-clock values in the
//! user's time zone and work on the millisecond difference between the two
//! resulting instants. The leave count rounds that difference to whole days,
//! so a daylight-saving shift inside the window does not change the result.

use std::fmt;

use chrono::{DateTime, Duration, LocalResult, NaiveDate, NaiveDateTime, NaiveTime, TimeZone};
use serde::Serialize;

const MILLIS_PER_MINUTE: i64 = 60 * 1000;
const MILLIS_PER_DAY: i64 = 24 * 60 * MILLIS_PER_MINUTE;

/// Resolve a wall-clock time in `tz`.
///
/// Ambiguous times (clock set back) take the earlier instant. Times inside a
/// spring-forward gap are pushed past the gap.
pub fn local_instant<Tz: TimeZone>(tz: &Tz, naive: NaiveDateTime) -> DateTime<Tz> {
    match tz.from_local_datetime(&naive) {
        LocalResult::Single(dt) => dt,
        LocalResult::Ambiguous(earliest, _) => earliest,
        LocalResult::None => tz
            .from_local_datetime(&(naive + Duration::hours(1)))
            .earliest()
            .unwrap_or_else(|| tz.from_utc_datetime(&naive)),
    }
}

/// Inclusive number of leave days between two calendar dates.
///
/// `round((to - from) in days) + 1`, clamped to 0 when `to` precedes `from`.
pub fn leave_day_count<Tz: TimeZone>(tz: &Tz, from: NaiveDate, to: NaiveDate) -> u32 {
    let start = local_instant(tz, from.and_time(NaiveTime::MIN));
    let end = local_instant(tz, to.and_time(NaiveTime::MIN));
    let diff_ms = end.timestamp_millis() - start.timestamp_millis();
    let days = (diff_ms as f64 / MILLIS_PER_DAY as f64).round() as i64 + 1;
    if days > 0 {
        u32::try_from(days).unwrap_or(u32::MAX)
    } else {
        0
    }
}

/// Length of a periodic rest window, or the invalid state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum RestDuration {
    /// The window ends at or before it starts.
    Invalid,
    Span { hours: u64, minutes: u32 },
}

impl RestDuration {
    /// What an untouched rest form shows before its first recomputation.
    pub const ZERO: RestDuration = RestDuration::Span {
        hours: 0,
        minutes: 0,
    };

    pub fn is_valid(&self) -> bool {
        matches!(self, RestDuration::Span { .. })
    }
}

impl fmt::Display for RestDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RestDuration::Invalid => f.write_str("Invalid Duration"),
            RestDuration::Span { hours, minutes } => {
                write!(f, "{} Hours {} Minutes", hours, minutes)
            }
        }
    }
}

/// Rest duration between two wall-clock instants in `tz`.
pub fn rest_duration<Tz: TimeZone>(
    tz: &Tz,
    start: NaiveDateTime,
    end: NaiveDateTime,
) -> RestDuration {
    let diff_ms =
        local_instant(tz, end).timestamp_millis() - local_instant(tz, start).timestamp_millis();
    if diff_ms <= 0 {
        return RestDuration::Invalid;
    }
    let total_minutes = (diff_ms / MILLIS_PER_MINUTE) as u64;
    RestDuration::Span {
        hours: total_minutes / 60,
        minutes: (total_minutes % 60) as u32,
    }
}

/// Store `value` in `slot` only if it differs. Returns whether it changed.
pub fn assign_if_changed<T: PartialEq>(slot: &mut T, value: T) -> bool {
    if *slot == value {
        false
    } else {
        *slot = value;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use chrono_tz::America::New_York;
    use chrono_tz::Europe::London;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
        day(y, m, d).and_hms_opt(h, min, 0).unwrap()
    }

    #[test]
    fn test_leave_same_day_is_one() {
        assert_eq!(leave_day_count(&Utc, day(2024, 6, 15), day(2024, 6, 15)), 1);
    }

    #[test]
    fn test_leave_span_is_inclusive() {
        assert_eq!(leave_day_count(&Utc, day(2024, 6, 10), day(2024, 6, 15)), 6);
        assert_eq!(leave_day_count(&Utc, day(2024, 2, 28), day(2024, 3, 1)), 3);
    }

    #[test]
    fn test_leave_reversed_clamps_to_zero() {
        assert_eq!(leave_day_count(&Utc, day(2024, 6, 16), day(2024, 6, 15)), 0);
        assert_eq!(leave_day_count(&Utc, day(2024, 6, 20), day(2024, 6, 15)), 0);
    }

    #[test]
    fn test_leave_across_dst_transitions() {
        // 23-hour day on 2024-03-10, 25-hour day on 2024-11-03.
        assert_eq!(
            leave_day_count(&New_York, day(2024, 3, 9), day(2024, 3, 11)),
            3
        );
        assert_eq!(
            leave_day_count(&New_York, day(2024, 11, 2), day(2024, 11, 4)),
            3
        );
        assert_eq!(
            leave_day_count(&London, day(2024, 3, 1), day(2024, 3, 31)),
            31
        );
    }

    #[test]
    fn test_rest_duration_hours_and_minutes() {
        let d = rest_duration(&Utc, at(2024, 6, 14, 22, 0), at(2024, 6, 15, 8, 30));
        assert_eq!(
            d,
            RestDuration::Span {
                hours: 10,
                minutes: 30
            }
        );
        assert_eq!(d.to_string(), "10 Hours 30 Minutes");
    }

    #[test]
    fn test_rest_duration_invalid_when_not_positive() {
        let same = rest_duration(&Utc, at(2024, 6, 15, 0, 0), at(2024, 6, 15, 0, 0));
        assert_eq!(same, RestDuration::Invalid);
        assert_eq!(same.to_string(), "Invalid Duration");

        let backwards = rest_duration(&Utc, at(2024, 6, 15, 8, 0), at(2024, 6, 14, 8, 0));
        assert_eq!(backwards, RestDuration::Invalid);
        assert!(!backwards.is_valid());
    }

    #[test]
    fn test_rest_duration_counts_real_elapsed_time_across_dst() {
        // Clocks jump 02:00 -> 03:00 on 2024-03-10 in New York.
        let d = rest_duration(&New_York, at(2024, 3, 9, 22, 0), at(2024, 3, 10, 6, 0));
        assert_eq!(
            d,
            RestDuration::Span {
                hours: 7,
                minutes: 0
            }
        );
    }

    #[test]
    fn test_zero_display() {
        assert_eq!(RestDuration::ZERO.to_string(), "0 Hours 0 Minutes");
    }

    #[test]
    fn test_assign_if_changed() {
        let mut slot = 3u32;
        assert!(!assign_if_changed(&mut slot, 3));
        assert!(assign_if_changed(&mut slot, 4));
        assert_eq!(slot, 4);
    }
}
