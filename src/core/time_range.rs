//! Closed ranges of local (timezone-naive) instants.

use crate::core::time_span::TimeSpan;
use crate::utils::error::{DueDateError, Result};
use chrono::{Datelike, Local, NaiveDate, NaiveDateTime};
use serde::Serialize;
use std::fmt;

/// Lower bound of an unbounded range.
pub const MIN_VALUE: &str = "1970-01-01 01:00:00";
/// Upper bound of an unbounded range.
pub const MAX_VALUE: &str = "2999-01-01 00:00:00";

const INSTANT_FORMATS: [&str; 6] = [
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y/%m/%d %H:%M:%S",
    "%Y/%m/%d %H:%M",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
];

pub trait TimeInterval {
    fn start(&self) -> NaiveDateTime;
    fn end(&self) -> NaiveDateTime;
}

/// Parses an instant such as `2023-01-03 14:00`.
///
/// A bare `YYYY-MM-DD` date is read as midnight.
pub fn parse_instant(value: &str) -> Result<NaiveDateTime> {
    let value = value.trim();
    INSTANT_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(value, "%Y-%m-%d")
                .ok()
                .and_then(|date| date.and_hms_opt(0, 0, 0))
        })
        .ok_or_else(|| DueDateError::parse(value, "expected YYYY-MM-DD HH:MM"))
}

/// An immutable `[start, end]` range with `start <= end`.
///
/// Every transform returns a new range and re-checks the invariant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct TimeRange {
    start: NaiveDateTime,
    end: NaiveDateTime,
}

impl TimeRange {
    pub fn new(start: NaiveDateTime, end: NaiveDateTime) -> Result<Self> {
        if start > end {
            return Err(DueDateError::InvalidRange {
                start: start.to_string(),
                end: end.to_string(),
            });
        }
        Ok(Self { start, end })
    }

    /// For bounds whose order the caller already guarantees.
    pub(crate) fn ordered(start: NaiveDateTime, end: NaiveDateTime) -> Self {
        debug_assert!(start <= end, "range bounds out of order");
        Self { start, end }
    }

    pub fn parse(start: &str, end: &str) -> Result<Self> {
        Self::new(parse_instant(start)?, parse_instant(end)?)
    }

    /// A zero-width range at `instant`.
    pub fn moment(instant: NaiveDateTime) -> Self {
        Self {
            start: instant,
            end: instant,
        }
    }

    pub fn moment_now() -> Self {
        Self::moment(Local::now().naive_local())
    }

    pub fn is_moment(&self) -> bool {
        self.start == self.end
    }

    /// Elapsed time between start and end, whole months first.
    pub fn duration(&self) -> TimeSpan {
        let (from, to) = (self.start, self.end);
        let mut months = (to.year() - from.year()) * 12 + to.month() as i32 - from.month() as i32;

        let anchor = loop {
            match months_after(from, months) {
                Some(anchor) if anchor <= to => break anchor,
                _ if months > 0 => months -= 1,
                _ => {
                    months = 0;
                    break from;
                }
            }
        };

        let rest = to - anchor;
        let months = months.max(0) as u32;
        TimeSpan::new(
            months / 12,
            months % 12,
            rest.num_days() as u32,
            (rest.num_hours() % 24) as u32,
            (rest.num_minutes() % 60) as u32,
            (rest.num_seconds() % 60) as u32,
        )
    }

    /// Elapsed whole minutes between start and end.
    pub fn duration_minutes(&self) -> i64 {
        (self.end - self.start).num_minutes()
    }

    /// Moves the start backward by `span`.
    pub fn expand_start(&self, span: TimeSpan) -> Result<Self> {
        let start = span
            .sub_from(self.start)
            .ok_or_else(|| DueDateError::out_of_range("expand range start"))?;
        Self::new(start, self.end)
    }

    /// Moves the end forward by `span`.
    pub fn expand_end(&self, span: TimeSpan) -> Result<Self> {
        let end = span
            .add_to(self.end)
            .ok_or_else(|| DueDateError::out_of_range("expand range end"))?;
        Self::new(self.start, end)
    }

    /// Moves the start forward by `span`.
    pub fn shrink_start(&self, span: TimeSpan) -> Result<Self> {
        let start = span
            .add_to(self.start)
            .ok_or_else(|| DueDateError::out_of_range("shrink range start"))?;
        Self::new(start, self.end)
    }

    /// Moves the end backward by `span`.
    pub fn shrink_end(&self, span: TimeSpan) -> Result<Self> {
        let end = span
            .sub_from(self.end)
            .ok_or_else(|| DueDateError::out_of_range("shrink range end"))?;
        Self::new(self.start, end)
    }

    /// Closed containment: `other` lies entirely within this range.
    pub fn contains<I: TimeInterval + ?Sized>(&self, other: &I) -> bool {
        self.start <= other.start() && other.end() <= self.end
    }
}

fn months_after(instant: NaiveDateTime, months: i32) -> Option<NaiveDateTime> {
    instant.checked_add_months(chrono::Months::new(u32::try_from(months).ok()?))
}

impl TimeInterval for TimeRange {
    fn start(&self) -> NaiveDateTime {
        self.start
    }

    fn end(&self) -> NaiveDateTime {
        self.end
    }
}

impl Default for TimeRange {
    /// The unbounded range, from [`MIN_VALUE`] to [`MAX_VALUE`].
    fn default() -> Self {
        Self {
            start: parse_instant(MIN_VALUE).unwrap_or_default(),
            end: parse_instant(MAX_VALUE).unwrap_or(NaiveDateTime::MAX),
        }
    }
}

impl fmt::Display for TimeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}-{}",
            self.start.format("%Y-%m-%d %H:%M"),
            self.end.format("%Y-%m-%d %H:%M")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn range(start: &str, end: &str) -> TimeRange {
        TimeRange::parse(start, end).unwrap()
    }

    #[test]
    fn test_rejects_inverted_range() {
        let result = TimeRange::parse("2023-01-03 16:00", "2023-01-03 08:00");
        assert!(matches!(result, Err(DueDateError::InvalidRange { .. })));
    }

    #[test]
    fn test_parse_instant_formats() {
        let expected = NaiveDate::from_ymd_opt(2023, 1, 3)
            .unwrap()
            .and_hms_opt(14, 0, 0)
            .unwrap();
        assert_eq!(parse_instant("2023-01-03 14:00").unwrap(), expected);
        assert_eq!(parse_instant("2023/01/03 14:00:00").unwrap(), expected);
        assert_eq!(parse_instant("2023-01-03T14:00").unwrap(), expected);
        assert_eq!(
            parse_instant("2023-01-03").unwrap(),
            expected.date().and_hms_opt(0, 0, 0).unwrap()
        );
        assert!(parse_instant("03.01.2023").is_err());
        assert!(parse_instant("2023-02-30 10:00").is_err());
    }

    #[test]
    fn test_default_is_unbounded() {
        let unbounded = TimeRange::default();
        assert_eq!(unbounded.start(), parse_instant(MIN_VALUE).unwrap());
        assert_eq!(unbounded.end(), parse_instant(MAX_VALUE).unwrap());
        assert!(unbounded.contains(&range("2023-01-03 08:00", "2023-01-03 16:00")));
    }

    #[test]
    fn test_moment() {
        let instant = parse_instant("2023-01-03 14:00").unwrap();
        let moment = TimeRange::moment(instant);
        assert!(moment.is_moment());
        assert_eq!(moment.duration(), TimeSpan::ZERO);
        assert!(!range("2023-01-03 08:00", "2023-01-03 16:00").is_moment());
    }

    #[test]
    fn test_moment_now_reads_local_clock() {
        let before = Local::now().naive_local();
        let now = TimeRange::moment_now();
        let after = Local::now().naive_local();

        assert!(now.is_moment());
        assert!(TimeRange::new(before, after).unwrap().contains(&now));
    }

    #[test]
    fn test_contains_is_closed() {
        let day = range("2023-01-03 08:00", "2023-01-03 16:00");
        let at = |s: &str| TimeRange::moment(parse_instant(s).unwrap());

        assert!(day.contains(&at("2023-01-03 08:00")));
        assert!(day.contains(&at("2023-01-03 16:00")));
        assert!(day.contains(&at("2023-01-03 12:30")));
        assert!(!day.contains(&at("2023-01-03 07:59")));
        assert!(!day.contains(&at("2023-01-03 16:01")));
        assert!(day.contains(&day));
        assert!(!day.contains(&range("2023-01-03 15:00", "2023-01-03 17:00")));
    }

    #[test]
    fn test_duration_within_day() {
        let span = range("2023-01-03 14:00", "2023-01-03 16:30").duration();
        assert_eq!(span, TimeSpan::new(0, 0, 0, 2, 30, 0));
        assert_eq!(range("2023-01-03 14:00", "2023-01-03 16:30").duration_minutes(), 150);
    }

    #[test]
    fn test_duration_across_months() {
        let span = range("2023-01-31 10:00", "2023-03-02 09:15").duration();
        // Jan 31 + 1 month clamps to Feb 28; two more days minus 45 minutes remain.
        assert_eq!(span, TimeSpan::new(0, 1, 1, 23, 15, 0));

        let span = range("2022-01-03 08:00", "2023-02-03 09:00").duration();
        assert_eq!(span, TimeSpan::new(1, 1, 0, 1, 0, 0));
    }

    #[test]
    fn test_transforms_return_new_ranges() {
        let day = range("2023-01-03 08:00", "2023-01-03 16:00");
        let hour = TimeSpan::from_hours(1);

        assert_eq!(day.shrink_start(hour).unwrap(), range("2023-01-03 09:00", "2023-01-03 16:00"));
        assert_eq!(day.shrink_end(hour).unwrap(), range("2023-01-03 08:00", "2023-01-03 15:00"));
        assert_eq!(day.expand_start(hour).unwrap(), range("2023-01-03 07:00", "2023-01-03 16:00"));
        assert_eq!(day.expand_end(hour).unwrap(), range("2023-01-03 08:00", "2023-01-03 17:00"));
        assert_eq!(day, range("2023-01-03 08:00", "2023-01-03 16:00"));
    }

    #[test]
    fn test_shrinking_past_other_bound_fails() {
        let day = range("2023-01-03 08:00", "2023-01-03 16:00");
        assert!(day.shrink_start(TimeSpan::from_hours(9)).is_err());
        assert!(day.shrink_end(TimeSpan::from_hours(9)).is_err());
        assert!(day.shrink_start(TimeSpan::from_hours(8)).unwrap().is_moment());
    }
}
