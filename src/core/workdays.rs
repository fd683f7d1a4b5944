//! Weekly working schedule.
//!
//! Seven slots indexed from Monday. A slot is either empty (no work that day)
//! or a validated [`WorkingWindow`].

use crate::core::time_range::TimeRange;
use crate::domain::model::DayBoundaries;
use crate::domain::ports::ScheduleProvider;
use crate::utils::error::{DueDateError, Result};
use crate::utils::validation::{validate_clock_time, validate_required_field};
use chrono::{Datelike, Days, NaiveDate, NaiveTime, Weekday};
use serde::Serialize;
use std::fmt;

pub const DAYS_IN_WEEK: usize = 7;

pub const WEEKDAYS: [Weekday; DAYS_IN_WEEK] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

pub const DAY_NAMES: [&str; DAYS_IN_WEEK] = [
    "monday",
    "tuesday",
    "wednesday",
    "thursday",
    "friday",
    "saturday",
    "sunday",
];

/// Working hours of a single weekday, `start < end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WorkingWindow {
    start: NaiveTime,
    end: NaiveTime,
}

impl WorkingWindow {
    /// Returns `None` unless `start` is strictly before `end`.
    pub fn new(start: NaiveTime, end: NaiveTime) -> Option<Self> {
        (start < end).then_some(Self { start, end })
    }

    pub fn start(&self) -> NaiveTime {
        self.start
    }

    pub fn end(&self) -> NaiveTime {
        self.end
    }

    /// Anchors the window to a calendar date.
    ///
    /// Both bounds share `date` and `start < end`, so the range is well formed.
    pub fn on(&self, date: NaiveDate) -> TimeRange {
        TimeRange::ordered(date.and_time(self.start), date.and_time(self.end))
    }
}

impl fmt::Display for WorkingWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start.format("%H:%M"), self.end.format("%H:%M"))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkdaysConfiguration {
    days: [Option<WorkingWindow>; DAYS_IN_WEEK],
}

impl WorkdaysConfiguration {
    /// Builds the schedule from raw slots, Monday first.
    ///
    /// Missing trailing slots, empty slots and slots without a start are days
    /// off. Every configured clock time is checked here, so lookups on the
    /// finished configuration never see a malformed window.
    pub fn new(schedule: &[Option<DayBoundaries>]) -> Result<Self> {
        if schedule.len() > DAYS_IN_WEEK {
            return Err(DueDateError::invalid_configuration(
                "working_hours",
                schedule.len().to_string(),
                "A week has at most seven days",
            ));
        }

        let mut days = [None; DAYS_IN_WEEK];
        for (index, slot) in schedule.iter().enumerate() {
            days[index] = match slot {
                Some(boundaries) => parse_boundaries(DAY_NAMES[index], boundaries)?,
                None => None,
            };
        }

        tracing::debug!(
            working_days = days.iter().filter(|day| day.is_some()).count(),
            "Workdays configuration loaded"
        );

        Ok(Self { days })
    }

    pub fn from_provider<P: ScheduleProvider + ?Sized>(provider: &P) -> Result<Self> {
        Self::new(&provider.working_hours()?)
    }

    pub fn working_window(&self, date: NaiveDate) -> Option<WorkingWindow> {
        self.days[date.weekday().num_days_from_monday() as usize]
    }

    pub fn is_working_day(&self, date: NaiveDate) -> bool {
        self.working_window(date).is_some()
    }

    /// The working hours of `date` as a concrete range.
    pub fn working_day(&self, date: NaiveDate) -> Result<TimeRange> {
        match self.working_window(date) {
            Some(window) => Ok(window.on(date)),
            None => Err(DueDateError::NotAWorkingDay {
                date: date.format("%Y-%m-%d").to_string(),
            }),
        }
    }

    /// The working hours of the first working day strictly after `date`.
    ///
    /// Scans at most one week ahead, so a week without working days is an
    /// error instead of an endless search.
    pub fn next_working_day(&self, date: NaiveDate) -> Result<TimeRange> {
        for step in 1..=DAYS_IN_WEEK as u64 {
            let candidate = date
                .checked_add_days(Days::new(step))
                .ok_or_else(|| DueDateError::out_of_range("step to the next working day"))?;

            if let Some(window) = self.working_window(candidate) {
                tracing::debug!(%candidate, %window, step, "Found next working day");
                return Ok(window.on(candidate));
            }
        }

        Err(DueDateError::NoWorkingDaysConfigured)
    }

    pub fn working_days(&self) -> impl Iterator<Item = Weekday> + '_ {
        WEEKDAYS
            .iter()
            .zip(self.days.iter())
            .filter(|(_, window)| window.is_some())
            .map(|(weekday, _)| *weekday)
    }
}

fn parse_boundaries(day: &str, boundaries: &DayBoundaries) -> Result<Option<WorkingWindow>> {
    let Some(start) = boundaries.start.as_deref() else {
        return Ok(None);
    };

    let start = validate_clock_time(&format!("working_hours.{day}.start"), start)?;
    let end_field = format!("working_hours.{day}.end");
    let end = validate_clock_time(&end_field, validate_required_field(&end_field, &boundaries.end)?)?;

    WorkingWindow::new(start, end).map(Some).ok_or_else(|| {
        DueDateError::invalid_configuration(
            format!("working_hours.{day}"),
            format!("{}-{}", start.format("%H:%M"), end.format("%H:%M")),
            "End of working hours must be later than the start",
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::time_range::{parse_instant, TimeInterval};

    fn office_week() -> WorkdaysConfiguration {
        let day = Some(DayBoundaries::new("08:00", "16:00"));
        WorkdaysConfiguration::new(&[day.clone(), day.clone(), day.clone(), day.clone(), day, None, None])
            .unwrap()
    }

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_is_working_day() {
        let config = office_week();
        assert!(config.is_working_day(date("2023-01-02"))); // Monday
        assert!(config.is_working_day(date("2023-01-06"))); // Friday
        assert!(!config.is_working_day(date("2023-01-07"))); // Saturday
        assert!(!config.is_working_day(date("2023-01-08"))); // Sunday
    }

    #[test]
    fn test_sparse_schedule_and_null_start() {
        let config = WorkdaysConfiguration::new(&[
            Some(DayBoundaries::new("09:00", "17:00")),
            Some(DayBoundaries::off()),
        ])
        .unwrap();

        assert!(config.is_working_day(date("2023-01-02")));
        assert!(!config.is_working_day(date("2023-01-03")));
        assert!(!config.is_working_day(date("2023-01-04")));
        assert_eq!(config.working_days().collect::<Vec<_>>(), vec![Weekday::Mon]);

        let slots = [None, None, None, None, Some(DayBoundaries::new("08:00", "12:00"))];
        let from_slice = WorkdaysConfiguration::from_provider(&slots[..]).unwrap();
        assert_eq!(from_slice.working_days().collect::<Vec<_>>(), vec![Weekday::Fri]);
    }

    #[test]
    fn test_working_day_anchors_to_date() {
        let window = office_week().working_day(date("2023-01-03")).unwrap();
        assert_eq!(window.start(), parse_instant("2023-01-03 08:00").unwrap());
        assert_eq!(window.end(), parse_instant("2023-01-03 16:00").unwrap());
    }

    #[test]
    fn test_working_day_on_day_off_fails() {
        let result = office_week().working_day(date("2023-01-07"));
        assert!(matches!(result, Err(DueDateError::NotAWorkingDay { date: ref day }) if day == "2023-01-07"));
    }

    #[test]
    fn test_next_working_day_skips_weekend() {
        let config = office_week();
        let next = config.next_working_day(date("2023-01-06")).unwrap();
        assert_eq!(next.start(), parse_instant("2023-01-09 08:00").unwrap());

        let next = config.next_working_day(date("2023-01-03")).unwrap();
        assert_eq!(next.start(), parse_instant("2023-01-04 08:00").unwrap());

        let next = config.next_working_day(date("2023-01-08")).unwrap();
        assert_eq!(next.start(), parse_instant("2023-01-09 08:00").unwrap());
    }

    #[test]
    fn test_next_working_day_wraps_to_same_weekday() {
        let config = WorkdaysConfiguration::new(&[None, None, Some(DayBoundaries::new("10:00", "12:00"))]).unwrap();
        let next = config.next_working_day(date("2023-01-04")).unwrap(); // Wednesday
        assert_eq!(next.start(), parse_instant("2023-01-11 10:00").unwrap());
    }

    #[test]
    fn test_next_working_day_with_empty_week_fails() {
        let config = WorkdaysConfiguration::new(&[]).unwrap();
        assert!(matches!(
            config.next_working_day(date("2023-01-04")),
            Err(DueDateError::NoWorkingDaysConfigured)
        ));
    }

    #[test]
    fn test_invalid_configurations() {
        let bad_pattern = WorkdaysConfiguration::new(&[Some(DayBoundaries::new("8am", "16:00"))]);
        assert!(matches!(bad_pattern, Err(DueDateError::InvalidConfiguration { ref field, .. }) if field == "working_hours.monday.start"));

        let inverted = WorkdaysConfiguration::new(&[None, Some(DayBoundaries::new("16:00", "08:00"))]);
        assert!(matches!(inverted, Err(DueDateError::InvalidConfiguration { ref field, .. }) if field == "working_hours.tuesday"));

        let missing_end = WorkdaysConfiguration::new(&[Some(DayBoundaries {
            start: Some("08:00".to_string()),
            end: None,
        })]);
        assert!(matches!(missing_end, Err(DueDateError::MissingConfigError { .. })));

        let eight_days = vec![None; 8];
        assert!(WorkdaysConfiguration::new(&eight_days).is_err());
    }

    #[test]
    fn test_window_on_date_spans_the_configured_hours() {
        let window = WorkingWindow::new(
            NaiveTime::from_hms_opt(0, 0, 0).unwrap(),
            NaiveTime::from_hms_opt(23, 59, 0).unwrap(),
        )
        .unwrap();
        let range = window.on(date("2024-02-29"));
        assert_eq!(range.start(), parse_instant("2024-02-29 00:00").unwrap());
        assert_eq!(range.end(), parse_instant("2024-02-29 23:59").unwrap());
        assert_eq!(range.duration_minutes(), 1439);

        let same = NaiveTime::from_hms_opt(9, 0, 0).unwrap();
        assert!(WorkingWindow::new(same, same).is_none());
    }

    #[test]
    fn test_window_display() {
        let config = office_week();
        let window = config.working_window(date("2023-01-03")).unwrap();
        assert_eq!(window.to_string(), "08:00-16:00");
    }
}
