use crate::utils::error::{DueDateError, Result};
use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

/// One raw schedule slot as read from configuration.
///
/// A missing `start` marks the day as off.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayBoundaries {
    pub start: Option<String>,
    pub end: Option<String>,
}

impl DayBoundaries {
    pub fn new(start: impl Into<String>, end: impl Into<String>) -> Self {
        Self {
            start: Some(start.into()),
            end: Some(end.into()),
        }
    }

    pub fn off() -> Self {
        Self::default()
    }
}

/// A reported issue: when it was created and how many working hours it gets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Issue {
    date: NaiveDateTime,
    lead_time_hours: u32,
}

impl Issue {
    /// Creation instants are kept to the minute.
    pub fn new(date: NaiveDateTime, lead_time_hours: u32) -> Self {
        let date = date - Duration::seconds(i64::from(date.second()))
            - Duration::nanoseconds(i64::from(date.nanosecond()));
        Self {
            date,
            lead_time_hours,
        }
    }

    /// Builds an issue from `YYYY-MM-DD`, `HH:MM` and a whole number of hours.
    pub fn parse(date: &str, time: &str, lead_time_hours: &str) -> Result<Self> {
        let day = NaiveDate::parse_from_str(date.trim(), "%Y-%m-%d")
            .map_err(|e| DueDateError::parse(date, format!("issue date must be YYYY-MM-DD: {e}")))?;
        let clock = NaiveTime::parse_from_str(time.trim(), "%H:%M")
            .map_err(|e| DueDateError::parse(time, format!("issue time must be HH:MM: {e}")))?;
        let lead_time = lead_time_hours.trim().parse::<u32>().map_err(|e| {
            DueDateError::parse(lead_time_hours, format!("lead time must be whole hours: {e}"))
        })?;

        Ok(Self::new(day.and_time(clock), lead_time))
    }

    pub fn date(&self) -> NaiveDateTime {
        self.date
    }

    pub fn lead_time_hours(&self) -> u32 {
        self.lead_time_hours
    }

    pub fn lead_time_minutes(&self) -> i64 {
        i64::from(self.lead_time_hours) * 60
    }
}
