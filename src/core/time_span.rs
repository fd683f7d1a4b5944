//! Calendar durations.
//!
//! A [`TimeSpan`] keeps the unit breakdown it was built with. Nothing is carried
//! between units: `PT90M` stays ninety minutes and is not the same span as
//! `PT1H30M`. Equality compares the canonical ISO-8601 rendering, which makes
//! it a component-wise comparison.

use crate::utils::error::{DueDateError, Result};
use chrono::{Duration, Months, NaiveDateTime};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

static ISO_DURATION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^P(?:(\d+)Y)?(?:(\d+)M)?(?:(\d+)W)?(?:(\d+)D)?(?:T(?:(\d+)H)?(?:(\d+)M)?(?:(\d+)S)?)?$",
    )
    .expect("ISO-8601 duration pattern compiles")
});

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TimeSpan {
    years: u32,
    months: u32,
    days: u32,
    hours: u32,
    minutes: u32,
    seconds: u32,
}

impl TimeSpan {
    pub const ZERO: TimeSpan = TimeSpan::new(0, 0, 0, 0, 0, 0);

    pub const fn new(years: u32, months: u32, days: u32, hours: u32, minutes: u32, seconds: u32) -> Self {
        Self {
            years,
            months,
            days,
            hours,
            minutes,
            seconds,
        }
    }

    pub const fn from_days(days: u32) -> Self {
        Self::new(0, 0, days, 0, 0, 0)
    }

    pub const fn from_hours(hours: u32) -> Self {
        Self::new(0, 0, 0, hours, 0, 0)
    }

    pub const fn from_minutes(minutes: u32) -> Self {
        Self::new(0, 0, 0, 0, minutes, 0)
    }

    pub fn years(&self) -> u32 {
        self.years
    }

    pub fn months(&self) -> u32 {
        self.months
    }

    pub fn days(&self) -> u32 {
        self.days
    }

    pub fn hours(&self) -> u32 {
        self.hours
    }

    pub fn minutes(&self) -> u32 {
        self.minutes
    }

    pub fn seconds(&self) -> u32 {
        self.seconds
    }

    pub fn is_zero(&self) -> bool {
        *self == Self::ZERO
    }

    /// Compares the canonical renderings of both spans.
    pub fn equals(&self, other: &TimeSpan) -> bool {
        self.to_string() == other.to_string()
    }

    fn calendar_months(&self) -> u32 {
        self.years.saturating_mul(12).saturating_add(self.months)
    }

    fn clock_part(&self) -> Duration {
        Duration::days(i64::from(self.days))
            + Duration::hours(i64::from(self.hours))
            + Duration::minutes(i64::from(self.minutes))
            + Duration::seconds(i64::from(self.seconds))
    }

    /// Moves `instant` forward by this span.
    ///
    /// Years and months are applied first, clamping to the end of shorter
    /// months, then days and clock time. Returns `None` on overflow.
    pub fn add_to(&self, instant: NaiveDateTime) -> Option<NaiveDateTime> {
        instant
            .checked_add_months(Months::new(self.calendar_months()))?
            .checked_add_signed(self.clock_part())
    }

    /// Moves `instant` backward by this span, mirroring [`TimeSpan::add_to`].
    pub fn sub_from(&self, instant: NaiveDateTime) -> Option<NaiveDateTime> {
        instant
            .checked_sub_months(Months::new(self.calendar_months()))?
            .checked_sub_signed(self.clock_part())
    }
}

impl fmt::Display for TimeSpan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "P{}Y{}M{}DT{}H{}M{}S",
            self.years, self.months, self.days, self.hours, self.minutes, self.seconds
        )
    }
}

impl FromStr for TimeSpan {
    type Err = DueDateError;

    fn from_str(s: &str) -> Result<Self> {
        let input = s.trim();
        let caps = ISO_DURATION
            .captures(input)
            .filter(|_| input != "P" && !input.ends_with('T'))
            .ok_or_else(|| DueDateError::parse(s, "expected an ISO-8601 duration such as PT90M"))?;

        let field = |index: usize| -> Result<u32> {
            caps.get(index)
                .map_or(Ok(0), |m| m.as_str().parse::<u32>())
                .map_err(|e| DueDateError::parse(s, e.to_string()))
        };

        let (weeks, days) = (field(3)?, field(4)?);
        let days = weeks
            .checked_mul(7)
            .and_then(|w| w.checked_add(days))
            .ok_or_else(|| DueDateError::parse(s, "day count overflows"))?;

        Ok(Self::new(field(1)?, field(2)?, days, field(5)?, field(6)?, field(7)?))
    }
}
