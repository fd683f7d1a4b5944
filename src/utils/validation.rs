use crate::utils::error::{DueDateError, Result};
use chrono::NaiveTime;
use regex::Regex;
use std::sync::LazyLock;

static CLOCK_TIME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([0-9]{1,2}):([0-9]{1,2})$").expect("clock-time pattern compiles"));

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// Checks an `HH:MM` clock time and converts it to a time of day.
///
/// The pattern accepts one or two digits on each side; the values must still
/// name a real time (hour below 24, minute below 60).
pub fn validate_clock_time(field_name: &str, value: &str) -> Result<NaiveTime> {
    let trimmed = value.trim();
    let caps = CLOCK_TIME.captures(trimmed).ok_or_else(|| {
        DueDateError::invalid_configuration(field_name, value, "Expected a clock time in HH:MM format")
    })?;

    let hour: u32 = caps[1].parse().map_err(|_| {
        DueDateError::invalid_configuration(field_name, value, "Hour is not a number")
    })?;
    let minute: u32 = caps[2].parse().map_err(|_| {
        DueDateError::invalid_configuration(field_name, value, "Minute is not a number")
    })?;

    NaiveTime::from_hms_opt(hour, minute, 0).ok_or_else(|| {
        DueDateError::invalid_configuration(
            field_name,
            value,
            "Hour must be below 24 and minute below 60",
        )
    })
}

pub fn validate_required_field<'a, T>(field_name: &str, value: &'a Option<T>) -> Result<&'a T> {
    value.as_ref().ok_or_else(|| DueDateError::MissingConfigError {
        field: field_name.to_string(),
    })
}
