use crate::core::time_range::TimeRange;
use crate::core::workdays::{WorkdaysConfiguration, WorkingWindow};
use crate::domain::model::Issue;
use serde::Serialize;
use std::fmt;

/// Why an issue cannot be scheduled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "reason", rename_all = "snake_case")]
pub enum InvalidReason {
    NotAWorkingDay,
    OutsideWorkingHours { working_hours: WorkingWindow },
}

impl fmt::Display for InvalidReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotAWorkingDay => write!(f, "not a working day"),
            Self::OutsideWorkingHours { working_hours } => {
                write!(f, "outside working hours, window {}", working_hours)
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidationResult {
    pub valid: bool,
    pub reason: Option<InvalidReason>,
}

impl ValidationResult {
    fn valid() -> Self {
        Self {
            valid: true,
            reason: None,
        }
    }

    fn invalid(reason: InvalidReason) -> Self {
        Self {
            valid: false,
            reason: Some(reason),
        }
    }
}

/// Checks that an issue was created during working hours.
///
/// An out-of-hours issue is an ordinary outcome, not an error.
pub struct IssueValidator<'a> {
    workdays_configuration: &'a WorkdaysConfiguration,
}

impl<'a> IssueValidator<'a> {
    pub fn new(workdays_configuration: &'a WorkdaysConfiguration) -> Self {
        Self {
            workdays_configuration,
        }
    }

    pub fn date_is_valid(&self, issue: &Issue) -> bool {
        self.validate(issue).valid
    }

    pub fn validate(&self, issue: &Issue) -> ValidationResult {
        let day = issue.date().date();
        let Some(window) = self.workdays_configuration.working_window(day) else {
            tracing::debug!(%day, "Issue falls on a day off");
            return ValidationResult::invalid(InvalidReason::NotAWorkingDay);
        };

        if !window.on(day).contains(&TimeRange::moment(issue.date())) {
            tracing::debug!(issue = %issue.date(), %window, "Issue outside working hours");
            return ValidationResult::invalid(InvalidReason::OutsideWorkingHours {
                working_hours: window,
            });
        }

        ValidationResult::valid()
    }
}
