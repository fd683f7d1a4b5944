use crate::core::validator::InvalidReason;
use crate::domain::model::Issue;
use crate::utils::error::Result;
use chrono::NaiveDateTime;
use serde::Serialize;

const INSTANT_FORMAT: &str = "%Y-%m-%d %H:%M";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// A successfully scheduled issue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DueDateReport {
    pub issue_date: String,
    pub lead_time_hours: u32,
    pub due_date: String,
}

impl DueDateReport {
    pub fn new(issue: &Issue, due_date: NaiveDateTime) -> Self {
        Self {
            issue_date: issue.date().format(INSTANT_FORMAT).to_string(),
            lead_time_hours: issue.lead_time_hours(),
            due_date: due_date.format(INSTANT_FORMAT).to_string(),
        }
    }

    pub fn render(&self, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Text => Ok(format!(
                "\nIssue recorded at: {}\nLead time in hours: {}\nCalculated due date: {}",
                self.issue_date, self.lead_time_hours, self.due_date
            )),
            OutputFormat::Json => Ok(serde_json::to_string_pretty(self)?),
        }
    }
}

/// An issue that was not created during working hours.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Rejection {
    pub valid: bool,
    pub issue_date: String,
    #[serde(flatten)]
    pub reason: InvalidReason,
    pub message: String,
}

impl Rejection {
    pub fn new(issue: &Issue, reason: InvalidReason) -> Self {
        let message = match reason {
            InvalidReason::NotAWorkingDay => format!(
                "Given date \"{}\" is not a working day.",
                issue.date().format("%Y-%m-%d")
            ),
            InvalidReason::OutsideWorkingHours { working_hours } => format!(
                "Given time is out of working hours. Working hours are {}.",
                working_hours
            ),
        };

        Self {
            valid: false,
            issue_date: issue.date().format(INSTANT_FORMAT).to_string(),
            reason,
            message,
        }
    }

    pub fn render(&self, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Text => Ok(self.message.clone()),
            OutputFormat::Json => Ok(serde_json::to_string_pretty(self)?),
        }
    }
}
