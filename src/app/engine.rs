use crate::app::report::{DueDateReport, OutputFormat, Rejection};
use crate::core::due_date::DueDateCalculator;
use crate::core::validator::IssueValidator;
use crate::core::workdays::WorkdaysConfiguration;
use crate::domain::model::Issue;
use crate::utils::error::{DueDateError, Result};

/// Largest lead time accepted at the command line: ten years of hours.
pub const MAX_LEAD_TIME_HOURS: u32 = 87_600;

/// Rejects user input whose lead time exceeds [`MAX_LEAD_TIME_HOURS`].
pub fn validate_lead_time(issue: &Issue) -> Result<()> {
    if issue.lead_time_hours() > MAX_LEAD_TIME_HOURS {
        return Err(DueDateError::parse(
            issue.lead_time_hours().to_string(),
            format!("lead time must be at most {} hours", MAX_LEAD_TIME_HOURS),
        ));
    }
    Ok(())
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Scheduled(DueDateReport),
    Rejected(Rejection),
}

impl Outcome {
    pub fn is_rejected(&self) -> bool {
        matches!(self, Self::Rejected(_))
    }

    pub fn render(&self, format: OutputFormat) -> Result<String> {
        match self {
            Self::Scheduled(report) => report.render(format),
            Self::Rejected(rejection) => rejection.render(format),
        }
    }
}

/// Validates an issue and, when it is acceptable, schedules it.
pub struct DueDateEngine<'a> {
    workdays_configuration: &'a WorkdaysConfiguration,
}

impl<'a> DueDateEngine<'a> {
    pub fn new(workdays_configuration: &'a WorkdaysConfiguration) -> Self {
        Self {
            workdays_configuration,
        }
    }

    pub fn run(&self, issue: &Issue) -> Result<Outcome> {
        tracing::info!(
            issue_date = %issue.date().format("%Y-%m-%d %H:%M"),
            lead_time_hours = issue.lead_time_hours(),
            "Validating issue"
        );

        let validation = IssueValidator::new(self.workdays_configuration).validate(issue);
        if let Some(reason) = validation.reason {
            tracing::warn!(%reason, "Issue rejected");
            return Ok(Outcome::Rejected(Rejection::new(issue, reason)));
        }

        let due_date = DueDateCalculator::new(self.workdays_configuration).calculate_due_date(issue)?;
        tracing::info!(due_date = %due_date.format("%Y-%m-%d %H:%M"), "Due date calculated");

        Ok(Outcome::Scheduled(DueDateReport::new(issue, due_date)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::validator::InvalidReason;
    use crate::domain::model::DayBoundaries;
    use crate::utils::error::{ErrorCategory, ErrorSeverity};

    fn office_week() -> WorkdaysConfiguration {
        let day = Some(DayBoundaries::new("08:00", "16:00"));
        WorkdaysConfiguration::new(&[day.clone(), day.clone(), day.clone(), day.clone(), day]).unwrap()
    }

    #[test]
    fn test_schedules_valid_issue() {
        let config = office_week();
        let issue = Issue::parse("2023-01-03", "14:00", "16").unwrap();

        match DueDateEngine::new(&config).run(&issue).unwrap() {
            Outcome::Scheduled(report) => assert_eq!(report.due_date, "2023-01-05 14:00"),
            other => panic!("expected a schedule, got {:?}", other),
        }
    }

    #[test]
    fn test_rejects_weekend_issue() {
        let config = office_week();
        let issue = Issue::parse("2023-01-07", "10:00", "16").unwrap();

        let outcome = DueDateEngine::new(&config).run(&issue).unwrap();
        assert!(outcome.is_rejected());
        match outcome {
            Outcome::Rejected(rejection) => assert_eq!(rejection.reason, InvalidReason::NotAWorkingDay),
            other => panic!("expected a rejection, got {:?}", other),
        }
    }

    #[test]
    fn test_lead_time_bound_is_an_input_error() {
        let longest = Issue::parse("2023-01-03", "14:00", "87600").unwrap();
        assert!(validate_lead_time(&longest).is_ok());

        let too_long = Issue::parse("2023-01-03", "14:00", "87601").unwrap();
        let err = validate_lead_time(&too_long).unwrap_err();
        assert!(matches!(err, DueDateError::ParseError { ref input, .. } if input == "87601"));
        assert_eq!(err.category(), ErrorCategory::Parse);
        assert_eq!(err.severity(), ErrorSeverity::Medium);
        assert!(err.to_string().contains("at most 87600 hours"));
        assert!(err.recovery_suggestion().contains("lead time"));
        assert!(!err.recovery_suggestion().contains("[working_hours]"));
    }
}
