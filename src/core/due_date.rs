use crate::core::time_range::{TimeInterval, TimeRange};
use crate::core::time_span::TimeSpan;
use crate::core::workdays::WorkdaysConfiguration;
use crate::domain::model::Issue;
use crate::utils::error::Result;
use chrono::NaiveDateTime;

/// Walks working windows forward from an issue until its lead time is used up.
pub struct DueDateCalculator<'a> {
    workdays_configuration: &'a WorkdaysConfiguration,
}

impl<'a> DueDateCalculator<'a> {
    pub fn new(workdays_configuration: &'a WorkdaysConfiguration) -> Self {
        Self {
            workdays_configuration,
        }
    }

    /// Expects an issue that passed [`crate::core::validator::IssueValidator`].
    ///
    /// Fails with `NotAWorkingDay` or `InvalidRange` when the issue lies
    /// outside its working day.
    pub fn calculate_due_date(&self, issue: &Issue) -> Result<NaiveDateTime> {
        let issue_date = issue.date();
        let mut minutes_left = issue.lead_time_minutes();

        let end_of_day = self.workdays_configuration.working_day(issue_date.date())?.end();
        let mut window = TimeRange::new(issue_date, end_of_day)?;

        loop {
            let consumed = minutes_left.min(window.duration_minutes());
            window = window.shrink_start(TimeSpan::from_minutes(consumed as u32))?;
            minutes_left -= consumed;

            tracing::debug!(
                window = %window,
                consumed,
                minutes_left,
                "Consumed working window"
            );

            if minutes_left <= 0 {
                break;
            }

            window = self.workdays_configuration.next_working_day(window.end().date())?;
        }

        Ok(window.start())
    }
}
