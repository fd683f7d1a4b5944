use crate::domain::model::DayBoundaries;
use crate::utils::error::Result;

/// A source of the raw weekly schedule, Monday first.
///
/// Fewer than seven entries leave the remaining days off.
pub trait ScheduleProvider: Send + Sync {
    fn working_hours(&self) -> Result<Vec<Option<DayBoundaries>>>;
}

impl ScheduleProvider for [Option<DayBoundaries>] {
    fn working_hours(&self) -> Result<Vec<Option<DayBoundaries>>> {
        Ok(self.to_vec())
    }
}
