pub mod due_date;
pub mod time_range;
pub mod time_span;
pub mod validator;
pub mod workdays;

pub use crate::domain::model::{DayBoundaries, Issue};
pub use crate::domain::ports::ScheduleProvider;
pub use crate::utils::error::Result;
