pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;
pub use crate::config::TomlConfig;

pub use crate::app::engine::{DueDateEngine, Outcome};
pub use crate::core::due_date::DueDateCalculator;
pub use crate::core::time_range::{TimeInterval, TimeRange};
pub use crate::core::time_span::TimeSpan;
pub use crate::core::validator::{InvalidReason, IssueValidator, ValidationResult};
pub use crate::core::workdays::{WorkdaysConfiguration, WorkingWindow};
pub use crate::domain::model::{DayBoundaries, Issue};
pub use crate::utils::error::{DueDateError, Result};
