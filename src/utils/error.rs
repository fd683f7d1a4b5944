use thiserror::Error;

#[derive(Error, Debug)]
pub enum DueDateError {
    #[error("Parse error: cannot read '{input}' ({reason})")]
    ParseError { input: String, reason: String },

    #[error("Invalid time range: end ({end}) must be greater than or equal to start ({start})")]
    InvalidRange { start: String, end: String },

    #[error("Date {date} is not a working day")]
    NotAWorkingDay { date: String },

    #[error("No working days configured: every day of the week is off")]
    NoWorkingDaysConfigured,

    #[error("Invalid configuration value for '{field}': '{value}' ({reason})")]
    InvalidConfiguration {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Configuration error in {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Date arithmetic out of range while trying to {operation}")]
    OutOfRange { operation: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Parse,
    Configuration,
    Calculation,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl DueDateError {
    pub fn parse(input: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::ParseError {
            input: input.into(),
            reason: reason.into(),
        }
    }

    pub fn invalid_configuration(
        field: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self::InvalidConfiguration {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    pub fn out_of_range(operation: impl Into<String>) -> Self {
        Self::OutOfRange {
            operation: operation.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::ParseError { .. } => ErrorCategory::Parse,
            Self::NotAWorkingDay { .. }
            | Self::NoWorkingDaysConfigured
            | Self::InvalidConfiguration { .. }
            | Self::MissingConfigError { .. }
            | Self::ConfigValidationError { .. } => ErrorCategory::Configuration,
            Self::InvalidRange { .. } | Self::OutOfRange { .. } => ErrorCategory::Calculation,
            Self::IoError(_) | Self::SerializationError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Parse => ErrorSeverity::Medium,
            ErrorCategory::Configuration | ErrorCategory::Calculation => ErrorSeverity::High,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::ParseError { input, .. } => format!("The value '{}' could not be understood.", input),
            Self::InvalidRange { .. } | Self::OutOfRange { .. } => {
                format!("The due date could not be calculated: {}", self)
            }
            Self::NotAWorkingDay { date } => format!("Date {} has no working hours configured.", date),
            Self::NoWorkingDaysConfigured => {
                "The workdays configuration does not contain a single working day.".to_string()
            }
            Self::InvalidConfiguration { .. }
            | Self::MissingConfigError { .. }
            | Self::ConfigValidationError { .. } => format!("Invalid or missing configuration: {}", self),
            Self::IoError(e) => format!("File access failed: {}", e),
            Self::SerializationError(e) => format!("Could not render output: {}", e),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Parse => {
                "Dates use YYYY-MM-DD, times use HH:MM and lead time is a whole number of hours, at most 87600"
            }
            ErrorCategory::Configuration => {
                "Check the [working_hours] table of the workdays configuration file"
            }
            ErrorCategory::Calculation => "Make sure the issue was created within working hours",
            ErrorCategory::System => "Make sure the configuration file exists and is readable",
        }
    }
}

pub type Result<T> = std::result::Result<T, DueDateError>;
