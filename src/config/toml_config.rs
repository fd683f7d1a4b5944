use crate::core::workdays::{WorkdaysConfiguration, DAY_NAMES};
use crate::domain::model::DayBoundaries;
use crate::domain::ports::ScheduleProvider;
use crate::utils::error::{DueDateError, Result};
use crate::utils::validation::{validate_required_field, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::LazyLock;

pub const DEFAULT_CONFIG_PATH: &str = "config/workdays.toml";

static ENV_VAR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$\{([^}]+)\}").expect("env var pattern compiles"));

/// Workdays configuration file.
///
/// ```toml
/// [working_hours]
/// monday = ["08:00", "16:00"]
/// saturday = []
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    pub working_hours: Option<WorkingHoursConfig>,
}

/// `[start, end]` per weekday. An omitted day or an empty array is a day off.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WorkingHoursConfig {
    pub monday: Option<Vec<String>>,
    pub tuesday: Option<Vec<String>>,
    pub wednesday: Option<Vec<String>>,
    pub thursday: Option<Vec<String>>,
    pub friday: Option<Vec<String>>,
    pub saturday: Option<Vec<String>>,
    pub sunday: Option<Vec<String>>,
}

impl WorkingHoursConfig {
    fn days(&self) -> [&Option<Vec<String>>; 7] {
        [
            &self.monday,
            &self.tuesday,
            &self.wednesday,
            &self.thursday,
            &self.friday,
            &self.saturday,
            &self.sunday,
        ]
    }
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        tracing::debug!(path = %path.as_ref().display(), "Reading workdays configuration");
        let content = std::fs::read_to_string(&path).map_err(DueDateError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| DueDateError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${WORK_START})；未設定的變數保持原樣
    fn substitute_env_vars(content: &str) -> String {
        ENV_VAR
            .replace_all(content, |caps: &regex::Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .into_owned()
    }

    pub fn workdays_configuration(&self) -> Result<WorkdaysConfiguration> {
        WorkdaysConfiguration::from_provider(self)
    }

    /// 驗證配置的合理性
    pub fn validate_config(&self) -> Result<()> {
        self.workdays_configuration().map(|_| ())
    }
}

fn day_boundaries(day: &str, values: &[String]) -> Result<Option<DayBoundaries>> {
    match values {
        [] => Ok(None),
        [start] => Ok(Some(DayBoundaries {
            start: Some(start.clone()),
            end: None,
        })),
        [start, end] => Ok(Some(DayBoundaries::new(start.as_str(), end.as_str()))),
        _ => Err(DueDateError::invalid_configuration(
            format!("working_hours.{day}"),
            values.join(", "),
            "Expected [start, end]",
        )),
    }
}

impl ScheduleProvider for TomlConfig {
    fn working_hours(&self) -> Result<Vec<Option<DayBoundaries>>> {
        let working_hours = validate_required_field("working_hours", &self.working_hours)?;

        working_hours
            .days()
            .into_iter()
            .zip(DAY_NAMES)
            .map(|(values, day)| match values {
                Some(values) => day_boundaries(day, values),
                None => Ok(None),
            })
            .collect()
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
