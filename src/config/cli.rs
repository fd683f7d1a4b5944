use crate::app::report::OutputFormat;
use crate::config::toml_config::DEFAULT_CONFIG_PATH;
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "calculate-due-date")]
#[command(
    about = "Calculate the due date of an issue given by issue date, issue time and the lead time in hours"
)]
#[command(version)]
pub struct CliConfig {
    /// Date of the issue in "YYYY-MM-DD" format
    pub issue_date: Option<String>,

    /// Time of the issue in "HH:MM" format
    pub issue_time: Option<String>,

    /// Lead time in working hours
    pub lead_time: Option<String>,

    /// Path to the workdays configuration file
    #[arg(short, long, env = "DUE_DATE_CONFIG", default_value = DEFAULT_CONFIG_PATH)]
    pub config: String,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Emit logs as JSON lines
    #[arg(long)]
    pub log_json: bool,
}

impl CliConfig {
    pub fn has_missing_arguments(&self) -> bool {
        self.issue_date.is_none() || self.issue_time.is_none() || self.lead_time.is_none()
    }
}
