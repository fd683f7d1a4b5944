use anyhow::Context;
use clap::Parser;
use due_date::app::engine::validate_lead_time;
use due_date::app::prompt::Prompter;
use due_date::utils::error::{DueDateError, ErrorSeverity};
use due_date::utils::validation::Validate;
use due_date::utils::logger;
use due_date::{CliConfig, DueDateEngine, Issue, Outcome, TomlConfig};
use std::io::{self, Write};

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    // 初始化日誌
    if config.log_json {
        logger::init_json_logger(config.verbose);
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::info!("Starting calculate-due-date");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    let outcome = match execute(&config) {
        Ok(outcome) => outcome,
        Err(e) => {
            tracing::error!(
                "❌ Due date calculation failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(exit_code(&e));
        }
    };

    let rendered = outcome
        .render(config.format)
        .context("Failed to render the result")?;

    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{}", rendered).context("Failed to write the result")?;
    stdout.flush().context("Failed to flush stdout")?;

    if outcome.is_rejected() {
        std::process::exit(1);
    }

    Ok(())
}

fn execute(config: &CliConfig) -> due_date::Result<Outcome> {
    tracing::info!("📁 Loading configuration from: {}", config.config);
    let workdays = TomlConfig::from_file(&config.config)?;
    workdays.validate()?;
    let workdays = workdays.workdays_configuration()?;
    tracing::info!("✅ Configuration loaded and validated successfully");

    if config.has_missing_arguments() {
        tracing::debug!("Prompting for missing issue arguments");
    }
    let arguments = Prompter::terminal().complete(
        config.issue_date.clone(),
        config.issue_time.clone(),
        config.lead_time.clone(),
    )?;

    let issue = Issue::parse(&arguments.issue_date, &arguments.issue_time, &arguments.lead_time)?;
    validate_lead_time(&issue)?;

    DueDateEngine::new(&workdays).run(&issue)
}

// 根據錯誤嚴重程度決定退出碼
fn exit_code(error: &DueDateError) -> i32 {
    match error.severity() {
        ErrorSeverity::Medium => 2,
        ErrorSeverity::High => 1,
        ErrorSeverity::Critical => 3,
    }
}
