use crate::utils::error::Result;
use chrono::{NaiveDate, NaiveTime};
use std::io::{self, BufRead, Write};

/// Raw issue arguments, either given on the command line or asked for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssueArguments {
    pub issue_date: String,
    pub issue_time: String,
    pub lead_time: String,
}

/// Asks for values on `input`, re-asking until an answer parses.
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl Prompter<io::StdinLock<'static>, io::Stderr> {
    /// Reads answers from stdin and writes questions to stderr, keeping
    /// stdout for the rendered result.
    pub fn terminal() -> Self {
        Self::new(io::stdin().lock(), io::stderr())
    }
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Fills in whatever the command line left out.
    pub fn complete(
        &mut self,
        issue_date: Option<String>,
        issue_time: Option<String>,
        lead_time: Option<String>,
    ) -> Result<IssueArguments> {
        let issue_date = match issue_date {
            Some(value) => value,
            None => self.ask(
                "Please enter the date of the issue (format: \"YYYY-MM-DD\"): ",
                |answer| NaiveDate::parse_from_str(answer, "%Y-%m-%d").is_ok(),
            )?,
        };
        let issue_time = match issue_time {
            Some(value) => value,
            None => self.ask(
                "Please enter the time of the issue (format: \"HH:MM\"): ",
                |answer| NaiveTime::parse_from_str(answer, "%H:%M").is_ok(),
            )?,
        };
        let lead_time = match lead_time {
            Some(value) => value,
            None => self.ask(
                "Please enter the lead time of the issue (in hours): ",
                |answer| answer.parse::<u32>().is_ok(),
            )?,
        };

        Ok(IssueArguments {
            issue_date,
            issue_time,
            lead_time,
        })
    }

    fn ask(&mut self, question: &str, accept: impl Fn(&str) -> bool) -> Result<String> {
        loop {
            write!(self.output, "{}", question)?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Err(io::Error::new(
                    io::ErrorKind::UnexpectedEof,
                    "input ended before a valid value was entered",
                )
                .into());
            }

            let answer = line.trim();
            if accept(answer) {
                return Ok(answer.to_string());
            }
            writeln!(self.output, "The entered value is invalid, please try again!")?;
        }
    }
}
