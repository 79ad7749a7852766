use chrono::{NaiveDate, NaiveTime};
use clap::{Parser, Subcommand, ValueEnum};
use color_eyre::eyre::Result;
use regex::Regex;
use std::path::PathBuf;

use crate::{
    configuration::types::{calendar_tab::CalendarTab, config_date::parse_date},
    model::category::Category,
};

/// Matches double quoted, single quoted or bare words
const TOKEN_PATTERN: &str = r#""([^"]*)"|'([^']*)'|(\S+)"#;

/// One line typed into the calendar shell
#[derive(Parser, Debug)]
#[command(no_binary_name = true, disable_version_flag = true)]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: SessionCommand,
}

#[derive(Subcommand, Debug, PartialEq)]
pub enum SessionCommand {
    /// Set the title of the new event
    Title {
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        words: Vec<String>,
    },
    /// Set the description of the new event
    Description {
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        words: Vec<String>,
    },
    /// Set the time of the new event (HH:MM), clears it when omitted
    Time {
        #[arg(value_parser = parse_time)]
        time: Option<String>,
    },
    /// Set the category of the new event
    Category { category: Category },
    /// Turn the reminder of the new event on or off
    Reminder { state: Switch },
    /// Set the date of the new event, today when omitted
    Date {
        #[arg(value_parser = parse_date_arg)]
        date: Option<NaiveDate>,
    },
    /// Add the new event to the calendar
    Submit,
    /// Fill in the new event form and submit it in one go
    Add {
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        description: Option<String>,
        #[arg(long, value_parser = parse_time)]
        time: Option<String>,
        #[arg(long)]
        category: Option<Category>,
        #[arg(long, value_parser = parse_date_arg)]
        date: Option<NaiveDate>,
        #[arg(long, default_value_t = false)]
        reminder: bool,
    },
    /// Show the new event form
    Draft,
    /// Reset the new event form
    Clear,
    /// Select the day shown on the main tab (`none` clears the selection, today when omitted)
    Select { date: Option<String> },
    /// Switch to another tab and show it
    Tab { tab: CalendarTab },
    /// Show a tab, the current one when omitted
    Show { tab: Option<CalendarTab> },
    /// Write the calendar page, to the configured output directory when omitted
    Render { output_dir: Option<PathBuf> },
    /// Leave the calendar
    #[command(alias = "exit")]
    Quit,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Switch {
    #[value(alias = "true", alias = "yes")]
    On,
    #[value(alias = "false", alias = "no")]
    Off,
}

impl From<Switch> for bool {
    fn from(value: Switch) -> Self {
        value == Switch::On
    }
}

/// Splits a line into words, keeping quoted text together
pub fn tokenize(line: &str) -> Result<Vec<String>> {
    let re = Regex::new(TOKEN_PATTERN)?;

    Ok(re
        .captures_iter(line)
        .filter_map(|captures| captures.get(1).or(captures.get(2)).or(captures.get(3)))
        .map(|m| m.as_str().to_string())
        .collect())
}

/// Accepts the values of a time input: `HH:MM` or nothing at all
fn parse_time(input: &str) -> Result<String, String> {
    if input.is_empty() {
        return Ok(String::new());
    }

    NaiveTime::parse_from_str(input, "%H:%M")
        .map(|time| time.format("%H:%M").to_string())
        .map_err(|_| format!("expected a time like 09:30, got '{}'", input))
}

fn parse_date_arg(input: &str) -> Result<NaiveDate, String> {
    parse_date(input).map_err(|e| e.to_string())
}
