use clap::ValueEnum;
use doku::Document;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The tabs of the calendar page
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, Serialize, Document, ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum CalendarTab {
    /// Month calendar, events of the selected day and the category overview
    #[default]
    Main,
    /// Every event
    Events,
    /// Planning overview
    Planning,
    /// Events with a reminder
    Reminders,
    /// Sync, appearance and notification settings
    Settings,
}

impl CalendarTab {
    pub const ALL: [CalendarTab; 5] = [
        CalendarTab::Main,
        CalendarTab::Events,
        CalendarTab::Planning,
        CalendarTab::Reminders,
        CalendarTab::Settings,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            CalendarTab::Main => "main",
            CalendarTab::Events => "events",
            CalendarTab::Planning => "planning",
            CalendarTab::Reminders => "reminders",
            CalendarTab::Settings => "settings",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            CalendarTab::Main => "Главная",
            CalendarTab::Events => "События",
            CalendarTab::Planning => "План",
            CalendarTab::Reminders => "Уведомления",
            CalendarTab::Settings => "Настройки",
        }
    }
}

impl fmt::Display for CalendarTab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}
