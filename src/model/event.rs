use chrono::{Datelike, NaiveDate};
use serde::Serialize;
use std::fmt;

use super::category::{Category, ColorAdjustment};
use crate::configuration::config::Config;

/// Identifier of a committed event, unique for the lifetime of a session
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct EventId(u64);

impl EventId {
    pub(crate) fn new(id: u64) -> EventId {
        EventId(id)
    }
}

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A committed calendar event
///
/// Events are only created by the [`EventStore`](super::event_store::EventStore) after the draft they
/// come from passed validation, so `title` and `time` are never empty. They are never changed afterwards.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Event {
    id: EventId,
    title: String,
    description: String,
    date: NaiveDate,
    time: String,
    category: Category,
    reminder: bool,
}

#[derive(Debug, Serialize)]
pub struct EventContext {
    id: EventId,
    title: String,
    description: String,
    date: String,
    date_iso: String,
    relative_date: String,
    time: String,
    category: &'static str,
    category_label: &'static str,
    color: String,
    background: String,
    reminder: bool,
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "#{} {} ({} at {}, {}{})",
            self.id,
            self.title,
            self.date,
            self.time,
            self.category.label(),
            if self.reminder { ", reminder" } else { "" }
        )
    }
}

impl Event {
    pub(crate) fn new(
        id: EventId,
        title: String,
        description: String,
        date: NaiveDate,
        time: String,
        category: Category,
        reminder: bool,
    ) -> Event {
        Event {
            id,
            title,
            description,
            date,
            time,
            category,
            reminder,
        }
    }

    /// Returns an EventContext suitable for providing values to Tera templates
    pub fn context(&self, config: &Config, today: NaiveDate) -> EventContext {
        let adjustment: Option<ColorAdjustment> = config.color_adjustment();

        EventContext {
            id: self.id,
            title: self.title.clone(),
            description: self.description.clone(),
            date: self.date.format(&config.date_format).to_string(),
            date_iso: self.date.to_string(),
            relative_date: self.relative_date(today),
            time: self.time.clone(),
            category: self.category.key(),
            category_label: self.category.label(),
            color: self.category.color().to_hex_string(),
            background: self.category.background(adjustment.as_ref()).to_hex_string(),
            reminder: self.reminder,
        }
    }

    pub fn id(&self) -> EventId {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn time(&self) -> &str {
        &self.time
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn reminder(&self) -> bool {
        self.reminder
    }

    /// Whether the event happens on the given calendar day
    pub fn is_on(&self, date: NaiveDate) -> bool {
        self.date.year() == date.year()
            && self.date.month() == date.month()
            && self.date.day() == date.day()
    }

    /// Describes the event date relative to `today`, e.g. "завтра" or "через 3 дня"
    pub fn relative_date(&self, today: NaiveDate) -> String {
        match (self.date - today).num_days() {
            0 => "сегодня".into(),
            1 => "завтра".into(),
            -1 => "вчера".into(),
            days if days > 0 => format!("через {} {}", days, days_word(days)),
            days => format!("{} {} назад", -days, days_word(-days)),
        }
    }
}

/// The form of "day" that goes with `count`
fn days_word(count: i64) -> &'static str {
    match (count % 10, count % 100) {
        (1, rem) if rem != 11 => "день",
        (2..=4, rem) if !(12..=14).contains(&rem) => "дня",
        _ => "дней",
    }
}
