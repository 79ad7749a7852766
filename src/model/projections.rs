//! Derived views over the committed events
//!
//! These functions only read the events they are given and keep the store order.

use chrono::NaiveDate;

use super::{category::CategoryCounts, event::Event};

/// Events happening on `date`, compared by calendar day
pub fn events_on_date(events: &[Event], date: NaiveDate) -> Vec<&Event> {
    events.iter().filter(|event| event.is_on(date)).collect()
}

/// Events with the reminder flag set
pub fn events_with_reminder(events: &[Event]) -> Vec<&Event> {
    events.iter().filter(|event| event.reminder()).collect()
}

/// Number of events for each of the categories, including the empty ones
pub fn count_by_category(events: &[Event]) -> CategoryCounts {
    events.iter().collect()
}
