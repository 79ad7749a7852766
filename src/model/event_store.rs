use chrono::NaiveDate;
use log::{debug, info};

use super::{
    category::Category,
    draft::{EventDraft, ValidationError},
    event::{Event, EventId},
};

/// The ordered, append-only collection of committed events
///
/// Ids come from a counter owned by the store, so they are unique for as long as the store lives.
#[derive(Debug)]
pub struct EventStore {
    events: Vec<Event>,
    last_id: u64,
}

impl Default for EventStore {
    fn default() -> Self {
        Self::new()
    }
}

impl EventStore {
    pub fn new() -> EventStore {
        EventStore {
            events: Vec::new(),
            last_id: 0,
        }
    }

    /// Creates a store holding the two sample events shown when the calendar is opened
    pub fn with_sample_events(today: NaiveDate) -> EventStore {
        let mut store = EventStore::new();

        for draft in sample_drafts(today) {
            // the sample drafts always carry a title and a time
            if let Err(e) = store.add(&draft, today) {
                log::error!("could not add sample event: {}", e);
            }
        }

        info!("seeded the event store with {} sample events", store.len());
        store
    }

    /// Validates the draft and appends the resulting event
    ///
    /// Unset optional fields get their defaults: an empty description, `today` as the date, the
    /// default category and no reminder. The store is left untouched when validation fails.
    pub fn add(&mut self, draft: &EventDraft, today: NaiveDate) -> Result<&Event, ValidationError> {
        draft.validate()?;

        self.last_id += 1;
        let event = Event::new(
            EventId::new(self.last_id),
            draft.title.clone().unwrap_or_default(),
            draft.description.clone().unwrap_or_default(),
            draft.date.unwrap_or(today),
            draft.time.clone().unwrap_or_default(),
            draft.category.unwrap_or_default(),
            draft.reminder.unwrap_or_default(),
        );
        debug!("adding event: {}", event);

        self.events.push(event);
        Ok(&self.events[self.events.len() - 1])
    }

    /// All committed events in the order they were added
    pub fn all(&self) -> &[Event] {
        &self.events
    }

    pub fn get(&self, id: EventId) -> Option<&Event> {
        self.events.iter().find(|event| event.id() == id)
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

fn sample_drafts(today: NaiveDate) -> [EventDraft; 2] {
    [
        EventDraft::default()
            .with_title("Встреча с командой")
            .with_description("Обсуждение нового проекта")
            .with_date(today)
            .with_time("10:00")
            .with_category(Category::Purple)
            .with_reminder(true),
        EventDraft::default()
            .with_title("Презентация")
            .with_description("Демонстрация результатов работы")
            .with_date(today)
            .with_time("14:00")
            .with_category(Category::Orange)
            .with_reminder(true),
    ]
}
