use chrono::NaiveDate;
use color_eyre::eyre::Result;
use log::{debug, info};

use super::{
    category::CategoryCounts,
    draft::{EventDraft, EventForm, ValidationError},
    event::{Event, EventId},
    event_store::EventStore,
    notice::Notice,
    projections::{count_by_category, events_on_date, events_with_reminder},
};
use crate::configuration::{config::Config, types::calendar_tab::CalendarTab};

/// Everything one user works with while the calendar is open
///
/// The session owns the event store and the form, and remembers which day and which tab are
/// currently shown. It lives as long as the process and is never written anywhere.
#[derive(Debug)]
pub struct Session {
    store: EventStore,
    form: EventForm,
    today: NaiveDate,
    selected_date: Option<NaiveDate>,
    active_tab: CalendarTab,
}

impl Session {
    pub fn new(store: EventStore, today: NaiveDate, active_tab: CalendarTab) -> Session {
        Session {
            store,
            form: EventForm::default(),
            today,
            selected_date: Some(today),
            active_tab,
        }
    }

    pub fn from_config(config: &Config) -> Result<Session> {
        let today = config.today_date()?;
        info!("starting session, today is {}", today);

        let store = if config.seed_sample_events {
            EventStore::with_sample_events(today)
        } else {
            EventStore::new()
        };

        Ok(Session::new(store, today, config.default_tab))
    }

    pub fn store(&self) -> &EventStore {
        &self.store
    }

    pub fn events(&self) -> &[Event] {
        self.store.all()
    }

    pub fn today(&self) -> NaiveDate {
        self.today
    }

    pub fn draft(&self) -> &EventDraft {
        self.form.draft()
    }

    pub fn draft_mut(&mut self) -> &mut EventDraft {
        self.form.draft_mut()
    }

    pub fn reset_draft(&mut self) {
        self.form.reset();
    }

    /// Submits the current draft
    pub fn submit(&mut self) -> Result<EventId, ValidationError> {
        self.form.submit(&mut self.store, self.today)
    }

    /// Replaces the draft with `draft` and submits it
    pub fn submit_draft(&mut self, draft: EventDraft) -> Result<EventId, ValidationError> {
        *self.form.draft_mut() = draft;
        self.submit()
    }

    /// Submits the current draft and turns the outcome into an acknowledgment
    pub fn submit_with_notice(&mut self) -> Notice {
        let result = self.submit();
        if let Err(e) = &result {
            debug!("rejected draft: {}", e);
        }
        Notice::for_submission(&result)
    }

    pub fn selected_date(&self) -> Option<NaiveDate> {
        self.selected_date
    }

    pub fn select_date(&mut self, date: Option<NaiveDate>) {
        debug!("selected date: {:?}", date);
        self.selected_date = date;
    }

    /// The day whose month the calendar grid shows
    pub fn displayed_date(&self) -> NaiveDate {
        self.selected_date.unwrap_or(self.today)
    }

    pub fn active_tab(&self) -> CalendarTab {
        self.active_tab
    }

    pub fn select_tab(&mut self, tab: CalendarTab) {
        debug!("selected tab: {}", tab);
        self.active_tab = tab;
    }

    /// Events on the selected date, nothing when no date is selected
    pub fn selected_date_events(&self) -> Vec<&Event> {
        match self.selected_date {
            Some(date) => events_on_date(self.events(), date),
            None => Vec::new(),
        }
    }

    pub fn reminders(&self) -> Vec<&Event> {
        events_with_reminder(self.events())
    }

    pub fn category_counts(&self) -> CategoryCounts {
        count_by_category(self.events())
    }
}
