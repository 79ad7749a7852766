use chrono::NaiveDate;
use itertools::Itertools;
use serde::Serialize;
use std::fmt;
use thiserror::Error;

use super::{category::Category, event::EventId, event_store::EventStore};

/// The fields that have to be filled in before a draft can become an event
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RequiredField {
    Title,
    Time,
}

impl fmt::Display for RequiredField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RequiredField::Title => write!(f, "название"),
            RequiredField::Time => write!(f, "время"),
        }
    }
}

/// Raised when a draft is submitted without a title or a time
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("Заполните название и время события (не заполнено: {})", .missing.iter().join(", "))]
pub struct ValidationError {
    missing: Vec<RequiredField>,
}

impl ValidationError {
    pub fn missing(&self) -> &[RequiredField] {
        &self.missing
    }
}

/// A partially filled event that is still being composed
///
/// Any field may be unset. Defaults for the optional fields are only applied once the draft is
/// committed to the store.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct EventDraft {
    pub title: Option<String>,
    pub description: Option<String>,
    pub date: Option<NaiveDate>,
    pub time: Option<String>,
    pub category: Option<Category>,
    pub reminder: Option<bool>,
}

impl EventDraft {
    /// The state of the form after it was opened or successfully submitted
    pub fn blank() -> EventDraft {
        EventDraft {
            title: Some(String::new()),
            description: Some(String::new()),
            date: None,
            time: Some(String::new()),
            category: Some(Category::default()),
            reminder: Some(false),
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_date(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }

    pub fn with_time(mut self, time: impl Into<String>) -> Self {
        self.time = Some(time.into());
        self
    }

    pub fn with_category(mut self, category: Category) -> Self {
        self.category = Some(category);
        self
    }

    pub fn with_reminder(mut self, reminder: bool) -> Self {
        self.reminder = Some(reminder);
        self
    }

    /// Checks that the title and time are present and not empty
    pub fn validate(&self) -> Result<(), ValidationError> {
        let missing: Vec<RequiredField> = [
            (RequiredField::Title, &self.title),
            (RequiredField::Time, &self.time),
        ]
        .into_iter()
        .filter(|(_, value)| value.as_deref().map_or(true, str::is_empty))
        .map(|(field, _)| field)
        .collect();

        if missing.is_empty() {
            Ok(())
        } else {
            Err(ValidationError { missing })
        }
    }
}

/// The form used to compose a new event
///
/// A failed submission leaves the draft untouched so it can be corrected, a successful one resets
/// it to [`EventDraft::blank`].
#[derive(Debug)]
pub struct EventForm {
    draft: EventDraft,
}

impl Default for EventForm {
    fn default() -> Self {
        EventForm {
            draft: EventDraft::blank(),
        }
    }
}

impl EventForm {
    pub fn draft(&self) -> &EventDraft {
        &self.draft
    }

    pub fn draft_mut(&mut self) -> &mut EventDraft {
        &mut self.draft
    }

    pub fn reset(&mut self) {
        self.draft = EventDraft::blank();
    }

    pub fn submit(
        &mut self,
        store: &mut EventStore,
        today: NaiveDate,
    ) -> Result<EventId, ValidationError> {
        let id = store.add(&self.draft, today)?.id();
        log::debug!("form submitted, created event {}", id);
        self.reset();
        Ok(id)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn blank_draft_is_missing_title_and_time() {
        let error = EventDraft::blank().validate().unwrap_err();
        assert_eq!(error.missing(), &[RequiredField::Title, RequiredField::Time]);
        assert_eq!(
            error.to_string(),
            "Заполните название и время события (не заполнено: название, время)"
        );
    }

    #[test]
    fn unset_and_empty_fields_are_both_missing() {
        let unset = EventDraft::default().with_time("10:00");
        assert_eq!(unset.validate().unwrap_err().missing(), &[RequiredField::Title]);

        let empty = EventDraft::blank().with_title("Lunch");
        assert_eq!(empty.validate().unwrap_err().missing(), &[RequiredField::Time]);
    }

    #[test]
    fn title_and_time_are_enough() {
        let draft = EventDraft::default().with_title("Lunch").with_time("12:00");
        assert_eq!(draft.validate(), Ok(()));
    }

    #[test]
    fn blank_draft_uses_the_default_category() {
        let draft = EventDraft::blank();
        assert_eq!(draft.category, Some(Category::Purple));
        assert_eq!(draft.reminder, Some(false));
        assert_eq!(draft.date, None);
    }

    #[test]
    fn failed_submission_keeps_the_draft() {
        let today = NaiveDate::from_ymd_opt(2024, 5, 10).unwrap();
        let mut store = EventStore::new();
        let mut form = EventForm::default();
        form.draft_mut().time = Some("12:00".into());
        form.draft_mut().description = Some("with the team".into());
        let before = form.draft().clone();

        assert!(form.submit(&mut store, today).is_err());
        assert_eq!(form.draft(), &before);
        assert!(store.is_empty());
    }

    #[test]
    fn successful_submission_resets_the_draft() {
        let today = NaiveDate::from_ymd_opt(2024, 5, 10).unwrap();
        let mut store = EventStore::new();
        let mut form = EventForm::default();
        form.draft_mut().title = Some("Lunch".into());
        form.draft_mut().time = Some("12:00".into());
        form.draft_mut().category = Some(Category::Green);
        form.draft_mut().reminder = Some(true);

        let id = form.submit(&mut store, today).unwrap();
        assert_eq!(store.get(id).map(|e| e.title()), Some("Lunch"));
        assert_eq!(form.draft(), &EventDraft::blank());
    }
}
