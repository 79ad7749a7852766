use serde::Serialize;
use std::fmt;

use super::{draft::ValidationError, event::EventId};

pub const EVENT_ADDED: &str = "Событие добавлено!";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeKind {
    Success,
    Error,
}

/// A short acknowledgment shown to the user after an action
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Notice {
    kind: NoticeKind,
    message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Notice {
        Notice {
            kind: NoticeKind::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Notice {
        Notice {
            kind: NoticeKind::Error,
            message: message.into(),
        }
    }

    /// The acknowledgment for submitting the event form
    pub fn for_submission(result: &Result<EventId, ValidationError>) -> Notice {
        match result {
            Ok(_) => Notice::success(EVENT_ADDED),
            Err(e) => Notice::error(e.to_string()),
        }
    }

    pub fn kind(&self) -> NoticeKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            NoticeKind::Success => write!(f, "[ok] {}", self.message),
            NoticeKind::Error => write!(f, "[error] {}", self.message),
        }
    }
}
