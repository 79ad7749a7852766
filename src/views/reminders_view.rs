use tera::Context;

use crate::{
    configuration::config::Config,
    model::{event::EventContext, session::Session},
};

/// Events that have their reminder flag set
#[derive(Debug)]
pub struct RemindersView<'a> {
    session: &'a Session,
    config: &'a Config,
}

impl RemindersView<'_> {
    pub fn new<'a>(session: &'a Session, config: &'a Config) -> RemindersView<'a> {
        RemindersView { session, config }
    }

    pub fn reminders(&self) -> Vec<EventContext> {
        self.session
            .reminders()
            .into_iter()
            .map(|e| e.context(self.config, self.session.today()))
            .collect()
    }

    pub fn insert_context(&self, context: &mut Context) {
        context.insert("reminders", &self.reminders());
    }
}
