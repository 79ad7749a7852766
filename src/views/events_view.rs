use tera::Context;

use crate::{
    configuration::config::Config,
    model::{event::EventContext, session::Session},
};

/// Every event in the order it was added
#[derive(Debug)]
pub struct EventsView<'a> {
    session: &'a Session,
    config: &'a Config,
}

impl EventsView<'_> {
    pub fn new<'a>(session: &'a Session, config: &'a Config) -> EventsView<'a> {
        EventsView { session, config }
    }

    pub fn events(&self) -> Vec<EventContext> {
        self.session
            .events()
            .iter()
            .map(|e| e.context(self.config, self.session.today()))
            .collect()
    }

    pub fn insert_context(&self, context: &mut Context) {
        context.insert("all_events", &self.events());
    }
}
