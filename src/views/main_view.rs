use color_eyre::eyre::Result;
use tera::Context;

use crate::{
    configuration::config::Config,
    model::{category::CategoryContext, event::EventContext, month::MonthGrid, session::Session},
};

/// The main tab: the month calendar, the events of the selected day and the category overview
#[derive(Debug)]
pub struct MainView<'a> {
    session: &'a Session,
    config: &'a Config,
}

impl MainView<'_> {
    pub fn new<'a>(session: &'a Session, config: &'a Config) -> MainView<'a> {
        MainView { session, config }
    }

    pub fn month(&self) -> Result<MonthGrid> {
        MonthGrid::new(self.session.displayed_date(), self.config.week_start())
    }

    pub fn day_events(&self) -> Vec<EventContext> {
        self.session
            .selected_date_events()
            .into_iter()
            .map(|e| e.context(self.config, self.session.today()))
            .collect()
    }

    pub fn categories(&self) -> Vec<CategoryContext> {
        self.session
            .category_counts()
            .context(self.config.color_adjustment().as_ref())
    }

    pub fn insert_context(&self, context: &mut Context) -> Result<()> {
        let month = self.month()?;
        let locale = self.config.locale()?;
        log::debug!("showing {}", month);

        context.insert(
            "month",
            &month.context(
                self.session.today(),
                self.session.selected_date(),
                &self.config.month_view_format,
                locale,
            ),
        );
        context.insert(
            "selected_date",
            &self
                .session
                .selected_date()
                .map(|d| d.format_localized(&self.config.day_view_format, locale).to_string()),
        );
        context.insert("day_events", &self.day_events());
        context.insert("categories", &self.categories());

        Ok(())
    }
}
