use color_eyre::eyre::{eyre, Result, WrapErr};
use include_dir::{include_dir, Dir};
use log::{debug, info};
use serde::Serialize;
use std::fs::{self, create_dir_all};
use std::path::{Path, PathBuf};
use tera::{Context, Tera};

use super::{
    events_view::EventsView, main_view::MainView, planning_view::PlanningView,
    reminders_view::RemindersView, settings_view::SettingsView,
};
use crate::{
    configuration::{config::Config, types::calendar_tab::CalendarTab},
    model::{category::Category, session::Session},
    util::{delete_dir_contents, render, write_template},
};

static TEMPLATE_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/templates");
const STYLESHEET: &str = include_str!("../../assets/calpad.scss");

const PAGE_TEMPLATE: &str = "page.html";
const DRAFT_TEMPLATE: &str = "text/draft.txt";
const PAGE_FILE_NAME: &str = "index.html";
const DEFAULT_TEMPLATE_PATH: &str = "templates";

#[derive(Debug, Serialize)]
struct TabContext {
    key: &'static str,
    title: &'static str,
    active: bool,
}

#[derive(Debug, Serialize)]
struct CategoryOption {
    key: &'static str,
    label: &'static str,
}

#[derive(Debug, Serialize)]
struct DraftContext {
    title: String,
    description: String,
    date: Option<String>,
    time: String,
    category: Option<&'static str>,
    reminder: bool,
}

/// Renders the single calendar page, or one of its tabs as text
#[derive(Debug)]
pub struct CalendarPage {
    config: Config,
    tera: Tera,
    stylesheet: String,
}

impl CalendarPage {
    pub fn new(config: Config) -> Result<CalendarPage> {
        let tera = load_templates(&config)?;

        debug!("compiling stylesheet...");
        let stylesheet = grass::from_string(STYLESHEET, &grass::Options::default())
            .map_err(|e| eyre!("could not compile the stylesheet: {}", e))?;

        Ok(CalendarPage {
            config,
            tera,
            stylesheet,
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Generate the template context with the values shared by every tab
    pub fn template_context(&self, session: &Session) -> Context {
        let tabs: Vec<TabContext> = CalendarTab::ALL
            .iter()
            .map(|tab| TabContext {
                key: tab.key(),
                title: tab.title(),
                active: *tab == session.active_tab(),
            })
            .collect();

        let mut context = Context::new();
        context.insert("page_title", "Календарь");
        context.insert("stylesheet", &self.stylesheet);
        context.insert(
            "today",
            &session.today().format(&self.config.date_format).to_string(),
        );
        context.insert("tabs", &tabs);
        context.insert("active_tab", session.active_tab().key());
        context
    }

    fn insert_view(&self, session: &Session, tab: CalendarTab, context: &mut Context) -> Result<()> {
        match tab {
            CalendarTab::Main => MainView::new(session, &self.config).insert_context(context)?,
            CalendarTab::Events => EventsView::new(session, &self.config).insert_context(context),
            CalendarTab::Planning => PlanningView.insert_context(context),
            CalendarTab::Reminders => {
                RemindersView::new(session, &self.config).insert_context(context)
            }
            CalendarTab::Settings => {
                SettingsView::new(session, &self.config).insert_context(context)
            }
        }
        Ok(())
    }

    fn page_context(&self, session: &Session) -> Result<Context> {
        let mut context = self.template_context(session);
        for tab in CalendarTab::ALL {
            self.insert_view(session, tab, &mut context)?;
        }
        Ok(context)
    }

    /// Renders the whole page with every tab, the active one visible
    pub fn render_page(&self, session: &Session) -> Result<String> {
        render(&self.tera, PAGE_TEMPLATE, &self.page_context(session)?)
    }

    /// Renders a single tab as plain text
    pub fn render_tab(&self, session: &Session, tab: CalendarTab) -> Result<String> {
        let mut context = self.template_context(session);
        self.insert_view(session, tab, &mut context)?;
        render(&self.tera, &format!("text/{}.txt", tab.key()), &context)
    }

    /// Renders the event form with the current draft as plain text
    pub fn render_draft(&self, session: &Session) -> Result<String> {
        let draft = session.draft();
        let draft_context = DraftContext {
            title: draft.title.clone().unwrap_or_default(),
            description: draft.description.clone().unwrap_or_default(),
            date: draft
                .date
                .map(|d| d.format(&self.config.date_format).to_string()),
            time: draft.time.clone().unwrap_or_default(),
            category: draft.category.map(|c| c.label()),
            reminder: draft.reminder.unwrap_or_default(),
        };
        let category_options: Vec<CategoryOption> = Category::ALL
            .iter()
            .map(|c| CategoryOption {
                key: c.key(),
                label: c.label(),
            })
            .collect();

        let mut context = self.template_context(session);
        context.insert("draft", &draft_context);
        context.insert("category_options", &category_options);
        render(&self.tera, DRAFT_TEMPLATE, &context)
    }

    /// Creates the output directory and removes its contents unless told otherwise
    pub fn setup_output_dir(&self, output_dir: &Path) -> Result<()> {
        // make the output dir if it doesn't exist
        create_dir_all(output_dir)
            .wrap_err(format!("could not create output dir: {:?}", output_dir))?;

        if self.config.no_delete {
            info!("skipping delete of output directory as instructed...")
        } else {
            info!(
                "removing contents of the output directory: {:?}",
                output_dir
            );
            delete_dir_contents(output_dir);
        }

        Ok(())
    }

    /// Writes the page into the configured output directory, clearing it first unless `no_delete`
    pub fn create_html_page(&self, session: &Session) -> Result<PathBuf> {
        let output_dir = self.config.output_dir();
        self.setup_output_dir(&output_dir)?;
        self.write_page(session, &output_dir)
    }

    /// Writes the page into `output_dir` and returns the path of the written file
    ///
    /// Only `index.html` is replaced, anything else in the directory is left alone.
    pub fn create_html_page_in(&self, session: &Session, output_dir: &Path) -> Result<PathBuf> {
        create_dir_all(output_dir)
            .wrap_err(format!("could not create output dir: {:?}", output_dir))?;
        self.write_page(session, output_dir)
    }

    fn write_page(&self, session: &Session, output_dir: &Path) -> Result<PathBuf> {
        let context = self.page_context(session)?;
        let file_path = output_dir.join(PAGE_FILE_NAME);
        write_template(&self.tera, PAGE_TEMPLATE, &context, &file_path)?;
        info!("wrote calendar page to {:?}", file_path);

        Ok(file_path)
    }
}

/// Loads the templates from the configured template path, or the built-in ones
fn load_templates(config: &Config) -> Result<Tera> {
    match config.template_dir() {
        Some(template_dir) => {
            info!("loading templates from {:?}", template_dir);
            let glob = template_dir.join("**").join("*");
            Tera::new(&glob.to_string_lossy())
                .wrap_err(format!("could not load templates from {:?}", template_dir))
        }
        None => {
            debug!("loading built-in templates...");
            let mut tera = Tera::default();
            let templates = TEMPLATE_DIR
                .find("**/*")?
                .filter_map(|entry| entry.as_file())
                .map(|file| {
                    let name = file.path().to_string_lossy().to_string();
                    let contents = file
                        .contents_utf8()
                        .ok_or(eyre!("template is not valid utf-8: {}", name))?;
                    Ok((name, contents))
                })
                .collect::<Result<Vec<_>>>()?;
            tera.add_raw_templates(templates)
                .wrap_err("could not load built-in templates")?;
            Ok(tera)
        }
    }
}

/// Writes the built-in templates that are missing from the template path
///
/// Without a configured template path they go into `templates` next to the config file.
pub fn restore_missing_templates(config: &Config) -> Result<()> {
    let template_dir = config
        .template_dir()
        .unwrap_or_else(|| config.resolve(Path::new(DEFAULT_TEMPLATE_PATH)));

    for file in TEMPLATE_DIR.find("**/*")?.filter_map(|entry| entry.as_file()) {
        let destination = template_dir.join(file.path());
        if destination.exists() {
            debug!("template already present: {:?}", destination);
            continue;
        }

        if let Some(parent) = destination.parent() {
            create_dir_all(parent)?;
        }
        info!("restoring template: {:?}", destination);
        fs::write(&destination, file.contents())
            .wrap_err(format!("could not write template: {:?}", destination))?;
    }

    Ok(())
}
