use clap::Parser;
use color_eyre::eyre::Result;
use log::{debug, error, info};
use std::io::{BufRead, Write};
use std::path::PathBuf;

use crate::{
    commands::{tokenize, CommandLine, SessionCommand},
    configuration::types::config_date::parse_date,
    model::{draft::EventDraft, notice::Notice, session::Session},
    views::calendar_page::CalendarPage,
};

const PROMPT: &str = "calpad> ";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Reads commands line by line and applies them to the session
#[derive(Debug)]
pub struct Shell {
    session: Session,
    page: CalendarPage,
}

impl Shell {
    pub fn new(session: Session, page: CalendarPage) -> Shell {
        Shell { session, page }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn page(&self) -> &CalendarPage {
        &self.page
    }

    /// Runs until the input ends or a `quit` command is read
    ///
    /// Mistyped commands and rejected events are reported to `output` and do not stop the loop.
    pub fn run<R: BufRead, W: Write>(
        &mut self,
        input: R,
        mut output: W,
        interactive: bool,
    ) -> Result<()> {
        if interactive {
            writeln!(output, "{}", self.page.render_tab(&self.session, self.session.active_tab())?)?;
            write!(output, "{}", PROMPT)?;
            output.flush()?;
        }

        for line in input.lines() {
            let line = line?;
            match self.execute_line(&line, &mut output) {
                Ok(Flow::Quit) => break,
                Ok(Flow::Continue) => {}
                Err(e) => {
                    error!("command failed: {:#}", e);
                    writeln!(output, "[error] {:#}", e)?;
                }
            }

            if interactive {
                write!(output, "{}", PROMPT)?;
                output.flush()?;
            }
        }

        info!("leaving the calendar");
        Ok(())
    }

    /// Parses and executes one line, blank lines and `#` comments are skipped
    pub fn execute_line<W: Write>(&mut self, line: &str, output: &mut W) -> Result<Flow> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return Ok(Flow::Continue);
        }

        let tokens = tokenize(line)?;
        match CommandLine::try_parse_from(tokens) {
            Ok(command_line) => self.execute(command_line.command, output),
            Err(e) => {
                debug!("could not parse command: {:?}", line);
                write!(output, "{}", e.render())?;
                Ok(Flow::Continue)
            }
        }
    }

    pub fn execute<W: Write>(&mut self, command: SessionCommand, output: &mut W) -> Result<Flow> {
        debug!("executing {:?}", command);

        match command {
            SessionCommand::Title { words } => {
                self.session.draft_mut().title = Some(words.join(" "));
            }
            SessionCommand::Description { words } => {
                self.session.draft_mut().description = Some(words.join(" "));
            }
            SessionCommand::Time { time } => {
                self.session.draft_mut().time = Some(time.unwrap_or_default());
            }
            SessionCommand::Category { category } => {
                self.session.draft_mut().category = Some(category);
            }
            SessionCommand::Reminder { state } => {
                self.session.draft_mut().reminder = Some(state.into());
            }
            SessionCommand::Date { date } => {
                self.session.draft_mut().date = date;
            }
            SessionCommand::Submit => {
                writeln!(output, "{}", self.session.submit_with_notice())?;
            }
            SessionCommand::Add {
                title,
                description,
                time,
                category,
                date,
                reminder,
            } => {
                let draft = EventDraft {
                    title,
                    description,
                    date,
                    time,
                    category,
                    reminder: Some(reminder),
                };
                let result = self.session.submit_draft(draft);
                writeln!(output, "{}", Notice::for_submission(&result))?;
            }
            SessionCommand::Draft => {
                write!(output, "{}", self.page.render_draft(&self.session)?)?;
            }
            SessionCommand::Clear => {
                self.session.reset_draft();
            }
            SessionCommand::Select { date } => {
                let selection = match date.as_deref() {
                    None => Some(self.session.today()),
                    Some("none") => None,
                    Some(input) => match parse_date(input) {
                        Ok(date) => Some(date),
                        Err(e) => {
                            writeln!(output, "{}", Notice::error(e.to_string()))?;
                            return Ok(Flow::Continue);
                        }
                    },
                };
                self.session.select_date(selection);
                write!(output, "{}", self.page.render_tab(&self.session, self.session.active_tab())?)?;
            }
            SessionCommand::Tab { tab } => {
                self.session.select_tab(tab);
                write!(output, "{}", self.page.render_tab(&self.session, tab)?)?;
            }
            SessionCommand::Show { tab } => {
                let tab = tab.unwrap_or(self.session.active_tab());
                write!(output, "{}", self.page.render_tab(&self.session, tab)?)?;
            }
            SessionCommand::Render { output_dir } => {
                let file_path = self.render(output_dir)?;
                writeln!(output, "страница записана: {}", file_path.display())?;
            }
            SessionCommand::Quit => return Ok(Flow::Quit),
        }

        Ok(Flow::Continue)
    }

    /// Writes the calendar page, to the configured output directory unless one is given
    pub fn render(&self, output_dir: Option<PathBuf>) -> Result<PathBuf> {
        match output_dir {
            Some(output_dir) => self.page.create_html_page_in(&self.session, &output_dir),
            None => self.page.create_html_page(&self.session),
        }
    }
}
