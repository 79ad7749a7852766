use chrono::{Locale, NaiveDate, Weekday};
use color_eyre::eyre::{eyre, Result, WrapErr};
use doku::Document;
use figment::providers::{Format, Serialized, Toml};
use figment::Figment;
use log::debug;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use super::{
    options::Opt,
    types::{calendar_tab::CalendarTab, config_date::parse_date},
};
use crate::model::category::ColorAdjustment;

#[derive(Debug, Deserialize, Serialize, Document)]
pub struct Config {
    /// The base directory against which all other paths are resolved
    ///
    /// This is normally automatically derived from the directory in which the config file resides
    #[doku(example = ".")]
    pub base_dir: PathBuf,

    /// The date that is considered "today" by the calendar
    /// (defaults to today if left empty)
    ///
    /// New events without a date are placed on this day and the calendar opens on it.
    /// Accepts `yyyy-mm-dd`, `dd.mm.yyyy` or human readable dates like "tomorrow".
    #[doku(example = "today")]
    pub calendar_today_date: String,

    /// Whether to start the session with the two sample events
    pub seed_sample_events: bool,

    /// The tab shown when the calendar is opened
    #[doku(example = "main")]
    pub default_tab: CalendarTab,

    /// The path to the output directory where the calendar page will be written.
    ///
    /// NOTE: This is relative to the config file
    #[doku(example = "output")]
    pub output_dir: PathBuf,

    /// Do not delete files in the output directory
    #[doku(example = "false")]
    pub no_delete: bool,

    /// The path for template files
    ///
    /// The built-in templates are used when this is omitted
    ///
    /// NOTE: This is relative to the config file
    #[doku(example = "templates")]
    pub template_path: Option<PathBuf>,

    /// The locale used for month and weekday names
    #[doku(example = "ru_RU")]
    pub locale: String,

    /// The strftime format for event dates
    ///
    /// Available format options: <https://docs.rs/chrono/latest/chrono/format/strftime/index.html>
    #[doku(example = "%d.%m.%Y")]
    pub date_format: String,

    /// The strftime format for the heading of the selected day
    #[doku(example = "%A, %-d %B %Y")]
    pub day_view_format: String,

    /// The strftime format for the heading of the month calendar
    #[doku(example = "%m.%Y")]
    pub month_view_format: String,

    /// Whether weeks in the month calendar start on Monday (otherwise Sunday)
    pub week_starts_on_monday: bool,

    /// Whether to soften the category colors used behind text to ensure readability
    pub adjust_colors: bool,

    /// The adjusted lightness of the category background colors
    #[doku(example = "0.9")]
    pub adjusted_lightness: f32,

    /// The adjusted chroma or "color intensity" of the category background colors
    #[doku(example = "0.06")]
    pub adjusted_chroma: f32,
}

/// Sane default values for the config struct.
impl Default for Config {
    fn default() -> Self {
        Self {
            base_dir: ".".into(),
            calendar_today_date: "today".into(),
            seed_sample_events: true,
            default_tab: CalendarTab::Main,
            output_dir: "output".into(),
            no_delete: false,
            template_path: None,
            locale: "ru_RU".into(),
            date_format: "%d.%m.%Y".into(),
            day_view_format: "%A, %-d %B %Y".into(),
            month_view_format: "%m.%Y".into(),
            week_starts_on_monday: true,
            adjust_colors: true,
            adjusted_lightness: 0.9,
            adjusted_chroma: 0.06,
        }
    }
}

impl Config {
    /// Layers the defaults, the config file (if it exists) and the command line options
    pub fn new(config_path: &str, args: &Opt) -> Result<Config> {
        // paths in the config are relative to the config file, or to the working directory without one
        let config_file = PathBuf::from(config_path);
        let config_dir = match config_file.canonicalize() {
            Ok(path) => path.parent().map(Path::to_path_buf).unwrap_or_default(),
            Err(_) => {
                debug!("no config file at {:?}, using defaults", config_file);
                std::env::current_dir().wrap_err("could not get the current directory")?
            }
        };

        debug!("reading configuration...");
        let figment: Figment = Figment::from(Serialized::defaults(Config::default()))
            .merge(Toml::file(config_path))
            .admerge(Serialized::defaults(args));

        let base_dir = figment
            .find_value("base_dir")
            .ok()
            .as_ref()
            .and_then(|v| v.as_str())
            // join should either append the path from the config, or replace it if the specified path is absolute
            .map(|d| config_dir.join(d))
            .unwrap_or(config_dir);

        debug!("base directory is set to: {:?}", base_dir);

        let config: Config = figment
            .merge(Figment::new().join(("base_dir", base_dir)))
            .extract()
            .wrap_err("could not read the configuration")?;

        debug!("config is: {:#?}", config);

        Ok(config)
    }

    /// Resolves a path from the config against the base directory
    pub fn resolve(&self, path: &Path) -> PathBuf {
        self.base_dir.join(path)
    }

    pub fn output_dir(&self) -> PathBuf {
        self.resolve(&self.output_dir)
    }

    pub fn template_dir(&self) -> Option<PathBuf> {
        self.template_path.as_deref().map(|path| self.resolve(path))
    }

    /// The machine readable version of `calendar_today_date`
    pub fn today_date(&self) -> Result<NaiveDate> {
        parse_date(&self.calendar_today_date).wrap_err("invalid calendar_today_date")
    }

    /// The machine readable version of `locale`
    pub fn locale(&self) -> Result<Locale> {
        Locale::try_from(self.locale.as_str())
            .map_err(|_| eyre!("unknown locale: {}", self.locale))
    }

    pub fn week_start(&self) -> Weekday {
        if self.week_starts_on_monday {
            Weekday::Mon
        } else {
            Weekday::Sun
        }
    }

    pub fn color_adjustment(&self) -> Option<ColorAdjustment> {
        self.adjust_colors.then_some(ColorAdjustment {
            lightness: self.adjusted_lightness,
            chroma: self.adjusted_chroma,
        })
    }

    /// The annotated example config written by `--create-default-config`
    pub fn example_toml() -> String {
        doku::to_toml::<Config>()
    }
}
