use clap::Parser;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const DEFAULT_CONFIG_FILE: &str = "calpad.toml";

/// Command line options
///
/// Only the options that have a counterpart in [`Config`](super::config::Config) are serialized,
/// and only when they were actually given, so they can be merged over the config file.
#[derive(Parser, Debug, Serialize, Deserialize)]
#[command(name = "calpad", author, version, about)]
pub struct Opt {
    /// The config file to read
    ///
    /// Paths mentioned in the config are relative to the directory containing this file.
    #[clap(default_value_t = String::from(DEFAULT_CONFIG_FILE))]
    #[serde(skip)]
    pub config_file: String,

    /// Create the example config file in the current directory
    #[clap(long, default_value_t = false)]
    #[serde(skip)]
    pub create_default_config: bool,

    /// Restore the missing default templates to the templates path specified in the config file
    #[clap(long, default_value_t = false)]
    #[serde(skip)]
    pub restore_missing_templates: bool,

    /// Read commands from this file instead of the terminal
    #[clap(short, long)]
    #[serde(skip)]
    pub script: Option<PathBuf>,

    /// Render the calendar page once and exit
    #[clap(long, default_value_t = false)]
    #[serde(skip)]
    pub render: bool,

    /// The directory the calendar page is written to
    #[clap(short, long)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_dir: Option<PathBuf>,

    /// Do not delete files in the output directory
    #[clap(long, default_value_t = false)]
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub no_delete: bool,
}
