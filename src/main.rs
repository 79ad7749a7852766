use clap::Parser;
use color_eyre::eyre::{self, WrapErr};
use flexi_logger::Logger;
use log::{info, warn};
use std::{
    fs::{self, File},
    io::{stdin, stdout, BufReader, IsTerminal},
    path::Path,
};

use calpad::{
    configuration::{
        config::Config,
        options::{Opt, DEFAULT_CONFIG_FILE},
    },
    model::session::Session,
    shell::Shell,
    views::calendar_page::{restore_missing_templates, CalendarPage},
};

fn main() -> eyre::Result<()> {
    color_eyre::install()?;
    let _logger = Logger::try_with_env_or_str("info")?.start()?;

    let args = Opt::parse();

    if args.create_default_config {
        let config_path = Path::new(DEFAULT_CONFIG_FILE);
        if config_path.exists() {
            warn!("config file already exists, not overwriting: {:?}", config_path);
        } else {
            info!("writing example config to {:?}", config_path);
            fs::write(config_path, Config::example_toml())
                .wrap_err(format!("could not write config file: {:?}", config_path))?;
        }
        return Ok(());
    }

    let config = Config::new(&args.config_file, &args)?;

    if args.restore_missing_templates {
        restore_missing_templates(&config)?;
        return Ok(());
    }

    let session = Session::from_config(&config)?;
    let page = CalendarPage::new(config)?;
    let mut shell = Shell::new(session, page);

    if let Some(script) = &args.script {
        info!("running commands from {:?}", script);
        let file = File::open(script).wrap_err(format!("could not open script: {:?}", script))?;
        shell.run(BufReader::new(file), stdout().lock(), false)?;
    } else if !args.render {
        let interactive = stdin().is_terminal();
        shell.run(stdin().lock(), stdout().lock(), interactive)?;
    }

    if args.render {
        let file_path = shell.render(None)?;
        println!("страница записана: {}", file_path.display());
    }

    Ok(())
}
