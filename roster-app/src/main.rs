//! roster-app - Team Roster terminal UI
//!
//! A list-and-form interface over an in-memory team roster: browse members,
//! add a new one, or edit an existing one in place.

mod error;
mod logger;
mod terminal;
mod ui;

#[cfg(test)]
mod tests;

use crate::error::AppResult;

use roster_config::{Config, ConfigError};
use roster_state::{RosterEditor, RosterStore};

use std::process::ExitCode;

use log::{error, info};

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            eprintln!("roster-app: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> AppResult<()> {
    let config = Config::load()?;
    config.validate()?;

    let log_file = config.log_file_path()?;
    if let Some(ref path) = log_file
        && let Some(dir) = path.parent()
    {
        std::fs::create_dir_all(dir).map_err(|e| ConfigError::Io {
            path: dir.to_path_buf(),
            source: e,
        })?;
    }
    logger::initialize(config.logging.level, log_file, config.logging.colored)?;

    info!("Starting roster-app v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    let editor = RosterEditor::new(RosterStore::seeded());

    let mut tui = terminal::enter()?;
    let result = ui::run(&mut tui, editor);
    terminal::restore()?;
    result?;

    info!("roster-app exiting");
    Ok(())
}
