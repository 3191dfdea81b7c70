use crate::error::{AppError, AppResult};

use std::io::{self, Stdout};

use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

pub type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Put the terminal into raw mode on the alternate screen.
pub fn enter() -> AppResult<Tui> {
    enable_raw_mode().map_err(AppError::terminal)?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).map_err(AppError::terminal)?;
    Terminal::new(CrosstermBackend::new(stdout)).map_err(AppError::terminal)
}

/// Hand the terminal back to the shell.
pub fn restore() -> AppResult<()> {
    disable_raw_mode().map_err(AppError::terminal)?;
    execute!(io::stdout(), LeaveAlternateScreen).map_err(AppError::terminal)?;
    Ok(())
}
