mod action;
mod app;
mod view;

pub use action::Action;
pub use app::{App, Focus};

use crate::error::{AppError, AppResult};
use crate::terminal::Tui;

use roster_state::RosterEditor;

use crossterm::event::{self, Event, KeyEventKind};

/// Blocking event loop: draw, wait for a key, apply, repeat.
pub fn run(terminal: &mut Tui, editor: RosterEditor) -> AppResult<()> {
    let mut app = App::new(editor);

    while !app.should_quit() {
        terminal
            .draw(|frame| view::render(&app, frame))
            .map_err(AppError::terminal)?;

        if let Event::Key(key) = event::read().map_err(AppError::terminal)?
            && key.kind == KeyEventKind::Press
        {
            app.update(Action::from_key(key));
        }
    }

    Ok(())
}
