use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// UI intent decoded from one key event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    FocusNext,
    FocusPrev,
    /// A printable character for the focused input (or a list shortcut)
    Input(char),
    Backspace,
    /// Enter: submit in single-line fields, newline in the bio, edit in the list
    Confirm,
    /// Ctrl+S: submit regardless of focus
    Submit,
    SelectUp,
    SelectDown,
    None,
}

impl Action {
    pub fn from_key(key: KeyEvent) -> Self {
        // Ctrl chords first; anything else printable is text input
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return match key.code {
                KeyCode::Char('c') => Self::Quit,
                KeyCode::Char('s') => Self::Submit,
                _ => Self::None,
            };
        }

        match key.code {
            KeyCode::Esc => Self::Quit,
            KeyCode::Tab => Self::FocusNext,
            KeyCode::BackTab => Self::FocusPrev,
            KeyCode::Backspace => Self::Backspace,
            KeyCode::Enter => Self::Confirm,
            KeyCode::Up => Self::SelectUp,
            KeyCode::Down => Self::SelectDown,
            KeyCode::Char(c) => Self::Input(c),
            _ => Self::None,
        }
    }
}
