use crate::ui::Action;

use roster_core::MemberField;
use roster_state::RosterEditor;

/// Which surface receives keyboard input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    FirstName,
    LastName,
    Bio,
    Members,
}

impl Focus {
    pub fn next(self) -> Self {
        match self {
            Self::FirstName => Self::LastName,
            Self::LastName => Self::Bio,
            Self::Bio => Self::Members,
            Self::Members => Self::FirstName,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Self::FirstName => Self::Members,
            Self::LastName => Self::FirstName,
            Self::Bio => Self::LastName,
            Self::Members => Self::Bio,
        }
    }

    /// The draft field behind this focus, or None for the member list.
    pub fn field(self) -> Option<MemberField> {
        match self {
            Self::FirstName => Some(MemberField::FirstName),
            Self::LastName => Some(MemberField::LastName),
            Self::Bio => Some(MemberField::Bio),
            Self::Members => None,
        }
    }
}

/// Top-level UI state: the view-model plus presentation-only state (focus,
/// list cursor, quit flag).
#[derive(Debug)]
pub struct App {
    editor: RosterEditor,
    focus: Focus,
    cursor: usize,
    quit: bool,
}

impl App {
    pub fn new(editor: RosterEditor) -> Self {
        Self {
            editor,
            focus: Focus::FirstName,
            cursor: 0,
            quit: false,
        }
    }

    pub fn editor(&self) -> &RosterEditor {
        &self.editor
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    /// List cursor row; always within the roster when the roster is
    /// non-empty.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Applies one decoded key action. Runs to completion before the next
    /// render.
    pub fn update(&mut self, action: Action) {
        match action {
            Action::Quit => self.quit = true,
            Action::FocusNext => self.focus = self.focus.next(),
            Action::FocusPrev => self.focus = self.focus.prev(),
            Action::Input(c) => self.input_char(c),
            Action::Backspace => self.backspace(),
            Action::Confirm => self.confirm(),
            Action::Submit => self.submit(),
            Action::SelectUp => self.move_cursor_up(),
            Action::SelectDown => self.move_cursor_down(),
            Action::None => {}
        }
    }

    fn input_char(&mut self, c: char) {
        match self.focus.field() {
            Some(field) => self.append_to_field(field, c),
            None => self.list_shortcut(c),
        }
    }

    /// Every keystroke goes through the view-model's field handler as a
    /// whole-value overwrite.
    fn append_to_field(&mut self, field: MemberField, c: char) {
        let mut value = self.editor.draft().get(field).to_string();
        value.push(c);
        self.editor.set_field(field, value);
    }

    fn backspace(&mut self) {
        if let Some(field) = self.focus.field() {
            let mut value = self.editor.draft().get(field).to_string();
            value.pop();
            self.editor.set_field(field, value);
        }
    }

    fn confirm(&mut self) {
        match self.focus {
            Focus::FirstName | Focus::LastName => self.submit(),
            Focus::Bio => self.append_to_field(MemberField::Bio, '\n'),
            Focus::Members => self.edit_selected(),
        }
    }

    fn list_shortcut(&mut self, c: char) {
        match c {
            'e' => self.edit_selected(),
            'q' => self.quit = true,
            _ => {}
        }
    }

    fn edit_selected(&mut self) {
        if let Some(member) = self.editor.roster().members().get(self.cursor) {
            let id = member.id;
            self.editor.edit(id);
            self.focus = Focus::FirstName;
        }
    }

    fn submit(&mut self) {
        self.editor.submit();
        self.clamp_cursor();
    }

    fn move_cursor_up(&mut self) {
        if self.focus == Focus::Members && self.cursor > 0 {
            self.cursor -= 1;
        }
    }

    fn move_cursor_down(&mut self) {
        if self.focus == Focus::Members && self.cursor + 1 < self.editor.roster().len() {
            self.cursor += 1;
        }
    }

    fn clamp_cursor(&mut self) {
        let len = self.editor.roster().len();
        if len == 0 {
            self.cursor = 0;
        } else if self.cursor >= len {
            self.cursor = len - 1;
        }
    }
}
