use crate::ui::{App, Focus};

use roster_core::MemberField;

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Position, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap};

pub fn render(app: &App, frame: &mut Frame) {
    let [body, footer] =
        Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).areas(frame.area());
    let [list_area, form_area] =
        Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)]).areas(body);

    render_members(app, frame, list_area);
    render_form(app, frame, form_area);
    render_help(frame, footer);
}

fn render_members(app: &App, frame: &mut Frame, area: Rect) {
    let items: Vec<ListItem> = app
        .editor()
        .roster()
        .members()
        .iter()
        .map(|member| {
            let mut lines = vec![Line::styled(
                member.display_name(),
                Style::default().add_modifier(Modifier::BOLD),
            )];
            lines.extend(member.bio.lines().map(|l| Line::raw(l.to_string())));
            ListItem::new(lines)
        })
        .collect();

    let mut state = ListState::default();
    if !app.editor().roster().is_empty() {
        state.select(Some(app.cursor()));
    }

    let list = List::new(items)
        .block(titled_block("Team Members", app.focus() == Focus::Members))
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED));

    frame.render_stateful_widget(list, area, &mut state);
}

fn render_form(app: &App, frame: &mut Frame, area: Rect) {
    let heading = format!("{} a Team Member", app.editor().mode().label());
    let outer = titled_block(&heading, false);
    let inner = outer.inner(area);
    frame.render_widget(outer, area);

    let [first_area, last_area, bio_area] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Length(3),
        Constraint::Min(3),
    ])
    .areas(inner);

    render_field(app, frame, first_area, MemberField::FirstName);
    render_field(app, frame, last_area, MemberField::LastName);
    render_field(app, frame, bio_area, MemberField::Bio);
}

fn render_field(app: &App, frame: &mut Frame, area: Rect, field: MemberField) {
    let value = app.editor().draft().get(field);
    let focused = app.focus().field() == Some(field);

    let mut paragraph = Paragraph::new(value).block(titled_block(field.label(), focused));
    if field == MemberField::Bio {
        paragraph = paragraph.wrap(Wrap { trim: false });
    }
    frame.render_widget(paragraph, area);

    // Cursor after the last character of a focused single-line field
    if focused && field != MemberField::Bio {
        let x = area.x + 1 + value.chars().count() as u16;
        let y = area.y + 1;
        if x < area.right() {
            frame.set_cursor_position(Position::new(x, y));
        }
    }
}

fn render_help(frame: &mut Frame, area: Rect) {
    let help = "Tab next field | Enter submit (form) / edit (list) | Ctrl+S submit | Esc quit";
    let paragraph = Paragraph::new(help).style(Style::default().add_modifier(Modifier::DIM));
    frame.render_widget(paragraph, area);
}

fn titled_block(title: &str, focused: bool) -> Block<'_> {
    let block = Block::default().title(title).borders(Borders::ALL);
    if focused {
        block.border_style(Style::default().add_modifier(Modifier::BOLD))
    } else {
        block
    }
}
