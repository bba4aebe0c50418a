//! Add-friend form
//!
//! Rendered in the right-hand panel while the add panel is open. Tab moves
//! between the name and image fields, Enter adds the friend.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::tui::app::{App, FocusedPanel};
use crate::tui::widgets::input::TextInput;

/// Which field is currently focused in the add form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AddFriendField {
    #[default]
    Name,
    Image,
}

impl AddFriendField {
    pub fn toggle(self) -> Self {
        match self {
            Self::Name => Self::Image,
            Self::Image => Self::Name,
        }
    }
}

/// State for the add-friend form
#[derive(Debug, Clone)]
pub struct AddFriendFormState {
    pub focused_field: AddFriendField,
    pub name_input: TextInput,
    /// Prefilled with the avatar base URL
    pub image_input: TextInput,
}

impl AddFriendFormState {
    pub fn new(avatar_base: &str) -> Self {
        Self {
            focused_field: AddFriendField::Name,
            name_input: TextInput::new().label("Friend name").placeholder("Name"),
            image_input: TextInput::new()
                .label("Image URL")
                .placeholder(avatar_base)
                .content(avatar_base),
        }
    }

    /// Clear the name and restore the image URL
    pub fn reset(&mut self, avatar_base: &str) {
        *self = Self::new(avatar_base);
    }

    pub fn focused_input(&mut self) -> &mut TextInput {
        match self.focused_field {
            AddFriendField::Name => &mut self.name_input,
            AddFriendField::Image => &mut self.image_input,
        }
    }
}

/// Render the add-friend form into the panel area
pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let focused = app.focused_panel == FocusedPanel::Panel;
    let border_color = if focused { Color::Cyan } else { Color::DarkGray };

    let block = Block::default()
        .title(" Add a friend ")
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(1), // Name
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Image
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Hints
            Constraint::Min(0),
        ])
        .split(inner);

    let form = &mut app.add_form;
    form.name_input.focused = focused && form.focused_field == AddFriendField::Name;
    form.image_input.focused = focused && form.focused_field == AddFriendField::Image;

    frame.render_widget(&form.name_input, chunks[0]);
    frame.render_widget(&form.image_input, chunks[2]);

    let hints = Line::from(vec![
        Span::styled("[Tab]", Style::default().fg(Color::White)),
        Span::raw(" Next  "),
        Span::styled("[Enter]", Style::default().fg(Color::Green)),
        Span::raw(" Add  "),
        Span::styled("[Esc]", Style::default().fg(Color::Red)),
        Span::raw(" Back to list"),
    ]);
    frame.render_widget(Paragraph::new(hints), chunks[4]);
}

/// Handle key input for the add-friend form
pub fn handle_key(app: &mut App, key: KeyEvent) -> bool {
    let form = &mut app.add_form;

    match key.code {
        KeyCode::Esc => {
            app.focus_list();
        }

        KeyCode::Tab | KeyCode::BackTab => {
            form.focused_field = form.focused_field.toggle();
        }

        KeyCode::Enter => {
            app.submit_add_form();
        }

        KeyCode::Backspace => form.focused_input().backspace(),
        KeyCode::Delete => form.focused_input().delete(),
        KeyCode::Left => form.focused_input().move_left(),
        KeyCode::Right => form.focused_input().move_right(),
        KeyCode::Home => form.focused_input().move_start(),
        KeyCode::End => form.focused_input().move_end(),

        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            form.focused_input().insert(c);
        }

        _ => return false,
    }

    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_prefills_image() {
        let form = AddFriendFormState::new("https://i.pravatar.cc/48");
        assert_eq!(form.name_input.value(), "");
        assert_eq!(form.image_input.value(), "https://i.pravatar.cc/48");
        assert_eq!(form.focused_field, AddFriendField::Name);
    }

    #[test]
    fn test_reset_clears_name() {
        let mut form = AddFriendFormState::new("https://example.com/a");
        form.name_input.set_content("Dana");
        form.focused_field = AddFriendField::Image;
        form.image_input.clear();

        form.reset("https://example.com/a");
        assert_eq!(form.name_input.value(), "");
        assert_eq!(form.image_input.value(), "https://example.com/a");
        assert_eq!(form.focused_field, AddFriendField::Name);
    }
}
