//! Split-bill form
//!
//! Rendered in the right-hand panel while a friend is selected. Amount
//! fields take digits only; every edit goes through [`SplitBill`] so an
//! expense above the bill never reaches the form.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::error::{SplitError, SplitResult};
use crate::models::Money;
use crate::services::{PanelState, Payer, SplitBill};
use crate::tui::app::{App, FocusedPanel};
use crate::tui::widgets::input::TextInput;

/// Which field is currently focused in the split form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SplitField {
    #[default]
    Bill,
    Paid,
    Payer,
}

impl SplitField {
    /// Get the next field (for Tab navigation)
    pub fn next(self) -> Self {
        match self {
            Self::Bill => Self::Paid,
            Self::Paid => Self::Payer,
            Self::Payer => Self::Bill,
        }
    }

    /// Get the previous field (for Shift+Tab navigation)
    pub fn prev(self) -> Self {
        match self {
            Self::Bill => Self::Payer,
            Self::Paid => Self::Bill,
            Self::Payer => Self::Paid,
        }
    }
}

/// State for the split form
#[derive(Debug, Clone)]
pub struct SplitFormState {
    pub focused_field: SplitField,
    pub bill_input: TextInput,
    pub paid_input: TextInput,
    /// Parsed amounts and payer
    pub form: SplitBill,
}

impl Default for SplitFormState {
    fn default() -> Self {
        Self::new()
    }
}

impl SplitFormState {
    pub fn new() -> Self {
        Self {
            focused_field: SplitField::Bill,
            bill_input: TextInput::new().label("Bill value").placeholder("0"),
            paid_input: TextInput::new().label("Your expense").placeholder("0"),
            form: SplitBill::new(),
        }
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }

    pub fn next_field(&mut self) {
        self.focused_field = self.focused_field.next();
    }

    pub fn prev_field(&mut self) {
        self.focused_field = self.focused_field.prev();
    }

    pub fn toggle_payer(&mut self) {
        self.form.set_payer(self.form.payer().toggle());
    }

    /// The focused amount input, if an amount field has focus
    pub fn focused_input(&mut self) -> Option<&mut TextInput> {
        match self.focused_field {
            SplitField::Bill => Some(&mut self.bill_input),
            SplitField::Paid => Some(&mut self.paid_input),
            SplitField::Payer => None,
        }
    }

    /// Apply an edit to the focused amount field
    ///
    /// The edit is tried on a copy of the input; if the resulting amount is
    /// rejected the field keeps its previous content.
    pub fn edit_amount<F>(&mut self, edit: F) -> SplitResult<()>
    where
        F: FnOnce(&mut TextInput),
    {
        let field = self.focused_field;
        let mut candidate = match field {
            SplitField::Bill => self.bill_input.clone(),
            SplitField::Paid => self.paid_input.clone(),
            SplitField::Payer => return Ok(()),
        };
        edit(&mut candidate);
        let amount = parse_field(candidate.value())?;

        match field {
            SplitField::Bill => {
                let paid_before = self.form.paid_by_user();
                self.form.set_bill(amount)?;
                self.bill_input = candidate;

                let paid_after = self.form.paid_by_user();
                if paid_after != paid_before {
                    if let Some(paid) = paid_after {
                        self.paid_input.set_content(paid.amount().to_string());
                    }
                }
            }
            SplitField::Paid => {
                self.form.set_paid_by_user(amount)?;
                self.paid_input = candidate;
            }
            SplitField::Payer => {}
        }
        Ok(())
    }

    /// Friend's share for display; empty until the bill is known
    pub fn friend_expense_text(&self) -> String {
        self.form
            .friend_expense()
            .map(|m| m.amount().to_string())
            .unwrap_or_default()
    }
}

/// Parse an amount field; empty means unset
fn parse_field(value: &str) -> SplitResult<Option<Money>> {
    if value.is_empty() {
        return Ok(None);
    }
    Money::parse_amount(value, "")
        .map(Some)
        .map_err(|e| SplitError::Validation(e.to_string()))
}

/// Render the split form into the panel area
pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let focused = app.focused_panel == FocusedPanel::Panel;
    let editing = matches!(app.session.panel(), PanelState::SplitOpen { editing: true, .. });
    let (friend_name, avatar_url) = app
        .session
        .selected_friend()
        .map(|f| (f.name().to_string(), f.avatar_url().to_string()))
        .unwrap_or_default();

    let title = if editing {
        format!(" Edit last split with {} ", friend_name)
    } else {
        format!(" Split a bill with {} ", friend_name)
    };
    let border_color = if focused { Color::Cyan } else { Color::DarkGray };

    let block = Block::default()
        .title(title)
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
            Constraint::Length(1), // Avatar
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Bill
            Constraint::Length(1), // Paid
            Constraint::Length(1), // Friend's expense
            Constraint::Length(1), // Payer
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Hints
            Constraint::Min(0),
        ])
        .split(inner);

    frame.render_widget(
        Paragraph::new(Span::styled(avatar_url, Style::default().fg(Color::DarkGray))),
        chunks[0],
    );

    let state = &mut app.split_form;
    state.bill_input.focused = focused && state.focused_field == SplitField::Bill;
    state.paid_input.focused = focused && state.focused_field == SplitField::Paid;
    frame.render_widget(&state.bill_input, chunks[2]);
    frame.render_widget(&state.paid_input, chunks[3]);

    let friend_input = TextInput::new()
        .label(format!("{}'s expense", friend_name))
        .content(state.friend_expense_text())
        .read_only();
    frame.render_widget(&friend_input, chunks[4]);

    let payer_focused = focused && state.focused_field == SplitField::Payer;
    let payer_label_style = if payer_focused {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Yellow)
    };
    let payer_name = match state.form.payer() {
        Payer::User => "You".to_string(),
        Payer::Friend => friend_name.clone(),
    };
    let payer_hint = if payer_focused { " (←/→ to change)" } else { "" };
    let payer_line = Line::from(vec![
        Span::styled("Who is paying the bill: ", payer_label_style),
        Span::styled(format!("◀ {} ▶", payer_name), Style::default().fg(Color::White)),
        Span::styled(payer_hint, Style::default().fg(Color::DarkGray)),
    ]);
    frame.render_widget(Paragraph::new(payer_line), chunks[5]);

    let submit_style = if state.form.is_submittable() {
        Style::default().fg(Color::Green)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let hints = Line::from(vec![
        Span::styled("[Tab]", Style::default().fg(Color::White)),
        Span::raw(" Next  "),
        Span::styled("[Enter]", submit_style),
        Span::raw(" Split bill  "),
        Span::styled("[Esc]", Style::default().fg(Color::Red)),
        Span::raw(" Back to list"),
    ]);
    frame.render_widget(Paragraph::new(hints), chunks[7]);
}

/// Handle key input for the split form
pub fn handle_key(app: &mut App, key: KeyEvent) -> bool {
    let state = &mut app.split_form;

    // A rejected amount edit leaves the field as it was, without a toast
    let _ = match key.code {
        KeyCode::Esc => {
            app.focus_list();
            return true;
        }

        KeyCode::Tab => {
            if key.modifiers.contains(KeyModifiers::SHIFT) {
                state.prev_field();
            } else {
                state.next_field();
            }
            return true;
        }

        KeyCode::BackTab => {
            state.prev_field();
            return true;
        }

        KeyCode::Enter => {
            app.submit_split_form();
            return true;
        }

        KeyCode::Left | KeyCode::Right | KeyCode::Char(' ')
            if state.focused_field == SplitField::Payer =>
        {
            state.toggle_payer();
            return true;
        }

        KeyCode::Left => {
            if let Some(input) = state.focused_input() {
                input.move_left();
            }
            return true;
        }
        KeyCode::Right => {
            if let Some(input) = state.focused_input() {
                input.move_right();
            }
            return true;
        }
        KeyCode::Home => {
            if let Some(input) = state.focused_input() {
                input.move_start();
            }
            return true;
        }
        KeyCode::End => {
            if let Some(input) = state.focused_input() {
                input.move_end();
            }
            return true;
        }

        KeyCode::Backspace => state.edit_amount(TextInput::backspace),
        KeyCode::Delete => state.edit_amount(TextInput::delete),
        KeyCode::Char(c) if c.is_ascii_digit() => state.edit_amount(|input| input.insert(c)),

        // Non-digit characters never reach the amount fields
        KeyCode::Char(_) => return true,

        _ => return false,
    };

    true
}
