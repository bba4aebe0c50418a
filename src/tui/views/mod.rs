//! TUI Views module
//!
//! The friend list, the right-hand panel, the status bar, and dialogs and
//! toasts drawn over them.

pub mod friend_list;
pub mod status_bar;

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::services::PanelState;

use super::app::{ActiveDialog, App};
use super::dialogs;
use super::layout::{toast_rect, AppLayout};
use super::widgets::NotificationWidget;

/// Render the entire application
pub fn render(frame: &mut Frame, app: &mut App) {
    let layout = AppLayout::new(frame.area());

    friend_list::render(frame, app, layout.friends);

    match app.session.panel() {
        PanelState::Closed => render_placeholder(frame, layout.panel),
        PanelState::AddOpen => dialogs::add_friend::render(frame, app, layout.panel),
        PanelState::SplitOpen { .. } => dialogs::split_bill::render(frame, app, layout.panel),
    }

    status_bar::render(frame, app, layout.status_bar);

    match app.active_dialog {
        ActiveDialog::Help => dialogs::help::render(frame),
        ActiveDialog::ConfirmDelete(id) => dialogs::confirm::render(frame, app, id),
        ActiveDialog::None => {}
    }

    if let Some(notification) = app.notifications.current() {
        let area = toast_rect(44, 4, frame.area());
        frame.render_widget(NotificationWidget::new(notification), area);
    }
}

/// Render the panel while nothing is open
fn render_placeholder(frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let text = Paragraph::new(vec![
        Line::from(""),
        Line::from("Select a friend to split a bill,"),
        Line::from("or press a to add a new friend."),
    ])
    .block(block)
    .style(Style::default().fg(Color::DarkGray))
    .wrap(Wrap { trim: true });

    frame.render_widget(text, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;
    use crate::services::{FriendLedger, Session};
    use ratatui::{backend::TestBackend, buffer::Buffer, Terminal};

    fn buffer_text(buf: &Buffer) -> String {
        let area = buf.area;
        let mut text = String::new();
        for y in 0..area.height {
            for x in 0..area.width {
                text.push_str(buf[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    fn draw(app: &mut App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 24)).unwrap();
        terminal.draw(|frame| render(frame, app)).unwrap();
        buffer_text(terminal.backend().buffer())
    }

    #[test]
    fn test_render_sample_friends() {
        let settings = Settings::default();
        let mut app = App::new(Session::new(FriendLedger::with_sample_friends()), &settings);

        let screen = draw(&mut app);
        assert!(screen.contains("You owe Clark ₹750"));
        assert!(screen.contains("Sarah owes you ₹920"));
        assert!(screen.contains("Owes & Owed ₹0"));
        assert!(screen.contains("[a] Add New"));
    }

    #[test]
    fn test_render_empty_list() {
        let settings = Settings::default();
        let mut app = App::new(Session::new(FriendLedger::new()), &settings);

        let screen = draw(&mut app);
        assert!(screen.contains("No friends yet"));
        assert!(screen.contains("Add a friend to start splitting bills"));
    }

    #[test]
    fn test_render_split_panel_title() {
        let settings = Settings::default();
        let mut app = App::new(Session::new(FriendLedger::with_sample_friends()), &settings);
        app.move_down();
        app.select_cursor_friend();

        let screen = draw(&mut app);
        assert!(screen.contains("Split a bill with Sarah"));
        assert!(screen.contains("[Close]"));
    }
}
