//! Confirmation dialog
//!
//! Yes/no prompt shown before a friend is deleted

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::display::balance_line;
use crate::models::FriendId;
use crate::tui::app::App;
use crate::tui::layout::centered_rect_fixed;

/// Render the delete confirmation for a friend
pub fn render(frame: &mut Frame, app: &App, id: FriendId) {
    let area = centered_rect_fixed(50, 8, frame.area());

    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Confirm ")
        .title_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow));

    let (message, detail) = match app.session.ledger().get(id) {
        Some(friend) => (
            format!("Delete {}?", friend.name()),
            balance_line(friend, app.symbol()),
        ),
        None => ("Delete this friend?".to_string(), String::new()),
    };

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(message, Style::default().fg(Color::White))),
        Line::from(Span::styled(detail, Style::default().fg(Color::DarkGray))),
        Line::from(""),
        Line::from(vec![
            Span::styled("[Y]", Style::default().fg(Color::Green)),
            Span::raw(" Yes  "),
            Span::styled("[N]", Style::default().fg(Color::Red)),
            Span::raw(" No  "),
            Span::styled("[Esc]", Style::default().fg(Color::Yellow)),
            Span::raw(" Cancel"),
        ]),
    ];

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false });

    frame.render_widget(paragraph, area);
}
