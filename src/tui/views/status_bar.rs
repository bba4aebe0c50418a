//! Status bar view
//!
//! Shows the friend count, net balance and key hints

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::tui::app::App;

/// Render the status bar
pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let ledger = app.session.ledger();
    let net = ledger.net_balance();

    let net_color = if net.is_negative() {
        Color::Red
    } else if net.is_zero() {
        Color::White
    } else {
        Color::Green
    };

    let mut spans = vec![
        Span::styled(" Friends: ", Style::default().fg(Color::White)),
        Span::styled(
            ledger.len().to_string(),
            Style::default().fg(Color::Cyan),
        ),
        Span::raw(" │ "),
        Span::styled("Net: ", Style::default().fg(Color::White)),
        Span::styled(
            net.format_with_symbol(app.symbol()),
            Style::default().fg(net_color).add_modifier(Modifier::BOLD),
        ),
    ];

    if let Some(friend) = app.session.selected_friend() {
        spans.push(Span::raw(" │ "));
        spans.push(Span::styled(
            friend.name().to_string(),
            Style::default().fg(Color::Yellow),
        ));
    }

    let hints = " q:Quit  ?:Help  a:Add  d:Delete ";

    let left_len: usize = spans.iter().map(|s| s.content.chars().count()).sum();
    let padding_len = (area.width as usize).saturating_sub(left_len + hints.len());
    spans.push(Span::raw(" ".repeat(padding_len.max(1))));
    spans.push(Span::styled(hints, Style::default().fg(Color::White)));

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
