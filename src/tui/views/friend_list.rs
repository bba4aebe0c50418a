//! Friend list view
//!
//! Each row shows the friend's name with a Select/Close button and the
//! balance line under it.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

use crate::display::balance_line;
use crate::models::{BalanceStatus, Friend};
use crate::services::PanelState;
use crate::tui::app::{App, FocusedPanel};
use crate::tui::layout::FriendListLayout;

/// Render the friend list
pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let is_focused = app.focused_panel == FocusedPanel::FriendList && !app.has_dialog();
    let border_color = if is_focused {
        Color::Cyan
    } else {
        Color::DarkGray
    };

    let block = Block::default()
        .title(" Friends ")
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let layout = FriendListLayout::new(inner);
    render_add_toggle(frame, app, layout.add_toggle);

    let friends = app.session.ledger().friends();
    if friends.is_empty() {
        let text = Paragraph::new(vec![
            Line::from(Span::styled(
                "No friends yet",
                Style::default().fg(Color::White),
            )),
            Line::from(Span::styled(
                "Add a friend to start splitting bills",
                Style::default().fg(Color::DarkGray),
            )),
        ]);
        frame.render_widget(text, layout.list);
        return;
    }

    let symbol = app.symbol();
    let items: Vec<ListItem> = friends
        .iter()
        .map(|friend| friend_item(friend, app.session.is_selected(friend.id()), symbol))
        .collect();

    let list = List::new(items)
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("> ");

    let mut state = ListState::default();
    state.select(Some(app.cursor_index));

    frame.render_stateful_widget(list, layout.list, &mut state);
}

fn friend_item<'a>(friend: &Friend, selected: bool, symbol: &str) -> ListItem<'a> {
    let balance_color = match friend.balance_status() {
        BalanceStatus::YouOwe(_) => Color::Red,
        BalanceStatus::OwesYou(_) => Color::Green,
        BalanceStatus::Settled => Color::White,
    };

    let (button, name_style) = if selected {
        (
            "[Close]",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
    } else {
        ("[Select]", Style::default().fg(Color::White))
    };

    let mut header = vec![
        Span::styled(format!("{:<18}", truncate_string(friend.name(), 18)), name_style),
        Span::styled(button, Style::default().fg(Color::Cyan)),
    ];
    if friend.can_edit_split() {
        header.push(Span::styled(" [e] Edit", Style::default().fg(Color::DarkGray)));
    }

    ListItem::new(vec![
        Line::from(header),
        Line::from(Span::styled(
            format!("  {}", balance_line(friend, symbol)),
            Style::default().fg(balance_color),
        )),
        Line::from(Span::styled(
            format!("  {}", friend.avatar_url()),
            Style::default().fg(Color::DarkGray),
        )),
    ])
}

fn render_add_toggle(frame: &mut Frame, app: &App, area: Rect) {
    let label = if app.session.panel() == PanelState::AddOpen {
        "[a] Close"
    } else {
        "[a] Add New"
    };
    frame.render_widget(
        Paragraph::new(Span::styled(label, Style::default().fg(Color::Yellow))),
        area,
    );
}

/// Truncate a string to a maximum number of characters
fn truncate_string(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let head: String = s.chars().take(max_len - 1).collect();
        format!("{}…", head)
    }
}
