//! Event handler for the TUI
//!
//! Routes keyboard events to the dialog, the friend list or the open panel
//! form, based on the current application state.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::services::PanelState;

use super::app::{ActiveDialog, App, FocusedPanel};
use super::dialogs;
use super::event::Event;

/// Handle an incoming event
pub fn handle_event(app: &mut App, event: Event) -> Result<()> {
    match event {
        Event::Key(key) => handle_key_event(app, key),
        Event::Tick => {
            app.on_tick();
            Ok(())
        }
        Event::Resize(_, _) => Ok(()),
    }
}

/// Handle a key event
pub fn handle_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    if key.kind == KeyEventKind::Release {
        return Ok(());
    }

    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.quit();
        return Ok(());
    }

    if app.has_dialog() {
        handle_dialog_key(app, key);
        return Ok(());
    }

    match app.focused_panel {
        FocusedPanel::FriendList => handle_list_key(app, key),
        FocusedPanel::Panel => handle_panel_key(app, key),
    }

    Ok(())
}

/// Handle keys while a dialog is open
fn handle_dialog_key(app: &mut App, key: KeyEvent) {
    match app.active_dialog {
        ActiveDialog::Help => app.close_dialog(),
        ActiveDialog::ConfirmDelete(id) => match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => app.confirm_delete(id),
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => app.close_dialog(),
            _ => {}
        },
        ActiveDialog::None => {}
    }
}

/// Handle keys when the friend list is focused
fn handle_list_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') => app.quit(),
        KeyCode::Char('?') => app.open_dialog(ActiveDialog::Help),

        KeyCode::Char('j') | KeyCode::Down => app.move_down(),
        KeyCode::Char('k') | KeyCode::Up => app.move_up(),
        KeyCode::Char('g') | KeyCode::Home => app.move_to_top(),
        KeyCode::Char('G') | KeyCode::End => app.move_to_bottom(),

        KeyCode::Enter | KeyCode::Char(' ') => app.select_cursor_friend(),
        KeyCode::Char('e') => app.edit_cursor_friend(),
        KeyCode::Char('a') => app.toggle_add(),
        KeyCode::Char('d') | KeyCode::Delete => app.request_delete(),

        KeyCode::Tab | KeyCode::Char('l') | KeyCode::Right => app.focus_panel(),

        _ => {}
    }
}

/// Handle keys when the panel is focused
fn handle_panel_key(app: &mut App, key: KeyEvent) {
    match app.session.panel() {
        PanelState::AddOpen => {
            dialogs::add_friend::handle_key(app, key);
        }
        PanelState::SplitOpen { .. } => {
            dialogs::split_bill::handle_key(app, key);
        }
        PanelState::Closed => {
            app.focus_list();
            handle_list_key(app, key);
        }
    }
}
