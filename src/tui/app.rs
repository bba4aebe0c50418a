//! Application state for the TUI
//!
//! The App struct wraps a [`Session`] with everything the terminal front end
//! needs on top of it: list cursor, focus, dialogs, form buffers and toasts.

use crate::config::Settings;
use crate::display::balance_line;
use crate::error::SplitError;
use crate::models::{Friend, FriendId};
use crate::services::{PanelState, Session};

use super::dialogs::add_friend::AddFriendFormState;
use super::dialogs::split_bill::SplitFormState;
use super::widgets::{Notification, NotificationQueue};

/// Which panel currently has focus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusedPanel {
    #[default]
    FriendList,
    Panel,
}

/// Currently active dialog (if any)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActiveDialog {
    #[default]
    None,
    Help,
    ConfirmDelete(FriendId),
}

/// Main application state
pub struct App<'a> {
    /// Application settings
    pub settings: &'a Settings,

    /// Friends, panel and audit history
    pub session: Session,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Which panel is focused
    pub focused_panel: FocusedPanel,

    /// Currently active dialog
    pub active_dialog: ActiveDialog,

    /// Cursor index in the friend list
    pub cursor_index: usize,

    /// Add-friend form buffers
    pub add_form: AddFriendFormState,

    /// Split-bill form buffers
    pub split_form: SplitFormState,

    /// Toasts
    pub notifications: NotificationQueue,

    /// Panel state seen after the last event, to detect transitions
    last_panel: PanelState,
}

impl<'a> App<'a> {
    /// Create a new App instance
    pub fn new(session: Session, settings: &'a Settings) -> Self {
        let last_panel = session.panel();
        Self {
            settings,
            session,
            should_quit: false,
            focused_panel: FocusedPanel::default(),
            active_dialog: ActiveDialog::default(),
            cursor_index: 0,
            add_form: AddFriendFormState::new(&settings.avatar_base_url),
            split_form: SplitFormState::new(),
            notifications: NotificationQueue::new(),
            last_panel,
        }
    }

    /// Request to quit the application
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    pub fn symbol(&self) -> &str {
        &self.settings.currency_symbol
    }

    /// Show a toast
    pub fn notify(&mut self, notification: Notification) {
        self.notifications.push(notification);
    }

    /// Show an error as a toast
    pub fn report(&mut self, err: SplitError) {
        let notification = if err.is_validation() || err.is_invalid_state() {
            Notification::warning(err.to_string())
        } else {
            Notification::error(err.to_string())
        };
        self.notify(notification);
    }

    /// Open a dialog
    pub fn open_dialog(&mut self, dialog: ActiveDialog) {
        self.active_dialog = dialog;
    }

    /// Close the current dialog
    pub fn close_dialog(&mut self) {
        self.active_dialog = ActiveDialog::None;
    }

    /// Check if a dialog is active
    pub fn has_dialog(&self) -> bool {
        !matches!(self.active_dialog, ActiveDialog::None)
    }

    /// Move focus to the friend list, leaving the panel open
    pub fn focus_list(&mut self) {
        self.focused_panel = FocusedPanel::FriendList;
    }

    /// Move focus to the panel if one is open
    pub fn focus_panel(&mut self) {
        if self.session.panel() != PanelState::Closed {
            self.focused_panel = FocusedPanel::Panel;
        }
    }

    pub fn friend_count(&self) -> usize {
        self.session.ledger().len()
    }

    /// The friend under the list cursor
    pub fn cursor_friend(&self) -> Option<&Friend> {
        self.session.ledger().friends().get(self.cursor_index)
    }

    fn cursor_friend_id(&self) -> Option<FriendId> {
        self.cursor_friend().map(Friend::id)
    }

    pub fn move_up(&mut self) {
        if self.cursor_index > 0 {
            self.cursor_index -= 1;
        }
    }

    pub fn move_down(&mut self) {
        if self.cursor_index < self.friend_count().saturating_sub(1) {
            self.cursor_index += 1;
        }
    }

    pub fn move_to_top(&mut self) {
        self.cursor_index = 0;
    }

    pub fn move_to_bottom(&mut self) {
        self.cursor_index = self.friend_count().saturating_sub(1);
    }

    /// Open or close the add-friend panel
    pub fn toggle_add(&mut self) {
        self.session.toggle_add();
        self.after_event();
    }

    /// Select the friend under the cursor, or deselect if already selected
    pub fn select_cursor_friend(&mut self) {
        if let Some(id) = self.cursor_friend_id() {
            if let Err(e) = self.session.select_friend(id) {
                self.report(e);
            }
        }
        self.after_event();
    }

    /// Open the panel to edit the last split of the friend under the cursor
    pub fn edit_cursor_friend(&mut self) {
        if let Some(id) = self.cursor_friend_id() {
            if let Err(e) = self.session.request_edit(id) {
                self.report(e);
            }
        }
        self.after_event();
    }

    /// Ask for confirmation before deleting the friend under the cursor
    pub fn request_delete(&mut self) {
        if let Some(id) = self.cursor_friend_id() {
            self.open_dialog(ActiveDialog::ConfirmDelete(id));
        }
    }

    /// Delete a friend after confirmation
    pub fn confirm_delete(&mut self, id: FriendId) {
        self.close_dialog();
        match self.session.delete_friend(id) {
            Ok(friend) => {
                self.notify(Notification::success(format!("Removed {}", friend.name())));
            }
            Err(e) => self.report(e),
        }
        if self.cursor_index >= self.friend_count() {
            self.move_to_bottom();
        }
        self.after_event();
    }

    /// Submit the add-friend form
    ///
    /// A blank name is ignored. A blank image URL falls back to the
    /// configured avatar base.
    pub fn submit_add_form(&mut self) {
        let name = self.add_form.name_input.value().to_string();
        if name.trim().is_empty() {
            return;
        }

        let image = self.add_form.image_input.value().trim();
        let avatar_base = if image.is_empty() {
            self.settings.avatar_base_url.clone()
        } else {
            image.to_string()
        };

        match self.session.add_friend_with_avatar_base(&name, &avatar_base) {
            Ok(friend) => {
                self.cursor_index = self.friend_count().saturating_sub(1);
                self.notify(Notification::success(format!("Added {}", friend.name())));
            }
            Err(e) => self.report(e),
        }
        self.after_event();
    }

    /// Submit the split form for the open friend
    ///
    /// Ignored while the bill or the user's share is unset.
    pub fn submit_split_form(&mut self) {
        if !self.split_form.form.is_submittable() {
            return;
        }

        match self.session.submit_form(&self.split_form.form) {
            Ok(friend) => {
                let line = balance_line(&friend, &self.settings.currency_symbol);
                self.notify(Notification::success(line));
            }
            Err(e) => self.report(e),
        }
        self.after_event();
    }

    /// Drop expired toasts
    pub fn on_tick(&mut self) {
        self.notifications.remove_expired();
    }

    /// Reconcile focus and form buffers with the panel state, and surface
    /// any parked audit failure
    fn after_event(&mut self) {
        let current = self.session.panel();
        if current != self.last_panel {
            match current {
                PanelState::AddOpen => self.add_form.reset(&self.settings.avatar_base_url),
                PanelState::SplitOpen { .. } => self.split_form.reset(),
                PanelState::Closed => {}
            }
            self.focused_panel = if current == PanelState::Closed {
                FocusedPanel::FriendList
            } else {
                FocusedPanel::Panel
            };
            self.last_panel = current;
        }

        if let Some(err) = self.session.take_audit_error() {
            self.notify(Notification::warning(format!("Audit log unavailable: {}", err)));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;
    use crate::services::FriendLedger;

    fn settings() -> Settings {
        Settings::default()
    }

    fn sample_app(settings: &Settings) -> App<'_> {
        App::new(Session::new(FriendLedger::with_sample_friends()), settings)
    }

    #[test]
    fn test_cursor_bounds() {
        let settings = settings();
        let mut app = sample_app(&settings);

        app.move_up();
        assert_eq!(app.cursor_index, 0);

        app.move_down();
        app.move_down();
        app.move_down();
        assert_eq!(app.cursor_index, 2);
        assert_eq!(app.cursor_friend().unwrap().name(), "Anthony");
    }

    #[test]
    fn test_select_moves_focus_to_panel() {
        let settings = settings();
        let mut app = sample_app(&settings);

        app.select_cursor_friend();
        assert_eq!(app.focused_panel, FocusedPanel::Panel);
        assert!(matches!(app.session.panel(), PanelState::SplitOpen { editing: false, .. }));

        app.select_cursor_friend();
        assert_eq!(app.session.panel(), PanelState::Closed);
        assert_eq!(app.focused_panel, FocusedPanel::FriendList);
    }

    #[test]
    fn test_edit_without_split_warns() {
        let settings = settings();
        let mut app = sample_app(&settings);

        app.edit_cursor_friend();
        assert_eq!(app.session.panel(), PanelState::Closed);
        assert!(!app.notifications.is_empty());
    }

    #[test]
    fn test_submit_split_form() {
        let settings = settings();
        let mut app = sample_app(&settings);
        app.move_down();
        app.move_down();
        app.select_cursor_friend();

        app.split_form.form.set_bill(Some(Money::new(100))).unwrap();
        app.split_form.form.set_paid_by_user(Some(Money::new(40))).unwrap();
        app.submit_split_form();

        let anthony = app.cursor_friend().unwrap();
        assert_eq!(anthony.balance(), Money::new(60));
        assert_eq!(anthony.last_split(), Some(Money::new(60)));
        assert_eq!(app.session.panel(), PanelState::Closed);
    }

    #[test]
    fn test_incomplete_split_form_is_ignored() {
        let settings = settings();
        let mut app = sample_app(&settings);
        app.select_cursor_friend();

        app.split_form.form.set_bill(Some(Money::new(100))).unwrap();
        app.submit_split_form();

        assert_eq!(app.cursor_friend().unwrap().balance(), Money::new(-750));
        assert!(matches!(app.session.panel(), PanelState::SplitOpen { .. }));
    }

    #[test]
    fn test_blank_name_is_ignored() {
        let settings = settings();
        let mut app = sample_app(&settings);
        app.toggle_add();

        app.add_form.name_input.set_content("   ");
        app.submit_add_form();

        assert_eq!(app.friend_count(), 3);
        assert_eq!(app.session.panel(), PanelState::AddOpen);
    }

    #[test]
    fn test_add_friend_uses_avatar_base() {
        let settings = settings();
        let mut app = sample_app(&settings);
        app.toggle_add();

        app.add_form.name_input.set_content("Dana");
        app.submit_add_form();

        assert_eq!(app.friend_count(), 4);
        assert_eq!(app.cursor_index, 3);
        let dana = app.cursor_friend().unwrap();
        assert_eq!(dana.name(), "Dana");
        assert!(dana.avatar_url().starts_with("https://i.pravatar.cc/48?u="));
        assert_eq!(app.session.panel(), PanelState::Closed);
    }

    #[test]
    fn test_confirm_delete_clamps_cursor() {
        let settings = settings();
        let mut app = sample_app(&settings);
        app.move_to_bottom();

        app.request_delete();
        let id = match app.active_dialog {
            ActiveDialog::ConfirmDelete(id) => id,
            other => panic!("unexpected dialog {:?}", other),
        };
        app.confirm_delete(id);

        assert!(!app.has_dialog());
        assert_eq!(app.friend_count(), 2);
        assert_eq!(app.cursor_index, 1);
    }

    #[test]
    fn test_switching_friend_resets_split_form() {
        let settings = settings();
        let mut app = sample_app(&settings);
        app.select_cursor_friend();
        app.split_form.form.set_bill(Some(Money::new(100))).unwrap();

        app.move_down();
        app.select_cursor_friend();

        assert_eq!(app.split_form.form.bill(), None);
        assert_eq!(app.session.selected_friend().unwrap().name(), "Sarah");
    }
}
