//! Panel state machine
//!
//! Exactly one of: nothing, the add-friend form, or the split form for one
//! friend is open. The selected friend is whoever the split form is open
//! for, so selection and panel can never disagree.

use crate::models::FriendId;

/// Which panel is visible
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PanelState {
    #[default]
    Closed,
    AddOpen,
    SplitOpen { friend_id: FriendId, editing: bool },
}

/// Drives [`PanelState`] from UI events
#[derive(Debug, Clone, Default)]
pub struct PanelController {
    state: PanelState,
}

impl PanelController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> PanelState {
        self.state
    }

    /// The friend the split panel is open for
    pub fn selected_friend(&self) -> Option<FriendId> {
        match self.state {
            PanelState::SplitOpen { friend_id, .. } => Some(friend_id),
            _ => None,
        }
    }

    pub fn is_selected(&self, id: FriendId) -> bool {
        self.selected_friend() == Some(id)
    }

    pub fn is_add_open(&self) -> bool {
        self.state == PanelState::AddOpen
    }

    /// Whether the open split panel edits the last split
    pub fn is_editing(&self) -> bool {
        matches!(self.state, PanelState::SplitOpen { editing: true, .. })
    }

    /// Open the add form, or close it if already open
    pub fn toggle_add(&mut self) {
        self.state = match self.state {
            PanelState::AddOpen => PanelState::Closed,
            _ => PanelState::AddOpen,
        };
    }

    /// Select a friend, or deselect if already selected
    pub fn select_friend(&mut self, id: FriendId) {
        self.state = if self.is_selected(id) {
            PanelState::Closed
        } else {
            PanelState::SplitOpen {
                friend_id: id,
                editing: false,
            }
        };
    }

    /// Open the split panel in edit mode; never toggles
    pub fn request_edit(&mut self, id: FriendId) {
        self.state = PanelState::SplitOpen {
            friend_id: id,
            editing: true,
        };
    }

    pub fn friend_added(&mut self) {
        self.state = PanelState::Closed;
    }

    pub fn friend_deleted(&mut self, id: FriendId) {
        if self.is_selected(id) {
            self.state = PanelState::Closed;
        }
    }

    pub fn split_committed(&mut self) {
        self.close_split();
    }

    pub fn edit_committed(&mut self) {
        self.close_split();
    }

    fn close_split(&mut self) {
        if let PanelState::SplitOpen { .. } = self.state {
            self.state = PanelState::Closed;
        }
    }
}
