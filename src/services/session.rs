//! Interactive session
//!
//! Couples the [`FriendLedger`] with the [`PanelController`] and exposes the
//! events a front end sends: add, delete, select, request edit, toggle the
//! add form, and submit a split or an edited split. Every successful
//! mutation is recorded as an [`AuditEntry`].

use crate::audit::{AuditEntry, AuditLogger};
use crate::error::{SplitError, SplitResult};
use crate::models::{Friend, FriendId, Money};

use super::ledger::FriendLedger;
use super::panel::{PanelController, PanelState};
use super::split::SplitBill;

/// State of one UI session
#[derive(Debug, Default)]
pub struct Session {
    ledger: FriendLedger,
    panel: PanelController,
    history: Vec<AuditEntry>,
    logger: Option<AuditLogger>,
    audit_error: Option<SplitError>,
}

impl Session {
    pub fn new(ledger: FriendLedger) -> Self {
        Self {
            ledger,
            ..Self::default()
        }
    }

    /// Also append audit entries to a log file
    pub fn with_audit_log(mut self, logger: AuditLogger) -> Self {
        self.logger = Some(logger);
        self
    }

    pub fn ledger(&self) -> &FriendLedger {
        &self.ledger
    }

    pub fn panel(&self) -> PanelState {
        self.panel.state()
    }

    /// Audit entries recorded this session, oldest first
    pub fn history(&self) -> &[AuditEntry] {
        &self.history
    }

    /// The friend the split panel is open for
    pub fn selected_friend(&self) -> Option<&Friend> {
        self.panel
            .selected_friend()
            .and_then(|id| self.ledger.get(id))
    }

    pub fn is_selected(&self, id: FriendId) -> bool {
        self.panel.is_selected(id)
    }

    /// Take the last audit-log write failure, if any
    ///
    /// Writing the log never fails an operation; the error is parked here
    /// for the front end to report.
    pub fn take_audit_error(&mut self) -> Option<SplitError> {
        self.audit_error.take()
    }

    /// Add a friend with a fixed avatar URL and close the add form
    pub fn add_friend(&mut self, name: &str, avatar_url: &str) -> SplitResult<Friend> {
        let friend = self.ledger.add_friend(name, avatar_url)?;
        self.friend_added(&friend);
        Ok(friend)
    }

    /// Add a friend whose avatar is `avatar_base?u=<id>`
    pub fn add_friend_with_avatar_base(&mut self, name: &str, avatar_base: &str) -> SplitResult<Friend> {
        let friend = self
            .ledger
            .add_friend_with(name, |id| Friend::avatar_url_for(avatar_base, id))?;
        self.friend_added(&friend);
        Ok(friend)
    }

    fn friend_added(&mut self, friend: &Friend) {
        self.panel.friend_added();
        self.record(AuditEntry::friend_added(friend));
    }

    /// Delete a friend; closes the split panel if it was open for them
    pub fn delete_friend(&mut self, id: FriendId) -> SplitResult<Friend> {
        self.panel.friend_deleted(id);
        let friend = self.ledger.delete_friend(id)?;
        self.record(AuditEntry::friend_deleted(&friend));
        Ok(friend)
    }

    /// Select a friend, or deselect if already selected
    pub fn select_friend(&mut self, id: FriendId) -> SplitResult<()> {
        self.require_friend(id)?;
        self.panel.select_friend(id);
        Ok(())
    }

    /// Open the split panel to edit a friend's last split
    ///
    /// Only friends that have been split at least once can be edited.
    pub fn request_edit(&mut self, id: FriendId) -> SplitResult<()> {
        let friend = self.require_friend(id)?;
        if !friend.can_edit_split() {
            return Err(SplitError::InvalidState(format!(
                "{} has no split to edit",
                friend.name()
            )));
        }
        self.panel.request_edit(id);
        Ok(())
    }

    pub fn toggle_add(&mut self) {
        self.panel.toggle_add();
    }

    /// Apply a new split to the selected friend
    pub fn submit_split(&mut self, delta: Money) -> SplitResult<Friend> {
        let id = self.open_split_target(false)?;
        let before = self.require_friend(id)?.clone();
        let after = self.ledger.apply_split(id, delta)?.clone();

        self.panel.split_committed();
        self.record(AuditEntry::split(&before, &after));
        Ok(after)
    }

    /// Replace the last split of the friend being edited
    pub fn submit_edit_split(&mut self, delta: Money) -> SplitResult<Friend> {
        let id = self.open_split_target(true)?;
        let before = self.require_friend(id)?.clone();
        let after = self.ledger.edit_split(id, delta)?.clone();

        self.panel.edit_committed();
        self.record(AuditEntry::split_edited(&before, &after));
        Ok(after)
    }

    /// Submit a split form, routing to a new split or an edit
    pub fn submit_form(&mut self, form: &SplitBill) -> SplitResult<Friend> {
        let delta = form.delta()?;
        if self.panel.is_editing() {
            self.submit_edit_split(delta)
        } else {
            self.submit_split(delta)
        }
    }

    fn open_split_target(&mut self, editing: bool) -> SplitResult<FriendId> {
        match self.panel.state() {
            PanelState::SplitOpen {
                friend_id,
                editing: open_editing,
            } if open_editing == editing => {
                if !self.ledger.contains(friend_id) {
                    self.panel.friend_deleted(friend_id);
                    return Err(SplitError::friend_not_found(friend_id.to_string()));
                }
                Ok(friend_id)
            }
            PanelState::SplitOpen { .. } if editing => Err(SplitError::InvalidState(
                "The split panel is not in edit mode".into(),
            )),
            PanelState::SplitOpen { .. } => Err(SplitError::InvalidState(
                "The split panel is editing the last split".into(),
            )),
            _ => Err(SplitError::InvalidState("No friend is selected".into())),
        }
    }

    fn require_friend(&self, id: FriendId) -> SplitResult<&Friend> {
        self.ledger
            .get(id)
            .ok_or_else(|| SplitError::friend_not_found(id.to_string()))
    }

    fn record(&mut self, entry: AuditEntry) {
        if let Some(logger) = &self.logger {
            if let Err(e) = logger.log(&entry) {
                self.audit_error = Some(e);
            }
        }
        self.history.push(entry);
    }
}
