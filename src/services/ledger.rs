//! Friend ledger
//!
//! Owns the ordered friend list and is the only place balances change.
//! Insertion order is display order.

use crate::error::{SplitError, SplitResult};
use crate::models::{sample_friends, Friend, FriendId, Money, SplitUpdateError};

/// In-memory store of friends and their balances
#[derive(Debug, Clone, Default)]
pub struct FriendLedger {
    friends: Vec<Friend>,
}

impl FriendLedger {
    /// Create an empty ledger
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a ledger pre-populated with the sample friends
    pub fn with_sample_friends() -> Self {
        Self {
            friends: sample_friends(),
        }
    }

    /// All friends in display order
    pub fn friends(&self) -> &[Friend] {
        &self.friends
    }

    pub fn len(&self) -> usize {
        self.friends.len()
    }

    pub fn is_empty(&self) -> bool {
        self.friends.is_empty()
    }

    /// Get a friend by ID
    pub fn get(&self, id: FriendId) -> Option<&Friend> {
        self.friends.iter().find(|f| f.id() == id)
    }

    /// Check whether a friend exists
    pub fn contains(&self, id: FriendId) -> bool {
        self.get(id).is_some()
    }

    /// Position of a friend in display order
    pub fn position(&self, id: FriendId) -> Option<usize> {
        self.friends.iter().position(|f| f.id() == id)
    }

    /// Net of every balance: positive means the user is owed overall
    ///
    /// Saturates at the `i64` bounds.
    pub fn net_balance(&self) -> Money {
        self.friends.iter().map(|f| f.balance()).sum()
    }

    /// Add a friend with a fixed avatar URL
    pub fn add_friend(&mut self, name: &str, avatar_url: impl Into<String>) -> SplitResult<Friend> {
        let avatar_url = avatar_url.into();
        self.add_friend_with(name, |_| avatar_url)
    }

    /// Add a friend whose avatar URL depends on the freshly generated id
    pub fn add_friend_with<F>(&mut self, name: &str, avatar_for: F) -> SplitResult<Friend>
    where
        F: FnOnce(FriendId) -> String,
    {
        Friend::validate_name(name).map_err(|e| SplitError::Validation(e.to_string()))?;

        let id = FriendId::new();
        let friend = Friend::new(id, name.trim(), avatar_for(id));
        self.friends.push(friend.clone());

        Ok(friend)
    }

    /// Remove a friend, returning the removed record
    pub fn delete_friend(&mut self, id: FriendId) -> SplitResult<Friend> {
        let index = self
            .position(id)
            .ok_or_else(|| SplitError::friend_not_found(id.to_string()))?;

        Ok(self.friends.remove(index))
    }

    /// Apply a new split to a friend's balance
    ///
    /// The delta becomes the friend's last split, so a later
    /// [`edit_split`](Self::edit_split) replaces exactly this contribution.
    pub fn apply_split(&mut self, id: FriendId, delta: Money) -> SplitResult<&Friend> {
        let friend = self.get_mut(id)?;
        friend
            .record_split(delta)
            .map_err(|e| split_update_error(friend, e))?;
        Ok(&*friend)
    }

    /// Replace the friend's last split with a new delta
    ///
    /// Idempotent for a repeated `new_delta`.
    pub fn edit_split(&mut self, id: FriendId, new_delta: Money) -> SplitResult<&Friend> {
        let friend = self.get_mut(id)?;
        friend
            .replace_last_split(new_delta)
            .map_err(|e| split_update_error(friend, e))?;
        Ok(&*friend)
    }

    fn get_mut(&mut self, id: FriendId) -> SplitResult<&mut Friend> {
        self.friends
            .iter_mut()
            .find(|f| f.id() == id)
            .ok_or_else(|| SplitError::friend_not_found(id.to_string()))
    }
}

fn split_update_error(friend: &Friend, err: SplitUpdateError) -> SplitError {
    match err {
        SplitUpdateError::NoSplit => {
            SplitError::InvalidState(format!("{} has no split to edit", friend.name()))
        }
        SplitUpdateError::Overflow => SplitError::Validation(format!(
            "Balance with {} would exceed the supported range",
            friend.name()
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const AVATAR: &str = "https://i.pravatar.cc/48";

    fn ledger_with(name: &str) -> (FriendLedger, FriendId) {
        let mut ledger = FriendLedger::new();
        let friend = ledger.add_friend(name, AVATAR).unwrap();
        (ledger, friend.id())
    }

    #[test]
    fn test_add_friend() {
        let mut ledger = FriendLedger::new();
        let friend = ledger.add_friend("  Sarah ", AVATAR).unwrap();

        assert_eq!(friend.name(), "Sarah");
        assert!(friend.balance().is_zero());
        assert!(friend.last_split().is_none());
        assert_eq!(ledger.len(), 1);
        assert_eq!(ledger.get(friend.id()), Some(&friend));
    }

    #[test]
    fn test_add_friend_rejects_blank_name() {
        let mut ledger = FriendLedger::new();
        let err = ledger.add_friend("   ", AVATAR).unwrap_err();
        assert!(err.is_validation());
        assert!(ledger.is_empty());
    }

    #[test]
    fn test_add_friend_keeps_insertion_order() {
        let mut ledger = FriendLedger::new();
        for name in ["Clark", "Sarah", "Anthony"] {
            ledger.add_friend(name, AVATAR).unwrap();
        }
        let names: Vec<_> = ledger.friends().iter().map(|f| f.name()).collect();
        assert_eq!(names, ["Clark", "Sarah", "Anthony"]);
    }

    #[test]
    fn test_add_friend_with_avatar_from_id() {
        let mut ledger = FriendLedger::new();
        let friend = ledger
            .add_friend_with("Clark", |id| Friend::avatar_url_for(AVATAR, id))
            .unwrap();
        assert_eq!(
            friend.avatar_url(),
            format!("{}?u={}", AVATAR, friend.id().as_uuid())
        );
    }

    #[test]
    fn test_add_then_delete_restores_count() {
        let mut ledger = FriendLedger::with_sample_friends();
        let before = ledger.len();

        let friend = ledger.add_friend("Dana", AVATAR).unwrap();
        let removed = ledger.delete_friend(friend.id()).unwrap();

        assert_eq!(removed.id(), friend.id());
        assert_eq!(ledger.len(), before);
        assert!(!ledger.contains(friend.id()));
    }

    #[test]
    fn test_delete_unknown_friend_leaves_state() {
        let mut ledger = FriendLedger::with_sample_friends();
        let snapshot = ledger.friends().to_vec();

        let err = ledger.delete_friend(FriendId::new()).unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(ledger.friends(), snapshot.as_slice());
    }

    #[test]
    fn test_apply_split() {
        let (mut ledger, id) = ledger_with("Clark");
        let friend = ledger.apply_split(id, Money::new(60)).unwrap();
        assert_eq!(friend.balance(), Money::new(60));
        assert_eq!(friend.last_split(), Some(Money::new(60)));
    }

    #[test]
    fn test_apply_split_unknown_friend() {
        let mut ledger = FriendLedger::new();
        let err = ledger.apply_split(FriendId::new(), Money::new(5)).unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_repeated_splits_accumulate() {
        let (mut ledger, id) = ledger_with("Clark");
        ledger.apply_split(id, Money::new(60)).unwrap();
        let friend = ledger.apply_split(id, Money::new(-40)).unwrap();
        assert_eq!(friend.balance(), Money::new(20));
        assert_eq!(friend.last_split(), Some(Money::new(-40)));
    }

    #[test]
    fn test_edit_split_replaces_previous_contribution() {
        let (mut ledger, id) = ledger_with("Clark");
        ledger.apply_split(id, Money::new(60)).unwrap();

        let friend = ledger.edit_split(id, Money::new(-40)).unwrap();
        assert_eq!(friend.balance(), Money::new(-40));
        assert_eq!(friend.last_split(), Some(Money::new(-40)));
    }

    #[test]
    fn test_edit_split_with_same_delta_is_noop() {
        let (mut ledger, id) = ledger_with("Clark");
        ledger.apply_split(id, Money::new(60)).unwrap();

        ledger.edit_split(id, Money::new(60)).unwrap();
        let friend = ledger.edit_split(id, Money::new(60)).unwrap();
        assert_eq!(friend.balance(), Money::new(60));
    }

    #[test]
    fn test_edit_split_on_opening_balance() {
        let mut ledger = FriendLedger::with_sample_friends();
        let sarah = ledger.friends()[1].id();

        ledger.apply_split(sarah, Money::new(80)).unwrap();
        let friend = ledger.edit_split(sarah, Money::new(30)).unwrap();
        assert_eq!(friend.balance(), Money::new(950));
    }

    #[test]
    fn test_edit_split_without_prior_split() {
        let (mut ledger, id) = ledger_with("Clark");
        let err = ledger.edit_split(id, Money::new(10)).unwrap_err();
        assert!(err.is_invalid_state());
        assert!(ledger.get(id).unwrap().balance().is_zero());
    }

    #[test]
    fn test_net_balance() {
        let ledger = FriendLedger::with_sample_friends();
        assert_eq!(ledger.net_balance(), Money::new(170));
    }

    #[test]
    fn test_apply_split_overflow_is_rejected() {
        let (mut ledger, id) = ledger_with("Clark");
        ledger.apply_split(id, Money::new(60)).unwrap();

        let err = ledger.apply_split(id, Money::new(i64::MAX)).unwrap_err();
        assert!(err.is_validation());
        assert!(err.to_string().contains("Clark"));

        let clark = ledger.get(id).unwrap();
        assert_eq!(clark.balance(), Money::new(60));
        assert_eq!(clark.last_split(), Some(Money::new(60)));
    }

    #[test]
    fn test_edit_split_overflow_is_rejected() {
        let mut ledger = FriendLedger::with_sample_friends();
        let sarah = ledger.friends()[1].id();
        ledger.apply_split(sarah, Money::new(-10)).unwrap();

        // 910 - (-10) + MAX does not fit
        let err = ledger.edit_split(sarah, Money::new(i64::MAX)).unwrap_err();
        assert!(err.is_validation());

        let sarah = ledger.get(sarah).unwrap();
        assert_eq!(sarah.balance(), Money::new(910));
        assert_eq!(sarah.last_split(), Some(Money::new(-10)));
    }

    #[test]
    fn test_net_balance_saturates() {
        let mut ledger = FriendLedger::with_sample_friends();
        let anthony = ledger.friends()[2].id();
        ledger.apply_split(anthony, Money::new(i64::MAX)).unwrap();

        // -750 + 920 + MAX
        assert_eq!(ledger.net_balance(), Money::new(i64::MAX));
    }
}
