//! Friend model
//!
//! A friend is a person the user shares bills with. The record carries the
//! running balance between the two and the most recent split, so the last
//! split can be edited by reversing it first.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::FriendId;
use super::money::Money;

/// A friend and the running balance with them
///
/// Balance and last split are only changed through
/// [`FriendLedger`](crate::services::FriendLedger).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Friend {
    id: FriendId,
    name: String,
    avatar_url: String,
    /// Positive: the friend owes the user. Negative: the user owes the friend.
    balance: Money,
    #[serde(skip_serializing_if = "Option::is_none")]
    last_split: Option<Money>,
}

impl Friend {
    /// Create a settled friend with the given id
    pub(crate) fn new(id: FriendId, name: impl Into<String>, avatar_url: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            avatar_url: avatar_url.into(),
            balance: Money::zero(),
            last_split: None,
        }
    }

    /// Create a friend carrying a balance from before this session
    pub(crate) fn with_opening_balance(
        name: impl Into<String>,
        avatar_url: impl Into<String>,
        balance: Money,
    ) -> Self {
        let mut friend = Self::new(FriendId::new(), name, avatar_url);
        friend.balance = balance;
        friend
    }

    pub fn id(&self) -> FriendId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn avatar_url(&self) -> &str {
        &self.avatar_url
    }

    pub fn balance(&self) -> Money {
        self.balance
    }

    /// The delta applied by the most recent split, if any
    pub fn last_split(&self) -> Option<Money> {
        self.last_split
    }

    /// Whether the last split can be edited
    pub fn can_edit_split(&self) -> bool {
        self.last_split.is_some()
    }

    /// Classify the balance for display
    pub fn balance_status(&self) -> BalanceStatus {
        BalanceStatus::from_balance(self.balance)
    }

    /// Record a new split contribution
    ///
    /// Leaves the friend untouched if the balance would overflow.
    pub(crate) fn record_split(&mut self, delta: Money) -> Result<Money, SplitUpdateError> {
        let balance = self
            .balance
            .checked_add(delta)
            .ok_or(SplitUpdateError::Overflow)?;
        self.balance = balance;
        self.last_split = Some(delta);
        Ok(balance)
    }

    /// Swap the last split contribution for a new one
    pub(crate) fn replace_last_split(&mut self, new_delta: Money) -> Result<Money, SplitUpdateError> {
        let previous = self.last_split.ok_or(SplitUpdateError::NoSplit)?;
        let balance = self
            .balance
            .checked_sub(previous)
            .and_then(|b| b.checked_add(new_delta))
            .ok_or(SplitUpdateError::Overflow)?;
        self.balance = balance;
        self.last_split = Some(new_delta);
        Ok(balance)
    }

    /// Validate a display name
    pub fn validate_name(name: &str) -> Result<(), FriendValidationError> {
        if name.trim().is_empty() {
            return Err(FriendValidationError::EmptyName);
        }
        Ok(())
    }

    /// Build an avatar URL unique to a friend id: `base?u=<uuid>`
    pub fn avatar_url_for(base: &str, id: FriendId) -> String {
        format!("{}?u={}", base, id.as_uuid())
    }
}

impl fmt::Display for Friend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// Who owes whom, derived from the sign of a balance
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BalanceStatus {
    /// The user owes the friend this (positive) amount
    YouOwe(Money),
    /// The friend owes the user this amount
    OwesYou(Money),
    Settled,
}

impl BalanceStatus {
    pub fn from_balance(balance: Money) -> Self {
        if balance.is_negative() {
            Self::YouOwe(balance.abs())
        } else if balance.is_positive() {
            Self::OwesYou(balance)
        } else {
            Self::Settled
        }
    }
}

/// Validation errors for friends
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FriendValidationError {
    EmptyName,
}

impl fmt::Display for FriendValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Friend name cannot be empty"),
        }
    }
}

impl std::error::Error for FriendValidationError {}

/// Reasons a split cannot be applied to a friend
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SplitUpdateError {
    NoSplit,
    Overflow,
}

/// Friends to start a demo session with
pub fn sample_friends() -> Vec<Friend> {
    vec![
        Friend::with_opening_balance("Clark", "https://i.pravatar.cc/48?u=118842", Money::new(-750)),
        Friend::with_opening_balance("Sarah", "https://i.pravatar.cc/48?u=933372", Money::new(920)),
        Friend::with_opening_balance("Anthony", "https://i.pravatar.cc/48?u=499476", Money::zero()),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn friend() -> Friend {
        Friend::new(FriendId::new(), "Clark", "https://i.pravatar.cc/48")
    }

    #[test]
    fn test_new_friend_is_settled() {
        let f = friend();
        assert_eq!(f.name(), "Clark");
        assert!(f.balance().is_zero());
        assert!(f.last_split().is_none());
        assert!(!f.can_edit_split());
        assert_eq!(f.balance_status(), BalanceStatus::Settled);
    }

    #[test]
    fn test_record_then_replace_split() {
        let mut f = friend();
        assert_eq!(f.record_split(Money::new(60)), Ok(Money::new(60)));
        assert_eq!(f.balance(), Money::new(60));
        assert_eq!(f.last_split(), Some(Money::new(60)));

        assert_eq!(f.replace_last_split(Money::new(-40)), Ok(Money::new(-40)));
        assert_eq!(f.balance(), Money::new(-40));
        assert_eq!(f.last_split(), Some(Money::new(-40)));
    }

    #[test]
    fn test_replace_without_split_is_refused() {
        let mut f = friend();
        assert_eq!(
            f.replace_last_split(Money::new(10)),
            Err(SplitUpdateError::NoSplit)
        );
        assert!(f.balance().is_zero());
    }

    #[test]
    fn test_overflowing_split_leaves_friend_untouched() {
        let mut f = friend();
        f.record_split(Money::new(10)).unwrap();

        assert_eq!(
            f.record_split(Money::new(i64::MAX)),
            Err(SplitUpdateError::Overflow)
        );
        assert_eq!(
            f.replace_last_split(Money::new(i64::MIN)),
            Ok(Money::new(i64::MIN))
        );
        assert_eq!(
            f.record_split(Money::new(-1)),
            Err(SplitUpdateError::Overflow)
        );
        assert_eq!(f.balance(), Money::new(i64::MIN));
        assert_eq!(f.last_split(), Some(Money::new(i64::MIN)));
        assert_eq!(
            f.balance_status(),
            BalanceStatus::YouOwe(Money::new(i64::MAX))
        );
    }

    #[test]
    fn test_balance_status() {
        assert_eq!(
            BalanceStatus::from_balance(Money::new(-750)),
            BalanceStatus::YouOwe(Money::new(750))
        );
        assert_eq!(
            BalanceStatus::from_balance(Money::new(920)),
            BalanceStatus::OwesYou(Money::new(920))
        );
        assert_eq!(BalanceStatus::from_balance(Money::zero()), BalanceStatus::Settled);
    }

    #[test]
    fn test_validate_name() {
        assert!(Friend::validate_name("Sarah").is_ok());
        assert_eq!(
            Friend::validate_name("   "),
            Err(FriendValidationError::EmptyName)
        );
    }

    #[test]
    fn test_avatar_url_for() {
        let id = FriendId::new();
        let url = Friend::avatar_url_for("https://i.pravatar.cc/48", id);
        assert_eq!(url, format!("https://i.pravatar.cc/48?u={}", id.as_uuid()));
    }

    #[test]
    fn test_sample_friends() {
        let friends = sample_friends();
        let names: Vec<_> = friends.iter().map(|f| f.name()).collect();
        assert_eq!(names, ["Clark", "Sarah", "Anthony"]);
        assert_eq!(friends[0].balance(), Money::new(-750));
        assert!(friends.iter().all(|f| f.last_split().is_none()));
    }

    #[test]
    fn test_serialization_skips_missing_split() {
        let json = serde_json::to_value(friend()).unwrap();
        assert_eq!(json["balance"], 0);
        assert!(json.get("last_split").is_none());
    }
}
