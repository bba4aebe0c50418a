//! Audit entry data structures
//!
//! One entry per ledger mutation, with JSON snapshots of the friend before
//! and after.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::Friend;

use super::diff::generate_diff;

/// Ledger mutations that are audited
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operation {
    AddFriend,
    Split,
    EditSplit,
    DeleteFriend,
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Operation::AddFriend => write!(f, "ADD"),
            Operation::Split => write!(f, "SPLIT"),
            Operation::EditSplit => write!(f, "EDIT"),
            Operation::DeleteFriend => write!(f, "DELETE"),
        }
    }
}

/// A single audit log entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditEntry {
    /// When the operation occurred (UTC)
    pub timestamp: DateTime<Utc>,

    pub operation: Operation,

    /// Display form of the friend id (`fr-xxxxxxxx`)
    pub friend_id: String,

    pub friend_name: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub before: Option<serde_json::Value>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub after: Option<serde_json::Value>,

    /// Human-readable diff summary
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diff_summary: Option<String>,
}

impl AuditEntry {
    fn new(operation: Operation, friend: &Friend) -> Self {
        Self {
            timestamp: Utc::now(),
            operation,
            friend_id: friend.id().to_string(),
            friend_name: friend.name().to_string(),
            before: None,
            after: None,
            diff_summary: None,
        }
    }

    /// A friend was added
    pub fn friend_added(friend: &Friend) -> Self {
        Self {
            after: serde_json::to_value(friend).ok(),
            ..Self::new(Operation::AddFriend, friend)
        }
    }

    /// A friend was removed
    pub fn friend_deleted(friend: &Friend) -> Self {
        Self {
            before: serde_json::to_value(friend).ok(),
            ..Self::new(Operation::DeleteFriend, friend)
        }
    }

    /// A split was applied
    pub fn split(before: &Friend, after: &Friend) -> Self {
        Self::change(Operation::Split, before, after)
    }

    /// The last split was replaced
    pub fn split_edited(before: &Friend, after: &Friend) -> Self {
        Self::change(Operation::EditSplit, before, after)
    }

    fn change(operation: Operation, before: &Friend, after: &Friend) -> Self {
        let before_json = serde_json::to_value(before).ok();
        let after_json = serde_json::to_value(after).ok();
        let diff_summary = match (&before_json, &after_json) {
            (Some(b), Some(a)) => generate_diff(b, a),
            _ => None,
        };

        Self {
            before: before_json,
            after: after_json,
            diff_summary,
            ..Self::new(operation, after)
        }
    }

    /// Format the entry for human-readable output
    pub fn format_human_readable(&self) -> String {
        let mut output = format!(
            "[{}] {} {} ({})",
            self.timestamp.format("%Y-%m-%d %H:%M:%S UTC"),
            self.operation,
            self.friend_id,
            self.friend_name
        );

        if let Some(diff) = &self.diff_summary {
            output.push_str(&format!("\n  Changes: {}", diff));
        }

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{FriendId, Money};

    fn friend() -> Friend {
        Friend::new(FriendId::new(), "Clark", "https://i.pravatar.cc/48")
    }

    #[test]
    fn test_operation_display() {
        assert_eq!(Operation::AddFriend.to_string(), "ADD");
        assert_eq!(Operation::EditSplit.to_string(), "EDIT");
    }

    #[test]
    fn test_friend_added_entry() {
        let f = friend();
        let entry = AuditEntry::friend_added(&f);

        assert_eq!(entry.operation, Operation::AddFriend);
        assert_eq!(entry.friend_id, f.id().to_string());
        assert!(entry.before.is_none());
        assert!(entry.after.is_some());
    }

    #[test]
    fn test_split_entry_has_diff() {
        let before = friend();
        let mut after = before.clone();
        after.record_split(Money::new(60)).unwrap();

        let entry = AuditEntry::split(&before, &after);
        assert_eq!(entry.operation, Operation::Split);
        assert_eq!(
            entry.diff_summary.as_deref(),
            Some("balance: 0 -> 60, last_split: (added) -> 60")
        );
    }

    #[test]
    fn test_deleted_entry() {
        let entry = AuditEntry::friend_deleted(&friend());
        assert!(entry.before.is_some());
        assert!(entry.after.is_none());
    }

    #[test]
    fn test_serialization() {
        let entry = AuditEntry::friend_added(&friend());
        let json = serde_json::to_string(&entry).unwrap();
        assert!(json.contains("\"operation\":\"add_friend\""));

        let back: AuditEntry = serde_json::from_str(&json).unwrap();
        assert_eq!(back.operation, Operation::AddFriend);
        assert_eq!(back.friend_name, "Clark");
    }

    #[test]
    fn test_human_readable_format() {
        let before = friend();
        let mut after = before.clone();
        after.record_split(Money::new(-40)).unwrap();

        let formatted = AuditEntry::split(&before, &after).format_human_readable();
        assert!(formatted.contains("SPLIT"));
        assert!(formatted.contains("(Clark)"));
        assert!(formatted.contains("Changes: balance: 0 -> -40"));
    }
}
