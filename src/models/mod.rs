//! Core data models for SplitBill
//!
//! Friends, their identifiers, and the integer money type balances are
//! kept in.

pub mod friend;
pub mod ids;
pub mod money;

pub use friend::{
    sample_friends, BalanceStatus, Friend, FriendValidationError, SplitUpdateError,
};
pub use ids::FriendId;
pub use money::{Money, MoneyParseError};
