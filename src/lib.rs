//! SplitBill - split bills with friends from the terminal
//!
//! This library tracks running balances with a list of friends. Each bill
//! split adjusts one friend's balance by a signed delta; the most recent
//! split can be edited, which swaps the old delta for a new one.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `models`: Friends, identifiers and whole-unit money
//! - `services`: The friend ledger, split derivation, panel state and session
//! - `audit`: Audit trail of ledger changes
//! - `config`: Configuration and path management
//! - `display`: Table and balance-line formatting
//! - `cli`: Command handlers
//! - `tui`: Interactive terminal interface
//! - `error`: Custom error types
//!
//! # Example
//!
//! ```rust
//! use splitbill::models::Money;
//! use splitbill::services::{split_delta, FriendLedger, Payer};
//!
//! let mut ledger = FriendLedger::new();
//! let friend = ledger.add_friend("Dana", "https://i.pravatar.cc/48?u=1").unwrap();
//!
//! let delta = split_delta(Money::new(100), Money::new(40), Payer::User);
//! let friend = ledger.apply_split(friend.id(), delta).unwrap();
//! assert_eq!(friend.balance(), Money::new(60));
//! ```

pub mod audit;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod services;
pub mod tui;

pub use error::SplitError;
