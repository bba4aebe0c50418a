//! Service layer for SplitBill
//!
//! The ledger owns friends and balances, the panel controller owns what the
//! UI shows, and the session wires the two together behind the events a
//! front end sends.

pub mod ledger;
pub mod panel;
pub mod session;
pub mod split;

pub use ledger::FriendLedger;
pub use panel::{PanelController, PanelState};
pub use session::Session;
pub use split::{friend_expense, split_delta, Payer, SplitBill};
