//! Dialogs and panel forms for the TUI

pub mod add_friend;
pub mod confirm;
pub mod help;
pub mod split_bill;
