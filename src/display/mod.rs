//! Display formatting for terminal output

pub mod friend;

pub use friend::{balance_line, format_friend_list};
