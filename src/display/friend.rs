//! Friend display formatting
//!
//! Balance lines shared by the TUI and the CLI, and a table view of the
//! friend list.

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::models::{BalanceStatus, Friend, Money};

/// One-line description of who owes whom
///
/// "You owe Clark ₹750", "Sarah owes you ₹920", or "Owes & Owed ₹0".
pub fn balance_line(friend: &Friend, symbol: &str) -> String {
    match friend.balance_status() {
        BalanceStatus::YouOwe(amount) => format!(
            "You owe {} {}",
            friend.name(),
            amount.format_with_symbol(symbol)
        ),
        BalanceStatus::OwesYou(amount) => format!(
            "{} owes you {}",
            friend.name(),
            amount.format_with_symbol(symbol)
        ),
        BalanceStatus::Settled => format!("Owes & Owed {}", Money::zero().format_with_symbol(symbol)),
    }
}

#[derive(Tabled)]
struct FriendRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Balance")]
    balance: String,
    #[tabled(rename = "Status")]
    status: String,
    #[tabled(rename = "Avatar")]
    avatar: String,
}

/// Format the friend list as a table
pub fn format_friend_list(friends: &[Friend], symbol: &str) -> String {
    if friends.is_empty() {
        return "No friends yet\nAdd a friend to start splitting bills".to_string();
    }

    let rows = friends.iter().map(|friend| FriendRow {
        id: friend.id().to_string(),
        name: friend.name().to_string(),
        balance: friend.balance().format_with_symbol(symbol),
        status: balance_line(friend, symbol),
        avatar: friend.avatar_url().to_string(),
    });

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    table.to_string()
}
