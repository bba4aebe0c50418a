//! Sample friend listing

use crate::config::Settings;
use crate::display::format_friend_list;
use crate::error::SplitResult;
use crate::services::FriendLedger;

/// Handle `splitbill sample`
pub fn handle_sample_command(settings: &Settings) -> SplitResult<()> {
    let ledger = FriendLedger::with_sample_friends();
    println!("{}", format_friend_list(ledger.friends(), &settings.currency_symbol));
    println!();
    println!(
        "Net: {}",
        ledger.net_balance().format_with_symbol(&settings.currency_symbol)
    );
    println!("Run 'splitbill tui --sample' to start a session with these friends.");
    Ok(())
}
