//! Split calculator command
//!
//! Runs the split derivation without touching any ledger.

use clap::Args;

use crate::config::Settings;
use crate::error::SplitResult;
use crate::models::{BalanceStatus, Money};
use crate::services::{Payer, SplitBill};

/// Arguments for `splitbill calc`
#[derive(Args, Debug)]
pub struct CalcArgs {
    /// Total bill
    #[arg(long, value_parser = clap::value_parser!(i64).range(0..))]
    pub bill: i64,

    /// Your share of the bill (cannot exceed the bill)
    #[arg(long, value_parser = clap::value_parser!(i64).range(0..))]
    pub paid: i64,

    /// Who paid the bill: user or friend
    #[arg(long, default_value = "user")]
    pub payer: Payer,
}

/// Build the calculator report
pub fn format_calc(args: &CalcArgs, symbol: &str) -> SplitResult<String> {
    let mut form = SplitBill::new();
    form.set_bill(Some(Money::new(args.bill)))?;
    form.set_paid_by_user(Some(Money::new(args.paid)))?;
    form.set_payer(args.payer);

    let delta = form.delta()?;
    let friend_share = form.friend_expense().unwrap_or_default();

    let outcome = match BalanceStatus::from_balance(delta) {
        BalanceStatus::OwesYou(amount) => {
            format!("Friend owes you {}", amount.format_with_symbol(symbol))
        }
        BalanceStatus::YouOwe(amount) => {
            format!("You owe friend {}", amount.format_with_symbol(symbol))
        }
        BalanceStatus::Settled => "Nothing owed".to_string(),
    };

    let mut output = String::new();
    output.push_str(&format!("Bill value:       {}\n", Money::new(args.bill).format_with_symbol(symbol)));
    output.push_str(&format!("Your expense:     {}\n", Money::new(args.paid).format_with_symbol(symbol)));
    output.push_str(&format!("Friend's expense: {}\n", friend_share.format_with_symbol(symbol)));
    output.push_str(&format!("Paid by:          {}\n", args.payer));
    output.push_str(&format!("Balance change:   {} ({})\n", delta.format_with_symbol(symbol), outcome));

    Ok(output)
}

/// Handle `splitbill calc`
pub fn handle_calc_command(settings: &Settings, args: CalcArgs) -> SplitResult<()> {
    print!("{}", format_calc(&args, &settings.currency_symbol)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(bill: i64, paid: i64, payer: Payer) -> CalcArgs {
        CalcArgs { bill, paid, payer }
    }

    #[test]
    fn test_user_pays() {
        let output = format_calc(&args(100, 40, Payer::User), "₹").unwrap();
        assert!(output.contains("Friend's expense: ₹60"));
        assert!(output.contains("Balance change:   ₹60 (Friend owes you ₹60)"));
    }

    #[test]
    fn test_friend_pays() {
        let output = format_calc(&args(100, 40, Payer::Friend), "₹").unwrap();
        assert!(output.contains("Balance change:   -₹40 (You owe friend ₹40)"));
    }

    #[test]
    fn test_paid_above_bill() {
        let err = format_calc(&args(100, 140, Payer::User), "₹").unwrap_err();
        assert!(err.is_validation());
    }
}
