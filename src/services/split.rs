//! Split-bill derivation
//!
//! Turns a bill, the user's share and the payer into the signed delta that
//! is applied to a friend's balance. [`SplitBill`] holds the in-progress
//! form values and keeps `paid_by_user <= bill` true at all times.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{SplitError, SplitResult};
use crate::models::Money;

/// Who paid the bill up front
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Payer {
    #[default]
    User,
    Friend,
}

impl Payer {
    /// The other option, for a two-way selector
    pub fn toggle(self) -> Self {
        match self {
            Self::User => Self::Friend,
            Self::Friend => Self::User,
        }
    }
}

impl fmt::Display for Payer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::User => write!(f, "user"),
            Self::Friend => write!(f, "friend"),
        }
    }
}

impl FromStr for Payer {
    type Err = SplitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "user" | "you" | "me" => Ok(Self::User),
            "friend" => Ok(Self::Friend),
            other => Err(SplitError::Validation(format!(
                "Unknown payer '{}', expected 'user' or 'friend'",
                other
            ))),
        }
    }
}

/// What the friend consumed: the bill minus the user's share
pub fn friend_expense(bill: Money, paid_by_user: Money) -> Money {
    bill - paid_by_user
}

/// Signed balance delta for a split
///
/// Assumes `0 <= paid_by_user <= bill`. When the user pays, the friend now
/// owes their share; when the friend pays, the user owes what they fronted.
pub fn split_delta(bill: Money, paid_by_user: Money, payer: Payer) -> Money {
    match payer {
        Payer::User => friend_expense(bill, paid_by_user),
        Payer::Friend => -paid_by_user,
    }
}

/// Form state for splitting a bill
///
/// `None` means the field has not been filled in yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SplitBill {
    bill: Option<Money>,
    paid_by_user: Option<Money>,
    payer: Payer,
}

impl SplitBill {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn bill(&self) -> Option<Money> {
        self.bill
    }

    pub fn paid_by_user(&self) -> Option<Money> {
        self.paid_by_user
    }

    pub fn payer(&self) -> Payer {
        self.payer
    }

    /// Set or clear the bill
    ///
    /// Negative amounts are rejected. Lowering the bill below the user's
    /// share clamps the share down to the new bill.
    pub fn set_bill(&mut self, bill: Option<Money>) -> SplitResult<()> {
        if let Some(value) = bill {
            if value.is_negative() {
                return Err(SplitError::Validation("Bill cannot be negative".into()));
            }
        }

        self.bill = bill;
        if let (Some(bill), Some(paid)) = (self.bill, self.paid_by_user) {
            if paid > bill {
                self.paid_by_user = Some(bill);
            }
        }
        Ok(())
    }

    /// Set or clear the user's share
    ///
    /// Rejects negative values and values above the bill. With no bill yet,
    /// any share above zero is rejected.
    pub fn set_paid_by_user(&mut self, paid: Option<Money>) -> SplitResult<()> {
        if let Some(value) = paid {
            if value.is_negative() {
                return Err(SplitError::Validation("Expense cannot be negative".into()));
            }
            let bill = self.bill.unwrap_or_default();
            if value > bill {
                return Err(SplitError::Validation(format!(
                    "Your expense ({}) cannot exceed the bill ({})",
                    value, bill
                )));
            }
        }

        self.paid_by_user = paid;
        Ok(())
    }

    pub fn set_payer(&mut self, payer: Payer) {
        self.payer = payer;
    }

    /// Friend's share, available once the bill is known
    pub fn friend_expense(&self) -> Option<Money> {
        self.bill
            .map(|bill| friend_expense(bill, self.paid_by_user.unwrap_or_default()))
    }

    /// Whether both amounts are filled in
    pub fn is_submittable(&self) -> bool {
        self.bill.is_some() && self.paid_by_user.is_some()
    }

    /// The delta to submit, or a validation error while a field is unset
    pub fn delta(&self) -> SplitResult<Money> {
        match (self.bill, self.paid_by_user) {
            (Some(bill), Some(paid)) => Ok(split_delta(bill, paid, self.payer)),
            (None, _) => Err(SplitError::Validation("Bill value is required".into())),
            (_, None) => Err(SplitError::Validation("Your expense is required".into())),
        }
    }

    /// Clear both amounts and reset the payer
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(bill: i64, paid: i64, payer: Payer) -> SplitBill {
        let mut form = SplitBill::new();
        form.set_bill(Some(Money::new(bill))).unwrap();
        form.set_paid_by_user(Some(Money::new(paid))).unwrap();
        form.set_payer(payer);
        form
    }

    #[test]
    fn test_user_pays() {
        let form = form(100, 40, Payer::User);
        assert_eq!(form.friend_expense(), Some(Money::new(60)));
        assert_eq!(form.delta().unwrap(), Money::new(60));
    }

    #[test]
    fn test_friend_pays() {
        let form = form(100, 40, Payer::Friend);
        assert_eq!(form.delta().unwrap(), Money::new(-40));
    }

    #[test]
    fn test_friend_expense_never_negative() {
        for bill in [0, 1, 7, 100, 250] {
            for paid in 0..=bill {
                let expense = friend_expense(Money::new(bill), Money::new(paid));
                assert!(!expense.is_negative(), "bill {} paid {}", bill, paid);
            }
        }
    }

    #[test]
    fn test_edge_shares() {
        assert_eq!(split_delta(Money::new(100), Money::new(100), Payer::User), Money::zero());
        assert_eq!(split_delta(Money::new(100), Money::zero(), Payer::User), Money::new(100));
        assert_eq!(split_delta(Money::new(100), Money::zero(), Payer::Friend), Money::zero());
    }

    #[test]
    fn test_unset_fields_not_submittable() {
        let mut form = SplitBill::new();
        assert!(!form.is_submittable());
        assert!(form.delta().unwrap_err().is_validation());
        assert_eq!(form.friend_expense(), None);

        form.set_bill(Some(Money::new(100))).unwrap();
        assert!(!form.is_submittable());
        assert_eq!(form.friend_expense(), Some(Money::new(100)));
        assert!(form.delta().is_err());
    }

    #[test]
    fn test_paid_above_bill_rejected() {
        let mut form = form(100, 40, Payer::User);
        let err = form.set_paid_by_user(Some(Money::new(101))).unwrap_err();
        assert!(err.is_validation());
        assert_eq!(form.paid_by_user(), Some(Money::new(40)));
    }

    #[test]
    fn test_paid_without_bill_rejected() {
        let mut form = SplitBill::new();
        assert!(form.set_paid_by_user(Some(Money::new(1))).is_err());
        assert!(form.set_paid_by_user(Some(Money::zero())).is_ok());
    }

    #[test]
    fn test_lowering_bill_clamps_share() {
        let mut form = form(100, 80, Payer::User);
        form.set_bill(Some(Money::new(50))).unwrap();
        assert_eq!(form.paid_by_user(), Some(Money::new(50)));
        assert_eq!(form.friend_expense(), Some(Money::zero()));
    }

    #[test]
    fn test_negative_bill_rejected() {
        let mut form = SplitBill::new();
        assert!(form.set_bill(Some(Money::new(-1))).is_err());
        assert_eq!(form.bill(), None);
    }

    #[test]
    fn test_payer_parse_and_toggle() {
        assert_eq!("user".parse::<Payer>().unwrap(), Payer::User);
        assert_eq!("Friend".parse::<Payer>().unwrap(), Payer::Friend);
        assert!("nobody".parse::<Payer>().is_err());
        assert_eq!(Payer::User.toggle(), Payer::Friend);
    }

    #[test]
    fn test_reset() {
        let mut form = form(100, 40, Payer::Friend);
        form.reset();
        assert_eq!(form, SplitBill::default());
    }
}
