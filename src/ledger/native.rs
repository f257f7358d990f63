//! Untaxed native-value ledger.

use std::collections::{HashMap, HashSet};

use tracing::debug;

use crate::domain::{Account, Amount, Asset};
use crate::error::{AmmError, Result};
use crate::math::CheckedArithmetic;
use crate::traits::AssetLedger;

/// Balances of the native asset.
///
/// Transfers are never taxed, but an account can be marked as refusing
/// incoming value, in which case any push to it fails with
/// [`AmmError::TransferFailed`].
///
/// # Examples
///
/// ```
/// use taxpair_amm::domain::{Account, Amount};
/// use taxpair_amm::ledger::NativeLedger;
/// use taxpair_amm::traits::AssetLedger;
///
/// let (a, b) = (Account::from_byte(0xa), Account::from_byte(0xb));
/// let mut ledger = NativeLedger::new();
/// assert!(ledger.credit(&a, Amount::new(10)).is_ok());
/// assert_eq!(ledger.transfer(&a, &b, Amount::new(4)).ok(), Some(Amount::new(4)));
/// assert_eq!(ledger.balance_of(&b), Amount::new(4));
/// ```
#[derive(Debug, Clone, Default)]
pub struct NativeLedger {
    balances: HashMap<Account, Amount>,
    rejecting: HashSet<Account>,
}

impl NativeLedger {
    /// Creates an empty ledger.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds freshly issued value to `account`.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::Overflow`] if the balance would overflow.
    pub fn credit(&mut self, account: &Account, amount: Amount) -> Result<()> {
        let balance = self.balance_of(account).safe_add(&amount)?;
        self.balances.insert(*account, balance);
        Ok(())
    }

    /// Marks `account` as refusing (or accepting again) incoming value.
    pub fn reject_incoming(&mut self, account: &Account, reject: bool) {
        if reject {
            self.rejecting.insert(*account);
        } else {
            self.rejecting.remove(account);
        }
    }

    fn debit(&mut self, account: &Account, amount: Amount) -> Result<()> {
        let have = self.balance_of(account);
        let remaining = have.checked_sub(&amount).ok_or(AmmError::InsufficientBalance {
            have: have.get(),
            need: amount.get(),
        })?;
        self.balances.insert(*account, remaining);
        Ok(())
    }
}

impl AssetLedger for NativeLedger {
    fn balance_of(&self, account: &Account) -> Amount {
        self.balances.get(account).copied().unwrap_or_default()
    }

    fn transfer(&mut self, from: &Account, to: &Account, amount: Amount) -> Result<Amount> {
        if amount.is_zero() {
            return Ok(Amount::ZERO);
        }
        if self.rejecting.contains(to) {
            return Err(AmmError::TransferFailed {
                asset: Asset::Native,
                reason: "recipient rejected native value",
            });
        }
        self.debit(from, amount)?;
        self.credit(to, amount)?;
        debug!(%from, %to, amount = amount.get(), "native transfer");
        Ok(amount)
    }
}
