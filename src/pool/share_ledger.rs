//! Transferable pool-share balances.

use std::collections::HashMap;

use crate::domain::{Account, Shares};
use crate::error::{AmmError, Result};
use crate::math::CheckedArithmetic;

/// Share balances, allowances and total supply.
///
/// Only the pool mints and burns. Holders move shares with
/// [`transfer`](Self::transfer) or, through an allowance,
/// [`transfer_from`](Self::transfer_from). Shares held by the lock account
/// can never move.
#[derive(Debug, Clone)]
pub struct ShareLedger {
    balances: HashMap<Account, Shares>,
    allowances: HashMap<(Account, Account), Shares>,
    total: Shares,
    lock_account: Account,
}

impl ShareLedger {
    /// Creates an empty ledger whose `lock_account` balance is frozen.
    #[must_use]
    pub fn new(lock_account: Account) -> Self {
        Self {
            balances: HashMap::new(),
            allowances: HashMap::new(),
            total: Shares::ZERO,
            lock_account,
        }
    }

    /// Total shares outstanding, locked minimum included.
    pub const fn total_supply(&self) -> Shares {
        self.total
    }

    /// Shares held by `account`.
    pub fn balance_of(&self, account: &Account) -> Shares {
        self.balances.get(account).copied().unwrap_or_default()
    }

    /// Remaining allowance of `spender` over `owner`'s shares.
    pub fn allowance(&self, owner: &Account, spender: &Account) -> Shares {
        self.allowances
            .get(&(*owner, *spender))
            .copied()
            .unwrap_or_default()
    }

    /// Sets `spender`'s allowance over `owner`'s shares.
    pub fn approve(&mut self, owner: &Account, spender: &Account, shares: Shares) {
        self.allowances.insert((*owner, *spender), shares);
    }

    /// Moves `shares` from `from` to `to`.
    ///
    /// # Errors
    ///
    /// - [`AmmError::LockedLiquidity`] if `from` is the lock account.
    /// - [`AmmError::InsufficientBalance`] if `from` holds fewer shares.
    pub fn transfer(&mut self, from: &Account, to: &Account, shares: Shares) -> Result<()> {
        if *from == self.lock_account {
            return Err(AmmError::LockedLiquidity);
        }
        self.debit(from, shares)?;
        self.credit(to, shares)
    }

    /// Moves `shares` from `from` to `to` on behalf of `spender`.
    ///
    /// # Errors
    ///
    /// - [`AmmError::InsufficientAllowance`] if the allowance is too small.
    /// - Any error from [`transfer`](Self::transfer).
    pub fn transfer_from(
        &mut self,
        spender: &Account,
        from: &Account,
        to: &Account,
        shares: Shares,
    ) -> Result<()> {
        let allowed = self.allowance(from, spender);
        let remaining = allowed
            .checked_sub(&shares)
            .ok_or(AmmError::InsufficientAllowance {
                allowed: allowed.get(),
                need: shares.get(),
            })?;
        self.transfer(from, to, shares)?;
        self.allowances.insert((*from, *spender), remaining);
        Ok(())
    }

    pub(crate) fn mint(&mut self, to: &Account, shares: Shares) -> Result<()> {
        self.total = self.total.safe_add(&shares)?;
        self.credit(to, shares)
    }

    pub(crate) fn burn(&mut self, from: &Account, shares: Shares) -> Result<()> {
        self.debit(from, shares)?;
        self.total = self.total.safe_sub(&shares)?;
        Ok(())
    }

    fn credit(&mut self, account: &Account, shares: Shares) -> Result<()> {
        let balance = self.balance_of(account).safe_add(&shares)?;
        self.balances.insert(*account, balance);
        Ok(())
    }

    fn debit(&mut self, account: &Account, shares: Shares) -> Result<()> {
        let have = self.balance_of(account);
        let remaining = have.checked_sub(&shares).ok_or(AmmError::InsufficientBalance {
            have: have.get(),
            need: shares.get(),
        })?;
        self.balances.insert(*account, remaining);
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    fn ledger_with(holder: &Account, shares: u128) -> ShareLedger {
        let mut l = ShareLedger::new(Account::LIQUIDITY_LOCK);
        let Ok(()) = l.mint(holder, Shares::new(shares)) else {
            panic!("mint failed");
        };
        l
    }

    #[test]
    fn mint_and_burn_track_supply() {
        let a = Account::from_byte(0xa);
        let mut l = ledger_with(&a, 500);
        assert_eq!(l.total_supply(), Shares::new(500));
        let Ok(()) = l.burn(&a, Shares::new(200)) else {
            panic!("burn failed");
        };
        assert_eq!(l.total_supply(), Shares::new(300));
        assert_eq!(l.balance_of(&a), Shares::new(300));
    }

    #[test]
    fn transfer_moves_ownership() {
        let (a, b) = (Account::from_byte(0xa), Account::from_byte(0xb));
        let mut l = ledger_with(&a, 500);
        let Ok(()) = l.transfer(&a, &b, Shares::new(125)) else {
            panic!("transfer failed");
        };
        assert_eq!(l.balance_of(&a), Shares::new(375));
        assert_eq!(l.balance_of(&b), Shares::new(125));
        assert_eq!(l.total_supply(), Shares::new(500));
    }

    #[test]
    fn locked_shares_cannot_move() {
        let mut l = ledger_with(&Account::LIQUIDITY_LOCK, 1_000);
        let Err(AmmError::LockedLiquidity) =
            l.transfer(&Account::LIQUIDITY_LOCK, &Account::from_byte(9), Shares::new(1))
        else {
            panic!("expected LockedLiquidity");
        };
    }

    #[test]
    fn transfer_from_needs_allowance() {
        let (owner, spender) = (Account::from_byte(0xa), Account::from_byte(0xb));
        let mut l = ledger_with(&owner, 500);
        let Err(AmmError::InsufficientAllowance { allowed: 0, need: 1 }) =
            l.transfer_from(&spender, &owner, &spender, Shares::new(1))
        else {
            panic!("expected InsufficientAllowance");
        };

        l.approve(&owner, &spender, Shares::new(300));
        let Ok(()) = l.transfer_from(&spender, &owner, &spender, Shares::new(100)) else {
            panic!("transfer_from failed");
        };
        assert_eq!(l.allowance(&owner, &spender), Shares::new(200));
        assert_eq!(l.balance_of(&spender), Shares::new(100));
    }

    #[test]
    fn overdraft_rejected() {
        let (a, b) = (Account::from_byte(0xa), Account::from_byte(0xb));
        let mut l = ledger_with(&a, 5);
        let Err(AmmError::InsufficientBalance { have: 5, need: 6 }) =
            l.transfer(&a, &b, Shares::new(6))
        else {
            panic!("expected InsufficientBalance");
        };
    }
}
