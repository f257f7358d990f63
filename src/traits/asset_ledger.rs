//! The "transferable asset" capability shared by both pool assets.
//!
//! The pool and the router are written once against [`AssetLedger`] and
//! [`Allowances`]; tests instantiate them with a taxed and an untaxed
//! ledger to cover both paths.
//!
//! # Received-Amount Contract
//!
//! A transfer may deliver less than it debits.  Callers must use the amount
//! returned by [`AssetLedger::transfer`] (or re-read balances) and never
//! assume `received == sent`:
//!
//! ```text
//! sender.balance    -= amount
//! recipient.balance += received        // received <= amount
//! ```

use crate::domain::{Account, Amount, BasisPoints};
use crate::error::Result;
use crate::math::{gross_up, net_of_tax};

/// Balance query and push transfer for one asset.
///
/// # Errors
///
/// Transfers fail with:
///
/// - [`AmmError::InsufficientBalance`](crate::error::AmmError::InsufficientBalance)
///   if `from` cannot cover `amount`.
/// - [`AmmError::TransferFailed`](crate::error::AmmError::TransferFailed)
///   if the recipient refuses the asset.
pub trait AssetLedger {
    /// Current balance of `account`.
    fn balance_of(&self, account: &Account) -> Amount;

    /// Moves `amount` from `from` to `to` and returns what `to` received.
    ///
    /// # Errors
    ///
    /// See the trait-level documentation.
    fn transfer(&mut self, from: &Account, to: &Account, amount: Amount) -> Result<Amount>;

    /// Tax rate applied to transfers right now; zero for untaxed assets.
    fn transfer_tax(&self) -> BasisPoints {
        BasisPoints::ZERO
    }

    /// Amount a recipient would receive if `amount` were sent now.
    ///
    /// # Errors
    ///
    /// Propagates [`net_of_tax`] errors.
    fn received_for(&self, amount: Amount) -> Result<Amount> {
        net_of_tax(amount, self.transfer_tax())
    }

    /// Smallest amount to send now so the recipient nets at least `net`.
    ///
    /// # Errors
    ///
    /// Propagates [`gross_up`] errors.
    fn gross_for(&self, net: Amount) -> Result<Amount> {
        gross_up(net, self.transfer_tax())
    }
}

/// Allowance-based pull transfers on top of [`AssetLedger`].
pub trait Allowances: AssetLedger {
    /// Sets `spender`'s allowance over `owner`'s balance to `amount`.
    fn approve(&mut self, owner: &Account, spender: &Account, amount: Amount);

    /// Remaining allowance of `spender` over `owner`'s balance.
    fn allowance(&self, owner: &Account, spender: &Account) -> Amount;

    /// Moves `amount` from `from` to `to` on behalf of `spender`, consuming
    /// allowance, and returns what `to` received.
    ///
    /// # Errors
    ///
    /// - [`AmmError::InsufficientAllowance`](crate::error::AmmError::InsufficientAllowance)
    ///   if the allowance is below `amount`.
    /// - Any error from [`AssetLedger::transfer`].
    fn transfer_from(
        &mut self,
        spender: &Account,
        from: &Account,
        to: &Account,
        amount: Amount,
    ) -> Result<Amount>;
}
