//! Token ledger whose transfers may lose a tax in transit.

use std::collections::HashMap;

use tracing::debug;

use crate::config::TaxPolicy;
use crate::domain::{Account, Amount, BasisPoints, Rounding};
use crate::error::{AmmError, Result};
use crate::math::CheckedArithmetic;
use crate::traits::{Allowances, AssetLedger, FromConfig};

/// Allowance-based token whose transfers are taxed when the policy is
/// enabled.
///
/// Every transfer, including payouts by the pool, debits the full amount
/// from the sender, credits `floor(amount × rate / 10 000)` to the treasury
/// and the remainder to the recipient.
#[derive(Debug, Clone)]
pub struct TaxedToken {
    balances: HashMap<Account, Amount>,
    allowances: HashMap<(Account, Account), Amount>,
    policy: TaxPolicy,
    total_supply: Amount,
}

impl TaxedToken {
    /// Creates an empty ledger governed by `policy`.
    #[must_use]
    pub fn new(policy: TaxPolicy) -> Self {
        Self {
            balances: HashMap::new(),
            allowances: HashMap::new(),
            policy,
            total_supply: Amount::ZERO,
        }
    }

    /// Issues `amount` new tokens to `account`. Issuance is never taxed.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::Overflow`] if the supply or balance would
    /// overflow.
    pub fn mint_to(&mut self, account: &Account, amount: Amount) -> Result<()> {
        self.total_supply = self.total_supply.safe_add(&amount)?;
        self.credit(account, amount)
    }

    /// Returns the tax policy.
    #[must_use]
    pub const fn policy(&self) -> &TaxPolicy {
        &self.policy
    }

    /// Turns the transfer tax on or off.
    pub fn set_tax_enabled(&mut self, enabled: bool) {
        self.policy.set_enabled(enabled);
        debug!(enabled, "token tax toggled");
    }

    /// Changes the tax rate.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidConfiguration`] if `rate` is 100% or more;
    /// the previous rate is kept.
    pub fn set_tax_rate(&mut self, rate: BasisPoints) -> Result<()> {
        self.policy.set_rate(rate)
    }

    /// Total tokens issued.
    pub const fn total_supply(&self) -> Amount {
        self.total_supply
    }

    fn credit(&mut self, account: &Account, amount: Amount) -> Result<()> {
        let balance = self.balance_of(account).safe_add(&amount)?;
        self.balances.insert(*account, balance);
        Ok(())
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

impl FromConfig<TaxPolicy> for TaxedToken {
    fn from_config(config: &TaxPolicy) -> Result<Self> {
        config.validate()?;
        Ok(Self::new(*config))
    }
}

impl AssetLedger for TaxedToken {
    fn balance_of(&self, account: &Account) -> Amount {
        self.balances.get(account).copied().unwrap_or_default()
    }

    fn transfer(&mut self, from: &Account, to: &Account, amount: Amount) -> Result<Amount> {
        let tax = self.transfer_tax().apply(amount, Rounding::Down)?;
        let received = amount.safe_sub(&tax)?;
        self.debit(from, amount)?;
        self.credit(to, received)?;
        if !tax.is_zero() {
            let treasury = self.policy.treasury();
            self.credit(&treasury, tax)?;
        }
        debug!(
            %from,
            %to,
            amount = amount.get(),
            received = received.get(),
            tax = tax.get(),
            "token transfer"
        );
        Ok(received)
    }

    fn transfer_tax(&self) -> BasisPoints {
        self.policy.effective_rate()
    }
}

impl Allowances for TaxedToken {
    fn approve(&mut self, owner: &Account, spender: &Account, amount: Amount) {
        self.allowances.insert((*owner, *spender), amount);
    }

    fn allowance(&self, owner: &Account, spender: &Account) -> Amount {
        self.allowances
            .get(&(*owner, *spender))
            .copied()
            .unwrap_or_default()
    }

    fn transfer_from(
        &mut self,
        spender: &Account,
        from: &Account,
        to: &Account,
        amount: Amount,
    ) -> Result<Amount> {
        let allowed = self.allowance(from, spender);
        let remaining = allowed
            .checked_sub(&amount)
            .ok_or(AmmError::InsufficientAllowance {
                allowed: allowed.get(),
                need: amount.get(),
            })?;
        let received = self.transfer(from, to, amount)?;
        self.allowances.insert((*from, *spender), remaining);
        Ok(received)
    }
}
