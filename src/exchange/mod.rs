//! All-or-nothing execution over the pool and both asset ledgers.
//!
//! [`Exchange`] owns the complete mutable state.  Each client-facing
//! operation runs through [`Exchange::transact`], which works on a copy and
//! commits only on success, so a failure anywhere leaves no partial
//! transfer, share movement or event behind.  The pool's event log is set
//! aside rather than copied, so a transaction costs the same however long
//! the pool has been running.  Transactions nest: an inner
//! failure propagated with `?` rolls back the outer one too.

use tracing::warn;

use crate::domain::{Account, Amount, BurnOutcome, MintOutcome, Shares, SwapOutcome};
use crate::error::Result;
use crate::ledger::{NativeLedger, TaxedToken};
use crate::pool::Pool;
use crate::traits::{Allowances, AssetLedger};

/// The pool plus the native and token ledgers it settles against.
///
/// # Example
///
/// ```rust
/// use taxpair_amm::config::{PoolConfig, TaxPolicy};
/// use taxpair_amm::domain::{Account, Amount};
/// use taxpair_amm::exchange::Exchange;
/// use taxpair_amm::ledger::{NativeLedger, TaxedToken};
/// use taxpair_amm::pool::Pool;
/// use taxpair_amm::traits::{AssetLedger, FromConfig};
///
/// let pool_account = Account::from_byte(0x50);
/// let Ok(cfg) = PoolConfig::with_defaults(pool_account) else { return };
/// let Ok(pool) = Pool::from_config(&cfg) else { return };
/// let token = TaxedToken::new(TaxPolicy::untaxed(Account::from_byte(0x7e)));
/// let mut ex = Exchange::new(pool, NativeLedger::new(), token);
///
/// // Nothing was deposited, so the mint fails and changes nothing.
/// assert!(ex.mint(&Account::from_byte(0xa1)).is_err());
/// assert!(ex.pool().events().is_empty());
/// assert_eq!(ex.native().balance_of(&pool_account), Amount::ZERO);
/// ```
#[derive(Debug, Clone)]
pub struct Exchange<N = NativeLedger, T = TaxedToken> {
    pub(crate) pool: Pool,
    pub(crate) native: N,
    pub(crate) token: T,
}

impl<N, T> Exchange<N, T>
where
    N: AssetLedger + Clone,
    T: Allowances + Clone,
{
    /// Assembles an exchange from its parts.
    pub const fn new(pool: Pool, native: N, token: T) -> Self {
        Self {
            pool,
            native,
            token,
        }
    }

    /// The pool.
    pub const fn pool(&self) -> &Pool {
        &self.pool
    }

    /// The native-asset ledger.
    pub const fn native(&self) -> &N {
        &self.native
    }

    /// The token ledger.
    pub const fn token(&self) -> &T {
        &self.token
    }

    /// Direct access to the native ledger for funding and fixtures.
    ///
    /// Changes made here are outside any transaction.
    pub const fn native_mut(&mut self) -> &mut N {
        &mut self.native
    }

    /// Direct access to the token ledger for minting and tax switches.
    ///
    /// Changes made here are outside any transaction.
    pub const fn token_mut(&mut self) -> &mut T {
        &mut self.token
    }

    /// Runs `op` against a working copy and commits it only if `op`
    /// succeeds.
    ///
    /// # Errors
    ///
    /// Returns whatever `op` returns; the exchange is then unchanged.
    pub fn transact<R>(&mut self, op: impl FnOnce(&mut Self) -> Result<R>) -> Result<R> {
        // the draft carries only this transaction's events
        let history = self.pool.detach_events();
        let mut draft = self.clone();
        let result = op(&mut draft);
        match &result {
            Ok(_) => *self = draft,
            Err(error) => warn!(%error, "transaction rolled back"),
        }
        self.pool.reattach_events(history);
        result
    }

    // -- pool entry points ----------------------------------------------------

    /// Mints shares to `to` for whatever was deposited since the last sync.
    ///
    /// # Errors
    ///
    /// See [`AmmError`](crate::error::AmmError); any failure rolls back.
    pub fn mint(&mut self, to: &Account) -> Result<MintOutcome> {
        self.transact(|ex| ex.pool.mint(&ex.native, &ex.token, to))
    }

    /// Burns the shares held by the pool account and pays `to`.
    ///
    /// # Errors
    ///
    /// See [`AmmError`](crate::error::AmmError); any failure rolls back.
    pub fn burn(&mut self, to: &Account) -> Result<BurnOutcome> {
        self.transact(|ex| ex.pool.burn(&mut ex.native, &mut ex.token, to))
    }

    /// Pays the requested outputs to `to` and verifies the invariant
    /// against whatever input was deposited beforehand.
    ///
    /// # Errors
    ///
    /// See [`AmmError`](crate::error::AmmError); any failure rolls back.
    pub fn swap(
        &mut self,
        native_out: Amount,
        token_out: Amount,
        to: &Account,
    ) -> Result<SwapOutcome> {
        self.transact(|ex| ex.pool.swap(&mut ex.native, &mut ex.token, native_out, token_out, to))
    }

    // -- ledger entry points --------------------------------------------------

    /// Sends native value; returns the amount received.
    ///
    /// # Errors
    ///
    /// Balance or recipient-rejection errors from the ledger.
    pub fn transfer_native(&mut self, from: &Account, to: &Account, amount: Amount) -> Result<Amount> {
        self.transact(|ex| ex.native.transfer(from, to, amount))
    }

    /// Sends tokens; returns the amount received after tax.
    ///
    /// # Errors
    ///
    /// Balance errors from the ledger.
    pub fn transfer_token(&mut self, from: &Account, to: &Account, amount: Amount) -> Result<Amount> {
        self.transact(|ex| ex.token.transfer(from, to, amount))
    }

    /// Sets a token allowance.
    pub fn approve_token(&mut self, owner: &Account, spender: &Account, amount: Amount) {
        self.token.approve(owner, spender, amount);
    }

    /// Pulls tokens through an allowance; returns the amount received.
    ///
    /// # Errors
    ///
    /// Allowance or balance errors from the ledger.
    pub fn transfer_token_from(
        &mut self,
        spender: &Account,
        from: &Account,
        to: &Account,
        amount: Amount,
    ) -> Result<Amount> {
        self.transact(|ex| ex.token.transfer_from(spender, from, to, amount))
    }

    /// Moves pool shares.
    ///
    /// # Errors
    ///
    /// Balance or locked-liquidity errors from the share ledger.
    pub fn transfer_shares(&mut self, from: &Account, to: &Account, shares: Shares) -> Result<()> {
        self.transact(|ex| ex.pool.shares_mut().transfer(from, to, shares))
    }

    /// Sets a share allowance.
    pub fn approve_shares(&mut self, owner: &Account, spender: &Account, shares: Shares) {
        self.pool.shares_mut().approve(owner, spender, shares);
    }

    /// Pulls pool shares through an allowance.
    ///
    /// # Errors
    ///
    /// Allowance, balance or locked-liquidity errors from the share ledger.
    pub fn transfer_shares_from(
        &mut self,
        spender: &Account,
        from: &Account,
        to: &Account,
        shares: Shares,
    ) -> Result<()> {
        self.transact(|ex| ex.pool.shares_mut().transfer_from(spender, from, to, shares))
    }
}
