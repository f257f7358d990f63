//! Constant-product pool over a native asset and a taxed token.
//!
//! Every entry point follows the balance-diff protocol: the caller moves
//! assets (or shares) into the pool account first, and the pool learns the
//! true amounts by comparing its observed balances with its recorded
//! reserves.  For the taxed token this is the only way to see what actually
//! arrived.
//!
//! # Swap Invariant
//!
//! With fee `f` basis points and observed balances `B` after an optimistic
//! payout, the inferred inputs `Δ` must satisfy
//!
//! ```text
//! (B_n·10⁴ − Δ_n·f) · (B_t·10⁴ − Δ_t·f)  ≥  R_n · R_t · 10⁸
//! ```
//!
//! which is `B_n · B_t ≥ R_n · R_t` when `f = 0`.  All products are computed
//! in 256 bits.

use alloy_primitives::U256;
use tracing::{debug, info};

use super::ShareLedger;
use crate::config::PoolConfig;
use crate::domain::{
    Account, Amount, BPS_DENOMINATOR, BurnOutcome, MintOutcome, PoolEvent, ReservePair, Rounding,
    Shares, SwapOutcome,
};
use crate::error::{AmmError, Result};
use crate::math::{CheckedArithmetic, mul_div, sqrt_product};
use crate::traits::{AssetLedger, FromConfig};

/// The reserve pair, its share ledger, and the event log.
///
/// A `Pool` never holds assets itself: balances live in the asset ledgers
/// under [`PoolConfig::pool_account`].  The mutating operations are
/// crate-internal and reached through [`Exchange`](crate::exchange::Exchange),
/// which makes each of them atomic.
///
/// # Example
///
/// ```rust
/// use taxpair_amm::config::PoolConfig;
/// use taxpair_amm::domain::{Account, Shares};
/// use taxpair_amm::pool::Pool;
/// use taxpair_amm::traits::FromConfig;
///
/// let cfg = PoolConfig::with_defaults(Account::from_byte(0x50)).ok();
/// let pool = cfg.and_then(|c| Pool::from_config(&c).ok());
/// assert_eq!(pool.map(|p| p.total_shares()), Some(Shares::ZERO));
/// ```
#[derive(Debug, Clone)]
pub struct Pool {
    config: PoolConfig,
    reserves: ReservePair,
    shares: ShareLedger,
    events: Vec<PoolEvent>,
}

impl Pool {
    /// Returns the configuration.
    #[must_use]
    pub const fn config(&self) -> &PoolConfig {
        &self.config
    }

    /// Account holding the pool's assets.
    #[must_use]
    pub const fn account(&self) -> Account {
        self.config.pool_account()
    }

    /// Last-recorded reserves.
    #[must_use]
    pub const fn reserves(&self) -> ReservePair {
        self.reserves
    }

    /// Total shares, including the permanently locked minimum.
    pub const fn total_shares(&self) -> Shares {
        self.shares.total_supply()
    }

    /// Shares that can still be redeemed: total minus the lock account's
    /// balance.
    pub fn circulating_shares(&self) -> Shares {
        let locked = self.shares.balance_of(&self.config.lock_account());
        self.total_shares()
            .checked_sub(&locked)
            .unwrap_or(Shares::ZERO)
    }

    /// Shares held by `account`.
    pub fn share_balance(&self, account: &Account) -> Shares {
        self.shares.balance_of(account)
    }

    /// Remaining share allowance of `spender` over `owner`.
    pub fn share_allowance(&self, owner: &Account, spender: &Account) -> Shares {
        self.shares.allowance(owner, spender)
    }

    /// Every event emitted since creation, oldest first.
    #[must_use]
    pub fn events(&self) -> &[PoolEvent] {
        &self.events
    }

    pub(crate) fn shares_mut(&mut self) -> &mut ShareLedger {
        &mut self.shares
    }

    /// Moves the event log out, leaving the pool with an empty one.
    pub(crate) fn detach_events(&mut self) -> Vec<PoolEvent> {
        std::mem::take(&mut self.events)
    }

    /// Puts `earlier` back in front of whatever was logged since
    /// [`Pool::detach_events`].
    pub(crate) fn reattach_events(&mut self, mut earlier: Vec<PoolEvent>) {
        earlier.append(&mut self.events);
        self.events = earlier;
    }

    /// Credits shares for whatever arrived since the last sync.
    ///
    /// First deposit: `floor(sqrt(Δn · Δt))` with the configured minimum
    /// minted to the lock account and the rest to `to`.  Later deposits:
    /// `min(Δn · S / Rn, Δt · S / Rt)`, floored.
    pub(crate) fn mint<N, T>(&mut self, native: &N, token: &T, to: &Account) -> Result<MintOutcome>
    where
        N: AssetLedger,
        T: AssetLedger,
    {
        let (balance_n, balance_t) = self.balances(native, token);
        let native_in = balance_n.safe_sub(&self.reserves.native)?;
        let token_in = balance_t.safe_sub(&self.reserves.token)?;
        debug!(native_in = native_in.get(), token_in = token_in.get(), "mint deposit observed");

        let total = self.shares.total_supply();
        let minted = if total.is_zero() {
            let root = Shares::new(sqrt_product(native_in, token_in)?);
            let minimum = self.config.minimum_liquidity();
            if root <= minimum {
                return Err(AmmError::InsufficientLiquidityMinted);
            }
            self.shares.mint(&self.config.lock_account(), minimum)?;
            root.safe_sub(&minimum)?
        } else {
            if self.reserves.has_zero_side() {
                return Err(AmmError::ZeroReserve);
            }
            let supply = total.as_amount();
            let by_native = mul_div(native_in, supply, self.reserves.native, Rounding::Down)?;
            let by_token = mul_div(token_in, supply, self.reserves.token, Rounding::Down)?;
            Shares::new(by_native.min(by_token).get())
        };
        if minted.is_zero() {
            return Err(AmmError::InsufficientLiquidityMinted);
        }

        self.shares.mint(to, minted)?;
        self.sync(balance_n, balance_t);
        let outcome = MintOutcome {
            to: *to,
            native_in,
            token_in,
            shares: minted,
        };
        self.events.push(PoolEvent::Mint(outcome));
        info!(
            %to,
            native_in = native_in.get(),
            token_in = token_in.get(),
            shares = minted.get(),
            "pool mint"
        );
        Ok(outcome)
    }

    /// Redeems the shares sitting in the pool account and pays both assets
    /// to `to`, pro rata and floored.
    pub(crate) fn burn<N, T>(
        &mut self,
        native: &mut N,
        token: &mut T,
        to: &Account,
    ) -> Result<BurnOutcome>
    where
        N: AssetLedger,
        T: AssetLedger,
    {
        let pool = self.account();
        let burned = self.shares.balance_of(&pool);
        if burned.is_zero() {
            return Err(AmmError::InsufficientLiquidityBurned);
        }
        let (redeemed, supply) = (burned.as_amount(), self.shares.total_supply().as_amount());
        let native_out = mul_div(redeemed, self.reserves.native, supply, Rounding::Down)?;
        let token_out = mul_div(redeemed, self.reserves.token, supply, Rounding::Down)?;
        if native_out.is_zero() || token_out.is_zero() {
            return Err(AmmError::InsufficientLiquidityBurned);
        }

        self.shares.burn(&pool, burned)?;
        let native_received = native.transfer(&pool, to, native_out)?;
        let token_received = token.transfer(&pool, to, token_out)?;

        let (balance_n, balance_t) = self.balances(native, token);
        self.sync(balance_n, balance_t);
        let outcome = BurnOutcome {
            to: *to,
            shares: burned,
            native_out,
            token_out,
        };
        self.events.push(PoolEvent::Burn(outcome));
        info!(
            %to,
            shares = burned.get(),
            native_out = native_out.get(),
            token_out = token_out.get(),
            native_received = native_received.get(),
            token_received = token_received.get(),
            "pool burn"
        );
        Ok(outcome)
    }

    /// Pays out the requested amounts, infers the inputs from the resulting
    /// balances, and checks the fee-adjusted invariant.
    pub(crate) fn swap<N, T>(
        &mut self,
        native: &mut N,
        token: &mut T,
        native_out: Amount,
        token_out: Amount,
        to: &Account,
    ) -> Result<SwapOutcome>
    where
        N: AssetLedger,
        T: AssetLedger,
    {
        if native_out.is_zero() && token_out.is_zero() {
            return Err(AmmError::InsufficientOutputAmount);
        }
        let reserves = self.reserves;
        for (requested, reserve) in [(native_out, reserves.native), (token_out, reserves.token)] {
            if requested >= reserve && !requested.is_zero() {
                return Err(AmmError::InsufficientReserve { requested, reserve });
            }
        }
        let pool = self.account();
        if *to == pool {
            return Err(AmmError::InvalidQuantity("swap recipient cannot be the pool"));
        }

        let native_received = if native_out.is_zero() {
            Amount::ZERO
        } else {
            native.transfer(&pool, to, native_out)?
        };
        let token_received = if token_out.is_zero() {
            Amount::ZERO
        } else {
            token.transfer(&pool, to, token_out)?
        };
        debug!(
            %to,
            native_received = native_received.get(),
            token_received = token_received.get(),
            "swap payout delivered"
        );

        let (balance_n, balance_t) = self.balances(native, token);
        // out < reserve was checked above
        let native_in = balance_n.saturating_sub(&reserves.native.saturating_sub(&native_out));
        let token_in = balance_t.saturating_sub(&reserves.token.saturating_sub(&token_out));
        if native_in.is_zero() && token_in.is_zero() {
            return Err(AmmError::InsufficientInputAmount {
                required: Amount::new(1),
                provided: Amount::ZERO,
            });
        }
        debug!(native_in = native_in.get(), token_in = token_in.get(), "swap input observed");

        self.check_invariant(reserves, (balance_n, balance_t), (native_in, token_in))?;

        self.sync(balance_n, balance_t);
        let outcome = SwapOutcome {
            to: *to,
            native_in,
            token_in,
            native_out,
            token_out,
        };
        self.events.push(PoolEvent::Swap(outcome));
        info!(
            %to,
            native_in = native_in.get(),
            token_in = token_in.get(),
            native_out = native_out.get(),
            token_out = token_out.get(),
            "pool swap"
        );
        Ok(outcome)
    }

    fn check_invariant(
        &self,
        before: ReservePair,
        (balance_n, balance_t): (Amount, Amount),
        (native_in, token_in): (Amount, Amount),
    ) -> Result<()> {
        let fee = U256::from(self.config.swap_fee().bps());
        let scale = U256::from(BPS_DENOMINATOR);
        let overflow = AmmError::Overflow("fee-adjusted product overflow");

        // balance >= input and fee < 100%, so neither side underflows
        let adjusted_n = balance_n.to_u256() * scale - native_in.to_u256() * fee;
        let adjusted_t = balance_t.to_u256() * scale - token_in.to_u256() * fee;
        let k_after = adjusted_n.checked_mul(adjusted_t).ok_or(overflow.clone())?;
        let k_before = before
            .product()
            .checked_mul(scale * scale)
            .ok_or(overflow)?;
        if k_after < k_before {
            return Err(AmmError::InvariantViolation { k_before, k_after });
        }
        Ok(())
    }

    fn balances<N: AssetLedger, T: AssetLedger>(&self, native: &N, token: &T) -> (Amount, Amount) {
        let pool = self.account();
        (native.balance_of(&pool), token.balance_of(&pool))
    }

    fn sync(&mut self, native: Amount, token: Amount) {
        self.reserves = ReservePair::new(native, token);
        self.events.push(PoolEvent::Sync(self.reserves));
        debug!(native = native.get(), token = token.get(), "reserves synced");
    }
}

impl FromConfig<PoolConfig> for Pool {
    /// Creates an empty pool.
    ///
    /// # Errors
    ///
    /// Propagates any error from [`PoolConfig::validate`].
    fn from_config(config: &PoolConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config: *config,
            reserves: ReservePair::EMPTY,
            shares: ShareLedger::new(config.lock_account()),
            events: Vec::new(),
        })
    }
}
