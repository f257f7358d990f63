//! Custody and orchestration around the pool's low-level entry points.

use tracing::{debug, info};

use super::quote::{match_liquidity, swap_amount, swap_output};
use crate::domain::{
    Account, Amount, Asset, LiquidityAdded, LiquidityRemoved, Shares, SwapReceipt,
};
use crate::error::{AmmError, Result};
use crate::exchange::Exchange;
use crate::math::CheckedArithmetic;
use crate::traits::{Allowances, AssetLedger};

/// Stateless router acting from its own account.
///
/// Every operation runs as one [`Exchange::transact`] transaction: native
/// value attached to the call is moved to the router first, tokens and
/// shares are pulled through allowances granted to [`Router::account`], and
/// any unused native value is refunded before the transaction commits.  A
/// refund the caller refuses aborts the whole call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Router {
    account: Account,
}

impl Router {
    /// Creates a router operating from `account`.
    pub const fn new(account: Account) -> Self {
        Self { account }
    }

    /// The router's own account; callers approve it for tokens and shares.
    pub const fn account(&self) -> Account {
        self.account
    }

    /// [`match_liquidity`] against the exchange's live reserves, supply and
    /// tax rate.
    ///
    /// # Errors
    ///
    /// See [`match_liquidity`].
    pub fn quote_matching<N, T>(
        &self,
        exchange: &Exchange<N, T>,
        goal: Amount,
        goal_asset: Asset,
    ) -> Result<Amount>
    where
        N: AssetLedger + Clone,
        T: Allowances + Clone,
    {
        let reserves = exchange.pool().reserves();
        match_liquidity(
            goal,
            reserves.get(goal_asset),
            reserves.get(goal_asset.other()),
            exchange.pool().total_shares(),
            exchange.token().transfer_tax(),
            goal_asset,
        )
    }

    /// Gross amount of `asset_out.other()` a caller must part with to net
    /// `amount_out` of `asset_out`, at the live reserves, fee and tax.
    ///
    /// # Errors
    ///
    /// See [`swap_amount`].
    pub fn quote_exact_output<N, T>(
        &self,
        exchange: &Exchange<N, T>,
        asset_out: Asset,
        amount_out: Amount,
    ) -> Result<Amount>
    where
        N: AssetLedger + Clone,
        T: Allowances + Clone,
    {
        let reserves = exchange.pool().reserves();
        let fee = exchange.pool().config().swap_fee();
        match asset_out {
            Asset::Token => {
                let payout = exchange.token().gross_for(amount_out)?;
                swap_amount(payout, reserves.token, reserves.native, fee)
            }
            Asset::Native => {
                let arriving = swap_amount(amount_out, reserves.native, reserves.token, fee)?;
                exchange.token().gross_for(arriving)
            }
        }
    }

    /// Deposits `token_goal` tokens plus the matching share of
    /// `native_value`, mints shares to `caller`, and refunds unused native
    /// value.
    ///
    /// A zero `token_goal` on an initialized pool matches the token side to
    /// the whole `native_value` instead.  On the first deposit both amounts
    /// are taken as given.
    ///
    /// # Errors
    ///
    /// - [`AmmError::InsufficientInputAmount`] if `native_value` does not
    ///   cover the matched native amount.
    /// - [`AmmError::TransferFailed`] if the refund is refused.
    /// - Any allowance, balance or pool error.
    pub fn add_liquidity<N, T>(
        &self,
        exchange: &mut Exchange<N, T>,
        caller: &Account,
        token_goal: Amount,
        native_value: Amount,
    ) -> Result<LiquidityAdded>
    where
        N: AssetLedger + Clone,
        T: Allowances + Clone,
    {
        let (token_sent, native_deposited) = if exchange.pool().total_shares().is_zero() {
            (token_goal, native_value)
        } else if token_goal.is_zero() {
            let token = self.quote_matching(exchange, native_value, Asset::Native)?;
            (token, native_value)
        } else {
            let native = self.quote_matching(exchange, token_goal, Asset::Token)?;
            (token_goal, native)
        };
        if native_deposited > native_value {
            return Err(AmmError::InsufficientInputAmount {
                required: native_deposited,
                provided: native_value,
            });
        }

        let router = self.account;
        exchange.transact(|ex| {
            let pool = ex.pool.account();
            send_native(&mut ex.native, caller, &router, native_value)?;
            let token_received = ex.token.transfer_from(&router, caller, &pool, token_sent)?;
            send_native(&mut ex.native, &router, &pool, native_deposited)?;
            let minted = ex.pool.mint(&ex.native, &ex.token, caller)?;
            let native_refund = native_value.safe_sub(&native_deposited)?;
            send_native(&mut ex.native, &router, caller, native_refund)?;

            info!(
                %caller,
                native = native_deposited.get(),
                token_sent = token_sent.get(),
                token_received = token_received.get(),
                shares = minted.shares.get(),
                refund = native_refund.get(),
                "router add liquidity"
            );
            Ok(LiquidityAdded {
                native_deposited,
                token_sent,
                token_received,
                shares: minted.shares,
                native_refund,
            })
        })
    }

    /// Pulls `shares` from `caller` into the pool and redeems them to
    /// `caller`.
    ///
    /// # Errors
    ///
    /// - [`AmmError::InsufficientAllowance`] if the router may not move
    ///   that many shares.
    /// - Any pool burn error.
    pub fn burn_liquidity<N, T>(
        &self,
        exchange: &mut Exchange<N, T>,
        caller: &Account,
        shares: Shares,
    ) -> Result<LiquidityRemoved>
    where
        N: AssetLedger + Clone,
        T: Allowances + Clone,
    {
        let router = self.account;
        exchange.transact(|ex| {
            let pool = ex.pool.account();
            ex.pool.shares_mut().transfer_from(&router, caller, &pool, shares)?;
            let native_before = ex.native.balance_of(caller);
            let token_before = ex.token.balance_of(caller);
            ex.pool.burn(&mut ex.native, &mut ex.token, caller)?;
            let native = ex.native.balance_of(caller).safe_sub(&native_before)?;
            let token = ex.token.balance_of(caller).safe_sub(&token_before)?;

            info!(
                %caller,
                shares = shares.get(),
                native = native.get(),
                token = token.get(),
                "router burn liquidity"
            );
            Ok(LiquidityRemoved {
                shares,
                native,
                token,
            })
        })
    }

    /// Exact-output swap: exactly one of `amount_token_out` /
    /// `amount_native_out` is nonzero and is what `caller` nets.
    ///
    /// For token output the pool's payout is grossed up by the live tax and
    /// the native input comes out of `native_value`.  For native output the
    /// token input is grossed up so the pool receives what the invariant
    /// needs.  The grossed input is bounded by `max_amount_in`.
    ///
    /// # Errors
    ///
    /// - [`AmmError::InvalidQuantity`] unless exactly one leg is nonzero.
    /// - [`AmmError::SlippageExceeded`] if the required input exceeds
    ///   `max_amount_in`.
    /// - [`AmmError::InsufficientInputAmount`] if `native_value` does not
    ///   cover the native input.
    /// - [`AmmError::TransferFailed`] if the refund is refused.
    pub fn swap<N, T>(
        &self,
        exchange: &mut Exchange<N, T>,
        caller: &Account,
        amount_token_out: Amount,
        amount_native_out: Amount,
        max_amount_in: Amount,
        native_value: Amount,
    ) -> Result<SwapReceipt>
    where
        N: AssetLedger + Clone,
        T: Allowances + Clone,
    {
        let (asset_out, amount_out) = match (amount_token_out.is_zero(), amount_native_out.is_zero()) {
            (false, true) => (Asset::Token, amount_token_out),
            (true, false) => (Asset::Native, amount_native_out),
            _ => {
                return Err(AmmError::InvalidQuantity(
                    "exactly one output amount must be nonzero",
                ));
            }
        };
        let amount_in = self.quote_exact_output(exchange, asset_out, amount_out)?;
        if amount_in > max_amount_in {
            return Err(AmmError::SlippageExceeded {
                limit: max_amount_in,
                actual: amount_in,
            });
        }

        let router = self.account;
        exchange.transact(|ex| {
            let pool = ex.pool.account();
            send_native(&mut ex.native, caller, &router, native_value)?;
            let net_before = balance_of(ex, asset_out, caller);
            let native_spent = match asset_out {
                Asset::Token => {
                    if amount_in > native_value {
                        return Err(AmmError::InsufficientInputAmount {
                            required: amount_in,
                            provided: native_value,
                        });
                    }
                    let payout = ex.token.gross_for(amount_out)?;
                    send_native(&mut ex.native, &router, &pool, amount_in)?;
                    ex.pool.swap(&mut ex.native, &mut ex.token, Amount::ZERO, payout, caller)?;
                    amount_in
                }
                Asset::Native => {
                    let arrived = ex.token.transfer_from(&router, caller, &pool, amount_in)?;
                    debug!(sent = amount_in.get(), arrived = arrived.get(), "token input delivered");
                    ex.pool.swap(&mut ex.native, &mut ex.token, amount_out, Amount::ZERO, caller)?;
                    Amount::ZERO
                }
            };
            let native_refund = native_value.safe_sub(&native_spent)?;
            send_native(&mut ex.native, &router, caller, native_refund)?;
            let netted = balance_of(ex, asset_out, caller).saturating_sub(&net_before);

            info!(
                %caller,
                %asset_out,
                amount_in = amount_in.get(),
                amount_out = netted.get(),
                refund = native_refund.get(),
                "router swap"
            );
            Ok(SwapReceipt {
                asset_in: asset_out.other(),
                amount_in,
                amount_out: netted,
                native_refund,
            })
        })
    }

    /// Exact-input swap: sells `amount_in` of `asset_in` and fails unless
    /// `caller` nets at least `min_amount_out`.
    ///
    /// Native input is taken from `native_value`; the remainder is
    /// refunded.
    ///
    /// # Errors
    ///
    /// - [`AmmError::InsufficientInputAmount`] if `native_value` does not
    ///   cover a native `amount_in`.
    /// - [`AmmError::SlippageExceeded`] if the caller would net less than
    ///   `min_amount_out`.
    /// - Any pool, allowance or refund error.
    pub fn swap_exact_input<N, T>(
        &self,
        exchange: &mut Exchange<N, T>,
        caller: &Account,
        asset_in: Asset,
        amount_in: Amount,
        min_amount_out: Amount,
        native_value: Amount,
    ) -> Result<SwapReceipt>
    where
        N: AssetLedger + Clone,
        T: Allowances + Clone,
    {
        if asset_in == Asset::Native && amount_in > native_value {
            return Err(AmmError::InsufficientInputAmount {
                required: amount_in,
                provided: native_value,
            });
        }

        let router = self.account;
        exchange.transact(|ex| {
            let pool = ex.pool.account();
            let reserves = ex.pool.reserves();
            let fee = ex.pool.config().swap_fee();
            let asset_out = asset_in.other();
            send_native(&mut ex.native, caller, &router, native_value)?;
            let net_before = balance_of(ex, asset_out, caller);

            let native_spent = match asset_in {
                Asset::Native => {
                    let payout = swap_output(amount_in, reserves.native, reserves.token, fee)?;
                    let expected = ex.token.received_for(payout)?;
                    check_minimum(expected, min_amount_out)?;
                    send_native(&mut ex.native, &router, &pool, amount_in)?;
                    ex.pool.swap(&mut ex.native, &mut ex.token, Amount::ZERO, payout, caller)?;
                    amount_in
                }
                Asset::Token => {
                    let arrived = ex.token.transfer_from(&router, caller, &pool, amount_in)?;
                    let payout = swap_output(arrived, reserves.token, reserves.native, fee)?;
                    check_minimum(payout, min_amount_out)?;
                    ex.pool.swap(&mut ex.native, &mut ex.token, payout, Amount::ZERO, caller)?;
                    Amount::ZERO
                }
            };
            let native_refund = native_value.safe_sub(&native_spent)?;
            send_native(&mut ex.native, &router, caller, native_refund)?;
            let netted = balance_of(ex, asset_out, caller).saturating_sub(&net_before);

            info!(
                %caller,
                %asset_in,
                amount_in = amount_in.get(),
                amount_out = netted.get(),
                refund = native_refund.get(),
                "router exact-input swap"
            );
            Ok(SwapReceipt {
                asset_in,
                amount_in,
                amount_out: netted,
                native_refund,
            })
        })
    }
}

fn balance_of<N, T>(exchange: &Exchange<N, T>, asset: Asset, account: &Account) -> Amount
where
    N: AssetLedger + Clone,
    T: Allowances + Clone,
{
    match asset {
        Asset::Native => exchange.native.balance_of(account),
        Asset::Token => exchange.token.balance_of(account),
    }
}

/// Pushes native value and fails unless all of it arrived; refunds and
/// forwarded deposits are accounted at face value.
fn send_native<N: AssetLedger>(
    ledger: &mut N,
    from: &Account,
    to: &Account,
    amount: Amount,
) -> Result<()> {
    let received = ledger.transfer(from, to, amount)?;
    if received < amount {
        return Err(AmmError::TransferFailed {
            asset: Asset::Native,
            reason: "native value lost in transit",
        });
    }
    Ok(())
}

fn check_minimum(actual: Amount, limit: Amount) -> Result<()> {
    if actual < limit {
        return Err(AmmError::SlippageExceeded { limit, actual });
    }
    Ok(())
}
