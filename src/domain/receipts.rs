//! What a router caller gets back from each orchestrated operation.

use super::{Amount, Asset, Shares};

/// Result of [`Router::add_liquidity`](crate::router::Router::add_liquidity).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LiquidityAdded {
    /// Native value forwarded to the pool.
    pub native_deposited: Amount,
    /// Token amount pulled from the caller (gross, before tax).
    pub token_sent: Amount,
    /// Token amount the pool actually received.
    pub token_received: Amount,
    /// Shares credited to the caller.
    pub shares: Shares,
    /// Native value returned to the caller.
    pub native_refund: Amount,
}

/// Result of [`Router::burn_liquidity`](crate::router::Router::burn_liquidity).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LiquidityRemoved {
    /// Shares redeemed.
    pub shares: Shares,
    /// Native amount credited to the caller.
    pub native: Amount,
    /// Token amount credited to the caller (net of tax).
    pub token: Amount,
}

/// Result of a router swap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SwapReceipt {
    /// Asset the caller paid.
    pub asset_in: Asset,
    /// Amount of `asset_in` the caller parted with (gross).
    pub amount_in: Amount,
    /// Amount of `asset_in.other()` the caller netted.
    pub amount_out: Amount,
    /// Unused native value returned to the caller.
    pub native_refund: Amount,
}

impl SwapReceipt {
    /// Asset the caller received.
    #[must_use]
    pub const fn asset_out(&self) -> Asset {
        self.asset_in.other()
    }
}
