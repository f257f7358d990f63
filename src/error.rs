//! Unified error types for the pool, the router, and the asset ledgers.
//!
//! Every fallible operation in the crate returns [`AmmError`].  Errors are
//! never recovered locally: they abort the enclosing
//! [`Exchange`](crate::exchange::Exchange) transaction and surface to the
//! immediate caller, who decides whether to resubmit.

use alloy_primitives::U256;

use crate::domain::{Amount, Asset};

/// Unified error enum for all pool, router, and ledger operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AmmError {
    /// A deposit would mint zero shares (or, on the first deposit, no more
    /// than the locked minimum).
    #[error("insufficient liquidity minted")]
    InsufficientLiquidityMinted,

    /// A withdrawal redeemed zero shares or would return zero of an asset.
    #[error("insufficient liquidity burned")]
    InsufficientLiquidityBurned,

    /// The fee-adjusted reserve product decreased across a swap.
    #[error("constant-product invariant violated: k_after {k_after} < k_before {k_before}")]
    InvariantViolation {
        /// Fee-scaled product before the swap.
        k_before: U256,
        /// Fee-scaled product after the swap.
        k_after: U256,
    },

    /// A reserve is zero while shares are outstanding, or a quote was
    /// requested against an empty reserve.
    #[error("pool reserve is zero")]
    ZeroReserve,

    /// The requested output is not strictly below the reserve.
    #[error("insufficient reserve: requested {requested}, reserve {reserve}")]
    InsufficientReserve {
        /// Amount the caller asked for.
        requested: Amount,
        /// Reserve available in the pool.
        reserve: Amount,
    },

    /// The realized trade is worse than the caller's bound.
    #[error("slippage exceeded: limit {limit}, actual {actual}")]
    SlippageExceeded {
        /// Caller-supplied bound (maximum input or minimum output).
        limit: Amount,
        /// Amount the trade would actually require or deliver.
        actual: Amount,
    },

    /// A push transfer could not be delivered.
    #[error("{asset} transfer failed: {reason}")]
    TransferFailed {
        /// Asset whose transfer failed.
        asset: Asset,
        /// Why the transfer was refused.
        reason: &'static str,
    },

    /// A swap observed no input, or the attached native value does not
    /// cover the quoted amount.
    #[error("insufficient input amount: required {required}, provided {provided}")]
    InsufficientInputAmount {
        /// Amount the operation needs.
        required: Amount,
        /// Amount that was actually supplied.
        provided: Amount,
    },

    /// A swap requested no output at all.
    #[error("insufficient output amount")]
    InsufficientOutputAmount,

    /// An account does not hold enough of an asset or of shares.
    #[error("insufficient balance: have {have}, need {need}")]
    InsufficientBalance {
        /// Current balance.
        have: u128,
        /// Amount the transfer needs.
        need: u128,
    },

    /// A pull transfer exceeds the spender's allowance.
    #[error("insufficient allowance: allowed {allowed}, need {need}")]
    InsufficientAllowance {
        /// Remaining allowance.
        allowed: u128,
        /// Amount the transfer needs.
        need: u128,
    },

    /// The permanently locked minimum liquidity cannot be moved.
    #[error("minimum liquidity is permanently locked")]
    LockedLiquidity,

    /// A quantity is zero, inconsistent, or otherwise unusable.
    #[error("invalid quantity: {0}")]
    InvalidQuantity(&'static str),

    /// A configuration parameter is out of range.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(&'static str),

    /// Arithmetic overflow.
    #[error("arithmetic overflow: {0}")]
    Overflow(&'static str),

    /// Arithmetic underflow.
    #[error("arithmetic underflow: {0}")]
    Underflow(&'static str),

    /// Division by zero.
    #[error("division by zero")]
    DivisionByZero,
}

/// Convenience alias used throughout the crate.
pub type Result<T> = core::result::Result<T, AmmError>;
