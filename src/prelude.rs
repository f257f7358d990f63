//! Convenience re-exports for common types and traits.
//!
//! ```rust
//! use taxpair_amm::prelude::*;
//! ```

pub use crate::config::{MINIMUM_LIQUIDITY, PoolConfig, TaxPolicy};
pub use crate::domain::{
    Account, Amount, Asset, BasisPoints, FeeTier, LiquidityAdded, LiquidityRemoved, PoolEvent,
    ReservePair, Rounding, Shares, SwapReceipt,
};
pub use crate::error::{AmmError, Result};
pub use crate::exchange::Exchange;
pub use crate::ledger::{NativeLedger, TaxedToken};
pub use crate::math::{CheckedArithmetic, gross_up, net_of_tax};
pub use crate::pool::Pool;
pub use crate::router::{Router, match_liquidity, swap_amount, swap_output};
pub use crate::traits::{Allowances, AssetLedger, FromConfig};
