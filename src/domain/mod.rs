//! Value types shared by the pool, the router and the ledgers.
//!
//! Quantities are newtypes over `u128` ([`Amount`], [`Shares`]) so an asset
//! amount can never be confused with a share count. Rates are
//! [`BasisPoints`]; every division names its [`Rounding`].

mod account;
mod amount;
mod asset;
mod basis_points;
mod events;
mod fee_tier;
mod receipts;
mod reserves;
mod rounding;
mod shares;

pub use account::Account;
pub use amount::Amount;
pub use asset::Asset;
pub use basis_points::{BPS_DENOMINATOR, BasisPoints};
pub use events::{BurnOutcome, MintOutcome, PoolEvent, SwapOutcome};
pub use fee_tier::FeeTier;
pub use receipts::{LiquidityAdded, LiquidityRemoved, SwapReceipt};
pub use reserves::ReservePair;
pub use rounding::Rounding;
pub use shares::Shares;
