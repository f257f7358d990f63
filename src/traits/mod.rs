//! Capability traits at the seams between the pool, the router and the
//! asset ledgers.
//!
//! [`AssetLedger`] is the transferable-asset capability, [`Allowances`]
//! adds pull transfers, and [`FromConfig`] builds components from their
//! configuration.

mod asset_ledger;
mod from_config;

pub use asset_ledger::{Allowances, AssetLedger};
pub use from_config::FromConfig;
