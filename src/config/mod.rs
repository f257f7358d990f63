//! Configuration structs for the pool and the taxed token ledger.
//!
//! Both follow the same shape: a validating `new`, a public `validate`, and
//! `const` accessors. Instances are turned into live components through
//! [`FromConfig`](crate::traits::FromConfig).

mod pool;
mod tax;

pub use pool::{MINIMUM_LIQUIDITY, PoolConfig};
pub use tax::{DEFAULT_TAX_RATE, TaxPolicy};
