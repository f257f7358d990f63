//! Quoting and custody layer in front of the pool.
//!
//! The free functions ([`match_liquidity`], [`swap_amount`],
//! [`swap_output`]) are pure arithmetic over explicit reserves.  [`Router`]
//! reads live state from an [`Exchange`](crate::exchange::Exchange), moves
//! the caller's assets around the pool call, and refunds excess native
//! value, all inside one transaction.

mod orchestrator;
mod quote;

pub use crate::math::gross_up;
pub use orchestrator::Router;
pub use quote::{match_liquidity, swap_amount, swap_output};
