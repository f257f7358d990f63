//! # Taxpair AMM
//!
//! Constant-product liquidity pool pairing a native asset with a token
//! whose transfers may be taxed, plus a router that quotes deposits and
//! swaps against it and handles custody around every pool call.
//!
//! The pool never trusts declared amounts.  Callers move assets into the
//! pool account first; the pool diffs its own balances against its
//! recorded reserves to learn what actually arrived, which is the only
//! correct reading when the token loses a tax in transit.
//!
//! ## Deposit and swap through the router
//!
//! ```rust
//! use taxpair_amm::prelude::*;
//!
//! # fn main() -> taxpair_amm::error::Result<()> {
//! let (pool_acct, router_acct) = (Account::from_byte(0x50), Account::from_byte(0x60));
//! let (alice, treasury) = (Account::from_byte(0xa1), Account::from_byte(0x7e));
//!
//! let pool = Pool::from_config(&PoolConfig::with_defaults(pool_acct)?)?;
//! let token = TaxedToken::from_config(&TaxPolicy::with_default_rate(treasury, true))?;
//! let mut ex = Exchange::new(pool, NativeLedger::new(), token);
//! ex.native_mut().credit(&alice, Amount::new(5_000_000))?;
//! ex.token_mut().mint_to(&alice, Amount::new(1_000_000))?;
//!
//! let router = Router::new(router_acct);
//! ex.approve_token(&alice, &router.account(), Amount::new(1_000_000));
//!
//! // First deposit sets the ratio: 30 000 native against what arrives of
//! // 122 449 tokens after the 2% tax.
//! let added = router.add_liquidity(&mut ex, &alice, Amount::new(122_449), Amount::new(30_000))?;
//! assert_eq!(added.token_received, Amount::new(120_001));
//!
//! // Buy exactly 1 000 tokens net of tax, paying at most 400 native.
//! let receipt = router.swap(&mut ex, &alice, Amount::new(1_000), Amount::ZERO, Amount::new(400), Amount::new(400))?;
//! assert_eq!(receipt.amount_out, Amount::new(1_000));
//! # Ok(())
//! # }
//! ```
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐
//! │    Router    │  quotes (match_liquidity, swap_amount) + custody + refunds
//! └──────┬───────┘
//!        │ Exchange::transact (all-or-nothing)
//!        ▼
//! ┌──────────────┐
//! │     Pool     │  balance-diff mint / burn / swap, invariant check
//! └──────┬───────┘
//!        │ AssetLedger + Allowances
//!        ▼
//! ┌──────────────┐
//! │   Ledgers    │  NativeLedger (untaxed), TaxedToken (transfer tax)
//! └──────────────┘
//! ```
//!
//! # Module Guide
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`domain`] | Value types: [`Amount`](domain::Amount), [`Shares`](domain::Shares), [`Account`](domain::Account), events and receipts |
//! | [`math`] | Checked arithmetic, 256-bit `mul_div`, square root, tax gross-up |
//! | [`config`] | [`PoolConfig`](config::PoolConfig) and [`TaxPolicy`](config::TaxPolicy) |
//! | [`traits`] | [`AssetLedger`](traits::AssetLedger), [`Allowances`](traits::Allowances), [`FromConfig`](traits::FromConfig) |
//! | [`ledger`] | In-memory native and taxed-token ledgers |
//! | [`pool`] | [`Pool`](pool::Pool) and its [`ShareLedger`](pool::ShareLedger) |
//! | [`exchange`] | [`Exchange`](exchange::Exchange), the transactional state owner |
//! | [`router`] | Pure quotes and the [`Router`](router::Router) |
//! | [`error`] | [`AmmError`](error::AmmError) unified error enum |
//! | [`prelude`] | Convenience re-exports |

pub mod config;
pub mod domain;
pub mod error;
pub mod exchange;
pub mod ledger;
pub mod math;
pub mod pool;
pub mod prelude;
pub mod router;
pub mod traits;
