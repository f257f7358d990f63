//! Property-based tests using `proptest` for pool and router invariants.
//!
//! 1. **Invariant non-decrease**: `reserve_n · reserve_t` never drops across
//!    a sequence of swaps, taxed or not.
//! 2. **Proportional withdrawal**: burning `s` shares pays at least
//!    `floor(s · R / T)` of each asset and never dilutes remaining holders.
//! 3. **Matching symmetry**: matching a native goal to tokens and back
//!    returns the goal within one unit.
//! 4. **Slippage rejection**: a swap bounded one unit below its quote fails
//!    and leaves every balance, reserve and event untouched.

use proptest::prelude::*;

use crate::config::{PoolConfig, TaxPolicy};
use crate::domain::{Account, Amount, Asset, BasisPoints, Shares};
use crate::error::AmmError;
use crate::exchange::Exchange;
use crate::ledger::{NativeLedger, TaxedToken};
use crate::pool::Pool;
use crate::router::{Router, match_liquidity};
use crate::traits::{Allowances, AssetLedger, FromConfig};

// ---------------------------------------------------------------------------
// Shared helpers
// ---------------------------------------------------------------------------

const POOL: Account = Account::from_byte(0x50);
const ROUTER: Account = Account::from_byte(0x60);
const LP: Account = Account::from_byte(0xa1);
const TRADER: Account = Account::from_byte(0xb2);
const TREASURY: Account = Account::from_byte(0x7e);
const FUNDS: u128 = 1 << 100;

fn seeded(native: u128, token: u128, taxed: bool) -> (Exchange, Router) {
    let Ok(cfg) = PoolConfig::with_defaults(POOL) else {
        panic!("valid config");
    };
    let Ok(pool) = Pool::from_config(&cfg) else {
        panic!("valid pool");
    };
    let ledger = TaxedToken::new(TaxPolicy::with_default_rate(TREASURY, taxed));
    let mut ex = Exchange::new(pool, NativeLedger::new(), ledger);
    let router = Router::new(ROUTER);

    for account in [LP, TRADER] {
        let Ok(()) = ex.native_mut().credit(&account, Amount::new(FUNDS)) else {
            panic!("credit failed");
        };
        let Ok(()) = ex.token_mut().mint_to(&account, Amount::new(FUNDS)) else {
            panic!("mint_to failed");
        };
        ex.approve_token(&account, &ROUTER, Amount::MAX);
    }
    let Ok(()) = ex.native_mut().credit(&POOL, Amount::new(native)) else {
        panic!("credit failed");
    };
    let Ok(()) = ex.token_mut().mint_to(&POOL, Amount::new(token)) else {
        panic!("mint_to failed");
    };
    let Ok(_) = ex.mint(&LP) else {
        panic!("seed mint failed");
    };
    (ex, router)
}

fn fraction(value: u128, bps: u128) -> u128 {
    (value * bps / 10_000).max(1)
}

// ---------------------------------------------------------------------------
// Custom strategies
// ---------------------------------------------------------------------------

/// Reserve values in [10_000, 10_000_000].
fn reserve_strategy() -> impl Strategy<Value = u128> {
    10_000u128..=10_000_000u128
}

/// Trade size as basis points of the input reserve.
fn trade_bps_strategy() -> impl Strategy<Value = u128> {
    1u128..=5_000u128
}

// ---------------------------------------------------------------------------
// Property 1: Invariant non-decrease
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_reserve_product_never_decreases(
        rn in reserve_strategy(),
        rt in reserve_strategy(),
        taxed in any::<bool>(),
        trades in prop::collection::vec((any::<bool>(), trade_bps_strategy()), 1..8),
    ) {
        let (mut ex, router) = seeded(rn, rt, taxed);

        for (sell_native, bps) in trades {
            let before = ex.pool().reserves();
            let (asset_in, reserve_in) = if sell_native {
                (Asset::Native, before.native)
            } else {
                (Asset::Token, before.token)
            };
            let amount_in = Amount::new(fraction(reserve_in.get(), bps));
            let value = if sell_native { amount_in } else { Amount::ZERO };
            let Ok(_) = router.swap_exact_input(&mut ex, &TRADER, asset_in, amount_in, Amount::ZERO, value)
            else {
                prop_assert_eq!(ex.pool().reserves(), before);
                continue;
            };
            prop_assert!(
                ex.pool().reserves().product() >= before.product(),
                "product fell from {} to {}",
                before.product(),
                ex.pool().reserves().product()
            );
        }
    }
}

// ---------------------------------------------------------------------------
// Property 2: Proportional withdrawal
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_burn_is_proportional_and_non_diluting(
        rn in reserve_strategy(),
        rt in reserve_strategy(),
        burn_bps in 1u128..=10_000u128,
    ) {
        let (mut ex, router) = seeded(rn, rt, false);
        let held = ex.pool().share_balance(&LP).get();
        let shares = Shares::new(fraction(held, burn_bps).min(held));
        let before = ex.pool().reserves();
        let total = ex.pool().total_shares().get();

        ex.approve_shares(&LP, &ROUTER, shares);
        let Ok(removed) = router.burn_liquidity(&mut ex, &LP, shares) else {
            return Ok(());
        };

        let s = shares.get();
        prop_assert!(removed.native.get() >= s * before.native.get() / total);
        prop_assert!(removed.token.get() >= s * before.token.get() / total);

        let after = ex.pool().reserves();
        let remaining = ex.pool().total_shares().get();
        prop_assert!(remaining >= 1_000);
        // R'/T' >= R/T for both assets
        prop_assert!(after.native.get() * total >= before.native.get() * remaining);
        prop_assert!(after.token.get() * total >= before.token.get() * remaining);
    }
}

// ---------------------------------------------------------------------------
// Property 3: Matching symmetry
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn prop_matching_round_trips_within_one(
        rn in reserve_strategy(),
        ratio in 1u128..=50u128,
        goal in 1u128..=1_000_000u128,
        tax_bps in prop_oneof![Just(0u32), Just(200u32), 1u32..=2_500u32],
    ) {
        let (reserve_n, reserve_t) = (Amount::new(rn), Amount::new(rn * ratio));
        let total = Shares::new(rn);
        let tax = BasisPoints::new(tax_bps);

        let Ok(token) = match_liquidity(Amount::new(goal), reserve_n, reserve_t, total, tax, Asset::Native)
        else {
            return Err(TestCaseError::fail("native-goal match failed"));
        };
        let Ok(back) = match_liquidity(token, reserve_t, reserve_n, total, tax, Asset::Token) else {
            return Err(TestCaseError::fail("token-goal match failed"));
        };
        prop_assert!(back.get().abs_diff(goal) <= 1, "goal {} came back as {}", goal, back);
    }
}

// ---------------------------------------------------------------------------
// Property 4: Slippage rejection
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_slippage_rejection_changes_nothing(
        rn in reserve_strategy(),
        rt in reserve_strategy(),
        out_bps in 1u128..=5_000u128,
        taxed in any::<bool>(),
    ) {
        let (mut ex, router) = seeded(rn, rt, taxed);
        let out = Amount::new(fraction(rt, out_bps) / 2 + 1);
        let Ok(quote) = router.quote_exact_output(&ex, Asset::Token, out) else {
            return Ok(());
        };

        let reserves = ex.pool().reserves();
        let events = ex.pool().events().len();
        let native = ex.native().balance_of(&TRADER);
        let token = ex.token().balance_of(&TRADER);
        let allowance = ex.token().allowance(&TRADER, &ROUTER);

        let limit = Amount::new(quote.get() - 1);
        let result = router.swap(&mut ex, &TRADER, out, Amount::ZERO, limit, quote);
        prop_assert_eq!(result, Err(AmmError::SlippageExceeded { limit, actual: quote }));
        prop_assert_eq!(ex.pool().reserves(), reserves);
        prop_assert_eq!(ex.pool().events().len(), events);
        prop_assert_eq!(ex.native().balance_of(&TRADER), native);
        prop_assert_eq!(ex.token().balance_of(&TRADER), token);
        prop_assert_eq!(ex.token().allowance(&TRADER, &ROUTER), allowance);

        let Ok(receipt) = router.swap(&mut ex, &TRADER, out, Amount::ZERO, quote, quote) else {
            return Err(TestCaseError::fail("swap at the quoted bound failed"));
        };
        prop_assert_eq!(receipt.amount_out, out);
        prop_assert_eq!(receipt.native_refund, Amount::ZERO);
    }
}
