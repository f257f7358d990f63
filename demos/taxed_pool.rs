//! Taxed-token pool example.
//!
//! Walks a pool pairing a native asset with a token that loses 2% on every
//! transfer: a first deposit, a matched second deposit, an exact-output
//! buy, an exact-input sell, and a withdrawal.  Set `RUST_LOG=debug` to see
//! every ledger movement.
//!
//! # Run
//!
//! ```bash
//! RUST_LOG=info cargo run --example taxed_pool
//! ```

use taxpair_amm::prelude::*;
use tracing_subscriber::EnvFilter;

fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Taxed-token constant-product pool ===\n");

    // ── 1. Accounts, ledgers and the pool ───────────────────────────────
    let pool_account = Account::from_byte(0x50);
    let router = Router::new(Account::from_byte(0x60));
    let treasury = Account::from_byte(0x7e);
    let alice = Account::from_byte(0xa1);
    let bob = Account::from_byte(0xb0);

    let pool = Pool::from_config(&PoolConfig::with_defaults(pool_account)?)?;
    let token = TaxedToken::from_config(&TaxPolicy::with_default_rate(treasury, true))?;
    let mut ex = Exchange::new(pool, NativeLedger::new(), token);

    for account in [alice, bob] {
        ex.native_mut().credit(&account, Amount::new(10_000_000))?;
        ex.token_mut().mint_to(&account, Amount::new(1_000_000))?;
        ex.approve_token(&account, &router.account(), Amount::MAX);
    }
    println!("Swap fee:     {}", ex.pool().config().swap_fee());
    println!("Transfer tax: {}", ex.token().transfer_tax());

    // ── 2. First deposit sets the price ─────────────────────────────────
    let token_goal = gross_up(Amount::new(120_000), ex.token().transfer_tax())?;
    let added = router.add_liquidity(&mut ex, &alice, token_goal, Amount::new(30_000))?;
    println!("\n--- Alice seeds the pool ---");
    println!("  Tokens sent:     {}", added.token_sent);
    println!("  Tokens arrived:  {}", added.token_received);
    println!("  Shares minted:   {}", added.shares);
    println!("  Reserves:        {}", ex.pool().reserves());

    // ── 3. Matched deposit from the native side ─────────────────────────
    let matched = router.quote_matching(&ex, Amount::new(1_000), Asset::Native)?;
    let added = router.add_liquidity(&mut ex, &bob, Amount::ZERO, Amount::new(1_000))?;
    println!("\n--- Bob adds 1000 native ---");
    println!("  Quoted tokens:   {matched}");
    println!("  Tokens arrived:  {}", added.token_received);
    println!("  Shares minted:   {}", added.shares);

    // ── 4. Exact-output buy ─────────────────────────────────────────────
    let want = Amount::new(5_000);
    let cost = router.quote_exact_output(&ex, Asset::Token, want)?;
    let receipt = router.swap(&mut ex, &bob, want, Amount::ZERO, cost, Amount::new(cost.get() + 100))?;
    println!("\n--- Bob buys {want} tokens net ---");
    println!("  Native paid:     {}", receipt.amount_in);
    println!("  Tokens netted:   {}", receipt.amount_out);
    println!("  Native refunded: {}", receipt.native_refund);

    // ── 5. Exact-input sell ─────────────────────────────────────────────
    let receipt = router.swap_exact_input(
        &mut ex,
        &bob,
        Asset::Token,
        Amount::new(2_000),
        Amount::new(1),
        Amount::ZERO,
    )?;
    println!("\n--- Bob sells 2000 tokens ---");
    println!("  Native received: {}", receipt.amount_out);

    // ── 6. A bound that is too tight is refused and changes nothing ─────
    let before = ex.pool().reserves();
    let tight = Amount::new(cost.get() / 2);
    match router.swap(&mut ex, &bob, want, Amount::ZERO, tight, tight) {
        Err(err) => println!("\nTight swap refused: {err}"),
        Ok(_) => println!("\nTight swap unexpectedly filled"),
    }
    assert_eq!(ex.pool().reserves(), before);

    // ── 7. Alice withdraws half her shares ──────────────────────────────
    let half = Shares::new(ex.pool().share_balance(&alice).get() / 2);
    ex.approve_shares(&alice, &router.account(), half);
    let removed = router.burn_liquidity(&mut ex, &alice, half)?;
    println!("\n--- Alice burns {half} shares ---");
    println!("  Native received: {}", removed.native);
    println!("  Tokens received: {}", removed.token);

    // ── 8. Final state ──────────────────────────────────────────────────
    println!("\nReserves:         {}", ex.pool().reserves());
    println!("Total shares:     {}", ex.pool().total_shares());
    println!("Treasury tokens:  {}", ex.token().balance_of(&treasury));
    println!("Events recorded:  {}", ex.pool().events().len());

    Ok(())
}
