//! Pure quoting: deposit matching and swap pricing.
//!
//! Nothing here touches state.  Amounts a caller must supply round up,
//! amounts a caller receives round down.

use alloy_primitives::U256;
use tracing::debug;

use crate::domain::{Amount, Asset, BPS_DENOMINATOR, BasisPoints, FeeTier, Rounding, Shares};
use crate::error::{AmmError, Result};
use crate::math::{gross_up, mul_div, net_of_tax};

/// Amount of the other asset that matches a `goal` deposit at the current
/// reserve ratio.
///
/// - `goal_asset` names the asset `goal` is denominated in;
///   `reserve_goal` / `reserve_other` are the reserves of that asset and of
///   the other one.
/// - With no shares outstanding the caller sets the ratio and `goal` is
///   returned unchanged.
/// - Token goal: `goal` is what the caller sends, so the pool only sees
///   `net(goal)`; the native match is `ceil(net(goal) · rN / rT)`.
/// - Native goal: the pool must *receive* `ceil(goal · rT / rN)` tokens, so
///   the returned send amount is grossed up by `tax`.
///
/// # Errors
///
/// - [`AmmError::ZeroReserve`] if either reserve is zero while shares are
///   outstanding.
/// - Tax and overflow errors from the underlying arithmetic.
///
/// # Examples
///
/// ```
/// use taxpair_amm::domain::{Amount, Asset, BasisPoints, Shares};
/// use taxpair_amm::router::match_liquidity;
///
/// // reserves: 30 000 native, 120 000 token
/// let native = match_liquidity(
///     Amount::new(4_000),
///     Amount::new(120_000),
///     Amount::new(30_000),
///     Shares::new(60_000),
///     BasisPoints::ZERO,
///     Asset::Token,
/// );
/// assert_eq!(native.ok(), Some(Amount::new(1_000)));
/// ```
pub fn match_liquidity(
    goal: Amount,
    reserve_goal: Amount,
    reserve_other: Amount,
    total: Shares,
    tax: BasisPoints,
    goal_asset: Asset,
) -> Result<Amount> {
    if total.is_zero() {
        return Ok(goal);
    }
    if reserve_goal.is_zero() || reserve_other.is_zero() {
        return Err(AmmError::ZeroReserve);
    }
    let matched = match goal_asset {
        Asset::Token => {
            let arriving = net_of_tax(goal, tax)?;
            mul_div(arriving, reserve_other, reserve_goal, Rounding::Up)?
        }
        Asset::Native => {
            let needed = mul_div(goal, reserve_other, reserve_goal, Rounding::Up)?;
            gross_up(needed, tax)?
        }
    };
    debug!(goal = goal.get(), %goal_asset, matched = matched.get(), "matched liquidity");
    Ok(matched)
}

/// Input the pool must receive to pay out `amount_out`.
///
/// `ceil(reserve_in · out · 10⁴ / ((reserve_out − out) · (10⁴ − fee)))`,
/// which is `ceil(reserve_in · out / (reserve_out − out))` for a zero fee.
///
/// # Errors
///
/// - [`AmmError::InsufficientReserve`] if `amount_out >= reserve_out`.
/// - [`AmmError::InvalidQuantity`] if the fee is 100% or more.
/// - [`AmmError::Overflow`] if the input does not fit in an [`Amount`].
///
/// # Examples
///
/// ```
/// use taxpair_amm::domain::{Amount, FeeTier};
/// use taxpair_amm::router::swap_amount;
///
/// let input = swap_amount(
///     Amount::new(118_800),
///     Amount::new(120_000),
///     Amount::new(30_000),
///     FeeTier::TIER_1_00_PERCENT,
/// );
/// assert_eq!(input.ok(), Some(Amount::new(3_000_000)));
/// ```
pub fn swap_amount(
    amount_out: Amount,
    reserve_out: Amount,
    reserve_in: Amount,
    fee: FeeTier,
) -> Result<Amount> {
    if amount_out >= reserve_out {
        return Err(AmmError::InsufficientReserve {
            requested: amount_out,
            reserve: reserve_out,
        });
    }
    let kept = fee_complement(fee)?;
    let scale = U256::from(BPS_DENOMINATOR);
    // amount_out < reserve_out, so the remainder is positive
    let remaining = reserve_out.saturating_sub(&amount_out);
    let numerator = reserve_in.to_u256() * amount_out.to_u256() * scale;
    let denominator = remaining.to_u256() * kept;
    let (q, r) = numerator.div_rem(denominator);
    let q = if r.is_zero() { q } else { q + U256::from(1u8) };
    Amount::from_u256(q).ok_or(AmmError::Overflow("swap input exceeds u128"))
}

/// Output paid for `amount_in` arriving at the pool, after the fee,
/// rounded down.
///
/// # Errors
///
/// - [`AmmError::ZeroReserve`] if either reserve is zero.
/// - [`AmmError::InvalidQuantity`] if the fee is 100% or more.
///
/// # Examples
///
/// ```
/// use taxpair_amm::domain::{Amount, FeeTier};
/// use taxpair_amm::router::swap_output;
///
/// let out = swap_output(Amount::new(30_000), Amount::new(30_000), Amount::new(120_000), FeeTier::ZERO);
/// assert_eq!(out.ok(), Some(Amount::new(60_000)));
/// ```
pub fn swap_output(
    amount_in: Amount,
    reserve_in: Amount,
    reserve_out: Amount,
    fee: FeeTier,
) -> Result<Amount> {
    if reserve_in.is_zero() || reserve_out.is_zero() {
        return Err(AmmError::ZeroReserve);
    }
    let kept = fee_complement(fee)?;
    let in_after_fee = amount_in.to_u256() * kept;
    let numerator = in_after_fee * reserve_out.to_u256();
    let denominator = reserve_in.to_u256() * U256::from(BPS_DENOMINATOR) + in_after_fee;
    Amount::from_u256(numerator / denominator).ok_or(AmmError::Overflow("swap output exceeds u128"))
}

fn fee_complement(fee: FeeTier) -> Result<U256> {
    match fee.basis_points().complement() {
        Some(kept) if !kept.is_zero() => Ok(U256::from(kept.get())),
        _ => Err(AmmError::InvalidQuantity("swap fee must be below 100%")),
    }
}
