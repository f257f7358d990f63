//! Transfer-tax arithmetic.
//!
//! A ledger taxing at rate `r` delivers `net(g) = g − floor(g·r / 10⁴)` for
//! a gross transfer `g`. `net` is non-decreasing in `g` and grows by at most
//! one per unit, so every net amount has a minimal gross amount.

use super::mul_div;
use crate::domain::{Amount, BPS_DENOMINATOR, BasisPoints, Rounding};
use crate::error::{AmmError, Result};

/// Amount delivered when `gross` is sent under a `rate` tax.
///
/// # Errors
///
/// Returns [`AmmError::InvalidQuantity`] if `rate` exceeds 100%.
pub fn net_of_tax(gross: Amount, rate: BasisPoints) -> Result<Amount> {
    if !rate.is_valid_percent() {
        return Err(AmmError::InvalidQuantity("tax rate exceeds 100%"));
    }
    let tax = rate.apply(gross, Rounding::Down)?;
    // tax <= gross for any rate <= 100%
    Ok(gross.saturating_sub(&tax))
}

/// Smallest gross transfer that delivers at least `net` under a `rate` tax.
///
/// With a zero rate this is `net` itself. For a 2% tax, `gross_up(100e18)`
/// is `floor(100e18 · 100 / 98)`.
///
/// # Errors
///
/// - [`AmmError::InvalidQuantity`] if `rate` is 100% or more (nothing is
///   ever delivered).
/// - [`AmmError::Overflow`] if the gross amount does not fit.
///
/// # Examples
///
/// ```
/// use taxpair_amm::domain::{Amount, BasisPoints};
/// use taxpair_amm::math::{gross_up, net_of_tax};
///
/// let tax = BasisPoints::new(200);
/// // 99 − floor(99 · 2%) = 98, while 98 would only deliver 97.
/// assert_eq!(gross_up(Amount::new(98), tax).ok(), Some(Amount::new(99)));
/// assert_eq!(net_of_tax(Amount::new(99), tax).ok(), Some(Amount::new(98)));
/// ```
pub fn gross_up(net: Amount, rate: BasisPoints) -> Result<Amount> {
    if rate.is_zero() || net.is_zero() {
        return Ok(net);
    }
    let Some(kept) = rate.complement().filter(|c| !c.is_zero()) else {
        return Err(AmmError::InvalidQuantity("tax rate must be below 100%"));
    };
    // net(g) >= net  <=>  g·(10⁴ − r) > (net − 1)·10⁴
    let below = mul_div(
        Amount::new(net.get() - 1),
        Amount::new(u128::from(BPS_DENOMINATOR)),
        Amount::new(u128::from(kept.get())),
        Rounding::Down,
    )?;
    below
        .checked_add(&Amount::new(1))
        .ok_or(AmmError::Overflow("gross-up exceeds u128"))
}
