//! 256-bit intermediate arithmetic.
//!
//! Reserve products of 18-decimal balances overflow `u128`, so every
//! `a × b / d` ratio and the initial-share square root are computed in
//! [`U256`] and narrowed back with an explicit overflow error.

use alloy_primitives::U256;

use crate::domain::{Amount, Rounding};
use crate::error::{AmmError, Result};

/// Computes `a × b / d` in 256-bit precision.
///
/// # Errors
///
/// - [`AmmError::DivisionByZero`] if `d` is zero.
/// - [`AmmError::Overflow`] if the quotient does not fit in an [`Amount`].
///
/// # Examples
///
/// ```
/// use taxpair_amm::domain::{Amount, Rounding};
/// use taxpair_amm::math::mul_div;
///
/// let e18 = 1_000_000_000_000_000_000u128;
/// let r = mul_div(
///     Amount::new(100 * e18),
///     Amount::new(10_000),
///     Amount::new(9_800),
///     Rounding::Down,
/// );
/// assert_eq!(r.ok(), Some(Amount::new(102_040_816_326_530_612_244)));
/// ```
pub fn mul_div(a: Amount, b: Amount, d: Amount, rounding: Rounding) -> Result<Amount> {
    if d.is_zero() {
        return Err(AmmError::DivisionByZero);
    }
    let num = a.to_u256() * b.to_u256();
    let den = d.to_u256();
    let (q, r) = num.div_rem(den);
    let q = if rounding.is_up() && !r.is_zero() {
        q + U256::from(1u8)
    } else {
        q
    };
    Amount::from_u256(q).ok_or(AmmError::Overflow("mul_div result exceeds u128"))
}

/// Integer square root (floor) by Newton's method.
#[must_use]
pub fn isqrt(n: U256) -> U256 {
    if n < U256::from(2u8) {
        return n;
    }
    let two = U256::from(2u8);
    let mut x = n;
    let mut y = (x + U256::from(1u8)) / two;
    while y < x {
        x = y;
        y = (x + n / x) / two;
    }
    x
}

/// Returns `floor(sqrt(a × b))`, the geometric mean of two reserves.
///
/// # Errors
///
/// Returns [`AmmError::Overflow`] if the root does not fit in `u128`
/// (impossible for `u128` inputs, kept for a uniform signature).
pub fn sqrt_product(a: Amount, b: Amount) -> Result<u128> {
    let root = isqrt(wide_product(a, b));
    u128::try_from(root).map_err(|_| AmmError::Overflow("square root exceeds u128"))
}

/// Returns `a × b` as a 256-bit value.
#[must_use]
pub fn wide_product(a: Amount, b: Amount) -> U256 {
    a.to_u256() * b.to_u256()
}
