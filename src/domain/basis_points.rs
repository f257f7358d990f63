//! Basis-point rates shared by the swap fee and the transfer tax.

use core::fmt;

use super::{Amount, Rounding};
use crate::error::Result;
use crate::math::mul_div;

/// Denominator of every basis-point rate (10 000 bp = 100%).
pub const BPS_DENOMINATOR: u32 = 10_000;

/// A rate expressed in basis points (1 bp = 0.01%).
///
/// Used both for the pool's swap fee and for the token ledger's transfer
/// tax.  Values above 10 000 are representable but meaningless as a rate;
/// configuration validation rejects them.
///
/// # Examples
///
/// ```
/// use taxpair_amm::domain::{Amount, BasisPoints, Rounding};
///
/// let tax = BasisPoints::new(200); // 2%
/// assert_eq!(tax.apply(Amount::new(1_000), Rounding::Down).ok(), Some(Amount::new(20)));
/// assert_eq!(tax.complement().map(|c| c.get()), Some(9_800));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct BasisPoints(u32);

impl BasisPoints {
    /// 0%.
    pub const ZERO: Self = Self(0);

    /// 100%.
    pub const MAX_PERCENT: Self = Self(BPS_DENOMINATOR);

    /// Creates a new rate from raw basis points.
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Returns the raw basis points.
    #[must_use]
    pub const fn get(&self) -> u32 {
        self.0
    }

    /// Returns `true` for a zero rate.
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Returns `true` if the rate lies in `0..=10_000`.
    #[must_use]
    pub const fn is_valid_percent(&self) -> bool {
        self.0 <= BPS_DENOMINATOR
    }

    /// Returns `10_000 - self`, or `None` if the rate exceeds 100%.
    #[must_use]
    pub const fn complement(&self) -> Option<Self> {
        match BPS_DENOMINATOR.checked_sub(self.0) {
            Some(v) => Some(Self(v)),
            None => None,
        }
    }

    /// Computes `amount × self / 10_000` with explicit rounding.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::Overflow`](crate::error::AmmError::Overflow) if
    /// the result does not fit in an [`Amount`].
    pub fn apply(&self, amount: Amount, rounding: Rounding) -> Result<Amount> {
        mul_div(
            amount,
            Amount::new(u128::from(self.0)),
            Amount::new(u128::from(BPS_DENOMINATOR)),
            rounding,
        )
    }
}

impl fmt::Display for BasisPoints {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}bp", self.0)
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn constants_and_validity() {
        assert_eq!(BasisPoints::MAX_PERCENT.get(), 10_000);
        assert!(BasisPoints::ZERO.is_zero());
        assert!(BasisPoints::new(10_000).is_valid_percent());
        assert!(!BasisPoints::new(10_001).is_valid_percent());
    }

    #[test]
    fn complement_of_two_percent() {
        assert_eq!(BasisPoints::new(200).complement(), Some(BasisPoints::new(9_800)));
        assert_eq!(BasisPoints::new(10_001).complement(), None);
    }

    #[test]
    fn apply_rounds_as_requested() {
        let rate = BasisPoints::new(200);
        let Ok(down) = rate.apply(Amount::new(149), Rounding::Down) else {
            panic!("expected Ok");
        };
        let Ok(up) = rate.apply(Amount::new(149), Rounding::Up) else {
            panic!("expected Ok");
        };
        // 149 * 200 / 10_000 = 2.98
        assert_eq!(down, Amount::new(2));
        assert_eq!(up, Amount::new(3));
    }

    #[test]
    fn apply_does_not_overflow_on_max_amount() {
        let Ok(all) = BasisPoints::MAX_PERCENT.apply(Amount::MAX, Rounding::Down) else {
            panic!("expected Ok");
        };
        assert_eq!(all, Amount::MAX);
    }

    #[test]
    fn display() {
        assert_eq!(BasisPoints::new(30).to_string(), "30bp");
    }
}
