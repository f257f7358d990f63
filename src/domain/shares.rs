//! Pool share units.

use core::fmt;

use alloy_primitives::U256;

use super::Amount;

/// Fungible units of proportional claim on the pool's reserve pair.
///
/// Kept distinct from [`Amount`] so a share count can never be passed where
/// an asset quantity is expected.  All `u128` values are valid.
///
/// # Examples
///
/// ```
/// use taxpair_amm::domain::Shares;
///
/// let minted = Shares::new(59_000);
/// let locked = Shares::new(1_000);
/// assert_eq!(minted.checked_add(&locked), Some(Shares::new(60_000)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Shares(u128);

impl Shares {
    /// No shares.
    pub const ZERO: Self = Self(0);

    /// Creates a new `Shares` value.
    pub const fn new(value: u128) -> Self {
        Self(value)
    }

    /// Returns the underlying `u128` value.
    #[must_use]
    pub const fn get(&self) -> u128 {
        self.0
    }

    /// Returns `true` if zero.
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Widens to 256 bits.
    #[must_use]
    pub fn to_u256(&self) -> U256 {
        U256::from(self.0)
    }

    /// Reinterprets the share count as an amount for mixed-unit ratios.
    pub const fn as_amount(&self) -> Amount {
        Amount::new(self.0)
    }

    /// Checked addition. Returns `None` on overflow.
    #[must_use]
    pub const fn checked_add(&self, other: &Self) -> Option<Self> {
        match self.0.checked_add(other.0) {
            Some(v) => Some(Self(v)),
            None => None,
        }
    }

    /// Checked subtraction. Returns `None` on underflow.
    #[must_use]
    pub const fn checked_sub(&self, other: &Self) -> Option<Self> {
        match self.0.checked_sub(other.0) {
            Some(v) => Some(Self(v)),
            None => None,
        }
    }
}

impl fmt::Display for Shares {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arithmetic() {
        let a = Shares::new(300);
        let b = Shares::new(100);
        assert_eq!(a.checked_sub(&b), Some(Shares::new(200)));
        assert_eq!(b.checked_sub(&a), None);
        assert_eq!(Shares::new(u128::MAX).checked_add(&Shares::new(1)), None);
    }

    #[test]
    fn zero_and_default() {
        assert!(Shares::ZERO.is_zero());
        assert_eq!(Shares::default(), Shares::ZERO);
    }

    #[test]
    fn as_amount_keeps_value() {
        assert_eq!(Shares::new(77).as_amount(), Amount::new(77));
    }
}
