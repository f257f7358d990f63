//! Raw asset quantity with checked arithmetic.

use core::fmt;

use alloy_primitives::U256;

/// A quantity of either pool asset in its smallest unit (wei or the token's
/// base unit).
///
/// `Amount` never interprets decimals.  Arithmetic is checked and returns
/// `None` instead of panicking; products of two amounts that may exceed
/// `u128` go through [`mul_div`](crate::math::mul_div) in 256-bit precision.
///
/// # Examples
///
/// ```
/// use taxpair_amm::domain::Amount;
///
/// let reserve = Amount::new(30_000);
/// assert_eq!(reserve.checked_sub(&Amount::new(1_000)), Some(Amount::new(29_000)));
/// assert_eq!(reserve.checked_add(&Amount::MAX), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[must_use]
pub struct Amount(u128);

impl Amount {
    /// Zero amount.
    pub const ZERO: Self = Self(0);

    /// Maximum representable amount.
    pub const MAX: Self = Self(u128::MAX);

    /// Creates a new `Amount` from a raw `u128` value.
    pub const fn new(value: u128) -> Self {
        Self(value)
    }

    /// Returns the underlying `u128` value.
    #[must_use]
    pub const fn get(&self) -> u128 {
        self.0
    }

    /// Returns `true` if the amount is zero.
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Widens to 256 bits for overflow-free products.
    #[must_use]
    pub fn to_u256(&self) -> U256 {
        U256::from(self.0)
    }

    /// Narrows a 256-bit value back to an `Amount`, or `None` if it does
    /// not fit in `u128`.
    #[must_use]
    pub fn from_u256(value: U256) -> Option<Self> {
        u128::try_from(value).ok().map(Self)
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

    /// Subtraction clamped at zero.
    ///
    /// Only used where a shortfall is a legitimate "nothing arrived" reading,
    /// such as inferring swap input from a balance diff.
    pub const fn saturating_sub(&self, other: &Self) -> Self {
        Self(self.0.saturating_sub(other.0))
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u128> for Amount {
    fn from(value: u128) -> Self {
        Self(value)
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn new_and_get() {
        assert_eq!(Amount::new(42).get(), 42);
        assert!(Amount::ZERO.is_zero());
        assert!(!Amount::new(1).is_zero());
    }

    #[test]
    fn add_and_sub() {
        let a = Amount::new(300);
        let b = Amount::new(100);
        assert_eq!(a.checked_add(&b), Some(Amount::new(400)));
        assert_eq!(a.checked_sub(&b), Some(Amount::new(200)));
        assert_eq!(b.checked_sub(&a), None);
        assert_eq!(Amount::MAX.checked_add(&Amount::new(1)), None);
    }

    #[test]
    fn saturating_sub_clamps() {
        assert_eq!(
            Amount::new(5).saturating_sub(&Amount::new(9)),
            Amount::ZERO
        );
        assert_eq!(
            Amount::new(9).saturating_sub(&Amount::new(5)),
            Amount::new(4)
        );
    }

    #[test]
    fn u256_round_trip_and_narrowing() {
        let a = Amount::new(123_456_789);
        assert_eq!(Amount::from_u256(a.to_u256()), Some(a));

        let too_big = U256::from(u128::MAX) + U256::from(1u8);
        assert_eq!(Amount::from_u256(too_big), None);
    }

    #[test]
    fn display() {
        assert_eq!(Amount::new(1_000_000).to_string(), "1000000");
    }
}
