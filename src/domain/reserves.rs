//! Recorded reserve pair.

use core::fmt;

use alloy_primitives::U256;

use super::{Amount, Asset};

/// The pool's last-recorded balance of each asset.
///
/// Reserves only change when the pool syncs them to its observed balances
/// at the end of a mint, burn or swap.
///
/// # Examples
///
/// ```
/// use taxpair_amm::domain::{Amount, Asset, ReservePair};
///
/// let r = ReservePair::new(Amount::new(30_000), Amount::new(120_000));
/// assert_eq!(r.get(Asset::Token), Amount::new(120_000));
/// assert_eq!(r.product().to::<u128>(), 3_600_000_000);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ReservePair {
    /// Reserve of the native asset.
    pub native: Amount,
    /// Reserve of the taxed token.
    pub token: Amount,
}

impl ReservePair {
    /// Empty reserves.
    pub const EMPTY: Self = Self {
        native: Amount::ZERO,
        token: Amount::ZERO,
    };

    /// Creates a reserve pair.
    pub const fn new(native: Amount, token: Amount) -> Self {
        Self { native, token }
    }

    /// Returns the reserve of `asset`.
    pub const fn get(&self, asset: Asset) -> Amount {
        match asset {
            Asset::Native => self.native,
            Asset::Token => self.token,
        }
    }

    /// `native × token` without overflow.
    #[must_use]
    pub fn product(&self) -> U256 {
        crate::math::wide_product(self.native, self.token)
    }

    /// Returns `true` if both reserves are zero.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.native.is_zero() && self.token.is_zero()
    }

    /// Returns `true` if either reserve is zero.
    #[must_use]
    pub const fn has_zero_side(&self) -> bool {
        self.native.is_zero() || self.token.is_zero()
    }
}

impl fmt::Display for ReservePair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(native {}, token {})", self.native, self.token)
    }
}
