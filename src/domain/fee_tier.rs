//! Swap fee tiers built on [`BasisPoints`].

use core::fmt;

use super::BasisPoints;

/// Fee charged by the pool on swap input, wrapping [`BasisPoints`].
///
/// The fee never leaves the pool: it is retained in the reserves, which is
/// what makes the reserve product grow across swaps.
///
/// # Examples
///
/// ```
/// use taxpair_amm::domain::FeeTier;
///
/// let tier = FeeTier::TIER_1_00_PERCENT;
/// assert_eq!(tier.basis_points().get(), 100);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FeeTier(BasisPoints);

impl FeeTier {
    /// Fee-free pool; the invariant check reduces to the plain product.
    pub const ZERO: Self = Self(BasisPoints::ZERO);

    /// 1.00% fee (100 bp), the pool default.
    pub const TIER_1_00_PERCENT: Self = Self(BasisPoints::new(100));

    /// Creates a new `FeeTier` from arbitrary [`BasisPoints`].
    pub const fn new(basis_points: BasisPoints) -> Self {
        Self(basis_points)
    }

    /// Returns the underlying [`BasisPoints`].
    #[must_use]
    pub const fn basis_points(&self) -> BasisPoints {
        self.0
    }

    /// Raw fee basis points widened for arithmetic.
    #[must_use]
    pub const fn bps(&self) -> u128 {
        self.0.get() as u128
    }
}

impl Default for FeeTier {
    fn default() -> Self {
        Self::TIER_1_00_PERCENT
    }
}

impl fmt::Display for FeeTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FeeTier({})", self.0)
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn presets() {
        assert_eq!(FeeTier::ZERO.bps(), 0);
        assert_eq!(FeeTier::new(BasisPoints::new(30)).bps(), 30);
        assert_eq!(FeeTier::default(), FeeTier::TIER_1_00_PERCENT);
    }

    #[test]
    fn display() {
        assert_eq!(FeeTier::TIER_1_00_PERCENT.to_string(), "FeeTier(100bp)");
    }
}
