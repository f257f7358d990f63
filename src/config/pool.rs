//! Configuration for the taxed-pair constant-product pool.

use crate::domain::{Account, BasisPoints, FeeTier, Shares};
use crate::error::AmmError;

/// Shares minted to [`Account::LIQUIDITY_LOCK`] on the first deposit.
pub const MINIMUM_LIQUIDITY: Shares = Shares::new(1_000);

/// Configuration for a [`Pool`](crate::pool::Pool).
///
/// # Defaults
///
/// - swap fee: [`FeeTier::TIER_1_00_PERCENT`]
/// - minimum liquidity: [`MINIMUM_LIQUIDITY`]
/// - lock account: [`Account::LIQUIDITY_LOCK`]
///
/// # Validation
///
/// - The fee must be strictly below 100%.
/// - The minimum liquidity must be non-zero.
/// - The lock account must differ from the pool account.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PoolConfig {
    pool_account: Account,
    swap_fee: FeeTier,
    minimum_liquidity: Shares,
    lock_account: Account,
}

impl PoolConfig {
    /// Creates a new `PoolConfig`.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidConfiguration`] if any invariant fails.
    pub fn new(
        pool_account: Account,
        swap_fee: FeeTier,
        minimum_liquidity: Shares,
        lock_account: Account,
    ) -> Result<Self, AmmError> {
        let config = Self {
            pool_account,
            swap_fee,
            minimum_liquidity,
            lock_account,
        };
        config.validate()?;
        Ok(config)
    }

    /// Creates a config with the default fee, minimum and lock account.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidConfiguration`] if `pool_account` is the
    /// lock account.
    pub fn with_defaults(pool_account: Account) -> Result<Self, AmmError> {
        Self::new(
            pool_account,
            FeeTier::default(),
            MINIMUM_LIQUIDITY,
            Account::LIQUIDITY_LOCK,
        )
    }

    /// Validates all configuration invariants.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidConfiguration`] describing the first
    /// violated invariant.
    pub fn validate(&self) -> Result<(), AmmError> {
        if self.swap_fee.basis_points() >= BasisPoints::MAX_PERCENT {
            return Err(AmmError::InvalidConfiguration("swap fee must be below 100%"));
        }
        if self.minimum_liquidity.is_zero() {
            return Err(AmmError::InvalidConfiguration(
                "minimum liquidity must be positive",
            ));
        }
        if self.lock_account == self.pool_account {
            return Err(AmmError::InvalidConfiguration(
                "lock account must differ from the pool account",
            ));
        }
        Ok(())
    }

    /// Returns the account holding the pool's assets.
    #[must_use]
    pub const fn pool_account(&self) -> Account {
        self.pool_account
    }

    /// Returns the swap fee.
    #[must_use]
    pub const fn swap_fee(&self) -> FeeTier {
        self.swap_fee
    }

    /// Returns the permanently locked share amount.
    #[must_use]
    pub const fn minimum_liquidity(&self) -> Shares {
        self.minimum_liquidity
    }

    /// Returns the holder of the locked shares.
    #[must_use]
    pub const fn lock_account(&self) -> Account {
        self.lock_account
    }
}
