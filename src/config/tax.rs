//! Transfer-tax policy for the token ledger.

use crate::domain::{Account, BasisPoints};
use crate::error::AmmError;

/// Default transfer tax: 2%.
pub const DEFAULT_TAX_RATE: BasisPoints = BasisPoints::new(200);

/// How the token ledger taxes transfers.
///
/// When `enabled`, every transfer delivers `amount − floor(amount × rate /
/// 10 000)` to the recipient and credits the difference to `treasury`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaxPolicy {
    rate: BasisPoints,
    treasury: Account,
    enabled: bool,
}

impl TaxPolicy {
    /// Creates a new `TaxPolicy`.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidConfiguration`] if `rate` is 100% or more.
    pub fn new(rate: BasisPoints, treasury: Account, enabled: bool) -> Result<Self, AmmError> {
        let policy = Self {
            rate,
            treasury,
            enabled,
        };
        policy.validate()?;
        Ok(policy)
    }

    /// A 2% policy paying `treasury`, enabled or not.
    #[must_use]
    pub const fn with_default_rate(treasury: Account, enabled: bool) -> Self {
        Self {
            rate: DEFAULT_TAX_RATE,
            treasury,
            enabled,
        }
    }

    /// A policy that never taxes.
    #[must_use]
    pub const fn untaxed(treasury: Account) -> Self {
        Self {
            rate: BasisPoints::ZERO,
            treasury,
            enabled: false,
        }
    }

    /// Validates the rate.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidConfiguration`] if the rate is 100% or
    /// more.
    pub fn validate(&self) -> Result<(), AmmError> {
        if self.rate >= BasisPoints::MAX_PERCENT {
            return Err(AmmError::InvalidConfiguration(
                "transfer tax must be below 100%",
            ));
        }
        Ok(())
    }

    /// Returns the configured rate, regardless of whether it is enabled.
    #[must_use]
    pub const fn rate(&self) -> BasisPoints {
        self.rate
    }

    /// Returns the rate currently charged: the configured rate when enabled,
    /// zero otherwise.
    #[must_use]
    pub const fn effective_rate(&self) -> BasisPoints {
        if self.enabled {
            self.rate
        } else {
            BasisPoints::ZERO
        }
    }

    /// Returns the account collecting the tax.
    #[must_use]
    pub const fn treasury(&self) -> Account {
        self.treasury
    }

    /// Returns `true` if transfers are currently taxed.
    #[must_use]
    pub const fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub(crate) const fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    pub(crate) fn set_rate(&mut self, rate: BasisPoints) -> Result<(), AmmError> {
        let candidate = Self { rate, ..*self };
        candidate.validate()?;
        *self = candidate;
        Ok(())
    }
}
