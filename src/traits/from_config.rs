//! Construction of live components from validated configuration.
//!
//! [`FromConfig`] gives every configurable component the same entry point:
//!
//! ```text
//! Pool::from_config(&PoolConfig)        -> Result<Pool>
//! TaxedToken::from_config(&TaxPolicy)   -> Result<TaxedToken>
//! ```
//!
//! Implementations re-validate the configuration, so a successfully built
//! component always starts in a legal state.

use crate::error::AmmError;

/// Builds `Self` from a configuration of type `C`.
///
/// There is no blanket implementation; each pairing is explicit.
pub trait FromConfig<C> {
    /// Creates a new instance from `config`.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidConfiguration`] if the configuration is
    /// inconsistent.
    fn from_config(config: &C) -> Result<Self, AmmError>
    where
        Self: Sized;
}
