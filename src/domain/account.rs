//! Ledger account identifiers.

use core::fmt;

use alloy_primitives::Address;

/// An account on any of the three ledgers (native value, taxed token, pool
/// shares).
///
/// Wraps a 20-byte [`Address`]. Every address is a valid account; the pool,
/// the router, the treasury and the liquidity lock are ordinary accounts
/// distinguished only by configuration.
///
/// # Examples
///
/// ```
/// use taxpair_amm::domain::Account;
///
/// let alice = Account::from_byte(0xa1);
/// assert_ne!(alice, Account::LIQUIDITY_LOCK);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Account(Address);

impl Account {
    /// Unspendable holder of the permanently locked minimum liquidity
    /// (`0x…0001`).
    pub const LIQUIDITY_LOCK: Self = Self(Address::with_last_byte(1));

    /// Wraps an address.
    #[must_use]
    pub const fn new(address: Address) -> Self {
        Self(address)
    }

    /// Account whose address is all zeros except for the last byte.
    ///
    /// Convenient for fixtures and demos.
    #[must_use]
    pub const fn from_byte(last: u8) -> Self {
        Self(Address::with_last_byte(last))
    }

    /// Returns the underlying address.
    #[must_use]
    pub const fn address(&self) -> Address {
        self.0
    }
}

impl From<Address> for Account {
    fn from(address: Address) -> Self {
        Self(address)
    }
}

impl fmt::Display for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
