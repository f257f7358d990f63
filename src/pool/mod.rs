//! The reserve pool and its share ledger.

mod constant_product;
mod share_ledger;

pub use constant_product::Pool;
pub use share_ledger::ShareLedger;

#[cfg(test)]
#[allow(clippy::panic)]
mod proptest_properties;
