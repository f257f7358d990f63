//! In-memory ledgers for the two pool assets.
//!
//! [`NativeLedger`] is the untaxed native value; [`TaxedToken`] is the
//! allowance-based token whose transfers may deliver less than was sent.

mod native;
mod taxed;

pub use native::NativeLedger;
pub use taxed::TaxedToken;
