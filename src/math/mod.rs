//! Arithmetic utilities for pool and router calculations.
//!
//! [`CheckedArithmetic`] gives overflow-safe operations on domain wrappers,
//! the wide helpers ([`mul_div`], [`isqrt`], [`sqrt_product`]) carry reserve
//! products through 256-bit intermediates, and [`gross_up`] /
//! [`net_of_tax`] model a taxed transfer.

mod checked;
mod tax;
mod wide;

pub use checked::CheckedArithmetic;
pub use tax::{gross_up, net_of_tax};
pub use wide::{isqrt, mul_div, sqrt_product, wide_product};
