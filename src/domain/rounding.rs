//! Explicit rounding direction for integer division.

/// Rounding direction for every division in the crate.
///
/// The pool and router always round against the party being paid:
/// amounts paid out and shares minted round [`Down`](Self::Down), amounts a
/// caller must supply round [`Up`](Self::Up).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rounding {
    /// Round towards positive infinity (ceiling).
    Up,
    /// Round towards zero (floor).
    Down,
}

impl Rounding {
    /// Returns `true` if this is [`Rounding::Up`].
    #[must_use]
    pub const fn is_up(&self) -> bool {
        matches!(self, Self::Up)
    }
}
