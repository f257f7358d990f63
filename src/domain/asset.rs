//! The two assets held by the pool.

use core::fmt;

/// Identifies one side of the reserve pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Asset {
    /// The plain native-value asset. Transfers are never taxed but a
    /// recipient may refuse them.
    Native,
    /// The ledger-tracked token. Transfers may deliver less than was sent.
    Token,
}

impl Asset {
    /// Returns the opposite side of the pair.
    #[must_use]
    pub const fn other(&self) -> Self {
        match self {
            Self::Native => Self::Token,
            Self::Token => Self::Native,
        }
    }
}

impl fmt::Display for Asset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Native => f.write_str("native"),
            Self::Token => f.write_str("token"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn other_flips() {
        assert_eq!(Asset::Native.other(), Asset::Token);
        assert_eq!(Asset::Token.other().other(), Asset::Token);
    }

    #[test]
    fn display() {
        assert_eq!(Asset::Native.to_string(), "native");
        assert_eq!(Asset::Token.to_string(), "token");
    }
}
