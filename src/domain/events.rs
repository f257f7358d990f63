//! Pool events and the outcomes they record.

use core::fmt;

use super::{Account, Amount, ReservePair, Shares};

/// Result of a pool deposit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MintOutcome {
    /// Share recipient.
    pub to: Account,
    /// Native amount observed by balance diff.
    pub native_in: Amount,
    /// Token amount observed by balance diff (already net of tax).
    pub token_in: Amount,
    /// Shares credited to `to`.
    pub shares: Shares,
}

/// Result of a pool withdrawal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BurnOutcome {
    /// Asset recipient.
    pub to: Account,
    /// Shares redeemed.
    pub shares: Shares,
    /// Native amount paid out.
    pub native_out: Amount,
    /// Token amount sent by the pool (the recipient may net less).
    pub token_out: Amount,
}

/// Result of a pool swap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SwapOutcome {
    /// Output recipient.
    pub to: Account,
    /// Native input inferred from the balance diff.
    pub native_in: Amount,
    /// Token input inferred from the balance diff.
    pub token_in: Amount,
    /// Native amount paid out.
    pub native_out: Amount,
    /// Token amount sent by the pool.
    pub token_out: Amount,
}

/// Economically meaningful pool state change, appended to the pool's log.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PoolEvent {
    /// Shares minted against a deposit.
    Mint(MintOutcome),
    /// Shares burned and assets withdrawn.
    Burn(BurnOutcome),
    /// Assets exchanged.
    Swap(SwapOutcome),
    /// Reserves resynchronized to observed balances.
    Sync(ReservePair),
}

impl fmt::Display for PoolEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Mint(m) => write!(
                f,
                "Mint(to {}, native {}, token {}, shares {})",
                m.to, m.native_in, m.token_in, m.shares
            ),
            Self::Burn(b) => write!(
                f,
                "Burn(to {}, shares {}, native {}, token {})",
                b.to, b.shares, b.native_out, b.token_out
            ),
            Self::Swap(s) => write!(
                f,
                "Swap(to {}, in {}/{}, out {}/{})",
                s.to, s.native_in, s.token_in, s.native_out, s.token_out
            ),
            Self::Sync(r) => write!(f, "Sync{r}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sync_display_shows_reserves() {
        let e = PoolEvent::Sync(ReservePair::new(Amount::new(3), Amount::new(4)));
        assert_eq!(e.to_string(), "Sync(native 3, token 4)");
    }

    #[test]
    fn mint_display_mentions_shares() {
        let e = PoolEvent::Mint(MintOutcome {
            to: Account::from_byte(9),
            native_in: Amount::new(10),
            token_in: Amount::new(40),
            shares: Shares::new(20),
        });
        assert!(e.to_string().contains("shares 20"));
    }
}
