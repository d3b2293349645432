//! Balance display states.
//!
//! A displayed balance always corresponds to the current session's
//! address; the observer discards results that arrive for a stale
//! address.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Resolved token balance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenBalance {
    /// Balance amount in the token's native unit.
    pub amount: Decimal,
    /// Token symbol (e.g. "MATIC", "USDC").
    pub symbol: String,
}

impl TokenBalance {
    pub fn new(amount: Decimal, symbol: impl Into<String>) -> Self {
        Self {
            amount,
            symbol: symbol.into(),
        }
    }
}

impl fmt::Display for TokenBalance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.4} {}", self.amount, self.symbol)
    }
}

/// Balance display state for the current session address.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "lowercase")]
pub enum Balance {
    /// No balance known (disconnected, or the query failed).
    #[default]
    Unknown,
    /// A query for the current address is in flight.
    Pending,
    /// Query resolved for the current address.
    Resolved(TokenBalance),
}

impl Balance {
    #[inline]
    pub fn is_resolved(&self) -> bool {
        matches!(self, Self::Resolved(_))
    }

    #[inline]
    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Pending)
    }

    /// Resolved balance, if any.
    pub fn resolved(&self) -> Option<&TokenBalance> {
        match self {
            Self::Resolved(balance) => Some(balance),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_display_four_decimals() {
        let balance = TokenBalance::new(dec!(12.34567), "MATIC");
        assert_eq!(balance.to_string(), "12.3457 MATIC");

        let whole = TokenBalance::new(dec!(3), "ETH");
        assert_eq!(whole.to_string(), "3.0000 ETH");
    }

    #[test]
    fn test_default_is_unknown() {
        let balance = Balance::default();
        assert!(!balance.is_resolved());
        assert!(!balance.is_pending());
        assert!(balance.resolved().is_none());
    }
}
