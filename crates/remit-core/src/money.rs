//! Precision-safe money type.
//!
//! Uses `rust_decimal` for exact decimal arithmetic, avoiding
//! floating-point rounding errors in fee calculations.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Sub};

/// US dollar amount with exact decimal precision.
///
/// Wraps `Decimal` to provide type safety and prevent mixing
/// money with raw rates in calculations. Displayed values are
/// rounded to cents with `from_exact`; raw rates stay unrounded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Usd(pub Decimal);

impl Usd {
    pub const ZERO: Self = Self(Decimal::ZERO);

    #[inline]
    pub fn new(value: Decimal) -> Self {
        Self(value)
    }

    /// Round an exact intermediate value to cents (half-up).
    ///
    /// This is the single rounding point for displayed amounts:
    /// fees and savings are computed unrounded, then pass through
    /// here exactly once.
    #[inline]
    pub fn from_exact(value: Decimal) -> Self {
        Self(value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero))
    }

    #[inline]
    pub fn inner(&self) -> Decimal {
        self.0
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    #[inline]
    pub fn is_negative(&self) -> bool {
        self.0.is_sign_negative() && !self.0.is_zero()
    }
}

impl fmt::Display for Usd {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${:.2}", self.0)
    }
}

impl From<Decimal> for Usd {
    fn from(d: Decimal) -> Self {
        Self(d)
    }
}

impl Add for Usd {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl Sub for Usd {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_from_exact_rounds_half_up() {
        assert_eq!(Usd::from_exact(dec!(1.005)).inner(), dec!(1.01));
        assert_eq!(Usd::from_exact(dec!(1.004)).inner(), dec!(1.00));
        assert_eq!(Usd::from_exact(dec!(79.995)).inner(), dec!(80.00));
    }

    #[test]
    fn test_display_always_two_decimals() {
        assert_eq!(Usd::from_exact(dec!(5)).to_string(), "$5.00");
        assert_eq!(Usd::from_exact(dec!(80)).to_string(), "$80.00");
        assert_eq!(Usd::new(dec!(0.5)).to_string(), "$0.50");
    }

    #[test]
    fn test_arithmetic() {
        let baseline = Usd::new(dec!(80));
        let own = Usd::new(dec!(5));
        assert_eq!((baseline - own).inner(), dec!(75));
        assert!(!(baseline - own).is_negative());
    }
}
