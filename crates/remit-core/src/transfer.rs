//! Bounded transfer amount.
//!
//! The fee calculator accepts whole-dollar amounts on a fixed grid:
//! domain [100, 10000], step 100. Out-of-domain values are rejected
//! at construction; presentation callers clamp first.

use crate::error::{CoreError, Result};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Transfer amount in whole US dollars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TransferAmount(i64);

impl TransferAmount {
    /// Smallest accepted amount.
    pub const MIN: Self = Self(100);
    /// Largest accepted amount.
    pub const MAX: Self = Self(10_000);
    /// Slider step.
    pub const STEP: i64 = 100;

    /// Validate a raw amount against the domain.
    ///
    /// Rejects values outside [100, 10000]. This is a programming
    /// contract: UI callers clamp via [`TransferAmount::clamped`]
    /// before invoking the calculator.
    pub fn new(value: i64) -> Result<Self> {
        if !(Self::MIN.0..=Self::MAX.0).contains(&value) {
            return Err(CoreError::AmountOutOfRange {
                value,
                min: Self::MIN.0,
                max: Self::MAX.0,
            });
        }
        Ok(Self(value))
    }

    /// Clamp a raw amount into the domain and snap it to the step grid.
    ///
    /// Never fails; this is the entry point for slider/CLI input.
    pub fn clamped(value: i64) -> Self {
        let clamped = value.clamp(Self::MIN.0, Self::MAX.0);
        let snapped = ((clamped + Self::STEP / 2) / Self::STEP) * Self::STEP;
        Self(snapped.clamp(Self::MIN.0, Self::MAX.0))
    }

    #[inline]
    pub fn get(&self) -> i64 {
        self.0
    }

    #[inline]
    pub fn as_decimal(&self) -> Decimal {
        Decimal::from(self.0)
    }
}

impl fmt::Display for TransferAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_domain_bounds() {
        assert!(TransferAmount::new(100).is_ok());
        assert!(TransferAmount::new(10_000).is_ok());
        assert!(matches!(
            TransferAmount::new(50),
            Err(CoreError::AmountOutOfRange { value: 50, .. })
        ));
        assert!(matches!(
            TransferAmount::new(10_001),
            Err(CoreError::AmountOutOfRange { value: 10_001, .. })
        ));
    }

    #[test]
    fn test_clamped_snaps_to_grid() {
        assert_eq!(TransferAmount::clamped(50).get(), 100);
        assert_eq!(TransferAmount::clamped(120_000).get(), 10_000);
        assert_eq!(TransferAmount::clamped(1_049).get(), 1_000);
        assert_eq!(TransferAmount::clamped(1_050).get(), 1_100);
        assert_eq!(TransferAmount::clamped(9_999).get(), 10_000);
    }

    #[test]
    fn test_display() {
        assert_eq!(TransferAmount::clamped(1_000).to_string(), "$1000");
    }
}
