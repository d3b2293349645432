//! Fee comparison calculator.
//!
//! Computes one quote per service plus the savings delta between
//! the product's own rate and the designated baseline competitor.
//! Internal math stays unrounded; only the presentation values
//! (`fee_amount`, `savings`) are rounded to cents, half-up, once.

use crate::table::{RateTable, SpeedClass};
use remit_core::{CoreError, TransferAmount, Usd};
use rust_decimal::Decimal;
use serde::Serialize;

/// Fee quote for one service at one amount.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FeeQuote {
    /// Service display name.
    pub service_name: String,
    /// Exact rate the fee was computed from (unrounded).
    pub rate: Decimal,
    /// Fee at the quoted amount, rounded to cents.
    pub fee_amount: Usd,
    /// Settlement speed class.
    pub speed_class: SpeedClass,
    /// Ordered marketing feature strings.
    pub features: Vec<String>,
    /// Whether this is the recommended service.
    pub recommended: bool,
}

impl FeeQuote {
    /// Rate as a display percentage (0.005 -> 0.5).
    pub fn rate_percent(&self) -> Decimal {
        (self.rate * Decimal::from(100)).normalize()
    }
}

/// Full comparison output for one amount.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FeeComparison {
    /// Quoted amount.
    pub amount: TransferAmount,
    /// One quote per service, in table order.
    pub quotes: Vec<FeeQuote>,
    /// Baseline fee minus own fee, rounded to cents. Non-negative
    /// for any validated table.
    pub savings: Usd,
}

impl FeeComparison {
    /// Quote for the recommended service.
    pub fn own(&self) -> &FeeQuote {
        self.quotes
            .iter()
            .find(|q| q.recommended)
            .expect("comparison built from a validated table")
    }
}

/// Deterministic fee comparator over a validated rate table.
#[derive(Debug, Clone)]
pub struct FeeComparator {
    table: RateTable,
}

impl FeeComparator {
    pub fn new(table: RateTable) -> Self {
        Self { table }
    }

    pub fn table(&self) -> &RateTable {
        &self.table
    }

    /// Compare fees for an in-domain amount.
    ///
    /// Pure: no clock, no network, same amount -> identical output.
    pub fn compare(&self, amount: TransferAmount) -> FeeComparison {
        let value = amount.as_decimal();

        let quotes = self
            .table
            .services()
            .iter()
            .map(|service| FeeQuote {
                service_name: service.name.clone(),
                rate: service.rate,
                fee_amount: Usd::from_exact(value * service.rate),
                speed_class: service.speed_class,
                features: service.features.clone(),
                recommended: service.recommended,
            })
            .collect();

        // Savings from the exact fees, rounded once at the end.
        let exact_savings = value * self.table.baseline().rate - value * self.table.own().rate;

        FeeComparison {
            amount,
            quotes,
            savings: Usd::from_exact(exact_savings),
        }
    }

    /// Validate a raw amount, then compare.
    ///
    /// Rejects out-of-domain values with `AmountOutOfRange` rather
    /// than silently computing.
    pub fn compare_amount(&self, raw: i64) -> Result<FeeComparison, CoreError> {
        TransferAmount::new(raw).map(|amount| self.compare(amount))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RateTableConfig;
    use rust_decimal_macros::dec;

    fn comparator() -> FeeComparator {
        let table = RateTable::try_from(RateTableConfig::default()).unwrap();
        FeeComparator::new(table)
    }

    #[test]
    fn test_reference_amount() {
        let comparison = comparator().compare_amount(1_000).unwrap();

        assert_eq!(comparison.own().fee_amount.inner(), dec!(5.00));

        let baseline = comparison
            .quotes
            .iter()
            .find(|q| q.service_name == "Western Union")
            .unwrap();
        assert_eq!(baseline.fee_amount.inner(), dec!(80.00));

        let moneygram = comparison
            .quotes
            .iter()
            .find(|q| q.service_name == "MoneyGram")
            .unwrap();
        assert_eq!(moneygram.fee_amount.inner(), dec!(75.00));

        assert_eq!(comparison.savings.inner(), dec!(75.00));
    }

    #[test]
    fn test_fee_grid_matches_rounded_product() {
        let comparator = comparator();
        for raw in (100..=10_000).step_by(100) {
            let comparison = comparator.compare_amount(raw).unwrap();
            for quote in &comparison.quotes {
                let expected = Usd::from_exact(Decimal::from(raw) * quote.rate);
                assert_eq!(quote.fee_amount, expected, "amount {raw}");
            }
        }
    }

    #[test]
    fn test_savings_non_negative_across_domain() {
        let comparator = comparator();
        for raw in (100..=10_000).step_by(100) {
            let comparison = comparator.compare_amount(raw).unwrap();
            assert!(!comparison.savings.is_negative(), "amount {raw}");
        }
    }

    #[test]
    fn test_out_of_domain_rejected() {
        let comparator = comparator();
        assert!(matches!(
            comparator.compare_amount(50),
            Err(CoreError::AmountOutOfRange { value: 50, .. })
        ));
        assert!(matches!(
            comparator.compare_amount(10_001),
            Err(CoreError::AmountOutOfRange { value: 10_001, .. })
        ));
    }

    #[test]
    fn test_deterministic() {
        let comparator = comparator();
        let a = comparator.compare_amount(4_200).unwrap();
        let b = comparator.compare_amount(4_200).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_quotes_keep_table_order() {
        let comparison = comparator().compare_amount(1_000).unwrap();
        let names: Vec<_> = comparison
            .quotes
            .iter()
            .map(|q| q.service_name.as_str())
            .collect();
        assert_eq!(names, ["RemitAbeg", "Western Union", "MoneyGram"]);
    }
}
