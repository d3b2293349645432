//! Declarative rate table.
//!
//! Maps each remittance service to a flat percentage rate, speed
//! class, and marketing feature list. The table is open for
//! extension: adding a service never touches the comparison
//! algorithm.

use crate::error::{PricingError, Result};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Settlement speed class for a service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SpeedClass {
    /// Settles in minutes.
    Instant,
    /// Settles in days.
    Days,
}

impl fmt::Display for SpeedClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Instant => write!(f, "< 2 minutes"),
            Self::Days => write!(f, "1-3 days"),
        }
    }
}

/// One service entry in the rate table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceRate {
    /// Service display name (e.g. "Western Union").
    pub name: String,
    /// Flat fee rate as a fraction (0.005 = 0.5%). Stored unrounded.
    pub rate: Decimal,
    /// Settlement speed class.
    pub speed_class: SpeedClass,
    /// Ordered marketing feature strings.
    pub features: Vec<String>,
    /// Whether this is the product's own (recommended) service.
    pub recommended: bool,
}

impl ServiceRate {
    /// Rate as a display percentage (0.005 -> 0.5).
    pub fn rate_percent(&self) -> Decimal {
        (self.rate * Decimal::from(100)).normalize()
    }
}

/// Validated rate table with one designated baseline competitor.
///
/// Invariants enforced at construction:
/// - non-empty, every rate within (0, 1)
/// - exactly one recommended service
/// - baseline present, with a rate strictly above the recommended
///   rate (keeps savings non-negative across the whole domain)
#[derive(Debug, Clone)]
pub struct RateTable {
    services: Vec<ServiceRate>,
    baseline: String,
}

impl RateTable {
    /// Validate and build a rate table.
    pub fn new(services: Vec<ServiceRate>, baseline: impl Into<String>) -> Result<Self> {
        let baseline = baseline.into();

        if services.is_empty() {
            return Err(PricingError::EmptyTable);
        }
        for service in &services {
            if service.rate <= Decimal::ZERO || service.rate >= Decimal::ONE {
                return Err(PricingError::InvalidRate {
                    service: service.name.clone(),
                    rate: service.rate,
                });
            }
        }

        let mut recommended = services.iter().filter(|s| s.recommended);
        let own = recommended.next().ok_or(PricingError::MissingRecommended)?;
        if recommended.next().is_some() {
            return Err(PricingError::MultipleRecommended);
        }

        let baseline_entry = services
            .iter()
            .find(|s| s.name == baseline)
            .ok_or_else(|| PricingError::MissingBaseline(baseline.clone()))?;

        if own.rate >= baseline_entry.rate {
            return Err(PricingError::RateInversion {
                own: own.rate,
                baseline: baseline_entry.rate,
            });
        }

        Ok(Self { services, baseline })
    }

    /// All services, in declaration order.
    pub fn services(&self) -> &[ServiceRate] {
        &self.services
    }

    /// The product's own (recommended) service.
    pub fn own(&self) -> &ServiceRate {
        // Validated at construction: exactly one recommended entry.
        self.services
            .iter()
            .find(|s| s.recommended)
            .expect("validated table has a recommended service")
    }

    /// The designated baseline competitor.
    pub fn baseline(&self) -> &ServiceRate {
        // Validated at construction: baseline is present.
        self.services
            .iter()
            .find(|s| s.name == self.baseline)
            .expect("validated table contains the baseline service")
    }
}
