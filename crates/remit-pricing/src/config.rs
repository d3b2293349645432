//! Rate table configuration.
//!
//! Deserializable mirror of `RateTable`; the defaults ship the
//! production comparison set (RemitAbeg vs. Western Union and
//! MoneyGram).

use crate::error::Result;
use crate::table::{RateTable, ServiceRate, SpeedClass};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// One configurable service entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceRateConfig {
    /// Service display name.
    pub name: String,
    /// Flat fee rate as a fraction, e.g. "0.005" for 0.5%.
    pub rate: Decimal,
    /// Settlement speed class ("instant" or "days").
    pub speed: SpeedClass,
    /// Marketing feature strings, in display order.
    #[serde(default)]
    pub features: Vec<String>,
    /// Marks the product's own service. Exactly one entry may set this.
    #[serde(default)]
    pub recommended: bool,
}

/// Configurable rate table with a designated baseline competitor.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RateTableConfig {
    /// Name of the baseline service savings are computed against.
    pub baseline: String,
    /// Service entries, in display order.
    pub services: Vec<ServiceRateConfig>,
}

impl Default for RateTableConfig {
    fn default() -> Self {
        Self {
            baseline: "Western Union".to_string(),
            services: vec![
                ServiceRateConfig {
                    name: "RemitAbeg".to_string(),
                    rate: dec!(0.005),
                    speed: SpeedClass::Instant,
                    features: vec![
                        "Instant settlement".to_string(),
                        "Transparent fees".to_string(),
                        "No hidden charges".to_string(),
                        "Blockchain secured".to_string(),
                    ],
                    recommended: true,
                },
                ServiceRateConfig {
                    name: "Western Union".to_string(),
                    rate: dec!(0.08),
                    speed: SpeedClass::Days,
                    features: vec![
                        "Traditional service".to_string(),
                        "Physical locations".to_string(),
                        "Higher fees".to_string(),
                        "Slower processing".to_string(),
                    ],
                    recommended: false,
                },
                ServiceRateConfig {
                    name: "MoneyGram".to_string(),
                    rate: dec!(0.075),
                    speed: SpeedClass::Days,
                    features: vec![
                        "Traditional service".to_string(),
                        "Physical locations".to_string(),
                        "High fees".to_string(),
                        "Slower processing".to_string(),
                    ],
                    recommended: false,
                },
            ],
        }
    }
}

impl TryFrom<RateTableConfig> for RateTable {
    type Error = crate::error::PricingError;

    fn try_from(config: RateTableConfig) -> Result<RateTable> {
        let services = config
            .services
            .into_iter()
            .map(|s| ServiceRate {
                name: s.name,
                rate: s.rate,
                speed_class: s.speed,
                features: s.features,
                recommended: s.recommended,
            })
            .collect();
        RateTable::new(services, config.baseline)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_default_table_validates() {
        let table = RateTable::try_from(RateTableConfig::default()).unwrap();
        assert_eq!(table.services().len(), 3);
        assert_eq!(table.own().name, "RemitAbeg");
        assert_eq!(table.baseline().name, "Western Union");
    }

    #[test]
    fn test_toml_round_trip() {
        let toml_src = r#"
            baseline = "Western Union"

            [[services]]
            name = "RemitAbeg"
            rate = "0.005"
            speed = "instant"
            recommended = true

            [[services]]
            name = "Western Union"
            rate = "0.08"
            speed = "days"
        "#;

        let config: RateTableConfig = toml::from_str(toml_src).unwrap();
        let table = RateTable::try_from(config).unwrap();
        assert_eq!(table.own().rate, dec!(0.005));
        assert_eq!(table.baseline().rate, dec!(0.08));
    }
}
