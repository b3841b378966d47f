//! Tariff configuration - every fee threshold and rate in one place
//!
//! Defaults reproduce the bank's published price list. Any field can be
//! overridden from a JSON file; missing fields keep their default.

use crate::error::{CoreError, CoreResult};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// One row of the deposit commission table.
///
/// A deposit falls in the first rule whose bounds contain it. The fee is
/// `flat + rate * amount`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DepositTierRule {
    /// Inclusive lower bound
    pub min: Decimal,
    /// Upper bound, `None` means unbounded
    #[serde(default)]
    pub max: Option<Decimal>,
    /// Whether `max` itself belongs to this tier
    #[serde(default)]
    pub max_inclusive: bool,
    /// Fixed part of the commission
    #[serde(default)]
    pub flat: Decimal,
    /// Proportional part of the commission
    #[serde(default)]
    pub rate: Decimal,
}

impl DepositTierRule {
    /// Check whether the amount falls within this tier
    pub fn contains(&self, amount: Decimal) -> bool {
        if amount < self.min {
            return false;
        }
        match self.max {
            None => true,
            Some(max) if self.max_inclusive => amount <= max,
            Some(max) => amount < max,
        }
    }

    /// Commission charged on an amount in this tier, `None` on overflow
    pub fn commission(&self, amount: Decimal) -> Option<Decimal> {
        amount.checked_mul(self.rate)?.checked_add(self.flat)
    }
}

/// Fee and rate configuration for every account operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tariff {
    // === Deposits ===
    /// Commission table, evaluated in order
    #[serde(default = "default_deposit_tiers")]
    pub deposit_tiers: Vec<DepositTierRule>,

    /// Cap the deposit commission at the deposited amount
    #[serde(default)]
    pub cap_deposit_commission: bool,

    // === Withdrawals and transfers ===
    /// Flat fee for withdrawals at another bank's ATM
    #[serde(default = "default_external_atm_fee")]
    pub external_atm_fee: Decimal,

    /// Commission rate charged on top of a transfer
    #[serde(default = "default_transfer_rate")]
    pub transfer_rate: Decimal,

    // === Savings ===
    /// Nominal annual interest rate, credited monthly as rate / 12
    #[serde(default = "default_savings_annual_rate")]
    pub savings_annual_rate: Decimal,

    // === Checking ===
    /// Monthly maintenance rate deducted from the balance
    #[serde(default = "default_checking_monthly_rate")]
    pub checking_monthly_rate: Decimal,

    /// Surcharge per issued check
    #[serde(default = "default_check_fee")]
    pub check_fee: Decimal,

    /// Minimum amount required to open a checking account
    #[serde(default = "default_checking_minimum_opening")]
    pub checking_minimum_opening: Decimal,
}

// Default value functions for serde
fn default_deposit_tiers() -> Vec<DepositTierRule> {
    vec![
        DepositTierRule {
            min: Decimal::ZERO,
            max: Some(Decimal::new(500_000, 0)),
            max_inclusive: false,
            flat: Decimal::new(7_000, 0),
            rate: Decimal::ZERO,
        },
        DepositTierRule {
            min: Decimal::new(500_000, 0),
            max: Some(Decimal::new(2_000_000, 0)),
            max_inclusive: false,
            flat: Decimal::new(5_000, 0),
            rate: Decimal::new(2, 2),
        },
        DepositTierRule {
            min: Decimal::new(2_000_000, 0),
            max: Some(Decimal::new(10_000_000, 0)),
            max_inclusive: true,
            flat: Decimal::new(2_000, 0),
            rate: Decimal::new(5, 3),
        },
        DepositTierRule {
            min: Decimal::new(10_000_000, 0),
            max: None,
            max_inclusive: false,
            flat: Decimal::ZERO,
            rate: Decimal::new(33, 3),
        },
    ]
}

fn default_external_atm_fee() -> Decimal {
    Decimal::new(4_500, 0)
}

fn default_transfer_rate() -> Decimal {
    Decimal::new(5, 3) // 0.5%
}

fn default_savings_annual_rate() -> Decimal {
    Decimal::new(22, 3) // 2.2%
}

fn default_checking_monthly_rate() -> Decimal {
    Decimal::new(15, 3) // 1.5%
}

fn default_check_fee() -> Decimal {
    Decimal::new(3_000, 0)
}

fn default_checking_minimum_opening() -> Decimal {
    Decimal::new(200_000, 0)
}

impl Default for Tariff {
    fn default() -> Self {
        Self {
            deposit_tiers: default_deposit_tiers(),
            cap_deposit_commission: false,
            external_atm_fee: default_external_atm_fee(),
            transfer_rate: default_transfer_rate(),
            savings_annual_rate: default_savings_annual_rate(),
            checking_monthly_rate: default_checking_monthly_rate(),
            check_fee: default_check_fee(),
            checking_minimum_opening: default_checking_minimum_opening(),
        }
    }
}

impl Tariff {
    /// Load tariff from JSON file. The loaded tariff must pass [`Tariff::validate`].
    pub fn from_file(path: &Path) -> Result<Self, std::io::Error> {
        let content = std::fs::read_to_string(path)?;
        let tariff: Tariff = serde_json::from_str(&content)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
        tariff
            .validate()
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
        Ok(tariff)
    }

    /// Check that no fee is negative, every rate lies in `[0, 1]` and the
    /// deposit tiers cover `[0, ∞)` without gaps.
    pub fn validate(&self) -> CoreResult<()> {
        let fees = [
            ("external_atm_fee", self.external_atm_fee),
            ("check_fee", self.check_fee),
            ("checking_minimum_opening", self.checking_minimum_opening),
        ];
        for (name, fee) in fees {
            ensure_non_negative(name, fee)?;
        }

        let rates = [
            ("transfer_rate", self.transfer_rate),
            ("savings_annual_rate", self.savings_annual_rate),
            ("checking_monthly_rate", self.checking_monthly_rate),
        ];
        for (name, rate) in rates {
            ensure_rate(name, rate)?;
        }

        let Some(first) = self.deposit_tiers.first() else {
            return Err(invalid("deposit_tiers is empty"));
        };
        if !first.min.is_zero() {
            return Err(invalid(format!(
                "deposit tier 1 must start at 0, starts at {}",
                first.min
            )));
        }

        let mut previous_max = None;
        for (i, tier) in self.deposit_tiers.iter().enumerate() {
            let position = i + 1;
            ensure_non_negative(&format!("deposit tier {} flat", position), tier.flat)?;
            ensure_rate(&format!("deposit tier {} rate", position), tier.rate)?;

            if let Some(max) = previous_max {
                if tier.min != max {
                    return Err(invalid(format!(
                        "deposit tier {} starts at {}, previous tier ends at {}",
                        position, tier.min, max
                    )));
                }
            }
            match tier.max {
                Some(max) if max <= tier.min => {
                    return Err(invalid(format!(
                        "deposit tier {} ends at {}, not above its start {}",
                        position, max, tier.min
                    )));
                }
                Some(max) => previous_max = Some(max),
                None if position < self.deposit_tiers.len() => {
                    return Err(invalid(format!(
                        "deposit tier {} is unbounded but is not the last tier",
                        position
                    )));
                }
                None => previous_max = None,
            }
        }
        if let Some(max) = previous_max {
            return Err(invalid(format!(
                "last deposit tier ends at {}, it must be unbounded",
                max
            )));
        }

        Ok(())
    }

    /// Find the deposit tier for an amount, returning its 1-based index
    pub fn deposit_tier(&self, amount: Decimal) -> Option<(usize, &DepositTierRule)> {
        self.deposit_tiers
            .iter()
            .enumerate()
            .find(|(_, rule)| rule.contains(amount))
            .map(|(i, rule)| (i + 1, rule))
    }

    /// Monthly share of the savings annual rate
    pub fn savings_monthly_rate(&self) -> Decimal {
        self.savings_annual_rate / Decimal::from(12)
    }

    /// Commission charged on top of a transfer amount, `None` on overflow
    pub fn transfer_commission(&self, amount: Decimal) -> Option<Decimal> {
        amount.checked_mul(self.transfer_rate)
    }
}

fn invalid(reason: impl Into<String>) -> CoreError {
    CoreError::InvalidTariff(reason.into())
}

fn ensure_non_negative(name: &str, value: Decimal) -> CoreResult<()> {
    if value < Decimal::ZERO {
        return Err(invalid(format!("{} must not be negative, got {}", name, value)));
    }
    Ok(())
}

fn ensure_rate(name: &str, value: Decimal) -> CoreResult<()> {
    if value < Decimal::ZERO || value > Decimal::ONE {
        return Err(invalid(format!("{} must be between 0 and 1, got {}", name, value)));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use std::io::Write;

    #[test]
    fn test_default_tariff() {
        let tariff = Tariff::default();

        assert_eq!(tariff.deposit_tiers.len(), 4);
        assert_eq!(tariff.external_atm_fee, dec!(4500));
        assert_eq!(tariff.transfer_rate, dec!(0.005));
        assert_eq!(tariff.savings_annual_rate, dec!(0.022));
        assert_eq!(tariff.checking_monthly_rate, dec!(0.015));
        assert_eq!(tariff.check_fee, dec!(3000));
        assert_eq!(tariff.checking_minimum_opening, dec!(200000));
        assert!(!tariff.cap_deposit_commission);
    }

    #[test]
    fn test_deposit_tier_boundaries() {
        let tariff = Tariff::default();

        assert_eq!(tariff.deposit_tier(dec!(499999.99)).map(|t| t.0), Some(1));
        assert_eq!(tariff.deposit_tier(dec!(500000)).map(|t| t.0), Some(2));
        assert_eq!(tariff.deposit_tier(dec!(1999999.99)).map(|t| t.0), Some(2));
        assert_eq!(tariff.deposit_tier(dec!(2000000)).map(|t| t.0), Some(3));
        assert_eq!(tariff.deposit_tier(dec!(10000000)).map(|t| t.0), Some(3));
        assert_eq!(tariff.deposit_tier(dec!(10000000.01)).map(|t| t.0), Some(4));
    }

    #[test]
    fn test_transfer_commission() {
        let tariff = Tariff::default();
        assert_eq!(tariff.transfer_commission(dec!(100000)), Some(dec!(500)));
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let tariff: Tariff =
            serde_json::from_str(r#"{ "check_fee": "2500", "cap_deposit_commission": true }"#)
                .unwrap();

        assert_eq!(tariff.check_fee, dec!(2500));
        assert!(tariff.cap_deposit_commission);
        assert_eq!(tariff.external_atm_fee, dec!(4500));
        assert_eq!(tariff.deposit_tiers, Tariff::default().deposit_tiers);
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "external_atm_fee": "6000" }}"#).unwrap();

        let tariff = Tariff::from_file(file.path()).unwrap();
        assert_eq!(tariff.external_atm_fee, dec!(6000));
    }

    #[test]
    fn test_from_file_rejects_garbage() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();

        let err = Tariff::from_file(file.path()).unwrap_err();
        assert_eq!(err.kind(), std::io::ErrorKind::InvalidData);
    }

    #[test]
    fn test_default_tariff_is_valid() {
        assert_eq!(Tariff::default().validate(), Ok(()));
    }

    #[test]
    fn test_from_file_rejects_invalid_rates_and_fees() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{ "checking_monthly_rate": "2", "external_atm_fee": "-1000" }}"#
        )
        .unwrap();

        let err = Tariff::from_file(file.path()).unwrap_err();
        assert_eq!(err.kind(), std::io::ErrorKind::InvalidData);
        assert!(err.to_string().contains("Invalid tariff"));
    }

    #[test]
    fn test_validate_fees_and_rates() {
        let negative_fee = Tariff {
            external_atm_fee: dec!(-1000),
            ..Tariff::default()
        };
        assert!(matches!(
            negative_fee.validate(),
            Err(CoreError::InvalidTariff(reason)) if reason.contains("external_atm_fee")
        ));

        let rate_above_one = Tariff {
            checking_monthly_rate: dec!(2),
            ..Tariff::default()
        };
        assert!(matches!(
            rate_above_one.validate(),
            Err(CoreError::InvalidTariff(reason)) if reason.contains("checking_monthly_rate")
        ));

        let full_rate = Tariff {
            transfer_rate: dec!(1),
            ..Tariff::default()
        };
        assert_eq!(full_rate.validate(), Ok(()));
    }

    #[test]
    fn test_validate_deposit_tiers() {
        let mut gap = Tariff::default();
        gap.deposit_tiers[1].min = dec!(600000);
        assert!(matches!(
            gap.validate(),
            Err(CoreError::InvalidTariff(reason)) if reason.contains("tier 2 starts at 600000")
        ));

        let mut late_start = Tariff::default();
        late_start.deposit_tiers[0].min = dec!(1);
        assert!(late_start.validate().is_err());

        let mut bounded_last = Tariff::default();
        bounded_last.deposit_tiers[3].max = Some(dec!(50000000));
        assert!(bounded_last.validate().is_err());

        let mut negative_flat = Tariff::default();
        negative_flat.deposit_tiers[0].flat = dec!(-7000);
        assert!(negative_flat.validate().is_err());

        let empty = Tariff {
            deposit_tiers: Vec::new(),
            ..Tariff::default()
        };
        assert!(empty.validate().is_err());

        let single = Tariff {
            deposit_tiers: vec![DepositTierRule {
                min: dec!(0),
                max: None,
                max_inclusive: false,
                flat: dec!(100),
                rate: dec!(0),
            }],
            ..Tariff::default()
        };
        assert_eq!(single.validate(), Ok(()));
    }

    #[test]
    fn test_serialization_roundtrip() {
        let tariff = Tariff::default();
        let json = serde_json::to_string_pretty(&tariff).unwrap();
        assert!(json.contains("checking_minimum_opening"));

        let parsed: Tariff = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, tariff);
    }
}
