//! Mortgage configuration with its default values

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::amortization::LoanTerms;
use crate::error::Result;

pub const DEFAULT_PRICE: f64 = 500_000.0;
pub const DEFAULT_DOWN_PAYMENT: f64 = 100_000.0;
pub const DEFAULT_INTEREST_RATE: f64 = 0.05;
pub const DEFAULT_TERM_MONTHS: u32 = 360;
pub const DEFAULT_TAX_RATE: f64 = 0.0126;
pub const DEFAULT_INSURANCE_RATE: f64 = 0.0014;
pub const DEFAULT_MORTGAGE_INSURANCE_RATE: f64 = 0.011;
pub const DEFAULT_MORTGAGE_INSURANCE_ENABLED: bool = true;
pub const DEFAULT_MORTGAGE_INSURANCE_THRESHOLD: f64 = 0.2;
pub const DEFAULT_EXTRA_PRINCIPAL: f64 = 0.0;

/// Inputs for a monthly housing payment calculation
///
/// Rates are annual fractions. Missing fields in a deserialized document take
/// the defaults above.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MortgageConfig {
    /// Purchase price of the property
    pub total_price: f64,

    pub down_payment: f64,

    /// Annual interest rate on the loan
    pub interest_rate: f64,

    /// Loan term in months
    pub term_months: u32,

    /// Annual property tax as a fraction of the price
    pub tax_rate: f64,

    /// Annual homeowner's insurance as a fraction of the price
    pub insurance_rate: f64,

    /// Annual mortgage insurance (PMI) as a fraction of the loan amount
    pub mortgage_insurance_rate: f64,

    pub mortgage_insurance_enabled: bool,

    /// PMI applies while down_payment / total_price is strictly below this
    pub mortgage_insurance_threshold: f64,

    /// Extra principal added to every monthly payment
    pub extra_principal: f64,
}

impl Default for MortgageConfig {
    fn default() -> Self {
        Self {
            total_price: DEFAULT_PRICE,
            down_payment: DEFAULT_DOWN_PAYMENT,
            interest_rate: DEFAULT_INTEREST_RATE,
            term_months: DEFAULT_TERM_MONTHS,
            tax_rate: DEFAULT_TAX_RATE,
            insurance_rate: DEFAULT_INSURANCE_RATE,
            mortgage_insurance_rate: DEFAULT_MORTGAGE_INSURANCE_RATE,
            mortgage_insurance_enabled: DEFAULT_MORTGAGE_INSURANCE_ENABLED,
            mortgage_insurance_threshold: DEFAULT_MORTGAGE_INSURANCE_THRESHOLD,
            extra_principal: DEFAULT_EXTRA_PRINCIPAL,
        }
    }
}

impl MortgageConfig {
    /// Parse a configuration from JSON, filling omitted fields with defaults
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a configuration from a JSON file
    pub fn from_json_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    /// Amount financed after the down payment
    pub fn loan_amount(&self) -> f64 {
        self.total_price - self.down_payment
    }

    /// Down payment as a fraction of the purchase price
    pub fn down_payment_percentage(&self) -> f64 {
        self.down_payment / self.total_price
    }

    /// Whether mortgage insurance is charged for this configuration
    pub fn requires_mortgage_insurance(&self) -> bool {
        self.mortgage_insurance_enabled
            && self.down_payment_percentage() < self.mortgage_insurance_threshold
    }

    /// Loan terms handed to the schedule generator
    pub fn loan_terms(&self) -> LoanTerms {
        LoanTerms::new(self.loan_amount(), self.interest_rate, self.term_months)
            .with_extra_principal(self.extra_principal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = MortgageConfig::default();
        assert_eq!(config.total_price, 500_000.0);
        assert_eq!(config.down_payment, 100_000.0);
        assert_eq!(config.interest_rate, 0.05);
        assert_eq!(config.term_months, 360);
        assert_eq!(config.tax_rate, 0.0126);
        assert_eq!(config.insurance_rate, 0.0014);
        assert_eq!(config.mortgage_insurance_rate, 0.011);
        assert!(config.mortgage_insurance_enabled);
        assert_eq!(config.mortgage_insurance_threshold, 0.2);
        assert_eq!(config.extra_principal, 0.0);
        assert_eq!(config.loan_amount(), 400_000.0);
    }

    #[test]
    fn test_partial_json_takes_defaults() {
        let config = MortgageConfig::from_json_str(
            r#"{"total_price": 800000, "down_payment": 160000, "extra_principal": 100}"#,
        )
        .unwrap();

        assert_eq!(config.total_price, 800_000.0);
        assert_eq!(config.extra_principal, 100.0);
        assert_eq!(config.interest_rate, DEFAULT_INTEREST_RATE);
        assert_eq!(config.term_months, DEFAULT_TERM_MONTHS);
    }

    #[test]
    fn test_empty_json_is_default() {
        let config = MortgageConfig::from_json_str("{}").unwrap();
        assert_eq!(config, MortgageConfig::default());
    }

    #[test]
    fn test_negative_term_rejected_by_parser() {
        assert!(MortgageConfig::from_json_str(r#"{"term_months": -12}"#).is_err());
    }

    #[test]
    fn test_mortgage_insurance_threshold_is_strict() {
        let mut config = MortgageConfig {
            total_price: 800_000.0,
            down_payment: 160_000.0,
            ..Default::default()
        };
        assert!(!config.requires_mortgage_insurance());

        config.down_payment = 159_999.0;
        assert!(config.requires_mortgage_insurance());

        config.mortgage_insurance_enabled = false;
        assert!(!config.requires_mortgage_insurance());
    }

    #[test]
    fn test_loan_terms() {
        let config = MortgageConfig {
            extra_principal: 50.0,
            ..Default::default()
        };
        let terms = config.loan_terms();
        assert_eq!(terms.loan_amount, 400_000.0);
        assert_eq!(terms.annual_rate, 0.05);
        assert_eq!(terms.term_months, 360);
        assert_eq!(terms.extra_principal, 50.0);
    }
}
