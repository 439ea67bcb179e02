//! Monthly housing payment calculation
//!
//! Two calling conventions share the same pure [`calculate`] operation:
//! - [`MortgageCalculator`], a handle whose configuration is adjusted in place
//!   before each call
//! - [`calculate_payment`], a stateless call taking every input as an
//!   optional positional argument

mod config;
mod summary;

pub use config::{
    MortgageConfig, DEFAULT_DOWN_PAYMENT, DEFAULT_EXTRA_PRINCIPAL, DEFAULT_INSURANCE_RATE,
    DEFAULT_INTEREST_RATE, DEFAULT_MORTGAGE_INSURANCE_ENABLED, DEFAULT_MORTGAGE_INSURANCE_RATE,
    DEFAULT_MORTGAGE_INSURANCE_THRESHOLD, DEFAULT_PRICE, DEFAULT_TAX_RATE, DEFAULT_TERM_MONTHS,
};
pub use summary::{calculate, PaymentSummary};

use crate::error::Result;

/// Calculator handle holding an adjustable configuration
///
/// # Example
/// ```
/// use mortgage_calculator::MortgageCalculator;
///
/// let mut calculator = MortgageCalculator::new();
/// calculator.config.total_price = 800_000.0;
/// calculator.config.down_payment = 160_000.0;
///
/// let summary = calculator.calculate_payment().unwrap();
/// assert_eq!(summary.loan_amount, 640_000.0);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MortgageCalculator {
    pub config: MortgageConfig,
}

impl MortgageCalculator {
    /// Create a calculator with the default configuration
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: MortgageConfig) -> Self {
        Self { config }
    }

    /// Calculate using the configuration as it stands at the time of the call
    pub fn calculate_payment(&self) -> Result<PaymentSummary> {
        calculate(&self.config)
    }
}

/// Create a calculator handle with the default configuration
pub fn create_mortgage_calculator() -> MortgageCalculator {
    MortgageCalculator::new()
}

/// Stateless payment calculation
///
/// Each argument left as `None` takes its default value.
#[allow(clippy::too_many_arguments)]
pub fn calculate_payment(
    total_price: Option<f64>,
    down_payment: Option<f64>,
    interest_rate: Option<f64>,
    term_months: Option<u32>,
    tax_rate: Option<f64>,
    insurance_rate: Option<f64>,
    mortgage_insurance_rate: Option<f64>,
    mortgage_insurance_enabled: Option<bool>,
    mortgage_insurance_threshold: Option<f64>,
    extra_principal: Option<f64>,
) -> Result<PaymentSummary> {
    let config = MortgageConfig {
        total_price: total_price.unwrap_or(DEFAULT_PRICE),
        down_payment: down_payment.unwrap_or(DEFAULT_DOWN_PAYMENT),
        interest_rate: interest_rate.unwrap_or(DEFAULT_INTEREST_RATE),
        term_months: term_months.unwrap_or(DEFAULT_TERM_MONTHS),
        tax_rate: tax_rate.unwrap_or(DEFAULT_TAX_RATE),
        insurance_rate: insurance_rate.unwrap_or(DEFAULT_INSURANCE_RATE),
        mortgage_insurance_rate: mortgage_insurance_rate.unwrap_or(DEFAULT_MORTGAGE_INSURANCE_RATE),
        mortgage_insurance_enabled: mortgage_insurance_enabled
            .unwrap_or(DEFAULT_MORTGAGE_INSURANCE_ENABLED),
        mortgage_insurance_threshold: mortgage_insurance_threshold
            .unwrap_or(DEFAULT_MORTGAGE_INSURANCE_THRESHOLD),
        extra_principal: extra_principal.unwrap_or(DEFAULT_EXTRA_PRINCIPAL),
    };

    calculate(&config)
}
