//! Monthly housing payment breakdown

use log::debug;
use serde::{Deserialize, Serialize};

use super::config::MortgageConfig;
use crate::amortization::{
    payment_schedule, round_penny, PaymentRecord, ScheduleSummary, MONTHS_PER_YEAR,
};
use crate::error::Result;

/// Result of a mortgage payment calculation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentSummary {
    pub loan_amount: f64,

    /// First month's principal and interest, including any extra principal
    pub principal_and_interest: f64,

    /// Monthly property tax.
    ///
    /// Not rounded to the cent, unlike every other amount here. Kept that way
    /// so results stay comparable with existing consumers.
    pub tax: f64,

    /// Monthly homeowner's insurance
    pub insurance: f64,

    pub total: f64,
    pub term_months: u32,
    pub payment_schedule: Vec<PaymentRecord>,

    /// Monthly mortgage insurance (PMI), zero when not required
    pub mortgage_insurance: f64,
}

impl PaymentSummary {
    /// Totals over the amortization schedule
    pub fn schedule_summary(&self) -> ScheduleSummary {
        ScheduleSummary::from_schedule(&self.payment_schedule)
    }
}

/// Calculate the monthly payment breakdown and amortization schedule
///
/// Fails only when the loan term is zero.
pub fn calculate(config: &MortgageConfig) -> Result<PaymentSummary> {
    let loan_amount = config.loan_amount();
    let payment_schedule = payment_schedule(&config.loan_terms())?;

    let principal_and_interest = payment_schedule
        .first()
        .map_or(0.0, |record| record.total_payment);

    let mortgage_insurance = if config.requires_mortgage_insurance() {
        round_penny(loan_amount * config.mortgage_insurance_rate / MONTHS_PER_YEAR)
    } else {
        0.0
    };

    let tax = config.total_price * config.tax_rate / MONTHS_PER_YEAR;
    let insurance = round_penny(config.total_price * config.insurance_rate / MONTHS_PER_YEAR);
    let total = principal_and_interest + tax + insurance + mortgage_insurance;

    debug!(
        "Monthly payment for {loan_amount:.2} loan: P&I={principal_and_interest:.2} tax={tax:.2} \
         insurance={insurance:.2} PMI={mortgage_insurance:.2} total={total:.2}"
    );

    Ok(PaymentSummary {
        loan_amount,
        principal_and_interest,
        tax,
        insurance,
        total,
        term_months: config.term_months,
        payment_schedule,
        mortgage_insurance,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MortgageError;
    use approx::assert_abs_diff_eq;

    fn reference_config() -> MortgageConfig {
        MortgageConfig {
            total_price: 800_000.0,
            down_payment: 160_000.0,
            interest_rate: 0.045,
            term_months: 360,
            tax_rate: 0.012,
            insurance_rate: 0.0013,
            mortgage_insurance_rate: 0.010,
            mortgage_insurance_enabled: true,
            mortgage_insurance_threshold: 0.2,
            extra_principal: 100.0,
        }
    }

    #[test]
    fn test_reference_scenario() {
        let summary = calculate(&reference_config()).unwrap();

        assert_eq!(summary.loan_amount, 640_000.0);
        assert_abs_diff_eq!(summary.principal_and_interest, 3342.79, epsilon = 1e-9);
        assert_abs_diff_eq!(summary.tax, 800.0, epsilon = 1e-9);
        assert_eq!(summary.insurance, 86.67);
        assert_abs_diff_eq!(summary.total, 4229.46, epsilon = 1e-9);
        assert_eq!(summary.term_months, 360);
        assert_eq!(summary.payment_schedule.len(), 339);
        assert_eq!(summary.mortgage_insurance, 0.0);
    }

    #[test]
    fn test_default_configuration() {
        let summary = calculate(&MortgageConfig::default()).unwrap();

        assert_eq!(summary.loan_amount, 400_000.0);
        assert_abs_diff_eq!(summary.principal_and_interest, 2147.29, epsilon = 1e-9);
        assert_abs_diff_eq!(summary.tax, 525.0, epsilon = 1e-9);
        assert_eq!(summary.insurance, 58.33);
        assert_abs_diff_eq!(summary.total, 2730.62, epsilon = 1e-9);
        assert_eq!(summary.payment_schedule.len(), 360);
        assert_eq!(summary.mortgage_insurance, 0.0);
    }

    #[test]
    fn test_mortgage_insurance_below_threshold() {
        let config = MortgageConfig {
            down_payment: 50_000.0,
            ..Default::default()
        };
        let summary = calculate(&config).unwrap();

        assert_eq!(summary.mortgage_insurance, 412.5);
        assert_abs_diff_eq!(
            summary.total,
            summary.principal_and_interest + summary.tax + summary.insurance + 412.5,
            epsilon = 1e-9
        );
    }

    #[test]
    fn test_mortgage_insurance_disabled() {
        let config = MortgageConfig {
            down_payment: 50_000.0,
            mortgage_insurance_enabled: false,
            ..Default::default()
        };
        assert_eq!(calculate(&config).unwrap().mortgage_insurance, 0.0);
    }

    #[test]
    fn test_tax_is_not_rounded() {
        let config = MortgageConfig {
            total_price: 333_333.0,
            ..Default::default()
        };
        let summary = calculate(&config).unwrap();
        assert_abs_diff_eq!(summary.tax, 333_333.0 * 0.0126 / 12.0, epsilon = 1e-12);
        assert_ne!(summary.tax, round_penny(summary.tax));
    }

    #[test]
    fn test_fully_paid_property_has_no_schedule() {
        let config = MortgageConfig {
            down_payment: 500_000.0,
            ..Default::default()
        };
        let summary = calculate(&config).unwrap();

        assert!(summary.payment_schedule.is_empty());
        assert_eq!(summary.principal_and_interest, 0.0);
        assert_eq!(summary.mortgage_insurance, 0.0);
    }

    #[test]
    fn test_zero_term_fails() {
        let config = MortgageConfig {
            term_months: 0,
            ..Default::default()
        };
        assert!(matches!(
            calculate(&config),
            Err(MortgageError::InvalidInput { .. })
        ));
    }

    #[test]
    fn test_identical_inputs_identical_results() {
        let config = reference_config();
        assert_eq!(calculate(&config).unwrap(), calculate(&config).unwrap());
    }

    #[test]
    fn test_schedule_summary() {
        let summary = calculate(&reference_config()).unwrap();
        let totals = summary.schedule_summary();

        assert_eq!(totals.payment_count, 339);
        assert!(totals.fully_amortized);
        assert_abs_diff_eq!(totals.total_interest, 490_389.01, epsilon = 1e-6);
    }
}
