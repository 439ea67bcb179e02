//! Month-by-month amortization schedule generation

use log::{debug, trace, warn};
use serde::{Deserialize, Serialize};

use super::payment::{monthly_payment, monthly_rate};
use super::record::PaymentRecord;
use super::rounding::round_penny;
use crate::error::Result;

/// Upper bound on up-front schedule allocation (100 years)
const MAX_PREALLOCATED_MONTHS: u32 = 1200;

/// Inputs to the schedule generator
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LoanTerms {
    /// Amount borrowed
    pub loan_amount: f64,

    /// Nominal annual rate as a fraction (0.05 = 5%)
    pub annual_rate: f64,

    /// Loan term in months
    pub term_months: u32,

    /// Extra principal paid on top of every scheduled payment
    #[serde(default)]
    pub extra_principal: f64,
}

impl LoanTerms {
    pub fn new(loan_amount: f64, annual_rate: f64, term_months: u32) -> Self {
        Self {
            loan_amount,
            annual_rate,
            term_months,
            extra_principal: 0.0,
        }
    }

    /// Same terms with a recurring extra principal payment
    pub fn with_extra_principal(mut self, extra_principal: f64) -> Self {
        self.extra_principal = extra_principal;
        self
    }
}

/// Generate the full amortization schedule for the given terms
///
/// Every month the interest is recomputed from the cent-rounded prior balance,
/// so the schedule has to be simulated step by step. Generation stops at the
/// payoff month or after `term_months` records, whichever comes first; a
/// balance left over after the term is reported in the last record rather than
/// treated as an error.
pub fn payment_schedule(terms: &LoanTerms) -> Result<Vec<PaymentRecord>> {
    let fixed_payment = monthly_payment(terms.loan_amount, terms.annual_rate, terms.term_months)?;
    let rate = monthly_rate(terms.annual_rate);

    let mut remaining_balance = round_penny(terms.loan_amount);
    let mut cumulative_interest = 0.0;
    let mut cumulative_payments = 0.0;
    let mut schedule = Vec::with_capacity(terms.term_months.min(MAX_PREALLOCATED_MONTHS) as usize);

    for index in 1..=terms.term_months {
        if remaining_balance <= 0.0 {
            break;
        }

        let interest_portion = round_penny(remaining_balance * rate);
        let mut principal_portion = round_penny(fixed_payment - interest_portion + terms.extra_principal);

        if remaining_balance > principal_portion {
            remaining_balance = round_penny(remaining_balance - principal_portion);
        } else {
            // Payoff month: retire exactly what is left
            principal_portion = remaining_balance;
            remaining_balance = 0.0;
        }

        let total_payment = interest_portion + principal_portion;
        cumulative_interest += interest_portion;
        cumulative_payments += total_payment;

        trace!(
            "Payment {index}: interest={interest_portion:.2} principal={principal_portion:.2} balance={remaining_balance:.2}"
        );

        schedule.push(PaymentRecord {
            index,
            interest_portion,
            principal_portion,
            total_payment,
            cumulative_interest,
            cumulative_payments,
            remaining_balance,
        });
    }

    if remaining_balance > 0.0 {
        warn!(
            "Schedule ended after {} payments with {:.2} outstanding",
            schedule.len(),
            remaining_balance
        );
    } else {
        debug!(
            "Loan of {:.2} retired in {} of {} months",
            terms.loan_amount,
            schedule.len(),
            terms.term_months
        );
    }

    Ok(schedule)
}

/// Generate a schedule from individual loan parameters
pub fn generate_schedule(
    loan_amount: f64,
    annual_rate: f64,
    term_months: u32,
    extra_principal: f64,
) -> Result<Vec<PaymentRecord>> {
    payment_schedule(&LoanTerms::new(loan_amount, annual_rate, term_months).with_extra_principal(extra_principal))
}
