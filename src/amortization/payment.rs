//! Level monthly payment sizing

use log::debug;

use super::rounding::next_penny;
use crate::error::{MortgageError, Result};

/// Months per year used to convert annual rates
pub const MONTHS_PER_YEAR: f64 = 12.0;

/// Monthly rate for an annual nominal rate
pub fn monthly_rate(annual_rate: f64) -> f64 {
    annual_rate / MONTHS_PER_YEAR
}

/// Calculate the fixed monthly principal and interest payment
///
/// Uses the standard annuity formula at `annual_rate / 12` and rounds the
/// result up to the next penny. A zero rate falls back to straight-line
/// repayment of `loan_amount / term_months`, also rounded up. The same
/// fallback applies when the rate is too small to move `(1 + rate)^n` off 1.
///
/// Fails with [`MortgageError::InvalidInput`] when `term_months` is zero.
pub fn monthly_payment(loan_amount: f64, annual_rate: f64, term_months: u32) -> Result<f64> {
    if term_months == 0 {
        return Err(MortgageError::invalid_input(
            "term_months",
            "loan term must be at least one month",
        ));
    }

    let n = f64::from(term_months);

    let rate = monthly_rate(annual_rate);
    let growth = (1.0 + rate).powf(n);

    if annual_rate == 0.0 || growth - 1.0 == 0.0 {
        let payment = next_penny(loan_amount / n);
        debug!("Straight-line payment for {loan_amount} over {term_months} months: {payment}");
        return Ok(payment);
    }

    // For very long terms the annuity factor overflows; its limit is interest only
    let payment = if growth.is_infinite() {
        next_penny(rate * loan_amount)
    } else {
        next_penny(rate * loan_amount * growth / (growth - 1.0))
    };

    debug!("Level payment for {loan_amount} at {annual_rate} over {term_months} months: {payment}");
    Ok(payment)
}
