//! Schedule output structures

use serde::{Deserialize, Serialize};

/// A single month of an amortization schedule
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PaymentRecord {
    /// Payment number (1-indexed)
    pub index: u32,

    // Per-month amounts
    pub interest_portion: f64,
    pub principal_portion: f64,
    pub total_payment: f64,

    // Running totals including this month
    pub cumulative_interest: f64,
    pub cumulative_payments: f64,

    /// Balance after this payment is applied
    pub remaining_balance: f64,
}

/// Totals derived from a payment schedule
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScheduleSummary {
    pub payment_count: u32,
    pub total_interest: f64,
    pub total_payments: f64,
    pub final_balance: f64,
    /// Whether the balance reached zero within the schedule
    pub fully_amortized: bool,
}

impl ScheduleSummary {
    /// Summarize a schedule from its last record
    ///
    /// An empty schedule describes a loan with nothing to repay.
    pub fn from_schedule(schedule: &[PaymentRecord]) -> Self {
        match schedule.last() {
            Some(last) => Self {
                payment_count: last.index,
                total_interest: last.cumulative_interest,
                total_payments: last.cumulative_payments,
                final_balance: last.remaining_balance,
                fully_amortized: last.remaining_balance <= 0.0,
            },
            None => Self {
                payment_count: 0,
                total_interest: 0.0,
                total_payments: 0.0,
                final_balance: 0.0,
                fully_amortized: true,
            },
        }
    }
}
