//! Mortgage Calculator - Fixed-rate payment sizing and amortization schedules
//!
//! This library provides:
//! - Level monthly payment sizing rounded up to the next penny
//! - Month-by-month amortization schedules with extra principal payments
//! - Monthly housing payment breakdowns (P&I, tax, insurance, PMI)
//! - Batch scenario comparison and CSV schedule export

pub mod amortization;
pub mod calculator;
pub mod error;
pub mod export;
pub mod scenario;

// Re-export commonly used types
pub use amortization::{
    generate_schedule, monthly_payment, next_penny, payment_schedule, round_penny, LoanTerms,
    PaymentRecord, ScheduleSummary,
};
pub use calculator::{
    calculate, calculate_payment, create_mortgage_calculator, MortgageCalculator, MortgageConfig,
    PaymentSummary,
};
pub use error::{MortgageError, Result};
pub use scenario::{ExtraPrincipalComparison, ScenarioRunner};
