//! Fixed-rate amortization: payment sizing, penny rounding and schedules

mod payment;
mod record;
mod rounding;
mod schedule;

pub use payment::{monthly_payment, monthly_rate, MONTHS_PER_YEAR};
pub use record::{PaymentRecord, ScheduleSummary};
pub use rounding::{next_penny, round_penny};
pub use schedule::{generate_schedule, payment_schedule, LoanTerms};
