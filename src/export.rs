//! CSV export of amortization schedules

use std::fs::File;
use std::io::Write;
use std::path::Path;

use csv::Writer;

use crate::amortization::PaymentRecord;
use crate::error::Result;

const HEADER: [&str; 7] = [
    "Payment",
    "Interest",
    "Principal",
    "TotalPayment",
    "CumulativeInterest",
    "CumulativePayments",
    "Balance",
];

/// Write a schedule as CSV, one row per payment
pub fn write_schedule_csv<W: Write>(writer: W, schedule: &[PaymentRecord]) -> Result<()> {
    let mut csv_writer = Writer::from_writer(writer);
    csv_writer.write_record(HEADER)?;

    for record in schedule {
        csv_writer.write_record(&[
            record.index.to_string(),
            format!("{:.2}", record.interest_portion),
            format!("{:.2}", record.principal_portion),
            format!("{:.2}", record.total_payment),
            format!("{:.2}", record.cumulative_interest),
            format!("{:.2}", record.cumulative_payments),
            format!("{:.2}", record.remaining_balance),
        ])?;
    }

    csv_writer.flush()?;
    Ok(())
}

/// Write a schedule to a CSV file
pub fn write_schedule_csv_path<P: AsRef<Path>>(path: P, schedule: &[PaymentRecord]) -> Result<()> {
    let file = File::create(path)?;
    write_schedule_csv(file, schedule)
}
