//! Mortgage Calculator CLI
//!
//! Command-line interface for monthly payment breakdowns and amortization schedules

use anyhow::{Context, Result};
use clap::Parser;
use mortgage_calculator::{
    calculate, export::write_schedule_csv_path, MortgageConfig, PaymentSummary, ScenarioRunner,
};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "mortgage-calculator", version, about = "Fixed-rate mortgage payment calculator")]
struct Args {
    /// JSON file with a base configuration (omitted fields use defaults)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Purchase price
    #[arg(long)]
    price: Option<f64>,

    #[arg(long)]
    down_payment: Option<f64>,

    /// Annual interest rate as a fraction (0.05 = 5%)
    #[arg(long)]
    rate: Option<f64>,

    /// Loan term in months
    #[arg(long)]
    months: Option<u32>,

    /// Annual property tax rate
    #[arg(long)]
    tax_rate: Option<f64>,

    /// Annual homeowner's insurance rate
    #[arg(long)]
    insurance_rate: Option<f64>,

    /// Annual mortgage insurance (PMI) rate
    #[arg(long)]
    pmi_rate: Option<f64>,

    /// Enable or disable mortgage insurance
    #[arg(long)]
    pmi_enabled: Option<bool>,

    /// Down payment fraction below which PMI applies
    #[arg(long)]
    pmi_threshold: Option<f64>,

    /// Extra principal paid every month
    #[arg(long)]
    extra_principal: Option<f64>,

    /// Print the first N schedule rows
    #[arg(long, default_value_t = 12)]
    schedule: usize,

    /// Write the full schedule to a CSV file
    #[arg(long)]
    csv: Option<PathBuf>,

    /// Print the summary as JSON instead of a table
    #[arg(long)]
    json: bool,

    /// Compare payoff for these extra principal amounts
    #[arg(long, num_args = 1..)]
    compare_extra: Vec<f64>,
}

impl Args {
    fn into_config(self) -> Result<(MortgageConfig, Options)> {
        let mut config = match &self.config {
            Some(path) => MortgageConfig::from_json_path(path)
                .with_context(|| format!("Failed to load config from {}", path.display()))?,
            None => MortgageConfig::default(),
        };

        if let Some(v) = self.price {
            config.total_price = v;
        }
        if let Some(v) = self.down_payment {
            config.down_payment = v;
        }
        if let Some(v) = self.rate {
            config.interest_rate = v;
        }
        if let Some(v) = self.months {
            config.term_months = v;
        }
        if let Some(v) = self.tax_rate {
            config.tax_rate = v;
        }
        if let Some(v) = self.insurance_rate {
            config.insurance_rate = v;
        }
        if let Some(v) = self.pmi_rate {
            config.mortgage_insurance_rate = v;
        }
        if let Some(v) = self.pmi_enabled {
            config.mortgage_insurance_enabled = v;
        }
        if let Some(v) = self.pmi_threshold {
            config.mortgage_insurance_threshold = v;
        }
        if let Some(v) = self.extra_principal {
            config.extra_principal = v;
        }

        let options = Options {
            schedule_rows: self.schedule,
            csv: self.csv,
            json: self.json,
            compare_extra: self.compare_extra,
        };
        Ok((config, options))
    }
}

/// Output options left after the configuration is resolved
struct Options {
    schedule_rows: usize,
    csv: Option<PathBuf>,
    json: bool,
    compare_extra: Vec<f64>,
}

fn main() -> Result<()> {
    env_logger::init();

    let (config, options) = Args::parse().into_config()?;
    let summary = calculate(&config).context("Payment calculation failed")?;

    if options.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        print_summary(&config, &summary);
        print_schedule(&summary, options.schedule_rows);
    }

    if let Some(path) = &options.csv {
        write_schedule_csv_path(path, &summary.payment_schedule)
            .with_context(|| format!("Failed to write schedule to {}", path.display()))?;
        println!("\nFull schedule written to: {}", path.display());
    }

    if !options.compare_extra.is_empty() {
        print_comparison(config, &options.compare_extra)?;
    }

    Ok(())
}

fn print_summary(config: &MortgageConfig, summary: &PaymentSummary) {
    println!("Mortgage Calculator v{}", env!("CARGO_PKG_VERSION"));
    println!("========================\n");

    println!("  Price:          ${:.2}", config.total_price);
    println!("  Down Payment:   ${:.2} ({:.1}%)", config.down_payment, config.down_payment_percentage() * 100.0);
    println!("  Loan Amount:    ${:.2}", summary.loan_amount);
    println!("  Rate:           {:.3}%", config.interest_rate * 100.0);
    println!("  Term:           {} months", summary.term_months);
    println!();

    println!("Monthly Payment:");
    println!("  Principal & Interest: ${:>10.2}", summary.principal_and_interest);
    println!("  Property Tax:         ${:>10.2}", summary.tax);
    println!("  Insurance:            ${:>10.2}", summary.insurance);
    println!("  Mortgage Insurance:   ${:>10.2}", summary.mortgage_insurance);
    println!("  Total:                ${:>10.2}", summary.total);

    let totals = summary.schedule_summary();
    println!("\nSchedule:");
    println!("  Payments:       {}", totals.payment_count);
    println!("  Total Interest: ${:.2}", totals.total_interest);
    println!("  Total Paid:     ${:.2}", totals.total_payments);
    if !totals.fully_amortized {
        println!("  Outstanding:    ${:.2}", totals.final_balance);
    }
}

fn print_schedule(summary: &PaymentSummary, rows: usize) {
    if rows == 0 || summary.payment_schedule.is_empty() {
        return;
    }

    println!();
    println!("{:>5} {:>12} {:>12} {:>12} {:>14} {:>14}",
        "Pmt", "Interest", "Principal", "Payment", "CumInterest", "Balance");
    println!("{}", "-".repeat(74));

    for record in summary.payment_schedule.iter().take(rows) {
        println!("{:>5} {:>12.2} {:>12.2} {:>12.2} {:>14.2} {:>14.2}",
            record.index,
            record.interest_portion,
            record.principal_portion,
            record.total_payment,
            record.cumulative_interest,
            record.remaining_balance,
        );
    }

    if summary.payment_schedule.len() > rows {
        println!("... ({} more payments)", summary.payment_schedule.len() - rows);
    }
}

fn print_comparison(config: MortgageConfig, extras: &[f64]) -> Result<()> {
    let runner = ScenarioRunner::new(config);
    let comparisons = runner.compare_extra_principal(extras)?;

    println!("\nExtra Principal Comparison:");
    println!("{:>10} {:>9} {:>8} {:>16} {:>16}", "Extra", "Payments", "Saved", "TotalInterest", "InterestSaved");
    println!("{}", "-".repeat(63));
    for c in &comparisons {
        println!("{:>10.2} {:>9} {:>8} {:>16.2} {:>16.2}",
            c.extra_principal, c.payment_count, c.months_saved, c.total_interest, c.interest_saved);
    }

    Ok(())
}
