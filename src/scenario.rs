//! Scenario runner for batch payment calculations
//!
//! Holds a base configuration and evaluates variations of it, such as
//! different extra principal amounts, in parallel.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::calculator::{calculate, MortgageConfig, PaymentSummary};
use crate::error::Result;

/// Effect of one extra principal amount relative to paying none
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ExtraPrincipalComparison {
    pub extra_principal: f64,
    pub payment_count: u32,
    /// Months shaved off the zero-extra schedule
    pub months_saved: u32,
    pub total_interest: f64,
    pub interest_saved: f64,
}

/// Batch calculator over a base configuration
///
/// # Example
/// ```
/// use mortgage_calculator::{MortgageConfig, ScenarioRunner};
///
/// let runner = ScenarioRunner::new(MortgageConfig::default());
/// let comparisons = runner.compare_extra_principal(&[100.0, 500.0]).unwrap();
/// assert!(comparisons[1].months_saved > comparisons[0].months_saved);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ScenarioRunner {
    base_config: MortgageConfig,
}

impl ScenarioRunner {
    pub fn new(base_config: MortgageConfig) -> Self {
        Self { base_config }
    }

    /// Calculate a single configuration
    pub fn run(&self, config: &MortgageConfig) -> Result<PaymentSummary> {
        calculate(config)
    }

    /// Calculate the base configuration
    pub fn run_base(&self) -> Result<PaymentSummary> {
        calculate(&self.base_config)
    }

    /// Calculate many configurations in parallel, results in input order
    pub fn run_scenarios(&self, configs: &[MortgageConfig]) -> Result<Vec<PaymentSummary>> {
        configs.par_iter().map(calculate).collect()
    }

    /// Compare schedules for several extra principal amounts against a
    /// baseline with no extra principal
    pub fn compare_extra_principal(&self, extras: &[f64]) -> Result<Vec<ExtraPrincipalComparison>> {
        let baseline = calculate(&self.with_extra_principal(0.0))?.schedule_summary();

        let configs: Vec<MortgageConfig> = extras
            .iter()
            .map(|&extra| self.with_extra_principal(extra))
            .collect();

        let results = self.run_scenarios(&configs)?;

        Ok(results
            .iter()
            .zip(extras)
            .map(|(result, &extra_principal)| {
                let summary = result.schedule_summary();
                ExtraPrincipalComparison {
                    extra_principal,
                    payment_count: summary.payment_count,
                    months_saved: baseline.payment_count.saturating_sub(summary.payment_count),
                    total_interest: summary.total_interest,
                    interest_saved: baseline.total_interest - summary.total_interest,
                }
            })
            .collect())
    }

    pub fn base_config(&self) -> &MortgageConfig {
        &self.base_config
    }

    pub fn base_config_mut(&mut self) -> &mut MortgageConfig {
        &mut self.base_config
    }

    fn with_extra_principal(&self, extra_principal: f64) -> MortgageConfig {
        MortgageConfig {
            extra_principal,
            ..self.base_config
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MortgageError;

    #[test]
    fn test_run_scenarios_preserves_order() {
        let runner = ScenarioRunner::default();

        let configs: Vec<_> = [0.03, 0.05, 0.07]
            .iter()
            .map(|&rate| MortgageConfig {
                interest_rate: rate,
                ..Default::default()
            })
            .collect();

        let results = runner.run_scenarios(&configs).unwrap();
        assert_eq!(results.len(), 3);

        // Higher rate means a higher monthly payment
        assert!(results[0].principal_and_interest < results[1].principal_and_interest);
        assert!(results[1].principal_and_interest < results[2].principal_and_interest);
        assert_eq!(results[1], runner.run_base().unwrap());
    }

    #[test]
    fn test_compare_extra_principal() {
        let runner = ScenarioRunner::new(MortgageConfig::default());
        let comparisons = runner
            .compare_extra_principal(&[0.0, 100.0, 250.0, 500.0])
            .unwrap();

        let months: Vec<u32> = comparisons.iter().map(|c| c.payment_count).collect();
        assert_eq!(months, vec![360, 326, 286, 239]);

        assert_eq!(comparisons[0].months_saved, 0);
        assert_eq!(comparisons[0].interest_saved, 0.0);
        assert_eq!(comparisons[3].months_saved, 121);
        assert!(comparisons.windows(2).all(|w| w[1].interest_saved > w[0].interest_saved));
    }

    #[test]
    fn test_failure_aborts_batch() {
        let runner = ScenarioRunner::default();
        let configs = vec![
            MortgageConfig::default(),
            MortgageConfig {
                term_months: 0,
                ..Default::default()
            },
        ];

        assert!(matches!(
            runner.run_scenarios(&configs),
            Err(MortgageError::InvalidInput { .. })
        ));
    }
}
